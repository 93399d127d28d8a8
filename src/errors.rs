//! Error categories shared by every storefront failure.

/// How a failure is classified for the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid input; blocks progression, no network side effect.
    Validation,

    /// A non-success status or malformed payload from an upstream service.
    UpstreamUnavailable,

    /// Required configuration is absent; detected before any network call.
    ConfigurationMissing,

    /// The requested record does not exist.
    NotFound,
}

/// How a failure notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Transient error notification.
    Error,

    /// Informational message.
    Info,
}

impl ErrorCategory {
    /// Notification severity for this category.
    pub fn severity(self) -> Severity {
        match self {
            Self::NotFound => Severity::Info,
            Self::Validation | Self::UpstreamUnavailable | Self::ConfigurationMissing => {
                Severity::Error
            }
        }
    }
}

/// A failure that can be reported to the shopper.
pub trait Categorized {
    /// The category of this failure.
    fn category(&self) -> ErrorCategory;

    /// Text for the transient notification shown to the shopper.
    fn user_message(&self) -> String;
}
