//! Checkout form validation
//!
//! Raw form input is validated once into [`CustomerDetails`]; everything downstream of
//! the form only ever sees the typed, validated result.

use std::fmt;

/// A form field of the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Email address
    Email,
    /// Street address
    Address,
    /// City
    City,
    /// Country
    Country,
    /// Postal code
    PostalCode,
}

impl Field {
    /// Form key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::PostalCode => "postalCode",
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Failing field
    pub field: Field,

    /// Message shown next to the field
    pub message: &'static str,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// The error for a given field, if it failed.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|error| error.message).collect();

        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Checkout form input as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Street address
    pub address: String,

    /// Apartment, suite or unit, if any
    pub apartment: Option<String>,

    /// City
    pub city: String,

    /// Country
    pub country: String,

    /// Postal code
    pub postal_code: String,

    /// Whether the shopper asked to save these details
    pub save_info: bool,
}

/// Validated customer details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Street address
    pub address: String,

    /// Apartment, suite or unit; `None` when left empty
    pub apartment: Option<String>,

    /// City
    pub city: String,

    /// Country
    pub country: String,

    /// Postal code
    pub postal_code: String,

    /// Whether the shopper asked to save these details
    pub save_info: bool,
}

impl CheckoutForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every failing field when any rule is violated.
    pub fn validate(self) -> Result<CustomerDetails, FieldErrors> {
        let checks = [
            (Field::FirstName, min_chars(&self.first_name, 2), "First name is required"),
            (Field::LastName, min_chars(&self.last_name, 2), "Last name is required"),
            (Field::Email, is_email(&self.email), "Invalid email address"),
            (Field::Address, min_chars(&self.address, 5), "Address is required"),
            (Field::City, min_chars(&self.city, 2), "City is required"),
            (Field::Country, min_chars(&self.country, 2), "Country is required"),
            (Field::PostalCode, min_chars(&self.postal_code, 5), "Postal code is required"),
        ];

        let errors: Vec<FieldError> = checks
            .into_iter()
            .filter(|(_, valid, _)| !valid)
            .map(|(field, _, message)| FieldError { field, message })
            .collect();

        if !errors.is_empty() {
            return Err(FieldErrors(errors));
        }

        Ok(CustomerDetails {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            apartment: self.apartment.filter(|apartment| !apartment.is_empty()),
            city: self.city,
            country: self.country,
            postal_code: self.postal_code,
            save_info: self.save_info,
        })
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            apartment: Some(String::new()),
            city: "London".to_string(),
            country: "GB".to_string(),
            postal_code: "NW1 6XE".to_string(),
            save_info: true,
        }
    }

    #[test]
    fn valid_form_produces_customer_details() -> TestResult {
        let customer = valid_form().validate()?;

        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(customer.apartment, None);
        assert!(customer.save_info);

        Ok(())
    }

    #[test]
    fn empty_form_reports_every_required_field_in_order() {
        let result = CheckoutForm::default().validate();

        let Err(errors) = result else {
            panic!("expected validation errors");
        };

        let fields: Vec<Field> = errors.0.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            [
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Address,
                Field::City,
                Field::Country,
                Field::PostalCode,
            ]
        );
    }

    #[test]
    fn short_postal_code_is_rejected() {
        let form = CheckoutForm {
            postal_code: "1234".to_string(),
            ..valid_form()
        };

        let errors = form.validate().err();

        assert_eq!(
            errors.as_ref().and_then(|e| e.get(Field::PostalCode)).map(|e| e.message),
            Some("Postal code is required")
        );
        assert_eq!(errors.map(|e| e.len()), Some(1));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let form = CheckoutForm {
            first_name: "Ñ".to_string(),
            ..valid_form()
        };

        let errors = form.validate().err();

        assert_eq!(
            errors.and_then(|e| e.get(Field::FirstName).cloned()).map(|e| e.message),
            Some("First name is required")
        );
    }

    #[test]
    fn email_syntax() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email("a b@c.co"));
        assert!(!is_email("a@b..co"));
    }
}
