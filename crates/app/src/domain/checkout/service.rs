//! Checkout submission pipeline.
//!
//! A submission runs validate, compose, persist, authorize and redirect in order. A
//! failing step ends the submission; an order persisted before a payment failure is left
//! in place and logged.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use jiff::Timestamp;
use storefront::{
    cart::Cart,
    checkout::CustomerDetails,
    orders::{NewOrder, OrderId},
    pricing::PricingPolicy,
    shipping::ShippingRate,
};
use tracing::{error, info, warn};

use crate::domain::{
    checkout::CheckoutError,
    orders::OrdersRepository,
    payments::{PaymentSessionRequest, PaymentSessionsClient},
};

/// Everything the checkout page hands to the pipeline.
#[derive(Debug, Clone)]
pub struct CheckoutSubmission {
    /// Validated form values
    pub customer: CustomerDetails,

    /// Cart at submission time
    pub cart: Cart,

    /// The shopper's chosen rate, if any
    pub selected_rate: Option<ShippingRate>,
}

/// Hand-off to the payment gateway's hosted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// Persisted order id
    pub order_id: OrderId,

    /// Payment session to redirect to
    pub session_id: String,

    /// Gateway key for the client-side redirect
    pub publishable_key: String,
}

/// Submits checkouts. Clones share one in-flight flag.
#[derive(Clone)]
pub struct CheckoutService {
    orders: Arc<dyn OrdersRepository>,
    payments: Arc<dyn PaymentSessionsClient>,
    pricing: PricingPolicy,
    publishable_key: String,
    in_flight: Arc<AtomicBool>,
}

impl CheckoutService {
    /// Create a checkout pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingPublishableKey`] when `publishable_key` is blank.
    pub fn new(
        orders: Arc<dyn OrdersRepository>,
        payments: Arc<dyn PaymentSessionsClient>,
        pricing: PricingPolicy,
        publishable_key: &str,
    ) -> Result<Self, CheckoutError> {
        let publishable_key = publishable_key.trim();

        if publishable_key.is_empty() {
            return Err(CheckoutError::MissingPublishableKey);
        }

        Ok(Self {
            orders,
            payments,
            pricing,
            publishable_key: publishable_key.to_string(),
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Submit an order and open its payment session.
    ///
    /// Only one submission runs at a time; a concurrent call fails straight away.
    ///
    /// # Errors
    ///
    /// Returns the [`CheckoutError`] of the first failing step.
    pub async fn submit(
        &self,
        submission: CheckoutSubmission,
    ) -> Result<CheckoutRedirect, CheckoutError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("checkout submission rejected: already in flight");

            return Err(CheckoutError::SubmissionInFlight);
        };

        let CheckoutSubmission {
            customer,
            cart,
            selected_rate,
        } = submission;

        let rate = selected_rate.ok_or(CheckoutError::NoRateSelected)?;

        let order = NewOrder::compose(customer, &cart, &rate, &self.pricing, Timestamp::now())?;

        info!(
            rate_id = %rate.rate_id,
            lines = order.lines.len(),
            total = %order.total,
            "composed order"
        );

        let order_id = self
            .orders
            .create_order(&order)
            .await
            .inspect_err(|source| {
                error!(rate_id = %rate.rate_id, "failed to save order: {source}");
            })
            .map_err(CheckoutError::OrderPersistFailed)?;

        info!(order_id = %order_id, "saved order");

        let request = PaymentSessionRequest {
            order_id: order_id.clone(),
            lines: order.lines,
            label_price: self.pricing.label_fee,
            shipping_rate: rate.amount,
            tax: self.pricing.tax,
        };

        let session = match self.payments.create_session(&request).await {
            Ok(session) => session,
            Err(source) => {
                warn!(
                    order_id = %order_id,
                    "payment session failed; order left without payment: {source}"
                );

                return Err(CheckoutError::PaymentSessionFailed { order_id, source });
            }
        };

        info!(order_id = %order_id, "opened payment session");

        Ok(CheckoutRedirect {
            order_id,
            session_id: session.id,
            publishable_key: self.publishable_key.clone(),
        })
    }
}

/// Holds the single-flight flag until dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use storefront::{
        cart::CartError,
        errors::{Categorized, ErrorCategory},
        money::minor,
    };
    use testresult::TestResult;

    use crate::{
        content_store::ContentStoreError,
        domain::{
            orders::{MockOrdersRepository, OrdersError},
            payments::{MockPaymentSessionsClient, PaymentSession, PaymentsError},
        },
        test::{cart_item, customer, shipping_rate},
    };

    use super::*;

    fn submission(rate: Option<ShippingRate>) -> Result<CheckoutSubmission, CartError> {
        let mut cart = Cart::default();
        cart.add_item(cart_item("a", 10_00, 2))?;
        cart.add_item(cart_item("b", 5_00, 1))?;

        Ok(CheckoutSubmission {
            customer: customer(),
            cart,
            selected_rate: rate,
        })
    }

    fn service(
        orders: MockOrdersRepository,
        payments: MockPaymentSessionsClient,
    ) -> Result<CheckoutService, CheckoutError> {
        CheckoutService::new(
            Arc::new(orders),
            Arc::new(payments),
            PricingPolicy::default(),
            "pk_test_123",
        )
    }

    fn persist_failure() -> OrdersError {
        OrdersError::ContentStore(ContentStoreError::UnexpectedResponse(
            "create order request failed with status 500".to_string(),
        ))
    }

    #[tokio::test]
    async fn no_rate_selected_makes_no_calls() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders.expect_create_order().never();

        let mut payments = MockPaymentSessionsClient::new();
        payments.expect_create_session().never();

        let result = service(orders, payments)?.submit(submission(None)?).await;

        let Err(error) = result else {
            panic!("expected NoRateSelected, got {result:?}");
        };

        assert!(matches!(error, CheckoutError::NoRateSelected));
        assert_eq!(error.category(), ErrorCategory::Validation);

        Ok(())
    }

    #[tokio::test]
    async fn persist_failure_skips_payment() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(persist_failure()));

        let mut payments = MockPaymentSessionsClient::new();
        payments.expect_create_session().never();

        let result = service(orders, payments)?
            .submit(submission(Some(shipping_rate("se-1", 12_00)))?)
            .await;

        assert!(
            matches!(result, Err(CheckoutError::OrderPersistFailed(_))),
            "expected OrderPersistFailed, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn successful_submission_redirects_to_gateway() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders
            .expect_create_order()
            .once()
            .withf(|order| {
                order.subtotal == minor(25_00)
                    && order.total == minor(45_50)
                    && order.shipping_rate.rate_id == "se-1"
            })
            .return_once(|_| Ok(OrderId::new("order-1")));

        let mut payments = MockPaymentSessionsClient::new();
        payments
            .expect_create_session()
            .once()
            .withf(|request| {
                request.order_id.as_str() == "order-1"
                    && request.lines.len() == 2
                    && request.shipping_rate == minor(12_00)
                    && request.tax == minor(3_50)
                    && request.label_price == minor(5_00)
            })
            .return_once(|_| {
                Ok(PaymentSession {
                    id: "cs_test_1".to_string(),
                })
            });

        let redirect = service(orders, payments)?
            .submit(submission(Some(shipping_rate("se-1", 12_00)))?)
            .await?;

        assert_eq!(
            redirect,
            CheckoutRedirect {
                order_id: OrderId::new("order-1"),
                session_id: "cs_test_1".to_string(),
                publishable_key: "pk_test_123".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn payment_failure_reports_orphaned_order() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders
            .expect_create_order()
            .once()
            .return_once(|_| Ok(OrderId::new("order-7")));

        let mut payments = MockPaymentSessionsClient::new();
        payments
            .expect_create_session()
            .once()
            .return_once(|_| Err(PaymentsError::MissingSessionId));

        let result = service(orders, payments)?
            .submit(submission(Some(shipping_rate("se-1", 12_00)))?)
            .await;

        assert!(
            matches!(&result, Err(CheckoutError::PaymentSessionFailed { order_id, .. })
                if order_id.as_str() == "order-7"),
            "expected PaymentSessionFailed, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders.expect_create_order().never();

        let mut payments = MockPaymentSessionsClient::new();
        payments.expect_create_session().never();

        let service = service(orders, payments)?;

        let held = InFlightGuard::acquire(&service.in_flight);
        assert!(held.is_some(), "first acquisition should succeed");

        let result = service
            .submit(submission(Some(shipping_rate("se-1", 12_00)))?)
            .await;

        assert!(
            matches!(result, Err(CheckoutError::SubmissionInFlight)),
            "expected SubmissionInFlight, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn guard_is_released_after_failure() -> TestResult {
        let mut orders = MockOrdersRepository::new();
        orders
            .expect_create_order()
            .times(2)
            .returning(|_| Err(persist_failure()));

        let service = service(orders, MockPaymentSessionsClient::new())?;

        for _ in 0..2 {
            let result = service
                .submit(submission(Some(shipping_rate("se-1", 12_00)))?)
                .await;

            assert!(
                matches!(result, Err(CheckoutError::OrderPersistFailed(_))),
                "expected OrderPersistFailed, got {result:?}"
            );
        }

        Ok(())
    }

    #[test]
    fn blank_publishable_key_is_fatal() {
        let result = CheckoutService::new(
            Arc::new(MockOrdersRepository::new()),
            Arc::new(MockPaymentSessionsClient::new()),
            PricingPolicy::default(),
            "  ",
        );

        let Err(error) = result else {
            panic!("expected MissingPublishableKey");
        };

        assert!(matches!(error, CheckoutError::MissingPublishableKey));
        assert_eq!(error.category(), ErrorCategory::ConfigurationMissing);
    }
}
