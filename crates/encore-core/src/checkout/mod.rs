//! Subscription checkout.
//!
//! Activation is a straight line: create a subscription intent on our
//! backend, hand its client secret to the payment processor together with
//! the card the user typed, and redirect once the processor reports
//! `succeeded`. There is a single attempt and no retry.
//!
//! ```text
//! ActivationFlow ──create_intent──▶ SubscriptionApi   (POST, bearer auth)
//!        │
//!        └──confirm_payment──▶ PaymentConfirmer       (processor)
//!        │
//!        └──notify / redirect──▶ CheckoutEffects      (toasts, router)
//! ```

mod api;
mod flow;
mod payment;

pub use api::{HttpSubscriptionApi, SubscriptionApi};
pub use flow::{Activation, ActivationFlow, CheckoutEffects, REDIRECT_DELAY};
pub use payment::{PaymentConfirmer, StripeConfirmer};

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Checkout failures. Every variant is terminal for the current attempt.
///
/// `Display` is the bare message so it can go straight into a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Payment processor or sign-in not available yet; nothing was sent
    #[error("{0}")]
    NotReady(String),

    /// Our backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The processor rejected the payment
    #[error("{0}")]
    Payment(String),

    /// Transport failures, malformed responses, anything else
    #[error("{0}")]
    Unexpected(String),
}

impl CheckoutError {
    /// Backend error using the response body as the message.
    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("Request failed with status {status}")
        } else {
            body
        };
        CheckoutError::Backend { status, message }
    }
}

/// Opaque token authorizing confirmation of one payment intent.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Payment intent id, the part before `_secret_`.
    pub fn intent_id(&self) -> Option<&str> {
        self.0
            .split_once("_secret_")
            .map(|(id, _)| id)
            .filter(|id| !id.is_empty())
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intent_id() {
            Some(id) => write!(f, "ClientSecret({id}_secret_***)"),
            None => f.write_str("ClientSecret(***)"),
        }
    }
}

/// One checkout attempt's intent. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionIntent {
    pub price_id: String,
    pub client_secret: ClientSecret,
}

/// Card fields collected by the checkout form.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
    pub postal_code: Option<String>,
}

impl CardDetails {
    pub fn last4(&self) -> &str {
        let digits = self.number.trim();
        &digits[digits.len().saturating_sub(4)..]
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("last4", &self.last4())
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .finish_non_exhaustive()
    }
}

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card(CardDetails),
    /// Payment method already stored with the processor
    Saved(String),
}

impl PaymentMethod {
    /// Form fields for the processor's confirm call.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            PaymentMethod::Card(card) => {
                let mut fields = vec![
                    ("payment_method_data[type]", "card".to_string()),
                    ("payment_method_data[card][number]", card.number.replace(' ', "")),
                    ("payment_method_data[card][exp_month]", card.exp_month.to_string()),
                    ("payment_method_data[card][exp_year]", card.exp_year.to_string()),
                    ("payment_method_data[card][cvc]", card.cvc.clone()),
                ];
                if let Some(postal) = &card.postal_code {
                    fields.push((
                        "payment_method_data[billing_details][address][postal_code]",
                        postal.clone(),
                    ));
                }
                fields
            }
            PaymentMethod::Saved(id) => vec![("payment_method", id.clone())],
        }
    }
}

/// Payment intent status as reported by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    Processing,
    RequiresAction,
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Processing => "processing",
            PaymentStatus::RequiresAction => "requires_action",
            PaymentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentStatus::RequiresConfirmation => "requires_confirmation",
            PaymentStatus::RequiresCapture => "requires_capture",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processor's answer to a successful confirm call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentOutcome {
    pub id: String,
    pub status: PaymentStatus,
}
