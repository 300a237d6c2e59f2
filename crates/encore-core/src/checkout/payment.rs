//! Payment confirmation with the processor.

use std::future::Future;

use serde::Deserialize;

use super::{CheckoutError, ClientSecret, PaymentMethod, PaymentOutcome};

/// Confirms a payment intent identified by its client secret.
pub trait PaymentConfirmer {
    fn confirm_payment(
        &self,
        secret: &ClientSecret,
        method: &PaymentMethod,
    ) -> impl Future<Output = Result<PaymentOutcome, CheckoutError>>;
}

impl<T: PaymentConfirmer + ?Sized> PaymentConfirmer for &T {
    async fn confirm_payment(
        &self,
        secret: &ClientSecret,
        method: &PaymentMethod,
    ) -> Result<PaymentOutcome, CheckoutError> {
        (**self).confirm_payment(secret, method).await
    }
}

#[derive(Deserialize)]
struct ProcessorErrorBody {
    error: ProcessorError,
}

#[derive(Deserialize)]
struct ProcessorError {
    message: Option<String>,
}

/// Confirms through Stripe's public payment intent endpoint, authenticated
/// with the publishable key and the intent's client secret.
#[derive(Clone)]
pub struct StripeConfirmer {
    client: reqwest::Client,
    publishable_key: String,
    api_base: String,
}

impl StripeConfirmer {
    pub fn new(
        client: reqwest::Client,
        publishable_key: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            publishable_key: publishable_key.into(),
            api_base: api_base.into(),
        }
    }

    fn confirm_url(&self, intent_id: &str) -> String {
        format!(
            "{}/v1/payment_intents/{}/confirm",
            self.api_base.trim_end_matches('/'),
            intent_id
        )
    }
}

impl PaymentConfirmer for StripeConfirmer {
    async fn confirm_payment(
        &self,
        secret: &ClientSecret,
        method: &PaymentMethod,
    ) -> Result<PaymentOutcome, CheckoutError> {
        let intent_id = secret
            .intent_id()
            .ok_or_else(|| CheckoutError::Unexpected("Malformed client secret".to_string()))?;

        let mut form = vec![("client_secret", secret.as_str().to_string())];
        form.extend(method.form_fields());

        let response = self
            .client
            .post(self.confirm_url(intent_id))
            .bearer_auth(&self.publishable_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| CheckoutError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ProcessorErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("Payment failed with status {}", status.as_u16()));
            return Err(CheckoutError::Payment(message));
        }

        let outcome: PaymentOutcome = response
            .json()
            .await
            .map_err(|e| CheckoutError::Unexpected(format!("Invalid processor response: {e}")))?;

        tracing::info!(intent = %outcome.id, status = %outcome.status, "Payment confirmed");
        Ok(outcome)
    }
}
