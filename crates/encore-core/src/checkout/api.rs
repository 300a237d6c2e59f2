//! Subscription intent creation on the Encore backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::{CheckoutError, ClientSecret, SubscriptionIntent};

/// Backend that creates subscription intents.
pub trait SubscriptionApi {
    fn create_intent(
        &self,
        price_id: &str,
        auth_token: &str,
    ) -> impl Future<Output = Result<SubscriptionIntent, CheckoutError>>;
}

impl<T: SubscriptionApi + ?Sized> SubscriptionApi for &T {
    async fn create_intent(
        &self,
        price_id: &str,
        auth_token: &str,
    ) -> Result<SubscriptionIntent, CheckoutError> {
        (**self).create_intent(price_id, auth_token).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateIntentRequest<'a> {
    price_id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateIntentResponse {
    client_secret: String,
}

/// JSON-over-HTTP implementation.
#[derive(Clone)]
pub struct HttpSubscriptionApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubscriptionApi {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl SubscriptionApi for HttpSubscriptionApi {
    async fn create_intent(
        &self,
        price_id: &str,
        auth_token: &str,
    ) -> Result<SubscriptionIntent, CheckoutError> {
        tracing::debug!(endpoint = %self.endpoint, price_id, "Creating subscription intent");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(auth_token)
            .json(&CreateIntentRequest { price_id })
            .send()
            .await
            .map_err(|e| CheckoutError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutError::backend(status.as_u16(), body));
        }

        let body: CreateIntentResponse = response
            .json()
            .await
            .map_err(|e| CheckoutError::Unexpected(format!("Invalid subscription response: {e}")))?;

        Ok(SubscriptionIntent {
            price_id: price_id.to_string(),
            client_secret: ClientSecret::new(body.client_secret),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_camel_case() {
        let json = serde_json::to_string(&CreateIntentRequest { price_id: "price_123" }).unwrap();
        assert_eq!(json, r#"{"priceId":"price_123"}"#);
    }

    #[test]
    fn response_body_parses_client_secret() {
        let body: CreateIntentResponse =
            serde_json::from_str(r#"{"clientSecret":"pi_1_secret_2","subscriptionId":"sub_9"}"#)
                .unwrap();
        assert_eq!(body.client_secret, "pi_1_secret_2");
    }
}
