//! The activation sequence.

use std::time::Duration;

use super::{
    CheckoutError, PaymentConfirmer, PaymentMethod, PaymentOutcome, PaymentStatus,
    SubscriptionApi,
};
use crate::toast::Toast;

/// Pause between the success toast and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// UI side effects of an activation.
pub trait CheckoutEffects {
    fn notify(&self, toast: Toast);
    fn redirect(&self, route: &str);
}

/// How an activation that reached the processor ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Paid; the redirect has already happened
    Succeeded(PaymentOutcome),
    /// Processor answered with a non-terminal status; no redirect
    Incomplete(PaymentOutcome),
}

/// Subscription activation for one fixed price.
pub struct ActivationFlow<A, P> {
    api: A,
    confirmer: Option<P>,
    auth_token: Option<String>,
    price_id: String,
    success_route: String,
}

impl<A: SubscriptionApi, P: PaymentConfirmer> ActivationFlow<A, P> {
    /// `confirmer` is `None` until the payment processor is configured;
    /// `auth_token` is `None` while signed out.
    pub fn new(
        api: A,
        confirmer: Option<P>,
        auth_token: Option<String>,
        price_id: impl Into<String>,
        success_route: impl Into<String>,
    ) -> Self {
        Self {
            api,
            confirmer,
            auth_token,
            price_id: price_id.into(),
            success_route: success_route.into(),
        }
    }

    pub fn price_id(&self) -> &str {
        &self.price_id
    }

    /// Whether both preconditions are met.
    pub fn is_ready(&self) -> bool {
        self.confirmer.is_some() && self.token().is_some()
    }

    /// Run one activation attempt.
    ///
    /// Failures are pushed to `effects` as a destructive toast carrying the
    /// error message, then returned.
    pub async fn activate(
        &self,
        method: &PaymentMethod,
        effects: &impl CheckoutEffects,
    ) -> Result<Activation, CheckoutError> {
        match self.run(method, effects).await {
            Ok(activation) => Ok(activation),
            Err(e) => {
                tracing::warn!(price_id = %self.price_id, error = %e, "Subscription activation failed");
                effects.notify(Toast::destructive("Error", e.to_string()));
                Err(e)
            }
        }
    }

    /// [`activate`](Self::activate) as a future that owns its inputs, so it
    /// can keep running after the component that started it unmounts.
    pub async fn activate_owned<E: CheckoutEffects>(
        self,
        method: PaymentMethod,
        effects: E,
    ) -> Result<Activation, CheckoutError> {
        self.activate(&method, &effects).await
    }

    fn token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|t| !t.is_empty())
    }

    async fn run(
        &self,
        method: &PaymentMethod,
        effects: &impl CheckoutEffects,
    ) -> Result<Activation, CheckoutError> {
        let confirmer = self.confirmer.as_ref().ok_or_else(|| {
            CheckoutError::NotReady("Payment system is not ready. Please try again.".to_string())
        })?;
        let token = self.token().ok_or_else(|| {
            CheckoutError::NotReady("You must be signed in to subscribe.".to_string())
        })?;

        let intent = self.api.create_intent(&self.price_id, token).await?;
        tracing::debug!(secret = ?intent.client_secret, "Subscription intent created");

        let outcome = confirmer
            .confirm_payment(&intent.client_secret, method)
            .await?;

        if outcome.status != PaymentStatus::Succeeded {
            tracing::info!(status = %outcome.status, "Payment not completed");
            effects.notify(Toast::new(
                "Payment pending",
                format!("Payment status: {}", outcome.status),
            ));
            return Ok(Activation::Incomplete(outcome));
        }

        tracing::info!(price_id = %self.price_id, "Subscription activated");
        effects.notify(Toast::new(
            "Success!",
            "Your subscription is now active. Redirecting...",
        ));
        tokio::time::sleep(REDIRECT_DELAY).await;
        effects.redirect(&self.success_route);
        Ok(Activation::Succeeded(outcome))
    }
}
