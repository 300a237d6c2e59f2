//! Checkout page - Pro subscription activation.
//!
//! Collects card details and hands them to [`ActivationFlow`], which owns
//! the backend call, processor confirmation, toasts, and the redirect.

use dioxus::prelude::*;
use encore_core::{
    ActivationFlow, CardDetails, HttpSubscriptionApi, PaymentMethod, StripeConfirmer, Toast,
};
use encore_ui::{Button, ButtonVariant};

use crate::components::{NavHeader, NavLocation};
use crate::context::{settings, use_density, use_http_client, use_toasts, AppEffects};

/// Parse the checkout form into card details.
///
/// `expiry` accepts `MM/YY` or `MM/YYYY`.
fn parse_card(
    number: &str,
    expiry: &str,
    cvc: &str,
    postal_code: &str,
) -> Result<CardDetails, String> {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() < 12 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter a valid card number.".to_string());
    }

    let (month, year) = expiry
        .split_once('/')
        .ok_or_else(|| "Enter the expiry as MM/YY.".to_string())?;
    let exp_month: u8 = month
        .trim()
        .parse()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| "Enter a valid expiry month.".to_string())?;
    let exp_year: u16 = match year.trim().parse::<u16>() {
        Ok(y) if y < 100 => 2000 + y,
        Ok(y) => y,
        Err(_) => return Err("Enter a valid expiry year.".to_string()),
    };

    let cvc = cvc.trim();
    if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter a valid security code.".to_string());
    }

    let postal_code = Some(postal_code.trim().to_string()).filter(|p| !p.is_empty());

    Ok(CardDetails {
        number: digits,
        exp_month,
        exp_year,
        cvc: cvc.to_string(),
        postal_code,
    })
}

#[component]
pub fn Checkout() -> Element {
    let navigator = use_navigator();
    let client = use_http_client();
    let toasts = use_toasts();
    let density = use_density();

    let mut number = use_signal(String::new);
    let mut expiry = use_signal(String::new);
    let mut cvc = use_signal(String::new);
    let mut postal = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let config = &settings().config;
    let processor_ready = config.publishable_key().is_some();
    let signed_in = config.auth_token().is_some();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let card = match parse_card(&number(), &expiry(), &cvc(), &postal()) {
            Ok(card) => card,
            Err(message) => {
                let mut toasts = toasts;
                toasts.write().push(Toast::destructive("Check your card", message));
                return;
            }
        };

        submitting.set(true);
        let client = client.clone();

        // Runs on the root scope so leaving the page does not abort it
        spawn_forever(async move {
            let config = &settings().config;
            let api = HttpSubscriptionApi::new(client.clone(), config.subscription_endpoint());
            let confirmer = config.publishable_key().map(|key| {
                StripeConfirmer::new(client, key, config.billing.processor_base_url.clone())
            });
            let flow = ActivationFlow::new(
                api,
                confirmer,
                config.auth_token(),
                config.billing.price_id.clone(),
                config.billing.success_route.clone(),
            );

            let effects = AppEffects::new(toasts, navigator);
            tracing::info!(price_id = flow.price_id(), "Starting subscription activation");
            if let Ok(activation) = flow.activate_owned(PaymentMethod::Card(card), effects).await {
                tracing::info!(?activation, "Subscription activation finished");
            }
            // Gone if the page unmounted meanwhile
            if let Ok(mut flag) = submitting.try_write() {
                *flag = false;
            }
        });
    };

    let classes = density().classes();

    rsx! {
        NavHeader { current: NavLocation::Upgrade }

        main { class: "page checkout",
            section { class: "plan-card {classes.gap}",
                h2 { class: "section-header", "Encore Pro" }
                ul { class: "plan-features {classes.text}",
                    li { "Unlimited campaigns" }
                    li { "Playlist pitching insights" }
                    li { "Daily stream reports" }
                }
            }

            if !processor_ready {
                p { class: "checkout-notice", "Payments are not configured on this install." }
            }
            if !signed_in {
                p { class: "checkout-notice", "Sign in to subscribe." }
            }

            form { class: "checkout-form {classes.gap}", onsubmit: on_submit,
                label { class: "field",
                    span { "Card number" }
                    input {
                        r#type: "text",
                        inputmode: "numeric",
                        autocomplete: "cc-number",
                        placeholder: "4242 4242 4242 4242",
                        value: "{number}",
                        oninput: move |evt| number.set(evt.value()),
                    }
                }
                div { class: "field-row",
                    label { class: "field",
                        span { "Expiry" }
                        input {
                            r#type: "text",
                            autocomplete: "cc-exp",
                            placeholder: "MM/YY",
                            value: "{expiry}",
                            oninput: move |evt| expiry.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { "CVC" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            autocomplete: "cc-csc",
                            value: "{cvc}",
                            oninput: move |evt| cvc.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { "Postal code" }
                        input {
                            r#type: "text",
                            autocomplete: "postal-code",
                            value: "{postal}",
                            oninput: move |evt| postal.set(evt.value()),
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    density: density().mode,
                    button_type: "submit".to_string(),
                    disabled: submitting(),
                    if submitting() { "Processing..." } else { "Subscribe" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_number_and_short_year() {
        let card = parse_card("4242 4242 4242 4242", "04/29", "123", " 94107 ").unwrap();
        assert_eq!(card.number, "4242424242424242");
        assert_eq!(card.exp_month, 4);
        assert_eq!(card.exp_year, 2029);
        assert_eq!(card.postal_code.as_deref(), Some("94107"));
    }

    #[test]
    fn accepts_four_digit_year_and_blank_postal() {
        let card = parse_card("4000056655665556", "12/2031", "1234", "").unwrap();
        assert_eq!(card.exp_year, 2031);
        assert_eq!(card.postal_code, None);
    }

    #[test]
    fn rejects_bad_fields() {
        assert!(parse_card("4242", "04/29", "123", "").is_err());
        assert!(parse_card("4242424242424242", "13/29", "123", "").is_err());
        assert!(parse_card("4242424242424242", "0429", "123", "").is_err());
        assert!(parse_card("4242424242424242", "04/29", "12", "").is_err());
        assert!(parse_card("4242424242424242", "04/29", "12a", "").is_err());
    }
}
