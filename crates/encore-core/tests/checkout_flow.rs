//! Subscription activation flow tests.
//!
//! Sequencing is driven through mock backends and processors; the HTTP
//! implementations are exercised against a one-shot local server.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use encore_core::{
    Activation, ActivationFlow, CardDetails, CheckoutEffects, CheckoutError, ClientSecret,
    HttpSubscriptionApi, PaymentConfirmer, PaymentMethod, PaymentOutcome, PaymentStatus,
    StripeConfirmer, SubscriptionApi, SubscriptionIntent, Toast, ToastVariant, REDIRECT_DELAY,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::Instant;

// ============================================================================
// Test doubles
// ============================================================================

struct MockApi {
    response: Result<SubscriptionIntent, CheckoutError>,
    calls: Cell<u32>,
    last_token: RefCell<Option<String>>,
}

impl MockApi {
    fn ok(secret: &str) -> Self {
        Self::with(Ok(SubscriptionIntent {
            price_id: "price_pro_monthly".to_string(),
            client_secret: ClientSecret::new(secret),
        }))
    }

    fn with(response: Result<SubscriptionIntent, CheckoutError>) -> Self {
        Self {
            response,
            calls: Cell::new(0),
            last_token: RefCell::new(None),
        }
    }
}

impl SubscriptionApi for MockApi {
    async fn create_intent(
        &self,
        _price_id: &str,
        auth_token: &str,
    ) -> Result<SubscriptionIntent, CheckoutError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(auth_token.to_string());
        self.response.clone()
    }
}

struct MockConfirmer {
    response: Result<PaymentOutcome, CheckoutError>,
    calls: Cell<u32>,
}

impl MockConfirmer {
    fn status(status: PaymentStatus) -> Self {
        Self::with(Ok(PaymentOutcome {
            id: "pi_1".to_string(),
            status,
        }))
    }

    fn with(response: Result<PaymentOutcome, CheckoutError>) -> Self {
        Self {
            response,
            calls: Cell::new(0),
        }
    }
}

impl PaymentConfirmer for MockConfirmer {
    async fn confirm_payment(
        &self,
        _secret: &ClientSecret,
        _method: &PaymentMethod,
    ) -> Result<PaymentOutcome, CheckoutError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}

#[derive(Default)]
struct RecordingEffects {
    toasts: RefCell<Vec<Toast>>,
    redirects: RefCell<Vec<(String, Instant)>>,
}

impl CheckoutEffects for RecordingEffects {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }

    fn redirect(&self, route: &str) {
        self.redirects
            .borrow_mut()
            .push((route.to_string(), Instant::now()));
    }
}

/// Effects handle that outlives the scope that created the flow.
#[derive(Clone, Default)]
struct SharedEffects(Rc<RecordingEffects>);

impl CheckoutEffects for SharedEffects {
    fn notify(&self, toast: Toast) {
        self.0.notify(toast);
    }

    fn redirect(&self, route: &str) {
        self.0.redirect(route);
    }
}

fn card() -> PaymentMethod {
    PaymentMethod::Card(CardDetails {
        number: "4000 0000 0000 0002".to_string(),
        exp_month: 4,
        exp_year: 2031,
        cvc: "314".to_string(),
        postal_code: None,
    })
}

fn token() -> Option<String> {
    Some("tok-123".to_string())
}

// ============================================================================
// One-shot HTTP server
// ============================================================================

async fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

// ============================================================================
// Flow sequencing
// ============================================================================

#[tokio::test(start_paused = true)]
async fn success_redirects_after_two_seconds_and_not_before() {
    let api = MockApi::ok("pi_1_secret_abc");
    let confirmer = MockConfirmer::status(PaymentStatus::Succeeded);
    let flow = ActivationFlow::new(&api, Some(&confirmer), token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();
    let started = Instant::now();

    let method = card();
    let watcher = async {
        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(effects.redirects.borrow().is_empty(), "redirected early");
        assert_eq!(effects.toasts.borrow().len(), 1, "success toast shown first");
    };
    let (result, ()) = tokio::join!(flow.activate(&method, &effects), watcher);

    assert!(matches!(result, Ok(Activation::Succeeded(_))));
    let redirects = effects.redirects.borrow();
    assert_eq!(redirects.len(), 1);
    assert_eq!(redirects[0].0, "/billing/success");
    let elapsed = redirects[0].1 - started;
    assert!(elapsed >= Duration::from_millis(2000) && elapsed < Duration::from_millis(2010));

    let toasts = effects.toasts.borrow();
    assert_eq!(toasts[0].variant, ToastVariant::Default);
    assert_eq!(api.last_token.borrow().as_deref(), Some("tok-123"));
}

#[tokio::test(start_paused = true)]
async fn detached_activation_completes_after_requester_goes_away() {
    let effects = SharedEffects::default();
    let local = tokio::task::LocalSet::new();

    local
        .run_until(async {
            {
                // Everything the page owned is moved into the task, then the
                // page's handle is dropped.
                let flow = ActivationFlow::new(
                    MockApi::ok("pi_7_secret_xyz"),
                    Some(MockConfirmer::status(PaymentStatus::Succeeded)),
                    token(),
                    "price_pro_monthly",
                    "/billing/success",
                );
                let handle = tokio::task::spawn_local(flow.activate_owned(card(), effects.clone()));
                drop(handle);
            }

            tokio::time::sleep(REDIRECT_DELAY + Duration::from_millis(10)).await;
        })
        .await;

    let toasts = effects.0.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Success!");
    let redirects = effects.0.redirects.borrow();
    assert_eq!(redirects.len(), 1);
    assert_eq!(redirects[0].0, "/billing/success");
}

#[tokio::test]
async fn backend_rejection_skips_processor() {
    let api = MockApi::with(Err(CheckoutError::backend(400, "Card declined")));
    let confirmer = MockConfirmer::status(PaymentStatus::Succeeded);
    let flow = ActivationFlow::new(&api, Some(&confirmer), token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    let err = flow.activate(&card(), &effects).await.unwrap_err();

    assert_eq!(err.to_string(), "Card declined");
    assert_eq!(confirmer.calls.get(), 0);
    let toasts = effects.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    assert_eq!(toasts[0].description, "Card declined");
    assert!(effects.redirects.borrow().is_empty());
}

#[tokio::test]
async fn missing_processor_makes_no_network_call() {
    let api = MockApi::ok("pi_1_secret_abc");
    let flow = ActivationFlow::<_, MockConfirmer>::new(&api, None, token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    assert!(!flow.is_ready());
    let err = flow.activate(&card(), &effects).await.unwrap_err();

    assert!(matches!(err, CheckoutError::NotReady(_)));
    assert_eq!(api.calls.get(), 0);
    assert_eq!(effects.toasts.borrow()[0].variant, ToastVariant::Destructive);
}

#[tokio::test]
async fn missing_token_makes_no_network_call() {
    let api = MockApi::ok("pi_1_secret_abc");
    let confirmer = MockConfirmer::status(PaymentStatus::Succeeded);
    let flow = ActivationFlow::new(&api, Some(&confirmer), Some(String::new()), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    let err = flow.activate(&card(), &effects).await.unwrap_err();

    assert!(matches!(err, CheckoutError::NotReady(_)));
    assert_eq!(api.calls.get(), 0);
    assert_eq!(confirmer.calls.get(), 0);
}

#[tokio::test]
async fn processor_rejection_surfaces_its_message() {
    let api = MockApi::ok("pi_1_secret_abc");
    let confirmer = MockConfirmer::with(Err(CheckoutError::Payment(
        "Your card has insufficient funds.".to_string(),
    )));
    let flow = ActivationFlow::new(&api, Some(&confirmer), token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    let err = flow.activate(&card(), &effects).await.unwrap_err();

    assert_eq!(err, CheckoutError::Payment("Your card has insufficient funds.".to_string()));
    assert_eq!(effects.toasts.borrow()[0].description, "Your card has insufficient funds.");
    assert!(effects.redirects.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn non_terminal_status_does_not_redirect() {
    let api = MockApi::ok("pi_1_secret_abc");
    let confirmer = MockConfirmer::status(PaymentStatus::RequiresAction);
    let flow = ActivationFlow::new(&api, Some(&confirmer), token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    let result = flow.activate(&card(), &effects).await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(matches!(result, Activation::Incomplete(ref o) if o.status == PaymentStatus::RequiresAction));
    assert!(effects.redirects.borrow().is_empty());
    assert_eq!(effects.toasts.borrow()[0].variant, ToastVariant::Default);
}

// ============================================================================
// HTTP implementations
// ============================================================================

#[tokio::test]
async fn http_backend_400_uses_body_as_message() {
    let (base, server) = serve_once("400 Bad Request", "text/plain", "Card declined").await;
    let api = HttpSubscriptionApi::new(reqwest::Client::new(), format!("{base}/api/create-subscription"));
    let confirmer = MockConfirmer::status(PaymentStatus::Succeeded);
    let flow = ActivationFlow::new(api, Some(&confirmer), token(), "price_pro_monthly", "/billing/success");
    let effects = RecordingEffects::default();

    let err = flow.activate(&card(), &effects).await.unwrap_err();
    let request = server.await.unwrap();

    assert_eq!(
        err,
        CheckoutError::Backend {
            status: 400,
            message: "Card declined".to_string()
        }
    );
    assert_eq!(effects.toasts.borrow()[0].description, "Card declined");
    assert_eq!(confirmer.calls.get(), 0);

    assert!(request.starts_with("POST /api/create-subscription"));
    assert!(request.to_lowercase().contains("authorization: bearer tok-123"));
    assert!(request.contains(r#"{"priceId":"price_pro_monthly"}"#));
}

#[tokio::test]
async fn http_backend_success_returns_client_secret() {
    let (base, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"clientSecret":"pi_9_secret_xyz"}"#,
    )
    .await;
    let api = HttpSubscriptionApi::new(reqwest::Client::new(), format!("{base}/api/create-subscription"));

    let intent = api.create_intent("price_pro_monthly", "tok-123").await.unwrap();
    server.await.unwrap();

    assert_eq!(intent.price_id, "price_pro_monthly");
    assert_eq!(intent.client_secret.intent_id(), Some("pi_9"));
}

#[tokio::test]
async fn processor_decline_message_is_extracted() {
    let (base, server) = serve_once(
        "402 Payment Required",
        "application/json",
        r#"{"error":{"type":"card_error","code":"card_declined","message":"Your card was declined."}}"#,
    )
    .await;
    let confirmer = StripeConfirmer::new(reqwest::Client::new(), "pk_test_1", base);

    let err = confirmer
        .confirm_payment(&ClientSecret::new("pi_1_secret_abc"), &card())
        .await
        .unwrap_err();
    let request = server.await.unwrap();

    assert_eq!(err, CheckoutError::Payment("Your card was declined.".to_string()));
    assert!(request.starts_with("POST /v1/payment_intents/pi_1/confirm"));
    assert!(request.contains("client_secret=pi_1_secret_abc"));
    assert!(request.to_lowercase().contains("authorization: bearer pk_test_1"));
}

#[tokio::test]
async fn processor_success_parses_status() {
    let (base, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"id":"pi_1","object":"payment_intent","status":"succeeded"}"#,
    )
    .await;
    let confirmer = StripeConfirmer::new(reqwest::Client::new(), "pk_test_1", base);

    let outcome = confirmer
        .confirm_payment(
            &ClientSecret::new("pi_1_secret_abc"),
            &PaymentMethod::Saved("pm_card_visa".to_string()),
        )
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert_eq!(outcome.status, PaymentStatus::Succeeded);
    assert!(request.contains("payment_method=pm_card_visa"));
}
