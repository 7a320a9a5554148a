//! Client layer: validates inputs, shapes requests and normalizes responses.

mod http;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiResponse, ConfigurationError, GroupId, HttpMethod, MessageText, NotifyUrl, PhonePrefixes,
    RequestFailure, SendBulk, SendOtp, SendSms, ShortcodeId, Token, ValidationError,
};
use crate::transport;

pub use http::{BoxError, BoxFuture, HttpResponse, HttpTransport, ReqwestTransport};

const API_ROOT: &str = "https://api.geezsms.com/api/";
const API_VERSION: &str = "v1";
const SMS_PATH: &str = "/sms";

/// Default API root, `https://api.geezsms.com/api/v1/sms`.
pub fn default_base_url() -> String {
    format!("{API_ROOT}{API_VERSION}{SMS_PATH}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Otp,
    Send,
    SendBulk,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Self::Otp => "/otp",
            Self::Send => "/send",
            Self::SendBulk => "/send/bulk",
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GeezSmsClient`].
///
/// Both variants are raised before any network traffic. Transport failures are not errors:
/// they come back as [`ApiResponse::Failed`].
pub enum GeezSmsError {
    /// The client could not be constructed (missing token, bad base URL, ...).
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A caller-supplied value was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`GeezSmsClient`].
///
/// Use this when you need account identifiers, a different endpoint, a timeout, or a
/// custom transport.
pub struct GeezSmsClientBuilder {
    token: String,
    shortcode_id: Option<ShortcodeId>,
    group_id: Option<GroupId>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    phone_prefixes: PhonePrefixes,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GeezSmsClientBuilder {
    /// Create a builder with the default endpoint and no account identifiers.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            shortcode_id: None,
            group_id: None,
            base_url: default_base_url(),
            timeout: None,
            user_agent: None,
            phone_prefixes: PhonePrefixes::default(),
            transport: None,
        }
    }

    /// Shortcode id sent with OTP and single sends. Numbers are accepted; an empty value or
    /// `0` clears it.
    pub fn shortcode_id(mut self, shortcode_id: impl ToString) -> Self {
        self.shortcode_id = ShortcodeId::new(shortcode_id);
        self
    }

    /// Group id sent with bulk sends. Numbers are accepted; an empty value or `0` clears it.
    pub fn group_id(mut self, group_id: impl ToString) -> Self {
        self.group_id = GroupId::new(group_id);
        self
    }

    /// Override the API root (the part before `/otp`, `/send`, `/send/bulk`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the accepted phone prefixes (default: `2519`, `+2519`).
    pub fn phone_prefixes(mut self, prefixes: PhonePrefixes) -> Self {
        self.phone_prefixes = prefixes;
        self
    }

    /// Use a custom transport instead of the reqwest-backed default.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`GeezSmsClient`].
    pub fn build(self) -> Result<GeezSmsClient, GeezSmsError> {
        let token = Token::new(self.token)?;
        let base_url = normalize_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| ConfigurationError::HttpClient(Box::new(err)))?;
                Arc::new(ReqwestTransport::from_client(client))
            }
        };

        Ok(GeezSmsClient {
            token,
            shortcode_id: self.shortcode_id,
            group_id: self.group_id,
            base_url,
            phone_prefixes: self.phone_prefixes,
            http,
        })
    }
}

impl std::fmt::Debug for GeezSmsClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeezSmsClientBuilder")
            .field("shortcode_id", &self.shortcode_id)
            .field("group_id", &self.group_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("phone_prefixes", &self.phone_prefixes)
            .finish_non_exhaustive()
    }
}

fn normalize_base_url(input: &str) -> Result<String, ConfigurationError> {
    let trimmed = input.trim().trim_end_matches('/');
    match url::Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            Ok(trimmed.to_owned())
        }
        _ => Err(ConfigurationError::InvalidBaseUrl {
            input: input.to_owned(),
        }),
    }
}

#[derive(Clone)]
/// High-level GeezSMS client.
///
/// Every call validates its inputs, merges the API token into the parameters, sends the
/// request through the configured [`HttpTransport`], and unwraps the `data` envelope of
/// the JSON response. By default requests go to `https://api.geezsms.com/api/v1/sms`.
pub struct GeezSmsClient {
    token: Token,
    shortcode_id: Option<ShortcodeId>,
    group_id: Option<GroupId>,
    base_url: String,
    phone_prefixes: PhonePrefixes,
    http: Arc<dyn HttpTransport>,
}

impl GeezSmsClient {
    /// Create a client with the default endpoint and transport.
    ///
    /// Fails with [`ConfigurationError::MissingToken`] when `token` is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, GeezSmsError> {
        GeezSmsClientBuilder::new(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: impl Into<String>) -> GeezSmsClientBuilder {
        GeezSmsClientBuilder::new(token)
    }

    /// Replace the transport used by subsequent calls.
    pub fn set_transport(&mut self, transport: impl HttpTransport + 'static) -> &mut Self {
        self.http = Arc::new(transport);
        self
    }

    /// Owned variant of [`GeezSmsClient::set_transport`].
    pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.set_transport(transport);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn shortcode_id(&self) -> Option<&ShortcodeId> {
        self.shortcode_id.as_ref()
    }

    pub fn group_id(&self) -> Option<&GroupId> {
        self.group_id.as_ref()
    }

    pub fn phone_prefixes(&self) -> &PhonePrefixes {
        &self.phone_prefixes
    }

    /// Request a one-time passcode for `phone` using `GET /otp`.
    pub async fn send_otp(&self, phone: impl ToString) -> Result<ApiResponse, GeezSmsError> {
        self.send_otp_with_method(phone, HttpMethod::Get).await
    }

    /// Request a one-time passcode for `phone` with an explicit HTTP method.
    ///
    /// Errors:
    /// - [`ValidationError::InvalidPhoneNumber`] when the phone has no accepted prefix.
    pub async fn send_otp_with_method(
        &self,
        phone: impl ToString,
        method: HttpMethod,
    ) -> Result<ApiResponse, GeezSmsError> {
        let request = SendOtp::new(self.phone_prefixes.parse(phone)?);
        let params = transport::encode_send_otp_params(&request, self.shortcode_id.as_ref());
        Ok(self.dispatch(Endpoint::Otp, method, params).await)
    }

    /// Send `message` to `phone` using `POST /send`.
    pub async fn send_sms(
        &self,
        phone: impl ToString,
        message: impl Into<String>,
    ) -> Result<ApiResponse, GeezSmsError> {
        self.send_sms_with_method(phone, message, HttpMethod::Post)
            .await
    }

    /// Send `message` to `phone` with an explicit HTTP method.
    ///
    /// Errors:
    /// - [`ValidationError::InvalidPhoneNumber`] when the phone has no accepted prefix,
    /// - [`ValidationError::MessageTooLong`] for messages over 335 characters.
    pub async fn send_sms_with_method(
        &self,
        phone: impl ToString,
        message: impl Into<String>,
        method: HttpMethod,
    ) -> Result<ApiResponse, GeezSmsError> {
        let phone = self.phone_prefixes.parse(phone)?;
        let request = SendSms::new(phone, MessageText::new(message)?);
        let params = transport::encode_send_sms_params(&request, self.shortcode_id.as_ref());
        Ok(self.dispatch(Endpoint::Send, method, params).await)
    }

    /// Send one `message` to every phone in `phones` using `POST /send/bulk`.
    ///
    /// `notify_url` may be empty; otherwise it must be an absolute URL. Phones are checked
    /// in order and the first invalid one is reported.
    pub async fn send_bulk<I>(
        &self,
        phones: I,
        message: impl Into<String>,
        notify_url: impl Into<String>,
    ) -> Result<ApiResponse, GeezSmsError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let phones = phones
            .into_iter()
            .map(|phone| self.phone_prefixes.parse(phone))
            .collect::<Result<Vec<_>, _>>()?;
        let msg = MessageText::new(message)?;
        let notify = NotifyUrl::new(notify_url)?;

        let request = SendBulk::new(phones, msg, notify);
        let params = transport::encode_send_bulk_params(&request, self.group_id.as_ref());
        Ok(self
            .dispatch(Endpoint::SendBulk, HttpMethod::Post, params)
            .await)
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        params: Vec<(String, String)>,
    ) -> ApiResponse {
        // Pin the transport for the whole call.
        let http = Arc::clone(&self.http);

        let params = transport::merge_token(params, &self.token);
        let url = format!("{}{}", self.base_url, endpoint.path());
        let request = transport::build_request(url, method, params);

        tracing::debug!(endpoint = endpoint.path(), %method, "sending GeezSMS request");
        let response = match http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(endpoint = endpoint.path(), error = %err, "GeezSMS request failed");
                return ApiResponse::Failed(RequestFailure::new(error_details(&*err)));
            }
        };
        tracing::debug!(
            endpoint = endpoint.path(),
            status = response.status,
            "received GeezSMS response"
        );

        match transport::decode_envelope(&response.body) {
            Ok(value) => ApiResponse::Data(value),
            Err(err) => {
                tracing::warn!(
                    endpoint = endpoint.path(),
                    status = response.status,
                    error = %err,
                    "GeezSMS response could not be decoded"
                );
                ApiResponse::Failed(RequestFailure::new(err.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for GeezSmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeezSmsClient")
            .field("token", &self.token)
            .field("shortcode_id", &self.shortcode_id)
            .field("group_id", &self.group_id)
            .field("base_url", &self.base_url)
            .field("phone_prefixes", &self.phone_prefixes)
            .finish_non_exhaustive()
    }
}

fn error_details(err: &(dyn std::error::Error + Send + Sync)) -> String {
    let details = err.to_string();
    if details.trim().is_empty() {
        "transport error".to_owned()
    } else {
        details
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use crate::domain::PhoneNumber;
    use crate::transport::OutboundRequest;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<OutboundRequest>,
        response: Result<HttpResponse, String>,
    }

    impl FakeTransport {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self::with_response(Ok(HttpResponse {
                status,
                body: body.into(),
            }))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<HttpResponse, String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response,
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }

        fn last_request(&self) -> OutboundRequest {
            self.state
                .lock()
                .unwrap()
                .requests
                .last()
                .cloned()
                .expect("transport was not called")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: OutboundRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.response.clone().map_err(BoxError::from)
            })
        }
    }

    fn make_client(transport: FakeTransport) -> GeezSmsClient {
        GeezSmsClient::builder("test_token")
            .base_url("https://example.invalid/api/v1/sms")
            .transport(transport)
            .build()
            .unwrap()
    }

    fn json_body(request: &OutboundRequest) -> Value {
        serde_json::from_str(request.body.as_deref().expect("missing body")).unwrap()
    }

    fn query_pairs(request: &OutboundRequest) -> Vec<(String, String)> {
        url::Url::parse(&request.url)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn new_rejects_blank_tokens() {
        for token in ["", " ", "\t\n"] {
            let err = GeezSmsClient::new(token).unwrap_err();
            assert!(
                matches!(
                    err,
                    GeezSmsError::Configuration(ConfigurationError::MissingToken)
                ),
                "{token:?} should be rejected, got {err:?}"
            );
        }
        assert!(GeezSmsClient::new(String::new()).is_err());
    }

    #[test]
    fn new_uses_default_base_url() {
        let client = GeezSmsClient::new("token").unwrap();
        assert_eq!(client.base_url(), "https://api.geezsms.com/api/v1/sms");
        assert!(client.shortcode_id().is_none());
        assert!(client.group_id().is_none());
    }

    #[test]
    fn set_transport_returns_the_same_client() {
        let mut client = GeezSmsClient::new("token").unwrap();
        let original: *const GeezSmsClient = &client;
        let returned: *const GeezSmsClient = client.set_transport(FakeTransport::new(200, "{}"));
        assert!(std::ptr::eq(original, returned));
    }

    #[test]
    fn debug_output_hides_token() {
        let client = make_client(FakeTransport::new(200, "{}"));
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("test_token"));
    }

    #[test]
    fn builder_normalizes_ids_and_base_url() {
        let client = GeezSmsClient::builder("token")
            .shortcode_id(8899)
            .group_id(" 12 ")
            .base_url("http://localhost:8080/api/v1/sms/")
            .transport(FakeTransport::new(200, "{}"))
            .build()
            .unwrap();
        assert_eq!(client.shortcode_id().map(ShortcodeId::as_str), Some("8899"));
        assert_eq!(client.group_id().map(GroupId::as_str), Some("12"));
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1/sms");

        let client = GeezSmsClient::builder("token")
            .shortcode_id("")
            .build()
            .unwrap();
        assert!(client.shortcode_id().is_none());
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        for base_url in ["not a url", "ftp://example.com/sms", "/api/v1/sms"] {
            let err = GeezSmsClient::builder("token")
                .base_url(base_url)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                GeezSmsError::Configuration(ConfigurationError::InvalidBaseUrl { .. })
            ));
        }
    }

    #[tokio::test]
    async fn invalid_phone_never_reaches_transport() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        for phone in [
            "0912345678",
            "251812345678",
            "+1 555 0100",
            "",
            " 251912345678",
            "\t+251912345678",
        ] {
            let err = client.send_otp(phone).await.unwrap_err();
            assert!(matches!(
                err,
                GeezSmsError::Validation(ValidationError::InvalidPhoneNumber { .. })
            ));

            let err = client.send_sms(phone, "hello").await.unwrap_err();
            assert!(matches!(
                err,
                GeezSmsError::Validation(ValidationError::InvalidPhoneNumber { .. })
            ));

            let err = client
                .send_bulk(["251911111111", phone], "hello", "")
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                GeezSmsError::Validation(ValidationError::InvalidPhoneNumber { .. })
            ));
        }

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_bulk_reports_first_invalid_phone() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let err = client
            .send_bulk(["251911111111", "0911", "0922"], "hello", "")
            .await
            .unwrap_err();
        match err {
            GeezSmsError::Validation(ValidationError::InvalidPhoneNumber { input }) => {
                assert_eq!(input, "0911");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn long_messages_never_reach_transport() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());
        let message = "ሰ".repeat(MessageText::MAX_CHARS + 1);

        let err = client
            .send_sms("251912345678", message.clone())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GeezSmsError::Validation(ValidationError::MessageTooLong { actual: 336, .. })
        ));

        let err = client
            .send_bulk(["251912345678"], message, "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GeezSmsError::Validation(ValidationError::MessageTooLong { .. })
        ));

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_bulk_validates_notify_url() {
        let transport = FakeTransport::new(200, r#"{"data": {"queued": 1}}"#);
        let client = make_client(transport.clone());

        let err = client
            .send_bulk(["251912345678"], "hello", "not a url")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GeezSmsError::Validation(ValidationError::InvalidNotifyUrl { .. })
        ));
        assert_eq!(transport.calls(), 0);

        let response = client
            .send_bulk(["251912345678"], "hello", "")
            .await
            .unwrap();
        assert_eq!(response.get("queued"), Some(&json!(1)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn send_sms_post_sends_json_body() {
        let transport = FakeTransport::new(200, r#"{"data": {"id": 1}}"#);
        let client = make_client(transport.clone());

        client.send_sms("251912345678", "hello").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/api/v1/sms/send");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            json_body(&request),
            json!({"phone": "251912345678", "msg": "hello", "token": "test_token"})
        );
    }

    #[tokio::test]
    async fn send_sms_get_sends_query_string() {
        let transport = FakeTransport::new(200, r#"{"data": {"id": 1}}"#);
        let client = make_client(transport.clone());

        client
            .send_sms_with_method("251912345678", "hello", HttpMethod::Get)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(request.url.starts_with("https://example.invalid/api/v1/sms/send?"));
        assert_eq!(
            query_pairs(&request),
            vec![
                ("phone".to_owned(), "251912345678".to_owned()),
                ("msg".to_owned(), "hello".to_owned()),
                ("token".to_owned(), "test_token".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn method_strings_are_parsed_before_dispatch() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let method: Result<HttpMethod, _> = "PUT".parse();
        assert!(matches!(
            method,
            Err(ValidationError::UnsupportedMethod { .. })
        ));

        let method: HttpMethod = "get".parse().unwrap();
        client
            .send_otp_with_method("+251912345678", method)
            .await
            .unwrap();
        assert_eq!(transport.last_request().method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn send_otp_defaults_to_get_and_includes_shortcode() {
        let transport = FakeTransport::new(200, r#"{"data": {"code": "1234"}}"#);
        let client = GeezSmsClient::builder("test_token")
            .base_url("https://example.invalid/api/v1/sms")
            .shortcode_id(55)
            .transport(transport.clone())
            .build()
            .unwrap();

        let response = client.send_otp(251_912_345_678_u64).await.unwrap();
        assert_eq!(response.data(), Some(&json!({"code": "1234"})));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.url.starts_with("https://example.invalid/api/v1/sms/otp?"));
        assert_eq!(
            query_pairs(&request),
            vec![
                ("phone".to_owned(), "251912345678".to_owned()),
                ("shortcode_id".to_owned(), "55".to_owned()),
                ("token".to_owned(), "test_token".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn send_otp_post_includes_shortcode_in_body() {
        let transport = FakeTransport::new(200, "{}");
        let client = GeezSmsClient::builder("test_token")
            .base_url("https://example.invalid/api/v1/sms")
            .shortcode_id("9")
            .transport(transport.clone())
            .build()
            .unwrap();

        client
            .send_otp_with_method("+251912345678", HttpMethod::Post)
            .await
            .unwrap();

        let body = json_body(&transport.last_request());
        assert_eq!(body["shortcode_id"], json!("9"));
        assert_eq!(body["phone"], json!("+251912345678"));
        assert_eq!(body["token"], json!("test_token"));
    }

    #[tokio::test]
    async fn send_bulk_always_posts_serialized_phone_list() {
        let transport = FakeTransport::new(200, r#"{"data": {"campaign": 3}}"#);
        let client = GeezSmsClient::builder("test_token")
            .base_url("https://example.invalid/api/v1/sms")
            .shortcode_id(1)
            .group_id(42)
            .transport(transport.clone())
            .build()
            .unwrap();

        let phones = ["251911111111", "+251922222222", "251933333333"];
        let response = client
            .send_bulk(phones, "hello all", "https://example.com/delivery")
            .await
            .unwrap();
        assert_eq!(response.get("campaign"), Some(&json!(3)));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/api/v1/sms/send/bulk");
        assert_eq!(request.header("content-type"), Some("application/json"));

        let body = json_body(&request);
        assert_eq!(
            body,
            json!({
                "phone": r#"["251911111111","+251922222222","251933333333"]"#,
                "msg": "hello all",
                "notify": "https://example.com/delivery",
                "groupid": "42",
                "token": "test_token"
            })
        );
        let phone_list: Vec<String> =
            serde_json::from_str(body["phone"].as_str().unwrap()).unwrap();
        assert_eq!(phone_list, phones);
    }

    #[tokio::test]
    async fn token_and_phone_are_sent_verbatim() {
        let transport = FakeTransport::new(200, "{}");
        let client = GeezSmsClient::builder(" tok ")
            .base_url("https://example.invalid/api/v1/sms")
            .transport(transport.clone())
            .build()
            .unwrap();

        client.send_sms("+251912345678", "hi").await.unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"phone":"+251912345678","msg":"hi","token":" tok "}"#)
        );
    }

    #[tokio::test]
    async fn zero_account_ids_are_omitted() {
        let transport = FakeTransport::new(200, "{}");
        let client = GeezSmsClient::builder("test_token")
            .base_url("https://example.invalid/api/v1/sms")
            .shortcode_id(0)
            .group_id("0")
            .transport(transport.clone())
            .build()
            .unwrap();
        assert!(client.shortcode_id().is_none());
        assert!(client.group_id().is_none());

        client.send_sms("251912345678", "hi").await.unwrap();
        let body = json_body(&transport.last_request());
        assert!(body.get("shortcode_id").is_none());

        client
            .send_bulk(["251912345678"], "hi", "")
            .await
            .unwrap();
        let body = json_body(&transport.last_request());
        assert!(body.get("groupid").is_none());
    }

    #[tokio::test]
    async fn transport_failure_becomes_failed_result() {
        let transport = FakeTransport::failing("connection refused");
        let client = make_client(transport.clone());

        let response = client.send_sms("251912345678", "hello").await.unwrap();
        let failure = response.failure().expect("expected a failure result");
        assert_eq!(failure.message, "request failed");
        assert_eq!(failure.error_details, "connection refused");
        assert_eq!(transport.calls(), 1);

        assert_eq!(
            response.into_value(),
            json!({
                "status": false,
                "message": "request failed",
                "error_details": "connection refused"
            })
        );
    }

    #[tokio::test]
    async fn blank_transport_error_still_has_details() {
        let client = make_client(FakeTransport::failing(""));
        let response = client.send_otp("251912345678").await.unwrap();
        assert!(!response.failure().unwrap().error_details.is_empty());
    }

    #[tokio::test]
    async fn response_envelope_is_unwrapped_when_present() {
        let client = make_client(FakeTransport::new(200, r#"{"data": {"id": 1}}"#));
        let response = client.send_sms("251912345678", "hello").await.unwrap();
        assert_eq!(response, ApiResponse::Data(json!({"id": 1})));

        let client = make_client(FakeTransport::new(200, r#"{"id": 2}"#));
        let response = client.send_sms("251912345678", "hello").await.unwrap();
        assert_eq!(response, ApiResponse::Data(json!({"id": 2})));
    }

    #[tokio::test]
    async fn http_status_is_not_inspected() {
        let client = make_client(FakeTransport::new(
            422,
            r#"{"error": true, "msg": "Insufficient balance"}"#,
        ));
        let response = client.send_sms("251912345678", "hello").await.unwrap();
        assert_eq!(response.get("msg"), Some(&json!("Insufficient balance")));
    }

    #[tokio::test]
    async fn undecodable_body_becomes_failed_result() {
        let client = make_client(FakeTransport::new(502, "<html>Bad Gateway</html>"));
        let response = client.send_sms("251912345678", "hello").await.unwrap();
        let failure = response.failure().unwrap();
        assert_eq!(failure.message, "request failed");
        assert!(failure.error_details.starts_with("invalid JSON response"));
    }

    #[tokio::test]
    async fn replaced_transport_serves_later_calls() {
        let first = FakeTransport::new(200, r#"{"from": "first"}"#);
        let second = FakeTransport::new(200, r#"{"from": "second"}"#);
        let mut client = make_client(first.clone());

        let response = client.send_otp("251912345678").await.unwrap();
        assert_eq!(response.get("from"), Some(&json!("first")));

        let response = client
            .set_transport(second.clone())
            .send_otp("251912345678")
            .await
            .unwrap();
        assert_eq!(response.get("from"), Some(&json!("second")));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[tokio::test]
    async fn custom_prefixes_change_phone_validation() {
        let transport = FakeTransport::new(200, "{}");
        let client = GeezSmsClient::builder("test_token")
            .phone_prefixes(PhonePrefixes::new(["2517", "+2517"]))
            .transport(transport.clone())
            .build()
            .unwrap();

        client.send_otp("251712345678").await.unwrap();
        assert!(client.send_otp("251912345678").await.is_err());
        assert_eq!(transport.calls(), 1);
        assert_eq!(
            PhoneNumber::new("251912345678").unwrap().as_str(),
            "251912345678"
        );
    }
}
