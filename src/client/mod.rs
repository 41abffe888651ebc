//! Client layer: HTTP plumbing, configuration, and one request handler per endpoint.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{BaseUrl, Credentials, ValidationError};

#[cfg(test)]
mod fake;
mod handler;

pub use handler::{
    LeaseDetailsHandler, LedgerHandler, OpenChargesHandler, PaymentHandler,
    PendingMoveInsHandler, RequestHandler, ResidentsByPropertyHandler, ResidentsHandler,
};

/// Scheme and host of the MRI tenant, e.g. `https://mrix5api.saas.mrisoftware.com`.
pub const BASE_MRI_DOMAIN_VAR: &str = "BASE_MRI_DOMAIN";
/// Path of the API script, e.g. `/mriapiservices/api.asp`.
pub const BASE_MRI_API_ENDPOINT_VAR: &str = "BASE_MRI_API_ENDPOINT";
pub const MRI_USERNAME_VAR: &str = "MRI_USERNAME";
pub const MRI_PASSWORD_VAR: &str = "MRI_PASSWORD";

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError>;

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
    credentials: Credentials,
}

impl ReqwestTransport {
    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request
            .basic_auth(
                self.credentials.username.as_str(),
                Some(self.credentials.password.as_str()),
            )
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        let response = self.authorized(self.client.get(url)).send()?;
        read_response(response)
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, BoxError> {
        let response = self.authorized(self.client.post(url)).json(body).send()?;
        read_response(response)
    }
}

fn read_response(response: reqwest::blocking::Response) -> Result<HttpResponse, BoxError> {
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok(HttpResponse { status, body })
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by the request handlers.
///
/// Payment records the provider rejects inside a 2xx response are not errors; they
/// come back as [`crate::PaymentSubmission::Rejected`].
pub enum MriError {
    /// Parameters failed validation; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Non-2xx HTTP status, with the message taken from the response body.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A 2xx response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] BoxError),
}

#[derive(Debug, Clone)]
/// Builder for [`MriClient`].
///
/// Use this when you need a timeout or a custom user-agent, or to read the
/// configuration from the environment.
pub struct MriClientBuilder {
    base_url: BaseUrl,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MriClientBuilder {
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Read `BASE_MRI_DOMAIN`, `BASE_MRI_API_ENDPOINT`, `MRI_USERNAME` and `MRI_PASSWORD`.
    ///
    /// The domain and endpoint are concatenated into the base URL. An unset or empty
    /// variable fails with [`ValidationError::MissingEnvironment`].
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`MriClientBuilder::from_env`], reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ValidationError> {
        let var = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ValidationError::MissingEnvironment { name })
        };

        let base_url = BaseUrl::from_parts(
            &var(BASE_MRI_DOMAIN_VAR)?,
            &var(BASE_MRI_API_ENDPOINT_VAR)?,
        )?;
        let credentials = Credentials::new(var(MRI_USERNAME_VAR)?, var(MRI_PASSWORD_VAR)?)?;
        Ok(Self::new(base_url, credentials))
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<MriClient, MriError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MriError::Transport(Box::new(err)))?;

        Ok(MriClient {
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport {
                client,
                credentials: self.credentials,
            }),
        })
    }
}

#[derive(Clone)]
/// Blocking MRI API client.
///
/// Holds the base URL and an authenticated HTTP transport. Each endpoint is reached
/// through its handler (see [`MriClient::residents`] and friends); a handler call
/// performs at most one HTTP request.
pub struct MriClient {
    base_url: BaseUrl,
    http: Arc<dyn HttpTransport>,
}

impl MriClient {
    /// Create a client with default HTTP settings.
    ///
    /// For a timeout or user-agent, use [`MriClient::builder`].
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
                credentials,
            }),
        }
    }

    pub fn builder(base_url: BaseUrl, credentials: Credentials) -> MriClientBuilder {
        MriClientBuilder::new(base_url, credentials)
    }

    /// Build a client from the `BASE_MRI_*` / `MRI_*` environment variables.
    pub fn from_env() -> Result<Self, MriError> {
        MriClientBuilder::from_env()?.build()
    }

    #[cfg(test)]
    pub(crate) fn with_transport(base_url: BaseUrl, http: Arc<dyn HttpTransport>) -> Self {
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// `<base>?$api=<endpoint>&$format=json` followed by the encoded query pairs.
    pub fn endpoint_url(&self, endpoint: &str, query: &[(String, String)]) -> String {
        let mut url = self.base_url.as_url().clone();
        url.set_query(Some(&format!("$api={endpoint}&$format=json")));
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url.into()
    }

    /// GET an endpoint and return the body of a 2xx response.
    pub(crate) fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<String, MriError> {
        let url = self.endpoint_url(endpoint, query);
        tracing::debug!(endpoint, %url, "GET");

        let response = self.http.get(&url).map_err(MriError::Transport)?;
        success_body(endpoint, response)
    }

    /// POST a JSON body to an endpoint and return the body of a 2xx response.
    pub(crate) fn post(&self, endpoint: &str, body: &Value) -> Result<String, MriError> {
        let url = self.endpoint_url(endpoint, &[]);
        tracing::debug!(endpoint, %url, "POST");

        let response = self.http.post_json(&url, body).map_err(MriError::Transport)?;
        success_body(endpoint, response)
    }

    pub fn residents_by_property(&self) -> ResidentsByPropertyHandler {
        ResidentsByPropertyHandler::new(self.clone())
    }

    pub fn residents(&self) -> ResidentsHandler {
        ResidentsHandler::new(self.clone())
    }

    pub fn lease_details(&self) -> LeaseDetailsHandler {
        LeaseDetailsHandler::new(self.clone())
    }

    pub fn open_charges(&self) -> OpenChargesHandler {
        OpenChargesHandler::new(self.clone())
    }

    pub fn pending_move_ins(&self) -> PendingMoveInsHandler {
        PendingMoveInsHandler::new(self.clone())
    }

    pub fn ledger(&self) -> LedgerHandler {
        LedgerHandler::new(self.clone())
    }

    pub fn payments(&self) -> PaymentHandler {
        PaymentHandler::new(self.clone())
    }
}

fn success_body(endpoint: &str, response: HttpResponse) -> Result<String, MriError> {
    tracing::debug!(endpoint, status = response.status, "response received");

    if !(200..=299).contains(&response.status) {
        let message = crate::transport::decode_error_message(&response.body);
        tracing::warn!(endpoint, status = response.status, %message, "MRI API error");
        return Err(MriError::Api {
            status: response.status,
            message,
        });
    }

    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::fake::{FakeTransport, base_url};
    use super::*;

    fn client(transport: &FakeTransport) -> MriClient {
        MriClient::with_transport(base_url(), Arc::new(transport.clone()))
    }

    #[test]
    fn endpoint_url_keeps_literal_api_prefix() {
        let transport = FakeTransport::new(200, "{}");
        let client = client(&transport);

        assert_eq!(
            client.endpoint_url("MRI_S-PMRM_ResidentsByPropertyID", &[]),
            "https://mrix5api.saas.mrisoftware.com/mriapiservices/api.asp\
             ?$api=MRI_S-PMRM_ResidentsByPropertyID&$format=json"
        );
        assert_eq!(
            client.endpoint_url(
                "MRI_S-PMRM_ResidentsByPropertyID",
                &[("RMPROPID".to_owned(), "GCNS01".to_owned())]
            ),
            "https://mrix5api.saas.mrisoftware.com/mriapiservices/api.asp\
             ?$api=MRI_S-PMRM_ResidentsByPropertyID&$format=json&RMPROPID=GCNS01"
        );
    }

    #[test]
    fn endpoint_url_encodes_query_values() {
        let transport = FakeTransport::new(200, "{}");
        let url = client(&transport).endpoint_url(
            "MRI_S-PMRM_Residents",
            &[("LastUpdate".to_owned(), "2024-01-01 10:00".to_owned())],
        );
        assert!(url.ends_with("&LastUpdate=2024-01-01+10%3A00"), "{url}");
    }

    #[test]
    fn get_returns_body_of_success_response() {
        let transport = FakeTransport::new(200, r#"{"value": []}"#);
        let body = client(&transport).get("MRI_S-PMRM_OpenCharges", &[]).unwrap();
        assert_eq!(body, r#"{"value": []}"#);

        let request = transport.last_request();
        assert_eq!(request.method, "GET");
        assert!(request.url.contains("$api=MRI_S-PMRM_OpenCharges"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn post_sends_json_body() {
        let transport = FakeTransport::new(201, r#"{"value": []}"#);
        client(&transport)
            .post("MRI_S-PMRM_PaymentDetailsByPropertyID", &json!({ "value": [] }))
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.body, Some(json!({ "value": [] })));
    }

    #[test]
    fn non_success_status_uses_error_from_body() {
        let transport = FakeTransport::new(500, r#"{"error": "Internal Server Error"}"#);
        let err = client(&transport).get("MRI_S-PMRM_Residents", &[]).unwrap_err();
        match err {
            MriError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_gets_generic_message() {
        let transport = FakeTransport::new(503, "<html>Service Unavailable</html>");
        let err = client(&transport).get("MRI_S-PMRM_Residents", &[]).unwrap_err();
        assert!(matches!(
            err,
            MriError::Api { status: 503, ref message } if message == "An error occurred"
        ));
        assert_eq!(err.to_string(), "API error 503: An error occurred");
    }

    #[test]
    fn transport_failure_is_reported() {
        let transport = FakeTransport::failing("connection refused");
        let err = client(&transport).get("MRI_S-PMRM_Residents", &[]).unwrap_err();
        assert!(matches!(err, MriError::Transport(_)));
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn builder_reads_environment_lookup() {
        let vars = HashMap::from([
            (BASE_MRI_DOMAIN_VAR, "https://mrix5api.saas.mrisoftware.com"),
            (BASE_MRI_API_ENDPOINT_VAR, "/mriapiservices/api.asp"),
            (MRI_USERNAME_VAR, "user"),
            (MRI_PASSWORD_VAR, "pass"),
        ]);

        let builder =
            MriClientBuilder::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned()))
                .unwrap();
        assert_eq!(
            builder.base_url.as_str(),
            "https://mrix5api.saas.mrisoftware.com/mriapiservices/api.asp"
        );
        assert_eq!(builder.credentials.username.as_str(), "user");

        let client = builder.timeout(Duration::from_secs(30)).build().unwrap();
        assert_eq!(client.base_url(), &base_url());
    }

    #[test]
    fn builder_names_missing_variable() {
        let err = MriClientBuilder::from_lookup(|name| match name {
            BASE_MRI_DOMAIN_VAR => Some("https://mrix5api.saas.mrisoftware.com".to_owned()),
            BASE_MRI_API_ENDPOINT_VAR => Some("/mriapiservices/api.asp".to_owned()),
            MRI_USERNAME_VAR => Some(String::new()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingEnvironment {
                name: MRI_USERNAME_VAR
            }
        );
        assert_eq!(err.to_string(), "environment variable MRI_USERNAME is not set");
    }
}
