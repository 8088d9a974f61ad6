//! HTTP client for the inventaris backend.

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use inv_model::{ApiResponse, Inventaris, Vendor, VendorUpdate};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::Session;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("inventaris-admin/", env!("CARGO_PKG_VERSION"));

/// Body returned by write endpoints; only the message is used.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    message: String,
}

/// Blocking client for the vendor and inventory endpoints.
#[derive(Debug, Clone)]
pub struct InventarisClient {
    http: Client,
    base_url: Url,
    session: Session,
}

impl InventarisClient {
    /// Creates a client for the configured backend.
    ///
    /// An anonymous session is accepted here; requests made with it fail
    /// with [`ClientError::Unauthenticated`].
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT_VALUE)
            .timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Builds an endpoint URL from path segments, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Fetches all vendors (`GET /vendor`).
    pub fn list_vendors(&self) -> Result<Vec<Vendor>> {
        let response: ApiResponse<Vec<Vendor>> = self.get_json(&["vendor"])?;
        tracing::debug!(count = response.data.len(), "fetched vendors");
        Ok(response.data)
    }

    /// Fetches one vendor (`GET /vendor/{id}`).
    pub fn get_vendor(&self, vendor_id: &str) -> Result<Vendor> {
        let response: ApiResponse<Vendor> = self.get_json(&["vendor", vendor_id])?;
        Ok(response.data)
    }

    /// Fetches inventory items joined with their relation names
    /// (`GET /inventaris/with-relations`).
    pub fn list_inventaris(&self) -> Result<Vec<Inventaris>> {
        let response: ApiResponse<Vec<Inventaris>> =
            self.get_json(&["inventaris", "with-relations"])?;
        tracing::debug!(count = response.data.len(), "fetched inventory");
        Ok(response.data)
    }

    /// Saves a vendor (`PUT /vendor/{id}`) and returns the server message.
    ///
    /// `updated_by` is always taken from the session user.
    pub fn update_vendor(&self, vendor_id: &str, mut update: VendorUpdate) -> Result<String> {
        let token = self.session.token()?;
        update.updated_by = self.session.user().unwrap_or_default().to_string();
        update.validate()?;

        let url = self.endpoint(&["vendor", vendor_id])?;
        tracing::debug!("Updating vendor at {}", url);

        let request = self.http.put(url).bearer_auth(token).json(&update);
        let body = self.send(request, vendor_id)?;
        if body.trim().is_empty() {
            return Ok(String::new());
        }
        let ack: Acknowledgement = serde_json::from_str(&body)?;
        Ok(ack.message)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let token = self.session.token()?;
        let url = self.endpoint(segments)?;
        tracing::debug!("Fetching {}", url);

        let request = self.http.get(url).bearer_auth(token);
        let body = self.send(request, &segments.join("/"))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn send(&self, request: RequestBuilder, resource: &str) -> Result<String> {
        let response = request.send()?;
        Self::handle_response(response, resource)
    }

    /// Checks the status and returns the body text.
    fn handle_response(response: Response, resource: &str) -> Result<String> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(resource.to_string()));
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> InventarisClient {
        let config = ClientConfig::default().with_base_url(base_url);
        InventarisClient::new(&config, Session::Anonymous).expect("client")
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client("http://localhost:8080/api/");
        let url = client.endpoint(&["vendor", "V 01/x"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/vendor/V%2001%2Fx");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let config = ClientConfig::default().with_base_url("mailto:admin@example.com");
        assert!(matches!(
            InventarisClient::new(&config, Session::Anonymous),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_anonymous_session_never_sends() {
        // Port 9 (discard) is never contacted; the session check comes first.
        let client = client("http://127.0.0.1:9");
        assert!(matches!(
            client.list_vendors(),
            Err(ClientError::Unauthenticated)
        ));
    }
}
