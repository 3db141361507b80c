//! SoftLayer REST client

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;
use std::time::Duration;

use super::credentials::{CredentialResolver, Credentials};
use crate::config::api;
use crate::error::{Result, SlError};

/// Error document returned by the API on failure
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

/// One remote method call
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    service: &'a str,
    method: &'a str,
    id: Option<u64>,
    mask: Option<String>,
    filter: Option<String>,
}

impl<'a> ApiRequest<'a> {
    pub fn new(service: &'a str, method: &'a str) -> Self {
        Self {
            service,
            method,
            id: None,
            mask: None,
            filter: None,
        }
    }

    /// Call the method on one object of the service
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        let mask = mask.into();
        if !mask.is_empty() {
            self.mask = Some(mask);
        }
        self
    }

    pub fn filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }
}

fn http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(api::TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Credential values given on the command line, resolved on first use
struct DeferredAuth {
    resolver: CredentialResolver,
    username: Option<String>,
    api_key: Option<String>,
    endpoint: Option<String>,
}

enum Auth {
    Ready(Credentials),
    Deferred(DeferredAuth),
}

/// Build the full URL for a request, query string included
pub(crate) fn request_url(endpoint: &str, request: &ApiRequest<'_>) -> String {
    let mut url = format!("{}/{}", endpoint.trim_end_matches('/'), request.service);
    if let Some(id) = request.id {
        url.push_str(&format!("/{}", id));
    }
    url.push_str(&format!("/{}{}", request.method, api::FORMAT_SUFFIX));

    let mut params = Vec::new();
    if let Some(mask) = &request.mask {
        params.push(format!(
            "objectMask={}",
            urlencoding::encode(&format!("mask[{}]", mask))
        ));
    }
    if let Some(filter) = &request.filter {
        params.push(format!("objectFilter={}", urlencoding::encode(filter)));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// SoftLayer API client
pub struct SlClient {
    client: Client,
    auth: Auth,
}

impl SlClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: http_client(),
            auth: Auth::Ready(credentials),
        }
    }

    /// Client that looks up its credentials when the first call is made,
    /// so input errors are reported before missing credentials
    pub fn deferred(
        resolver: CredentialResolver,
        username: Option<&str>,
        api_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Self {
        Self {
            client: http_client(),
            auth: Auth::Deferred(DeferredAuth {
                resolver,
                username: username.map(String::from),
                api_key: api_key.map(String::from),
                endpoint: endpoint.map(String::from),
            }),
        }
    }

    fn credentials(&self) -> Result<Cow<'_, Credentials>> {
        match &self.auth {
            Auth::Ready(credentials) => Ok(Cow::Borrowed(credentials)),
            Auth::Deferred(pending) => pending
                .resolver
                .resolve(
                    pending.username.as_deref(),
                    pending.api_key.as_deref(),
                    pending.endpoint.as_deref(),
                )
                .map(Cow::Owned),
        }
    }

    /// Perform a GET call and decode the JSON body
    pub async fn call<T: DeserializeOwned>(&self, request: &ApiRequest<'_>) -> Result<T> {
        let credentials = self.credentials()?;
        let url = request_url(&credentials.endpoint, request);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&credentials.username, Some(&credentials.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => match err.code {
                    Some(code) => format!("{}: {}", code, err.error),
                    None => err.error,
                },
                Err(_) if !body.trim().is_empty() => body,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(SlError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
