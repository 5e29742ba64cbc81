//! Transport collaborator for contact submissions.
//!
//! The store never talks to the network itself; the event loop hands the
//! submission to a [`ContactClient`] so tests can swap in a fake.

use crate::config::ApiConfig;
use crate::contact::error::ContactError;
use crate::contact::form::FormData;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Path of the contact-submission endpoint, relative to the API base URL.
pub const CONTACT_PATH: &str = "/contacts/contact";

#[async_trait]
pub trait ContactClient: Send + Sync {
    /// Post the form to the contact endpoint and return the HTTP status code.
    ///
    /// Only transport failures are errors here; classifying the status is
    /// the caller's job.
    async fn post_contact(&self, form: &FormData) -> Result<u16, ContactError>;
}

/// reqwest-backed client sharing one base URL and credentials policy.
pub struct HttpContactClient {
    http: reqwest::Client,
    endpoint: Url,
    auth_token: Option<String>,
}

impl HttpContactClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ContactError> {
        let endpoint = contact_endpoint(&config.base_url)?;
        let mut builder = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            endpoint,
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactClient for HttpContactClient {
    async fn post_contact(&self, form: &FormData) -> Result<u16, ContactError> {
        let mut request = self.http.post(self.endpoint.clone()).json(form);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Ok(response.status().as_u16())
    }
}

/// Join the base URL and [`CONTACT_PATH`], keeping any path prefix of the base
/// (`https://host/api` becomes `https://host/api/contacts/contact`).
fn contact_endpoint(base_url: &str) -> Result<Url, ContactError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{}{}", trimmed, CONTACT_PATH))
        .map_err(|_| ContactError::InvalidBaseUrl(base_url.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContactError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(url)
}
