//! Transport seam between the panel and the remote device
//!
//! The controller only ever talks to the [`Transport`] trait; the production
//! implementation speaks HTTP through a pooled `reqwest` client. Tests swap
//! in a scripted implementation.

use async_trait::async_trait;
use url::Url;

use crate::config::PanelConfig;
use crate::device::{ControlPayload, StateDoc};
use crate::errors::Result;

/// Generic async request/response primitive for the two device endpoints
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch and decode the current state document
    async fn fetch_state(&self) -> Result<StateDoc>;

    /// Push a control payload; the response body is not consumed
    async fn send_control(&self, payload: &ControlPayload) -> Result<()>;
}

/// HTTP transport against the device's REST endpoints
pub struct HttpTransport {
    client: reqwest::Client,
    state_url: Url,
    control_url: Url,
}

impl HttpTransport {
    /// Build a transport from the panel configuration
    pub fn new(config: &PanelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            state_url: config.state_url()?,
            control_url: config.control_url()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_state(&self) -> Result<StateDoc> {
        let response = self
            .client
            .get(self.state_url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<StateDoc>().await?)
    }

    async fn send_control(&self, payload: &ControlPayload) -> Result<()> {
        self.client
            .post(self.control_url.clone())
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
