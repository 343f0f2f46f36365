use crate::{HealthError, HealthProbe, HealthResult, MonitorSettings, ServerState, classify_within};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

/// Probes `GET {base_url}/health` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpProbe {
    /// Create a new HTTP probe.
    ///
    /// # Arguments
    /// * `url` - Full URL of the health endpoint
    /// * `timeout` - How long one probe may wait for a response
    pub fn new(url: &str, timeout: Duration) -> HealthResult<Self> {
        let parsed = Url::parse(url).map_err(|e| HealthError::invalid_url(url, e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HealthError::invalid_url(url, "scheme must be http or https"));
        }

        // No client-level timeout: the probe's own deadline decides `waking`
        let client = Client::builder().pool_max_idle_per_host(1).build()?;

        Ok(Self {
            client,
            url: parsed,
            timeout,
        })
    }

    pub fn from_settings(settings: &MonitorSettings) -> HealthResult<Self> {
        Self::new(&settings.health_url, settings.probe_timeout)
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn probe(&self) -> ServerState {
        debug!("Health probe requesting {}", self.url);

        let request = async {
            self.client
                .get(self.url.clone())
                .send()
                .await
                .map(|response| response.status().as_u16())
        };

        classify_within(self.timeout, request).await
    }
}
