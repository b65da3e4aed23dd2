use crate::{PollSource, Result};

use sb_core::Record;

use async_trait::async_trait;
use log::warn;
use reqwest::{Client, RequestBuilder};

/// Poll-style source that pulls a JSON array of records from an HTTP
/// endpoint. An optional bearer token is read from the environment at
/// construction time, never stored in configuration files.
pub struct HttpPollSource {
    client: Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpPollSource {
    pub fn new(endpoint: String, bearer_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            bearer_token,
        }
    }

    pub fn from_env(endpoint: String, token_env: &str) -> Self {
        Self::new(endpoint, std::env::var(token_env).ok())
    }

    fn request(&self) -> RequestBuilder {
        let request = self.client.get(&self.endpoint);

        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl PollSource for HttpPollSource {
    /// Probes the endpoint so a bad URL or unreachable host surfaces
    /// at startup instead of on the first tick.
    async fn init(&mut self) -> Result<()> {
        self.request().send().await?.error_for_status()?;

        Ok(())
    }

    async fn poll(&mut self) -> Result<Vec<Record>> {
        let response = self.request().send().await?.error_for_status()?;
        let values: Vec<serde_json::Value> = response.json().await?;

        let records = values
            .into_iter()
            .filter_map(|value| match Record::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!("Dropping malformed upstream entry: {error}");

                    None
                }
            })
            .collect();

        Ok(records)
    }
}
