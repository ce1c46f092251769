use crate::{
    config::Settings,
    constants::{NCT_ID_PARAM, TRIALS_KEY},
    ctml::Record,
    identifier::NctId,
};
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

/// What the registry answered for one NCT ID
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The first entry of a non-empty `trials` list
    Found(Record),
    /// A well-formed answer with an empty `trials` list
    NotFound,
    /// Non-200 status, or a body without a `trials` list
    Rejected { url: Url, body: String },
}

/// Client for the NCI clinical trials endpoint
pub struct TrialsClient {
    pub api_url: Url,
    pub retry_delay: Duration,
    pub client: Client,
}

impl TrialsClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(TrialsClient {
            api_url: settings.api_url.clone(),
            retry_delay: settings.retry_delay,
            client,
        })
    }

    /// URL queried for `id`, carrying the ID in its original casing
    pub fn trial_url(&self, id: &NctId) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut().append_pair(NCT_ID_PARAM, id.as_str());
        url
    }

    /// Look up one trial.
    ///
    /// A request that fails in transit is retried once after `retry_delay`;
    /// if the retry fails too the error is returned.
    pub async fn lookup(&self, id: &NctId) -> Result<Lookup> {
        let url = self.trial_url(id);
        tracing::debug!(%url, "querying registry");

        let (status, body) = match self.get(&url).await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%url, error = %err, "request failed, retrying once");
                tokio::time::sleep(self.retry_delay).await;
                self.get(&url)
                    .await
                    .with_context(|| format!("API request {url} failed twice"))?
            }
        };

        Ok(interpret(url, status, body))
    }

    async fn get(&self, url: &Url) -> reqwest::Result<(StatusCode, String)> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    trials: Vec<Record>,
}

/// Classify a registry answer
pub fn interpret(url: Url, status: StatusCode, body: String) -> Lookup {
    if status != StatusCode::OK {
        return Lookup::Rejected { url, body };
    }
    match serde_json::from_str::<ApiResponse>(&body) {
        Ok(api_response) => match api_response.trials.into_iter().next() {
            Some(record) => Lookup::Found(record),
            None => Lookup::NotFound,
        },
        Err(err) => {
            tracing::debug!(%url, error = %err, "response has no usable '{TRIALS_KEY}' list");
            Lookup::Rejected { url, body }
        }
    }
}
