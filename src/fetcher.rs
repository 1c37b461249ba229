use std::future::Future;

use tracing::debug;

use crate::error::{LiquipediaError, Result};

/// Source of raw page HTML.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// [`Fetcher`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.http.get(url).send().await.map_err(|e| LiquipediaError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LiquipediaError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.text().await.map_err(|e| LiquipediaError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
    }
}
