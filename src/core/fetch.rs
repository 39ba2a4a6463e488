use log::{debug, info};
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};
use url::Url;

use crate::config::Config;
use crate::error::schedule::ScheduleError;

pub struct TimetableClient {
    client: Client,
}

impl TimetableClient {
    pub fn new(config: &Config) -> Result<Self, ScheduleError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(TimetableClient { client })
    }

    pub async fn get_page(&self, url: Url) -> Result<String, ScheduleError> {
        info!("fetching schedule page {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::new(&format!(
                "schedule page returned {}",
                status
            )));
        }

        let text = response.text().await?;
        debug!("received {} bytes", text.len());
        Ok(text)
    }
}

/// `Some(url)` when `source` is an http(s) address rather than a file path.
pub fn source_url(source: &str) -> Option<Url> {
    Url::parse(source)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Loads page HTML from a URL or, failing that, from a local file.
pub async fn load_source(config: &Config, source: &str) -> Result<String, ScheduleError> {
    match source_url(source) {
        Some(url) => TimetableClient::new(config)?.get_page(url).await,
        None => {
            info!("reading schedule page from {}", source);
            Ok(tokio::fs::read_to_string(source).await?)
        }
    }
}
