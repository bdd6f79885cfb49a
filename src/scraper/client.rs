// client.rs
use crate::domain::RunContext;
use crate::errors::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::form_urlencoded;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const SEARCH_BASE_URL: &str = "https://www.bing.com/maps";

pub struct MapsClient {
    client: Client,
}

impl MapsClient {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches one search-results page. Non-2xx statuses are errors; the
    /// body is only read on success.
    pub fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }
}

/// Builds the search URL for one query, with or without a neighborhood
/// filter. The query text is form-urlencoded into the `q` parameter.
pub fn search_url(ctx: &RunContext, neighborhood: Option<&str>) -> String {
    let query = match neighborhood {
        Some(bairro) => format!(
            "{} em {}, {}, {}",
            ctx.search_term, bairro, ctx.city, ctx.state
        ),
        None => format!("{} em {}, {}", ctx.search_term, ctx.city, ctx.state),
    };

    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{SEARCH_BASE_URL}?q={encoded}")
}
