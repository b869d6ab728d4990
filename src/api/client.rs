//! HTTP client for the people API

use reqwest::Client;
use url::Url;

use crate::api::people::PeoplePage;
use crate::core::config::Config;
use crate::error::{Result, StarviewError};

/// Client for the paginated people endpoint
///
/// One HTTP GET per `fetch_page` call. No authentication, no extra headers.
pub struct PeopleClient {
    client: Client,
    base_url: Url,
}

impl PeopleClient {
    /// Create a client from application configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Self::with_client(client, &config.base_url)
    }

    fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StarviewError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self { client, base_url })
    }

    /// Build the request URL for one page
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }

    /// Fetch one page of the people index
    pub async fn fetch_page(&self, page: u32) -> Result<PeoplePage> {
        let url = self.page_url(page);
        tracing::debug!(%url, "fetching people page");

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(StarviewError::Api {
                status: response.status(),
                url: url.to_string(),
            });
        }

        // Go through serde_json explicitly so a body without `results`
        // surfaces as a parse error rather than a silent default.
        let body = response.text().await?;
        let payload: PeoplePage = serde_json::from_str(&body)?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_page_query() {
        let client =
            PeopleClient::with_client(Client::new(), "https://swapi.dev/api/people").unwrap();

        assert_eq!(
            client.page_url(1).as_str(),
            "https://swapi.dev/api/people?page=1"
        );
        assert_eq!(
            client.page_url(7).as_str(),
            "https://swapi.dev/api/people?page=7"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = PeopleClient::with_client(Client::new(), "not a url");
        assert!(matches!(result, Err(StarviewError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_client_from_default_config() {
        let client = PeopleClient::from_config(&Config::default()).unwrap();
        assert_eq!(
            client.page_url(2).as_str(),
            "https://swapi.dev/api/people?page=2"
        );
    }
}
