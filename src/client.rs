// src/client.rs
use crate::config::Config;
use crate::error::ScrapeError;
use reqwest::Client;

// Status Invest serves a stripped-down page to unknown agents, so the
// request impersonates a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en;q=0.8";
const REFERER: &str = "https://statusinvest.com.br/";

pub struct StatusInvestClient {
    client: Client,
    base_url: String,
}

impl StatusInvestClient {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Category and ticker are opaque path segments routed by the upstream
    /// site; they are percent-encoded but not validated against a known set.
    pub fn page_url(&self, category: &str, ticker: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(category),
            urlencoding::encode(ticker)
        )
    }

    /// Issues exactly one GET per call. No retries, no caching.
    pub async fn fetch_page(&self, category: &str, ticker: &str) -> Result<String, ScrapeError> {
        if category.trim().is_empty() || ticker.trim().is_empty() {
            return Err(ScrapeError::MissingParameter);
        }

        let url = self.page_url(category, ticker);
        log::info!("Fetching {}", url);

        let res = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Referer", REFERER)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScrapeError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(res.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> StatusInvestClient {
        StatusInvestClient::new(&Config {
            base_url: "https://statusinvest.com.br/".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn page_url_joins_segments_without_double_slash() {
        assert_eq!(
            client().page_url("acoes", "BBDC4"),
            "https://statusinvest.com.br/acoes/BBDC4"
        );
    }

    #[test]
    fn page_url_percent_encodes_segments() {
        assert_eq!(
            client().page_url("fundos imobiliarios", "KNRI11/extra"),
            "https://statusinvest.com.br/fundos%20imobiliarios/KNRI11%2Fextra"
        );
    }

    #[tokio::test]
    async fn empty_segments_fail_before_any_network_call() {
        let err = client().fetch_page("", "BBDC4").await.unwrap_err();
        assert!(matches!(err, ScrapeError::MissingParameter));

        let err = client().fetch_page("acoes", "  ").await.unwrap_err();
        assert!(matches!(err, ScrapeError::MissingParameter));
    }
}
