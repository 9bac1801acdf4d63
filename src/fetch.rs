use anyhow::{Context, Result};
use std::time::Duration;

/// Network collaborator used by the paste service.
pub trait PasteFetcher {
    fn fetch_text(&self, url: &str) -> Result<String>;
    fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        self.client
            .get(url)
            .send()
            .with_context(|| format!("request {url}"))?
            .error_for_status()
            .with_context(|| format!("status for {url}"))
    }
}

impl PasteFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?
            .text()
            .with_context(|| format!("read body {url}"))
    }

    fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        self.get(url)?
            .json()
            .with_context(|| format!("decode json {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_without_network() -> Result<()> {
        let fetcher = HttpFetcher::new("vgc-tracker/test", Duration::from_secs(5))?;
        let _: &dyn PasteFetcher = &fetcher;
        Ok(())
    }
}
