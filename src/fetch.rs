use bytes::Bytes;
use log::debug;
use reqwest::{
    Client, ClientBuilder,
    header::{self, HeaderMap, HeaderValue},
};

use crate::{
    config::Config,
    errors::{Error, Result},
};

/// Read-only access to the remote catalog.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch_text(&self, url: &str) -> Result<String>;

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let referer =
            HeaderValue::from_str(&config.referer).map_err(|_| Error::InvalidHeader {
                name: "referer",
                value: config.referer.clone(),
            })?;
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, referer);

        let client = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| Error::network(&config.referer, err))?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {url}");
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| Error::network(url, err))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|err| Error::network(url, err))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        self.get(url)
            .await?
            .bytes()
            .await
            .map_err(|err| Error::network(url, err))
    }
}
