// src/core/net.rs
//
// Blocking HTTPS GET. One request per call: no retries, transport default
// timeouts. The `Fetch` trait is the seam the pipeline is tested through.

use std::time::Instant;

use reqwest::{blocking::Client, StatusCode};
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("HTTP 404 Not Found: {0}")]
    NotFound(String),

    #[error("HTTP error: {status} {url}")]
    Status { status: StatusCode, url: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// "GET url → document body".
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, NetError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, NetError> {
        (**self).get(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, NetError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, NetError> {
        let t = Instant::now();
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(NetError::NotFound(s!(url)));
        }
        if !status.is_success() {
            return Err(NetError::Status { status, url: s!(url) });
        }

        let body = resp.text()?;
        logd!("Net: GET {} → {} bytes in {:?}", url, body.len(), t.elapsed());
        Ok(body)
    }
}
