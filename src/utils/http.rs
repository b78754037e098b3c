//! HTTP helpers for downloading profiles and uploading the result to a gist

use std::time::Duration;

use log::{debug, info};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Proxy, StatusCode};
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::settings::{GistSettings, HttpSettings};

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    #[error("No gist id configured")]
    MissingGistId,

    #[error("Failed to create tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Parse a URL and make sure it can be fetched over HTTP
pub fn parse_http_url(url: &str) -> Result<Url, HttpError> {
    let parsed = Url::parse(url).map_err(|source| HttpError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(HttpError::UnsupportedScheme(scheme.to_string())),
    }
}

/// Endpoint updating a single gist
pub fn gist_url(api_base: &str, gist_id: &str) -> Result<Url, HttpError> {
    let base = api_base.trim_end_matches('/');
    parse_http_url(&format!("{}/gists/{}", base, gist_id))
}

/// Body of a gist update replacing the content of one file
pub fn gist_payload(filename: &str, content: &str) -> serde_json::Value {
    json!({
        "files": {
            filename: { "content": content }
        }
    })
}

fn build_client(settings: &HttpSettings) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str());

    if let Some(proxy) = settings.proxy.as_deref().filter(|p| !p.is_empty()) {
        client_builder = client_builder.proxy(Proxy::all(proxy)?);
    }

    Ok(client_builder.build()?)
}

/// Accept any 2xx status, the same rule for downloads and uploads
fn check_status(status: StatusCode) -> Result<(), HttpError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(HttpError::Status(status))
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, HttpError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}

/// Download a profile as text
pub async fn web_get_async(url: &str, settings: &HttpSettings) -> Result<String, HttpError> {
    let url = parse_http_url(url)?;
    let client = build_client(settings)?;

    debug!("Fetching {}", url);
    let response = client.get(url).send().await?;
    check_status(response.status())?;

    Ok(response.text().await?)
}

/// Synchronous version of [`web_get_async`]
pub fn web_get(url: &str, settings: &HttpSettings) -> Result<String, HttpError> {
    block_on(web_get_async(url, settings))?
}

/// Replace the configured file of a gist with `content`
pub async fn upload_gist_async(
    gist: &GistSettings,
    token: &str,
    content: &str,
    settings: &HttpSettings,
) -> Result<(), HttpError> {
    let gist_id = gist
        .id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(HttpError::MissingGistId)?;
    if token.trim().is_empty() {
        return Err(HttpError::MissingToken);
    }

    let url = gist_url(&gist.api_base, gist_id)?;
    let client = build_client(settings)?;

    let response = client
        .patch(url)
        .header(AUTHORIZATION, format!("token {}", token.trim()))
        .header(ACCEPT, "application/vnd.github+json")
        .json(&gist_payload(&gist.filename, content))
        .send()
        .await?;
    check_status(response.status())?;

    info!("Gist {} updated: file {}", gist_id, gist.filename);
    Ok(())
}

/// Synchronous version of [`upload_gist_async`]
pub fn upload_gist(
    gist: &GistSettings,
    token: &str,
    content: &str,
    settings: &HttpSettings,
) -> Result<(), HttpError> {
    block_on(upload_gist_async(gist, token, content, settings))?
}
