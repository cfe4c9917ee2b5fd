use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// User agent sent with every request; Reddit's public JSON API rejects
/// anonymous library defaults.
const APP_USER_AGENT: &str = concat!(
    "redsnap/",
    env!("CARGO_PKG_VERSION"),
    " (Reddit thread snapshot tool)"
);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static THREAD_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?reddit\.com/r/[^/]+/comments/[^/]+([/?#]|$)").unwrap()
});

/// Returns true when `url` points at a Reddit thread.
///
/// # Example
/// ```rust
/// use redsnap::is_thread_url;
///
/// assert!(is_thread_url("https://www.reddit.com/r/rust/comments/abc123/title/"));
/// assert!(!is_thread_url("https://www.reddit.com/r/rust/"));
/// ```
pub fn is_thread_url(url: &str) -> bool {
    THREAD_URL.is_match(url)
}

/// An asynchronous `Client` for fetching threads from the public Reddit
/// JSON API.
///
/// This client is built on top of a [`reqwest::Client`], so as per that
/// documentation it is advised you create a single one and **reuse** it.
/// `Client` is both [`Send`] and [`Sync`] so you don't need to wrap it to
/// reuse it.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    /// Creates a new client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a new client with the given backing [`reqwest::Client`].
    ///
    /// # Example
    /// ```rust
    /// use redsnap::Client;
    ///
    /// let reqwest_client = reqwest::Client::new();
    ///
    /// // Both clients share the same underlying pool.
    /// let client1 = Client::with_client(reqwest_client.clone());
    /// let client2 = Client::with_client(reqwest_client);
    /// ```
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches a thread as the raw JSON document Reddit returns: the post
    /// listing followed by the comment listing.
    ///
    /// The thread URL is rewritten onto the `.json` endpoint, keeping any
    /// query parameters. Redirects are followed; non-success statuses and
    /// non-JSON bodies fail with [`Error::Http`].
    ///
    /// # Example
    /// ```rust,no_run
    /// # #[tokio::main]
    /// # async fn main() -> redsnap::Result<()> {
    /// use redsnap::Client;
    ///
    /// let client = Client::new();
    /// let response = client
    ///     .fetch_thread("https://www.reddit.com/r/rust/comments/abc123/title/")
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_thread(&self, thread_url: &str) -> Result<Value> {
        let endpoint = json_endpoint(thread_url)?;
        let response = self
            .client
            .get(endpoint)
            .header(USER_AGENT, APP_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites a thread URL onto its `.json` endpoint.
///
/// The query string is kept, any fragment is dropped, and a path already
/// ending in `.json` is left alone.
fn json_endpoint(thread_url: &str) -> Result<Url> {
    let mut url =
        Url::parse(thread_url).map_err(|_| Error::InvalidUrl(thread_url.to_owned()))?;
    url.set_fragment(None);
    if !url.path().ends_with(".json") {
        let path = format!("{}.json", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
