//! Remote app collection
//!
//! Apps published through the admin dashboard live in an external document
//! store. Any endpoint that returns the records as JSON will do; the index
//! only needs `id` and `name`, everything else is optional.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{join_url, SearchIndex, SearchItem, FALLBACK_IMAGE};
use crate::error::FetchError;

/// One document from the remote collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "img", alias = "icon")]
    pub image: Option<String>,
}

impl RemoteRecord {
    /// Convert into an index item.
    ///
    /// Keywords are the tags followed by the lowercased name and category.
    pub fn into_item(self, base_url: &str) -> SearchItem {
        let category = self.category.unwrap_or_default();
        let keywords: Vec<String> = self
            .tags
            .unwrap_or_default()
            .into_iter()
            .chain([self.name.to_lowercase(), category.to_lowercase()])
            .collect();

        let path = join_url(base_url, &format!("app.html?id={}", self.id));
        let img = match self.image {
            Some(url) if !url.trim().is_empty() => url,
            _ => join_url(base_url, FALLBACK_IMAGE),
        };

        SearchItem::new(self.id, self.name, category, keywords, path, img)
    }
}

/// Accepted payload shapes: a bare array or `{"items": [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionPayload {
    List(Vec<serde_json::Value>),
    Wrapped { items: Vec<serde_json::Value> },
}

/// Decode a collection body record by record.
///
/// Only a body that is not a collection at all is an error. Records that
/// do not decode are skipped, so one bad document cannot hide the rest.
pub fn parse_collection(body: &str) -> Result<Vec<RemoteRecord>, FetchError> {
    let values = match serde_json::from_str(body)? {
        CollectionPayload::List(values) => values,
        CollectionPayload::Wrapped { items } => items,
    };

    let total = values.len();
    let records: Vec<RemoteRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(position, "Skipping malformed remote record: {}", e);
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(skipped = total - records.len(), total, "Remote collection had malformed records");
    }
    Ok(records)
}

/// A source of remote records
pub trait RemoteCollection {
    fn fetch(&self) -> impl Future<Output = Result<Vec<RemoteRecord>, FetchError>> + Send;
}

/// Remote collection served over HTTP
#[derive(Debug, Clone)]
pub struct HttpCollection {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCollection {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(FetchError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("dlhub-search/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteCollection for HttpCollection {
    fn fetch(&self) -> impl Future<Output = Result<Vec<RemoteRecord>, FetchError>> + Send {
        let request = self.client.get(&self.endpoint);
        let endpoint = self.endpoint.clone();

        async move {
            debug!(%endpoint, "Fetching remote collection");
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            parse_collection(&body)
        }
    }
}

/// A fetch running in the background.
///
/// The index stays usable while this is in flight; hand the outcome to
/// [`SearchIndex::apply_fetch`] once it resolves.
#[derive(Debug)]
pub struct PendingFetch {
    handle: JoinHandle<Result<Vec<RemoteRecord>, FetchError>>,
}

impl PendingFetch {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the fetch. Cancel-safe, so it can sit in a `select!` loop.
    pub async fn wait(&mut self) -> Result<Vec<RemoteRecord>, FetchError> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(e) => Err(FetchError::Task(e.to_string())),
        }
    }
}

/// Start fetching without waiting for the answer. There is no retry.
pub fn spawn_fetch<C>(source: C) -> PendingFetch
where
    C: RemoteCollection + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move { source.fetch().await });
    PendingFetch { handle }
}

impl SearchIndex {
    /// Fold a fetch outcome into the index.
    ///
    /// Errors and empty collections leave the static catalog in place.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<RemoteRecord>, FetchError>) -> usize {
        match outcome {
            Ok(records) if records.is_empty() => {
                info!("Remote collection returned no items, keeping static catalog");
                0
            }
            Ok(records) => {
                let received = records.len();
                let added = self.merge_remote(records);
                info!(received, added, total = self.len(), "Merged remote collection");
                added
            }
            Err(e) => {
                warn!("Remote fetch failed, serving static catalog only: {}", e);
                0
            }
        }
    }

    /// Fetch once from `source` and merge the result
    pub async fn refresh<C: RemoteCollection>(&mut self, source: &C) -> usize {
        let outcome = source.fetch().await;
        self.apply_fetch(outcome)
    }
}
