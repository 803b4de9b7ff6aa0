use crate::remote::{RemoteError, SearchBackend, SearchItem, SearchResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

mod end_to_end;

/// Search backend answering every query with a canned result.
pub(crate) struct StubBackend {
    outcome: StubOutcome,
    calls: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub(crate) enum StubOutcome {
    Items(Vec<(String, String)>),
    Fail,
}

impl StubBackend {
    pub fn with_items(items: &[(&str, &str)]) -> Self {
        let items = items
            .iter()
            .map(|(title, link)| (title.to_string(), link.to_string()))
            .collect();
        Self {
            outcome: StubOutcome::Items(items),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::with_items(&[])
    }

    pub fn failing() -> Self {
        Self {
            outcome: StubOutcome::Fail,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SearchBackend for StubBackend {
    async fn search(&self, _query: &str) -> Result<SearchResponse, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Items(items) => Ok(SearchResponse {
                items: items
                    .iter()
                    .map(|(title, link)| SearchItem {
                        title: title.clone(),
                        link: link.clone(),
                    })
                    .collect(),
                quota_remaining: None,
            }),
            StubOutcome::Fail => Err(RemoteError::NetworkError("dns lookup failed".to_string())),
        }
    }
}
