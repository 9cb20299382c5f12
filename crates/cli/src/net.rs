//! Background fetch tasks feeding completions back to the event loop.
//!
//! Every remote call runs in a spawned task so the UI thread never blocks on
//! the network. Completions arrive as [`NetEvent`]s on an mpsc channel; the
//! event loop applies them to the store, resolver cache, or profile state.

use std::sync::Arc;

use tokio::sync::mpsc;

use maester_api::{ApiClient, ApiError};
use maester_core::{Book, Category, Character, House, PageIndex};

/// One remote page of the active category.
#[derive(Clone, Debug)]
pub enum PageData {
    Houses(Vec<House>),
    Characters(Vec<Character>),
    Books(Vec<Book>),
}

/// A completed network call.
#[derive(Debug)]
pub enum NetEvent {
    /// A collection page fetch finished. `seq` is the store sequence number
    /// issued when the request began; stale completions are discarded there.
    Page {
        category: Category,
        seq: u64,
        outcome: Result<PageData, ApiError>,
    },
    /// A lord-name resolution finished.
    Lord {
        url: String,
        outcome: Result<String, ApiError>,
    },
    /// A profile record fetch finished.
    Profile {
        url: String,
        outcome: Result<Character, ApiError>,
    },
}

/// Spawns fetch tasks and routes their completions onto one channel.
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<ApiClient>,
    tx: mpsc::Sender<NetEvent>,
}

impl Fetcher {
    pub fn new(api: Arc<ApiClient>, tx: mpsc::Sender<NetEvent>) -> Self {
        Self { api, tx }
    }

    /// Fetches one collection page in the background.
    pub fn spawn_page(&self, category: Category, seq: u64, page: PageIndex) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = match category {
                Category::Houses => api.fetch_houses(page).await.map(PageData::Houses),
                Category::Characters => {
                    api.fetch_characters(page).await.map(PageData::Characters)
                }
                Category::Books => api.fetch_books(page).await.map(PageData::Books),
            };
            let _ = tx
                .send(NetEvent::Page {
                    category,
                    seq,
                    outcome,
                })
                .await;
        });
    }

    /// Resolves a lord hyperlink to the character's display name.
    pub fn spawn_lord(&self, url: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api.fetch_character(&url).await.map(|c| c.name);
            let _ = tx.send(NetEvent::Lord { url, outcome }).await;
        });
    }

    /// Fetches the full character record for the profile screen.
    pub fn spawn_profile(&self, url: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api.fetch_character(&url).await;
            let _ = tx.send(NetEvent::Profile { url, outcome }).await;
        });
    }
}
