/// Common test utilities for watchlist client integration tests
///
/// Spawns the indexer-mock backend in-process on an ephemeral port and hands
/// back its base URL plus a direct handle to the store for seeding.

use std::sync::{Arc, Mutex};

use indexer_mock::server::create_router;
use indexer_mock::store::WalletStore;
use tokenwatch::{Notifier, Severity};

/// Backend mock running in-process.
pub struct MockBackend {
    pub base_url: String,
    pub store: Arc<WalletStore>,
}

pub async fn spawn_backend() -> anyhow::Result<MockBackend> {
    let store = Arc::new(WalletStore::new());
    let router = create_router(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            log::error!("Mock backend exited: {}", e);
        }
    });

    Ok(MockBackend {
        base_url: format!("http://{}", addr),
        store,
    })
}

/// A base URL nothing listens on, for provoking network failures.
pub fn dead_base_url() -> String {
    "http://127.0.0.1:9".to_string()
}

/// Notifier that records everything it is shown, for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(severity, _)| *severity == Severity::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(severity, _)| *severity == Severity::Info)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
