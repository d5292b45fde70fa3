//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_openai;

use async_trait::async_trait;
use formula_assistant::completion::{
    ChatMessage, CompletionClient, CompletionError, RequestMediator,
};
use formula_assistant::config::{CredentialStatus, CredentialStore, SecureString};
use formula_assistant::clipboard::ClipboardSink;
use formula_assistant::ui::app::{App, ClientFactory, ClipboardProvider};
use formula_assistant::ui::events::AppEvent;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write a credential file with the given content into a fresh temp dir.
pub fn temp_credentials(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".env");
    std::fs::write(&path, content).expect("Failed to write credential file");
    (temp_dir, path)
}

/// Completion client that replays canned results and records every prompt.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedClient {
    pub fn replying(replies: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError> {
        self.calls.lock().push(messages);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

/// Completion client that takes a while and tracks how many calls overlap.
pub struct SlowClient {
    delay: Duration,
    reply: String,
    running: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl SlowClient {
    pub fn new(delay: Duration, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            delay,
            reply: reply.to_string(),
            running: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        })
    }

    /// Highest number of calls that were running at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for SlowClient {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.running.fetch_sub(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Clipboard that keeps whatever was copied.
#[derive(Clone, Default)]
pub struct ClipboardSpy {
    pub contents: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for ClipboardSpy {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.contents.lock().push(text.to_string());
        Ok(())
    }
}

/// An [`App`] wired to a scripted client, a temp credential file and a
/// private event channel.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub clipboard: ClipboardSpy,
    pub credential_dir: TempDir,
    pub runtime: tokio::runtime::Runtime,
}

impl Harness {
    /// A factory returning `client` for any key.
    pub fn factory_for(client: Arc<dyn CompletionClient>) -> ClientFactory {
        Arc::new(
            move |_key: &SecureString| -> Result<Arc<dyn CompletionClient>, CompletionError> {
                Ok(Arc::clone(&client))
            },
        )
    }

    pub fn new(factory: ClientFactory, credential: Option<&str>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let credential_dir = TempDir::new().expect("Failed to create temp dir");
        let store = CredentialStore::new(credential_dir.path().join(".env"));
        let (tx, rx) = mpsc::channel();
        let clipboard = ClipboardSpy::default();
        let spy = clipboard.clone();
        let provider: ClipboardProvider = Arc::new(
            move || -> Result<Box<dyn ClipboardSink>, String> { Ok(Box::new(spy.clone())) },
        );

        let mut app = App::new(
            store,
            factory,
            RequestMediator::new(runtime.handle().clone()),
            tx,
        )
        .with_clipboard_provider(provider);

        let status = match credential {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.to_string())),
            None => CredentialStatus::Unconfigured {
                reason: "no credential file".to_string(),
            },
        };
        app.install_credential(Ok(status));

        Self {
            app,
            events: rx,
            clipboard,
            credential_dir,
            runtime,
        }
    }

    /// Harness with a stored key and a scripted client.
    pub fn with_client(client: Arc<ScriptedClient>) -> Self {
        Self::new(Self::factory_for(client), Some("sk-test"))
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.app.insert_char(ch);
        }
    }

    /// Wait for the next completion event and feed it to the app.
    pub fn deliver_next(&mut self) -> u64 {
        loop {
            match self
                .events
                .recv_timeout(Duration::from_secs(10))
                .expect("No completion arrived")
            {
                AppEvent::Completion {
                    generation,
                    outcome,
                } => {
                    self.app.on_completion(generation, outcome);
                    return generation;
                }
                _ => continue,
            }
        }
    }

    /// Assert nothing else is pending on the channel.
    pub fn assert_no_more_events(&self) {
        assert!(self
            .events
            .recv_timeout(Duration::from_millis(200))
            .is_err());
    }
}
