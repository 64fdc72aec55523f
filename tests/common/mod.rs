#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use comment_rater::{
    error::{TriageError, TriageResult},
    llm::Completer,
    store::{CommentRecord, CommentStore},
    submission::Submitter,
};
use tokio::net::TcpListener;

/// Ordered log of calls shared between the fakes.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: &str) {
        self.0.lock().unwrap().push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Answers topic prompts and rating prompts from fixed scripts.
pub struct ScriptedCompleter {
    pub topic: Result<String, u16>,
    pub rating: Result<String, u16>,
    pub journal: Journal,
}

impl ScriptedCompleter {
    pub fn new(topic: Result<&str, u16>, rating: Result<&str, u16>, journal: &Journal) -> Self {
        Self {
            topic: topic.map(str::to_string),
            rating: rating.map(str::to_string),
            journal: journal.clone(),
        }
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(&self, prompt: &str) -> TriageResult<String> {
        let (entry, answer) = if prompt.ends_with("Tópico:") {
            ("classify", &self.topic)
        } else if prompt.ends_with("Estrellas:") {
            ("score", &self.rating)
        } else {
            panic!("unexpected prompt: {prompt}");
        };
        self.journal.push(entry);
        answer.clone().map_err(|status| TriageError::Api {
            status,
            body: "stub failure".into(),
        })
    }
}

/// In-memory store that can be told to fail.
pub struct MemoryStore {
    pub records: Mutex<Vec<CommentRecord>>,
    pub fail: bool,
    pub journal: Journal,
}

impl MemoryStore {
    pub fn new(journal: &Journal) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: false,
            journal: journal.clone(),
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }

    pub fn records(&self) -> Vec<CommentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn create_item(&self, record: &CommentRecord) -> TriageResult<()> {
        self.journal.push("persist");
        if self.fail {
            return Err(TriageError::StoreStatus {
                status: 429,
                body: "request rate is large".into(),
            });
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct Harness {
    pub journal: Journal,
    pub store: Arc<MemoryStore>,
    pub submitter: Submitter,
}

pub fn harness(topic: Result<&str, u16>, rating: Result<&str, u16>) -> Harness {
    let journal = Journal::default();
    let store = Arc::new(MemoryStore::new(&journal));
    build(topic, rating, journal, store)
}

pub fn harness_with_failing_store(topic: &str, rating: &str) -> Harness {
    let journal = Journal::default();
    let store = Arc::new(MemoryStore::failing(&journal));
    build(Ok(topic), Ok(rating), journal, store)
}

fn build(
    topic: Result<&str, u16>,
    rating: Result<&str, u16>,
    journal: Journal,
    store: Arc<MemoryStore>,
) -> Harness {
    let completer = Arc::new(ScriptedCompleter::new(topic, rating, &journal));
    let submitter = Submitter::new(completer, store.clone());
    Harness {
        journal,
        store,
        submitter,
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
