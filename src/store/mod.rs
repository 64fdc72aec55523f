//! Comment records and the document stores that persist them.

pub mod cosmos;
pub mod jsonl;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    classify::{Answer, StarRating, Topic},
    config::{Settings, StoreBackend},
    error::TriageResult,
};

pub use cosmos::CosmosStore;
pub use jsonl::JsonlStore;

/// Default confirmation once a record is written.
pub const SAVED_MESSAGE: &str = "Comentario guardado.";

/// The only persisted entity: a comment plus its derived labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub comentario: String,
    pub topico: String,
    pub estrellas: String,
}

impl CommentRecord {
    /// Assemble a record under a freshly generated identifier.
    ///
    /// Labels are stored exactly as the model returned them, trimmed.
    pub fn new(comment: &str, topic: &Answer<Topic>, rating: &Answer<StarRating>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            comentario: comment.to_string(),
            topico: topic.raw.clone(),
            estrellas: rating.raw.clone(),
        }
    }
}

/// Item-creation interface of a schema-less document store.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Write `record` as a new item; there is no update path.
    async fn create_item(&self, record: &CommentRecord) -> TriageResult<()>;

    /// Confirmation shown once a record has been written.
    fn saved_message(&self) -> &'static str {
        SAVED_MESSAGE
    }
}

/// Open (and provision, where applicable) the configured backend.
pub async fn open(settings: &Settings) -> TriageResult<Arc<dyn CommentStore>> {
    match settings.store_backend {
        StoreBackend::Cosmos => {
            let store = CosmosStore::connect(&settings.cosmos).await?;
            info!(database = store.database(), container = store.container(), "cosmos store ready");
            let store: Arc<dyn CommentStore> = Arc::new(store);
            Ok(store)
        }
        StoreBackend::Jsonl => {
            let store = JsonlStore::open(settings.jsonl_path()).await?;
            info!(path = %store.path().display(), "jsonl store ready");
            let store: Arc<dyn CommentStore> = Arc::new(store);
            Ok(store)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_serialize_with_store_field_names() {
        let record = CommentRecord::new(
            "La comida estaba fría",
            &Answer::topic("comida"),
            &Answer::rating("⭐⭐"),
        );
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(value["topico"], "comida");
        assert_eq!(value["estrellas"], "⭐⭐");
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn labels_are_stored_as_returned() {
        let record = CommentRecord::new(
            "La comida estaba fría",
            &Answer::topic("Comida"),
            &Answer::rating("⭐\u{fe0f}⭐\u{fe0f}"),
        );
        assert_eq!(record.topico, "Comida");
        assert_eq!(record.estrellas, "⭐\u{fe0f}⭐\u{fe0f}");
    }

    #[test]
    fn identifiers_are_fresh_per_record() {
        let topic = Answer::topic("otros");
        let rating = Answer::rating("⭐⭐⭐⭐⭐");
        let a = CommentRecord::new("igual", &topic, &rating);
        let b = CommentRecord::new("igual", &topic, &rating);
        assert_ne!(a.id, b.id);
    }
}
