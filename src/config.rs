//! Runtime configuration utilities for comment-rater.

use std::{env, path::PathBuf, str::FromStr};

use anyhow::{bail, Context};

use crate::error::{TriageError, TriageResult};

const DEFAULT_THROUGHPUT: u32 = 400;

/// Application configuration resolved from `.env` and the process environment.
#[derive(Clone)]
pub struct Settings {
    /// Full chat-completions URL, deployment and api-version included.
    pub completion_endpoint: String,
    /// Subscription key sent in the `api-key` header.
    pub completion_key: String,
    /// Cosmos DB connection details; only checked when the cosmos backend is opened.
    pub cosmos: CosmosSettings,
    /// Which document store receives the records.
    pub store_backend: StoreBackend,
    /// Root folder for the local JSONL store.
    pub data_dir: PathBuf,
}

#[derive(Clone, Default)]
pub struct CosmosSettings {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub database: Option<String>,
    pub container: Option<String>,
    /// Request units provisioned when the container is created.
    pub throughput: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Cosmos,
    Jsonl,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cosmos" => Ok(Self::Cosmos),
            "jsonl" => Ok(Self::Jsonl),
            other => bail!("unknown STORE_BACKEND {other:?}; expected cosmos or jsonl"),
        }
    }
}

impl Settings {
    /// Load configuration from `.env` and the environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (Some(completion_endpoint), Some(completion_key)) = (
            present("AZURE_OPENAI_ENDPOINT"),
            present("AZURE_OPENAI_SUBSCRIPTION_KEY"),
        ) else {
            bail!("AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_SUBSCRIPTION_KEY must both be set");
        };

        let throughput = match present("COSMOS_DB_THROUGHPUT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("parsing COSMOS_DB_THROUGHPUT={raw:?}"))?,
            None => DEFAULT_THROUGHPUT,
        };
        let store_backend = match present("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::default(),
        };
        let data_dir = present("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        Ok(Self {
            completion_endpoint,
            completion_key,
            cosmos: CosmosSettings {
                endpoint: present("COSMOS_DB_ENDPOINT"),
                key: present("COSMOS_DB_KEY"),
                database: present("COSMOS_DB_DATABASE_NAME"),
                container: present("COSMOS_DB_CONTAINER_NAME"),
                throughput,
            },
            store_backend,
            data_dir,
        })
    }

    /// Path of the append-only local store.
    pub fn jsonl_path(&self) -> PathBuf {
        self.data_dir.join("comments.jsonl")
    }
}

impl CosmosSettings {
    pub fn require_endpoint(&self) -> TriageResult<&str> {
        required(&self.endpoint, "COSMOS_DB_ENDPOINT")
    }

    pub fn require_key(&self) -> TriageResult<&str> {
        required(&self.key, "COSMOS_DB_KEY")
    }

    pub fn require_database(&self) -> TriageResult<&str> {
        required(&self.database, "COSMOS_DB_DATABASE_NAME")
    }

    pub fn require_container(&self) -> TriageResult<&str> {
        required(&self.container, "COSMOS_DB_CONTAINER_NAME")
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> TriageResult<&'a str> {
    value.as_deref().ok_or(TriageError::MissingConfig(name))
}

// Keys stay out of debug output.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("completion_endpoint", &self.completion_endpoint)
            .field("cosmos_endpoint", &self.cosmos.endpoint)
            .field("cosmos_database", &self.cosmos.database)
            .field("cosmos_container", &self.cosmos.container)
            .field("store_backend", &self.store_backend)
            .field("data_dir", &self.data_dir)
            .finish_non_exhaustive()
    }
}
