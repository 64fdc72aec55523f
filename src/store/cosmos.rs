//! Azure Cosmos DB (SQL API) store speaking the REST protocol with master-key auth.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::json;
use sha2::Sha256;
use tracing::{debug, info, instrument};

use crate::{
    config::CosmosSettings,
    error::{TriageError, TriageResult},
};

use super::{CommentRecord, CommentStore};

const API_VERSION: &str = "2018-12-31";
const PARTITION_KEY_PATH: &str = "/id";

type HmacSha256 = Hmac<Sha256>;

pub struct CosmosStore {
    http: Client,
    endpoint: String,
    key: Vec<u8>,
    database: String,
    container: String,
}

impl CosmosStore {
    /// Build a client without touching the network.
    pub fn new(settings: &CosmosSettings) -> TriageResult<Self> {
        let endpoint = settings.require_endpoint()?.trim_end_matches('/').to_string();
        let key = STANDARD
            .decode(settings.require_key()?.trim())
            .map_err(|e| TriageError::InvalidStoreKey(e.to_string()))?;
        let http = Client::builder()
            .build()
            .map_err(TriageError::StoreTransport)?;
        Ok(Self {
            http,
            endpoint,
            key,
            database: settings.require_database()?.to_string(),
            container: settings.require_container()?.to_string(),
        })
    }

    /// Build the client and create the database and container if absent.
    pub async fn connect(settings: &CosmosSettings) -> TriageResult<Self> {
        let store = Self::new(settings)?;
        store.ensure_database().await?;
        store.ensure_container(settings.throughput).await?;
        Ok(store)
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    #[instrument(skip(self), fields(database = %self.database))]
    pub async fn ensure_database(&self) -> TriageResult<()> {
        let response = self
            .post("dbs", "", "dbs")?
            .json(&json!({ "id": self.database }))
            .send()
            .await
            .map_err(TriageError::StoreTransport)?;
        created_or_existing(response, "database").await
    }

    #[instrument(skip(self), fields(container = %self.container))]
    pub async fn ensure_container(&self, throughput: u32) -> TriageResult<()> {
        let link = format!("dbs/{}", self.database);
        let response = self
            .post("colls", &link, &format!("{link}/colls"))?
            .header("x-ms-offer-throughput", throughput.to_string())
            .json(&json!({
                "id": self.container,
                "partitionKey": { "paths": [PARTITION_KEY_PATH], "kind": "Hash" }
            }))
            .send()
            .await
            .map_err(TriageError::StoreTransport)?;
        created_or_existing(response, "container").await
    }

    fn collection_link(&self) -> String {
        format!("dbs/{}/colls/{}", self.database, self.container)
    }

    fn post(&self, resource_type: &str, resource_link: &str, path: &str) -> TriageResult<RequestBuilder> {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let token = auth_token(&self.key, "POST", resource_type, resource_link, &date)?;
        Ok(self
            .http
            .post(format!("{}/{path}", self.endpoint))
            .header("authorization", token)
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION))
    }
}

#[async_trait]
impl CommentStore for CosmosStore {
    async fn create_item(&self, record: &CommentRecord) -> TriageResult<()> {
        let link = self.collection_link();
        let partition_key = serde_json::to_string(&[&record.id])?;
        let response = self
            .post("docs", &link, &format!("{link}/docs"))?
            .header("x-ms-documentdb-partitionkey", partition_key)
            .json(record)
            .send()
            .await
            .map_err(TriageError::StoreTransport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(response).await);
        }
        debug!(id = %record.id, "document created");
        Ok(())
    }

    fn saved_message(&self) -> &'static str {
        "Comentario guardado en Cosmos DB."
    }
}

/// Master-key authorization header value for one request.
pub fn auth_token(
    key: &[u8],
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> TriageResult<String> {
    let payload = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_link,
        date.to_lowercase()
    );
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| TriageError::InvalidStoreKey(e.to_string()))?;
    mac.update(payload.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());
    Ok(urlencoding::encode(&format!("type=master&ver=1.0&sig={signature}")).into_owned())
}

async fn created_or_existing(response: Response, what: &str) -> TriageResult<()> {
    match response.status() {
        StatusCode::CONFLICT => {
            debug!(what, "already provisioned");
            Ok(())
        }
        status if status.is_success() => {
            info!(what, "provisioned");
            Ok(())
        }
        _ => Err(store_error(response).await),
    }
}

async fn store_error(response: Response) -> TriageError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    TriageError::StoreStatus { status, body }
}
