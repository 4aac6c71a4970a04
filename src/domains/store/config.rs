//! Store configuration types.

use serde::{Deserialize, Serialize};

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Which backend holds the documents.
    pub backend: StoreBackend,

    /// Collection the listings live in.
    #[serde(default = "default_collection")]
    pub collection: String,
}

/// Available store backends.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store, lost on restart (default).
    Memory,

    /// MongoDB server reached through the official driver.
    #[cfg(feature = "mongodb")]
    MongoDb(MongoConfig),
}

/// MongoDB connection configuration.
#[cfg(feature = "mongodb")]
#[derive(Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Connection string, may embed credentials.
    #[serde(default = "default_mongodb_uri")]
    pub uri: String,

    /// Database holding the collection.
    #[serde(default = "default_mongodb_database")]
    pub database: String,
}

fn default_collection() -> String {
    "real_estate".to_string()
}

#[cfg(feature = "mongodb")]
fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

#[cfg(feature = "mongodb")]
fn default_mongodb_database() -> String {
    "oracle".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            collection: default_collection(),
        }
    }
}

#[cfg(feature = "mongodb")]
impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: default_mongodb_uri(),
            database: default_mongodb_database(),
        }
    }
}

/// Custom Debug implementation to redact connection strings from logs.
impl std::fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            #[cfg(feature = "mongodb")]
            Self::MongoDb(cfg) => f.debug_tuple("MongoDb").field(cfg).finish(),
        }
    }
}

#[cfg(feature = "mongodb")]
impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

impl StoreConfig {
    /// Load store config from environment variables.
    pub fn from_env() -> Self {
        let collection =
            std::env::var("REAL_ESTATE_COLLECTION").unwrap_or_else(|_| default_collection());

        let backend = std::env::var("REAL_ESTATE_STORE")
            .unwrap_or_default()
            .to_lowercase();

        let backend = match backend.as_str() {
            #[cfg(feature = "mongodb")]
            "mongodb" | "mongo" => {
                let uri = std::env::var("REAL_ESTATE_MONGODB_URI")
                    .unwrap_or_else(|_| default_mongodb_uri());
                let database = std::env::var("REAL_ESTATE_MONGODB_DATABASE")
                    .unwrap_or_else(|_| default_mongodb_database());
                StoreBackend::MongoDb(MongoConfig { uri, database })
            }
            "" | "memory" => StoreBackend::Memory,
            other => {
                tracing::warn!("Unknown store backend '{}', using in-memory store", other);
                StoreBackend::Memory
            }
        };

        Self {
            backend,
            collection,
        }
    }

    /// Get a description of this store for logging.
    pub fn description(&self) -> String {
        match &self.backend {
            StoreBackend::Memory => format!("in-memory (collection '{}')", self.collection),
            #[cfg(feature = "mongodb")]
            StoreBackend::MongoDb(cfg) => format!(
                "MongoDB database '{}' (collection '{}')",
                cfg.database, self.collection
            ),
        }
    }
}
