//! Dict-in, dict-out storage dispatch: the client picks one backend by
//! name at construction and writes through it, so callers never branch on
//! the storage flavor themselves.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The requested backend is not in the fixed set.
    #[error("Unsupported storage type: {0:?}")]
    UnsupportedStorageType(String),
}

/// One storage backend the client can write through.
pub trait Datastore {
    /// Brings the connection up. `false` means the backend is
    /// unreachable.
    fn connect(&mut self) -> bool;
    /// Writes one dict-shaped payload, answering with a status dict.
    fn insert(&mut self, data: &Value) -> Value;
}

#[derive(Debug, Default)]
pub struct MySql;

impl Datastore for MySql {
    fn connect(&mut self) -> bool {
        info!("Connecting to MySQL database...");
        true
    }

    fn insert(&mut self, data: &Value) -> Value {
        info!(%data, "Inserting data into MySQL");
        json!({ "status": "success", "db": "MySQL" })
    }
}

#[derive(Debug, Default)]
pub struct Cassandra;

impl Datastore for Cassandra {
    fn connect(&mut self) -> bool {
        info!("Connecting to Cassandra database...");
        true
    }

    fn insert(&mut self, data: &Value) -> Value {
        info!(%data, "Inserting data into Cassandra");
        json!({ "status": "success", "db": "Cassandra" })
    }
}

#[derive(Debug, Default)]
pub struct Hdfs;

impl Datastore for Hdfs {
    fn connect(&mut self) -> bool {
        info!("Connecting to HDFS storage...");
        true
    }

    fn insert(&mut self, data: &Value) -> Value {
        info!(%data, "Inserting data into HDFS");
        // HDFS reports under "storage" where the databases use "db".
        json!({ "status": "success", "storage": "HDFS" })
    }
}

/// Writes through whichever backend it was built with, shielding callers
/// from connection handling.
pub struct Client {
    datastore: Box<dyn Datastore>,
}

impl Client {
    /// Picks the backend by name. The set is fixed and lookup ignores
    /// ASCII case; anything else is refused.
    pub fn new(storage_type: &str) -> Result<Self, ClientError> {
        let datastore: Box<dyn Datastore> = match storage_type.to_ascii_lowercase().as_str() {
            "mysql" => Box::new(MySql),
            "cassandra" => Box::new(Cassandra),
            "hdfs" => Box::new(Hdfs),
            _ => {
                return Err(ClientError::UnsupportedStorageType(
                    storage_type.to_string(),
                ))
            }
        };
        Ok(Self { datastore })
    }

    /// Bypasses the name lookup, for callers that already hold a backend.
    pub fn with_datastore(datastore: Box<dyn Datastore>) -> Self {
        Self { datastore }
    }

    /// Inserts through the selected backend. A backend that cannot
    /// connect turns into a failure dict, not an error.
    pub fn insert(&mut self, data: &Value) -> Value {
        if self.datastore.connect() {
            self.datastore.insert(data)
        } else {
            json!({ "status": "failure", "message": "Connection failed" })
        }
    }
}

/// Stand-in for the upstream API that would hand us data.
pub fn sample_payload() -> Value {
    json!({ "key": "value" })
}
