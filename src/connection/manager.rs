//! Core ConnectionManager struct and basic connection methods.

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::doc;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Owns the Tokio runtime that all MongoDB driver calls run on.
pub struct ConnectionManager {
    pub(crate) runtime: Runtime,
}

impl ConnectionManager {
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");
        Self { runtime }
    }

    /// Connect to MongoDB and verify the connection with a ping (runs in the
    /// Tokio runtime).
    pub fn connect(&self, uri: &str) -> Result<Client> {
        let uri = uri.to_string();
        self.runtime.block_on(async {
            let client = Client::with_uri_str(&uri).await?;
            client.database("admin").run_command(doc! { "ping": 1 }).await?;
            Ok(client)
        })
    }

    /// Test connectivity with a timeout (runs in the Tokio runtime).
    pub fn test_connection(&self, uri: &str, timeout: Duration) -> Result<()> {
        let uri = uri.to_string();
        self.runtime.block_on(async {
            let fut = async {
                let client = Client::with_uri_str(&uri).await?;
                client.database("admin").run_command(doc! { "ping": 1 }).await?;
                Ok::<(), mongodb::error::Error>(())
            };

            match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result.map_err(Error::from),
                Err(_) => Err(Error::Timeout("Connection timed out".to_string())),
            }
        })
    }
}
