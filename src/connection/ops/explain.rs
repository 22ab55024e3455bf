//! Explain command operation for find queries.

use mongodb::Client;
use mongodb::bson::{Document, doc};

use crate::connection::ConnectionManager;
use crate::error::Result;

pub struct ExplainFindRequest {
    pub database: String,
    pub collection: String,
    pub filter: Option<Document>,
    pub verbosity: String,
}

impl ConnectionManager {
    /// Run explain for a `find` command using the selected verbosity.
    pub fn explain_find(&self, client: &Client, request: ExplainFindRequest) -> Result<Document> {
        let client = client.clone();
        let ExplainFindRequest { database, collection, filter, verbosity } = request;
        let filter = filter.unwrap_or_default();

        self.runtime.block_on(async move {
            let db = client.database(&database);
            let mut find_cmd = doc! { "find": collection };
            if !filter.is_empty() {
                find_cmd.insert("filter", filter);
            }

            let command = doc! {
                "explain": find_cmd,
                "verbosity": verbosity,
            };
            let explain = db.run_command(command).await?;
            Ok(explain)
        })
    }
}
