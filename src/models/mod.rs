// Domain models

pub mod connection;
pub mod saved_query;

pub use connection::SavedConnection;
pub use saved_query::{SavedQuery, SavedQueryDraft};
