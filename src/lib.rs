//! MongoLens, a MongoDB query-plan inspector built with GPUI.

pub mod app;
pub mod bson;
pub mod components;
pub mod connection;
pub mod error;
pub mod helpers;
pub mod models;
pub mod state;
pub mod theme;
pub mod views;
