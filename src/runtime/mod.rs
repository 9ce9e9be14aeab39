//! Runtime module
//!
//! Provides the async task handle used by the client and the metrics engine.

pub mod async_task;

pub use async_task::AsyncTask;
