//! # carte-store
//!
//! REST client for the remote hosted list store that owns the business-card
//! records: two-phase record resolution, attachment access, merge-style
//! partial updates and the generation-request protocol.
//!
//! The store is the single source of truth. This crate never persists
//! anything locally and never retries; every retry is a user re-click.

pub mod attachments;
pub mod client;
pub mod config;
pub mod generation;
pub mod resolver;

mod error;

pub use client::ListStoreClient;
pub use config::StoreConfig;
pub use error::StoreError;
pub use generation::GenerationStrategy;
