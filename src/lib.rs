// src/lib.rs
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod server;
pub mod types;

// Optional re-exports
pub use client::StatusInvestClient;
pub use config::Config;
pub use error::ScrapeError;
pub use server::{cors_handler, health_check, index, statusinvest_handler, AppState};
pub use types::ExtractionResult;
