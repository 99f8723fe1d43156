//! # rustpubmed
//!
//! PubMed Non-Academic Author Finder - Rust CLI
//!
//! ## Modules
//!
//! - [`eutils`] - NCBI E-utilities client (esearch + esummary)
//! - [`classify`] - affiliation keyword heuristic
//! - [`record`] - data model and output record assembly
//! - [`sink`] - CSV and console output
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rustpubmed::eutils::{ClientConfig, PubmedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubmedClient::new(ClientConfig::default())?;
//!     let ids = client.search("crispr gene therapy").await?;
//!     println!("Found {} papers", ids.len());
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod error;
pub mod eutils;
pub mod record;
pub mod sink;

pub use error::{PubmedError, Result};
