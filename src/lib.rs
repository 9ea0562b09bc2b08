//! Packaging client library for the exoport build service.
//!
//! This library implements the full packaging pipeline:
//! - Validation of build parameters into an immutable [`config::BuildConfig`]
//! - In-memory ZIP archiving of application content
//! - Multi-part submission to the remote packaging service
//! - Streaming retrieval of the built artifact
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod service;
pub mod validate;

// Re-export commonly used types
pub use error::{ExoportError, Result};
