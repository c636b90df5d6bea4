//! # recettes-api
//!
//! HTTP front door for Recettes.
//!
//! This crate provides:
//! - The landing page and the per-recipe headcount form
//! - Submission handling: typed form parsing, scaling, archive download
//! - Server configuration from file, environment, and command line
//! - Request tracing and error-to-response mapping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pages;
pub mod request;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::{router, AppState, Server};
