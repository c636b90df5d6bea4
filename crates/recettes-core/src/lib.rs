//! Recettes Core — recipe catalog, eater coefficients, and quantity scaling.
//!
//! This crate holds the read-only tables the service is built around and the
//! pure computation that turns a headcount into ingredient totals. It has no
//! internal dependencies.
//!
//! # Modules
//!
//! - [`catalog`]: Built-in recipes and their per-serving quantities
//! - [`coefficients`]: Eater categories and their per-person multipliers
//! - [`calculator`]: Total coefficient, rounding, and per-ingredient totals
//! - [`names`]: Recipe name normalization for file and archive naming
//! - [`error`]: Error types and Result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod catalog;
pub mod coefficients;
pub mod error;
pub mod names;

#[cfg(test)]
mod proptests;

pub use calculator::{
    round2, total_coefficient, Calculator, CategoryCounts, Computation, IngredientRow,
};
pub use catalog::{Catalog, Ingredient, Recipe};
pub use coefficients::CoefficientTable;
pub use error::{Error, Result};
pub use names::normalize_name;
