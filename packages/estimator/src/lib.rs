#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic price estimator for Indian residential property.
//!
//! [`estimate`] maps a validated set of [`PropertyAttributes`] to a
//! [`PriceEstimate`]: a per-city rate scaled by area and a chain of
//! constant multipliers, plus flat parking and amenity bonuses, followed by
//! the financial metrics derived from that price (EMI, stamp duty, rental
//! yield, appreciation, investment grade).
//!
//! Every table is a compile-time constant and no function here holds
//! state, so estimates can be computed from any thread without
//! coordination.

pub mod analysis;
pub mod input;
pub mod pricing;
pub mod tables;

pub use analysis::{analyze, report};
pub use input::{load_attributes, parse_attributes};
pub use pricing::{estimate, total_price};
pub use property_price_models::{InvalidAttributeError, PriceEstimate, PropertyAttributes};

use thiserror::Error;

/// Errors that can occur while estimating a property.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// An attribute lies outside its domain.
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(#[from] InvalidAttributeError),

    /// An attribute file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An attribute file is not valid TOML or is missing fields.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
