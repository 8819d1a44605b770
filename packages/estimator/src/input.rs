//! Attribute files.
//!
//! A file holds one property as top-level TOML keys using the same
//! camelCase names and display labels as the JSON representation:
//!
//! ```toml
//! city = "Delhi NCR"
//! propertyType = "Builder Floor"
//! bhkConfig = "2 BHK"
//! areaSqFt = 950
//! locationType = "Central Area"
//! propertyAge = "Ready to Move"
//! floorBand = "1st-3rd Floor"
//! furnishing = "Unfurnished"
//! parking = "1 Car"
//! amenities = ["lift", "powerBackup"]
//! ```

use std::path::Path;

use property_price_models::{PropertyAttributes, RawPropertyAttributes};

use crate::EstimateError;

/// Parses and validates attributes from TOML text.
///
/// # Errors
///
/// Returns [`EstimateError::Toml`] if the text is not a well-formed
/// attribute file, or [`EstimateError::InvalidAttribute`] if any value is
/// outside its domain.
pub fn parse_attributes(toml_str: &str) -> Result<PropertyAttributes, EstimateError> {
    let raw: RawPropertyAttributes = toml::de::from_str(toml_str)?;
    Ok(PropertyAttributes::try_from(raw)?)
}

/// Reads, parses and validates an attribute file.
///
/// # Errors
///
/// Returns [`EstimateError::Io`] if the file cannot be read, otherwise
/// any error from [`parse_attributes`].
pub fn load_attributes(path: &Path) -> Result<PropertyAttributes, EstimateError> {
    log::debug!("Loading property attributes from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    parse_attributes(&contents)
}
