//! Interactive property entry.
//!
//! Walks through every attribute with `dialoguer` prompts, pre-selecting
//! the default property, then prints the text report.

use std::fmt::Display;

use dialoguer::{Input, MultiSelect, Select};
use property_price_models::{
    Amenities, Amenity, BhkConfig, City, FloorBand, Furnishing, LocationType, MAX_AREA_SQ_FT,
    MIN_AREA_SQ_FT, Parking, PropertyAge, PropertyAttributes, PropertyType, validate_area,
};

use crate::render::format_report;

/// Prompts for each attribute and prints the resulting report.
///
/// # Errors
///
/// Returns an error if a prompt fails or the entered attributes are
/// rejected by the estimator.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Indian Property Price Estimator");
    println!();

    let attrs = prompt_attributes()?;
    log::info!("Estimating {} {} in {}", attrs.bhk_config, attrs.property_type, attrs.city);

    let report = property_price_estimator::report(&attrs)?;
    println!();
    print!("{}", format_report(&report));

    Ok(())
}

fn prompt_attributes() -> Result<PropertyAttributes, dialoguer::Error> {
    let defaults = PropertyAttributes::default();

    let city = select("City", City::all(), defaults.city)?;
    let property_type = select("Property type", PropertyType::all(), defaults.property_type)?;
    let bhk_config = select("BHK configuration", BhkConfig::all(), defaults.bhk_config)?;

    let area_sq_ft: u32 = Input::new()
        .with_prompt(format!("Area in sq ft ({MIN_AREA_SQ_FT}-{MAX_AREA_SQ_FT})"))
        .default(defaults.area_sq_ft)
        .validate_with(|area: &u32| -> Result<(), String> {
            validate_area(i64::from(*area))
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let location_type = select("Location type", LocationType::all(), defaults.location_type)?;
    let property_age = select("Property age", PropertyAge::all(), defaults.property_age)?;
    let floor_band = select("Floor", FloorBand::all(), defaults.floor_band)?;
    let furnishing = select("Furnishing", Furnishing::all(), defaults.furnishing)?;
    let parking = select("Parking", Parking::all(), defaults.parking)?;

    let amenity_labels: Vec<String> = Amenity::all().iter().map(ToString::to_string).collect();
    let selected = MultiSelect::new()
        .with_prompt("Amenities (space=toggle, a=all, enter=confirm)")
        .items(&amenity_labels)
        .interact()?;
    let amenities: Amenities = selected.iter().map(|&i| Amenity::all()[i]).collect();

    Ok(PropertyAttributes {
        city,
        property_type,
        bhk_config,
        area_sq_ft,
        location_type,
        property_age,
        floor_band,
        furnishing,
        parking,
        amenities,
    })
}

/// Single-choice prompt over an attribute domain, starting on `default`.
fn select<T: Copy + PartialEq + Display>(
    prompt: &str,
    options: &[T],
    default: T,
) -> Result<T, dialoguer::Error> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default_idx = options.iter().position(|o| *o == default).unwrap_or(0);

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(options[idx])
}
