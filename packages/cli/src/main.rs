#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for estimating Indian residential property prices.
//!
//! ```text
//! property_price estimate --city "Delhi NCR" --bhk "2 BHK" --area 950 --amenity lift
//! property_price estimate --input flat.toml --format json
//! property_price options
//! ```
//!
//! Running `property_price` with no subcommand enters interactive mode.
//! Set `RUST_LOG=debug` to trace each estimate.

mod interactive;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use property_price_estimator::{EstimateError, load_attributes, report};
use property_price_models::{PropertyAttributes, RawPropertyAttributes};

#[derive(Parser)]
#[command(
    name = "property_price",
    about = "Estimate Indian residential property prices"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a property's price and print the report
    Estimate(EstimateArgs),
    /// List every accepted attribute value
    Options,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Attribute flags. Any flag left out takes the default property's value.
#[derive(Args)]
struct EstimateArgs {
    /// TOML attribute file; when given, the attribute flags are ignored
    #[arg(long)]
    input: Option<PathBuf>,
    /// City (e.g. "Mumbai", "Delhi NCR")
    #[arg(long)]
    city: Option<String>,
    /// Property type (e.g. "Apartment/Flat", "Villa")
    #[arg(long)]
    property_type: Option<String>,
    /// BHK configuration (e.g. "2 BHK", "1 RK")
    #[arg(long)]
    bhk: Option<String>,
    /// Carpet area in square feet (200-5000)
    #[arg(long, allow_negative_numbers = true)]
    area: Option<i64>,
    /// Location type (e.g. "Suburb", "IT Hub")
    #[arg(long)]
    location: Option<String>,
    /// Property age (e.g. "Ready to Move", "5-10 Years")
    #[arg(long)]
    age: Option<String>,
    /// Floor (e.g. "Ground Floor", "Above 12th Floor")
    #[arg(long)]
    floor: Option<String>,
    /// Furnishing (e.g. "Semi-Furnished")
    #[arg(long)]
    furnishing: Option<String>,
    /// Parking (e.g. "No Parking", "2 Cars")
    #[arg(long)]
    parking: Option<String>,
    /// Amenity to include; repeat for several (e.g. --amenity lift --amenity gym)
    #[arg(long = "amenity")]
    amenities: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl EstimateArgs {
    /// Resolves the attributes from the input file or the flags.
    fn attributes(&self) -> Result<PropertyAttributes, EstimateError> {
        if let Some(path) = &self.input {
            return load_attributes(path);
        }

        let defaults = RawPropertyAttributes::from(&PropertyAttributes::default());
        let raw = RawPropertyAttributes {
            city: self.city.clone().unwrap_or(defaults.city),
            property_type: self.property_type.clone().unwrap_or(defaults.property_type),
            bhk_config: self.bhk.clone().unwrap_or(defaults.bhk_config),
            area_sq_ft: self.area.unwrap_or(defaults.area_sq_ft),
            location_type: self.location.clone().unwrap_or(defaults.location_type),
            property_age: self.age.clone().unwrap_or(defaults.property_age),
            floor_band: self.floor.clone().unwrap_or(defaults.floor_band),
            furnishing: self.furnishing.clone().unwrap_or(defaults.furnishing),
            parking: self.parking.clone().unwrap_or(defaults.parking),
            amenities: self.amenities.clone(),
        };

        Ok(PropertyAttributes::try_from(raw)?)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run();
    };

    match command {
        Commands::Estimate(args) => {
            let attrs = match args.attributes() {
                Ok(attrs) => attrs,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };

            let report = report(&attrs)?;
            log::info!(
                "Estimated {} at {}",
                report.attributes.city,
                report.estimate.total_price
            );

            match args.format {
                OutputFormat::Text => print!("{}", render::format_report(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Options => print!("{}", render::format_options()),
    }

    Ok(())
}
