#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Property attribute domains and price estimate types.
//!
//! Every attribute a buyer can pick is modelled as a closed enum whose
//! display label (e.g. `"Delhi NCR"`, `"3 BHK"`, `"Above 12th Floor"`) is
//! also its `FromStr` and serde representation. String input coming from
//! files or the command line enters through [`RawPropertyAttributes`] and is
//! validated into a [`PropertyAttributes`] once, at the boundary.

pub mod analysis;
pub mod estimate;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use estimate::{InvestmentGrade, PriceBreakdown, PriceEstimate};

/// Smallest carpet area accepted, in square feet.
pub const MIN_AREA_SQ_FT: u32 = 200;

/// Largest carpet area accepted, in square feet.
pub const MAX_AREA_SQ_FT: u32 = 5000;

/// Square meters per square foot.
pub const SQ_M_PER_SQ_FT: f64 = 0.092_903;

/// Rupees in one lakh.
pub const LAKH: u64 = 100_000;

/// Rupees in one crore.
pub const CRORE: u64 = 10_000_000;

/// Converts a rupee amount to crores.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_crores(rupees: u64) -> f64 {
    rupees as f64 / CRORE as f64
}

/// One of the twenty cities with a published per-square-foot rate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum City {
    Mumbai,
    #[serde(rename = "Delhi NCR")]
    #[strum(serialize = "Delhi NCR")]
    DelhiNcr,
    Bangalore,
    Hyderabad,
    Chennai,
    Pune,
    Kolkata,
    Ahmedabad,
    Surat,
    Jaipur,
    Lucknow,
    Kanpur,
    Nagpur,
    Indore,
    Bhopal,
    Visakhapatnam,
    Patna,
    Vadodara,
    Ghaziabad,
    Ludhiana,
}

impl City {
    /// Returns `true` for the two metros whose rental market yields less
    /// than the rest of the country.
    #[must_use]
    pub const fn is_low_yield_metro(self) -> bool {
        matches!(self, Self::Mumbai | Self::DelhiNcr)
    }

    /// Returns `true` for the high-growth markets.
    #[must_use]
    pub const fn is_high_growth(self) -> bool {
        matches!(self, Self::Mumbai | Self::DelhiNcr | Self::Bangalore)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mumbai,
            Self::DelhiNcr,
            Self::Bangalore,
            Self::Hyderabad,
            Self::Chennai,
            Self::Pune,
            Self::Kolkata,
            Self::Ahmedabad,
            Self::Surat,
            Self::Jaipur,
            Self::Lucknow,
            Self::Kanpur,
            Self::Nagpur,
            Self::Indore,
            Self::Bhopal,
            Self::Visakhapatnam,
            Self::Patna,
            Self::Vadodara,
            Self::Ghaziabad,
            Self::Ludhiana,
        ]
    }
}

/// Kind of dwelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PropertyType {
    #[serde(rename = "Apartment/Flat")]
    #[strum(serialize = "Apartment/Flat")]
    Apartment,
    #[serde(rename = "Independent House")]
    #[strum(serialize = "Independent House")]
    IndependentHouse,
    Villa,
    #[serde(rename = "Builder Floor")]
    #[strum(serialize = "Builder Floor")]
    BuilderFloor,
    Penthouse,
    #[serde(rename = "Studio Apartment")]
    #[strum(serialize = "Studio Apartment")]
    StudioApartment,
}

impl PropertyType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Apartment,
            Self::IndependentHouse,
            Self::Villa,
            Self::BuilderFloor,
            Self::Penthouse,
            Self::StudioApartment,
        ]
    }
}

/// Bedroom-hall-kitchen configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum BhkConfig {
    /// Single room plus kitchen
    #[serde(rename = "1 RK")]
    #[strum(serialize = "1 RK")]
    OneRk,
    #[serde(rename = "1 BHK")]
    #[strum(serialize = "1 BHK")]
    OneBhk,
    #[serde(rename = "2 BHK")]
    #[strum(serialize = "2 BHK")]
    TwoBhk,
    #[serde(rename = "3 BHK")]
    #[strum(serialize = "3 BHK")]
    ThreeBhk,
    #[serde(rename = "4 BHK")]
    #[strum(serialize = "4 BHK")]
    FourBhk,
    #[serde(rename = "5+ BHK")]
    #[strum(serialize = "5+ BHK")]
    FivePlusBhk,
}

impl BhkConfig {
    /// Returns `true` for the configurations most buyers shop for.
    #[must_use]
    pub const fn is_mainstream(self) -> bool {
        matches!(self, Self::TwoBhk | Self::ThreeBhk)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneRk,
            Self::OneBhk,
            Self::TwoBhk,
            Self::ThreeBhk,
            Self::FourBhk,
            Self::FivePlusBhk,
        ]
    }
}

/// Micro-market the property sits in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum LocationType {
    #[serde(rename = "Prime Location")]
    #[strum(serialize = "Prime Location")]
    Prime,
    #[serde(rename = "Central Area")]
    #[strum(serialize = "Central Area")]
    Central,
    Suburb,
    Outskirts,
    #[serde(rename = "IT Hub")]
    #[strum(serialize = "IT Hub")]
    ItHub,
    #[serde(rename = "Business District")]
    #[strum(serialize = "Business District")]
    BusinessDistrict,
}

impl LocationType {
    /// Returns `true` for locations with outsized buyer demand.
    #[must_use]
    pub const fn is_sought_after(self) -> bool {
        matches!(self, Self::Prime | Self::ItHub)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Prime,
            Self::Central,
            Self::Suburb,
            Self::Outskirts,
            Self::ItHub,
            Self::BusinessDistrict,
        ]
    }
}

/// Construction status or age of the building.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PropertyAge {
    #[serde(rename = "Under Construction")]
    #[strum(serialize = "Under Construction")]
    UnderConstruction,
    #[serde(rename = "Ready to Move")]
    #[strum(serialize = "Ready to Move")]
    ReadyToMove,
    #[serde(rename = "0-1 Years")]
    #[strum(serialize = "0-1 Years")]
    UpToOneYear,
    #[serde(rename = "1-5 Years")]
    #[strum(serialize = "1-5 Years")]
    OneToFiveYears,
    #[serde(rename = "5-10 Years")]
    #[strum(serialize = "5-10 Years")]
    FiveToTenYears,
    #[serde(rename = "10-15 Years")]
    #[strum(serialize = "10-15 Years")]
    TenToFifteenYears,
    #[serde(rename = "15+ Years")]
    #[strum(serialize = "15+ Years")]
    OverFifteenYears,
}

impl PropertyAge {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::UnderConstruction,
            Self::ReadyToMove,
            Self::UpToOneYear,
            Self::OneToFiveYears,
            Self::FiveToTenYears,
            Self::TenToFifteenYears,
            Self::OverFifteenYears,
        ]
    }
}

/// Floor range of the unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FloorBand {
    #[serde(rename = "Ground Floor")]
    #[strum(serialize = "Ground Floor")]
    Ground,
    #[serde(rename = "1st-3rd Floor")]
    #[strum(serialize = "1st-3rd Floor")]
    Low,
    #[serde(rename = "4th-7th Floor")]
    #[strum(serialize = "4th-7th Floor")]
    Mid,
    #[serde(rename = "8th-12th Floor")]
    #[strum(serialize = "8th-12th Floor")]
    High,
    #[serde(rename = "Above 12th Floor")]
    #[strum(serialize = "Above 12th Floor")]
    AboveTwelfth,
}

impl FloorBand {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ground,
            Self::Low,
            Self::Mid,
            Self::High,
            Self::AboveTwelfth,
        ]
    }
}

/// Furnishing level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Furnishing {
    Unfurnished,
    #[serde(rename = "Semi-Furnished")]
    #[strum(serialize = "Semi-Furnished")]
    SemiFurnished,
    #[serde(rename = "Fully Furnished")]
    #[strum(serialize = "Fully Furnished")]
    FullyFurnished,
}

impl Furnishing {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Unfurnished, Self::SemiFurnished, Self::FullyFurnished]
    }
}

/// Dedicated car parking slots.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Parking {
    #[serde(rename = "No Parking")]
    #[strum(serialize = "No Parking")]
    None,
    #[serde(rename = "1 Car")]
    #[strum(serialize = "1 Car")]
    OneCar,
    #[serde(rename = "2 Cars")]
    #[strum(serialize = "2 Cars")]
    TwoCars,
    #[serde(rename = "3+ Cars")]
    #[strum(serialize = "3+ Cars")]
    ThreePlusCars,
}

impl Parking {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::OneCar, Self::TwoCars, Self::ThreePlusCars]
    }
}

/// A single society amenity.
///
/// Parses from the display label (`"Power Backup"`), the camelCase flag
/// name (`"powerBackup"`) or the `snake_case` flag name (`"power_backup"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum Amenity {
    Lift,
    #[strum(to_string = "Power Backup", serialize = "powerBackup", serialize = "power_backup")]
    PowerBackup,
    Security,
    Gym,
    #[strum(
        to_string = "Swimming Pool",
        serialize = "swimmingPool",
        serialize = "swimming_pool"
    )]
    SwimmingPool,
    Garden,
    Temple,
    Vastu,
}

impl Amenity {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Lift,
            Self::PowerBackup,
            Self::Security,
            Self::Gym,
            Self::SwimmingPool,
            Self::Garden,
            Self::Temple,
            Self::Vastu,
        ]
    }
}

/// Amenity flags, one boolean per [`Amenity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Amenities {
    /// Lift/elevator.
    pub lift: bool,
    /// Power backup.
    pub power_backup: bool,
    /// 24x7 security.
    pub security: bool,
    /// Gym or club house.
    pub gym: bool,
    /// Swimming pool.
    pub swimming_pool: bool,
    /// Garden or park.
    pub garden: bool,
    /// Temple or prayer room.
    pub temple: bool,
    /// Vastu compliant layout.
    pub vastu: bool,
}

impl Amenities {
    /// Returns whether the given amenity is present.
    #[must_use]
    pub const fn contains(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Lift => self.lift,
            Amenity::PowerBackup => self.power_backup,
            Amenity::Security => self.security,
            Amenity::Gym => self.gym,
            Amenity::SwimmingPool => self.swimming_pool,
            Amenity::Garden => self.garden,
            Amenity::Temple => self.temple,
            Amenity::Vastu => self.vastu,
        }
    }

    /// Marks the given amenity as present.
    pub const fn insert(&mut self, amenity: Amenity) {
        match amenity {
            Amenity::Lift => self.lift = true,
            Amenity::PowerBackup => self.power_backup = true,
            Amenity::Security => self.security = true,
            Amenity::Gym => self.gym = true,
            Amenity::SwimmingPool => self.swimming_pool = true,
            Amenity::Garden => self.garden = true,
            Amenity::Temple => self.temple = true,
            Amenity::Vastu => self.vastu = true,
        }
    }

    /// Present amenities in declaration order.
    #[must_use]
    pub fn selected(&self) -> Vec<Amenity> {
        Amenity::all()
            .iter()
            .copied()
            .filter(|amenity| self.contains(*amenity))
            .collect()
    }

    /// Number of present amenities.
    #[must_use]
    pub fn count(&self) -> usize {
        Amenity::all()
            .iter()
            .filter(|amenity| self.contains(**amenity))
            .count()
    }
}

impl FromIterator<Amenity> for Amenities {
    fn from_iter<I: IntoIterator<Item = Amenity>>(iter: I) -> Self {
        let mut amenities = Self::default();
        for amenity in iter {
            amenities.insert(amenity);
        }
        amenities
    }
}

/// A fully validated set of property attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAttributes {
    pub city: City,
    pub property_type: PropertyType,
    pub bhk_config: BhkConfig,
    /// Carpet area in square feet, within
    /// [`MIN_AREA_SQ_FT`]..=[`MAX_AREA_SQ_FT`].
    pub area_sq_ft: u32,
    pub location_type: LocationType,
    pub property_age: PropertyAge,
    pub floor_band: FloorBand,
    pub furnishing: Furnishing,
    pub parking: Parking,
    #[serde(default)]
    pub amenities: Amenities,
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self {
            city: City::Mumbai,
            property_type: PropertyType::Apartment,
            bhk_config: BhkConfig::ThreeBhk,
            area_sq_ft: 1200,
            location_type: LocationType::Suburb,
            property_age: PropertyAge::OneToFiveYears,
            floor_band: FloorBand::Mid,
            furnishing: Furnishing::SemiFurnished,
            parking: Parking::OneCar,
            amenities: Amenities::default(),
        }
    }
}

impl PropertyAttributes {
    /// Area converted to square meters.
    #[must_use]
    pub fn area_sq_m(&self) -> f64 {
        f64::from(self.area_sq_ft) * SQ_M_PER_SQ_FT
    }

    /// Checks every constraint that the type system does not already
    /// enforce.
    ///
    /// # Errors
    ///
    /// Returns an error if `area_sq_ft` is outside the accepted range.
    pub fn validate(&self) -> Result<(), InvalidAttributeError> {
        validate_area(i64::from(self.area_sq_ft))?;
        Ok(())
    }
}

/// Checks that an area lies within
/// [`MIN_AREA_SQ_FT`]..=[`MAX_AREA_SQ_FT`].
///
/// # Errors
///
/// Returns an error naming [`AttributeField::AreaSqFt`] if it does not.
pub fn validate_area(area_sq_ft: i64) -> Result<u32, InvalidAttributeError> {
    u32::try_from(area_sq_ft)
        .ok()
        .filter(|area| (MIN_AREA_SQ_FT..=MAX_AREA_SQ_FT).contains(area))
        .ok_or_else(|| InvalidAttributeError::new(AttributeField::AreaSqFt, area_sq_ft))
}

/// Unvalidated, string-typed property attributes as read from a file or
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPropertyAttributes {
    pub city: String,
    pub property_type: String,
    pub bhk_config: String,
    pub area_sq_ft: i64,
    pub location_type: String,
    pub property_age: String,
    pub floor_band: String,
    pub furnishing: String,
    pub parking: String,
    /// Amenity names; any spelling accepted by [`Amenity`]'s parser.
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<&PropertyAttributes> for RawPropertyAttributes {
    fn from(attrs: &PropertyAttributes) -> Self {
        Self {
            city: attrs.city.to_string(),
            property_type: attrs.property_type.to_string(),
            bhk_config: attrs.bhk_config.to_string(),
            area_sq_ft: i64::from(attrs.area_sq_ft),
            location_type: attrs.location_type.to_string(),
            property_age: attrs.property_age.to_string(),
            floor_band: attrs.floor_band.to_string(),
            furnishing: attrs.furnishing.to_string(),
            parking: attrs.parking.to_string(),
            amenities: attrs
                .amenities
                .selected()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    field: AttributeField,
    value: &str,
) -> Result<T, InvalidAttributeError> {
    value
        .trim()
        .parse()
        .map_err(|_| InvalidAttributeError::new(field, value))
}

impl TryFrom<RawPropertyAttributes> for PropertyAttributes {
    type Error = InvalidAttributeError;

    fn try_from(raw: RawPropertyAttributes) -> Result<Self, Self::Error> {
        let amenities = raw
            .amenities
            .iter()
            .map(|name| parse_field::<Amenity>(AttributeField::Amenities, name))
            .collect::<Result<Amenities, _>>()?;

        Ok(Self {
            city: parse_field(AttributeField::City, &raw.city)?,
            property_type: parse_field(AttributeField::PropertyType, &raw.property_type)?,
            bhk_config: parse_field(AttributeField::BhkConfig, &raw.bhk_config)?,
            area_sq_ft: validate_area(raw.area_sq_ft)?,
            location_type: parse_field(AttributeField::LocationType, &raw.location_type)?,
            property_age: parse_field(AttributeField::PropertyAge, &raw.property_age)?,
            floor_band: parse_field(AttributeField::FloorBand, &raw.floor_band)?,
            furnishing: parse_field(AttributeField::Furnishing, &raw.furnishing)?,
            parking: parse_field(AttributeField::Parking, &raw.parking)?,
            amenities,
        })
    }
}

/// Names each field of [`PropertyAttributes`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AttributeField {
    City,
    PropertyType,
    BhkConfig,
    AreaSqFt,
    LocationType,
    PropertyAge,
    FloorBand,
    Furnishing,
    Parking,
    Amenities,
}

/// Error returned when an attribute value lies outside its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAttributeError {
    /// The offending field.
    pub field: AttributeField,
    /// The rejected value, as given.
    pub value: String,
}

impl InvalidAttributeError {
    fn new(field: AttributeField, value: impl std::fmt::Display) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for InvalidAttributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field == AttributeField::AreaSqFt {
            write!(
                f,
                "invalid {} {}: expected {MIN_AREA_SQ_FT}-{MAX_AREA_SQ_FT}",
                self.field, self.value
            )
        } else {
            write!(f, "invalid {} '{}'", self.field, self.value)
        }
    }
}

impl std::error::Error for InvalidAttributeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_default() -> RawPropertyAttributes {
        RawPropertyAttributes::from(&PropertyAttributes::default())
    }

    #[test]
    fn labels_roundtrip_through_from_str() {
        for city in City::all() {
            assert_eq!(city.to_string().parse::<City>().unwrap(), *city);
        }
        for bhk in BhkConfig::all() {
            assert_eq!(bhk.to_string().parse::<BhkConfig>().unwrap(), *bhk);
        }
        for age in PropertyAge::all() {
            assert_eq!(age.to_string().parse::<PropertyAge>().unwrap(), *age);
        }
        for floor in FloorBand::all() {
            assert_eq!(floor.to_string().parse::<FloorBand>().unwrap(), *floor);
        }
    }

    #[test]
    fn domain_sizes() {
        assert_eq!(City::all().len(), 20);
        assert_eq!(PropertyType::all().len(), 6);
        assert_eq!(BhkConfig::all().len(), 6);
        assert_eq!(LocationType::all().len(), 6);
        assert_eq!(PropertyAge::all().len(), 7);
        assert_eq!(FloorBand::all().len(), 5);
        assert_eq!(Furnishing::all().len(), 3);
        assert_eq!(Parking::all().len(), 4);
        assert_eq!(Amenity::all().len(), 8);
    }

    #[test]
    fn display_uses_dashboard_labels() {
        assert_eq!(City::DelhiNcr.to_string(), "Delhi NCR");
        assert_eq!(PropertyType::Apartment.to_string(), "Apartment/Flat");
        assert_eq!(BhkConfig::FivePlusBhk.to_string(), "5+ BHK");
        assert_eq!(FloorBand::AboveTwelfth.to_string(), "Above 12th Floor");
        assert_eq!(Parking::None.to_string(), "No Parking");
        assert_eq!(Amenity::SwimmingPool.to_string(), "Swimming Pool");
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("delhi ncr".parse::<City>().unwrap(), City::DelhiNcr);
        assert_eq!("it hub".parse::<LocationType>().unwrap(), LocationType::ItHub);
    }

    #[test]
    fn amenity_accepts_flag_names() {
        assert_eq!("powerBackup".parse::<Amenity>().unwrap(), Amenity::PowerBackup);
        assert_eq!("power_backup".parse::<Amenity>().unwrap(), Amenity::PowerBackup);
        assert_eq!("Power Backup".parse::<Amenity>().unwrap(), Amenity::PowerBackup);
        assert_eq!("swimming_pool".parse::<Amenity>().unwrap(), Amenity::SwimmingPool);
        assert_eq!("vastu".parse::<Amenity>().unwrap(), Amenity::Vastu);
    }

    #[test]
    fn amenities_collect_and_report_selection() {
        let amenities: Amenities = [Amenity::Gym, Amenity::Lift, Amenity::Gym]
            .into_iter()
            .collect();
        assert!(amenities.lift);
        assert!(amenities.gym);
        assert_eq!(amenities.count(), 2);
        assert_eq!(amenities.selected(), vec![Amenity::Lift, Amenity::Gym]);
    }

    #[test]
    fn raw_default_converts_back() {
        let attrs = PropertyAttributes::try_from(raw_default()).unwrap();
        assert_eq!(attrs, PropertyAttributes::default());
    }

    #[test]
    fn raw_rejects_unknown_city() {
        let raw = RawPropertyAttributes {
            city: "Atlantis".to_string(),
            ..raw_default()
        };
        let err = PropertyAttributes::try_from(raw).unwrap_err();
        assert_eq!(err.field, AttributeField::City);
        assert_eq!(err.value, "Atlantis");
        assert_eq!(err.to_string(), "invalid city 'Atlantis'");
    }

    #[test]
    fn raw_rejects_unknown_amenity() {
        let raw = RawPropertyAttributes {
            amenities: vec!["lift".to_string(), "helipad".to_string()],
            ..raw_default()
        };
        let err = PropertyAttributes::try_from(raw).unwrap_err();
        assert_eq!(err.field, AttributeField::Amenities);
        assert_eq!(err.value, "helipad");
    }

    #[test]
    fn area_bounds() {
        assert_eq!(validate_area(200).unwrap(), 200);
        assert_eq!(validate_area(5000).unwrap(), 5000);
        assert!(validate_area(199).is_err());
        assert!(validate_area(5001).is_err());
        assert!(validate_area(-1200).is_err());

        let err = validate_area(5001).unwrap_err();
        assert_eq!(err.field, AttributeField::AreaSqFt);
        assert_eq!(err.to_string(), "invalid areaSqFt 5001: expected 200-5000");
    }

    #[test]
    fn serde_uses_labels_and_camel_case() {
        let json = serde_json::to_value(PropertyAttributes::default()).unwrap();
        assert_eq!(json["city"], "Mumbai");
        assert_eq!(json["bhkConfig"], "3 BHK");
        assert_eq!(json["propertyAge"], "1-5 Years");
        assert_eq!(json["amenities"]["powerBackup"], false);
    }

    #[test]
    fn area_sq_m_conversion() {
        let attrs = PropertyAttributes::default();
        assert!((attrs.area_sq_m() - 111.4836).abs() < 1e-9);
    }

    #[test]
    fn crore_conversion() {
        assert!((to_crores(37_622_000) - 3.7622).abs() < 1e-12);
    }
}
