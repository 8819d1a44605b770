//! Constant pricing tables.
//!
//! Multipliers and bonuses are exact lookups keyed by the attribute enums,
//! compiled into the binary and never rebuilt per estimate.

use property_price_models::{
    Amenity, BhkConfig, City, FloorBand, Furnishing, LocationType, Parking, PropertyAge,
    PropertyType,
};

/// Monthly installment as a fraction of price (quoted as 9% over 20 years).
pub const EMI_RATE: f64 = 0.0075;

/// Stamp duty as a fraction of price.
pub const STAMP_DUTY_RATE: f64 = 0.05;

/// Registration fee as a fraction of price.
pub const REGISTRATION_RATE: f64 = 0.01;

/// Gross rental yield in Mumbai and Delhi NCR, in percent.
pub const METRO_RENTAL_YIELD_PERCENT: f64 = 2.4;

/// Gross rental yield everywhere else, in percent.
pub const STANDARD_RENTAL_YIELD_PERCENT: f64 = 3.0;

/// Yearly appreciation in high-growth cities, in percent.
pub const HIGH_GROWTH_APPRECIATION_PERCENT: f64 = 8.0;

/// Yearly appreciation everywhere else, in percent.
pub const STANDARD_APPRECIATION_PERCENT: f64 = 6.0;

/// Display shares of the total price, in percent: base, location,
/// amenities, market. Sums to 100.
pub const BREAKDOWN_SHARES_PERCENT: [u64; 4] = [60, 25, 10, 5];

/// Flat bonus per amenity, in rupees.
pub const AMENITY_BONUSES: &[(Amenity, u64)] = &[
    (Amenity::Lift, 100_000),
    (Amenity::PowerBackup, 150_000),
    (Amenity::Security, 200_000),
    (Amenity::Gym, 300_000),
    (Amenity::SwimmingPool, 500_000),
    (Amenity::Garden, 100_000),
    (Amenity::Temple, 50_000),
    (Amenity::Vastu, 100_000),
];

/// Base rate in rupees per square foot.
#[must_use]
pub const fn city_rate(city: City) -> u32 {
    match city {
        City::Mumbai => 25_000,
        City::DelhiNcr => 12_000,
        City::Bangalore => 8_500,
        City::Hyderabad => 6_500,
        City::Chennai => 7_000,
        City::Pune => 7_500,
        City::Kolkata | City::Ghaziabad => 5_500,
        City::Ahmedabad => 5_000,
        City::Surat | City::Visakhapatnam => 4_500,
        City::Jaipur | City::Ludhiana => 4_000,
        City::Lucknow | City::Nagpur => 3_500,
        City::Kanpur | City::Bhopal => 3_000,
        City::Indore => 3_200,
        City::Patna => 2_800,
        City::Vadodara => 4_200,
    }
}

#[must_use]
pub const fn property_type_factor(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 1.0,
        PropertyType::IndependentHouse => 1.2,
        PropertyType::Villa => 1.5,
        PropertyType::BuilderFloor => 1.1,
        PropertyType::Penthouse => 1.8,
        PropertyType::StudioApartment => 0.85,
    }
}

#[must_use]
pub const fn location_factor(location_type: LocationType) -> f64 {
    match location_type {
        LocationType::Prime => 1.4,
        LocationType::Central => 1.2,
        LocationType::Suburb => 1.0,
        LocationType::Outskirts => 0.8,
        LocationType::ItHub => 1.3,
        LocationType::BusinessDistrict => 1.25,
    }
}

/// Newly delivered stock carries a premium; old stock is discounted.
#[must_use]
pub const fn age_factor(age: PropertyAge) -> f64 {
    match age {
        PropertyAge::UnderConstruction => 0.9,
        PropertyAge::ReadyToMove | PropertyAge::OneToFiveYears => 1.0,
        PropertyAge::UpToOneYear => 1.05,
        PropertyAge::FiveToTenYears => 0.95,
        PropertyAge::TenToFifteenYears => 0.85,
        PropertyAge::OverFifteenYears => 0.75,
    }
}

#[must_use]
pub const fn floor_factor(floor: FloorBand) -> f64 {
    match floor {
        FloorBand::Ground => 0.95,
        FloorBand::Low => 1.0,
        FloorBand::Mid => 1.05,
        FloorBand::High => 1.08,
        FloorBand::AboveTwelfth => 1.12,
    }
}

#[must_use]
pub const fn furnishing_factor(furnishing: Furnishing) -> f64 {
    match furnishing {
        Furnishing::Unfurnished => 1.0,
        Furnishing::SemiFurnished => 1.08,
        Furnishing::FullyFurnished => 1.15,
    }
}

#[must_use]
pub const fn bhk_factor(bhk: BhkConfig) -> f64 {
    match bhk {
        BhkConfig::OneRk => 0.8,
        BhkConfig::OneBhk => 0.9,
        BhkConfig::TwoBhk => 1.0,
        BhkConfig::ThreeBhk => 1.1,
        BhkConfig::FourBhk => 1.2,
        BhkConfig::FivePlusBhk => 1.3,
    }
}

/// Flat parking bonus in rupees.
#[must_use]
pub const fn parking_bonus(parking: Parking) -> u64 {
    match parking {
        Parking::None => 0,
        Parking::OneCar => 200_000,
        Parking::TwoCars => 350_000,
        Parking::ThreePlusCars => 500_000,
    }
}
