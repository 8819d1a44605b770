//! Price estimation and derived financial metrics.

use property_price_models::{
    InvestmentGrade, PriceBreakdown, PriceEstimate, PropertyAttributes,
};

use crate::EstimateError;
use crate::tables::{
    AMENITY_BONUSES, BREAKDOWN_SHARES_PERCENT, EMI_RATE, HIGH_GROWTH_APPRECIATION_PERCENT,
    METRO_RENTAL_YIELD_PERCENT, REGISTRATION_RATE, STAMP_DUTY_RATE,
    STANDARD_APPRECIATION_PERCENT, STANDARD_RENTAL_YIELD_PERCENT, age_factor, bhk_factor,
    city_rate, floor_factor, furnishing_factor, location_factor, parking_bonus,
    property_type_factor,
};

/// Annual rent as a fraction of price in Mumbai and Delhi NCR.
const METRO_RENT_RATE: f64 = 0.024;

/// Annual rent as a fraction of price everywhere else.
const STANDARD_RENT_RATE: f64 = 0.03;

/// Estimates the market price of a property and derives its financial
/// metrics.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidAttribute`] if the area is outside the
/// accepted range.
pub fn estimate(attrs: &PropertyAttributes) -> Result<PriceEstimate, EstimateError> {
    let total_price = total_price(attrs)?;
    let estimate = derive_metrics(attrs, total_price);

    log::debug!(
        "Estimated {} {} in {} at {total_price} ({:?})",
        attrs.bhk_config,
        attrs.property_type,
        attrs.city,
        estimate.investment_grade,
    );

    Ok(estimate)
}

/// Computes the estimated price in whole rupees.
///
/// The city rate is scaled by area, multiplied through the property type,
/// location, age, floor, furnishing and BHK factors in that order, then
/// the flat parking and amenity bonuses are added and the result is
/// truncated.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidAttribute`] if the area is outside the
/// accepted range.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn total_price(attrs: &PropertyAttributes) -> Result<u64, EstimateError> {
    attrs.validate()?;

    let mut price = f64::from(city_rate(attrs.city)) * f64::from(attrs.area_sq_ft);
    log::trace!("base price {price} for {} sq ft in {}", attrs.area_sq_ft, attrs.city);

    price *= property_type_factor(attrs.property_type);
    price *= location_factor(attrs.location_type);
    price *= age_factor(attrs.property_age);
    price *= floor_factor(attrs.floor_band);
    price *= furnishing_factor(attrs.furnishing);
    price *= bhk_factor(attrs.bhk_config);
    log::trace!("adjusted price {price}");

    price += parking_bonus(attrs.parking) as f64;
    price += amenities_bonus(attrs) as f64;

    Ok(price as u64)
}

/// Sum of the flat bonuses of every amenity present.
#[must_use]
pub fn amenities_bonus(attrs: &PropertyAttributes) -> u64 {
    AMENITY_BONUSES
        .iter()
        .filter(|(amenity, _)| attrs.amenities.contains(*amenity))
        .fold(0, |acc, (_, bonus)| acc + bonus)
}

/// Builds every derived metric from an already computed total price.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_metrics(attrs: &PropertyAttributes, total_price: u64) -> PriceEstimate {
    let total = total_price as f64;

    let (rent_rate, rental_yield_percent) = if attrs.city.is_low_yield_metro() {
        (METRO_RENT_RATE, METRO_RENTAL_YIELD_PERCENT)
    } else {
        (STANDARD_RENT_RATE, STANDARD_RENTAL_YIELD_PERCENT)
    };
    let annual_rent = total * rent_rate;

    let appreciation_percent = if attrs.city.is_high_growth() {
        HIGH_GROWTH_APPRECIATION_PERCENT
    } else {
        STANDARD_APPRECIATION_PERCENT
    };
    let total_return_percent = rental_yield_percent + appreciation_percent;

    PriceEstimate {
        total_price,
        price_per_area: total / f64::from(attrs.area_sq_ft),
        monthly_emi: total * EMI_RATE,
        stamp_duty: total * STAMP_DUTY_RATE,
        registration_fee: total * REGISTRATION_RATE,
        rental_yield_percent,
        monthly_rent: annual_rent / 12.0,
        annual_rent,
        appreciation_percent,
        total_return_percent,
        investment_grade: InvestmentGrade::from_total_return(total_return_percent),
        breakdown: breakdown(total_price),
    }
}

/// Splits the total price into its fixed display shares. Any remainder
/// from integer division lands in the market factors share.
#[must_use]
pub const fn breakdown(total_price: u64) -> PriceBreakdown {
    let [base, location, amenities, _] = BREAKDOWN_SHARES_PERCENT;

    let base_property = total_price * base / 100;
    let location_premium = total_price * location / 100;
    let amenities = total_price * amenities / 100;

    PriceBreakdown {
        base_property,
        location_premium,
        amenities,
        market_factors: total_price - base_property - location_premium - amenities,
    }
}

#[cfg(test)]
mod tests {
    use property_price_models::{
        Amenities, Amenity, AttributeField, BhkConfig, City, FloorBand, Furnishing,
        LocationType, Parking, PropertyAge, PropertyType,
    };

    use super::*;

    fn patna_minimum() -> PropertyAttributes {
        PropertyAttributes {
            city: City::Patna,
            property_type: PropertyType::Apartment,
            bhk_config: BhkConfig::OneRk,
            area_sq_ft: 200,
            location_type: LocationType::Prime,
            property_age: PropertyAge::UnderConstruction,
            floor_band: FloorBand::Ground,
            furnishing: Furnishing::Unfurnished,
            parking: Parking::None,
            amenities: Amenities::default(),
        }
    }

    fn cheapest() -> PropertyAttributes {
        PropertyAttributes {
            property_type: PropertyType::StudioApartment,
            location_type: LocationType::Outskirts,
            property_age: PropertyAge::OverFifteenYears,
            ..patna_minimum()
        }
    }

    fn assert_near(actual: u64, expected: u64) {
        assert!(
            actual.abs_diff(expected) <= 1,
            "expected {expected} (+/- 1), got {actual}"
        );
    }

    #[test]
    fn mumbai_suburb_three_bhk() {
        let estimate = estimate(&PropertyAttributes::default()).unwrap();
        assert_near(estimate.total_price, 37_622_000);
    }

    #[test]
    fn estimate_is_deterministic() {
        let attrs = PropertyAttributes {
            city: City::Pune,
            amenities: Amenity::all().iter().copied().collect(),
            ..PropertyAttributes::default()
        };
        let first = estimate(&attrs).unwrap();
        let second = estimate(&attrs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_estimates_agree() {
        let attrs = PropertyAttributes {
            city: City::Hyderabad,
            ..PropertyAttributes::default()
        };
        let expected = total_price(&attrs).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || total_price(&attrs).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn no_parking_and_no_amenities_add_nothing() {
        let attrs = PropertyAttributes {
            parking: Parking::None,
            ..PropertyAttributes::default()
        };
        assert_eq!(amenities_bonus(&attrs), 0);
        let with_parking = total_price(&PropertyAttributes::default()).unwrap();
        let without = total_price(&attrs).unwrap();
        assert_near(with_parking - without, 200_000);
    }

    #[test]
    fn amenity_bonuses_are_summed() {
        let attrs = PropertyAttributes {
            amenities: [Amenity::Lift, Amenity::SwimmingPool, Amenity::Temple]
                .into_iter()
                .collect(),
            ..PropertyAttributes::default()
        };
        assert_eq!(amenities_bonus(&attrs), 650_000);

        let all = PropertyAttributes {
            amenities: Amenity::all().iter().copied().collect(),
            ..PropertyAttributes::default()
        };
        assert_eq!(amenities_bonus(&all), 1_500_000);
        let base = total_price(&PropertyAttributes::default()).unwrap();
        assert_near(total_price(&all).unwrap() - base, 1_500_000);
    }

    #[test]
    fn lowest_index_patna_stays_positive() {
        let total = total_price(&patna_minimum()).unwrap();
        assert!(total > 0);
        assert_near(total, 536_256);
    }

    #[test]
    fn cheapest_combination_stays_positive() {
        let total = total_price(&cheapest()).unwrap();
        assert_near(total, 217_056);
    }

    #[test]
    fn area_boundaries() {
        for area in [200, 5000] {
            let attrs = PropertyAttributes {
                area_sq_ft: area,
                ..PropertyAttributes::default()
            };
            assert!(estimate(&attrs).is_ok(), "area {area} should be valid");
        }

        for area in [0, 199, 5001] {
            let attrs = PropertyAttributes {
                area_sq_ft: area,
                ..PropertyAttributes::default()
            };
            match estimate(&attrs) {
                Err(EstimateError::InvalidAttribute(err)) => {
                    assert_eq!(err.field, AttributeField::AreaSqFt);
                }
                other => panic!("area {area} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn price_strictly_increases_with_area() {
        for base in [cheapest(), PropertyAttributes::default()] {
            let mut previous = total_price(&PropertyAttributes {
                area_sq_ft: 200,
                ..base
            })
            .unwrap();
            for area in 201..=5000 {
                let attrs = PropertyAttributes {
                    area_sq_ft: area,
                    ..base
                };
                let current = total_price(&attrs).unwrap();
                assert!(
                    current > previous,
                    "area {area}: {current} not greater than {previous}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn price_increases_with_area_for_every_city_and_type() {
        for city in City::all() {
            for property_type in PropertyType::all() {
                for furnishing in Furnishing::all() {
                    let base = PropertyAttributes {
                        city: *city,
                        property_type: *property_type,
                        furnishing: *furnishing,
                        ..PropertyAttributes::default()
                    };
                    let at = |area_sq_ft| {
                        total_price(&PropertyAttributes { area_sq_ft, ..base }).unwrap()
                    };

                    let mut previous = at(200);
                    for area in (250..=5000).step_by(50) {
                        let current = at(area);
                        assert!(
                            current > previous,
                            "{city} {property_type} {furnishing} at {area}: \
                             {current} not greater than {previous}"
                        );
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn rental_yield_depends_only_on_city() {
        for city in City::all() {
            let attrs = PropertyAttributes {
                city: *city,
                ..PropertyAttributes::default()
            };
            let estimate = estimate(&attrs).unwrap();
            let expected = if matches!(city, City::Mumbai | City::DelhiNcr) {
                2.4
            } else {
                3.0
            };
            assert!(
                estimate.rental_yield_percent.to_bits() == f64::to_bits(expected),
                "{city} yield {}",
                estimate.rental_yield_percent
            );

            #[allow(clippy::cast_precision_loss)]
            let implied = estimate.annual_rent / estimate.total_price as f64 * 100.0;
            assert!((implied - expected).abs() < 1e-9, "{city} implied {implied}");
            assert!((estimate.monthly_rent * 12.0 - estimate.annual_rent).abs() < 1e-6);
        }
    }

    #[test]
    fn appreciation_and_grade_by_city() {
        let estimate_for = |city| {
            let attrs = PropertyAttributes {
                city,
                ..PropertyAttributes::default()
            };
            estimate(&attrs).unwrap()
        };

        let mumbai = estimate_for(City::Mumbai);
        assert!((mumbai.appreciation_percent - 8.0).abs() < f64::EPSILON);
        assert!((mumbai.total_return_percent - 10.4).abs() < 1e-9);
        assert_eq!(mumbai.investment_grade, InvestmentGrade::Good);

        let bangalore = estimate_for(City::Bangalore);
        assert!((bangalore.total_return_percent - 11.0).abs() < 1e-9);
        assert_eq!(bangalore.investment_grade, InvestmentGrade::Good);

        // 3% yield + 6% appreciation sits exactly on the threshold.
        let patna = estimate_for(City::Patna);
        assert!((patna.appreciation_percent - 6.0).abs() < f64::EPSILON);
        assert_eq!(patna.investment_grade, InvestmentGrade::Average);
    }

    #[test]
    fn transaction_costs() {
        let attrs = PropertyAttributes::default();
        let estimate = derive_metrics(&attrs, 10_000_000);
        assert!((estimate.monthly_emi - 75_000.0).abs() < 1e-6);
        assert!((estimate.stamp_duty - 500_000.0).abs() < 1e-6);
        assert!((estimate.registration_fee - 100_000.0).abs() < 1e-6);
        assert!((estimate.price_per_area - 10_000_000.0 / 1200.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_sums_to_total() {
        for total in [0, 1, 99, 101, 536_255, 37_622_000, 37_621_999] {
            let split = breakdown(total);
            assert_eq!(split.total(), total, "breakdown of {total}");
        }

        let split = breakdown(37_622_000);
        assert_eq!(split.base_property, 22_573_200);
        assert_eq!(split.location_premium, 9_405_500);
        assert_eq!(split.amenities, 3_762_200);
        assert_eq!(split.market_factors, 1_881_100);
    }
}
