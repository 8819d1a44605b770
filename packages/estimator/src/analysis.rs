//! Supplementary analysis rendered next to an estimate.
//!
//! None of these figures feed back into the price. The trend series in
//! particular is illustrative: it fans the estimate out over six months
//! at a fixed 2% step rather than reading any market data.

use property_price_models::analysis::{
    MarketInsight, PriceAnalysis, PriceRange, PriceReport, TaxBenefit, TrendPoint,
};
use property_price_models::{LAKH, PriceEstimate, PropertyAttributes, to_crores};

use crate::EstimateError;
use crate::pricing::estimate;

/// Half-width of the accuracy band around an estimate, in percent.
pub const ACCURACY_TOLERANCE_PERCENT: u64 = 12;

/// National reference price per square foot.
pub const BENCHMARK_PRICE_PER_SQ_FT: f64 = 8_000.0;

/// Number of amenities at which a property commands premium pricing.
pub const PREMIUM_AMENITY_COUNT: usize = 4;

/// Months covered by the trend series.
pub const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Income-tax deductions available on a home loan.
pub const TAX_BENEFITS: &[TaxBenefit] = &[
    TaxBenefit {
        title: "Home Loan Interest",
        section: "24",
        max_deduction: 2 * LAKH,
    },
    TaxBenefit {
        title: "Principal Repayment",
        section: "80C",
        max_deduction: 3 * LAKH / 2,
    },
    TaxBenefit {
        title: "First Time Buyer",
        section: "80EE",
        max_deduction: 50_000,
    },
];

/// Ceiling on combined annual tax savings.
pub const MAX_ANNUAL_TAX_SAVINGS: u64 = 4 * LAKH;

/// Estimates a property and assembles everything a report shows.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidAttribute`] if the attributes are
/// rejected by [`estimate`].
pub fn report(attrs: &PropertyAttributes) -> Result<PriceReport, EstimateError> {
    let estimate = estimate(attrs)?;
    let analysis = analyze(attrs, &estimate);

    Ok(PriceReport {
        attributes: *attrs,
        estimate,
        analysis,
    })
}

/// Builds the supplementary analysis for an estimate.
#[must_use]
pub fn analyze(attrs: &PropertyAttributes, estimate: &PriceEstimate) -> PriceAnalysis {
    PriceAnalysis {
        area_sq_m: attrs.area_sq_m(),
        total_price_crores: to_crores(estimate.total_price),
        accuracy_range: accuracy_range(estimate.total_price),
        benchmark_delta: benchmark_delta(estimate.price_per_area),
        trend: price_trend(estimate.total_price),
        insights: market_insights(attrs),
        tax_benefits: TAX_BENEFITS.to_vec(),
        amenities: attrs.amenities.selected(),
        recommendation: estimate.investment_grade.recommendation(),
    }
}

/// The band of [`ACCURACY_TOLERANCE_PERCENT`] either side of the estimate.
#[must_use]
pub const fn accuracy_range(total_price: u64) -> PriceRange {
    PriceRange {
        low: total_price * (100 - ACCURACY_TOLERANCE_PERCENT) / 100,
        high: total_price * (100 + ACCURACY_TOLERANCE_PERCENT) / 100,
        tolerance_percent: ACCURACY_TOLERANCE_PERCENT,
    }
}

/// How far the price per square foot sits above
/// [`BENCHMARK_PRICE_PER_SQ_FT`]. `None` at or below it.
#[must_use]
pub fn benchmark_delta(price_per_area: f64) -> Option<f64> {
    (price_per_area > BENCHMARK_PRICE_PER_SQ_FT)
        .then(|| price_per_area - BENCHMARK_PRICE_PER_SQ_FT)
}

/// Six monthly points starting 5% below the estimate and rising 2% a
/// month.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn price_trend(total_price: u64) -> Vec<TrendPoint> {
    let total = total_price as f64;

    TREND_MONTHS
        .iter()
        .zip(0u8..)
        .map(|(month, i)| TrendPoint {
            month: (*month).to_string(),
            price: total * f64::from(i).mul_add(0.02, 0.95),
        })
        .collect()
}

/// Four qualitative observations about the property's market.
#[must_use]
pub fn market_insights(attrs: &PropertyAttributes) -> Vec<MarketInsight> {
    let city_trend = if attrs.city.is_high_growth() {
        "strong growth"
    } else {
        "steady appreciation"
    };
    let location_demand = if attrs.location_type.is_sought_after() {
        "highly sought after"
    } else {
        "showing good potential"
    };
    let bhk_demand = if attrs.bhk_config.is_mainstream() {
        "in high demand"
    } else {
        "niche market segment"
    };
    let amenity_pricing = if attrs.amenities.count() >= PREMIUM_AMENITY_COUNT {
        "premium pricing"
    } else {
        "standard rates"
    };

    vec![
        MarketInsight {
            topic: "city".to_string(),
            text: format!("Property prices in {} have shown {city_trend}", attrs.city),
        },
        MarketInsight {
            topic: "location".to_string(),
            text: format!("{} areas are {location_demand}", attrs.location_type),
        },
        MarketInsight {
            topic: "bhk".to_string(),
            text: format!("{} properties are {bhk_demand}", attrs.bhk_config),
        },
        MarketInsight {
            topic: "amenities".to_string(),
            text: format!("Properties with amenities command {amenity_pricing}"),
        },
    ]
}
