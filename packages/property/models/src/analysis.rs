//! Supplementary analysis shown next to an estimate: accuracy band,
//! benchmark comparison, price trend, market insights and tax benefits.

use serde::{Deserialize, Serialize};

use crate::{Amenity, PriceEstimate, PropertyAttributes};

/// Low and high bounds around the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub low: u64,
    pub high: u64,
    /// Half-width of the band, in percent.
    pub tolerance_percent: u64,
}

/// One point of the illustrative monthly price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Short month name (e.g. "Jan").
    pub month: String,
    pub price: f64,
}

/// A single market observation about the chosen property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    /// What the insight is about (e.g. "city", "location").
    pub topic: String,
    pub text: String,
}

/// An income-tax deduction available to home-loan borrowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBenefit {
    pub title: &'static str,
    /// Income Tax Act section.
    pub section: &'static str,
    /// Maximum deduction in rupees per year.
    pub max_deduction: u64,
}

/// Everything shown alongside the estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAnalysis {
    pub area_sq_m: f64,
    pub total_price_crores: f64,
    pub accuracy_range: PriceRange,
    /// Price per square foot above the national benchmark, if above it.
    pub benchmark_delta: Option<f64>,
    pub trend: Vec<TrendPoint>,
    pub insights: Vec<MarketInsight>,
    pub tax_benefits: Vec<TaxBenefit>,
    pub amenities: Vec<Amenity>,
    pub recommendation: &'static str,
}

/// Attributes, estimate and analysis in one serializable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceReport {
    pub attributes: PropertyAttributes,
    pub estimate: PriceEstimate,
    pub analysis: PriceAnalysis,
}
