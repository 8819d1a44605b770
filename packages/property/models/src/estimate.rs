//! Price estimate result types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse investment rating derived from rental yield plus expected
/// appreciation.
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
pub enum InvestmentGrade {
    /// Total return above 12% per annum
    Excellent,
    /// Total return above 9% per annum
    Good,
    /// Everything else
    Average,
}

impl InvestmentGrade {
    /// Grades a total annual return, in percent. Both thresholds are
    /// strict.
    #[must_use]
    pub fn from_total_return(total_return_percent: f64) -> Self {
        if total_return_percent > 12.0 {
            Self::Excellent
        } else if total_return_percent > 9.0 {
            Self::Good
        } else {
            Self::Average
        }
    }

    /// One-line buying recommendation for this grade.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Strong Buy - Excellent growth potential with good rental yields",
            Self::Good => "Good Investment - Steady returns with moderate appreciation",
            Self::Average => "Consider carefully - Average returns expected",
        }
    }
}

/// Display split of the total price into four fixed shares.
///
/// The components are presentation ratios, not separately priced
/// quantities. They always sum to the total price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// 60% share.
    pub base_property: u64,
    /// 25% share.
    pub location_premium: u64,
    /// 10% share.
    pub amenities: u64,
    /// 5% share plus any rounding remainder.
    pub market_factors: u64,
}

impl PriceBreakdown {
    /// Sum of all components.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.base_property + self.location_premium + self.amenities + self.market_factors
    }

    /// Labelled components in display order.
    #[must_use]
    pub const fn components(&self) -> [(&'static str, u64); 4] {
        [
            ("Base Property", self.base_property),
            ("Location Premium", self.location_premium),
            ("Amenities", self.amenities),
            ("Market Factors", self.market_factors),
        ]
    }
}

/// Estimated price and the metrics derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    /// Estimated market price in whole rupees.
    pub total_price: u64,
    /// Rupees per square foot.
    pub price_per_area: f64,
    /// Approximate monthly installment at 9% over 20 years.
    pub monthly_emi: f64,
    /// Stamp duty at 5%.
    pub stamp_duty: f64,
    /// Registration fee at 1%.
    pub registration_fee: f64,
    /// Gross rental yield, in percent.
    pub rental_yield_percent: f64,
    pub monthly_rent: f64,
    pub annual_rent: f64,
    /// Expected yearly capital appreciation, in percent.
    pub appreciation_percent: f64,
    /// Rental yield plus appreciation, in percent.
    pub total_return_percent: f64,
    pub investment_grade: InvestmentGrade,
    pub breakdown: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds_are_strict() {
        assert_eq!(InvestmentGrade::from_total_return(12.0), InvestmentGrade::Good);
        assert_eq!(
            InvestmentGrade::from_total_return(12.01),
            InvestmentGrade::Excellent
        );
        assert_eq!(InvestmentGrade::from_total_return(9.0), InvestmentGrade::Average);
        assert_eq!(InvestmentGrade::from_total_return(9.01), InvestmentGrade::Good);
        assert_eq!(InvestmentGrade::from_total_return(0.0), InvestmentGrade::Average);
    }

    #[test]
    fn recommendations_are_distinct() {
        assert!(InvestmentGrade::Excellent.recommendation().starts_with("Strong Buy"));
        assert!(InvestmentGrade::Good.recommendation().starts_with("Good Investment"));
        assert!(InvestmentGrade::Average
            .recommendation()
            .starts_with("Consider carefully"));
    }

    #[test]
    fn breakdown_components_sum() {
        let breakdown = PriceBreakdown {
            base_property: 60,
            location_premium: 25,
            amenities: 10,
            market_factors: 5,
        };
        assert_eq!(breakdown.total(), 100);
        let summed: u64 = breakdown.components().iter().map(|(_, v)| v).sum();
        assert_eq!(summed, 100);
    }
}
