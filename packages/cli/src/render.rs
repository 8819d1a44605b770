//! Plain-text rendering of a [`PriceReport`].

use std::fmt::Write as _;

use property_price_estimator::analysis::{BENCHMARK_PRICE_PER_SQ_FT, MAX_ANNUAL_TAX_SAVINGS};
use property_price_estimator::tables::city_rate;
use property_price_models::analysis::PriceReport;
use property_price_models::{
    Amenity, BhkConfig, City, FloorBand, Furnishing, LocationType, Parking, PropertyAge,
    PropertyType,
};

/// Width of the label column in metric tables.
const LABEL_WIDTH: usize = 22;

/// Formats a rupee amount with thousands separators, e.g. `₹37,622,000`.
#[must_use]
pub fn rupees(amount: u64) -> String {
    format!("\u{20b9}{}", group_digits(amount))
}

/// Rounds a fractional rupee amount to the nearest rupee and formats it
/// with [`rupees`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rupees_f64(amount: f64) -> String {
    rupees(amount.max(0.0).round() as u64)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

fn heading(output: &mut String, title: &str) {
    writeln!(output).unwrap();
    writeln!(output, "{title}").unwrap();
    writeln!(output, "{}", "-".repeat(title.chars().count())).unwrap();
}

fn metric(output: &mut String, label: &str, value: &str, note: &str) {
    if note.is_empty() {
        writeln!(output, "  {label:<LABEL_WIDTH$} {value}").unwrap();
    } else {
        writeln!(output, "  {label:<LABEL_WIDTH$} {value} ({note})").unwrap();
    }
}

/// Formats the full dashboard report: headline price, key metrics, price
/// breakdown, property summary, market analysis and investment insights.
#[must_use]
pub fn format_report(report: &PriceReport) -> String {
    let attrs = &report.attributes;
    let estimate = &report.estimate;
    let analysis = &report.analysis;
    let mut output = String::new();

    writeln!(output, "Indian Property Price Estimate").unwrap();
    writeln!(output, "{}", "=".repeat(30)).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "  {}", rupees(estimate.total_price)).unwrap();
    writeln!(
        output,
        "  {:.2} Crores | \u{b1}{}% accuracy range ({} - {})",
        analysis.total_price_crores,
        analysis.accuracy_range.tolerance_percent,
        rupees(analysis.accuracy_range.low),
        rupees(analysis.accuracy_range.high),
    )
    .unwrap();

    heading(&mut output, "Key Metrics");
    let benchmark_note = analysis.benchmark_delta.map_or_else(String::new, |delta| {
        format!(
            "+{} vs {} benchmark",
            rupees_f64(delta),
            rupees_f64(BENCHMARK_PRICE_PER_SQ_FT)
        )
    });
    metric(
        &mut output,
        "Price per Sq Ft",
        &rupees_f64(estimate.price_per_area),
        &benchmark_note,
    );
    metric(
        &mut output,
        "Monthly EMI",
        &rupees_f64(estimate.monthly_emi),
        "@ 9% for 20 years",
    );
    metric(
        &mut output,
        "Stamp Duty (Est.)",
        &rupees_f64(estimate.stamp_duty),
        "5% of property value",
    );
    metric(
        &mut output,
        "Registration Fee",
        &rupees_f64(estimate.registration_fee),
        "1% of property value",
    );

    heading(&mut output, "Price Breakdown");
    for (label, value) in estimate.breakdown.components() {
        metric(&mut output, label, &rupees(value), "");
    }

    heading(&mut output, "Property Summary");
    metric(&mut output, "City", attrs.city.as_ref(), "");
    metric(&mut output, "Property Type", attrs.property_type.as_ref(), "");
    metric(&mut output, "Configuration", attrs.bhk_config.as_ref(), "");
    metric(
        &mut output,
        "Area",
        &format!("{} sq ft", group_digits(u64::from(attrs.area_sq_ft))),
        &format!("{:.0} sq meters", analysis.area_sq_m),
    );
    metric(&mut output, "Location", attrs.location_type.as_ref(), "");
    metric(&mut output, "Age", attrs.property_age.as_ref(), "");
    metric(&mut output, "Floor", attrs.floor_band.as_ref(), "");
    metric(&mut output, "Furnishing", attrs.furnishing.as_ref(), "");
    metric(&mut output, "Parking", attrs.parking.as_ref(), "");
    if analysis.amenities.is_empty() {
        writeln!(output, "  No additional amenities selected").unwrap();
    } else {
        let names: Vec<String> = analysis.amenities.iter().map(ToString::to_string).collect();
        metric(&mut output, "Amenities", &names.join(" \u{2022} "), "");
    }

    heading(&mut output, "Market Analysis");
    writeln!(output, "  6-Month Price Trend").unwrap();
    for point in &analysis.trend {
        writeln!(output, "    {:<4} {}", point.month, rupees_f64(point.price)).unwrap();
    }
    writeln!(output).unwrap();
    writeln!(output, "  Market Insights").unwrap();
    for insight in &analysis.insights {
        writeln!(output, "    - {}", insight.text).unwrap();
    }

    heading(&mut output, "Investment Insights");
    metric(
        &mut output,
        "Rental Yield",
        &format!("{:.1}%", estimate.rental_yield_percent),
        "per annum",
    );
    metric(
        &mut output,
        "Monthly Rent",
        &rupees_f64(estimate.monthly_rent),
        &format!("{}/year", rupees_f64(estimate.annual_rent)),
    );
    metric(
        &mut output,
        "Capital Appreciation",
        &format!("{:.0}%", estimate.appreciation_percent),
        "expected yearly",
    );
    writeln!(output).unwrap();
    writeln!(output, "  Tax Benefits").unwrap();
    for benefit in &analysis.tax_benefits {
        writeln!(
            output,
            "    - {} (Section {}): up to {} deduction",
            benefit.title,
            benefit.section,
            rupees(benefit.max_deduction)
        )
        .unwrap();
    }
    writeln!(
        output,
        "    - Total annual tax savings: up to {}",
        rupees(MAX_ANNUAL_TAX_SAVINGS)
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "  Investment Grade: {}", estimate.investment_grade).unwrap();
    writeln!(
        output,
        "    Total Expected Return: {:.1}% per annum",
        estimate.total_return_percent
    )
    .unwrap();
    writeln!(output, "    Recommendation: {}", analysis.recommendation).unwrap();

    output
}

/// Formats every attribute domain with its accepted labels.
#[must_use]
pub fn format_options() -> String {
    let mut output = String::new();

    heading(&mut output, "City (rate per sq ft)");
    for city in City::all() {
        writeln!(
            output,
            "  {:<16} {}",
            city.as_ref(),
            rupees(u64::from(city_rate(*city)))
        )
        .unwrap();
    }

    list(&mut output, "Property Type", PropertyType::all());
    list(&mut output, "BHK Configuration", BhkConfig::all());
    list(&mut output, "Location Type", LocationType::all());
    list(&mut output, "Property Age", PropertyAge::all());
    list(&mut output, "Floor", FloorBand::all());
    list(&mut output, "Furnishing", Furnishing::all());
    list(&mut output, "Parking", Parking::all());
    list(&mut output, "Amenities", Amenity::all());

    output
}

fn list<T: std::fmt::Display>(output: &mut String, title: &str, values: &[T]) {
    heading(output, title);
    for value in values {
        writeln!(output, "  {value}").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use property_price_estimator::report;
    use property_price_models::{Amenities, PropertyAttributes};

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(37_622_000), "37,622,000");
        assert_eq!(group_digits(100_000_000), "100,000,000");
    }

    #[test]
    fn rupee_formatting() {
        assert_eq!(rupees(200_000), "\u{20b9}200,000");
        assert_eq!(rupees_f64(282_164.6), "\u{20b9}282,165");
    }

    #[test]
    fn report_has_every_section() {
        let report = report(&PropertyAttributes::default()).unwrap();
        let text = format_report(&report);

        for section in [
            "Key Metrics",
            "Price Breakdown",
            "Property Summary",
            "Market Analysis",
            "Investment Insights",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains("3.76 Crores"));
        assert!(text.contains("Investment Grade: Good"));
        assert!(text.contains("No additional amenities selected"));
        assert!(text.contains("Rental Yield"));
        assert!(text.contains("2.4%"));
        assert!(
            text.contains("Principal Repayment (Section 80C): up to \u{20b9}150,000 deduction")
        );
    }

    #[test]
    fn report_lists_selected_amenities() {
        let attrs = PropertyAttributes {
            amenities: Amenities {
                lift: true,
                swimming_pool: true,
                ..Amenities::default()
            },
            ..PropertyAttributes::default()
        };
        let text = format_report(&report(&attrs).unwrap());
        assert!(text.contains("Lift \u{2022} Swimming Pool"));
    }

    #[test]
    fn options_list_every_label() {
        let text = format_options();
        assert!(text.contains("Delhi NCR"));
        assert!(text.contains("\u{20b9}25,000"));
        assert!(text.contains("Above 12th Floor"));
        assert!(text.contains("Power Backup"));
    }
}
