/// Cleaning strategy applied to a numeric column before binning.
///
/// One variant per parsing strategy keeps the per-field selection exhaustive:
/// adding a strategy forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericParser {
    /// First maximal run of digits and decimal points, e.g. `"95%"` -> 95.0.
    Percentage,
    /// Strip `$` and `,` then parse, e.g. `"$1,250.00"` -> 1250.0.
    Price,
    /// Number embedded in free text, e.g. `"1.5 baths"` -> 1.5. Same
    /// extraction rule as `Percentage`.
    FreeTextQuantity,
    /// Direct float conversion of the trimmed string.
    Plain,
}

/// A numeric column together with its cleaning strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    pub name: String,
    pub parser: NumericParser,
}

impl NumericField {
    pub fn new(name: impl Into<String>, parser: NumericParser) -> Self {
        Self {
            name: name.into(),
            parser,
        }
    }
}

/// Which columns to analyze and how.
///
/// Field lists are fixed configuration, not runtime input: the analysis is
/// tied to the listing dataset's schema.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub categorical: Vec<String>,
    pub numeric: Vec<NumericField>,
}

impl AnalysisConfig {
    /// The column set of the rental-listing dataset.
    pub fn listing_defaults() -> Self {
        use NumericParser::{FreeTextQuantity, Percentage, Plain, Price};
        let categorical = [
            "property_type",
            "property_type.1",
            "room_type",
            "host_is_superhost",
            "host_identity_verified",
            "neighbourhood_cleansed",
            "host_response_time",
            "instant_bookable",
            "has_availability",
            "host_location",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let numeric = vec![
            NumericField::new("host_response_rate", Percentage),
            NumericField::new("host_acceptance_rate", Percentage),
            NumericField::new("host_total_listings_count", Plain),
            NumericField::new("accommodates", Plain),
            NumericField::new("bathrooms_text", FreeTextQuantity),
            NumericField::new("beds", Plain),
            NumericField::new("price", Price),
            NumericField::new("maximum_nights_avg_ntm", Plain),
            NumericField::new("availability_365", Plain),
            NumericField::new("number_of_reviews", Plain),
            NumericField::new("review_scores_value", Plain),
            NumericField::new("reviews_per_month", Plain),
        ];
        Self {
            categorical,
            numeric,
        }
    }
}
