use serde::{Deserialize, Serialize};
use std::fmt;

/// Temporal/statistical granularity of a map product.
///
/// A closed enumeration: every level maps to exactly one path template in
/// [`crate::grammar`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum AggregationLevel {
    Daily,
    Monthly,
    Quarterly,
    Annual,
    /// Value exceeded 90% of the time over the year.
    Permanence90,
    /// Trophic-state classification over the whole product period.
    TrophicState,
    /// Monthly trophic-state classification.
    TrophicStateMonthly,
}

impl AggregationLevel {
    pub const ALL: [AggregationLevel; 7] = [
        AggregationLevel::Daily,
        AggregationLevel::Monthly,
        AggregationLevel::Quarterly,
        AggregationLevel::Annual,
        AggregationLevel::Permanence90,
        AggregationLevel::TrophicState,
        AggregationLevel::TrophicStateMonthly,
    ];

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            AggregationLevel::Daily => "Daily",
            AggregationLevel::Monthly => "Monthly",
            AggregationLevel::Quarterly => "Quarterly",
            AggregationLevel::Annual => "Annual",
            AggregationLevel::Permanence90 => "90% permanence",
            AggregationLevel::TrophicState => "Trophic state",
            AggregationLevel::TrophicStateMonthly => "Trophic state (monthly)",
        }
    }

    /// Stable token used by the CLI and in state round-trips.
    pub fn token(&self) -> &'static str {
        match self {
            AggregationLevel::Daily => "daily",
            AggregationLevel::Monthly => "monthly",
            AggregationLevel::Quarterly => "quarterly",
            AggregationLevel::Annual => "annual",
            AggregationLevel::Permanence90 => "permanence90",
            AggregationLevel::TrophicState => "trophic",
            AggregationLevel::TrophicStateMonthly => "trophic-monthly",
        }
    }

    /// Parse a token back into a level.
    pub fn parse(token: &str) -> Option<AggregationLevel> {
        AggregationLevel::ALL
            .into_iter()
            .find(|level| level.token() == token.to_ascii_lowercase())
    }

    /// Trophic-state products are only generated for chlorophyll-a.
    pub fn chla_only(&self) -> bool {
        matches!(
            self,
            AggregationLevel::TrophicState | AggregationLevel::TrophicStateMonthly
        )
    }
}

impl fmt::Display for AggregationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for level in AggregationLevel::ALL {
            assert_eq!(AggregationLevel::parse(level.token()), Some(level));
        }
        assert_eq!(AggregationLevel::parse("weekly"), None);
    }

    #[test]
    fn test_chla_only_levels() {
        assert!(AggregationLevel::TrophicState.chla_only());
        assert!(AggregationLevel::TrophicStateMonthly.chla_only());
        assert!(!AggregationLevel::Permanence90.chla_only());
    }
}
