use serde::{Deserialize, Serialize};
use std::fmt;

/// A water-quality parameter derived from satellite imagery.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Parameter {
    /// Chlorophyll-a concentration (µg/L)
    Chla,
    /// Turbidity (NTU)
    Turbidity,
}

impl Parameter {
    pub const ALL: [Parameter; 2] = [Parameter::Chla, Parameter::Turbidity];

    /// Prefix of this parameter's statistic columns in the snapshot
    /// (e.g. `chla_mean`, `turb_max`).
    pub fn column_prefix(&self) -> &'static str {
        match self {
            Parameter::Chla => "chla",
            Parameter::Turbidity => "turb",
        }
    }

    /// Folder name in the map image tree.
    pub fn folder(&self) -> &'static str {
        match self {
            Parameter::Chla => "Chla",
            Parameter::Turbidity => "Turbidity",
        }
    }

    /// Short tag used inside map filenames.
    pub fn tag(&self) -> &'static str {
        match self {
            Parameter::Chla => "Chla",
            Parameter::Turbidity => "Turb",
        }
    }

    /// Physical display unit after the ÷100 storage scaling is undone.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Chla => "µg/L",
            Parameter::Turbidity => "NTU",
        }
    }

    /// Human-readable label for selectors and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Chla => "Chlorophyll-a",
            Parameter::Turbidity => "Turbidity",
        }
    }

    /// Parse a CLI/state token into a parameter.
    pub fn parse(token: &str) -> Option<Parameter> {
        match token.to_ascii_lowercase().as_str() {
            "chla" | "chlorophyll-a" | "chlorophyll" => Some(Parameter::Chla),
            "turb" | "turbidity" => Some(Parameter::Turbidity),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The statistic aggregated per (water body, site, date) cell.
///
/// `Count` is the number of valid pixels behind the cell; it is never
/// charted directly but drives the low-count filter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Mean,
    Median,
    Max,
    Min,
    Count,
}

impl Statistic {
    /// The chartable statistics, in selector order.
    pub const ALL: [Statistic; 4] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Max,
        Statistic::Min,
    ];

    /// Canonical column suffix in the snapshot.
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Max => "max",
            Statistic::Min => "min",
            Statistic::Count => "count",
        }
    }

    /// Legacy truncated suffix still present in older snapshots.
    /// Only the median column ever carried one.
    pub fn legacy_suffix(&self) -> Option<&'static str> {
        match self {
            Statistic::Median => Some("media"),
            _ => None,
        }
    }

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Max => "Max",
            Statistic::Min => "Min",
            Statistic::Count => "Pixel count",
        }
    }

    /// Parse a CLI/state token into a statistic.
    pub fn parse(token: &str) -> Option<Statistic> {
        match token.to_ascii_lowercase().as_str() {
            "mean" => Some(Statistic::Mean),
            "median" => Some(Statistic::Median),
            "max" => Some(Statistic::Max),
            "min" => Some(Statistic::Min),
            "count" => Some(Statistic::Count),
            _ => None,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_prefixes() {
        assert_eq!(Parameter::Chla.column_prefix(), "chla");
        assert_eq!(Parameter::Turbidity.column_prefix(), "turb");
    }

    #[test]
    fn test_only_median_has_legacy_suffix() {
        assert_eq!(Statistic::Median.legacy_suffix(), Some("media"));
        for statistic in [
            Statistic::Mean,
            Statistic::Max,
            Statistic::Min,
            Statistic::Count,
        ] {
            assert_eq!(statistic.legacy_suffix(), None);
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Parameter::parse("turb"), Some(Parameter::Turbidity));
        assert_eq!(Parameter::parse("Turbidity"), Some(Parameter::Turbidity));
        assert_eq!(Parameter::parse("secchi"), None);
        assert_eq!(Statistic::parse("median"), Some(Statistic::Median));
        assert_eq!(Statistic::parse("p90"), None);
    }
}
