//! The path grammar: one pure template function per aggregation level.
//!
//! All paths are relative to the maps root and use `/` separators, so the
//! same string works as a filesystem suffix, an index entry, and a web URL.

use crate::level::AggregationLevel;
use chrono::{Datelike, NaiveDate};
use wqv_core::error::{Result, WqError};
use wqv_core::parameter::Parameter;
use wqv_utils::dates;

/// Period folder of the date-independent trophic-state product.
pub const TROPHIC_PERIOD: &str = "2018_2024";

/// One map lookup: the clicked observation plus the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRequest {
    pub gid: u32,
    pub date: NaiveDate,
    pub parameter: Parameter,
    pub level: AggregationLevel,
}

/// Where a map product is expected to live.
///
/// Monthly-style products carry an opaque filename suffix, so their key is
/// a directory plus filename prefix and needs a listing to finish; all
/// other levels resolve to an exact relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapKey {
    Exact(String),
    Prefix { dir: String, prefix: String },
}

impl MapKey {
    /// The attempted path as shown in "map not found" messages:
    /// the exact path, or `dir/prefix*` for listing-based keys.
    pub fn display_path(&self) -> String {
        match self {
            MapKey::Exact(path) => path.clone(),
            MapKey::Prefix { dir, prefix } => format!("{}/{}*", dir, prefix),
        }
    }
}

/// Build the expected location for one request.
///
/// Dispatch is an exhaustive match over the closed level enumeration; each
/// arm is a pure template. Trophic-state levels are only produced for
/// chlorophyll-a and fail with [`WqError::MapUnavailable`] otherwise.
pub fn map_key(request: &MapRequest) -> Result<MapKey> {
    if request.level.chla_only() && request.parameter != Parameter::Chla {
        return Err(WqError::MapUnavailable {
            parameter: request.parameter.label().to_string(),
            level: request.level.label().to_string(),
        });
    }
    Ok(match request.level {
        AggregationLevel::Daily => daily(request),
        AggregationLevel::Monthly => monthly(request),
        AggregationLevel::Quarterly => quarterly(request),
        AggregationLevel::Annual => annual(request),
        AggregationLevel::Permanence90 => permanence_90(request),
        AggregationLevel::TrophicState => trophic_state(request),
        AggregationLevel::TrophicStateMonthly => trophic_state_monthly(request),
    })
}

fn daily(request: &MapRequest) -> MapKey {
    MapKey::Exact(format!(
        "{}/{}/Daily/{}_{}_Daily.png",
        request.gid,
        request.parameter.folder(),
        dates::format_compact(&request.date),
        request.parameter.tag(),
    ))
}

fn monthly(request: &MapRequest) -> MapKey {
    MapKey::Prefix {
        dir: format!("{}/{}/Monthly/Mean", request.gid, request.parameter.folder()),
        prefix: dates::month_key(&request.date),
    }
}

fn quarterly(request: &MapRequest) -> MapKey {
    MapKey::Exact(format!(
        "{}/{}/Quarterly/Mean/{}_{}Quarter_Mean.png",
        request.gid,
        request.parameter.folder(),
        request.date.year(),
        dates::quarter_of(&request.date),
    ))
}

fn annual(request: &MapRequest) -> MapKey {
    MapKey::Exact(format!(
        "{}/{}/Annual/Mean/{}_Mean.png",
        request.gid,
        request.parameter.folder(),
        request.date.year(),
    ))
}

fn permanence_90(request: &MapRequest) -> MapKey {
    MapKey::Exact(format!(
        "{}/{}/Annual/Permanence_90/{}_Permanence90.png",
        request.gid,
        request.parameter.folder(),
        request.date.year(),
    ))
}

fn trophic_state(request: &MapRequest) -> MapKey {
    // Date-independent: one product for the whole period.
    MapKey::Exact(format!(
        "{}/Chla/{}/Permanence_90/IET_{}.png",
        request.gid, TROPHIC_PERIOD, TROPHIC_PERIOD,
    ))
}

fn trophic_state_monthly(request: &MapRequest) -> MapKey {
    MapKey::Exact(format!(
        "{}/Chla/Monthly/Mean/IET/{}_IET.png",
        request.gid,
        dates::month_key(&request.date),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(level: AggregationLevel, parameter: Parameter) -> MapRequest {
        MapRequest {
            gid: 42,
            date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            parameter,
            level,
        }
    }

    #[test]
    fn test_daily_path() {
        let key = map_key(&request(AggregationLevel::Daily, Parameter::Turbidity)).unwrap();
        assert_eq!(
            key,
            MapKey::Exact("42/Turbidity/Daily/20200615_Turb_Daily.png".into())
        );
    }

    #[test]
    fn test_monthly_is_a_prefix_key() {
        let key = map_key(&request(AggregationLevel::Monthly, Parameter::Chla)).unwrap();
        assert_eq!(
            key,
            MapKey::Prefix {
                dir: "42/Chla/Monthly/Mean".into(),
                prefix: "2020_06".into(),
            }
        );
        assert_eq!(key.display_path(), "42/Chla/Monthly/Mean/2020_06*");
    }

    #[test]
    fn test_quarterly_path_uses_calendar_quarter() {
        let key = map_key(&request(AggregationLevel::Quarterly, Parameter::Chla)).unwrap();
        assert_eq!(
            key,
            MapKey::Exact("42/Chla/Quarterly/Mean/2020_2Quarter_Mean.png".into())
        );
    }

    #[test]
    fn test_annual_path() {
        let key = map_key(&request(AggregationLevel::Annual, Parameter::Turbidity)).unwrap();
        assert_eq!(
            key,
            MapKey::Exact("42/Turbidity/Annual/Mean/2020_Mean.png".into())
        );
    }

    #[test]
    fn test_permanence_path() {
        let key = map_key(&request(AggregationLevel::Permanence90, Parameter::Chla)).unwrap();
        assert_eq!(
            key,
            MapKey::Exact("42/Chla/Annual/Permanence_90/2020_Permanence90.png".into())
        );
    }

    #[test]
    fn test_trophic_state_ignores_the_date() {
        let a = request(AggregationLevel::TrophicState, Parameter::Chla);
        let b = MapRequest {
            date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            ..a
        };
        assert_eq!(map_key(&a).unwrap(), map_key(&b).unwrap());
        assert_eq!(
            map_key(&a).unwrap(),
            MapKey::Exact("42/Chla/2018_2024/Permanence_90/IET_2018_2024.png".into())
        );
    }

    #[test]
    fn test_trophic_monthly_path() {
        let key = map_key(&request(
            AggregationLevel::TrophicStateMonthly,
            Parameter::Chla,
        ))
        .unwrap();
        assert_eq!(
            key,
            MapKey::Exact("42/Chla/Monthly/Mean/IET/2020_06_IET.png".into())
        );
    }

    #[test]
    fn test_trophic_levels_unavailable_for_turbidity() {
        for level in [
            AggregationLevel::TrophicState,
            AggregationLevel::TrophicStateMonthly,
        ] {
            assert!(matches!(
                map_key(&request(level, Parameter::Turbidity)),
                Err(WqError::MapUnavailable { .. })
            ));
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for level in AggregationLevel::ALL {
            let req = request(level, Parameter::Chla);
            assert_eq!(map_key(&req).unwrap(), map_key(&req).unwrap());
        }
    }
}
