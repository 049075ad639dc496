//! Summary figures shown on the dashboard screen.

use std::cmp::Reverse;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::asset::Asset;
use crate::asset::StatusKind;

/// How many assets the "recently added" list shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub retired: usize,
    /// Newest first, at most [`RECENT_LIMIT`] entries.
    pub recent: Vec<Asset>,
}

impl Dashboard {
    /// Builds the summary. Assets without a date added sort as if added `today`.
    pub fn summarize(assets: &[Asset], today: NaiveDate) -> Self {
        let counts = assets.iter().counts_by(Asset::status_kind);
        let count = |kind: StatusKind| counts.get(&kind).copied().unwrap_or(0);

        let recent = assets
            .iter()
            .sorted_by_key(|asset| Reverse(asset.added_on_or(today)))
            .take(RECENT_LIMIT)
            .cloned()
            .collect();

        Self {
            total: assets.len(),
            active: count(StatusKind::Active),
            maintenance: count(StatusKind::Maintenance),
            retired: count(StatusKind::Retired),
            recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::DateCell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn added(name: &str, status: &str, on: Option<NaiveDate>) -> Asset {
        Asset {
            name: name.to_string(),
            status: status.to_string(),
            date_added: on.map(DateCell::Date),
            ..Default::default()
        }
    }

    #[test]
    fn counts_statuses_exactly() {
        let assets = vec![
            added("a", "Active", None),
            added("b", "Active", None),
            added("c", "Maintenance", None),
            added("d", "Retired", None),
            added("e", "active", None),
        ];
        let summary = Dashboard::summarize(&assets, date(2024, 6, 1));
        assert_eq!(summary.total, 5);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.retired, 1);
    }

    #[test]
    fn recent_is_newest_first() {
        let assets = vec![
            added("d2", "Active", Some(date(2024, 2, 1))),
            added("d3", "Active", Some(date(2024, 1, 1))),
            added("d1", "Active", Some(date(2024, 3, 1))),
        ];
        let summary = Dashboard::summarize(&assets, date(2024, 6, 1));
        let order: Vec<_> = summary.recent.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(order, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn recent_is_truncated() {
        let assets: Vec<_> = (1..=8)
            .map(|day| added(&format!("day{day}"), "Active", Some(date(2024, 1, day))))
            .collect();
        let summary = Dashboard::summarize(&assets, date(2024, 6, 1));
        assert_eq!(summary.recent.len(), RECENT_LIMIT);
        assert_eq!(summary.recent[0].name, "day8");
        assert_eq!(summary.recent[4].name, "day4");
    }

    #[test]
    fn undated_assets_count_as_today() {
        let assets = vec![
            added("old", "Active", Some(date(2024, 1, 1))),
            added("undated", "Active", None),
            added("future", "Active", Some(date(2024, 7, 1))),
        ];
        let summary = Dashboard::summarize(&assets, date(2024, 6, 1));
        let order: Vec<_> = summary.recent.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(order, vec!["future", "undated", "old"]);
    }

    #[test]
    fn empty_inventory() {
        assert_eq!(Dashboard::summarize(&[], date(2024, 6, 1)), Dashboard::default());
    }
}
