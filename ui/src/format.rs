//! Display helpers shared by the screens.

use api::Asset;
use api::DateCell;

pub fn or_na(text: &str) -> &str {
    if text.is_empty() {
        "N/A"
    } else {
        text
    }
}

/// The cell as the sheet holds it, or `N/A` when blank.
pub fn display_date(cell: Option<&DateCell>) -> String {
    cell.map(DateCell::to_string)
        .unwrap_or_else(|| "N/A".to_string())
}

/// `$1234.50`, or `N/A` for a zero cost (the sheet stores unknown costs as 0).
pub fn display_cost(cost: f64) -> String {
    if cost > 0.0 {
        format!("${cost:.2}")
    } else {
        "N/A".to_string()
    }
}

/// List key for an asset row: its id, or its position when it has none.
pub fn row_key(asset: &Asset, index: usize) -> String {
    match asset.id {
        Some(id) => format!("id-{id}"),
        None => format!("row-{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_missing_values_as_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("Rack 4"), "Rack 4");
        assert_eq!(display_date(None), "N/A");
        assert_eq!(display_cost(0.0), "N/A");
    }

    #[test]
    fn formats_cost_with_cents() {
        assert_eq!(display_cost(1299.5), "$1299.50");
        assert_eq!(
            display_date(NaiveDate::from_ymd_opt(2025, 3, 9).map(DateCell::Date).as_ref()),
            "2025-03-09"
        );
        assert_eq!(
            display_date(Some(&DateCell::Raw("Q3 2026".to_string()))),
            "Q3 2026"
        );
    }

    #[test]
    fn rows_without_id_get_distinct_keys() {
        let unnamed = Asset::default();
        let keyed = Asset {
            id: Some(0),
            ..Default::default()
        };

        assert_ne!(row_key(&unnamed, 0), row_key(&unnamed, 1));
        assert_ne!(row_key(&unnamed, 0), row_key(&keyed, 0));
        assert_eq!(row_key(&keyed, 3), row_key(&keyed, 7));
    }
}
