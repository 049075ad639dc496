//! Defines the asset record as it is stored in the inventory sheet.

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeZone;
use serde::Deserialize;
use serde::Serialize;

use crate::cells;

/// Identifier of a sheet row. Assigned by the client as `max + 1` until the
/// server confirms it.
pub type AssetId = u64;

/// A single tracked IT asset.
///
/// Field names on the wire are the sheet's column headers, including the
/// ` *` suffix the sheet uses to mark required columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "cells::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<AssetId>,

    #[serde(rename = "Asset Name *", default, deserialize_with = "cells::text")]
    pub name: String,

    #[serde(rename = "Asset Tag", default, deserialize_with = "cells::text")]
    pub tag: String,

    #[serde(rename = "Category *", default, deserialize_with = "cells::text")]
    pub category: String,

    #[serde(rename = "Status *", default, deserialize_with = "cells::text")]
    pub status: String,

    #[serde(rename = "Manufacturer", default, deserialize_with = "cells::text")]
    pub manufacturer: String,

    #[serde(rename = "Model", default, deserialize_with = "cells::text")]
    pub model: String,

    #[serde(rename = "Serial Number", default, deserialize_with = "cells::text")]
    pub serial_number: String,

    #[serde(rename = "Location", default, deserialize_with = "cells::text")]
    pub location: String,

    #[serde(rename = "Purchase Date", default, with = "cells::date")]
    pub purchase_date: Option<DateCell>,

    #[serde(rename = "Purchase Cost", default, deserialize_with = "cells::cost")]
    pub purchase_cost: f64,

    #[serde(rename = "Warranty Expiry", default, with = "cells::date")]
    pub warranty_expiry: Option<DateCell>,

    #[serde(rename = "Assigned To", default, deserialize_with = "cells::text")]
    pub assigned_to: String,

    #[serde(rename = "Notes", default, deserialize_with = "cells::text")]
    pub notes: String,

    #[serde(rename = "Date Added", default, with = "cells::date")]
    pub date_added: Option<DateCell>,
}

impl Asset {
    /// Classifies the free-text status column.
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.status)
    }

    /// The columns covered by the free-text search box.
    pub fn search_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.tag,
            &self.manufacturer,
            &self.model,
            &self.assigned_to,
        ]
    }

    /// The date used for recency ordering. Rows without a readable one count
    /// as added `today`.
    pub fn added_on_or(&self, today: NaiveDate) -> NaiveDate {
        self.date_added
            .as_ref()
            .and_then(DateCell::date)
            .unwrap_or(today)
    }
}

/// A date column as the sheet holds it.
///
/// A cell that reads as a date is kept as one. Anything else is kept
/// verbatim, so writing the record back leaves the cell as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCell {
    Date(NaiveDate),
    Raw(String),
}

impl DateCell {
    /// `None` for a blank cell.
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Some(parse_date(input).map_or_else(|| Self::Raw(input.to_owned()), Self::Date))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Raw(_) => None,
        }
    }
}

impl From<NaiveDate> for DateCell {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for DateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(cells::DATE_FORMAT)),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

/// The statuses the inventory knows about.
///
/// The status column is open text, so anything unrecognised is `Other`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum StatusKind {
    Active,
    Maintenance,
    Retired,
    #[strum(disabled)]
    Other,
}

impl StatusKind {
    /// Exact, case-sensitive classification.
    pub fn classify(status: &str) -> Self {
        status.parse().unwrap_or(Self::Other)
    }

    /// The statuses offered in the form and the status filter.
    pub fn known() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter().filter(|kind| !matches!(kind, Self::Other))
    }
}

/// Parses a date typed into the form, or stored in a sheet cell.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp (the script sends date
/// cells as UTC instants), which is read as a calendar day in local time.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_date_in(input, &Local)
}

fn parse_date_in<Tz: TimeZone>(input: &str, zone: &Tz) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, cells::DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|stamp| stamp.with_timezone(zone).date_naive())
        })
}

/// Parses a purchase cost. Empty, negative or malformed input yields `0`.
pub fn parse_cost(input: &str) -> f64 {
    input
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite() && *cost >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use chrono::Utc;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_sheet_row_with_loose_cells() {
        let row = json!({
            "ID": "7",
            "Asset Name *": "ThinkPad X1",
            "Asset Tag": "IT-0007",
            "Category *": "Laptop",
            "Status *": "Active",
            "Model": 5510,
            "Purchase Date": "2023-04-01",
            "Purchase Cost": "1,299.50",
            "Warranty Expiry": "",
            "Date Added": "2024-01-15"
        });

        let asset: Asset = serde_json::from_value(row).unwrap();

        assert_eq!(asset.id, Some(7));
        assert_eq!(asset.name, "ThinkPad X1");
        assert_eq!(asset.model, "5510");
        assert_eq!(asset.manufacturer, "");
        assert_eq!(asset.purchase_date, Some(DateCell::Date(day(2023, 4, 1))));
        assert_eq!(asset.purchase_cost, 1299.5);
        assert_eq!(asset.warranty_expiry, None);
        assert_eq!(asset.date_added, Some(DateCell::Date(day(2024, 1, 15))));
        assert!(asset.status_kind().is_active());
    }

    #[test]
    fn unusable_id_decodes_as_absent() {
        for id in [json!(""), json!("abc"), json!(-3), json!(null), json!(2.5)] {
            let asset: Asset = serde_json::from_value(json!({ "ID": id })).unwrap();
            assert_eq!(asset.id, None, "id cell {id}");
        }
        let asset: Asset = serde_json::from_value(json!({ "ID": 4.0 })).unwrap();
        assert_eq!(asset.id, Some(4));
    }

    #[test]
    fn encodes_every_column_with_blank_dates() {
        let asset = Asset {
            id: Some(3),
            name: "Dock".to_string(),
            category: "Accessory".to_string(),
            status: "Active".to_string(),
            date_added: Some(DateCell::Date(day(2024, 2, 29))),
            ..Default::default()
        };

        let value = serde_json::to_value(&asset).unwrap();

        assert_eq!(value["ID"], json!(3));
        assert_eq!(value["Asset Name *"], json!("Dock"));
        assert_eq!(value["Purchase Date"], json!(""));
        assert_eq!(value["Purchase Cost"], json!(0.0));
        assert_eq!(value["Date Added"], json!("2024-02-29"));
        assert_eq!(value.as_object().unwrap().len(), 15);
    }

    #[test]
    fn provisional_record_omits_id() {
        let value = serde_json::to_value(Asset::default()).unwrap();
        assert!(value.get("ID").is_none());
    }

    #[test]
    fn status_classification_is_exact() {
        assert_eq!(StatusKind::classify("Maintenance"), StatusKind::Maintenance);
        assert_eq!(StatusKind::classify("retired"), StatusKind::Other);
        assert_eq!(StatusKind::classify("Other"), StatusKind::Other);
        assert_eq!(
            StatusKind::known().collect::<Vec<_>>(),
            vec![StatusKind::Active, StatusKind::Maintenance, StatusKind::Retired]
        );
    }

    #[test]
    fn unreadable_date_cells_are_written_back_verbatim() {
        let row = json!({
            "ID": 2,
            "Purchase Date": "Jan 2027",
            "Warranty Expiry": 20270101,
            "Date Added": "15/01/2024"
        });

        let asset: Asset = serde_json::from_value(row).unwrap();
        assert_eq!(asset.date_added, Some(DateCell::Raw("15/01/2024".to_string())));
        assert_eq!(asset.added_on_or(day(2024, 6, 1)), day(2024, 6, 1));

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["Purchase Date"], json!("Jan 2027"));
        assert_eq!(value["Warranty Expiry"], json!("20270101"));
        assert_eq!(value["Date Added"], json!("15/01/2024"));
    }

    #[test]
    fn timestamps_are_read_in_the_given_zone() {
        let stamp = "2024-01-14T18:30:00.000Z";
        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();

        assert_eq!(parse_date_in(stamp, &india), Some(day(2024, 1, 15)));
        assert_eq!(parse_date_in(stamp, &honolulu), Some(day(2024, 1, 14)));
        assert_eq!(parse_date_in(stamp, &Utc), Some(day(2024, 1, 14)));
        assert_eq!(parse_date_in(" 2024-03-09 ", &india), Some(day(2024, 3, 9)));
        assert_eq!(parse_date_in("2024-03-09 oops", &Utc), None);
    }

    #[test]
    fn readable_timestamp_is_written_back_as_a_day() {
        let asset: Asset =
            serde_json::from_value(json!({ "Purchase Date": "2024-01-14T12:00:00Z" })).unwrap();
        let expected = parse_date("2024-01-14T12:00:00Z").unwrap();
        assert_eq!(asset.purchase_date, Some(DateCell::Date(expected)));

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["Purchase Date"], json!(expected.format("%Y-%m-%d").to_string()));
    }

    #[test]
    fn cost_parsing_falls_back_to_zero() {
        assert_eq!(parse_cost("12.5"), 12.5);
        assert_eq!(parse_cost("$1,000"), 1000.0);
        assert_eq!(parse_cost(""), 0.0);
        assert_eq!(parse_cost("-4"), 0.0);
        assert_eq!(parse_cost("n/a"), 0.0);
    }
}
