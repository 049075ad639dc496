//! The editable, string-typed form state behind the add/edit screen.

use api::asset::parse_cost;
use api::Asset;
use api::DateCell;

/// What the user has typed so far. Every field is kept as the raw input
/// string and only parsed when the form is submitted.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AssetDraft {
    pub name: String,
    pub tag: String,
    pub category: String,
    pub status: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    pub purchase_date: String,
    pub purchase_cost: String,
    pub warranty_expiry: String,
    pub assigned_to: String,
    pub notes: String,
}

/// `<input type="date">` wants `YYYY-MM-DD`. A cell that is not a date
/// keeps its text, so it survives an edit that does not touch it.
fn date_input(cell: Option<&DateCell>) -> String {
    cell.map(DateCell::to_string).unwrap_or_default()
}

impl AssetDraft {
    /// Pre-fills the form for editing.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            tag: asset.tag.clone(),
            category: asset.category.clone(),
            status: asset.status.clone(),
            manufacturer: asset.manufacturer.clone(),
            model: asset.model.clone(),
            serial_number: asset.serial_number.clone(),
            location: asset.location.clone(),
            purchase_date: date_input(asset.purchase_date.as_ref()),
            purchase_cost: if asset.purchase_cost > 0.0 {
                asset.purchase_cost.to_string()
            } else {
                String::new()
            },
            warranty_expiry: date_input(asset.warranty_expiry.as_ref()),
            assigned_to: asset.assigned_to.clone(),
            notes: asset.notes.clone(),
        }
    }

    /// The fields the sheet marks as required.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Asset Name", &self.name),
            ("Category", &self.category),
            ("Status", &self.status),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Builds the record to send. Identifier and date added are left to the
    /// store.
    pub fn to_asset(&self) -> Asset {
        Asset {
            id: None,
            name: self.name.clone(),
            tag: self.tag.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            location: self.location.clone(),
            purchase_date: DateCell::parse(&self.purchase_date),
            purchase_cost: parse_cost(&self.purchase_cost),
            warranty_expiry: DateCell::parse(&self.warranty_expiry),
            assigned_to: self.assigned_to.clone(),
            notes: self.notes.clone(),
            date_added: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn editing_round_trips_the_editable_fields() {
        let asset = Asset {
            id: Some(12),
            name: "Aruba 2930F".to_string(),
            category: "Network".to_string(),
            status: "Maintenance".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 11, 30).map(DateCell::Date),
            purchase_cost: 845.0,
            notes: "Fan noisy".to_string(),
            date_added: NaiveDate::from_ymd_opt(2023, 1, 2).map(DateCell::Date),
            ..Default::default()
        };

        let draft = AssetDraft::from_asset(&asset);
        assert_eq!(draft.purchase_date, "2022-11-30");
        assert_eq!(draft.purchase_cost, "845");

        let rebuilt = draft.to_asset();
        assert_eq!(rebuilt.id, None);
        assert_eq!(rebuilt.date_added, None);
        assert_eq!(
            rebuilt,
            Asset {
                id: None,
                date_added: None,
                ..asset
            }
        );
    }

    #[test]
    fn blank_inputs_become_empty_values() {
        let draft = AssetDraft {
            name: "Printer".to_string(),
            purchase_cost: "abc".to_string(),
            purchase_date: "".to_string(),
            ..Default::default()
        };
        let asset = draft.to_asset();
        assert_eq!(asset.purchase_cost, 0.0);
        assert_eq!(asset.purchase_date, None);
        assert_eq!(draft.missing_required(), vec!["Category", "Status"]);
    }

    #[test]
    fn untouched_free_text_date_survives_an_edit() {
        let asset = Asset {
            id: Some(5),
            warranty_expiry: Some(DateCell::Raw("Jan 2027".to_string())),
            ..Default::default()
        };

        let draft = AssetDraft::from_asset(&asset);
        assert_eq!(draft.warranty_expiry, "Jan 2027");
        assert_eq!(
            draft.to_asset().warranty_expiry,
            Some(DateCell::Raw("Jan 2027".to_string()))
        );
    }
}
