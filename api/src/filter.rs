//! Client-side filtering of the loaded inventory.

use itertools::Itertools;

use crate::asset::Asset;

/// The search box and the two drop-downs of the asset list.
///
/// Every criterion is optional: an empty string matches everything. The
/// criteria are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    /// Case-insensitive substring, matched against [`Asset::search_fields`].
    pub search: String,
    /// Exact category.
    pub category: String,
    /// Exact status.
    pub status: String,
}

impl AssetFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.status.is_empty()
    }

    pub fn matches(&self, asset: &Asset) -> bool {
        self.matches_search(asset) && self.matches_category(asset) && self.matches_status(asset)
    }

    pub fn matches_search(&self, asset: &Asset) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        asset
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_category(&self, asset: &Asset) -> bool {
        self.category.is_empty() || asset.category == self.category
    }

    pub fn matches_status(&self, asset: &Asset) -> bool {
        self.status.is_empty() || asset.status == self.status
    }

    /// Yields the matching assets in their original order.
    pub fn apply<'a>(&'a self, assets: &'a [Asset]) -> impl Iterator<Item = &'a Asset> + 'a {
        assets.iter().filter(move |asset| self.matches(asset))
    }
}

/// Distinct, non-empty categories in sorted order, for the category drop-down.
pub fn categories(assets: &[Asset]) -> Vec<String> {
    assets
        .iter()
        .map(|asset| asset.category.as_str())
        .filter(|category| !category.is_empty())
        .unique()
        .sorted()
        .map(str::to_owned)
        .collect()
}
