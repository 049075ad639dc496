use std::env;

use reqwest::Url;

use crate::error::StoreError;

/// The Apps Script deployment that fronts the inventory spreadsheet.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbw5O3lfKdZnzM7SAfKzVBN67npszkwJOcWUKD-o3v7iBQE6BhJhoDC8tYzH0QOlGP7O/exec";

/// The sheet (tab) holding the asset rows.
pub const DEFAULT_SHEET: &str = "Itasset";

/// Where the inventory lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_url: String,
    pub sheet: String,
}

impl ApiConfig {
    /// Builds the configuration from environment variables, falling back to
    /// the values baked in at compile time and then to the in-code defaults.
    ///
    /// # Environment Variables
    /// - `ITASSET_API_URL`: the script endpoint, without the sheet parameter.
    /// - `ITASSET_SHEET`: the sheet name sent as the `sheet` query parameter.
    ///
    /// Browser builds have no runtime environment, so for wasm only the
    /// compile-time values apply.
    pub fn from_env() -> Self {
        Self {
            api_url: setting("ITASSET_API_URL", option_env!("ITASSET_API_URL"), DEFAULT_API_URL),
            sheet: setting("ITASSET_SHEET", option_env!("ITASSET_SHEET"), DEFAULT_SHEET),
        }
    }

    /// The full endpoint, with exactly one `sheet` query parameter.
    pub fn endpoint(&self) -> Result<Url, StoreError> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| StoreError::InvalidEndpoint(e.to_string()))?;

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "sheet")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("sheet", &self.sheet);

        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn setting(var: &str, compiled: Option<&str>, fallback: &str) -> String {
    let present = |value: &str| !value.trim().is_empty();
    env::var(var)
        .ok()
        .filter(|value| present(value))
        .or_else(|| compiled.filter(|value| present(value)).map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_sheet() {
        let config = ApiConfig {
            api_url: "https://example.test/exec".to_string(),
            sheet: "Itasset".to_string(),
        };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://example.test/exec?sheet=Itasset"
        );
    }

    #[test]
    fn endpoint_replaces_existing_sheet() {
        let config = ApiConfig {
            api_url: "https://example.test/exec?sheet=Old&v=2".to_string(),
            sheet: "Lab Kit".to_string(),
        };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://example.test/exec?v=2&sheet=Lab+Kit"
        );
    }

    #[test]
    fn malformed_url_is_rejected() {
        let config = ApiConfig {
            api_url: "not a url".to_string(),
            sheet: DEFAULT_SHEET.to_string(),
        };
        assert!(matches!(config.endpoint(), Err(StoreError::InvalidEndpoint(_))));
    }

    #[test]
    fn blank_settings_fall_back() {
        assert_eq!(setting("ITASSET_TEST_UNSET_VAR", Some("  "), "dflt"), "dflt");
        assert_eq!(setting("ITASSET_TEST_UNSET_VAR", Some("baked"), "dflt"), "baked");
        assert_eq!(setting("ITASSET_TEST_UNSET_VAR", None, "dflt"), "dflt");
    }
}
