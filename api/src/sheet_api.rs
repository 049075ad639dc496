//! Defines the transport seam of the store and its spreadsheet implementation.

use reqwest::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::asset::Asset;
use crate::asset::AssetId;
use crate::error::StoreError;

/// A trait for any service that holds the authoritative asset collection.
pub trait AssetBackend {
    /// Fetches every record.
    async fn fetch_records(&self) -> Result<Vec<Asset>, StoreError>;

    /// Sends one create/update/delete and returns the script's verdict.
    async fn submit(&self, mutation: &Mutation) -> Result<MutationResponse, StoreError>;
}

/// A write request, in the shape the sheet script dispatches on.
///
/// A create is the bare record; updates and deletes are wrapped in an
/// `{ "action": .., "data": .. }` envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mutation {
    Create(Asset),
    Action(Action),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "data", rename_all = "lowercase")]
pub enum Action {
    Update(Asset),
    Delete(AssetKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetKey {
    #[serde(rename = "ID")]
    pub id: AssetId,
}

impl Mutation {
    pub fn update(asset: Asset) -> Self {
        Self::Action(Action::Update(asset))
    }

    pub fn delete(id: AssetId) -> Self {
        Self::Action(Action::Delete(AssetKey { id }))
    }
}

/// Body of a successful read.
#[derive(Deserialize, Debug, Default)]
pub struct RecordsResponse {
    #[serde(default)]
    records: Option<Vec<Asset>>,
}

impl RecordsResponse {
    pub fn into_records(self) -> Vec<Asset> {
        self.records.unwrap_or_default()
    }
}

/// Body of every write.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(error: Option<&str>) -> Self {
        Self {
            success: false,
            error: error.map(str::to_owned),
        }
    }

    /// `success: false` becomes [`StoreError::Rejected`].
    pub fn into_result(self) -> Result<(), StoreError> {
        if self.success {
            Ok(())
        } else {
            Err(StoreError::Rejected(self.error))
        }
    }
}

/// The Google Sheets script endpoint.
#[derive(Clone, Debug)]
pub struct SheetApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl SheetApi {
    /// `endpoint` must already carry the `sheet` query parameter, see
    /// [`crate::config::ApiConfig::endpoint`].
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn checked(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Http {
                status: status.as_u16(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl AssetBackend for SheetApi {
    async fn fetch_records(&self) -> Result<Vec<Asset>, StoreError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let body: RecordsResponse = Self::decode(Self::checked(response)?).await?;
        Ok(body.into_records())
    }

    async fn submit(&self, mutation: &Mutation) -> Result<MutationResponse, StoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(mutation)
            .send()
            .await?;
        Self::decode(Self::checked(response)?).await
    }
}
