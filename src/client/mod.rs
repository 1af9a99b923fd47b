pub mod model;

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub use model::{
    ApiResponse, CostOfMaintenance, Level, Location, ParkingLotDefinition, ParkingLotSummary,
    ParkingSpot, Tariff,
};

pub const PARKING_LOTS_ENDPOINT: &str = "/parking-lots";
pub const PARKING_SPOTS_ENDPOINT: &str = "/parking-spots";

/// The remote parking service, as far as seeding needs it.
#[async_trait]
pub trait ParkingApi: Send + Sync {
    /// POST one lot definition. Non-2xx statuses are returned, not raised.
    async fn create_parking_lot(&self, lot: &ParkingLotDefinition) -> AppResult<ApiResponse>;

    async fn list_parking_lots(&self) -> AppResult<Vec<ParkingLotSummary>>;

    async fn list_parking_spots(&self, parking_lot_id: &str) -> AppResult<Vec<ParkingSpot>>;
}

#[derive(Debug, Deserialize)]
struct RawParkingLot {
    id: Value,
}

#[derive(Debug, Deserialize)]
struct RawParkingSpot {
    id: Value,
    #[serde(default, alias = "noLevel", alias = "no_level")]
    level: Option<i32>,
    #[serde(default)]
    location: Option<RawSpotLocation>,
}

#[derive(Debug, Deserialize)]
struct RawSpotLocation {
    #[serde(default, alias = "noLevel")]
    no_level: Option<i32>,
}

impl RawParkingSpot {
    /// Top-level `level` wins over the backend's nested `location.no_level`.
    fn level(&self) -> Option<i32> {
        self.level.or_else(|| self.location.as_ref().and_then(|l| l.no_level))
    }
}

/// reqwest-backed client for the parking API.
pub struct HttpParkingApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpParkingApi {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn parking_lots_url(&self) -> String {
        format!("{}{}", self.base_url, PARKING_LOTS_ENDPOINT)
    }

    fn parking_spots_url(&self, parking_lot_id: &str) -> String {
        format!(
            "{}{}/{}{}",
            self.base_url, PARKING_LOTS_ENDPOINT, parking_lot_id, PARKING_SPOTS_ENDPOINT
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UnexpectedStatus {
                status,
                url: url.to_string(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ParkingApi for HttpParkingApi {
    async fn create_parking_lot(&self, lot: &ParkingLotDefinition) -> AppResult<ApiResponse> {
        let url = self.parking_lots_url();
        tracing::debug!(url = %url, city = %lot.location.city, "POST");

        let response = self.client.post(&url).json(lot).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }

    async fn list_parking_lots(&self) -> AppResult<Vec<ParkingLotSummary>> {
        let raw: Vec<RawParkingLot> = self.get_json(&self.parking_lots_url()).await?;

        // Only the first lot is ever used, so one bad id must not sink the listing
        let lots = raw
            .iter()
            .filter_map(|lot| match normalize_id(&lot.id) {
                Ok(id) => Some(ParkingLotSummary { id }),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping parking lot with unusable id");
                    None
                }
            })
            .collect();

        Ok(lots)
    }

    async fn list_parking_spots(&self, parking_lot_id: &str) -> AppResult<Vec<ParkingSpot>> {
        let url = self.parking_spots_url(parking_lot_id);
        let raw: Vec<RawParkingSpot> = self.get_json(&url).await?;

        raw.iter()
            .enumerate()
            .map(|(idx, spot)| {
                Ok(ParkingSpot {
                    id: normalize_id(&spot.id)?,
                    level: spot.level(),
                    ordinal: idx as i32 + 1,
                })
            })
            .collect()
    }
}

/// Reduce an identifier field to a plain token.
///
/// The service has been seen returning ids as plain strings, as stringified
/// tuples such as `"('65a1...',)"`, as one-element arrays and as extended
/// JSON `{"$oid": "..."}` objects. All of them collapse to the bare value.
pub fn normalize_id(value: &Value) -> AppResult<String> {
    let token = match value {
        Value::String(s) => strip_wrapping(s),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => match items.first() {
            Some(first) => return normalize_id(first),
            None => String::new(),
        },
        Value::Object(map) => match map.get("$oid") {
            Some(oid) => return normalize_id(oid),
            None => String::new(),
        },
        Value::Null | Value::Bool(_) => String::new(),
    };

    if token.is_empty() {
        return Err(AppError::InvalidResponse(format!(
            "unusable identifier: {}",
            value
        )));
    }

    Ok(token)
}

fn strip_wrapping(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '(' | ')' | '\'' | '"' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}
