use serde::{Deserialize, Serialize};

/// Request body for `POST /parking-lots`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLotDefinition {
    pub cost_of_maintenance: CostOfMaintenance,
    pub location: Location,
    /// Ordered from the ground level up.
    pub levels: Vec<Level>,
    pub tariffs: Vec<Tariff>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostOfMaintenance {
    pub electricity: f64,
    pub cleaning: f64,
    pub security: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Spot capacity of one level, per vehicle type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub cars: u32,
    pub trucks: u32,
}

/// Hourly price for stays between `min_time` and `max_time` hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub min_time: i64,
    pub max_time: i64,
    pub price_per_hour: f64,
}

/// Status and raw body of a lot creation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_validation_error(&self) -> bool {
        self.status == 422
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkingLotSummary {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkingSpot {
    pub id: String,
    /// Absent when the service does not report it.
    pub level: Option<i32>,
    /// 1-based position in the lot's spot listing.
    pub ordinal: i32,
}
