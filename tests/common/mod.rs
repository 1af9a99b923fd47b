#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;

use parking_seed::AppResult;
use parking_seed::client::{
    ApiResponse, ParkingApi, ParkingLotDefinition, ParkingLotSummary, ParkingSpot,
};
use parking_seed::db::{ResetSummary, SeedStore};
use parking_seed::entities::{ticket, user, vehicle};

// ============ In-memory store ============

#[derive(Default)]
pub struct MemoryState {
    pub users: Vec<user::Model>,
    pub vehicles: Vec<vehicle::Model>,
    pub tickets: Vec<ticket::Model>,
    pub resets: usize,
}

#[derive(Default)]
pub struct MemoryStore {
    pub state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// A store that already holds one stale ticket from an earlier run.
    pub fn with_stale_ticket() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().tickets.push(stale_ticket());
        store
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn reset(
        &self,
        users: &[user::Model],
        vehicles: &[vehicle::Model],
    ) -> AppResult<ResetSummary> {
        let mut state = self.state.lock().unwrap();
        let cleared = vec![
            ("ticket".to_string(), state.tickets.len() as u64),
            ("user".to_string(), state.users.len() as u64),
            ("vehicle".to_string(), state.vehicles.len() as u64),
        ];

        state.tickets.clear();
        state.users = users.to_vec();
        state.vehicles = vehicles.to_vec();
        state.resets += 1;

        Ok(ResetSummary {
            cleared,
            users: users.len() as u64,
            vehicles: vehicles.len() as u64,
        })
    }

    async fn insert_tickets(&self, tickets: &[ticket::Model]) -> AppResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.tickets.extend_from_slice(tickets);
        Ok(tickets.len() as u64)
    }
}

pub fn stale_ticket() -> ticket::Model {
    ticket::Model {
        id: "stale".to_string(),
        user_id: "000000000000000000000000".to_string(),
        vehicle_license_number: "OLD00000".to_string(),
        parking_spot_id: "old-spot".to_string(),
        parking_lot_id: "old-lot".to_string(),
        issue_timestamp: 0,
        end_timestamp: 1,
        amount_paid: 1.0,
        level: 0,
        spot_ordinal_number: None,
        code: "OLD".to_string(),
    }
}

// ============ Trait-level mock API ============

pub struct MockApi {
    pub posted: Mutex<Vec<ParkingLotDefinition>>,
    /// Status answered to the n-th POST; 201 past the end.
    pub statuses: Vec<u16>,
    pub lots: Vec<ParkingLotSummary>,
    pub spots: Vec<ParkingSpot>,
    pub spot_requests: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new(statuses: Vec<u16>, spot_count: usize) -> Self {
        Self {
            posted: Mutex::new(Vec::new()),
            statuses,
            lots: vec![
                ParkingLotSummary {
                    id: "lot-first".to_string(),
                },
                ParkingLotSummary {
                    id: "lot-second".to_string(),
                },
            ],
            spots: (0..spot_count)
                .map(|i| ParkingSpot {
                    id: format!("spot-{}", i),
                    level: Some((i / 3) as i32),
                    ordinal: i as i32 + 1,
                })
                .collect(),
            spot_requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ParkingApi for MockApi {
    async fn create_parking_lot(&self, lot: &ParkingLotDefinition) -> AppResult<ApiResponse> {
        let mut posted = self.posted.lock().unwrap();
        let status = self.statuses.get(posted.len()).copied().unwrap_or(201);
        posted.push(lot.clone());

        Ok(ApiResponse {
            status,
            body: if status == 422 {
                r#"{"detail":"levels must not be empty"}"#.to_string()
            } else {
                String::new()
            },
        })
    }

    async fn list_parking_lots(&self) -> AppResult<Vec<ParkingLotSummary>> {
        Ok(self.lots.clone())
    }

    async fn list_parking_spots(&self, parking_lot_id: &str) -> AppResult<Vec<ParkingSpot>> {
        self.spot_requests
            .lock()
            .unwrap()
            .push(parking_lot_id.to_string());
        Ok(self.spots.clone())
    }
}

// ============ HTTP mock of the parking service ============

#[derive(Clone, Default)]
pub struct MockServiceState {
    pub lots: Arc<Mutex<Vec<String>>>,
    pub posts: Arc<Mutex<usize>>,
    /// Lots at this address are answered with 422.
    pub reject_address: Option<String>,
    pub spots_per_lot: usize,
    /// Raw entries appended to the lot listing after the created lots.
    pub extra_listed_lots: Vec<Value>,
    /// Spots are listed with their id only.
    pub bare_spots: bool,
}

async fn create_lot(
    State(state): State<MockServiceState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.posts.lock().unwrap() += 1;

    let address = body["location"]["address"].as_str().unwrap_or_default();
    if state.reject_address.as_deref() == Some(address) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "invalid parking lot"})),
        );
    }

    let mut lots = state.lots.lock().unwrap();
    let id = format!("65a1f0c2e4b0a1b2c3d4e5{:02x}", lots.len());
    lots.push(id.clone());
    (StatusCode::CREATED, Json(json!(id)))
}

// Ids come back tuple-wrapped, the way the live service renders them
async fn list_lots(State(state): State<MockServiceState>) -> Json<Value> {
    let lots = state.lots.lock().unwrap();
    Json(Value::Array(
        lots.iter()
            .map(|id| json!({"id": format!("('{}',)", id), "location": {"city": "Warszawa"}}))
            .chain(state.extra_listed_lots.iter().cloned())
            .collect(),
    ))
}

async fn list_spots(
    State(state): State<MockServiceState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !state.lots.lock().unwrap().contains(&id) {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(Value::Array(
        (0..state.spots_per_lot)
            .map(|i| {
                let spot_id = format!("{}-spot-{}", id, i);
                if state.bare_spots {
                    json!({"id": spot_id})
                } else {
                    json!({"id": spot_id, "level": i / 4})
                }
            })
            .collect(),
    )))
}

/// Serve the mock on an ephemeral port and return its base URL.
pub async fn spawn_parking_service(state: MockServiceState) -> String {
    let app = Router::new()
        .route("/parking-lots", post(create_lot).get(list_lots))
        .route("/parking-lots/{id}/parking-spots", get(list_spots))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

// ============ Log capture ============

/// Collects formatted tracing output so tests can read what was logged.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's tracing events here until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
