//! HttpParkingApi and the full `run` entry point against a local mock service.

mod common;

use std::time::Duration;

use sea_orm::{Database, EntityTrait, PaginatorTrait};
use serde_json::json;

use parking_seed::client::{HttpParkingApi, ParkingApi};
use parking_seed::config::{Config, SeedVariant};
use parking_seed::entities::{ticket, user};
use parking_seed::fixtures::{SeedFixtures, parking_lots};
use parking_seed::seed::tickets::FIXED_LEVEL;
use parking_seed::seed::{SeedOptions, Seeder};
use parking_seed::AppError;

use common::{MemoryStore, MockServiceState, spawn_parking_service};

fn service_state(spots_per_lot: usize) -> MockServiceState {
    MockServiceState {
        spots_per_lot,
        ..MockServiceState::default()
    }
}

#[tokio::test]
async fn test_validation_error_comes_back_as_response() {
    let lots = parking_lots();
    let state = MockServiceState {
        reject_address: Some(lots[1].location.address.clone()),
        ..service_state(4)
    };
    let base = spawn_parking_service(state.clone()).await;
    let api = HttpParkingApi::new(&base, Duration::from_secs(5)).unwrap();

    let created = api.create_parking_lot(&lots[0]).await.unwrap();
    let rejected = api.create_parking_lot(&lots[1]).await.unwrap();

    assert!(created.is_success());
    assert!(rejected.is_validation_error());
    assert!(rejected.body.contains("invalid parking lot"));
    assert_eq!(*state.posts.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_lot_ids_are_normalized_and_spots_numbered() {
    let state = service_state(6);
    let base = spawn_parking_service(state.clone()).await;
    let api = HttpParkingApi::new(&base, Duration::from_secs(5)).unwrap();

    for lot in parking_lots() {
        api.create_parking_lot(&lot).await.unwrap();
    }

    let lots = api.list_parking_lots().await.unwrap();
    assert_eq!(lots.len(), 3);
    assert_eq!(lots[0].id, "65a1f0c2e4b0a1b2c3d4e500");

    let spots = api.list_parking_spots(&lots[0].id).await.unwrap();
    assert_eq!(spots.len(), 6);
    assert_eq!(spots[0].ordinal, 1);
    assert_eq!(spots[5].ordinal, 6);
    assert_eq!(spots[5].level, Some(1));
    assert_eq!(spots[2].id, "65a1f0c2e4b0a1b2c3d4e500-spot-2");
}

#[tokio::test]
async fn test_spots_listed_by_id_only_still_seed() {
    let state = MockServiceState {
        bare_spots: true,
        ..service_state(3)
    };
    let base = spawn_parking_service(state).await;
    let api = HttpParkingApi::new(&base, Duration::from_secs(5)).unwrap();
    let store = MemoryStore::default();
    let fixtures = SeedFixtures::load(&Config::default()).unwrap();
    let options = SeedOptions {
        variant: SeedVariant::Fixed,
        ticket_count: 4,
        rng_seed: None,
    };

    let report = Seeder::new(&store, &api, fixtures, options).run().await.unwrap();

    assert_eq!(report.parking_spots, 3);
    assert_eq!(report.tickets, 4);
    let spots = api.list_parking_spots(&report.parking_lot_id).await.unwrap();
    assert!(spots.iter().all(|s| s.level.is_none()));
    let state = store.state.lock().unwrap();
    assert!(state.tickets.iter().all(|t| t.level == FIXED_LEVEL));
}

#[tokio::test]
async fn test_lot_with_unusable_id_is_skipped() {
    let state = MockServiceState {
        extra_listed_lots: vec![json!({"id": null}), json!({"id": "(,)"})],
        ..service_state(2)
    };
    let base = spawn_parking_service(state).await;
    let api = HttpParkingApi::new(&base, Duration::from_secs(5)).unwrap();

    for lot in parking_lots().iter().take(2) {
        api.create_parking_lot(lot).await.unwrap();
    }

    let lots = api.list_parking_lots().await.unwrap();
    let ids: Vec<&str> = lots.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["65a1f0c2e4b0a1b2c3d4e500", "65a1f0c2e4b0a1b2c3d4e501"]);
}

#[tokio::test]
async fn test_unknown_lot_is_unexpected_status() {
    let base = spawn_parking_service(service_state(2)).await;
    let api = HttpParkingApi::new(&base, Duration::from_secs(5)).unwrap();

    let err = api.list_parking_spots("missing").await.unwrap_err();

    match err {
        AppError::UnexpectedStatus { status, url, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/parking-lots/missing/parking-spots"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_http_error() {
    let api = HttpParkingApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = api.list_parking_lots().await.unwrap_err();
    assert!(matches!(err, AppError::Http(_)));
}

#[tokio::test]
async fn test_run_seeds_database_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("seed.db").display());

    let lots = parking_lots();
    let state = MockServiceState {
        reject_address: Some(lots[2].location.address.clone()),
        ..service_state(8)
    };
    let base = spawn_parking_service(state.clone()).await;

    let config = Config {
        database_url: database_url.clone(),
        api_base_url: base,
        variant: SeedVariant::Randomized,
        ticket_count: 12,
        rng_seed: Some(5),
        http_timeout_secs: 5,
        ..Config::default()
    };

    let report = parking_seed::run(&config).await.unwrap();

    assert_eq!(*state.posts.lock().unwrap(), 3);
    let statuses: Vec<u16> = report.lot_creations.iter().map(|c| c.status).collect();
    assert_eq!(statuses, vec![201, 201, 422]);
    assert_eq!(report.parking_lot_id, "65a1f0c2e4b0a1b2c3d4e500");
    assert_eq!(report.parking_spots, 8);
    assert_eq!(report.tickets, 12);

    // A second run replaces everything the first one wrote
    parking_seed::run(&config).await.unwrap();

    let db = Database::connect(&database_url).await.unwrap();
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 7);

    let tickets = ticket::Entity::find().all(&db).await.unwrap();
    assert_eq!(tickets.len(), 12);
    let users = user::Entity::find().all(&db).await.unwrap();
    for t in &tickets {
        assert!(users.iter().any(|u| u.id == t.user_id));
        assert!(t.end_timestamp > t.issue_timestamp);
        assert!(t.parking_spot_id.starts_with(&report.parking_lot_id));
    }
}
