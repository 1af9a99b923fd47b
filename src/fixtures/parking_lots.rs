use crate::client::{CostOfMaintenance, Level, Location, ParkingLotDefinition, Tariff};

fn levels(capacities: &[(u32, u32)]) -> Vec<Level> {
    capacities
        .iter()
        .map(|&(cars, trucks)| Level { cars, trucks })
        .collect()
}

fn tariffs(bands: &[(i64, i64, f64)]) -> Vec<Tariff> {
    bands
        .iter()
        .map(|&(min_time, max_time, price_per_hour)| Tariff {
            min_time,
            max_time,
            price_per_hour,
        })
        .collect()
}

/// Three Warsaw lots; the first one is the lot tickets get issued for.
pub fn parking_lots() -> Vec<ParkingLotDefinition> {
    vec![
        ParkingLotDefinition {
            cost_of_maintenance: CostOfMaintenance {
                electricity: 400.0,
                cleaning: 500.0,
                security: 1000.0,
            },
            location: Location {
                city: "Warszawa".to_string(),
                address: "Al. Jerozolimskie 54, 00-024 Warszawa".to_string(),
                latitude: 52.228668,
                longitude: 21.003550,
            },
            levels: levels(&[(10, 5), (10, 5), (10, 5), (10, 5)]),
            tariffs: tariffs(&[(1, 8, 5.0), (9, 100, 4.0)]),
        },
        ParkingLotDefinition {
            cost_of_maintenance: CostOfMaintenance {
                electricity: 400.0,
                cleaning: 600.0,
                security: 1300.0,
            },
            location: Location {
                city: "Warszawa".to_string(),
                address: "ul. Hoża 84, 00-682 Warszawa".to_string(),
                latitude: 52.226170,
                longitude: 21.013750,
            },
            levels: levels(&[(15, 5), (10, 5), (5, 2)]),
            tariffs: tariffs(&[(1, 5, 4.0), (6, 100, 3.0)]),
        },
        ParkingLotDefinition {
            cost_of_maintenance: CostOfMaintenance {
                electricity: 500.0,
                cleaning: 700.0,
                security: 1500.0,
            },
            location: Location {
                city: "Warszawa".to_string(),
                address: "ul. Furmańska 14, 00-313 Warszawa".to_string(),
                latitude: 52.244260,
                longitude: 21.019190,
            },
            levels: levels(&[(7, 3), (7, 3)]),
            tariffs: tariffs(&[(1, 100, 8.0)]),
        },
    ]
}
