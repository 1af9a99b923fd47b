//! Hardcoded seed data.
//!
//! Users and vehicles carry pre-chosen 24-hex identifiers so tickets and
//! manual test sessions can refer to them across runs.

mod parking_lots;

use crate::config::{Config, SeedVariant};
use crate::entities::user::{self, UserRole};
use crate::entities::vehicle;
use crate::error::AppResult;
use crate::utils::password::hash_password;

pub use parking_lots::parking_lots;

/// Vehicle categories known to the parking service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    /// Enumerated form stored by the fixed variant.
    pub fn code(self) -> u8 {
        match self {
            Self::Car => 1,
            Self::Truck => 2,
        }
    }

    /// Free-text form stored by the randomized variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
        }
    }
}

/// Everything a run writes before it talks to the parking API.
#[derive(Clone, Debug)]
pub struct SeedFixtures {
    pub users: Vec<user::Model>,
    pub vehicles: Vec<vehicle::Model>,
    pub parking_lots: Vec<crate::client::ParkingLotDefinition>,
}

impl SeedFixtures {
    pub fn load(config: &Config) -> AppResult<Self> {
        let (users, vehicles) = match config.variant {
            SeedVariant::Fixed => (fixed_users(), vehicles(SeedVariant::Fixed)),
            SeedVariant::Randomized => (
                randomized_users(&config.user_password)?,
                vehicles(SeedVariant::Randomized),
            ),
        };

        Ok(Self {
            users,
            vehicles,
            parking_lots: parking_lots(),
        })
    }
}

struct Person {
    id: &'static str,
    name: &'static str,
    surname: &'static str,
    balance: f64,
    blocked: bool,
    email: &'static str,
    role: UserRole,
}

const PEOPLE: [Person; 7] = [
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9d9b",
        name: "Krzysztof",
        surname: "Admin",
        balance: 0.0,
        blocked: false,
        email: "admin@parking-os.pl",
        role: UserRole::Admin,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9d9c",
        name: "Jan",
        surname: "Kowalski",
        balance: 1000.0,
        blocked: false,
        email: "jan.kowalski@parking-os.pl",
        role: UserRole::User,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9d9d",
        name: "Adam",
        surname: "Nowak",
        balance: 2000.0,
        blocked: false,
        email: "adam.nowak@parking-os.pl",
        role: UserRole::User,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9d9e",
        name: "Anna",
        surname: "Kowalska",
        balance: 3000.0,
        blocked: false,
        email: "anna.kowalska@parking-os.pl",
        role: UserRole::User,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9d9f",
        name: "Jan",
        surname: "Nowak",
        balance: 4000.0,
        blocked: false,
        email: "jan.nowak@parking-os.pl",
        role: UserRole::User,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9da0",
        name: "Maria",
        surname: "Wiśniewska",
        balance: 500.0,
        blocked: false,
        email: "maria.wisniewska@parking-os.pl",
        role: UserRole::User,
    },
    Person {
        id: "5f9b3b9b9d9b9d9b9d9b9da1",
        name: "Piotr",
        surname: "Wójcik",
        balance: 0.0,
        blocked: true,
        email: "piotr.wojcik@parking-os.pl",
        role: UserRole::User,
    },
];

/// The fixed variant only knows the first five people, without credentials.
const FIXED_USER_COUNT: usize = 5;

pub fn fixed_users() -> Vec<user::Model> {
    PEOPLE[..FIXED_USER_COUNT]
        .iter()
        .map(|p| user::Model {
            id: p.id.to_string(),
            name: p.name.to_string(),
            surname: p.surname.to_string(),
            account_balance: p.balance,
            blocked: p.blocked,
            email: None,
            password_hash: None,
            role: None,
        })
        .collect()
}

/// All seven people, sharing one salted hash of `password`.
pub fn randomized_users(password: &str) -> AppResult<Vec<user::Model>> {
    let password_hash = hash_password(password)?;

    Ok(PEOPLE
        .iter()
        .map(|p| user::Model {
            id: p.id.to_string(),
            name: p.name.to_string(),
            surname: p.surname.to_string(),
            account_balance: p.balance,
            blocked: p.blocked,
            email: Some(p.email.to_string()),
            password_hash: Some(password_hash.clone()),
            role: Some(p.role.clone()),
        })
        .collect())
}

struct Car {
    id: &'static str,
    owner: &'static str,
    kind: VehicleKind,
    brand: &'static str,
    model: &'static str,
    plate: &'static str,
}

const FIXED_CARS: [Car; 5] = [
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d90",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9c",
        kind: VehicleKind::Car,
        brand: "BMW",
        model: "X5",
        plate: "WAW12345",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d91",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9c",
        kind: VehicleKind::Car,
        brand: "Mercedes",
        model: "Actros",
        plate: "WAW54321",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d92",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9d",
        kind: VehicleKind::Car,
        brand: "Audi",
        model: "A6",
        plate: "WAW67890",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d93",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9e",
        kind: VehicleKind::Car,
        brand: "BMW",
        model: "X5",
        plate: "WAW12345",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d94",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9f",
        kind: VehicleKind::Car,
        brand: "Audi",
        model: "A6",
        plate: "WAW67890",
    },
];

const RANDOMIZED_CARS: [Car; 7] = [
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d90",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9c",
        kind: VehicleKind::Car,
        brand: "BMW",
        model: "X5",
        plate: "WAW12345",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d91",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9c",
        kind: VehicleKind::Truck,
        brand: "Mercedes",
        model: "Actros",
        plate: "WAW54321",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d92",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9d",
        kind: VehicleKind::Car,
        brand: "Audi",
        model: "A6",
        plate: "WAW67890",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d93",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9e",
        kind: VehicleKind::Car,
        brand: "Toyota",
        model: "Corolla",
        plate: "WPR24680",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d94",
        owner: "5f9b3b9b9d9b9d9b9d9b9d9f",
        kind: VehicleKind::Car,
        brand: "Skoda",
        model: "Octavia",
        plate: "WOT13579",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d95",
        owner: "5f9b3b9b9d9b9d9b9d9b9da0",
        kind: VehicleKind::Truck,
        brand: "Volvo",
        model: "FH16",
        plate: "WX11223",
    },
    Car {
        id: "5f9b3b9b9d9b9d9b9d9b9d96",
        owner: "5f9b3b9b9d9b9d9b9d9b9da1",
        kind: VehicleKind::Car,
        brand: "Fiat",
        model: "500",
        plate: "WB98765",
    },
];

pub fn vehicles(variant: SeedVariant) -> Vec<vehicle::Model> {
    let cars: &[Car] = match variant {
        SeedVariant::Fixed => &FIXED_CARS,
        SeedVariant::Randomized => &RANDOMIZED_CARS,
    };

    cars.iter()
        .map(|c| vehicle::Model {
            id: c.id.to_string(),
            user_id: c.owner.to_string(),
            vehicle_type: match variant {
                SeedVariant::Fixed => c.kind.code().to_string(),
                SeedVariant::Randomized => c.kind.label().to_string(),
            },
            brand: c.brand.to_string(),
            model: c.model.to_string(),
            license_plate_number: c.plate.to_string(),
        })
        .collect()
}
