pub mod tickets;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::client::{ParkingApi, ParkingSpot};
use crate::config::{Config, SeedVariant};
use crate::db::{ResetSummary, SeedStore};
use crate::error::{AppError, AppResult};
use crate::fixtures::SeedFixtures;

use tickets::{TicketContext, fixed_tickets, randomized_tickets};

#[derive(Clone, Copy, Debug)]
pub struct SeedOptions {
    pub variant: SeedVariant,
    pub ticket_count: usize,
    /// Fixed seed for reproducible randomized tickets.
    pub rng_seed: Option<u64>,
}

impl From<&Config> for SeedOptions {
    fn from(config: &Config) -> Self {
        Self {
            variant: config.variant,
            ticket_count: config.ticket_count,
            rng_seed: config.rng_seed,
        }
    }
}

/// Outcome of one lot creation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LotCreation {
    pub city: String,
    pub address: String,
    pub status: u16,
}

#[derive(Clone, Debug)]
pub struct SeedReport {
    pub reset: ResetSummary,
    pub lot_creations: Vec<LotCreation>,
    pub parking_lot_id: String,
    pub parking_spots: usize,
    pub tickets: u64,
}

pub struct Seeder<'a> {
    store: &'a dyn SeedStore,
    api: &'a dyn ParkingApi,
    fixtures: SeedFixtures,
    options: SeedOptions,
}

impl<'a> Seeder<'a> {
    pub fn new(
        store: &'a dyn SeedStore,
        api: &'a dyn ParkingApi,
        fixtures: SeedFixtures,
        options: SeedOptions,
    ) -> Self {
        Self {
            store,
            api,
            fixtures,
            options,
        }
    }

    pub async fn run(&self) -> AppResult<SeedReport> {
        tracing::info!(variant = %self.options.variant, "Seeding started");

        let reset = self
            .store
            .reset(&self.fixtures.users, &self.fixtures.vehicles)
            .await?;
        tracing::info!(
            collections = reset.cleared.len(),
            users = reset.users,
            vehicles = reset.vehicles,
            "Database reset"
        );

        let lot_creations = self.create_parking_lots().await?;

        let lots = self.api.list_parking_lots().await?;
        tracing::info!(count = lots.len(), "Fetched parking lots");
        let parking_lot_id = lots
            .first()
            .map(|lot| lot.id.clone())
            .ok_or_else(|| AppError::EmptyResponse("no parking lots returned".to_string()))?;

        let spots = self.api.list_parking_spots(&parking_lot_id).await?;
        tracing::info!(
            parking_lot_id = %parking_lot_id,
            count = spots.len(),
            "Fetched parking spots"
        );

        let tickets = self.build_tickets(&parking_lot_id, &spots)?;
        let inserted = self.store.insert_tickets(&tickets).await?;
        tracing::info!(tickets = inserted, "Seeding complete");

        Ok(SeedReport {
            reset,
            lot_creations,
            parking_lot_id,
            parking_spots: spots.len(),
            tickets: inserted,
        })
    }

    /// POST every lot definition. A 422 is logged with its body; other
    /// statuses are logged and the run goes on.
    async fn create_parking_lots(&self) -> AppResult<Vec<LotCreation>> {
        let mut creations = Vec::with_capacity(self.fixtures.parking_lots.len());

        for lot in &self.fixtures.parking_lots {
            let response = self.api.create_parking_lot(lot).await?;

            if response.is_validation_error() {
                tracing::error!(
                    address = %lot.location.address,
                    body = %response.body,
                    "Parking lot rejected with 422"
                );
            } else if response.is_success() {
                tracing::info!(
                    address = %lot.location.address,
                    status = response.status,
                    "Parking lot created"
                );
            } else {
                tracing::warn!(
                    address = %lot.location.address,
                    status = response.status,
                    "Parking lot creation returned unexpected status"
                );
            }

            creations.push(LotCreation {
                city: lot.location.city.clone(),
                address: lot.location.address.clone(),
                status: response.status,
            });
        }

        Ok(creations)
    }

    fn build_tickets(
        &self,
        parking_lot_id: &str,
        spots: &[ParkingSpot],
    ) -> AppResult<Vec<crate::entities::ticket::Model>> {
        if self.options.ticket_count == 0 {
            return Ok(Vec::new());
        }

        let ctx = TicketContext::new(
            &self.fixtures.users,
            &self.fixtures.vehicles,
            parking_lot_id,
            spots,
        )?;

        match self.options.variant {
            SeedVariant::Fixed => Ok(fixed_tickets(&ctx, self.options.ticket_count, Utc::now())),
            SeedVariant::Randomized => {
                let mut rng = match self.options.rng_seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                randomized_tickets(&ctx, self.options.ticket_count, &mut rng)
            }
        }
    }
}
