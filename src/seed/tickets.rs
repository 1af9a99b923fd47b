use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::client::ParkingSpot;
use crate::entities::{ticket, user, vehicle};
use crate::error::{AppError, AppResult};
use crate::utils::fare::{random_fare, stepped_fare};
use crate::utils::time::{fixed_stay, random_stay};

/// Level every fixed-variant ticket is issued on.
pub const FIXED_LEVEL: i32 = 1;

/// What tickets may point at. Every list is non-empty.
#[derive(Debug)]
pub struct TicketContext<'a> {
    users: &'a [user::Model],
    vehicles: &'a [vehicle::Model],
    parking_lot_id: &'a str,
    spots: &'a [ParkingSpot],
}

impl<'a> TicketContext<'a> {
    pub fn new(
        users: &'a [user::Model],
        vehicles: &'a [vehicle::Model],
        parking_lot_id: &'a str,
        spots: &'a [ParkingSpot],
    ) -> AppResult<Self> {
        if users.is_empty() {
            return Err(AppError::EmptyResponse("no users to issue tickets to".to_string()));
        }
        if vehicles.is_empty() {
            return Err(AppError::EmptyResponse("no vehicles to issue tickets for".to_string()));
        }
        if spots.is_empty() {
            return Err(AppError::EmptyResponse(format!(
                "parking lot {} has no parking spots",
                parking_lot_id
            )));
        }

        Ok(Self {
            users,
            vehicles,
            parking_lot_id,
            spots,
        })
    }
}

/// Tickets for `(now, now + 2h)` with fares of 10, 20, 30, ...
///
/// Users, plates and spots are cycled independently of each other.
pub fn fixed_tickets(
    ctx: &TicketContext<'_>,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<ticket::Model> {
    (0..count)
        .map(|i| {
            let stay = fixed_stay(now);
            ticket::Model {
                id: Uuid::new_v4().to_string(),
                user_id: ctx.users[i % ctx.users.len()].id.clone(),
                vehicle_license_number: ctx.vehicles[i % ctx.vehicles.len()]
                    .license_plate_number
                    .clone(),
                parking_spot_id: ctx.spots[i % ctx.spots.len()].id.clone(),
                parking_lot_id: ctx.parking_lot_id.to_string(),
                issue_timestamp: stay.issue_timestamp,
                end_timestamp: stay.end_timestamp,
                amount_paid: stepped_fare(i),
                level: FIXED_LEVEL,
                spot_ordinal_number: None,
                code: format!("CODE{}", i),
            }
        })
        .collect()
}

/// Tickets spread over 2023, charged per hour at a random rate.
///
/// Each ticket goes to the owner of the vehicle it names, and takes level
/// and ordinal from the spot it was parked at. Spots listed without a level
/// fall back to [`FIXED_LEVEL`].
pub fn randomized_tickets<R: Rng + ?Sized>(
    ctx: &TicketContext<'_>,
    count: usize,
    rng: &mut R,
) -> AppResult<Vec<ticket::Model>> {
    let mut tickets = Vec::with_capacity(count);

    for i in 0..count {
        let vehicle = &ctx.vehicles[i % ctx.vehicles.len()];
        let spot = &ctx.spots[i % ctx.spots.len()];
        let stay = random_stay(&mut *rng)?;
        let id = Uuid::new_v4();

        tickets.push(ticket::Model {
            id: id.to_string(),
            user_id: vehicle.user_id.clone(),
            vehicle_license_number: vehicle.license_plate_number.clone(),
            parking_spot_id: spot.id.clone(),
            parking_lot_id: ctx.parking_lot_id.to_string(),
            issue_timestamp: stay.issue_timestamp,
            end_timestamp: stay.end_timestamp,
            amount_paid: random_fare(stay.hours, &mut *rng),
            level: spot.level.unwrap_or(FIXED_LEVEL),
            spot_ordinal_number: Some(spot.ordinal),
            code: ticket_code(&id),
        });
    }

    Ok(tickets)
}

/// First eight hex digits of the ticket id, lower-case as the backend prints them.
pub fn ticket_code(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
