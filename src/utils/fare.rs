use rand::Rng;

/// Bounds of the hourly rate drawn for randomized tickets.
pub const MIN_HOURLY_RATE: f64 = 5.0;
pub const MAX_HOURLY_RATE: f64 = 7.0;

/// `hours × U[5, 7]`, rounded to the nearest unit.
pub fn random_fare<R: Rng + ?Sized>(hours: i64, rng: &mut R) -> f64 {
    let rate = rng.gen_range(MIN_HOURLY_RATE..=MAX_HOURLY_RATE);
    (hours.max(0) as f64 * rate).round()
}

/// Fare of the `index`-th ticket in a fixed batch: 10, 20, 30, ...
pub fn stepped_fare(index: usize) -> f64 {
    10.0 * (index + 1) as f64
}
