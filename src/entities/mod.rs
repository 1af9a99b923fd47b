pub mod ticket;
pub mod user;
pub mod vehicle;
