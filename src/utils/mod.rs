pub mod fare;
pub mod password;
pub mod time;
