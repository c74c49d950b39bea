mod tests_reservation;
pub mod utils;
