pub mod exhaust;
pub mod flight;
