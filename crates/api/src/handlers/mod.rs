pub mod clients;
pub mod horses;
pub mod stock;
