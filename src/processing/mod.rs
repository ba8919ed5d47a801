pub mod conversion;
pub mod statistics;
