pub mod aggregator;
pub mod csv_import;
pub mod repository;
pub mod service;
