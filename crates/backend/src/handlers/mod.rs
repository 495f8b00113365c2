pub mod a001_store;
pub mod a002_sku;
pub mod a003_calendar;
pub mod d001_weekly_metrics;
pub mod p001_planning;
