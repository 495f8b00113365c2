pub mod d001_weekly_metrics;
