pub mod rollup;
pub mod service;
