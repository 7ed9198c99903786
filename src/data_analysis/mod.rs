// src/data_analysis/mod.rs

pub mod elastic_modulus;
pub mod least_squares;
pub mod nearest;
pub mod offset_yield;
pub mod stress;
pub mod summary;

// src/data_analysis/mod.rs
