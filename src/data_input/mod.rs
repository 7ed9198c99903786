// src/data_input/mod.rs

pub mod tensile_data;
pub mod tensile_parser;

// src/data_input/mod.rs
