// src/plot_functions/mod.rs

pub mod plot_linear_fit;
pub mod plot_offset_yield;
pub mod plot_secant_modulus;
pub mod plot_stress_strain;

// src/plot_functions/mod.rs
