// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use error::{Result, TensileError};
pub use pipeline::{analyze_file, analyze_sample, sample_path, AnalysisReport};

// src/lib.rs
