// src/main.rs

use clap::Parser;
use log::info;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tensile_csv_render::constants::{DEFAULT_DATA_ROOT, DEFAULT_MATERIAL, DEFAULT_SAMPLE};
use tensile_csv_render::pipeline::{analyze_file, analyze_sample, AnalysisReport};
use tensile_csv_render::plot_functions::plot_linear_fit::plot_linear_fit;
use tensile_csv_render::plot_functions::plot_offset_yield::plot_offset_yield;
use tensile_csv_render::plot_functions::plot_secant_modulus::plot_secant_modulus;
use tensile_csv_render::plot_functions::plot_stress_strain::plot_stress_strain;

/// Tensile test analyzer: stress, UTS, fracture strain, elastic modulus and 0.2% offset yield
#[derive(Parser)]
#[command(name = "tensile_csv_render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding one folder per material
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_ROOT)]
    data_root: PathBuf,

    /// Material folder within the data root
    #[arg(short, long, default_value = DEFAULT_MATERIAL)]
    material: String,

    /// Sample name (file stem of `<data-root>/<material>/<sample>.csv`)
    #[arg(short, long, default_value = DEFAULT_SAMPLE)]
    sample: String,

    /// Analyze this CSV file directly instead of looking it up in the data root
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory for the generated PNG plots
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Skip plot generation
    #[arg(long)]
    no_plots: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn print_summary(report: &AnalysisReport) {
    println!("\n--- Results for Sample {} ---", report.sample_name);
    println!("Ultimate Tensile Stress is {:.2} MPa", report.ultimate_tensile_stress_mpa);
    println!("Fracture Strain is {:.3} percent", report.fracture_strain_percent());
    println!("Elastic Modulus is {:.2} GPa", report.elastic_modulus_gpa());
    println!("The 0.2% Offset Yield is {:.2} MPa", report.yield_stress_mpa);
}

fn generate_plots(report: &AnalysisReport, cli: &Cli) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&cli.output_dir)?;
    println!("\n--- Generating Plots ---");
    plot_stress_strain(report, &cli.output_dir)?;
    plot_secant_modulus(report, &cli.output_dir)?;
    plot_linear_fit(report, &cli.output_dir)?;
    plot_offset_yield(report, &cli.output_dir)?;
    println!("  Plots saved to '{}'.", cli.output_dir.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let report = match &cli.input {
        Some(path) => {
            let sample_name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| cli.sample.clone());
            analyze_file(path, &sample_name)?
        }
        None => analyze_sample(&cli.data_root, &cli.material, &cli.sample)?,
    };
    info!("Read {} samples from '{}'", report.sample.len(), report.source.display());

    print_summary(&report);

    if !cli.no_plots {
        generate_plots(&report, cli)?;
    }

    println!("Done!");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// src/main.rs
