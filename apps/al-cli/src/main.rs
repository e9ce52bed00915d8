use std::path::{Path, PathBuf};

use al_app::{AppError, AppResult, DensityReport, DensityRequest};
use al_core::{Quantity, parse_quantity};
use al_density::{K_FACTOR_DIVISOR, ModelKind, STANDARD_AIR_DENSITY};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "al-cli")]
#[command(about = "Airlab CLI - moist air density and buoyancy corrections", long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute air density for a reading
    Density {
        /// Air temperature (e.g. 20.5, 20.5C, 293.65K, 68.9F)
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<String>,
        /// Relative humidity (e.g. 0.48 or 48%)
        #[arg(short = 'H', long)]
        humidity: Option<String>,
        /// Barometric pressure (e.g. 101325, 1013.25hPa, 760mmHg)
        #[arg(short, long)]
        pressure: Option<String>,
        /// Measured CO2 mole fraction (e.g. 0.00045, 450ppm)
        #[arg(long)]
        co2: Option<String>,
        /// Density equation: cipm-2007, approximate or simple
        #[arg(short, long)]
        model: Option<ModelKind>,
        /// Site height for the simple model (e.g. 150, 150m, 0.5km)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,
        /// Lab file supplying defaults for everything not given on the command line
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Show every intermediate of the CIPM equation
        #[arg(long)]
        breakdown: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate air density from site height alone
    Altitude {
        /// Site height (e.g. 150, 150m, 500ft)
        #[arg(long, allow_hyphen_values = true)]
        height: String,
    },
    /// Buoyancy correction factor K = 1 - rho/8000
    K {
        /// Air density (e.g. 1.19, 1.19kg/m3); the reference 1.205 kg/m3 when absent
        #[arg(long)]
        density: Option<String>,
    },
    /// Interpolate values from a lab table
    Interpolate {
        /// Path to the lab file
        #[arg(short, long)]
        config: PathBuf,
        /// Table ID
        #[arg(short, long)]
        table: String,
        /// Points to evaluate
        #[arg(required = true, allow_hyphen_values = true)]
        x: Vec<f64>,
    },
    /// Validate lab file syntax and contents
    Validate {
        /// Path to the lab YAML or JSON file
        lab_path: PathBuf,
    },
    /// List available density equations
    Models,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Density {
            temperature,
            humidity,
            pressure,
            co2,
            model,
            height,
            config,
            breakdown,
            json,
        } => {
            let inputs = DensityInputs {
                temperature,
                humidity,
                pressure,
                co2,
                model,
                height,
                breakdown,
            };
            cmd_density(config.as_deref(), inputs, json)
        }
        Commands::Altitude { height } => cmd_altitude(&height),
        Commands::K { density } => cmd_k(density.as_deref()),
        Commands::Interpolate { config, table, x } => cmd_interpolate(&config, &table, &x),
        Commands::Validate { lab_path } => cmd_validate(&lab_path),
        Commands::Models => cmd_models(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line overrides for a density request.
struct DensityInputs {
    temperature: Option<String>,
    humidity: Option<String>,
    pressure: Option<String>,
    co2: Option<String>,
    model: Option<ModelKind>,
    height: Option<String>,
    breakdown: bool,
}

fn build_request(config: Option<&Path>, inputs: DensityInputs) -> AppResult<DensityRequest> {
    let mut request = match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "taking defaults from lab file");
            DensityRequest::from_lab(&al_app::load_lab(path)?)
        }
        None => DensityRequest::default(),
    };

    if let Some(t) = inputs.temperature {
        request.reading.temperature_c = parse_quantity(&t, Quantity::Temperature)?;
    }
    if let Some(h) = inputs.humidity {
        request.reading.relative_humidity = parse_quantity(&h, Quantity::RelativeHumidity)?;
    }
    if let Some(p) = inputs.pressure {
        request.reading.pressure_pa = parse_quantity(&p, Quantity::Pressure)?;
    }
    if let Some(c) = inputs.co2 {
        request.co2_fraction = Some(parse_quantity(&c, Quantity::MoleFraction)?);
    }
    if let Some(h) = inputs.height {
        request.height_m = Some(parse_quantity(&h, Quantity::Length)?);
    }
    if let Some(model) = inputs.model {
        request.model = model;
    }
    request.breakdown = inputs.breakdown;
    Ok(request)
}

fn cmd_density(config: Option<&Path>, inputs: DensityInputs, json: bool) -> AppResult<()> {
    let request = build_request(config, inputs)?;
    let report = al_app::density_report(&request)?;

    if json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize report: {}", e)))?;
        println!("{}", text);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &DensityReport) {
    println!("Equation: {}", report.equation);
    println!("Reading:  {}", report.reading);
    println!("CO2:      {:.6} mol/mol", report.co2_fraction);
    println!("\nAir density:  {:.6} kg/m³", report.density);
    println!("Approximate:  {:.6} kg/m³", report.approximate_density);
    println!("K factor:     {:.8}", report.k_factor);

    if let Some(b) = &report.breakdown {
        println!("\nCIPM breakdown:");
        println!("  Ma   = {:.8e} kg/mol", b.molar_mass_dry_air);
        println!("  p_sv = {:.4} Pa", b.saturation_vapour_pressure);
        println!("  f    = {:.8}", b.enhancement_factor);
        println!("  x_v  = {:.8}", b.water_vapour_mole_fraction);
        println!("  Z    = {:.8}", b.compressibility_factor);
        println!("  rho  = {:.8} kg/m³", b.density);
    }
}

fn cmd_altitude(height: &str) -> AppResult<()> {
    let height_m = parse_quantity(height, Quantity::Length)?;
    let rho = al_app::altitude_density(height_m)?;
    println!("Estimated air density at {:.1} m: {:.3} kg/m³", height_m, rho);
    Ok(())
}

fn cmd_k(density: Option<&str>) -> AppResult<()> {
    let rho = match density {
        Some(text) => parse_quantity(text, Quantity::Density)?,
        None => STANDARD_AIR_DENSITY,
    };
    println!(
        "K = 1 - {:.6} / {} = {:.8}",
        rho,
        K_FACTOR_DIVISOR,
        al_density::k_factor(rho)
    );
    Ok(())
}

fn cmd_interpolate(config: &Path, table_id: &str, xs: &[f64]) -> AppResult<()> {
    let lab = al_app::load_lab(config)?;
    let values = al_app::lookup(&lab, table_id, xs)?;

    println!("Table '{}':", table_id);
    for (x, y) in values {
        println!("  {:>12} -> {}", x, y);
    }
    Ok(())
}

fn cmd_validate(lab_path: &Path) -> AppResult<()> {
    println!("Validating lab file: {}", lab_path.display());
    let lab = al_app::load_lab(lab_path)?;
    let summary = al_app::summarize(&lab);
    println!("✓ Lab file is valid");
    println!(
        "  {} (version {}, model {}, {} tables{})",
        summary.name,
        summary.version,
        summary.model,
        summary.table_ids.len(),
        if summary.has_reading { ", with reading" } else { "" }
    );
    Ok(())
}

fn cmd_models() -> AppResult<()> {
    println!("Density equations:");
    for kind in ModelKind::ALL {
        println!("  {:<12} {}", kind.name(), kind.description());
    }
    Ok(())
}
