//! # Sparkcalc CLI
//!
//! Command-line front end for `elec_core`. Runs touch/step voltage checks
//! and emergency lighting designs from a JSON file or from flags, and
//! prints a text or JSON report.
//!
//! ## Exit codes
//!
//! - `0` every calculation ran and passed
//! - `1` an input could not be read or a calculation returned an error
//! - `2` every calculation ran but at least one verdict failed

mod report;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use elec_core::calculations::electrode::{ElectrodeDimensions, ElectrodeType};
use elec_core::calculations::emergency_lighting::EmergencyLightingInput;
use elec_core::calculations::parse_items;
use elec_core::calculations::touch_step::{ContactScenario, TouchStepInput};
use elec_core::equations::generate_equations_markdown;
use elec_core::profiles::{FixtureType, OccupancyType, SoilResistivity};
use elec_core::{CalculationItem, DesignSettings};

use report::{Report, ReportEntry};

#[derive(Debug, Parser)]
#[command(name = "sparkcalc", version, about = "Electrical safety calculations: earthing touch/step voltages and emergency lighting")]
struct Cli {
    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file overriding design settings
    #[arg(long, global = true, env = "SPARKCALC_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run calculations from a JSON file ("-" reads stdin)
    Calc {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Touch and step voltage check from flags
    TouchStep(TouchStepArgs),
    /// Emergency lighting design from flags
    Lighting(LightingArgs),
    /// List soil, occupancy and fixture presets
    Presets,
    /// Print the equations reference as markdown
    Equations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct TouchStepArgs {
    #[arg(long, default_value = "")]
    label: String,

    /// Earth fault current (A)
    #[arg(long = "current")]
    earth_fault_current: f64,

    /// Soil resistivity in Ω·m or a preset name
    #[arg(long = "soil")]
    soil_resistivity: SoilResistivity,

    #[arg(long = "electrode", default_value = "rod")]
    electrode_type: ElectrodeType,

    /// Electrode length (m)
    #[arg(long)]
    length: Option<f64>,

    /// Rod diameter (m)
    #[arg(long)]
    diameter: Option<f64>,

    /// Plate or mesh area (m²)
    #[arg(long)]
    area: Option<f64>,

    /// Strip width (m)
    #[arg(long)]
    width: Option<f64>,

    /// Strip burial depth (m)
    #[arg(long)]
    depth: Option<f64>,

    /// Total mesh conductor length (m)
    #[arg(long)]
    conductor_length: Option<f64>,

    /// Fault clearance time (s)
    #[arg(long = "duration")]
    fault_duration: f64,

    #[arg(long = "scenario", default_value = "touch")]
    contact_scenario: ContactScenario,

    /// Body impedance (Ω)
    #[arg(long)]
    body_impedance: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl TouchStepArgs {
    fn to_input(&self) -> TouchStepInput {
        TouchStepInput {
            label: self.label.clone(),
            earth_fault_current: self.earth_fault_current,
            soil_resistivity: self.soil_resistivity,
            electrode_type: self.electrode_type,
            electrode_dimensions: ElectrodeDimensions {
                length: self.length,
                diameter: self.diameter,
                area: self.area,
                width: self.width,
                depth: self.depth,
                total_conductor_length: self.conductor_length,
            },
            fault_duration: self.fault_duration,
            contact_scenario: self.contact_scenario,
            body_impedance: self.body_impedance,
        }
    }
}

#[derive(Debug, Args)]
struct LightingArgs {
    #[arg(long, default_value = "")]
    label: String,

    /// Floor area (m²)
    #[arg(long = "area")]
    floor_area: f64,

    /// Ceiling height (m)
    #[arg(long = "height")]
    ceiling_height: f64,

    #[arg(long = "occupancy")]
    occupancy_type: OccupancyType,

    #[arg(long = "fixture", default_value = "led-standard")]
    fixture_type: FixtureType,

    /// Emergency duration (h)
    #[arg(long = "duration", default_value_t = 3.0)]
    emergency_duration: f64,

    #[arg(long = "exits", default_value_t = 1)]
    exit_routes: u32,

    /// Escape corridor length (m)
    #[arg(long)]
    corridor_length: Option<f64>,

    /// Escape corridor width (m)
    #[arg(long)]
    corridor_width: Option<f64>,

    #[arg(long = "stairs")]
    staircase_flights: Option<u32>,

    #[arg(long = "high-risk")]
    has_high_risk_tasks: bool,

    #[arg(long = "disabled-access")]
    has_disabled_access: bool,

    #[arg(long)]
    complex_layout: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl LightingArgs {
    fn to_input(&self) -> EmergencyLightingInput {
        EmergencyLightingInput {
            label: self.label.clone(),
            floor_area: self.floor_area,
            ceiling_height: self.ceiling_height,
            occupancy_type: self.occupancy_type,
            corridor_length: self.corridor_length,
            corridor_width: self.corridor_width,
            staircase_flights: self.staircase_flights,
            has_high_risk_tasks: self.has_high_risk_tasks,
            emergency_duration: self.emergency_duration,
            fixture_type: self.fixture_type,
            exit_routes: self.exit_routes,
            has_disabled_access: self.has_disabled_access,
            complex_layout: self.complex_layout,
        }
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
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<DesignSettings> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading settings file {}", path.display()))?;
    let settings: DesignSettings =
        toml::from_str(&text).with_context(|| format!("parsing settings file {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    info!(path = %path.display(), "loaded design settings");
    Ok(settings)
}

fn read_items(file: &Path) -> Result<Vec<CalculationItem>> {
    let json = if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?
    };
    let items = parse_items(&json).with_context(|| format!("parsing {}", file.display()))?;
    debug!(count = items.len(), "parsed calculation items");
    Ok(items)
}

fn run_items(items: &[CalculationItem], settings: &DesignSettings, format: OutputFormat) -> Result<ExitCode> {
    let report = Report::new(items.iter().map(|item| ReportEntry::run(item, settings)).collect());

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    Ok(ExitCode::from(report.exit_code()))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Command::Calc { file, format } => {
            let items = read_items(&file)?;
            run_items(&items, &settings, format)
        }
        Command::TouchStep(args) => {
            let item = CalculationItem::TouchStep(args.to_input());
            run_items(&[item], &settings, args.format)
        }
        Command::Lighting(args) => {
            let item = CalculationItem::EmergencyLighting(args.to_input());
            run_items(&[item], &settings, args.format)
        }
        Command::Presets => {
            print!("{}", report::render_presets());
            Ok(ExitCode::SUCCESS)
        }
        Command::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_touch_step_flags() {
        let cli = Cli::try_parse_from([
            "sparkcalc", "touch-step", "--current", "10", "--soil", "loam", "--duration", "0.3", "--scenario", "step",
        ])
        .unwrap();
        let Command::TouchStep(args) = cli.command else {
            panic!("expected touch-step");
        };
        let input = args.to_input();
        assert_eq!(input.electrode_type, ElectrodeType::Rod);
        assert_eq!(input.contact_scenario, ContactScenario::Step);
        assert_eq!(input.soil_resistivity.ohm_metres(), 80.0);
        assert_eq!(input.electrode_dimensions, ElectrodeDimensions::default());
    }

    #[test]
    fn test_measured_soil_flag() {
        let cli = Cli::try_parse_from([
            "sparkcalc", "touch-step", "--current", "10", "--soil", "250", "--electrode", "plate", "--area", "0.5",
            "--duration", "1",
        ])
        .unwrap();
        let Command::TouchStep(args) = cli.command else {
            panic!("expected touch-step");
        };
        assert_eq!(args.to_input().soil_resistivity, SoilResistivity::Measured(250.0));
        assert_eq!(args.area, Some(0.5));
    }

    #[test]
    fn test_lighting_flags() {
        let cli = Cli::try_parse_from([
            "sparkcalc", "lighting", "--area", "400", "--height", "3", "--occupancy", "hospital", "--exits", "2",
            "--high-risk", "--format", "json",
        ])
        .unwrap();
        let Command::Lighting(args) = cli.command else {
            panic!("expected lighting");
        };
        assert_eq!(args.format, OutputFormat::Json);
        let input = args.to_input();
        assert_eq!(input.occupancy_type, OccupancyType::Hospital);
        assert_eq!(input.fixture_type, FixtureType::LedStandard);
        assert_eq!(input.emergency_duration, 3.0);
        assert!(input.has_high_risk_tasks);
    }

    #[test]
    fn test_unknown_occupancy_rejected() {
        let err = Cli::try_parse_from([
            "sparkcalc", "lighting", "--area", "400", "--height", "3", "--occupancy", "cinema",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("cinema"));
    }

    #[test]
    fn test_settings_toml() {
        let dir = std::env::temp_dir().join(format!("sparkcalc-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        fs::write(&path, "battery_voltage = 24.0\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.battery_voltage, 24.0);
        assert_eq!(settings.installation_cost_per_point, 25.0);

        fs::write(&path, "battery_voltage = 0.0\n").unwrap();
        assert!(load_settings(Some(&path)).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
