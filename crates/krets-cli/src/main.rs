//! krets command-line interface.
//!
//! `krets ladder <N>` writes an N-resistor ladder netlist and
//! `krets diode` prints the small-signal conductance of an ideal diode.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use krets_core::units::{format_value, parse_value};
use krets_devices::{DiodeParams, diode_current, small_signal_conductance};
use krets_netlist::{LadderSpec, Netlist, write_resistor_ladder};

#[derive(Parser)]
#[command(name = "krets")]
#[command(about = "Circuit netlist and device equation utilities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (logs to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a resistor ladder netlist
    Ladder(LadderArgs),
    /// Compute diode small-signal conductance
    Diode(DiodeArgs),
}

#[derive(Args)]
struct LadderArgs {
    /// Number of resistors in the ladder
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        required_unless_present = "check"
    )]
    size: Option<i64>,

    /// Directory that collects generated circuits
    #[arg(long, default_value = "circuits")]
    root: PathBuf,

    /// Resistor value (SI suffixes allowed, e.g. 1k)
    #[arg(long, default_value = "1000", value_parser = parse_si)]
    resistance: f64,

    /// Source voltage
    #[arg(long, default_value = "1", value_parser = parse_si, allow_negative_numbers = true)]
    voltage: f64,

    /// Check that an existing netlist is a well-formed ladder instead of generating one
    #[arg(long, value_name = "FILE", conflicts_with = "size")]
    check: Option<PathBuf>,
}

#[derive(Args)]
struct DiodeArgs {
    /// Saturation current in amperes
    #[arg(long = "is", value_name = "AMPS", value_parser = parse_si)]
    saturation_current: Option<f64>,

    /// Diode voltage in volts
    #[arg(long = "vd", value_name = "VOLTS", value_parser = parse_si, allow_negative_numbers = true)]
    diode_voltage: Option<f64>,

    /// Temperature in Kelvin
    #[arg(long = "temp", value_name = "KELVIN", value_parser = parse_si)]
    temperature: Option<f64>,

    /// JSON file with diode parameters; flags take precedence
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,
}

fn parse_si(s: &str) -> std::result::Result<f64, String> {
    parse_value(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Ladder(args) => run_ladder(args, &mut out),
        Command::Diode(args) => run_diode(args, &mut out),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_ladder(args: &LadderArgs, out: &mut impl Write) -> Result<()> {
    if let Some(ref file) = args.check {
        return check_ladder(file, out);
    }

    let Some(size) = args.size else {
        bail!("a ladder size is required");
    };
    let spec = LadderSpec::new(size)
        .with_resistance(args.resistance)
        .with_source_voltage(args.voltage);

    let path = write_resistor_ladder(&args.root, &spec)
        .with_context(|| format!("Failed to write {}-resistor ladder", size))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn check_ladder(file: &Path, out: &mut impl Write) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read netlist: {}", file.display()))?;
    let netlist = Netlist::parse(&content)
        .with_context(|| format!("Failed to parse netlist: {}", file.display()))?;

    if !netlist.is_ladder() {
        bail!("{} is not a resistor ladder", file.display());
    }
    writeln!(
        out,
        "{}: ladder of {} resistors",
        file.display(),
        netlist.num_resistors()
    )?;
    Ok(())
}

fn load_diode_params(args: &DiodeArgs) -> Result<DiodeParams> {
    let mut params = match args.params {
        Some(ref path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read diode parameters: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid diode parameters: {}", path.display()))?
        }
        None => DiodeParams::default(),
    };

    if let Some(is) = args.saturation_current {
        params.saturation_current = is;
    }
    if let Some(vd) = args.diode_voltage {
        params.diode_voltage = vd;
    }
    if let Some(temp) = args.temperature {
        params.temperature = temp;
    }

    params.validate()?;
    Ok(params)
}

fn run_diode(args: &DiodeArgs, out: &mut impl Write) -> Result<()> {
    let params = load_diode_params(args)?;
    let g = small_signal_conductance(&params);

    log::info!(
        "Is = {}A, Vd = {}V, T = {} K, Vt = {}V",
        format_value(params.saturation_current),
        format_value(params.diode_voltage),
        params.temperature,
        format_value(params.thermal_voltage())
    );
    log::info!(
        "Id = {}A, gd = {}S",
        format_value(diode_current(&params)),
        format_value(g)
    );

    writeln!(out, "{:e}", g)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ladder_defaults() {
        let cli = parse(&["krets", "ladder", "500"]);
        let Command::Ladder(args) = cli.command else {
            panic!("expected ladder command");
        };
        assert_eq!(args.size, Some(500));
        assert_eq!(args.root, PathBuf::from("circuits"));
        assert_eq!(args.resistance, 1000.0);
        assert_eq!(args.voltage, 1.0);
    }

    #[test]
    fn test_ladder_requires_size_or_check() {
        assert!(Cli::try_parse_from(["krets", "ladder"]).is_err());
        assert!(Cli::try_parse_from(["krets", "ladder", "3", "--check", "x.cir"]).is_err());
    }

    #[test]
    fn test_run_ladder_writes_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse(&["krets", "ladder", "2", "--root", root, "--resistance", "1k"]);
        let Command::Ladder(args) = cli.command else {
            panic!("expected ladder command");
        };

        let mut buf = Vec::new();
        run_ladder(&args, &mut buf).unwrap();

        let path = PathBuf::from(output(buf).trim());
        assert_eq!(
            path,
            dir.path()
                .join("resistor_ladder_2")
                .join("resistor_ladder_2.cir")
        );
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "% N-sized resistor ladder\nV1 1 0 1\nR1 1 2 1000\nR2 2 0 1000"
        );
    }

    #[test]
    fn test_run_ladder_rejects_negative_size() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse(&["krets", "ladder", "-4", "--root", root]);
        let Command::Ladder(args) = cli.command else {
            panic!("expected ladder command");
        };

        let mut buf = Vec::new();
        assert!(run_ladder(&args, &mut buf).is_err());
        assert!(buf.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_check_ladder() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.cir");
        fs::write(&good, "% N-sized resistor ladder\nV1 1 0 1\nR1 1 0 1000").unwrap();
        let bad = dir.path().join("bad.cir");
        fs::write(&bad, "% loop\nV1 1 0 1\nR1 1 2 1000").unwrap();

        let mut buf = Vec::new();
        check_ladder(&good, &mut buf).unwrap();
        assert!(output(buf).ends_with("ladder of 1 resistors\n"));

        let mut buf = Vec::new();
        assert!(check_ladder(&bad, &mut buf).is_err());
    }

    #[test]
    fn test_run_diode_default() {
        let cli = parse(&["krets", "diode"]);
        let Command::Diode(args) = cli.command else {
            panic!("expected diode command");
        };

        let mut buf = Vec::new();
        run_diode(&args, &mut buf).unwrap();

        let printed: f64 = output(buf).trim().parse().unwrap();
        assert_eq!(printed, small_signal_conductance(&DiodeParams::default()));
    }

    #[test]
    fn test_diode_flags_override_params_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("diode.json");
        fs::write(&file, r#"{ "saturation_current": 2e-12, "diode_voltage": 0.3 }"#).unwrap();

        let cli = parse(&[
            "krets",
            "diode",
            "--params",
            file.to_str().unwrap(),
            "--vd",
            "-0.1",
        ]);
        let Command::Diode(args) = cli.command else {
            panic!("expected diode command");
        };

        let params = load_diode_params(&args).unwrap();
        assert_eq!(params.saturation_current, 2e-12);
        assert_eq!(params.diode_voltage, -0.1);
        assert_eq!(params.temperature, 300.0);
    }

    #[test]
    fn test_diode_rejects_bad_temperature() {
        let cli = parse(&["krets", "diode", "--temp", "0"]);
        let Command::Diode(args) = cli.command else {
            panic!("expected diode command");
        };
        assert!(load_diode_params(&args).is_err());
    }
}
