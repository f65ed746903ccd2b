use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, EnvFilter};
use trading_post::generate::{generate, sample_file_name, GeneratorConfig};
use trading_post::harness::{Measurement, Outcome, VerificationStatus};
use trading_post::io::{save_matrix, InputSource};
use trading_post::solvers::{all_solvers, DynamicProgramming};
use trading_post::{CostMatrix, Harness, HarnessBuilder, RouteSolver};

/// Sizes every solver runs on.
const SMALL_SIZES: &[usize] = &[10, 15, 20, 25];
/// Sizes only the tabulated solver runs on.
const LARGE_SIZES: &[usize] = &[100, 200, 400, 600, 800];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("port_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let mut harness = HarnessBuilder::new()
        .with_verify_limit(options.verify_limit)
        .with_exhaustive_limit(options.exhaustive_limit)
        .build();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Trading Post Probe: brute force vs divide-and-conquer vs dynamic programming");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let measurements = match &options.input {
        Some(source) => match source.read_matrix() {
            Ok(matrix) => {
                eprintln!("[1/1] Solving {} ({} ports)...", source.describe(), matrix.size());
                run_cases(
                    &mut harness,
                    &options,
                    &[(source.describe(), matrix)],
                    &all_solvers(),
                )
            }
            Err(err) => {
                eprintln!("port_probe: {err}");
                std::process::exit(1);
            }
        },
        None => run_generated(&mut harness, &options),
    };

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("port_probe output error: {err}");
        std::process::exit(1);
    }
}

fn run_generated(harness: &mut Harness, options: &Options) -> Vec<Measurement> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let config = GeneratorConfig::default();
    let mut generated = |sizes: &[usize]| -> Vec<(String, CostMatrix)> {
        sizes
            .iter()
            .map(|&size| (format!("ports={size}"), generate(size, &config, &mut rng)))
            .collect()
    };
    let small = generated(SMALL_SIZES);
    let large = generated(LARGE_SIZES);

    if let Some(dir) = &options.write_samples {
        for (_, matrix) in small.iter().chain(&large) {
            let path = dir.join(sample_file_name(matrix.size()));
            if let Err(err) = save_matrix(matrix, &path) {
                eprintln!("port_probe: could not write {}: {err}", path.display());
            }
        }
    }

    let mut measurements = Vec::new();

    eprintln!("[1/2] Small inputs: every solver...");
    measurements.extend(run_cases(harness, options, &small, &all_solvers()));
    eprintln!();

    eprintln!("[2/2] Large inputs: dynamic programming only...");
    let dp_only: Vec<Box<dyn RouteSolver>> = vec![Box::new(DynamicProgramming)];
    measurements.extend(run_cases(harness, options, &large, &dp_only));
    eprintln!();

    measurements
}

fn run_cases(
    harness: &mut Harness,
    options: &Options,
    cases: &[(String, CostMatrix)],
    solvers: &[Box<dyn RouteSolver>],
) -> Vec<Measurement> {
    let total = cases.len();
    let mut out = Vec::new();
    for (idx, (case, matrix)) in cases.iter().enumerate() {
        eprintln!("      [{}/{}] {}", idx + 1, total, case);
        if options.print_table {
            eprint!("{}", DynamicProgramming.fill_table(matrix));
        }
        for m in harness.run_case(case, matrix, solvers) {
            let status_icon = match m.verification {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed { .. } => "✗",
                VerificationStatus::NotChecked => "○",
            };
            match &m.outcome {
                Outcome::Solved {
                    cost, evaluations, ..
                } => eprintln!(
                    "        {} {:<20} cost={}, evaluations={}, time={:.3}s, status={}",
                    status_icon,
                    m.solver,
                    cost,
                    evaluations,
                    m.wall_s,
                    m.verification.label()
                ),
                Outcome::Failed { error } => eprintln!(
                    "        {} {:<20} error={}, time={:.3}s, status={}",
                    status_icon,
                    m.solver,
                    error,
                    m.wall_s,
                    m.verification.label()
                ),
                Outcome::Skipped => eprintln!(
                    "        ○ {:<20} skipped (more than {} ports)",
                    m.solver,
                    harness.exhaustive_limit()
                ),
            }
            out.push(m);
        }
    }
    out
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    exhaustive_limit: usize,
    seed: u64,
    input: Option<InputSource>,
    write_samples: Option<PathBuf>,
    print_table: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            format: OutputFormat::Csv,
            verify_limit: trading_post::harness::DEFAULT_VERIFY_LIMIT,
            exhaustive_limit: trading_post::harness::DEFAULT_EXHAUSTIVE_LIMIT,
            seed: 42,
            input: None,
            write_samples: None,
            print_table: false,
        };

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => options.format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => {
                    options.verify_limit = parse_count(&value("--verify-limit")?, "verify limit")?
                }
                "--exhaustive-limit" => {
                    options.exhaustive_limit =
                        parse_count(&value("--exhaustive-limit")?, "exhaustive limit")?
                }
                "--seed" => {
                    options.seed = value("--seed")?
                        .parse::<u64>()
                        .map_err(|_| "seed must be an unsigned integer".to_string())?
                }
                "--input" => options.input = Some(InputSource::from_arg(&value("--input")?)),
                "--write-samples" => {
                    options.write_samples = Some(PathBuf::from(value("--write-samples")?))
                }
                "--print-table" => options.print_table = true,
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin port_probe [-- <options>]

Options:
  --input <path|->              Solve one matrix from a file (or '-' for stdin) instead of generated inputs
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest port count cross-checked against dynamic programming (default: 512)
  --exhaustive-limit <N>        Largest port count brute force and divide-and-conquer run on (default: 25)
  --seed <u64>                  Seed for generated matrices (default: 42)
  --write-samples <dir>         Also write generated matrices as sample_input_size<N>.txt
  --print-table                 Print the dynamic-programming cost table for each case
  -h, --help                    Print this help message

Examples:
  cargo run --bin port_probe
  cargo run --bin port_probe -- --format table --exhaustive-limit 20
  cargo run --bin port_probe -- --input sample_input_size10.txt --print-table
"
        );
    }
}

fn parse_count(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

fn outcome_cells(outcome: &Outcome) -> (String, String) {
    match outcome {
        Outcome::Solved { cost, .. } => (cost.to_string(), String::new()),
        Outcome::Failed { error } => (String::new(), error.clone()),
        Outcome::Skipped => (String::new(), "skipped".to_string()),
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("solver,case,ports,wall_s,rss_delta_kib,cost,error,verification_status,verification_detail");
    for m in measurements {
        let (cost, error) = outcome_cells(&m.outcome);
        let detail = m.verification.detail().unwrap_or_default();
        println!(
            "{},\"{}\",{},{:.6},{},{},\"{}\",{},\"{}\"",
            m.solver,
            m.case,
            m.ports,
            m.wall_s,
            m.rss_delta_kib,
            cost,
            error.replace('"', "'"),
            m.verification.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "solver".len();
    let mut col2 = "case".len();
    for m in measurements {
        col1 = col1.max(m.solver.len());
        col2 = col2.max(m.case.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>6}  {:>12}  {:>14}  {:>12}  {:>12}  {}",
        "solver", "case", "ports", "wall_s", "rss_delta_kib", "cost", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<6}  {:-<12}  {:-<14}  {:-<12}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        let (cost, error) = outcome_cells(&m.outcome);
        let detail = m.verification.detail().unwrap_or(error);
        println!(
            "{:<col1$}  {:<col2$}  {:>6}  {:>12.6}  {:>14}  {:>12}  {:>12}  {}",
            m.solver,
            m.case,
            m.ports,
            m.wall_s,
            m.rss_delta_kib,
            cost,
            m.verification.label(),
            detail,
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed { .. } => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (skipped or more than {} ports): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if m.verification.is_failed() {
                eprintln!("  ✗ {} ({})", m.solver, m.case);
                if let Some(detail) = m.verification.detail() {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Timing by Solver:");
    let mut by_solver: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        if !matches!(m.outcome, Outcome::Skipped) {
            by_solver.entry(m.solver).or_default().push(m);
        }
    }
    for (solver, ms) in &by_solver {
        let times: Vec<f64> = ms.iter().map(|m| m.wall_s).collect();
        let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_time = times.iter().copied().fold(0.0, f64::max);
        let avg_time = times.iter().sum::<f64>() / times.len() as f64;
        let largest = ms.iter().map(|m| m.ports).max().unwrap_or(0);
        eprintln!("  {solver}:");
        eprintln!("    Runs: {} (largest: {} ports)", ms.len(), largest);
        eprintln!("    Time: min={min_time:.6}s, max={max_time:.6}s, avg={avg_time:.6}s");
    }
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs agree with the dynamic-programming baseline.");
    } else {
        eprintln!("✗ {failed} run(s) disagree with the baseline. See above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}
