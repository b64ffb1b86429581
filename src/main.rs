//! Load optimizer entry point — CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use grid_opt::config::ScenarioConfig;
use grid_opt::io::export::export_csv;
use grid_opt::opt::optimizer::Optimizer;
use grid_opt::opt::report::SessionReport;
use grid_opt::opt::types::{LoadVector, NUM_BUILDINGS, RunRecord};

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    loads: Option<[u32; NUM_BUILDINGS]>,
    runs: usize,
    telemetry_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("grid-opt — Building-load optimization dashboard");
    eprintln!();
    eprintln!("Usage: grid-opt [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (neon, aurora, classic, midnight)");
    eprintln!("  --seed <u64>             Override random seed");
    eprintln!("  --loads <a,b,c>          Override default building loads (kW)");
    eprintln!("  --runs <n>               Number of optimization runs (default: 1)");
    eprintln!("  --telemetry-out <path>   Export run records to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive dashboard");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after the runs");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the neon preset is used.");
}

/// Parses a `--loads` value of the form `a,b,c`.
fn parse_loads(s: &str) -> Result<[u32; NUM_BUILDINGS], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != NUM_BUILDINGS {
        return Err(format!(
            "expected {NUM_BUILDINGS} comma-separated values, got {}",
            parts.len()
        ));
    }
    let mut out = [0u32; NUM_BUILDINGS];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("\"{part}\" is not a valid kW value"))?;
    }
    Ok(out)
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        loads: None,
        runs: 1,
        telemetry_out: None,
        #[cfg(feature = "tui")]
        tui: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--loads" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --loads requires an a,b,c argument");
                    process::exit(1);
                }
                match parse_loads(&args[i]) {
                    Ok(loads) => cli.loads = Some(loads),
                    Err(e) => {
                        eprintln!("error: invalid --loads value: {e}");
                        process::exit(1);
                    }
                }
            }
            "--runs" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --runs requires a count argument");
                    process::exit(1);
                }
                match args[i].parse::<usize>() {
                    Ok(n) if n > 0 => cli.runs = n,
                    _ => {
                        eprintln!("error: --runs value \"{}\" is not a positive count", args[i]);
                        process::exit(1);
                    }
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Runs the headless flow: n optimization runs plus the session report.
fn run_session(scenario: &ScenarioConfig, loads: LoadVector, runs: usize) -> Vec<RunRecord> {
    let mut optimizer = Optimizer::from_config(&scenario.optimizer);
    let mut records = Vec::with_capacity(runs);
    for run in 0..runs {
        let record = optimizer.run(run, &loads);
        println!("{record}");
        records.push(record);
    }
    records
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then neon default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::neon()
    };

    // Apply seed override
    if let Some(seed) = cli.seed_override {
        scenario.optimizer.seed = seed;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        let preset_name = cli.preset.as_deref().unwrap_or("neon");
        grid_opt::tui::run(scenario, preset_name);
        return;
    }

    // Resolve loads: --loads overrides the preset defaults and is
    // checked against the input bounds (CLI values bypass the sliders)
    let loads = LoadVector::new(cli.loads.unwrap_or(scenario.input.defaults));
    if let Err(e) = scenario.input.check_loads(&loads) {
        eprintln!("{e}");
        process::exit(1);
    }

    let records = run_session(&scenario, loads, cli.runs);

    // Print session report
    let report = SessionReport::from_records(&records);
    println!("\n{report}");

    // Export CSV if requested
    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&records, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Run records written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(grid_opt::api::AppState { scenario });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(grid_opt::api::serve(state, addr));
    }
}
