//! Process-level tests driving the compiled binary per preset.

use std::process::Command;

#[derive(Debug)]
struct ReportFigures {
    mean_savings_kw: f64,
    mean_savings_percent: f64,
}

#[test]
fn presets_run_via_cli_and_report_sane_figures() {
    for preset in ["neon", "aurora", "classic", "midnight"] {
        let stdout = run_cli(&["--preset", preset, "--runs", "4"]);
        let figures = parse_report(&stdout);

        assert!(
            figures.mean_savings_kw >= 0.0,
            "preset {preset}: negative mean savings: {figures:?}"
        );
        assert!(
            (0.0..=100.0).contains(&figures.mean_savings_percent),
            "preset {preset}: percentage out of range: {figures:?}"
        );

        let run_lines = stdout.lines().filter(|l| l.starts_with("run=")).count();
        assert_eq!(run_lines, 4, "preset {preset}: expected 4 run lines");
    }
}

#[test]
fn seeded_cli_runs_are_reproducible() {
    let args = ["--preset", "classic", "--seed", "7", "--runs", "3"];
    let first = run_cli(&args);
    let second = run_cli(&args);
    assert_eq!(first, second, "same seed must reproduce the session");
}

#[test]
fn presets_with_distinct_inputs_produce_distinct_sessions() {
    // neon and midnight differ in default loads, so the before-sums differ
    let neon = run_cli(&["--preset", "neon", "--runs", "2"]);
    let midnight = run_cli(&["--preset", "midnight", "--runs", "2"]);
    assert_ne!(neon, midnight);
}

#[test]
fn out_of_range_loads_are_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid-opt"))
        .args(["--preset", "neon", "--loads", "60,500,45"])
        .output()
        .expect("grid-opt process should run");

    assert!(
        !output.status.success(),
        "out-of-range --loads must fail validation"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config error"), "stderr was: {stderr}");
}

#[test]
fn explicit_loads_are_echoed_in_run_lines() {
    let stdout = run_cli(&["--preset", "neon", "--loads", "100,110,120", "--seed", "5"]);
    let run_line = stdout
        .lines()
        .find(|l| l.starts_with("run="))
        .expect("expected a run line");
    assert!(run_line.contains("A=100 B=110 C=120"), "line: {run_line}");
}

fn run_cli(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_grid-opt"))
        .args(args)
        .output()
        .expect("grid-opt process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

fn parse_report(stdout: &str) -> ReportFigures {
    let mean_savings_kw = parse_metric(stdout, "Total savings (mean):", "kW");
    let mean_savings_percent = parse_metric(stdout, "Efficiency gain (mean):", "%");

    ReportFigures {
        mean_savings_kw,
        mean_savings_percent,
    }
}

fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing report line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid report format for line `{line}`"));

    let numeric = raw.strip_suffix(unit).unwrap_or(raw).trim();
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from report line `{line}`"))
}
