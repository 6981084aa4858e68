//! Race balance simulator CLI.
//!
//! Plays full tournaments headless to analyze how much condition decides
//! races and how long each round runs.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                  # Default: 1000 tournaments
//!   cargo run --bin simulate -- -n 100        # 100 tournaments
//!   cargo run --bin simulate -- --seed 42     # Reproducible run
//!   cargo run --bin simulate -- --json        # Also save a JSON report

use derby::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DERBY BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Tournaments:    {}", config.num_tournaments);
    println!("  Tick:           {}ms", config.tick_ms);
    println!("  Time scale:     {}x", config.time_scale);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--tournaments" => {
                if i + 1 < args.len() {
                    config.num_tournaments = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--time-scale" => {
                if i + 1 < args.len() {
                    config.time_scale = args[i + 1].parse().unwrap_or(50.0);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Derby Balance Simulator");
    println!();
    println!("Options:");
    println!("  -n, --tournaments N   Number of tournaments to play (default 1000)");
    println!("  -s, --seed SEED       Random seed for reproducible runs");
    println!("  -t, --time-scale X    Race-clock compression factor (default 50)");
    println!("  -v, --verbose         Per-race output");
    println!("  -q, --quiet           Summary only");
    println!("      --json            Also write a timestamped JSON report");
    println!("  -h, --help            Show this help");
}
