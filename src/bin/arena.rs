//! Offline arena CLI.
//!
//! Plays the engine on generated maps and outputs per-map records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --maps N      Number of maps to play (default: 10)
//!   --ticks N     Turns per map (default: 50)
//!   --width N     Map width in cells (default: 8)
//!   --height N    Map height in rows (default: 5)
//!   --tuning FILE Strategy tuning JSON file (default: built-in)
//!   --threads N   Number of parallel threads (default: 4)
//!   --seed N      Random seed, 0 for entropy (default: 0)
//!   --output FILE Output file path (default: stdout)
//!   --quiet       Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use myrmex::simulator::{self, ArenaConfig};
use myrmex::tuning::load_tuning;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ArenaConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--maps" => {
                i += 1;
                config.maps = args[i].parse().expect("invalid --maps value");
            }
            "--ticks" => {
                i += 1;
                config.ticks = args[i].parse().expect("invalid --ticks value");
            }
            "--width" => {
                i += 1;
                config.width = args[i].parse().expect("invalid --width value");
            }
            "--height" => {
                i += 1;
                config.height = args[i].parse().expect("invalid --height value");
            }
            "--tuning" => {
                i += 1;
                config.tuning = match load_tuning(Path::new(&args[i])) {
                    Ok(tuning) => tuning,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                };
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Arena: {} maps of {}x{}, {} turns, {} threads",
            config.maps, config.width, config.height, config.ticks, config.threads
        );
    }

    let start = Instant::now();
    let records = simulator::run_arena(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} maps in {:.1}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        simulator::print_summary(&records);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            simulator::write_jsonl(&records, &mut writer).expect("failed to write output");
            if !config.quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            simulator::write_jsonl(&records, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: arena [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --maps N       Number of maps to play (default: 10)");
    eprintln!("  --ticks N      Turns per map (default: 50)");
    eprintln!("  --width N      Map width in cells (default: 8)");
    eprintln!("  --height N     Map height in rows (default: 5)");
    eprintln!("  --tuning FILE  Strategy tuning JSON file (default: built-in)");
    eprintln!("  --threads N    Number of parallel threads (default: 4)");
    eprintln!("  --seed N       Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE  Output file path (default: stdout)");
    eprintln!("  --quiet        Suppress summary output");
    eprintln!("  --help         Show this help");
}
