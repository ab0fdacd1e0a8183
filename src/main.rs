//! Myrmex -- an ant-arena bot for a hexagonal cell graph.
//!
//! This binary reads the arena protocol from stdin and writes one command
//! line per turn to stdout: the startup block describes the map, then each
//! turn refreshes every cell's resource and ant counts and expects a
//! `;`-joined command line (or WAIT) in response.

use std::io::{self, Write};
use std::process;

use myrmex::engine::Engine;
use myrmex::protocol::{format_turn, read_layout, read_snapshot};
use myrmex::tuning::tuning_from_env;

/// Runs the main game loop: parse the map once, then answer every turn
/// until the arena closes the input stream.
fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let layout = match read_layout(&mut input) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let num_cells = layout.len();
    let engine = Engine::with_tuning(layout, tuning_from_env());

    loop {
        let snap = match read_snapshot(&mut input, num_cells) {
            Ok(Some(snap)) => snap,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };

        let actions = engine.decide(&snap);
        writeln!(out, "{}", format_turn(&actions)).unwrap();
        out.flush().unwrap();
    }
}
