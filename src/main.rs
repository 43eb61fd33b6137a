//! Kriegspiel network probe.
//!
//! Reads probe commands from stdin and writes replies to stdout. An optional
//! first argument names a JSON file holding the initial `NetworkConfig`.

use std::io::{self, BufRead};
use std::process::ExitCode;

use kriegspiel::engine::Session;
use kriegspiel::network::NetworkConfig;
use kriegspiel::protocol::parser::parse_command;

/// Loads the config named on the command line, or the default.
fn load_config() -> Result<NetworkConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(NetworkConfig::default());
    };
    let text = std::fs::read_to_string(&path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    NetworkConfig::from_json(&text).map_err(|e| format!("{}: {}", path, e))
}

/// Runs the probe loop until `quit` or end of input.
fn main() -> ExitCode {
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(config);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match session.handle(cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("write failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
