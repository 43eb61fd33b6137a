//! Integration tests for the kriegspiel probe binary.
//!
//! Spawns the probe process, sends commands via stdin, and verifies
//! stdout replies.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the probe and collects stdout lines.
fn run_probe(args: &[&str], commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_kriegspiel");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kriegspiel");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Arsenal B2, relay F2, relay F6, infantry U6 -- all north.
const RELAY_CHAIN: [&str; 4] = [
    "place B2 north arsenal",
    "place F2 north relay",
    "place F6 north relay",
    "place U6 north infantry",
];

#[test]
fn isready_response() {
    let lines = run_probe(&[], &["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_probe(&[], &["foobar", "", "  ", "place nowhere", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn relay_chain_session() {
    let mut cmds: Vec<&str> = RELAY_CHAIN.to_vec();
    cmds.extend(["enable", "relay F2", "relay F6", "online U6 north", "online U6 south", "quit"]);
    let lines = run_probe(&[], &cmds);
    assert_eq!(
        lines,
        vec![
            "enabled recomputed",
            "relay F2 true",
            "relay F6 true",
            "online U6 true",
            "online U6 false",
        ]
    );
}

#[test]
fn stale_until_enable() {
    let mut cmds: Vec<&str> = RELAY_CHAIN.to_vec();
    cmds.extend([
        "enable",
        "place K6 south cannon",
        "online U6 north",
        "enable",
        "online U6 north",
        "enable",
        "quit",
    ]);
    let lines = run_probe(&[], &cmds);
    assert_eq!(
        lines,
        vec![
            "enabled recomputed",
            "online U6 true",
            "enabled recomputed",
            "online U6 false",
            "enabled cached",
        ]
    );
}

#[test]
fn setoption_disables_adjacency() {
    let cmds = [
        "place A1 north arsenal",
        "place G1 north relay",
        "place H2 north infantry",
        "enable",
        "online H2 north",
        "setoption name AdjacencyRelayPropagation value false",
        "enable",
        "online H2 north",
        "quit",
    ];
    let lines = run_probe(&[], &cmds);
    assert_eq!(
        lines,
        vec!["enabled recomputed", "online H2 true", "enabled recomputed", "online H2 false"]
    );
}

#[test]
fn config_file_sets_initial_rules() {
    let path = std::env::temp_dir().join(format!("kriegspiel-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"adjacency_relay_propagation": false}"#).unwrap();
    let path_str = path.to_str().unwrap().to_string();

    let cmds = [
        "place A1 north arsenal",
        "place G1 north relay",
        "place H2 north infantry",
        "enable",
        "online H2 north",
        "quit",
    ];
    let lines = run_probe(&[&path_str], &cmds);
    std::fs::remove_file(&path).ok();
    assert_eq!(lines, vec!["enabled recomputed", "online H2 false"]);
}

#[test]
fn bad_config_file_fails() {
    let exe = env!("CARGO_BIN_EXE_kriegspiel");
    let status = Command::new(exe)
        .arg("/nonexistent/kriegspiel.json")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to start kriegspiel");
    assert!(!status.success());
}

#[test]
fn errors_reported_on_stdout() {
    let lines = run_probe(&[], &["place C3 north infantry", "place C3 south relay", "remove D4", "quit"]);
    assert_eq!(lines, vec!["error cell (2, 2) is already occupied", "error cell (3, 3) is empty"]);
}

#[test]
fn newboard_clears_units() {
    let mut cmds: Vec<&str> = RELAY_CHAIN.to_vec();
    cmds.extend(["enable", "newboard", "enable", "relay F2", "dump", "quit"]);
    let lines = run_probe(&[], &cmds);
    assert_eq!(lines[..3], ["enabled recomputed", "enabled recomputed", "relay F2 false"]);
    assert_eq!(
        lines[3],
        r#"network {"dirty":false,"north":{"online":[],"active_relays":[]},"south":{"online":[],"active_relays":[]}}"#
    );
}

#[test]
fn input_ending_without_quit_exits_cleanly() {
    let lines = run_probe(&[], &["isready"]);
    assert_eq!(lines, vec!["readyok"]);
}
