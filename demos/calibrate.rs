use isomorph_rs::{calibrate, runic, DiscoveryConfig};
use std::env;
use std::fs;

/// Builds an expected-by-chance calibration table for the runic alphabet
/// and writes it as JSON.
///
/// Usage: cargo run --release --example calibrate <output.json> [trials] [length...]
///
/// Lengths default to the segment sizes of the manuscript corpus. Expect a
/// long run at the full 1000 trials.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output.json> [trials] [length...]", args[0]);
        std::process::exit(1);
    }

    let trials: usize = args
        .get(2)
        .map(|s| s.parse().expect("trials must be a number"))
        .unwrap_or(1000);

    let lengths: Vec<usize> = if args.len() > 3 {
        args[3..]
            .iter()
            .map(|s| s.parse().expect("lengths must be numbers"))
            .collect()
    } else {
        vec![308, 729, 1021, 1145, 1524, 1589, 1729, 1894, 3008]
    };

    let alphabet: Vec<char> = runic::alphabet().collect();
    let config = DiscoveryConfig::default();

    println!("Calibrating lengths {lengths:?} with {trials} trials each");
    let table = calibrate(&alphabet, &lengths, trials, 0x1521, &config)
        .expect("calibration failed");

    let json = serde_json::to_string_pretty(&table).expect("table serializes");
    fs::write(&args[1], json).unwrap_or_else(|err| {
        eprintln!("Cannot write \"{}\": {err}", args[1]);
        std::process::exit(1);
    });
    println!("Wrote {}", args[1]);
}
