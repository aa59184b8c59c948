use isomorph_rs::{find_isomorphs, report, runic, CalibrationTable, DiscoveryConfig};
use std::env;
use std::fs;

/// Isomorph report over a runic transcription.
///
/// Usage: cargo run --example liber <transcription> <output.html> [calibration.json]
///
/// The transcription is split on segment marks; each segment gets its own
/// section in the report. A calibration table (see the `calibrate` example)
/// adds expected-by-chance annotations.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!(
            "Usage: {} <transcription> <output.html> [calibration.json]",
            args[0]
        );
        std::process::exit(1);
    }

    let raw = fs::read_to_string(&args[1]).unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\": {err}", args[1]);
        std::process::exit(1);
    });

    let table = match args.get(3) {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|err| {
                eprintln!("Cannot read \"{path}\": {err}");
                std::process::exit(1);
            });
            serde_json::from_str(&json).unwrap_or_else(|err| {
                eprintln!("Cannot parse \"{path}\": {err}");
                std::process::exit(1);
            })
        }
        None => CalibrationTable::new(),
    };

    let segments: Vec<&str> = runic::segments(&raw).collect();
    println!("{} segments", segments.len());
    println!("Corpus: {} letters", runic::letter_count(&raw));

    let config = DiscoveryConfig::default();
    let mut body = String::new();

    for (secno, segment) in segments.iter().enumerate() {
        let cleaned = runic::clean(segment);
        let isomorphs = find_isomorphs(&cleaned, &config).unwrap_or_else(|err| {
            eprintln!("Section {secno}: {err}");
            std::process::exit(1);
        });

        println!("Section {secno}: {} isomorph groups", isomorphs.len());
        body.push_str(&format!("\n<h3>Section {secno}</h3>\n"));
        body.push_str(&report::format_isomorphs(segment, &isomorphs, &table));
    }

    fs::write(&args[2], report::html_document(&body)).unwrap_or_else(|err| {
        eprintln!("Cannot write \"{}\": {err}", args[2]);
        std::process::exit(1);
    });
}
