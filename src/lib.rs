//! # Isomorph discovery for short ciphertexts
//!
//! Exploratory cryptanalysis of polyalphabetic and autokey ciphertexts,
//! built around one engine: finding *isomorphs* — recurring patterns of
//! repeated letters shared by two or more locations of a symbol sequence.
//!
//! Discovery proceeds in three moves:
//! 1. **Seed**: every pair of equal symbols at most `max_distance` apart,
//!    bucketed by gap, becomes an initial [`IsomorphGroup`].
//! 2. **Intersect**: groups whose occurrences co-occur at a consistent
//!    relative distance merge into larger-pattern groups, but only when the
//!    co-occurrence repeats and the occurrence windows are `nearby`.
//! 3. **Split**: each merged group is re-checked against the sequence and
//!    partitioned by the full repeat signature of its windows.
//!
//! The fixed point of intersecting and splitting, thresholded and stripped
//! of redundant groups, is the isomorph set of the message.
//!
//! ## Example
//!
//! ```
//! use isomorph_rs::{find_isomorphs, DiscoveryConfig};
//!
//! let msg: Vec<char> = "ababccxydedeffzwghghii".chars().collect();
//! let groups = find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap();
//!
//! for group in &groups {
//!     // e.g. ABABCC recurring at positions 0, 8 and 16
//!     println!("{} at {:?}", group.pattern_string(), group.positions());
//!     assert!(group.holds_in(&msg));
//! }
//! ```
//!
//! The surrounding toolkit — coincidence statistics, Kasiski-style repeat
//! search, autokey stripping, the runic corpus alphabet, Monte Carlo
//! calibration of expected-by-chance rates, and HTML reporting — lives in
//! the named submodules.

mod calibrate;
mod config;
mod discover;
mod error;
mod group;
mod intersect;
mod seed;
mod split;

pub mod autokey;
pub mod repeats;
pub mod report;
pub mod runic;
pub mod stats;

#[cfg(test)]
mod tests;

pub use calibrate::{calibrate, CalibrationTable, ExpectedRate};
pub use config::DiscoveryConfig;
pub use discover::{find_isomorphs, prune_contained};
pub use error::{IsomorphError, Result};
pub use group::{IsomorphGroup, Repeat};
pub use seed::initial_groups;
