//! # blsme
//!
//! Command line over `bls-bn254`: hash messages to G1, derive keys, sign and
//! inspect beacon rounds. Results are printed to stdout as JSON, logs go to
//! stderr.

pub mod cmd;
pub mod logger;
