//! # ace-detection
//!
//! Stateless heuristic scoring of extracted facts against source evidence.
//! Each check is an independent submodule contributing weight and a named
//! risk factor; a fact is convicted only when the accumulated confidence
//! clears the threshold AND at least two independent factors fired.
//! Single heuristics false-positive too often on short descriptions; the
//! two-factor rule is the precision/recall compromise the detector is
//! built around.

pub mod checks;
pub mod detector;
pub mod text;

pub use detector::{DetectorConfig, HallucinationDetector};
