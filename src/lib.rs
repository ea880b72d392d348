//
// lib.rs
// logcheck
//
// Library entry that re-exports the comparator, its error type, the marker presentation and the CLI options so the binary and tests share one interface.
//
// Thales Matheus Mendonça Santos - November 2025
//
pub mod cli;
pub mod compare;
pub mod error;
pub mod marker;
pub mod report;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use compare::{
    compare, first_difference, LineComparator, Mismatch, MismatchKind, Side, Summary,
};
pub use error::{CheckError, CheckResult};
pub use marker::{MarkerPlacement, MarkerStyle};
pub use utils::open_input;
