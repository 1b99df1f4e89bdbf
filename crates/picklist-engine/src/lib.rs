// Library root: re-exports all modules so integration tests and host
// applications can access the crate's public API.

pub mod analysis;
pub mod config;
pub mod scouting;

pub use analysis::evaluate::{evaluate_candidate, Suggestion};
pub use analysis::roster::{analyze_roster, PickListEngine, RosterAnalysis, RosterSummary};
