// Scouting inputs: per-team statistics records, pool candidates, and the
// already-chosen selection.

pub mod record;
pub mod selection;
