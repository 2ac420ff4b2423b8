// analyzer module
mod analyzer;
// rooms module
mod rooms;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use analyzer::{PathMetrics, TreeAnalyzer, DEFAULT_THRESHOLD};
pub use rooms::RoomMap;
