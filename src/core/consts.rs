use crate::core::models::Point;

/// Programs start in the block containing the top-left codel.
pub const ENTRY_POINT: Point = Point::new(0, 0);

/// Bound on "run to halt" in the interactive stepper when no limit is configured.
pub const DEFAULT_DEBUG_STEP_LIMIT: u64 = 100_000;
