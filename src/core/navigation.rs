use crate::core::bounded_grid::ColorGrid;
use crate::core::color::Color;
use crate::core::models::{MachineState, Point};
use crate::core::region::find_region;

/// Where the machine would go next from its current block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub point: Point,
    /// Area of the block being left.
    pub area: usize,
    /// False when the move slid through white; nothing is executed on arrival.
    pub should_execute: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    ToggleCodelChooser,
    RotateDirection,
}

/// Applied one at a time after a blocked attempt, retrying after each.
pub const RECOVERY_SEQUENCE: [Recovery; 8] = [
    Recovery::ToggleCodelChooser,
    Recovery::RotateDirection,
    Recovery::ToggleCodelChooser,
    Recovery::RotateDirection,
    Recovery::ToggleCodelChooser,
    Recovery::RotateDirection,
    Recovery::ToggleCodelChooser,
    Recovery::RotateDirection,
];

/// Computes the next codel for the current dp/cc without deciding whether it can be entered.
///
/// `None` only if the machine's point is itself outside the grid.
pub fn advance(state: &MachineState, grid: &ColorGrid) -> Option<Candidate> {
    let region = find_region(grid, state.point)?;
    let exit = region.exit_codel(state.dp, state.cc)?;

    let step = state.dp.offset();
    let mut point = exit + step;
    let should_execute = grid.get(&point) != Some(&Color::White);

    while grid.get(&point) == Some(&Color::White) {
        point = point + step;
    }

    Some(Candidate {
        point,
        area: region.area(),
        should_execute,
    })
}

/// Off the grid, or black.
pub fn is_unmovable(grid: &ColorGrid, point: &Point) -> bool {
    match grid.get(point) {
        None => true,
        Some(color) => *color == Color::Black,
    }
}

impl Recovery {
    pub fn apply(self, state: &mut MachineState) {
        match self {
            Recovery::ToggleCodelChooser => state.cc = state.cc.toggled(),
            Recovery::RotateDirection => state.dp = state.dp.rotate(1),
        }
    }
}

/// Finds an enterable codel, rotating cc and dp through [`RECOVERY_SEQUENCE`] while blocked.
///
/// Returns `None` once every recovery attempt is blocked; the program is over.
/// The dp/cc changes made along the way are kept either way.
pub fn navigate(state: &mut MachineState, grid: &ColorGrid) -> Option<Candidate> {
    let movable = |state: &MachineState| {
        advance(state, grid).filter(|candidate| !is_unmovable(grid, &candidate.point))
    };

    if let Some(candidate) = movable(state) {
        return Some(candidate);
    }

    for (attempt, recovery) in RECOVERY_SEQUENCE.into_iter().enumerate() {
        recovery.apply(state);
        if let Some(candidate) = movable(state) {
            tracing::trace!(attempt, dp = ?state.dp, cc = ?state.cc, "recovered from blocked exit");
            return Some(candidate);
        }
    }

    None
}
