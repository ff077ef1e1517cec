use crate::core::bounded_grid::ColorGrid;
use crate::core::decode::decode;
use crate::core::error::PietError;
use crate::core::io::PietIo;
use crate::core::models::{MachineState, RunOutcome, StepRecord, StepUpdate};
use crate::core::navigation::navigate;
use crate::core::stack_machine::execute;

/// Moves the machine into the next block and executes the transition's operation.
///
/// `StepUpdate::Halted` is the only way a program ends: every exit of the current
/// block was blocked after the full recovery sequence.
pub fn step(
    state: &mut MachineState,
    grid: &ColorGrid,
    io: &mut impl PietIo,
) -> Result<StepUpdate, PietError> {
    let Some(candidate) = navigate(state, grid) else {
        tracing::debug!(point = %state.point, "no exit left, halting");
        return Ok(StepUpdate::Halted);
    };

    let from = state.point;
    let departure = (state.dp, state.cc);
    let op = if candidate.should_execute {
        let current = grid[&from];
        let next = grid[&candidate.point];
        Some(decode(current, next))
    } else {
        None
    };

    state.area = candidate.area as i64;
    if let Some(op) = op {
        tracing::trace!(%from, to = %candidate.point, %op, "executing");
        execute(op, state, io)?;
    }
    state.point = candidate.point;

    Ok(StepUpdate::Moved(StepRecord {
        from,
        to: candidate.point,
        dp: departure.0,
        cc: departure.1,
        op,
    }))
}

/// Steps until the program halts, or until `step_limit` steps have been taken.
pub fn run(
    state: &mut MachineState,
    grid: &ColorGrid,
    io: &mut impl PietIo,
    step_limit: Option<u64>,
) -> Result<RunOutcome, PietError> {
    run_with(state, grid, io, step_limit, |_, _| {})
}

/// Like [`run`], handing every completed step to `on_step` with the state after it.
pub fn run_with(
    state: &mut MachineState,
    grid: &ColorGrid,
    io: &mut impl PietIo,
    step_limit: Option<u64>,
    mut on_step: impl FnMut(&StepRecord, &MachineState),
) -> Result<RunOutcome, PietError> {
    let mut steps = 0;
    loop {
        if step_limit.is_some_and(|limit| steps >= limit) {
            tracing::info!(steps, "step limit reached");
            return Ok(RunOutcome::StepLimitReached { steps });
        }
        match step(state, grid, io)? {
            StepUpdate::Moved(record) => {
                steps += 1;
                on_step(&record, state);
            }
            StepUpdate::Halted => {
                tracing::info!(steps, "program halted");
                return Ok(RunOutcome::Halted { steps });
            }
        }
    }
}
