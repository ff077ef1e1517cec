use crate::core::{CodelChooser, Direction, Point, RunOutcome};
use crate::trace::Trace;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct JsonData {
    halted: bool,
    total_steps: u64,
    steps: Vec<JsonStep>,
}

#[derive(Serialize, Debug)]
struct JsonStep {
    index: u64,
    from: Point,
    to: Point,
    dp: Direction,
    cc: CodelChooser,
    op: Option<String>,
    stack: Vec<i64>,
}

pub fn get_json_data(trace: &Trace) -> serde_json::Result<String> {
    let steps: Vec<JsonStep> = trace.steps.iter().map(|step| {
        JsonStep {
            index: step.index,
            from: step.record.from,
            to: step.record.to,
            dp: step.record.dp,
            cc: step.record.cc,
            op: step.record.op.map(|op| op.name().to_string()),
            stack: step.stack.clone(),
        }
    }).collect();

    let json_data = JsonData {
        halted: matches!(trace.outcome, Some(RunOutcome::Halted { .. })),
        total_steps: steps.len() as u64,
        steps,
    };
    serde_json::to_string_pretty(&json_data)
}
