use crate::core::{MachineState, RunOutcome, StepRecord};

/// Every transition of one run, in order.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
    pub outcome: Option<RunOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep {
    pub index: u64,
    pub record: StepRecord,
    /// Stack after the step, bottom first.
    pub stack: Vec<i64>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn record(&mut self, record: &StepRecord, state: &MachineState) {
        self.steps.push(TraceStep {
            index: self.steps.len() as u64,
            record: record.clone(),
            stack: state.stack.as_slice().to_vec(),
        });
    }

    pub fn finish(&mut self, outcome: RunOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
