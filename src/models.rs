use crate::core::{MachineState, StepRecord};

pub struct DebugRenderState {
    pub machine: MachineState,
    pub steps: u64,
    pub halted: bool,
    pub error: Option<String>,
    pub last_step: Option<StepRecord>,
    pub output: String,
}
