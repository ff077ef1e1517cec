use std::collections::BTreeMap;

use crate::trace::Trace;

pub struct TraceInfo {
    pub steps: usize,
    pub executed: usize,
    pub slides: usize,
    pub max_stack_depth: usize,
    /// Executed operations by name.
    pub op_counts: BTreeMap<&'static str, usize>,
}

impl TraceInfo {
    pub fn new(trace: &Trace) -> Self {
        let mut op_counts = BTreeMap::new();
        let mut slides = 0;
        for step in &trace.steps {
            match step.record.op {
                Some(op) => *op_counts.entry(op.name()).or_insert(0) += 1,
                None => slides += 1,
            }
        }
        let max_stack_depth = trace.steps.iter().map(|step| step.stack.len()).max().unwrap_or(0);
        Self {
            steps: trace.len(),
            executed: trace.len() - slides,
            slides,
            max_stack_depth,
            op_counts,
        }
    }

    pub fn to_human_string(&self) -> String {
        let ops: Vec<String> = self
            .op_counts
            .iter()
            .map(|(name, count)| format!("{name}: {count}"))
            .collect();
        format!(
            "Ran {} steps ({} executed, {} white slides), max stack depth {}. Ops: {}",
            self.steps,
            self.executed,
            self.slides,
            self.max_stack_depth,
            if ops.is_empty() { "none".to_string() } else { ops.join(", ") }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::run_with;
    use crate::test::test_util::ProgramTestState;

    #[test]
    fn test_summary_counts_ops_and_slides() {
        // white between the two blocks, so every step is a slide
        let mut program = ProgramTestState::new("r.1");
        let mut trace = Trace::new();
        let outcome = run_with(&mut program.state, &program.grid, &mut program.io, Some(3), |record, state| {
            trace.record(record, state)
        })
        .unwrap();
        trace.finish(outcome);

        let info = TraceInfo::new(&trace);
        assert_eq!(info.steps, 3);
        assert_eq!(info.slides, 3);
        assert_eq!(info.executed, 0);
        assert_eq!(info.max_stack_depth, 0);
        assert!(info.to_human_string().contains("Ops: none"));
    }
}
