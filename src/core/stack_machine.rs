use crate::core::error::PietError;
use crate::core::io::PietIo;
use crate::core::models::{MachineState, Op};

/// Applies `op` to the machine.
///
/// Underflow, division by zero and overflow leave the stack exactly as it was.
/// Only faults from `io` are returned.
pub fn execute(op: Op, state: &mut MachineState, io: &mut impl PietIo) -> Result<(), PietError> {
    match op {
        Op::Nop => {}
        Op::Push => state.stack.push(state.area),
        Op::Pop => {
            if state.stack.pop().is_none() {
                absorbed(op, "empty stack");
            }
        }
        Op::Add => binary(op, state, |a, b| a.checked_add(b)),
        Op::Sub => binary(op, state, |a, b| a.checked_sub(b)),
        Op::Mul => binary(op, state, |a, b| a.checked_mul(b)),
        Op::Div => binary(op, state, |a, b| a.checked_div(b)),
        Op::Mod => binary(op, state, floor_mod),
        Op::Greater => binary(op, state, |a, b| Some(i64::from(a > b))),
        Op::Not => match state.stack.pop() {
            Some(value) => state.stack.push(i64::from(value == 0)),
            None => absorbed(op, "empty stack"),
        },
        Op::Pointer => match state.stack.pop() {
            Some(turns) => state.dp = state.dp.rotate(turns),
            None => absorbed(op, "empty stack"),
        },
        Op::Switch => match state.stack.pop() {
            Some(count) => state.cc = state.cc.switched(count),
            None => absorbed(op, "empty stack"),
        },
        Op::Dup => match state.stack.peek() {
            Some(top) => state.stack.push(top),
            None => absorbed(op, "empty stack"),
        },
        Op::Roll => match state.stack.pop_pair() {
            Some((depth, rolls)) => {
                if !state.stack.roll(depth, rolls) {
                    state.stack.push(depth);
                    state.stack.push(rolls);
                    absorbed(op, "roll depth out of range");
                }
            }
            None => absorbed(op, "fewer than two values"),
        },
        Op::InN => {
            let value = io.read_integer()?;
            state.stack.push(value);
        }
        Op::InC => {
            let value = io.read_char()?;
            state.stack.push(value);
        }
        Op::OutN => match state.stack.pop() {
            Some(value) => io.write_integer(value)?,
            None => absorbed(op, "empty stack"),
        },
        Op::OutC => match state.stack.pop() {
            Some(value) => io.write_char(value)?,
            None => absorbed(op, "empty stack"),
        },
    }
    Ok(())
}

/// Pops `b` then `a` and pushes `f(a, b)`; restores both when `f` has no answer.
fn binary(op: Op, state: &mut MachineState, f: impl FnOnce(i64, i64) -> Option<i64>) {
    let Some((a, b)) = state.stack.pop_pair() else {
        absorbed(op, "fewer than two values");
        return;
    };
    match f(a, b) {
        Some(result) => state.stack.push(result),
        None => {
            state.stack.push(a);
            state.stack.push(b);
            absorbed(op, "undefined result");
        }
    }
}

/// Modulo taking the sign of the divisor. Undefined for a zero divisor.
pub fn floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

fn absorbed(op: Op, reason: &str) {
    tracing::trace!(%op, reason, "operation skipped");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::{CodelChooser, Direction};
    use crate::core::stack::Stack;
    use crate::test::test_util::ScriptedIo;

    fn machine(stack: Vec<i64>) -> MachineState {
        MachineState {
            stack: Stack::from(stack),
            ..MachineState::default()
        }
    }

    fn run(op: Op, stack: Vec<i64>) -> Vec<i64> {
        let mut state = machine(stack);
        execute(op, &mut state, &mut ScriptedIo::new("")).unwrap();
        state.stack.as_slice().to_vec()
    }

    #[test]
    fn test_push_uses_area() {
        let mut state = machine(vec![]);
        state.area = 7;
        execute(Op::Push, &mut state, &mut ScriptedIo::new("")).unwrap();
        assert_eq!(state.stack.as_slice(), &[7]);
    }

    #[test]
    fn test_arithmetic_uses_second_value_as_left_operand() {
        assert_eq!(run(Op::Add, vec![1, 2, 3]), vec![1, 5]);
        assert_eq!(run(Op::Sub, vec![10, 3]), vec![7]);
        assert_eq!(run(Op::Mul, vec![-4, 3]), vec![-12]);
        assert_eq!(run(Op::Div, vec![7, 2]), vec![3]);
        assert_eq!(run(Op::Div, vec![-7, 2]), vec![-3]);
        assert_eq!(run(Op::Greater, vec![5, 3]), vec![1]);
        assert_eq!(run(Op::Greater, vec![3, 5]), vec![0]);
        assert_eq!(run(Op::Greater, vec![3, 3]), vec![0]);
    }

    #[test]
    fn test_mod_takes_sign_of_divisor() {
        assert_eq!(run(Op::Mod, vec![7, 3]), vec![1]);
        assert_eq!(run(Op::Mod, vec![-1, 3]), vec![2]);
        assert_eq!(run(Op::Mod, vec![1, -3]), vec![-2]);
        assert_eq!(run(Op::Mod, vec![-7, -3]), vec![-1]);
        assert_eq!(run(Op::Mod, vec![6, 3]), vec![0]);
        assert_eq!(run(Op::Mod, vec![0, 5]), vec![0]);
    }

    #[test]
    fn test_division_by_zero_is_skipped() {
        assert_eq!(run(Op::Div, vec![1, 4, 0]), vec![1, 4, 0]);
        assert_eq!(run(Op::Mod, vec![4, 0]), vec![4, 0]);
    }

    #[test]
    fn test_overflow_is_skipped() {
        assert_eq!(run(Op::Add, vec![i64::MAX, 1]), vec![i64::MAX, 1]);
        assert_eq!(run(Op::Mul, vec![i64::MIN, -1]), vec![i64::MIN, -1]);
        assert_eq!(run(Op::Div, vec![i64::MIN, -1]), vec![i64::MIN, -1]);
    }

    #[test]
    fn test_underflow_leaves_stack_untouched() {
        for op in [Op::Pop, Op::OutN, Op::OutC, Op::Add, Op::Roll, Op::Not, Op::Dup, Op::Pointer, Op::Switch] {
            assert_eq!(run(op, vec![]), Vec::<i64>::new(), "{op}");
        }
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Mod, Op::Greater, Op::Roll] {
            assert_eq!(run(op, vec![9]), vec![9], "{op}");
        }
    }

    #[test]
    fn test_not_dup_and_pop() {
        assert_eq!(run(Op::Not, vec![0]), vec![1]);
        assert_eq!(run(Op::Not, vec![-3]), vec![0]);
        assert_eq!(run(Op::Dup, vec![1, 2]), vec![1, 2, 2]);
        assert_eq!(run(Op::Pop, vec![1, 2]), vec![1]);
    }

    #[test]
    fn test_roll() {
        assert_eq!(run(Op::Roll, vec![1, 2, 3, 3, 1]), vec![3, 1, 2]);
        assert_eq!(run(Op::Roll, vec![1, 2, 3, 3, -1]), vec![2, 3, 1]);
        assert_eq!(run(Op::Roll, vec![1, 2, 3, 2, 2]), vec![1, 2, 3]);
        assert_eq!(run(Op::Roll, vec![1, 2, 0, 5]), vec![1, 2]);
        // invalid depths put both operands back
        assert_eq!(run(Op::Roll, vec![1, 2, -1, 1]), vec![1, 2, -1, 1]);
        assert_eq!(run(Op::Roll, vec![1, 2, 3, 1]), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_pointer_and_switch() {
        let mut state = machine(vec![-1]);
        execute(Op::Pointer, &mut state, &mut ScriptedIo::new("")).unwrap();
        assert_eq!(state.dp, Direction::Up);

        let mut state = machine(vec![5]);
        execute(Op::Pointer, &mut state, &mut ScriptedIo::new("")).unwrap();
        assert_eq!(state.dp, Direction::Down);

        let mut state = machine(vec![4, 3]);
        execute(Op::Switch, &mut state, &mut ScriptedIo::new("")).unwrap();
        assert_eq!(state.cc, CodelChooser::Right);
        execute(Op::Switch, &mut state, &mut ScriptedIo::new("")).unwrap();
        assert_eq!(state.cc, CodelChooser::Right);
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_input_and_output() {
        let mut io = ScriptedIo::new("12 x");
        let mut state = machine(vec![]);
        execute(Op::InN, &mut state, &mut io).unwrap();
        execute(Op::InC, &mut state, &mut io).unwrap();
        assert_eq!(state.stack.as_slice(), &[12, 'x' as i64]);

        state.stack.push('!' as i64);
        execute(Op::OutC, &mut state, &mut io).unwrap();
        execute(Op::Pop, &mut state, &mut io).unwrap();
        execute(Op::OutN, &mut state, &mut io).unwrap();
        assert_eq!(io.output(), "!12");
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_exhausted_input_is_reported() {
        let mut state = machine(vec![]);
        let result = execute(Op::InN, &mut state, &mut ScriptedIo::new(""));
        assert!(matches!(result, Err(PietError::InputExhausted { .. })));
        assert!(state.stack.is_empty());
    }
}
