/// LIFO stack of the machine; the last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }

    /// Pops `(a, b)` where `b` was the top, only if both are present.
    pub fn pop_pair(&mut self) -> Option<(i64, i64)> {
        if self.values.len() < 2 {
            return None;
        }
        let b = self.values.pop()?;
        let a = self.values.pop()?;
        Some((a, b))
    }

    /// Rotates the top `depth` values. One positive roll moves the top value down to
    /// position `depth` and lifts the others by one; negative rolls go the other way.
    /// Returns false, leaving the stack untouched, if `depth` is negative or deeper than the stack.
    pub fn roll(&mut self, depth: i64, rolls: i64) -> bool {
        if depth < 0 || depth as u64 > self.values.len() as u64 {
            return false;
        }
        if depth == 0 {
            return true;
        }
        let start = self.values.len() - depth as usize;
        let shift = rolls.rem_euclid(depth) as usize;
        self.values[start..].rotate_right(shift);
        true
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Stack {
        Stack { values }
    }
}
