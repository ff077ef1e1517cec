use serde::Serialize;
use std::fmt;

use crate::core::stack::Stack;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The direction pointer. Declared in clockwise order starting from `Right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

/// The codel chooser, relative to the direction pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum CodelChooser {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Nop,
    Push,
    Pop,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Not,
    Greater,
    Pointer,
    Switch,
    Dup,
    Roll,
    InN,
    InC,
    OutN,
    OutC,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MachineState {
    pub stack: Stack,
    /// Area of the region most recently left; consumed by `Push`.
    pub area: i64,
    pub point: Point,
    pub dp: Direction,
    pub cc: CodelChooser,
}

/// One successful transition between regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub from: Point,
    pub to: Point,
    pub dp: Direction,
    pub cc: CodelChooser,
    /// `None` when the transition slid through white.
    pub op: Option<Op>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepUpdate {
    Moved(StepRecord),
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Halted { steps: u64 },
    StepLimitReached { steps: u64 },
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    pub fn from_index(index: i64) -> Direction {
        Direction::ALL[index.rem_euclid(4) as usize]
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    /// Rotates clockwise `turns` times; negative values rotate anticlockwise.
    pub fn rotate(self, turns: i64) -> Direction {
        Direction::from_index(self.index() + turns.rem_euclid(4))
    }

    pub fn offset(self) -> Point {
        match self {
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Up => Point::new(0, -1),
        }
    }
}

impl CodelChooser {
    pub fn toggled(self) -> CodelChooser {
        match self {
            CodelChooser::Left => CodelChooser::Right,
            CodelChooser::Right => CodelChooser::Left,
        }
    }

    /// Toggles once per unit of `count`, so only its parity matters.
    pub fn switched(self, count: i64) -> CodelChooser {
        if count.rem_euclid(2) == 1 {
            self.toggled()
        } else {
            self
        }
    }
}

impl Op {
    pub fn name(self) -> &'static str {
        match self {
            Op::Nop => "Nop",
            Op::Push => "Push",
            Op::Pop => "Pop",
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mul => "Mul",
            Op::Div => "Div",
            Op::Mod => "Mod",
            Op::Not => "Not",
            Op::Greater => "Greater",
            Op::Pointer => "Pointer",
            Op::Switch => "Switch",
            Op::Dup => "Dup",
            Op::Roll => "Roll",
            Op::InN => "InN",
            Op::InC => "InC",
            Op::OutN => "OutN",
            Op::OutC => "OutC",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MachineState {
    /// A fresh machine positioned on `entry`, pointing right with the chooser to the left.
    pub fn new(entry: Point) -> MachineState {
        MachineState {
            point: entry,
            ..MachineState::default()
        }
    }
}

impl RunOutcome {
    pub fn steps(&self) -> u64 {
        match self {
            RunOutcome::Halted { steps } | RunOutcome::StepLimitReached { steps } => *steps,
        }
    }
}
