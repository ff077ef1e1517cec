mod bounded_grid;
mod bounds;
mod color;
mod consts;
mod decode;
mod error;
mod io;
mod models;
mod navigation;
mod region;
mod stack;
mod stack_machine;
mod update;

pub use bounded_grid::{BoundedGrid, ColorGrid};
pub use bounds::BoundsOriginRoot;
pub use color::{Color, ColorDelta, Hue, Lightness, color_delta};
pub use consts::*;
pub use decode::decode;
pub use error::{GridError, PietError};
pub use io::{ConsoleIo, PietIo};
pub use models::{CodelChooser, Direction, MachineState, Op, Point, RunOutcome, StepRecord, StepUpdate};
pub use navigation::{Candidate, RECOVERY_SEQUENCE, Recovery, advance, is_unmovable, navigate};
pub use region::{Region, find_region};
pub use stack::Stack;
pub use stack_machine::{execute, floor_mod};
pub use update::{run, run_with, step};
