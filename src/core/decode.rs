use crate::core::color::{Color, color_delta};
use crate::core::models::Op;

/// Indexed by `[hue_step][lightness_step]`.
const OPCODE_TABLE: [[Op; 3]; 6] = [
    [Op::Nop, Op::Push, Op::Pop],
    [Op::Add, Op::Sub, Op::Mul],
    [Op::Div, Op::Mod, Op::Not],
    [Op::Greater, Op::Pointer, Op::Switch],
    [Op::Dup, Op::Roll, Op::InN],
    [Op::InC, Op::OutN, Op::OutC],
];

/// The operation performed when leaving a `current` block for a `next` block.
pub fn decode(current: Color, next: Color) -> Op {
    match color_delta(current, next) {
        Some(delta) => OPCODE_TABLE[delta.hue_step as usize][delta.lightness_step as usize],
        None => Op::Nop,
    }
}
