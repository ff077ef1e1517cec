use std::collections::VecDeque;

use crate::core::bounded_grid::{BoundedGrid, ColorGrid};
use crate::core::color::Color;
use crate::core::models::{CodelChooser, Direction, Point};

/// A maximal 4-connected block of one color, recomputed on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub color: Color,
    /// Members in flood-fill order; the starting codel comes first.
    pub codels: Vec<Point>,
}

/// Flood fills the block containing `start`. `None` if `start` is outside the grid.
pub fn find_region(grid: &ColorGrid, start: Point) -> Option<Region> {
    let color = *grid.get(&start)?;

    let mut visited = BoundedGrid::new(grid.size(), false);
    let mut queue = VecDeque::new();
    let mut codels = Vec::new();

    visited[&start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        codels.push(current);
        for dir in Direction::ALL {
            let neighbor = current + dir.offset();
            if grid.get(&neighbor) != Some(&color) || visited[&neighbor] {
                continue;
            }
            visited[&neighbor] = true;
            queue.push_back(neighbor);
        }
    }

    Some(Region { color, codels })
}

impl Region {
    pub fn area(&self) -> usize {
        self.codels.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.codels.contains(point)
    }

    /// The codels on the edge `dp` points at.
    pub fn boundary(&self, dp: Direction) -> Vec<Point> {
        let Some(furthest) = self.codels.iter().map(|p| along(dp, p)).max() else {
            return Vec::new();
        };
        self.codels
            .iter()
            .copied()
            .filter(|p| along(dp, p) == furthest)
            .collect()
    }

    /// The boundary codel selected by `dp`, with `cc` breaking ties along the perpendicular axis.
    ///
    /// | dp    | cc left | cc right |
    /// |-------|---------|----------|
    /// | right | min y   | max y    |
    /// | down  | min x   | max x    |
    /// | left  | max y   | min y    |
    /// | up    | max x   | min x    |
    pub fn exit_codel(&self, dp: Direction, cc: CodelChooser) -> Option<Point> {
        self.boundary(dp)
            .into_iter()
            .max_by_key(|p| across(dp, cc, p))
    }
}

/// Larger is further in the direction of `dp`.
fn along(dp: Direction, p: &Point) -> i32 {
    match dp {
        Direction::Right => p.x,
        Direction::Down => p.y,
        Direction::Left => -p.x,
        Direction::Up => -p.y,
    }
}

/// Larger wins the tie between boundary codels.
fn across(dp: Direction, cc: CodelChooser, p: &Point) -> i32 {
    match (dp, cc) {
        (Direction::Right, CodelChooser::Left) => -p.y,
        (Direction::Right, CodelChooser::Right) => p.y,
        (Direction::Down, CodelChooser::Left) => -p.x,
        (Direction::Down, CodelChooser::Right) => p.x,
        (Direction::Left, CodelChooser::Left) => p.y,
        (Direction::Left, CodelChooser::Right) => -p.y,
        (Direction::Up, CodelChooser::Left) => p.x,
        (Direction::Up, CodelChooser::Right) => -p.x,
    }
}
