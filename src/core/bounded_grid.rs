use crate::core::bounds::BoundsOriginRoot;
use crate::core::color::Color;
use crate::core::error::GridError;
use crate::core::models::Point;

/// Row-major grid of cells. Never resized once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

/// A Piet program, one color per codel.
pub type ColorGrid = BoundedGrid<Color>;

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let bounds = BoundsOriginRoot::new(width, height);
        if cells.len() != bounds.area() as usize {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(BoundedGrid { bounds, cells })
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len() as i32;
        let width = rows.first().map(|row| row.len()).unwrap_or(0) as i32;
        if let Some(row) = rows.iter().position(|row| row.len() as i32 != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width as usize,
                actual: rows[row].len(),
            });
        }
        BoundedGrid::from_cells(width, height, rows.into_iter().flatten().collect())
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn contains(&self, pos: &Point) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Point) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.width() as usize)
    }
}

impl BoundedGrid<Color> {
    /// The color at `(x, y)`, or `None` outside the grid.
    pub fn at(&self, x: i32, y: i32) -> Option<Color> {
        self.get(&Point::new(x, y)).copied()
    }
}

impl<T> std::ops::Index<&Point> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Point) -> &Self::Output {
        &self.cells[self.bounds.offset_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Point> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Point) -> &mut Self::Output {
        let offset = self.bounds.offset_of(index);
        &mut self.cells[offset]
    }
}
