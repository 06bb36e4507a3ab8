use super::direction::Direction;

/// A grid cell, in cell units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Top-left corner in pixels.
    pub fn to_pixels(self, cell_size: i32) -> (i32, i32) {
        (self.x * cell_size, self.y * cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let c = Cell::new(3, 3);
        assert_eq!(c.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(c.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(c.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(c.step(Direction::Right), Cell::new(4, 3));
    }

    #[test]
    fn pixels_are_grid_aligned() {
        assert_eq!(Cell::new(24, 0).to_pixels(25), (600, 0));
        assert_eq!(Cell::new(-1, 2).to_pixels(25), (-25, 50));
    }
}
