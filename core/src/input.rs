use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete event a host forwards to [`Game::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    Reset,
}

/// Axis-aligned screen rectangle in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        let dx = i64::from(x) - i64::from(self.x);
        let dy = i64::from(y) - i64::from(self.y);
        (0..i64::from(self.width)).contains(&dx) && (0..i64::from(self.height)).contains(&dy)
    }
}

/// Where the grid and the reset button sit on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerLayout {
    pub grid_size: Coord2,
    pub cell_size: u32,
    /// Top-left pixel of cell `(0, 0)`.
    pub origin: (i32, i32),
    pub reset_button: Option<Rect>,
}

impl PointerLayout {
    pub fn new(grid_size: Coord2, cell_size: u32) -> Self {
        Self {
            grid_size,
            cell_size: cell_size.max(1),
            origin: (0, 0),
            reset_button: None,
        }
    }

    pub fn with_origin(mut self, origin: (i32, i32)) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_reset_button(mut self, reset_button: Rect) -> Self {
        self.reset_button = Some(reset_button);
        self
    }

    /// Pixel span of the whole grid.
    pub fn grid_rect(&self) -> Rect {
        let (rows, cols) = self.grid_size;
        Rect::new(
            self.origin.0,
            self.origin.1,
            u32::from(cols).saturating_mul(self.cell_size),
            u32::from(rows).saturating_mul(self.cell_size),
        )
    }

    /// Cell under a pixel, `None` outside the grid or when `cell_size` is zero.
    pub fn cell_at(&self, (x, y): (i32, i32)) -> Option<Coord2> {
        let dx = i64::from(x) - i64::from(self.origin.0);
        let dy = i64::from(y) - i64::from(self.origin.1);
        if dx < 0 || dy < 0 {
            return None;
        }
        let cell_size = i64::from(self.cell_size);
        let row = Coord::try_from(dy.checked_div(cell_size)?).ok()?;
        let col = Coord::try_from(dx.checked_div(cell_size)?).ok()?;
        (row < self.grid_size.0 && col < self.grid_size.1).then_some((row, col))
    }

    /// Maps a left click to a command; the reset button wins where it overlaps the grid.
    pub fn translate(&self, pixel: (i32, i32)) -> Option<Command> {
        if self.reset_button.is_some_and(|button| button.contains(pixel)) {
            return Some(Command::Reset);
        }
        self.cell_at(pixel).map(Command::Reveal)
    }
}
