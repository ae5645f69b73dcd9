use crate::error::GridError;
use glam::Vec2;
use std::fs::read_to_string;
use std::path::Path;

/// Square occupancy map laid over a square screen area.
///
/// Row `r`, column `c` covers the screen rectangle starting at
/// `(c * block_size, r * block_size)`. The grid is built once and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    tiles: Vec<bool>,
    screen_dimension: f32,
}

impl Grid {
    /// Build a grid from rows of `0` (empty) and `1` (occupied) tiles.
    pub fn new(rows: Vec<Vec<u8>>, screen_dimension: f32) -> Result<Self, GridError> {
        if !screen_dimension.is_finite() || screen_dimension <= 0. {
            return Err(GridError::InvalidDimension(screen_dimension));
        }

        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != size {
                return Err(GridError::MalformedGrid {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }

            for (col, &value) in line.iter().enumerate() {
                tiles.push(match value {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(GridError::InvalidTile {
                            row,
                            col,
                            value: other.to_string(),
                        })
                    }
                });
            }
        }

        Ok(Self {
            size,
            tiles,
            screen_dimension,
        })
    }

    /// Parse a text grid: one row per line, `0`/`1` per tile.
    ///
    /// Whitespace and commas inside a row are ignored, as are blank lines and
    /// lines starting with `#`.
    pub fn parse(text: &str, screen_dimension: f32) -> Result<Self, GridError> {
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| !c.is_whitespace() && *c != ',')
                    .map(|(col, tile)| match tile {
                        '0' => Ok(0),
                        '1' => Ok(1),
                        value => Err(GridError::InvalidCharacter {
                            line: index + 1,
                            column: col + 1,
                            value,
                        }),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows, screen_dimension)
    }

    pub fn load(path: impl AsRef<Path>, screen_dimension: f32) -> Result<Self, GridError> {
        let path = path.as_ref();
        log::info!("loading grid at {}", path.display());
        let grid = Self::parse(&read_to_string(path)?, screen_dimension)?;
        log::debug!(
            "grid is {0}x{0}, block size {1}",
            grid.size,
            grid.block_size()
        );
        Ok(grid)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn screen_dimension(&self) -> f32 {
        self.screen_dimension
    }

    /// Edge length of one tile in screen units.
    pub fn block_size(&self) -> f32 {
        self.screen_dimension / self.size as f32
    }

    pub fn is_occupied(&self, row: i64, col: i64) -> Result<bool, GridError> {
        let size = self.size as i64;
        if row < 0 || row >= size || col < 0 || col >= size {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(self.tiles[row as usize * self.size + col as usize])
    }

    /// Tile indices `(row, col)` of the tile containing `point`. The result
    /// may lie outside the grid.
    pub fn cell_at(&self, point: Vec2) -> (i64, i64) {
        let size = self.size as f32;
        (
            (point.y / self.screen_dimension * size).floor() as i64,
            (point.x / self.screen_dimension * size).floor() as i64,
        )
    }

    /// Occupancy of the tile containing `point`, `None` off the grid.
    pub fn occupied_at(&self, point: Vec2) -> Option<bool> {
        let (row, col) = self.cell_at(point);
        self.is_occupied(row, col).ok()
    }

    /// Every tile as `(row, col, occupied)`, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, &occupied)| (idx / self.size, idx % self.size, occupied))
    }
}
