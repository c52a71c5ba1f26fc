// Static tile grid the player collides with

use crate::core::math::Rect;

/// Edge length of a regular tile, in pixels
pub const TILE_SIZE: u32 = 48;

/// Height of the thicker tiles on the bottom (ground) row, in pixels
pub const GROUND_HEIGHT: u32 = 64;

/// Tile map construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("Map has no tiles")]
    Empty,

    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown tile id {id} at ({x}, {y})")]
    UnknownTile { id: u8, x: usize, y: usize },
}

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
}

impl Tile {
    /// Decode a raw tile id (0 = empty, 1 = solid)
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Empty),
            1 => Some(Self::Solid),
            _ => None,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// Read-only queries the movement integrator needs from a level
pub trait CollisionMap {
    /// Width in tiles
    fn width(&self) -> usize;

    /// Height in tiles
    fn height(&self) -> usize;

    fn tile_size(&self) -> u32;

    fn ground_height(&self) -> u32;

    /// Whether the tile at column `x`, row `y` blocks movement.
    /// Out-of-range coordinates are never solid.
    fn is_solid(&self, x: usize, y: usize) -> bool;

    /// World-space rectangle of a tile. Bottom-row tiles are `ground_height`
    /// tall and grow upward from the row's bottom edge.
    fn tile_rect(&self, x: usize, y: usize) -> Rect {
        let size = self.tile_size() as f32;
        let tile_height = if y + 1 == self.height() {
            self.ground_height() as f32
        } else {
            size
        };
        let top = y as f32 * size + (size - tile_height);
        Rect::new(x as f32 * size, top, size, tile_height)
    }

    /// Lowest allowed top edge for an entity of the given height
    fn floor_limit(&self, entity_height: f32) -> f32 {
        (self.height() as u32 * self.tile_size()) as f32
            - self.ground_height() as f32
            - entity_height
    }
}

/// Immutable grid of tiles, row-major, row 0 at the top
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    tile_size: u32,
    ground_height: u32,
}

impl TileMap {
    /// Build a map from rows of raw tile ids using the default geometry
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        Self::new(rows, TILE_SIZE, GROUND_HEIGHT)
    }

    /// Build a map from rows of raw tile ids
    pub fn new<R: AsRef<[u8]>>(
        rows: &[R],
        tile_size: u32,
        ground_height: u32,
    ) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, &id) in row.iter().enumerate() {
                let tile = Tile::from_id(id).ok_or(MapError::UnknownTile { id, x, y })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            width,
            height,
            tile_size,
            ground_height,
        })
    }

    /// Demo level: a solid ground row with a few floating platforms
    pub fn demo() -> Result<Self, MapError> {
        const ROWS: [[u8; 20]; 12] = [
            [0; 20],
            [0; 20],
            [0; 20],
            [0; 20],
            [0; 20],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0],
            [0; 20],
            [0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0; 20],
            [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
            [0; 20],
            [1; 20],
        ];
        Self::from_rows(&ROWS)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }
}

impl CollisionMap for TileMap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn ground_height(&self) -> u32 {
        self.ground_height
    }

    fn is_solid(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|tile| tile.is_solid())
    }
}
