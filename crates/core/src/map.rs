//! Map module - the fixed overworld grid
//!
//! The map is an 80x40 grid where each cell is floor, wall, or water.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..79 (left to right), y ranges 0..39
//! (top to bottom). The outer border is always wall.

use crate::rng::SimpleRng;
use crate::types::{Tile, MAP_HEIGHT, MAP_WIDTH, WATER_CHANCE};

/// Total number of cells on the map
const MAP_SIZE: usize = (MAP_WIDTH as usize) * (MAP_HEIGHT as usize);

/// The overworld map - 80 columns x 40 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// Flat array of tiles, row-major order (y * WIDTH + x)
    tiles: [Tile; MAP_SIZE],
}

impl Map {
    /// Create a map that is all floor inside a wall border.
    ///
    /// Useful as a blank canvas in tests; gameplay maps come from
    /// [`Map::generate`].
    pub fn empty() -> Self {
        let mut map = Self {
            tiles: [Tile::Floor; MAP_SIZE],
        };
        map.build_border();
        map
    }

    /// Generate the overworld: border walls, interior cells water with
    /// `WATER_CHANCE`% probability, floor otherwise.
    ///
    /// Each interior cell is an independent Bernoulli trial; there is no
    /// clustering. Deterministic given the RNG's seed.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut map = Self {
            tiles: [Tile::Floor; MAP_SIZE],
        };

        for y in 0..MAP_HEIGHT as i8 {
            for x in 0..MAP_WIDTH as i8 {
                let tile = if Self::is_border(x, y) {
                    Tile::Wall
                } else if rng.roll_percent(WATER_CHANCE) {
                    Tile::Water
                } else {
                    Tile::Floor
                };
                map.set(x, y, tile);
            }
        }

        map
    }

    fn build_border(&mut self) {
        for y in 0..MAP_HEIGHT as i8 {
            for x in 0..MAP_WIDTH as i8 {
                if Self::is_border(x, y) {
                    self.set(x, y, Tile::Wall);
                }
            }
        }
    }

    fn is_border(x: i8, y: i8) -> bool {
        y == 0 || y == MAP_HEIGHT as i8 - 1 || x == 0 || x == MAP_WIDTH as i8 - 1
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= MAP_WIDTH as i8 || y < 0 || y >= MAP_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (MAP_WIDTH as usize) + (x as usize))
    }

    /// Get width of the map
    pub fn width(&self) -> u8 {
        MAP_WIDTH
    }

    /// Get height of the map
    pub fn height(&self) -> u8 {
        MAP_HEIGHT
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if position is within map bounds
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Check if the player may stand at (x, y): in bounds and floor.
    pub fn is_passable(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some_and(|tile| tile.is_passable())
    }
}
