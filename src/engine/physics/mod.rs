// Kinematic movement against a static tile map

pub mod body;
pub mod tile_map;

pub use body::{KinematicBody, MoveIntent, MovementConfig, DEFAULT_MOVEMENT};
pub use tile_map::{CollisionMap, MapError, Tile, TileMap, GROUND_HEIGHT, TILE_SIZE};
