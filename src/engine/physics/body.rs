use glam::Vec2;

use super::tile_map::CollisionMap;
use crate::core::math::Rect;

/// Tuning values for the player's kinematic body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Horizontal speed while a direction is held (pixels/second)
    pub move_speed: f32,
    /// Upward speed applied on jump (pixels/second)
    pub jump_impulse: f32,
    /// Downward acceleration (pixels/second²)
    pub gravity: f32,
    /// Bounding box width in pixels
    pub width: f32,
    /// Bounding box height in pixels
    pub height: f32,
}

/// The movement tuning used by the player
pub const DEFAULT_MOVEMENT: MovementConfig = MovementConfig {
    move_speed: 180.0,
    jump_impulse: 520.0,
    gravity: 900.0,
    width: 32.0,
    height: 48.0,
};

impl Default for MovementConfig {
    fn default() -> Self {
        DEFAULT_MOVEMENT
    }
}

/// What the player wants to do this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Axis-aligned body integrated against a tile map.
///
/// Coordinates are in pixels with y growing downward; `position` is the
/// top-left corner of the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    on_ground: bool,
    width: f32,
    height: f32,
}

impl KinematicBody {
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            on_ground: false,
            width,
            height,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_position(self.position, self.width, self.height)
    }

    /// Advance the body by one tick.
    ///
    /// Horizontal velocity comes straight from the intent. Only downward
    /// landings on tile tops are resolved; the body passes through tiles
    /// sideways and from below. The map floor is a hard limit.
    pub fn step(
        &mut self,
        map: &impl CollisionMap,
        intent: MoveIntent,
        config: &MovementConfig,
        dt: f32,
    ) {
        self.velocity.x = if intent.left {
            -config.move_speed
        } else if intent.right {
            config.move_speed
        } else {
            0.0
        };

        if intent.jump && self.on_ground {
            self.velocity.y = -config.jump_impulse;
            self.on_ground = false;
        }

        self.velocity.y += config.gravity * dt;

        let mut next = self.position + self.velocity * dt;
        let next_bounds = Rect::from_position(next, self.width, self.height);
        let bottom = self.position.y + self.height;

        // Grounded is re-earned every tick
        self.on_ground = false;
        for y in 0..map.height() {
            for x in 0..map.width() {
                if !map.is_solid(x, y) {
                    continue;
                }
                let tile = map.tile_rect(x, y);
                // Velocity is zeroed by a landing, so later tiles in the scan cannot re-snap
                if next_bounds.intersects(&tile) && bottom <= tile.top() && self.velocity.y > 0.0
                {
                    next.y = tile.top() - self.height;
                    self.velocity.y = 0.0;
                    self.on_ground = true;
                }
            }
        }

        let floor = map.floor_limit(self.height);
        if next.y > floor {
            next.y = floor;
            self.velocity.y = 0.0;
            self.on_ground = true;
        }

        self.position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::tile_map::TileMap;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    /// 10 rows x 5 columns, one floating tile at column 2, row 5 (top edge y = 240)
    fn platform_map() -> TileMap {
        let mut rows = vec![[0u8; 5]; 10];
        rows[5][2] = 1;
        TileMap::from_rows(&rows).unwrap()
    }

    fn empty_map() -> TileMap {
        TileMap::from_rows(&[[0u8; 3]; 4]).unwrap()
    }

    fn body_at(x: f32, y: f32) -> KinematicBody {
        KinematicBody::new(Vec2::new(x, y), DEFAULT_MOVEMENT.width, DEFAULT_MOVEMENT.height)
    }

    fn idle() -> MoveIntent {
        MoveIntent::default()
    }

    #[test]
    fn test_default_movement() {
        let config = MovementConfig::default();
        assert_eq!(config.move_speed, 180.0);
        assert_eq!(config.jump_impulse, 520.0);
        assert_eq!(config.gravity, 900.0);
        assert_eq!(config.width, 32.0);
        assert_eq!(config.height, 48.0);
    }

    #[test]
    fn test_horizontal_velocity_follows_intent() {
        let map = empty_map();
        let mut body = body_at(0.0, 0.0);

        let right = MoveIntent {
            right: true,
            ..Default::default()
        };
        body.step(&map, right, &DEFAULT_MOVEMENT, DT);
        assert_eq!(body.velocity.x, 180.0);

        let left = MoveIntent {
            left: true,
            ..Default::default()
        };
        body.step(&map, left, &DEFAULT_MOVEMENT, DT);
        assert_eq!(body.velocity.x, -180.0);

        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let map = empty_map();
        let mut body = body_at(0.0, 0.0);
        let both = MoveIntent {
            left: true,
            right: true,
            jump: false,
        };
        body.step(&map, both, &DEFAULT_MOVEMENT, DT);
        assert_eq!(body.velocity.x, -180.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let map = platform_map();
        let mut body = body_at(0.0, 0.0);

        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert_relative_eq!(body.velocity.y, 15.0, epsilon = 1e-4);
        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert_relative_eq!(body.velocity.y, 30.0, epsilon = 1e-4);
        assert!(!body.on_ground());
    }

    #[test]
    fn test_falls_onto_tile_top() {
        let map = platform_map();
        // One tile height above the tile's top edge
        let mut body = body_at(104.0, 240.0 - 48.0 - 48.0);

        let mut ticks = 0;
        while !body.on_ground() && ticks < 120 {
            body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
            ticks += 1;
        }

        assert!(body.on_ground());
        assert!(ticks < 60, "Landing took {} ticks", ticks);
        assert_eq!(body.position.y, 192.0);
        assert_eq!(body.bounds().bottom(), 240.0);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.x, 104.0);
    }

    #[test]
    fn test_stays_on_floating_tile() {
        let map = platform_map();
        let mut body = body_at(104.0, 192.0);
        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert!(body.on_ground());

        for _ in 0..30 {
            body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
            assert!(body.on_ground());
            assert_eq!(body.position.y, 192.0);
            assert_eq!(body.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_jump_only_from_ground() {
        let map = empty_map();
        let floor = map.floor_limit(48.0);
        let mut body = body_at(0.0, floor);
        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert!(body.on_ground());

        let jump = MoveIntent {
            jump: true,
            ..Default::default()
        };
        body.step(&map, jump, &DEFAULT_MOVEMENT, DT);
        assert!(!body.on_ground());
        assert_relative_eq!(body.velocity.y, -505.0, epsilon = 1e-3);
        assert!(body.position.y < floor);

        // Holding jump in the air does not re-trigger the impulse
        let before = body.velocity.y;
        body.step(&map, jump, &DEFAULT_MOVEMENT, DT);
        assert_relative_eq!(body.velocity.y, before + 15.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rising_through_tile_is_not_resolved() {
        let map = platform_map();
        // Just below the tile, moving up fast
        let mut body = body_at(104.0, 290.0);
        body.velocity.y = -400.0;

        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert!(!body.on_ground());
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_embedded_body_is_not_snapped() {
        let map = platform_map();
        // Bottom edge already below the tile top
        let mut body = body_at(104.0, 200.0);
        body.velocity.y = 60.0;

        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert!(!body.on_ground());
        assert!(body.position.y > 200.0);
    }

    #[test]
    fn test_no_horizontal_collision() {
        let map = platform_map();
        // Level with the tile, walking right into it
        let mut body = body_at(50.0, 240.0);
        let right = MoveIntent {
            right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            body.step(&map, right, &DEFAULT_MOVEMENT, DT);
        }
        assert!(body.position.x > 96.0);
    }

    #[test]
    fn test_fast_fall_across_stacked_tiles_lands_on_upper() {
        // Tiles at rows 5 and 6 of column 2 (tops 240 and 288)
        let mut rows = vec![[0u8; 5]; 10];
        rows[5][2] = 1;
        rows[6][2] = 1;
        let map = TileMap::from_rows(&rows).unwrap();

        let mut body = body_at(104.0, 180.0);
        body.velocity.y = 6000.0;
        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);

        // The tentative box overlapped both tiles; the first one in scan order wins
        assert!(body.on_ground());
        assert_eq!(body.position.y, 192.0);
        assert_eq!(body.bounds().bottom(), 240.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_floor_clamp_holds_every_tick() {
        let map = empty_map();
        let floor = map.floor_limit(48.0);
        assert_eq!(floor, 80.0);

        let mut body = body_at(0.0, 200.0);
        body.velocity.y = 300.0;
        for _ in 0..10 {
            body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
            assert_eq!(body.position.y, floor);
            assert_eq!(body.velocity.y, 0.0);
            assert!(body.on_ground());
        }
    }

    #[test]
    fn test_walking_off_ledge_becomes_airborne() {
        let map = platform_map();
        let mut body = body_at(104.0, 192.0);
        body.step(&map, idle(), &DEFAULT_MOVEMENT, DT);
        assert!(body.on_ground());

        let right = MoveIntent {
            right: true,
            ..Default::default()
        };
        let mut left_ground = false;
        for _ in 0..30 {
            body.step(&map, right, &DEFAULT_MOVEMENT, DT);
            if !body.on_ground() {
                left_ground = true;
                break;
            }
        }
        assert!(left_ground);
    }
}
