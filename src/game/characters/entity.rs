// Player entity - the physical body that walks and jumps around the map

use glam::Vec2;
use log::trace;

use super::character::Gender;
use super::state::{MotionState, MotionStateMachine};
use crate::core::math::Rect;
use crate::engine::physics::{CollisionMap, KinematicBody, MoveIntent, MovementConfig};

/// On-map representation of the player.
///
/// Lives independently of [`super::Player`]; the two only share the gender
/// tag used for drawing.
#[derive(Debug)]
pub struct PlayerEntity {
    body: KinematicBody,
    motion: MotionStateMachine,
    config: MovementConfig,
    gender: Gender,
    spawn: Vec2,
}

impl PlayerEntity {
    pub fn new(spawn: Vec2, gender: Gender) -> Self {
        Self::with_config(spawn, gender, MovementConfig::default())
    }

    pub fn with_config(spawn: Vec2, gender: Gender, config: MovementConfig) -> Self {
        Self {
            body: KinematicBody::new(spawn, config.width, config.height),
            motion: MotionStateMachine::new(),
            config,
            gender,
            spawn,
        }
    }

    /// Integrate one tick of movement
    pub fn update(&mut self, map: &impl CollisionMap, intent: MoveIntent, dt: f32) {
        self.body.step(map, intent, &self.config, dt);
        self.motion.update(dt, self.body.on_ground());

        if self.motion.just_landed() {
            trace!("Landed at ({:.1}, {:.1})", self.body.position.x, self.body.position.y);
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground()
    }

    pub fn state(&self) -> MotionState {
        self.motion.state()
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Put the entity back at its spawn point, at rest
    pub fn respawn(&mut self) {
        self.body = KinematicBody::new(self.spawn, self.config.width, self.config.height);
        self.motion.reset();
    }
}
