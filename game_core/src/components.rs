use glam::Vec2;

use crate::config::Config;
use crate::params::Params;

/// Kid component - the player-controlled puller
#[derive(Debug, Clone, Copy)]
pub struct Kid {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: f32, // Horizontal only; negative pulls toward the goal line
    pub base_speed: f32,
}

impl Kid {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.kid_start_x, Params::KID_Y),
            size: Vec2::new(Params::KID_WIDTH, Params::KID_HEIGHT),
            vel: 0.0,
            base_speed: Params::KID_BASE_SPEED,
        }
    }

    /// Put the kid back at grandma's side with no momentum
    pub fn reset(&mut self, config: &Config) {
        self.pos.x = config.kid_start_x;
        self.vel = 0.0;
    }
}

/// Grandma component - fixed anchor on the right, never moves
#[derive(Debug, Clone, Copy)]
pub struct Grandma {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Grandma {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(Params::GRANDMA_X, Params::GRANDMA_Y),
            size: Vec2::new(Params::GRANDMA_WIDTH, Params::GRANDMA_HEIGHT),
        }
    }

    /// Where the arm attaches to grandma's fist
    pub fn hand(&self) -> Vec2 {
        self.pos + Vec2::new(20.0, 47.5)
    }
}

impl Default for Grandma {
    fn default() -> Self {
        Self::new()
    }
}

/// Bag component - size only; its drawn position follows the kid
#[derive(Debug, Clone, Copy)]
pub struct Bag {
    pub size: Vec2,
}

impl Bag {
    pub fn new() -> Self {
        Self {
            size: Vec2::new(Params::BAG_WIDTH, Params::BAG_HEIGHT),
        }
    }

    /// Derived per frame: just right of the kid, at grandma's arm height
    pub fn position(kid: &Kid, grandma: &Grandma) -> Vec2 {
        Vec2::new(kid.pos.x + kid.size.x + 5.0, grandma.pos.y + 35.0)
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}
