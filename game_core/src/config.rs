use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub kid_start_x: f32,
    pub win_x: f32,
    pub mash_boost: f32,
    pub mash_accel: f32,
    pub mash_decay: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub pullback_initial: f32,
    pub pullback_step: f32,
    pub pullback_level_scale: f32,
    pub banner_frames: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            kid_start_x: Params::KID_START_X,
            win_x: Params::WIN_X,
            mash_boost: Params::MASH_BOOST,
            mash_accel: Params::MASH_ACCEL,
            mash_decay: Params::MASH_DECAY,
            damping: Params::DAMPING,
            max_speed: Params::MAX_SPEED,
            pullback_initial: Params::PULLBACK_INITIAL,
            pullback_step: Params::PULLBACK_STEP,
            pullback_level_scale: Params::PULLBACK_LEVEL_SCALE,
            banner_frames: Params::BANNER_FRAMES,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp velocity to the per-frame speed cap
    pub fn clamp_velocity(&self, vel: f32) -> f32 {
        vel.clamp(-self.max_speed, self.max_speed)
    }

    /// Kid can't be dragged past the start position on grandma's side
    pub fn clamp_kid_x(&self, x: f32) -> f32 {
        x.min(self.kid_start_x)
    }

    /// Displayed progress toward the goal line, 0..=100
    pub fn progress_percent(&self, kid_x: f32) -> u8 {
        let total = self.kid_start_x - self.win_x;
        let pulled = self.kid_start_x - kid_x;
        let percent = (pulled / total * 100.0).floor();
        percent.clamp(0.0, 100.0) as u8
    }
}
