use crate::config::Config;

/// The two keys that count toward mashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MashKey {
    Left,
    Right,
}

/// Input accumulator for alternating key presses
///
/// Power is gained only on a fresh press of a key different from the last
/// recorded one; holding a key (auto-repeat) or pressing the same key twice
/// adds nothing. Power decays geometrically each frame it is spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MashTracker {
    pub last_key: Option<MashKey>,
    pub power: f32,
}

impl MashTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Returns true if it added power.
    pub fn key_down(&mut self, key: MashKey, repeat: bool, config: &Config) -> bool {
        if repeat {
            return false;
        }
        if self.last_key == Some(key) {
            return false;
        }
        self.last_key = Some(key);
        self.power += config.mash_boost;
        true
    }

    /// Forget everything (used on level-up)
    pub fn reset(&mut self) {
        self.last_key = None;
        self.power = 0.0;
    }
}

/// Level progression state
#[derive(Debug, Clone, Copy)]
pub struct LevelState {
    pub level: u32,
    pub pullback: f32,
    pub banner: u32, // Frames left on the level-up banner
}

impl LevelState {
    pub fn new(config: &Config) -> Self {
        Self {
            level: 1,
            pullback: config.pullback_initial,
            banner: 0,
        }
    }

    /// Grandma's rightward acceleration this frame, scaled by level
    pub fn current_pullback(&self, config: &Config) -> f32 {
        self.pullback * (1.0 + self.level as f32 * config.pullback_level_scale)
    }

    /// Advance to the next level and arm the banner
    pub fn level_up(&mut self, config: &Config) {
        self.level += 1;
        self.pullback += config.pullback_step;
        self.banner = config.banner_frames;
    }

    pub fn banner_active(&self) -> bool {
        self.banner > 0
    }

    /// Burn one frame of banner time
    pub fn tick_banner(&mut self) {
        if self.banner > 0 {
            self.banner -= 1;
        }
    }
}

/// Displayed progress toward the goal line
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    pub percent: u8, // 0..=100
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub leveled_up: bool,
    pub hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.leveled_up = false;
        self.hit_wall = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_presses_add_power() {
        let config = Config::new();
        let mut tracker = MashTracker::new();

        assert!(tracker.key_down(MashKey::Left, false, &config));
        assert!(tracker.key_down(MashKey::Right, false, &config));
        assert!(tracker.key_down(MashKey::Left, false, &config));
        assert_eq!(tracker.power, 12.0);
    }

    #[test]
    fn test_same_key_adds_power_once() {
        let config = Config::new();
        let mut tracker = MashTracker::new();

        assert!(tracker.key_down(MashKey::Left, false, &config));
        assert!(!tracker.key_down(MashKey::Left, false, &config));
        assert!(!tracker.key_down(MashKey::Left, false, &config));
        assert_eq!(tracker.power, 4.0, "Same key counts only on the first press");
    }

    #[test]
    fn test_auto_repeat_adds_nothing() {
        let config = Config::new();
        let mut tracker = MashTracker::new();

        tracker.key_down(MashKey::Left, false, &config);
        assert!(!tracker.key_down(MashKey::Right, true, &config));
        assert_eq!(tracker.power, 4.0, "Repeat flag ignores even an alternation");
        assert_eq!(
            tracker.last_key,
            Some(MashKey::Left),
            "Repeats don't update the recorded key"
        );
    }

    #[test]
    fn test_tracker_reset() {
        let config = Config::new();
        let mut tracker = MashTracker::new();
        tracker.key_down(MashKey::Left, false, &config);

        tracker.reset();

        assert_eq!(tracker.last_key, None);
        assert_eq!(tracker.power, 0.0);
    }

    #[test]
    fn test_level_up_progression() {
        let config = Config::new();
        let mut levels = LevelState::new(&config);
        assert_eq!(levels.level, 1);
        assert_eq!(levels.banner, 0);

        levels.level_up(&config);

        assert_eq!(levels.level, 2);
        assert!((levels.pullback - 0.325).abs() < 1e-6);
        assert_eq!(levels.banner, 60);
    }

    #[test]
    fn test_current_pullback_scales_with_level() {
        let config = Config::new();
        let mut levels = LevelState::new(&config);
        let at_one = levels.current_pullback(&config);
        assert!((at_one - 0.3 * 1.035).abs() < 1e-6);

        levels.level_up(&config);
        let at_two = levels.current_pullback(&config);
        assert!((at_two - 0.325 * 1.07).abs() < 1e-6);
        assert!(at_two > at_one, "Pull gets harder every level");
    }

    #[test]
    fn test_banner_ticks_to_zero() {
        let config = Config::new();
        let mut levels = LevelState::new(&config);
        levels.level_up(&config);

        for _ in 0..60 {
            assert!(levels.banner_active());
            levels.tick_banner();
        }
        assert!(!levels.banner_active());
        levels.tick_banner();
        assert_eq!(levels.banner, 0, "Never underflows");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.leveled_up = true;
        events.hit_wall = true;

        events.clear();

        assert!(!events.leveled_up);
        assert!(!events.hit_wall);
    }
}
