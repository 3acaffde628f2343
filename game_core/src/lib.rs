pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the tug-of-war simulation by exactly one display frame.
///
/// All tuning constants are per-frame factors, so there is no dt here;
/// the host is expected to call this once per animation callback.
pub fn step(
    world: &mut World,
    tracker: &mut MashTracker,
    levels: &mut LevelState,
    progress: &mut Progress,
    events: &mut Events,
    config: &Config,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Spend mash power as leftward velocity
    apply_mash(world, tracker, config);

    // 2. Grandma pulls back toward her side
    apply_pullback(world, levels, config);

    // 3. Damping, velocity clamp, position update, wall clamp
    integrate(world, events, config);

    // 4. Win check and level-up transition
    check_level_up(world, tracker, levels, events, config);

    // 5. Progress runs after the win check so a winning frame reads 0%
    update_progress(world, progress, config);
}

/// Helper to create the kid entity
pub fn create_kid(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Kid::new(config),))
}

/// Helper to create the grandma entity
pub fn create_grandma(world: &mut World) -> hecs::Entity {
    world.spawn((Grandma::new(),))
}

/// Helper to create the bag entity
pub fn create_bag(world: &mut World) -> hecs::Entity {
    world.spawn((Bag::new(),))
}
