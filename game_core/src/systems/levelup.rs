use hecs::World;

use crate::config::Config;
use crate::resources::{Events, LevelState, MashTracker, Progress};
use crate::Kid;

/// Check whether the kid crossed the goal line and run the level-up
/// transition: bump the level, reset kid and mash state, arm the banner.
pub fn check_level_up(
    world: &mut World,
    tracker: &mut MashTracker,
    levels: &mut LevelState,
    events: &mut Events,
    config: &Config,
) {
    let mut won = false;
    for (_entity, kid) in world.query_mut::<&mut Kid>() {
        if kid.pos.x <= config.win_x {
            kid.reset(config);
            won = true;
        }
    }

    if won {
        levels.level_up(config);
        tracker.reset();
        events.leveled_up = true;
    }
}

/// Recompute the displayed progress from the kid's position
pub fn update_progress(world: &mut World, progress: &mut Progress, config: &Config) {
    for (_entity, kid) in world.query_mut::<&Kid>() {
        progress.percent = config.progress_percent(kid.pos.x);
    }
}
