use hecs::World;

use crate::config::Config;
use crate::resources::{Events, LevelState, MashTracker};
use crate::Kid;

/// Spend accumulated mash power as a leftward impulse
pub fn apply_mash(world: &mut World, tracker: &mut MashTracker, config: &Config) {
    if tracker.power <= 0.0 {
        return;
    }
    for (_entity, kid) in world.query_mut::<&mut Kid>() {
        kid.vel -= tracker.power * config.mash_accel;
    }
    tracker.power *= config.mash_decay;
}

/// Grandma's constant rightward pull, scaled by the current level
pub fn apply_pullback(world: &mut World, levels: &LevelState, config: &Config) {
    let pullback = levels.current_pullback(config);
    for (_entity, kid) in world.query_mut::<&mut Kid>() {
        kid.vel += pullback;
    }
}

/// Damp, clamp, and integrate the kid's velocity into position
pub fn integrate(world: &mut World, events: &mut Events, config: &Config) {
    for (_entity, kid) in world.query_mut::<&mut Kid>() {
        kid.vel *= config.damping;
        kid.vel = config.clamp_velocity(kid.vel);
        kid.pos.x += kid.vel;

        // Can't be dragged past grandma; kill any rightward residual
        if kid.pos.x > config.kid_start_x {
            kid.pos.x = config.kid_start_x;
            kid.vel = kid.vel.max(0.0);
            events.hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_kid;

    fn setup() -> (World, MashTracker, LevelState, Events, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_kid(&mut world, &config);
        let tracker = MashTracker::new();
        let levels = LevelState::new(&config);
        (world, tracker, levels, Events::new(), config)
    }

    fn kid_of(world: &World) -> Kid {
        world.query::<&Kid>().iter().next().map(|(_e, k)| *k).unwrap()
    }

    #[test]
    fn test_mash_pulls_left_and_decays() {
        let (mut world, mut tracker, _levels, _events, config) = setup();
        tracker.power = 4.0;

        apply_mash(&mut world, &mut tracker, &config);

        let kid = kid_of(&world);
        assert!((kid.vel - (-0.6)).abs() < 1e-6, "4.0 * 0.15 leftward");
        assert!((tracker.power - 3.6).abs() < 1e-6, "Power decayed by 0.90");
    }

    #[test]
    fn test_zero_power_leaves_velocity_alone() {
        let (mut world, mut tracker, _levels, _events, config) = setup();

        apply_mash(&mut world, &mut tracker, &config);

        assert_eq!(kid_of(&world).vel, 0.0);
        assert_eq!(tracker.power, 0.0, "No decay when nothing accumulated");
    }

    #[test]
    fn test_pullback_pushes_right() {
        let (mut world, _tracker, levels, _events, config) = setup();

        apply_pullback(&mut world, &levels, &config);

        let expected = 0.3 * (1.0 + 0.035);
        assert!((kid_of(&world).vel - expected).abs() < 1e-6);
    }

    #[test]
    fn test_integrate_damps_and_clamps() {
        let (mut world, _tracker, _levels, mut events, config) = setup();
        for (_e, kid) in world.query_mut::<&mut Kid>() {
            kid.pos.x = 400.0;
            kid.vel = -10.0;
        }

        integrate(&mut world, &mut events, &config);

        let kid = kid_of(&world);
        assert_eq!(kid.vel, -2.0, "Clamped after damping");
        assert_eq!(kid.pos.x, 398.0);
        assert!(!events.hit_wall);
    }

    #[test]
    fn test_wall_stops_rightward_drift() {
        let (mut world, _tracker, _levels, mut events, config) = setup();
        for (_e, kid) in world.query_mut::<&mut Kid>() {
            kid.pos.x = 619.9;
            kid.vel = 1.0;
        }

        integrate(&mut world, &mut events, &config);

        let kid = kid_of(&world);
        assert_eq!(kid.pos.x, 620.0, "Pinned at the wall");
        assert!(kid.vel >= 0.0);
        assert!(events.hit_wall);
    }

    #[test]
    fn test_wall_keeps_leftward_momentum() {
        let (mut world, _tracker, _levels, mut events, config) = setup();
        for (_e, kid) in world.query_mut::<&mut Kid>() {
            kid.pos.x = 500.0;
            kid.vel = -1.0;
        }

        integrate(&mut world, &mut events, &config);

        let kid = kid_of(&world);
        assert!(kid.vel < 0.0, "Leftward velocity survives away from the wall");
        assert!(!events.hit_wall);
    }
}
