/// Game tuning parameters for the tug-of-war
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 250.0;

    // Kid
    pub const KID_START_X: f32 = 620.0;
    pub const KID_Y: f32 = 90.0;
    pub const KID_WIDTH: f32 = 40.0;
    pub const KID_HEIGHT: f32 = 60.0;
    pub const KID_BASE_SPEED: f32 = 1.2;

    // Grandma
    pub const GRANDMA_X: f32 = 720.0;
    pub const GRANDMA_Y: f32 = 90.0;
    pub const GRANDMA_WIDTH: f32 = 50.0;
    pub const GRANDMA_HEIGHT: f32 = 80.0;

    // Bag
    pub const BAG_WIDTH: f32 = 30.0;
    pub const BAG_HEIGHT: f32 = 25.0;

    // Tug physics (per display frame, ~60 Hz)
    pub const MASH_BOOST: f32 = 4.0; // Power gained per alternating press
    pub const MASH_ACCEL: f32 = 0.15; // Power to leftward velocity
    pub const MASH_DECAY: f32 = 0.90; // Power multiplier each frame
    pub const DAMPING: f32 = 0.96;
    pub const MAX_SPEED: f32 = 2.0; // Velocity clamp, both directions

    // Levels
    pub const WIN_X: f32 = 150.0; // Fixed goal line for all levels
    pub const PULLBACK_INITIAL: f32 = 0.3;
    pub const PULLBACK_STEP: f32 = 0.025; // Added on each level-up
    pub const PULLBACK_LEVEL_SCALE: f32 = 0.035;
    pub const BANNER_FRAMES: u32 = 60; // ~1 second banner
}
