//! Simulation constants and tuning parameters.

// --- Shooting ---

/// Minimum frames between player bullets while the shoot intent is held.
pub const BULLET_COOLDOWN_FRAMES: u64 = 20;

/// Special-ability cooldown in frames.
pub const SPECIAL_COOLDOWN_FRAMES: u32 = 60;

/// Number of bullets in the special-ability ring (45 degrees apart).
pub const SPECIAL_BULLET_COUNT: u32 = 8;

/// Lifespan of special-ability bullets in frames.
pub const SPECIAL_BULLET_LIFESPAN_FRAMES: i32 = 60;

/// Special bullets are this multiple of the player's radius.
pub const SPECIAL_BULLET_RADIUS_FACTOR: f32 = 2.0;

// --- Scoring ---

/// Score value per enemy vertex.
pub const ENEMY_SCORE_PER_POINT: u32 = 100;

/// Small enemies are worth this multiple of their parent's score value.
pub const SMALL_ENEMY_SCORE_MULTIPLIER: u32 = 2;

/// Flat score for a special bullet destroying an enemy.
pub const SPECIAL_HIT_ENEMY_SCORE: u32 = 1;

/// Flat score for a special bullet destroying a small enemy.
pub const SPECIAL_HIT_SMALL_ENEMY_SCORE: u32 = 2;

// --- Derived enemies ---

/// Lifespan of small enemies in frames (one second at 60 FPS).
pub const SMALL_ENEMY_LIFESPAN_FRAMES: i32 = 60;

/// Small enemies are this fraction of their parent's radius.
pub const SMALL_ENEMY_RADIUS_FACTOR: f32 = 0.5;

// --- Display ---

/// Degrees of rotation applied to every transform each simulated frame.
pub const ROTATION_DEGREES_PER_FRAME: f32 = 1.0;

/// Fully opaque alpha for entities without a lifespan fade.
pub const ALPHA_OPAQUE: u8 = 255;

// --- Frame loop ---

/// Frame-rate cap used when the config does not provide one.
pub const DEFAULT_FRAME_RATE: u32 = 60;
