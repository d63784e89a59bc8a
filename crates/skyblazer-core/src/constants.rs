//! Simulation constants and tuning parameters.

/// Nominal simulation tick rate (Hz). The engine integrates with the
/// wall-clock delta the host supplies; this rate is what tick-denominated
/// timers assume.
pub const TICK_RATE: u32 = 60;

/// Nominal seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Depth at which new world entities appear.
pub const SPAWN_DEPTH: f64 = -600.0;

/// Depth past the player at which entities despawn regardless of state.
pub const DESPAWN_DEPTH: f64 = 20.0;

/// Flight envelope half-width (lateral).
pub const ENVELOPE_X: f64 = 100.0;

/// Flight envelope half-height (vertical).
pub const ENVELOPE_Y: f64 = 60.0;

/// Speed at which the world scrolls toward the player (obstacles, pickups,
/// rings).
pub const SCROLL_SPEED: f64 = 80.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

pub const PLAYER_RADIUS: f64 = 5.0;

/// Velocity added per thrust input event.
pub const THRUST_IMPULSE: f64 = 30.0;

/// Per-axis velocity magnitude cap.
pub const PLAYER_MAX_AXIS_SPEED: f64 = 90.0;

/// Multiplicative velocity decay applied once per tick.
pub const PLAYER_FRICTION: f64 = 0.85;

/// Speeds below this snap to exactly zero to avoid perpetual drift.
pub const VELOCITY_EPSILON: f64 = 0.5;

// --- Spawn policy ---

/// Per-tick Bernoulli spawn probabilities.
pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.15;
pub const ENEMY_SPAWN_CHANCE: f64 = 0.008;
pub const PICKUP_SPAWN_CHANCE: f64 = 0.02;
pub const RING_SPAWN_CHANCE: f64 = 0.005;

/// Probability that a spawn lands on a flank rather than the center lane.
pub const FLANK_SPAWN_BIAS: f64 = 0.7;

/// Flank band, as fractions of the envelope half-width.
pub const FLANK_BAND_MIN: f64 = 0.45;
pub const FLANK_BAND_MAX: f64 = 0.95;

/// Center lane half-width as a fraction of the envelope half-width.
pub const CENTER_LANE_FRACTION: f64 = 0.3;

// --- Combat ---

/// Extra slack added to combined radii in proximity tests.
pub const COLLISION_MARGIN: f64 = 1.0;

/// Damage to the player from ramming an obstacle or enemy.
pub const COLLISION_DAMAGE: i32 = 10;

/// Damage to the player from an enemy or boss shot.
pub const ENEMY_SHOT_DAMAGE: i32 = 5;

/// Enemy shot flight speed.
pub const ENEMY_SHOT_SPEED: f64 = 150.0;

pub const ENEMY_SHOT_RADIUS: f64 = 1.5;

// --- Player weapons ---

pub const BOLT_SPEED: f64 = 500.0;

pub const BOLT_RADIUS: f64 = 1.0;

/// Travel distance past which a bolt expires.
pub const BOLT_MAX_RANGE: f64 = 650.0;

/// Damage per normal bolt hit on an enemy.
pub const BOLT_DAMAGE: u32 = 1;

/// Damage per normal bolt hit on the boss.
pub const BOLT_BOSS_DAMAGE: u32 = 5;

/// Laser damage per enemy per tick of overlap.
pub const LASER_DAMAGE: u32 = 5;

/// Laser damage per tick against the boss.
pub const LASER_BOSS_DAMAGE: u32 = 2;

/// Laser weapon duration granted by a laser pickup (ticks).
pub const LASER_DURATION_TICKS: u32 = 600;

// --- Missiles ---

/// Missiles per volley.
pub const MISSILE_VOLLEY: usize = 3;

/// Initial lateral heading spread across the volley.
pub const MISSILE_VOLLEY_SPREAD: f64 = 0.25;

/// Ticks between volleys.
pub const MISSILE_COOLDOWN_TICKS: u32 = 180;

/// Missile lifetime budget (ticks).
pub const MISSILE_LIFETIME_TICKS: u32 = 240;

pub const MISSILE_SPEED: f64 = 220.0;

pub const MISSILE_RADIUS: f64 = 1.5;

/// First-order steering blend factor per tick.
pub const MISSILE_STEER_GAIN: f64 = 0.2;

/// Damage per missile hit on an enemy.
pub const MISSILE_DAMAGE: u32 = 5;

/// Damage per missile hit on the boss.
pub const MISSILE_BOSS_DAMAGE: u32 = 15;

// --- Pickups ---

/// Health restored by a health pickup (clamped to max).
pub const HEALTH_PICKUP_AMOUNT: i32 = 25;

pub const PICKUP_RADIUS: f64 = 4.0;

pub const RING_RADIUS: f64 = 6.0;

/// Cosmetic spin rate for pickups and rings (radians per second).
pub const SPIN_RATE: f64 = 2.0;

// --- Scoring & progression ---

pub const RING_SCORE: u64 = 100;

pub const STANDARD_ENEMY_SCORE: u64 = 50;
pub const FAST_ENEMY_SCORE: u64 = 100;
pub const HEAVY_ENEMY_SCORE: u64 = 300;

pub const BOSS_SCORE: u64 = 5000;

/// Number of levels.
pub const LEVEL_COUNT: usize = 5;

/// Index of the boss level.
pub const FINAL_LEVEL: usize = LEVEL_COUNT - 1;

/// Score thresholds for advancing past levels 0..=3, indexed by current
/// level. Crossing a threshold bumps the level within the same tick.
pub const LEVEL_SCORE_THRESHOLDS: [u64; 4] = [200, 500, 1000, 1800];

// --- Boss ---

pub const BOSS_MAX_HP: u32 = 100;

/// The boss has a single large static hitbox.
pub const BOSS_RADIUS: f64 = 25.0;

/// Fixed boss depth in front of the player.
pub const BOSS_DEPTH: f64 = -150.0;

/// Weave amplitude: x = A sin(theta).
pub const BOSS_WEAVE_X: f64 = 70.0;

/// Weave amplitude: y = B cos(2 theta) + offset.
pub const BOSS_WEAVE_Y: f64 = 35.0;

pub const BOSS_WEAVE_Y_OFFSET: f64 = 10.0;

/// Weave parameter advance (radians per second).
pub const BOSS_WEAVE_RATE: f64 = 1.2;

/// Ticks between spread attacks.
pub const BOSS_ATTACK_INTERVAL_TICKS: u32 = 150;

/// Lateral aim offset of the outer shots in a spread.
pub const BOSS_SPREAD_OFFSET: f64 = 18.0;
