//! Simulation constants and tuning parameters.

// --- Objective ---

/// Default starting objective (castle) hit points.
pub const DEFAULT_OBJECTIVE_HP: u32 = 20;

/// Damage dealt to the objective by each unit that reaches the route end.
pub const ARRIVAL_DAMAGE: u32 = 1;

// --- Wave difficulty (pure functions of the 1-based round index) ---

/// Base unit count before the per-round ramp.
pub const WAVE_BASE_UNIT_COUNT: u32 = 3;

/// Additional units per round.
pub const WAVE_UNIT_COUNT_PER_ROUND: u32 = 2;

/// Base unit hit points before the per-round ramp.
pub const WAVE_BASE_UNIT_HEALTH: f64 = 30.0;

/// Additional unit hit points per round.
pub const WAVE_UNIT_HEALTH_PER_ROUND: f64 = 10.0;

/// Unit movement speed in world units per second. Constant across
/// rounds: the difficulty curve comes from count and health only.
pub const UNIT_SPEED: f64 = 60.0;

/// Interval between unit spawns within a wave (ms).
pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

// --- Projectiles ---

/// Travel speed for all tower projectiles (world units per second).
pub const PROJECTILE_SPEED: f64 = 400.0;

/// Remaining distance below which a projectile resolves its impact.
pub const PROJECTILE_HIT_RADIUS: f64 = 10.0;

// --- Tower presets ---

/// Basic tower: cheap, fast-firing, short range.
pub const BASIC_TOWER_DAMAGE: f64 = 5.0;
pub const BASIC_TOWER_RANGE: f64 = 100.0;
pub const BASIC_TOWER_COOLDOWN_MS: f64 = 800.0;

/// Archer tower: higher damage, longest range, medium fire rate.
pub const ARCHER_TOWER_DAMAGE: f64 = 12.0;
pub const ARCHER_TOWER_RANGE: f64 = 150.0;
pub const ARCHER_TOWER_COOLDOWN_MS: f64 = 1800.0;

/// Cannon tower: highest damage, slowest fire rate, splash on impact.
pub const CANNON_TOWER_DAMAGE: f64 = 15.0;
pub const CANNON_TOWER_RANGE: f64 = 110.0;
pub const CANNON_TOWER_COOLDOWN_MS: f64 = 3000.0;
pub const CANNON_SPLASH_RADIUS: f64 = 50.0;

// --- Wall (slow) towers ---

/// Radius of a wall tower's slow aura.
pub const WALL_SLOW_RANGE: f64 = 80.0;

/// Speed multiplier applied by a wall tower's slow pulse.
pub const WALL_SLOW_FACTOR: f64 = 0.5;

/// Duration of a slow effect before speed is restored (ms).
pub const WALL_SLOW_DURATION_MS: f64 = 1000.0;

/// Interval between slow pulses from the same wall tower (ms).
pub const WALL_PULSE_COOLDOWN_MS: f64 = 500.0;
