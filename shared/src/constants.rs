//! Tuning constants for the player controller.
//!
//! Units are meters and seconds. Durations are *simulated* seconds: they elapse on the
//! fixed physics tick and stretch in real time while the simulation rate is slowed.

/// Fixed simulation tick rate (Hz).
pub const FIXED_TICK_HZ: f64 = 50.0;

/// Fixed simulation step (seconds) matching [`FIXED_TICK_HZ`].
pub const FIXED_DT_S: f32 = 1.0 / FIXED_TICK_HZ as f32;

/// Horizontal run speed at full stick deflection (m/s).
pub const SPEED: f32 = 10.0;

/// Vertical velocity set by a jump (m/s). Overwrites, never adds.
pub const JUMP_FORCE: f32 = 5.0;

/// Look input at or below this magnitude keeps the previous facing.
pub const LOOK_EPS: f32 = 0.01;

/// Radius of the grounding overlap sphere around the player pivot (meters).
pub const GROUND_SENSOR_RADIUS: f32 = 0.3;

/// Collision layer mask used by the ground sensor.
pub const GROUND_LAYER_MASK: u32 = 1;

/// Layer of the ragdoll collider. Kept off [`GROUND_LAYER_MASK`] so a ragdoll never counts
/// as ground for the players around it.
pub const RAGDOLL_LAYER_MASK: u32 = 1 << 1;

/// Speed added along the hit direction when the ragdoll takes over (m/s).
pub const RAGDOLL_KNOCKBACK_SPEED: f32 = 3.0;

/// Total length of an enter/exit choreography (simulated seconds).
pub const CHOREOGRAPHY_DURATION_S: f32 = 1.8;

/// Denominator of the pose interpolation factor (`elapsed / LERP_SPAN_S`).
///
/// Shorter than [`CHOREOGRAPHY_DURATION_S`]: the pose reaches its destination at 1.3s and
/// holds there for the remainder of the sequence.
pub const LERP_SPAN_S: f32 = 1.3;

/// Simulation rate while a player is climbing into a vehicle.
pub const ENTER_TIME_SCALE: f32 = 0.2;

/// Door is open while `start < elapsed < end` during the enter sequence.
pub const ENTER_DOOR_WINDOW_S: (f32, f32) = (0.3, 1.0);

/// Door is open while `start < elapsed < end` during the exit sequence.
pub const EXIT_DOOR_WINDOW_S: (f32, f32) = (0.0, 1.0);

/// Tolerance when comparing accumulated simulated time against a duration.
pub const TIME_EPS: f32 = 1.0e-4;

/// Default radius of a vehicle's proximity trigger volume (meters).
pub const VEHICLE_TRIGGER_RADIUS: f32 = 2.5;

/// Replicated property key written when a player dies.
pub const STATE_PROPERTY_KEY: &str = "state";

/// Replicated property value written when a player dies.
pub const DEAD_PROPERTY_VALUE: &str = "dead";

/// Driver-side enter anchor, relative to the vehicle root (meters).
pub const DRIVER_ENTER_OFFSET: [f32; 3] = [-1.6, 0.0, 0.4];

/// Driver seat anchor, relative to the vehicle root (meters).
pub const DRIVER_SEAT_OFFSET: [f32; 3] = [-0.4, 0.5, 0.4];
