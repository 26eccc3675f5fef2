// Shared tuning constants for the background animators and page widgets.

// Grid field
pub const GRID_SPACING: f32 = 50.0; // px between lattice columns/rows
pub const INTERACTION_RADIUS: f32 = 150.0; // px around the pointer that displaces dots
pub const DISPLACEMENT_DAMPING: f32 = 0.2; // fraction of the pointer offset applied at full force
pub const EASE_BACK_RATE: f32 = 0.15; // fraction of remaining offset recovered per frame
pub const SNAP_EPSILON: f32 = 0.1; // px; below this a dot snaps back to its base
pub const POINTER_MOVE_THRESHOLD: f32 = 1.0; // px per axis before a pointer counts as moved

// Grid styling
pub const GRID_INK: [u8; 3] = [255, 255, 255];
pub const GRID_LINE_OPACITY: f32 = 0.04;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const DOT_RADIUS: f32 = 1.5; // resting dot size
pub const DOT_OPACITY: f32 = 0.12; // resting dot alpha
pub const AFFECTED_RADIUS_SPAN: f32 = 2.0; // extra radius at force 1
pub const AFFECTED_OPACITY_BASE: f32 = 0.2;
pub const AFFECTED_OPACITY_SPAN: f32 = 0.5; // extra alpha at force 1

// Floating particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_INK: [u8; 3] = [0, 255, 136];
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // px per frame, per axis
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;

// Pointer tracking
pub const POINTER_THROTTLE_MS: f64 = 16.0; // ~60 accepted updates per second

// Countdown start value: days, hours, minutes, seconds
pub const COUNTDOWN_START: [u32; 4] = [9, 9, 0, 0];

// Gallery rotation
pub const GALLERY_INTERVAL_MS: u64 = 4000; // time an image is shown before switching
pub const GALLERY_TRANSITION_MS: u64 = 800; // cross-fade duration

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction that counts as in view

// Hero glow parallax
pub const HERO_GLOW_BASE_PERCENT: f32 = 50.0; // gradient centre at scroll 0
pub const HERO_GLOW_PARALLAX: f32 = 0.05; // percent per scrolled pixel
pub const HERO_GLOW_INK: [u8; 3] = [0, 255, 136];
pub const HERO_GLOW_OPACITY: f32 = 0.15;
