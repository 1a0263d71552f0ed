// Shared simulation tuning constants for every canvas variant.

// Frame timing
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0; // per-frame effects were tuned at 60 Hz
pub const MAX_FRAME_DT_MS: f64 = 100.0; // clamp after tab switches / long stalls

// Spring integration
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.001;

// Background pointer spring (grid, particles, network, galaxy)
pub const BACKGROUND_STIFFNESS: f32 = 50.0;
pub const BACKGROUND_DAMPING: f32 = 20.0;

// Cursor trail springs
pub const CURSOR_DOT_STIFFNESS: f32 = 500.0;
pub const CURSOR_DOT_DAMPING: f32 = 50.0;
pub const CURSOR_RING_STIFFNESS: f32 = 200.0;
pub const CURSOR_RING_DAMPING: f32 = 40.0;
pub const CURSOR_TRAIL_STIFFNESS: f32 = 100.0;
pub const CURSOR_TRAIL_DAMPING: f32 = 30.0;
pub const CURSOR_TRAIL_COUNT: usize = 8;
pub const CURSOR_TRAIL_DELAY_MS: f64 = 50.0; // per trail dot
pub const CURSOR_TRAIL_OPACITY: f32 = 0.6;
pub const CURSOR_DOT_RADIUS: f32 = 4.0;
pub const CURSOR_RING_RADIUS: f32 = 20.0;
pub const CURSOR_TRAIL_RADIUS: f32 = 4.0;
pub const CURSOR_PRESSED_DOT_SCALE: f32 = 0.8;
pub const CURSOR_PRESSED_RING_SCALE: f32 = 1.5;
pub const CURSOR_HOVER_RING_SCALE: f32 = 1.5;

// Population densities (pixels² per point)
pub const PARTICLE_DENSITY: f64 = 15_000.0;
pub const NETWORK_DENSITY: f64 = 40_000.0;
pub const GALAXY_STAR_DENSITY: f64 = 500.0;
pub const GALAXY_DUST_DENSITY: f64 = 200.0;

// Floating particles
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // |v| per axis, px per 10 ms
pub const PARTICLE_SPEED_SCALE: f32 = 0.1; // velocity units to px/ms
pub const PARTICLE_ATTRACT_RADIUS: f32 = 200.0;
pub const PARTICLE_ATTRACT_STRENGTH: f32 = 0.02;

// Neural network nodes and edges
pub const NETWORK_MAX_SPEED: f32 = 0.1;
pub const NETWORK_SPEED_SCALE: f32 = 1.0 / REFERENCE_FRAME_MS; // per-frame drift
pub const NETWORK_ATTRACT_RADIUS: f32 = 150.0;
pub const NETWORK_ATTRACT_STRENGTH: f32 = 0.05;
pub const NETWORK_MIN_EDGES_PER_NODE: usize = 2;
pub const NETWORK_MAX_EDGES_PER_NODE: usize = 5;
pub const NETWORK_INITIAL_ACTIVE_CHANCE: f64 = 0.3;
pub const NETWORK_TOGGLE_CHANCE: f64 = 0.01; // per frame
pub const NETWORK_EDGE_VISIBLE_DISTANCE: f32 = 150.0;
pub const NETWORK_PULSE_SPEED: f64 = 0.05; // px per ms along an edge

// Data streams
pub const STREAM_SPACING: u32 = 100; // one column per ~100 px of width
pub const STREAM_MIN_SEGMENTS: usize = 5;
pub const STREAM_MAX_SEGMENTS: usize = 14;
pub const STREAM_SPEED_SCALE: f32 = 0.05;

// Galaxy
pub const GALAXY_RADIUS: f32 = 0.4; // fraction of min(width, height)
pub const GALAXY_ARMS: u32 = 5;
pub const GALAXY_ROTATION_SPEED: f32 = 0.00002; // rad per ms
pub const GALAXY_DUST_SPREAD: f32 = 1.2;
pub const GALAXY_CENTER_MIN: f32 = 0.45;
pub const GALAXY_CENTER_MAX: f32 = 0.55;
pub const GALAXY_STAR_PARALLAX: f32 = 0.03;
pub const GALAXY_DUST_PARALLAX: f32 = 0.02;

// Grid
pub const GRID_SPACING: f32 = 40.0;
pub const GRID_MIN_INTENSITY: f32 = 0.1;
pub const GRID_GLOW_THRESHOLD: f32 = 0.5;
pub const GRID_HIGHLIGHT_RADIUS: f32 = 100.0;

// Glitch
pub const GLITCH_INTERVAL_MS: u32 = 1000;
pub const GLITCH_PROBABILITY: f64 = 0.1;
pub const GLITCH_MIN_DURATION_MS: u32 = 200;
pub const GLITCH_MAX_DURATION_MS: u32 = 500;
pub const GLITCH_MAX_OFFSET_PX: f32 = 2.5;

// Resize
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;
