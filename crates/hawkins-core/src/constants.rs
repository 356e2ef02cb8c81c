// Fixed timing and styling constants shared by the sequencer and ambient effects.
//
// User-tunable values (messages, letter delay, spawn rate, particle bounds)
// live in `config.rs`; everything here is part of the look and never changes.

// Alphabet wall timeline (milliseconds)
pub const WARM_UP_FLICKERS: usize = 5;
pub const WARM_UP_PAUSE_MS: u32 = 200;
pub const WIND_DOWN_FLICKERS: usize = 3;
pub const WIND_DOWN_PAUSE_MS: u32 = 150;
pub const BETWEEN_MESSAGES_MS: u32 = 300;
pub const LETTER_OFF_DELAY_FACTOR: u32 = 2; // letter delays after the letter's own pause

// Random flicker
pub const FLICKER_MIN_LETTERS: usize = 2;
pub const FLICKER_MAX_LETTERS: usize = 4; // inclusive
pub const FLICKER_MIN_MS: u32 = 80;
pub const FLICKER_MAX_MS: u32 = 200; // exclusive
pub const FLICKER_CHANCE_PER_LETTER: f64 = 0.4;

// Section visibility
pub const SECTION_THRESHOLD: f64 = 0.3;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// One-shot stage effects
pub const PORTAL_CRACK_DELAY_MS: u32 = 300;
pub const CREDITS_DELAY_MS: u32 = 400;

// Glitch slices
pub const GLITCH_SLICE_COUNT: usize = 8;
pub const GLITCH_INTERVAL_MS: u32 = 3000;
pub const GLITCH_SHOW_CHANCE: f64 = 0.5;
pub const GLITCH_OPACITY: f64 = 0.4;
pub const GLITCH_MIN_HEIGHT_PX: f64 = 2.0;
pub const GLITCH_MAX_HEIGHT_PX: f64 = 6.0;
pub const GLITCH_MAX_OFFSET_PX: f64 = 5.0; // symmetric around zero
pub const GLITCH_MIN_HIDE_MS: u32 = 100;
pub const GLITCH_MAX_HIDE_MS: u32 = 250;
pub const GLITCH_TOP_BASE_PCT: f64 = 10.0;
pub const GLITCH_TOP_STEP_PCT: f64 = 10.0;
pub const GLITCH_DELAY_STEP_SEC: f64 = 0.1;

// Particles
pub const PARTICLE_STAGGER_MS: u32 = 200; // initial batch start offsets
pub const PARTICLE_REMOVAL_BUFFER_MS: u32 = 500;
pub const PARTICLE_MIN_SIZE_PX: f64 = 2.0;
pub const PARTICLE_MAX_SIZE_PX: f64 = 5.0;
pub const PARTICLE_MAX_COUNT: u32 = 500;
pub const PARTICLE_MAX_DURATION_S: f64 = 600.0;

// Hero fade
pub const HERO_FADE_VIEWPORT_FRACTION: f64 = 0.5;
pub const HERO_GLOW_MAX_OPACITY: f64 = 0.6;
pub const SCROLL_PROMPT_FADE_RATE: f64 = 2.0; // relative to the logo fade
