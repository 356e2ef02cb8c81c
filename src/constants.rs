// Page element ids and class names the front-end relies on.
//
// The markup and CSS are owned by the page; these names are the contract.

// Hero
pub const LOGO_WRAPPER_ID: &str = "logoWrapper";
pub const LOGO_GLOW_ID: &str = "logoGlow";
pub const SCROLL_PROMPT_ID: &str = "scrollPrompt";
pub const GLITCH_SLICES_ID: &str = "glitchSlices";

// Alphabet wall
pub const ALPHABET_WALL_ID: &str = "alphabetWall";
pub const MESSAGE_DISPLAY_ID: &str = "messageDisplay";

// Portal and ending
pub const PORTAL_CRACK_ID: &str = "portalCrack";
pub const PORTAL_GLOW_ID: &str = "portalGlow";
pub const CREDITS_ID: &str = "credits";
pub const STATIC_NOISE_ID: &str = "staticNoise";

// UI
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const TOGGLE_BUTTON_ID: &str = "toggleBtn";
pub const PARTICLES_CONTAINER_ID: &str = "particlesContainer";

// Optional JSON configuration override
pub const CONFIG_ELEMENT_ID: &str = "wall-config";

// Classes
pub const LETTER_CONTAINER_CLASS: &str = "letter-container";
pub const LETTER_BULB_CLASS: &str = "letter-bulb";
pub const LETTER_CHAR_CLASS: &str = "letter-char";
pub const GLITCH_SLICE_CLASS: &str = "glitch-slice";
pub const GLITCH_TEXT_SELECTOR: &str = ".glitch-text";
pub const PARTICLE_CLASS: &str = "particle";
pub const ACTIVE_CLASS: &str = "active";
pub const LIT_CLASS: &str = "lit";
pub const OPENING_CLASS: &str = "opening";
pub const VISIBLE_CLASS: &str = "visible";
pub const UPSIDE_DOWN_CLASS: &str = "upside-down";

// Debug handle installed on `window`
pub const DEBUG_GLOBAL: &str = "strangerThings";
