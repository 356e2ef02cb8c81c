//! Platform-free logic for the Hawkins scroll cinematic.
//!
//! Nothing here touches the DOM. The web front-end supplies visual handles,
//! timers and visibility notifications through the traits below and applies
//! the effects this crate decides on.

pub mod config;
pub mod constants;
pub mod flicker;
pub mod glitch;
pub mod input;
pub mod letters;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod sequencer;
pub mod session;
pub mod timer;

pub use config::*;
pub use letters::{letter_index, LetterEntry, LetterRegistry, VisualHandle, ALPHABET, LETTER_COUNT};
pub use sections::*;
pub use sequencer::*;
pub use session::*;
pub use timer::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Random source shared by the sequencer and ambient effects.
pub type SharedRng = Rc<RefCell<StdRng>>;

pub fn seeded_rng(seed: u64) -> SharedRng {
    Rc::new(RefCell::new(StdRng::seed_from_u64(seed)))
}

pub fn entropy_rng() -> SharedRng {
    Rc::new(RefCell::new(StdRng::from_entropy()))
}
