//! Message sequencer: spells the configured messages on the alphabet wall.
//!
//! One run goes through four phases strictly in order:
//! warm-up flicker, spelling each message, the pauses between messages, and a
//! wind-down flicker that leaves the wall dark and the transcript empty.
//! Letter turn-offs are fire-and-forget timers, so neighbouring letters may be
//! lit together near the end of a message.

use crate::config::Timing;
use crate::constants::*;
use crate::flicker;
use crate::letters::{LetterRegistry, VisualHandle};
use crate::timer::Timer;
use crate::SharedRng;
use instant::Instant;
use rand::Rng;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Receives the visible transcript every time it changes.
pub trait MessageBoard {
    fn show(&self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum Phase {
    Idle,
    WarmUp,
    Spelling { message: usize },
    DebugSpell,
    WindDown,
    Done,
}

pub struct MessageSequencer<H, D> {
    registry: Rc<RefCell<LetterRegistry<H>>>,
    board: D,
    timer: Rc<dyn Timer>,
    rng: SharedRng,
    timing: Timing,
    messages: Vec<String>,
    busy: Cell<bool>,
    phase: Cell<Phase>,
    transcript: RefCell<String>,
}

impl<H, D> MessageSequencer<H, D>
where
    H: VisualHandle + 'static,
    D: MessageBoard,
{
    pub fn new(
        registry: Rc<RefCell<LetterRegistry<H>>>,
        board: D,
        timer: Rc<dyn Timer>,
        rng: SharedRng,
        timing: Timing,
        messages: Vec<String>,
    ) -> Self {
        Self {
            registry,
            board,
            timer,
            rng,
            timing,
            messages,
            busy: Cell::new(false),
            phase: Cell::new(Phase::Idle),
            transcript: RefCell::new(String::new()),
        }
    }

    pub fn registry(&self) -> &Rc<RefCell<LetterRegistry<H>>> {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn transcript(&self) -> String {
        self.transcript.borrow().clone()
    }

    /// Run the full timeline once. Returns `false` without doing anything if
    /// another run or a debug spell is still in progress.
    pub async fn run(&self) -> bool {
        if self.busy.replace(true) {
            log::warn!("[wall] sequence refused: sequencer busy");
            return false;
        }
        let started = Instant::now();
        log::info!("[wall] alphabet sequence started");

        self.phase.set(Phase::WarmUp);
        for _ in 0..WARM_UP_FLICKERS {
            self.flicker();
            self.timer.sleep(WARM_UP_PAUSE_MS).await;
        }

        for (message, text) in self.messages.iter().enumerate() {
            self.phase.set(Phase::Spelling { message });
            self.spell(text).await;
            self.timer.sleep(BETWEEN_MESSAGES_MS).await;
        }

        self.phase.set(Phase::WindDown);
        for _ in 0..WIND_DOWN_FLICKERS {
            self.flicker();
            self.timer.sleep(WIND_DOWN_PAUSE_MS).await;
        }
        self.registry.borrow_mut().turn_off_all();
        self.set_transcript(String::new());

        self.phase.set(Phase::Done);
        self.busy.set(false);
        log::info!(
            "[wall] alphabet sequence finished in {:.1}s",
            started.elapsed().as_secs_f32()
        );
        true
    }

    /// Spell a single message outside the main timeline (debug entry point).
    pub async fn spell_message(&self, text: &str) -> bool {
        if self.busy.replace(true) {
            log::warn!("[wall] spell {:?} refused: sequencer busy", text);
            return false;
        }
        let previous = self.phase.replace(Phase::DebugSpell);
        self.spell(text).await;
        self.phase.set(previous);
        self.busy.set(false);
        true
    }

    async fn spell(&self, text: &str) {
        self.set_transcript(String::new());
        self.registry.borrow_mut().turn_off_all();

        let delay = self.timing.letter_delay_ms;
        for ch in text.chars() {
            if ch == ' ' {
                self.commit(ch);
                self.timer.sleep(delay).await;
                continue;
            }

            self.registry.borrow_mut().light_up(ch);
            self.commit(ch);
            let extra_flicker = self.rng.borrow_mut().gen_bool(FLICKER_CHANCE_PER_LETTER);
            if extra_flicker {
                self.flicker();
            }
            self.timer.sleep(delay).await;
            // Off timer runs alongside later letters.
            let registry = Rc::clone(&self.registry);
            self.timer.defer(
                delay.saturating_mul(LETTER_OFF_DELAY_FACTOR),
                Box::new(move || registry.borrow_mut().turn_off(ch)),
            );
        }

        self.timer.sleep(self.timing.message_pause_ms).await;
    }

    fn flicker(&self) {
        flicker::flicker(&self.registry, &*self.timer, &mut *self.rng.borrow_mut());
    }

    fn commit(&self, ch: char) {
        let mut transcript = self.transcript.borrow_mut();
        transcript.push(ch);
        self.board.show(&transcript);
    }

    fn set_transcript(&self, text: String) {
        self.board.show(&text);
        *self.transcript.borrow_mut() = text;
    }
}
