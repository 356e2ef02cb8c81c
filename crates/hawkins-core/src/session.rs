//! Page session: the single owner of all per-load state.

use crate::config::Config;
use crate::letters::{LetterRegistry, VisualHandle};
use crate::sections::{
    Section, SectionDispatcher, SectionEffect, VisibilitySource, SECTION_VISIBILITY,
};
use crate::sequencer::{MessageBoard, MessageSequencer, Phase};
use crate::timer::Timer;
use crate::SharedRng;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Read-only view of the session for the debug handle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_upside_down: bool,
    pub alphabet_triggered: bool,
    pub portal_opened: bool,
    pub credits_shown: bool,
    pub sequencer: Phase,
    pub transcript: String,
    pub lit_letters: String,
}

pub struct Session<H, D> {
    config: Config,
    sequencer: Rc<MessageSequencer<H, D>>,
    dispatcher: RefCell<SectionDispatcher>,
    upside_down: Cell<bool>,
}

impl<H, D> Session<H, D>
where
    H: VisualHandle + 'static,
    D: MessageBoard + 'static,
{
    pub fn new(
        config: Config,
        registry: LetterRegistry<H>,
        board: D,
        timer: Rc<dyn Timer>,
        rng: SharedRng,
    ) -> Self {
        let sequencer = MessageSequencer::new(
            Rc::new(RefCell::new(registry)),
            board,
            timer,
            rng,
            config.timing.clone(),
            config.messages.clone(),
        );
        Self {
            config,
            sequencer: Rc::new(sequencer),
            dispatcher: RefCell::new(SectionDispatcher::new()),
            upside_down: Cell::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sequencer(&self) -> &Rc<MessageSequencer<H, D>> {
        &self.sequencer
    }

    pub fn on_visibility(&self, section: Section, visible: bool) -> Option<SectionEffect> {
        self.dispatcher.borrow_mut().notify(section, visible)
    }

    /// Subscribe every section to `source`; effects are handed to `apply`.
    pub fn watch_sections<V>(self: &Rc<Self>, source: &V, apply: Rc<dyn Fn(SectionEffect)>)
    where
        V: VisibilitySource + ?Sized,
    {
        for section in Section::ALL {
            let session = Rc::clone(self);
            let apply = Rc::clone(&apply);
            source.watch(
                section,
                &SECTION_VISIBILITY,
                Box::new(move |visible| {
                    if let Some(effect) = session.on_visibility(section, visible) {
                        apply(effect);
                    }
                }),
            );
        }
    }

    pub fn is_upside_down(&self) -> bool {
        self.upside_down.get()
    }

    /// Flip the upside-down mode and return the new value.
    pub fn toggle_upside_down(&self) -> bool {
        let on = !self.upside_down.get();
        self.upside_down.set(on);
        on
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let dispatcher = self.dispatcher.borrow();
        SessionSnapshot {
            is_upside_down: self.upside_down.get(),
            alphabet_triggered: dispatcher.alphabet_triggered(),
            portal_opened: dispatcher.portal_opened(),
            credits_shown: dispatcher.credits_shown(),
            sequencer: self.sequencer.phase(),
            transcript: self.sequencer.transcript(),
            lit_letters: self.sequencer.registry().borrow().lit_letters(),
        }
    }
}
