//! Scroll-addressable sections and the effects their visibility triggers.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_THRESHOLD};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Alphabet,
    UpsideDown,
    Portal,
    Ending,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Alphabet,
        Section::UpsideDown,
        Section::Portal,
        Section::Ending,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Section::Alphabet => "alphabetSection",
            Section::UpsideDown => "upsideDownSection",
            Section::Portal => "portalSection",
            Section::Ending => "endingSection",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.element_id() == id)
    }
}

/// How much of an element must be on screen before it counts as entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const SECTION_VISIBILITY: VisibilityOptions = VisibilityOptions {
    threshold: SECTION_THRESHOLD,
    root_margin: "0px",
};

pub const REVEAL_VISIBILITY: VisibilityOptions = VisibilityOptions {
    threshold: REVEAL_THRESHOLD,
    root_margin: REVEAL_ROOT_MARGIN,
};

/// Push-based visibility notifications, one callback per section.
/// `on_change(true)` means the section crossed into view.
pub trait VisibilitySource {
    fn watch(
        &self,
        section: Section,
        options: &VisibilityOptions,
        on_change: Box<dyn FnMut(bool)>,
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEffect {
    StartAlphabet,
    OpenPortal,
    ShowCredits,
    GlitchText(bool),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionState {
    #[default]
    Idle,
    Entered,
}

/// Boolean guard that can be fired exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns `true` the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Default)]
pub struct SectionDispatcher {
    states: FnvHashMap<Section, SectionState>,
    alphabet: OneShot,
    portal: OneShot,
    credits: OneShot,
}

impl SectionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, section: Section) -> SectionState {
        self.states.get(&section).copied().unwrap_or_default()
    }

    pub fn alphabet_triggered(&self) -> bool {
        self.alphabet.has_fired()
    }

    pub fn portal_opened(&self) -> bool {
        self.portal.has_fired()
    }

    pub fn credits_shown(&self) -> bool {
        self.credits.has_fired()
    }

    /// Feed one visibility change; returns the effect to apply, if any.
    /// Repeated notifications without a state change are ignored.
    pub fn notify(&mut self, section: Section, visible: bool) -> Option<SectionEffect> {
        let next = if visible {
            SectionState::Entered
        } else {
            SectionState::Idle
        };
        let prev = self.states.insert(section, next).unwrap_or_default();
        if prev == next {
            return None;
        }
        log::debug!("[sections] {:?}: {:?} -> {:?}", section, prev, next);

        match (section, next) {
            (Section::Alphabet, SectionState::Entered) => self
                .alphabet
                .fire()
                .then_some(SectionEffect::StartAlphabet),
            (Section::Portal, SectionState::Entered) => {
                self.portal.fire().then_some(SectionEffect::OpenPortal)
            }
            (Section::Ending, SectionState::Entered) => {
                self.credits.fire().then_some(SectionEffect::ShowCredits)
            }
            (Section::UpsideDown, state) => Some(SectionEffect::GlitchText(
                state == SectionState::Entered,
            )),
            _ => None,
        }
    }
}
