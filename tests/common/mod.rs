// Shared host-side fakes: a virtual-time timer, a tiny executor that drives
// sequencer futures against it, and recording stand-ins for the DOM.

#![allow(dead_code)]

use hawkins_core::glitch::{GlitchBands, GlitchFlash};
use hawkins_core::particles::{ParticleLayer, ParticleSpec};
use hawkins_core::{
    LetterRegistry, LocalBoxFuture, MessageBoard, Section, Timer, VisibilityOptions,
    VisibilitySource, VisualHandle,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::{pin, Pin};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

enum Task {
    Wake,
    Once(Box<dyn FnOnce()>),
    Every(u32, Box<dyn FnMut()>),
}

/// Timer on a virtual millisecond clock. Nothing happens until the test
/// advances it with [`step`](Self::step), [`run_until`](Self::run_until) or
/// [`drive`].
#[derive(Default)]
pub struct ManualTimer {
    now: Rc<Cell<u64>>,
    seq: Cell<u64>,
    queue: RefCell<BTreeMap<(u64, u64), Task>>,
}

impl ManualTimer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn clock(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.now)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn push(&self, at: u64, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().insert((at, seq), task);
    }

    fn at(&self, ms: u32) -> u64 {
        self.now.get() + u64::from(ms)
    }

    /// Fire the earliest queued task. Returns `false` if nothing is queued.
    pub fn step(&self) -> bool {
        let next = self.queue.borrow_mut().pop_first();
        let Some(((at, _), task)) = next else {
            return false;
        };
        self.now.set(at);
        match task {
            Task::Wake => {}
            Task::Once(f) => f(),
            Task::Every(period, mut f) => {
                f();
                self.push(at + u64::from(period.max(1)), Task::Every(period, f));
            }
        }
        true
    }

    /// Fire every task due at or before `deadline`, then park the clock there.
    pub fn run_until(&self, deadline: u64) {
        loop {
            let due = matches!(
                self.queue.borrow().keys().next(),
                Some((at, _)) if *at <= deadline
            );
            if !due {
                break;
            }
            self.step();
        }
        self.now.set(self.now.get().max(deadline));
    }

    /// Let pending one-shot tasks finish; stops at the first repeating task.
    pub fn settle(&self) {
        loop {
            let once = matches!(
                self.queue.borrow().values().next(),
                Some(Task::Once(_) | Task::Wake)
            );
            if !once || !self.step() {
                break;
            }
        }
    }
}

struct Sleep {
    now: Rc<Cell<u64>>,
    deadline: u64,
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.now.get() >= self.deadline {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

impl Timer for ManualTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture {
        let deadline = self.at(ms);
        self.push(deadline, Task::Wake);
        Box::pin(Sleep {
            now: self.clock(),
            deadline,
        })
    }

    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>) {
        self.push(self.at(ms), Task::Once(task));
    }

    fn every(&self, ms: u32, task: Box<dyn FnMut()>) {
        self.push(self.at(ms), Task::Every(ms, task));
    }
}

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// Poll once with a no-op waker.
pub fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
    let waker = Waker::from(Arc::new(NoopWake));
    fut.poll(&mut Context::from_waker(&waker))
}

/// Poll `fut` to completion, advancing `timer` one task at a time whenever
/// it is pending.
pub fn drive<F: Future>(timer: &ManualTimer, fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
        assert!(timer.step(), "future pending with nothing scheduled");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LampEvent {
    Active(char, bool),
    Lit(char, bool),
}

/// Letter handle that logs every call with the virtual time it happened at.
#[derive(Clone)]
pub struct RecordingLamp {
    letter: char,
    clock: Rc<Cell<u64>>,
    log: Rc<RefCell<Vec<(u64, LampEvent)>>>,
}

impl VisualHandle for RecordingLamp {
    fn set_active(&self, on: bool) {
        self.log
            .borrow_mut()
            .push((self.clock.get(), LampEvent::Active(self.letter, on)));
    }

    fn set_lit(&self, on: bool) {
        self.log
            .borrow_mut()
            .push((self.clock.get(), LampEvent::Lit(self.letter, on)));
    }
}

pub type LampLog = Rc<RefCell<Vec<(u64, LampEvent)>>>;

pub fn recording_registry(clock: Rc<Cell<u64>>) -> (LetterRegistry<RecordingLamp>, LampLog) {
    let log: LampLog = Rc::default();
    let registry = LetterRegistry::build(|letter| RecordingLamp {
        letter,
        clock: Rc::clone(&clock),
        log: Rc::clone(&log),
    });
    (registry, log)
}

/// Message board keeping every transcript it was shown.
#[derive(Clone, Default)]
pub struct RecordingBoard {
    pub shown: Rc<RefCell<Vec<String>>>,
}

impl MessageBoard for RecordingBoard {
    fn show(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_string());
    }
}

/// Visibility source the test pushes events into by hand.
#[derive(Default)]
pub struct FakeVisibility {
    watchers: RefCell<Vec<(Section, VisibilityOptions, Box<dyn FnMut(bool)>)>>,
}

impl FakeVisibility {
    pub fn push(&self, section: Section, visible: bool) {
        for (s, _, on_change) in self.watchers.borrow_mut().iter_mut() {
            if *s == section {
                on_change(visible);
            }
        }
    }

    pub fn watched(&self) -> Vec<(Section, VisibilityOptions)> {
        self.watchers
            .borrow()
            .iter()
            .map(|(s, o, _)| (*s, *o))
            .collect()
    }
}

impl VisibilitySource for FakeVisibility {
    fn watch(
        &self,
        section: Section,
        options: &VisibilityOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) {
        self.watchers
            .borrow_mut()
            .push((section, *options, on_change));
    }
}

/// Particle layer counting live particles.
#[derive(Default)]
pub struct CountingLayer {
    next_id: Cell<u64>,
    pub live: RefCell<Vec<u64>>,
    pub peak: Cell<usize>,
    pub spawned: RefCell<Vec<ParticleSpec>>,
}

impl ParticleLayer for CountingLayer {
    type Particle = u64;

    fn spawn(&self, spec: &ParticleSpec) -> Option<u64> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut live = self.live.borrow_mut();
        live.push(id);
        self.peak.set(self.peak.get().max(live.len()));
        self.spawned.borrow_mut().push(spec.clone());
        Some(id)
    }

    fn remove(&self, particle: u64) {
        self.live.borrow_mut().retain(|&id| id != particle);
    }
}

/// Glitch bands recording which slices are showing.
pub struct RecordingBands {
    pub visible: RefCell<Vec<bool>>,
    pub flashes: RefCell<Vec<(usize, GlitchFlash)>>,
}

impl RecordingBands {
    pub fn new(count: usize) -> Self {
        Self {
            visible: RefCell::new(vec![false; count]),
            flashes: RefCell::new(Vec::new()),
        }
    }
}

impl GlitchBands for RecordingBands {
    fn len(&self) -> usize {
        self.visible.borrow().len()
    }

    fn show(&self, index: usize, flash: &GlitchFlash) {
        self.visible.borrow_mut()[index] = true;
        self.flashes.borrow_mut().push((index, *flash));
    }

    fn hide(&self, index: usize) {
        self.visible.borrow_mut()[index] = false;
    }
}
