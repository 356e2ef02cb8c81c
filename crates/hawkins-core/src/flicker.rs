//! Random bulb flicker, independent of message spelling.

use crate::constants::{FLICKER_MAX_LETTERS, FLICKER_MAX_MS, FLICKER_MIN_LETTERS, FLICKER_MIN_MS};
use crate::letters::{LetterRegistry, VisualHandle};
use crate::timer::Timer;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlickerPick {
    pub index: usize,
    pub off_after_ms: u32,
}

/// Choose 2..=4 distinct entries out of `total` by shuffling, each with its
/// own off delay in `80..200` ms.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, total: usize) -> SmallVec<[FlickerPick; 4]> {
    let count = rng
        .gen_range(FLICKER_MIN_LETTERS..=FLICKER_MAX_LETTERS)
        .min(total);
    let mut order: SmallVec<[usize; 26]> = (0..total).collect();
    order.shuffle(rng);
    order
        .into_iter()
        .take(count)
        .map(|index| FlickerPick {
            index,
            off_after_ms: rng.gen_range(FLICKER_MIN_MS..FLICKER_MAX_MS),
        })
        .collect()
}

/// Light a random handful of bulbs and schedule each to go dark on its own.
/// Overlapping calls are fine; the bulbs just interleave.
pub fn flicker<H, R>(registry: &Rc<RefCell<LetterRegistry<H>>>, timer: &dyn Timer, rng: &mut R)
where
    H: VisualHandle + 'static,
    R: Rng + ?Sized,
{
    let picks = pick(rng, registry.borrow().len());
    let mut reg = registry.borrow_mut();
    for FlickerPick {
        index,
        off_after_ms,
    } in picks
    {
        reg.set_lit_at(index, true);
        let registry = Rc::clone(registry);
        timer.defer(
            off_after_ms,
            Box::new(move || registry.borrow_mut().set_lit_at(index, false)),
        );
    }
}
