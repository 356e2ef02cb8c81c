// Host-side tests for the alphabet wall message sequencer, run against a
// virtual clock so every delay is exact.

mod common;

use common::{drive, poll_once, recording_registry, LampEvent, LampLog, ManualTimer, RecordingBoard, RecordingLamp};
use hawkins_core::{seeded_rng, MessageSequencer, Phase, Timer, Timing};
use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;
use std::task::Poll;

type TestSequencer = MessageSequencer<RecordingLamp, RecordingBoard>;

fn setup(messages: &[&str], seed: u64) -> (Rc<ManualTimer>, TestSequencer, LampLog, RecordingBoard) {
    let timer = ManualTimer::new();
    let (registry, log) = recording_registry(timer.clock());
    let board = RecordingBoard::default();
    let dyn_timer: Rc<dyn Timer> = timer.clone();
    let sequencer = MessageSequencer::new(
        Rc::new(RefCell::new(registry)),
        board.clone(),
        dyn_timer,
        seeded_rng(seed),
        Timing::default(),
        messages.iter().map(|m| m.to_string()).collect(),
    );
    (timer, sequencer, log, board)
}

#[test]
fn transcript_grows_letter_by_letter_and_resets_between_messages() {
    let (timer, seq, _log, board) = setup(&["RUN", "HIDE"], 1);
    assert!(drive(&timer, seq.run()));
    assert_eq!(
        *board.shown.borrow(),
        vec!["", "R", "RU", "RUN", "", "H", "HI", "HID", "HIDE", ""]
    );
}

#[test]
fn spaces_are_committed_without_lighting_anything() {
    let (timer, seq, log, board) = setup(&["IT IS"], 2);
    drive(&timer, seq.run());
    assert!(board.shown.borrow().contains(&"IT ".to_string()));
    assert!(board.shown.borrow().contains(&"IT IS".to_string()));
    let lit_active: Vec<char> = log
        .borrow()
        .iter()
        .filter_map(|(_, ev)| match ev {
            LampEvent::Active(c, true) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(lit_active, vec!['I', 'T', 'I', 'S']);
}

#[test]
fn run_takes_exactly_the_scheduled_time() {
    let (timer, seq, _log, _board) = setup(&["RUN", "HIDE"], 3);
    drive(&timer, seq.run());
    let t = Timing::default();
    let warm_up = 5 * 200;
    let run = 3 * t.letter_delay_ms + t.message_pause_ms + 300;
    let hide = 4 * t.letter_delay_ms + t.message_pause_ms + 300;
    let wind_down = 3 * 150;
    assert_eq!(timer.now(), u64::from(warm_up + run + hide + wind_down));
}

#[test]
fn each_letter_stays_lit_for_three_letter_delays() {
    let (timer, seq, log, _board) = setup(&["RUN"], 4);
    drive(&timer, seq.run());
    let delay = u64::from(Timing::default().letter_delay_ms);
    let log = log.borrow();
    for letter in ['R', 'U', 'N'] {
        let (on_at, _) = log
            .iter()
            .find(|(_, ev)| *ev == LampEvent::Active(letter, true))
            .expect("letter lit");
        let off_at = log
            .iter()
            .find(|(t, ev)| *t > *on_at && *ev == LampEvent::Active(letter, false))
            .map(|(t, _)| *t)
            .expect("letter turned off");
        assert_eq!(off_at, on_at + 3 * delay, "{letter}");
    }
}

#[test]
fn neighbouring_letters_overlap_near_the_end_of_a_message() {
    let (timer, seq, log, _board) = setup(&["RUN"], 5);
    drive(&timer, seq.run());
    let log = log.borrow();
    let u_on = log
        .iter()
        .position(|(_, ev)| *ev == LampEvent::Active('U', true))
        .unwrap();
    let n_on = log
        .iter()
        .position(|(_, ev)| *ev == LampEvent::Active('N', true))
        .unwrap();
    let u_off_after_n = log[n_on..]
        .iter()
        .any(|(_, ev)| *ev == LampEvent::Active('U', false));
    assert!(u_on < n_on);
    assert!(u_off_after_n, "U should still be lit when N lights up");
}

#[test]
fn run_leaves_the_wall_dark_and_the_transcript_empty() {
    for seed in 0..20 {
        let (timer, seq, _log, board) = setup(&["IT IS HERE"], seed);
        drive(&timer, seq.run());
        timer.settle();
        assert_eq!(seq.phase(), Phase::Done);
        assert!(!seq.is_busy());
        assert_eq!(seq.transcript(), "");
        assert_eq!(board.shown.borrow().last().map(String::as_str), Some(""));
        let reg = seq.registry().borrow();
        assert!(reg.entries().iter().all(|e| !e.is_active() && !e.is_lit()));
    }
}

#[test]
fn phases_advance_in_order() {
    let (timer, seq, _log, _board) = setup(&["RUN", "HIDE"], 6);
    assert_eq!(seq.phase(), Phase::Idle);
    let mut run = pin!(seq.run());
    let mut seen = vec![];
    loop {
        let phase = seq.phase();
        if seen.last() != Some(&phase) {
            seen.push(phase);
        }
        if let Poll::Ready(done) = poll_once(run.as_mut()) {
            assert!(done);
            break;
        }
        assert!(timer.step());
    }
    seen.push(seq.phase());
    seen.dedup();
    assert_eq!(
        seen,
        vec![
            Phase::Idle,
            Phase::WarmUp,
            Phase::Spelling { message: 0 },
            Phase::Spelling { message: 1 },
            Phase::WindDown,
            Phase::Done,
        ]
    );
}

#[test]
fn a_second_run_is_refused_while_busy() {
    let (timer, seq, _log, board) = setup(&["RUN"], 7);
    let mut first = pin!(seq.run());
    assert!(poll_once(first.as_mut()).is_pending());
    assert!(seq.is_busy());

    assert!(!drive(&timer, seq.run()));
    assert!(!drive(&timer, seq.spell_message("HI")));

    assert!(drive(&timer, first.as_mut()));
    assert!(!seq.is_busy());

    // Debug spell after the run: spells and leaves the transcript showing.
    assert!(drive(&timer, seq.spell_message("HI")));
    assert_eq!(board.shown.borrow().last().map(String::as_str), Some("HI"));
}

#[test]
fn debug_spell_reports_its_own_phase_and_restores_the_previous_one() {
    let (timer, seq, _log, _board) = setup(&["RUN"], 8);
    assert!(drive(&timer, seq.run()));
    assert_eq!(seq.phase(), Phase::Done);

    let mut spell = pin!(seq.spell_message("HI"));
    assert!(poll_once(spell.as_mut()).is_pending());
    assert_eq!(seq.phase(), Phase::DebugSpell);
    assert!(seq.is_busy());

    assert!(drive(&timer, spell.as_mut()));
    assert_eq!(seq.phase(), Phase::Done);
    assert!(!seq.is_busy());
}

#[test]
fn same_seed_gives_the_same_light_show() {
    let (t1, s1, log1, _) = setup(&["RUN"], 42);
    let (t2, s2, log2, _) = setup(&["RUN"], 42);
    drive(&t1, s1.run());
    drive(&t2, s2.run());
    t1.settle();
    t2.settle();
    assert_eq!(*log1.borrow(), *log2.borrow());
}
