//! Integration tests for the multi-line sequencer.

use std::time::{Duration, Instant};

use termgate::{Sequence, SequenceTick};

use super::helpers::{seeded_rng, PanelOp, RecordingPanel};

const TICK: Duration = Duration::from_millis(15);
const DELAY: Duration = Duration::from_millis(300);

#[test]
fn empty_sequence_finishes_without_slots_or_ticks() {
    let mut seq = Sequence::new(Vec::new(), TICK, DELAY);
    let mut panel = RecordingPanel::new();
    let mut rng = seeded_rng(1);

    assert_eq!(
        seq.tick(Instant::now(), &mut rng, &mut panel),
        SequenceTick::Finished
    );
    assert!(panel.ops.is_empty(), "no slot, no write");
    assert!(seq.next_deadline().is_none());
}

#[test]
fn two_line_run_orders_slots_and_honors_the_delay() {
    let start = Instant::now();
    let mut seq = Sequence::new(vec!["A".into(), "B".into()], TICK, DELAY);
    let mut panel = RecordingPanel::new();
    let mut rng = seeded_rng(2);

    let mut second_slot_ms = None;
    let mut first_done_ms = None;
    let mut finished_ms = None;

    for ms in 0..5_000u64 {
        let now = start + Duration::from_millis(ms);
        let had_second = panel.pushes().len() == 2;
        match seq.tick(now, &mut rng, &mut panel) {
            SequenceTick::Finished => {
                finished_ms = Some(ms);
                break;
            }
            SequenceTick::Updated => {
                if first_done_ms.is_none() && panel.lines.first().map(String::as_str) == Some("A")
                {
                    first_done_ms = Some(ms);
                }
                if !had_second && panel.pushes().len() == 2 {
                    second_slot_ms = Some(ms);
                }
            }
            _ => {}
        }
    }

    let first_done = first_done_ms.expect("line A completed");
    let second_slot = second_slot_ms.expect("slot for B created");
    let finished = finished_ms.expect("sequence finished");

    assert_eq!(panel.pushes(), vec![0, 1], "slots created in input order");
    assert!(
        second_slot >= first_done + DELAY.as_millis() as u64,
        "B's slot at {}ms, A done at {}ms",
        second_slot,
        first_done
    );
    assert!(
        finished > second_slot,
        "completion strictly after B's reveal and post-delay"
    );
    assert_eq!(panel.lines, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn every_write_replaces_the_full_slot_text() {
    let start = Instant::now();
    let mut seq = Sequence::new(vec!["HELLO".into()], TICK, DELAY);
    let mut panel = RecordingPanel::new();
    let mut rng = seeded_rng(3);

    for ms in 0..5_000u64 {
        if seq.tick(start + Duration::from_millis(ms), &mut rng, &mut panel)
            == SequenceTick::Finished
        {
            break;
        }
    }

    let writes: Vec<&String> = panel
        .ops
        .iter()
        .filter_map(|op| match op {
            PanelOp::Set(0, text) => Some(text),
            _ => None,
        })
        .collect();

    // n + 1 full-length frames for a 5-character line.
    assert_eq!(writes.len(), 6);
    for text in writes {
        assert_eq!(text.chars().count(), 5);
    }
}

#[test]
fn cancelling_mid_sequence_suppresses_completion_permanently() {
    let start = Instant::now();
    let mut seq = Sequence::new(vec!["FIRST".into(), "SECOND".into()], TICK, DELAY);
    let mut panel = RecordingPanel::new();
    let mut rng = seeded_rng(4);

    // Let the first line start, then cancel mid-reveal.
    seq.tick(start, &mut rng, &mut panel);
    seq.tick(start + TICK, &mut rng, &mut panel);
    seq.cancel();

    for ms in 0..5_000u64 {
        let tick = seq.tick(start + Duration::from_millis(ms), &mut rng, &mut panel);
        assert_ne!(tick, SequenceTick::Finished, "late completion after cancel");
    }
    assert_eq!(panel.pushes(), vec![0], "second line never started");
}
