//! Integration tests for the gate controller flow.

use std::time::{Duration, Instant};

use termgate::gate::messages;
use termgate::{Gate, Sequence, SequenceTick, Verdict};

use super::helpers::seeded_rng;

#[test]
fn granted_path_fires_exactly_once_per_animation_cycle() {
    let mut gate = Gate::new("demo");
    let mut rng = seeded_rng(10);

    let mut grants = 0;
    for _ in 0..5 {
        if gate.submit("demo", &mut rng) == Verdict::Granted {
            grants += 1;
        }
    }
    assert_eq!(grants, 1, "re-entrant submissions ignored while animating");

    gate.animation_finished();
    assert_eq!(gate.submit("demo", &mut rng), Verdict::Granted);
}

#[test]
fn denial_plays_a_single_line_then_the_input_clears() {
    let mut gate = Gate::new("demo");
    let mut rng = seeded_rng(20);
    let mut input = String::from("wrong");

    let denial = match gate.submit(&input, &mut rng) {
        Verdict::Denied(msg) => msg,
        other => panic!("expected a denial, got {:?}", other),
    };
    assert!(messages::ACCESS_DENIED.contains(&denial));

    // The denial reveal is a single line with no post-delay.
    let start = Instant::now();
    let mut seq = Sequence::single(denial, Duration::from_millis(15));
    let mut panel: Vec<String> = Vec::new();
    let mut finished = false;
    for ms in 0..5_000u64 {
        let now = start + Duration::from_millis(ms);
        if seq.tick(now, &mut rng, &mut panel) == SequenceTick::Finished {
            finished = true;
            break;
        }
    }
    assert!(finished);
    assert_eq!(panel, vec![denial.to_string()]);

    // The controller clears the field only after that reveal.
    input.clear();
    gate.animation_finished();
    assert!(input.is_empty());
    assert!(!gate.is_animating());
}

#[test]
fn denial_choice_is_deterministic_for_a_seeded_source() {
    let pick = |seed: u64| {
        let mut gate = Gate::new("demo");
        let mut rng = seeded_rng(seed);
        match gate.submit("nope", &mut rng) {
            Verdict::Denied(msg) => msg,
            other => panic!("expected a denial, got {:?}", other),
        }
    };

    assert_eq!(pick(33), pick(33));
}

#[test]
fn boot_messages_feed_the_sequencer_unchanged() {
    let lines: Vec<String> = messages::BOOT_SEQUENCE.iter().map(|s| s.to_string()).collect();
    let mut seq = Sequence::new(lines, Duration::from_millis(1), Duration::from_millis(2));
    let mut panel: Vec<String> = Vec::new();
    let mut rng = seeded_rng(44);

    let start = Instant::now();
    for ms in 0..60_000u64 {
        let now = start + Duration::from_micros(ms * 500);
        if seq.tick(now, &mut rng, &mut panel) == SequenceTick::Finished {
            break;
        }
    }

    let expected: Vec<String> = messages::BOOT_SEQUENCE.iter().map(|s| s.to_string()).collect();
    assert_eq!(panel, expected);
}
