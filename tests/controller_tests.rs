// Host-side tests for the interaction controller under simulated time.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod anxiety {
        include!("../src/core/anxiety.rs");
    }
    pub mod confetti {
        include!("../src/core/confetti.rs");
    }
    pub mod controller {
        include!("../src/core/controller.rs");
    }
    pub mod evasion {
        include!("../src/core/evasion.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod messages {
        include!("../src/core/messages.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use crate::core::anxiety::AnxietyLevel;
use crate::core::confetti::CONFETTI_COUNT;
use crate::core::controller::*;
use crate::core::evasion::ZONE_MARGIN;
use crate::core::geometry::{Layout, Rect};
use crate::core::messages::{NERVOUS_MESSAGES, PANICKING_MESSAGES, SUCCESS_MESSAGES};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn layout() -> Layout {
    Layout {
        button: Rect::new(450.0, 475.0, 100.0, 50.0),
        zone: Rect::new(0.0, 0.0, 1000.0, 1000.0),
    }
}

// Cursor `d` pixels to the right of the button center.
fn at(d: f32) -> Vec2 {
    layout().button.center() + Vec2::new(d, 0.0)
}

fn button(seed: u64) -> AnxiousButton<StdRng> {
    AnxiousButton::new(StdRng::seed_from_u64(seed))
}

fn shown_message(fx: &[Effect]) -> Option<&'static str> {
    fx.iter().find_map(|e| match e {
        Effect::ShowPanicMessage(m) => Some(*m),
        _ => None,
    })
}

fn hides(fx: &[Effect]) -> bool {
    fx.contains(&Effect::HidePanicMessage)
}

fn count<F: Fn(&Effect) -> bool>(fx: &[Effect], f: F) -> usize {
    fx.iter().filter(|e| f(*e)).count()
}

#[test]
fn end_to_end_catch_sequence() {
    let mut b = button(42);

    let fx = b.pointer_moved(ms(0), at(250.0), layout());
    assert_eq!(b.level(), AnxietyLevel::Calm);
    assert!(shown_message(&fx).is_none());
    assert!(!fx.iter().any(|e| matches!(e, Effect::SetLevel(_))));

    let fx = b.pointer_moved(ms(100), at(120.0), layout());
    assert_eq!(b.level(), AnxietyLevel::Nervous);
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Nervous)));
    let msg = shown_message(&fx).expect("nervous shows a message");
    assert!(NERVOUS_MESSAGES.contains(&msg));

    let fx = b.pointer_moved(ms(200), at(50.0), layout());
    assert_eq!(b.level(), AnxietyLevel::Panicking);
    assert!(PANICKING_MESSAGES.contains(&shown_message(&fx).unwrap()));
    let moved = fx.iter().find_map(|e| match e {
        Effect::MoveButton(p) => Some(*p),
        _ => None,
    });
    let pos = moved.expect("panicking and within 80px evades");
    let zone = layout().zone;
    let btn = layout().button;
    assert!(pos.x >= ZONE_MARGIN && pos.x <= zone.width - btn.width - ZONE_MARGIN);
    assert!(pos.y >= ZONE_MARGIN && pos.y <= zone.height - btn.height - ZONE_MARGIN);
    assert_eq!(b.position(), Some(pos));
    assert!(fx.contains(&Effect::SetRunning(true)));

    let mut all = Vec::new();
    all.extend(b.click_evasive(ms(1000), layout()));
    assert!(b.has_been_clicked());
    assert!(all.contains(&Effect::MarkClicked(ButtonId::Evasive)));
    assert!(hides(&all));
    let label = all.iter().find_map(|e| match e {
        Effect::SetLabel(l) => Some(*l),
        _ => None,
    });
    assert!(SUCCESS_MESSAGES.contains(&label.unwrap()));

    all.extend(b.tick(ms(1799)));
    assert!(!all.contains(&Effect::ShowCrash));
    all.extend(b.tick(ms(1800)));
    assert!(all.contains(&Effect::ShowCrash));

    all.extend(b.tick(ms(3000)));
    assert_eq!(
        count(&all, |e| matches!(e, Effect::SpawnConfetti(_))),
        CONFETTI_COUNT
    );

    // frozen after the click
    for d in [10.0, 90.0, 130.0, 180.0, 400.0] {
        let fx = b.pointer_moved(ms(3100), at(d), layout());
        assert!(fx.is_empty());
        assert_eq!(b.level(), AnxietyLevel::Panicking);
    }
}

#[test]
fn yes_reveals_after_flash() {
    let mut b = button(3);
    let fx = b.click_yes(ms(0), layout());
    let open = fx.iter().position(|e| *e == Effect::OpenAudioFilter);
    let reveal = fx.iter().position(|e| *e == Effect::StartReveal);
    assert!(open.unwrap() < reveal.unwrap());
    assert!(fx.contains(&Effect::MarkClicked(ButtonId::Yes)));
    assert!(hides(&fx));

    assert!(!b.tick(ms(799)).contains(&Effect::RevealImage));
    assert!(b.tick(ms(800)).contains(&Effect::RevealImage));

    // the latch blocks the other outcome
    assert!(b.click_evasive(ms(900), layout()).is_empty());
    assert!(b.click_yes(ms(900), layout()).is_empty());
}

#[test]
fn reveal_flash_is_configurable() {
    let mut b = button(3).with_reveal_flash(ms(250));
    b.click_yes(ms(0), layout());
    assert!(b.tick(ms(250)).contains(&Effect::RevealImage));
}

#[test]
fn confetti_pieces_are_removed_after_their_lifetime() {
    let mut b = button(5);
    b.click_evasive(ms(0), layout());
    let first = b.tick(ms(0));
    assert_eq!(count(&first, |e| matches!(e, Effect::SpawnConfetti(_))), 1);

    let spawned = b.tick(ms(980));
    assert_eq!(
        count(&spawned, |e| matches!(e, Effect::SpawnConfetti(_))),
        CONFETTI_COUNT - 1
    );

    let early = b.tick(ms(3999));
    assert_eq!(count(&early, |e| matches!(e, Effect::RemoveConfetti(_))), 0);
    let removed = b.tick(ms(5000));
    assert_eq!(
        count(&removed, |e| matches!(e, Effect::RemoveConfetti(_))),
        CONFETTI_COUNT
    );
}

#[test]
fn long_frame_gap_fires_spawn_and_removal_together() {
    let mut b = button(6);
    b.click_evasive(ms(0), layout());
    let fx = b.tick(ms(10_000));
    assert_eq!(count(&fx, |e| matches!(e, Effect::SpawnConfetti(_))), CONFETTI_COUNT);
    assert_eq!(count(&fx, |e| matches!(e, Effect::RemoveConfetti(_))), CONFETTI_COUNT);
    assert!(fx.contains(&Effect::ShowCrash));
    assert_eq!(b.pending_timers(), 0);
}

#[test]
fn panic_message_hides_after_hold() {
    let mut b = button(7);
    b.pointer_moved(ms(0), at(120.0), layout());
    assert!(!hides(&b.tick(ms(1999))));
    assert!(hides(&b.tick(ms(2000))));
}

#[test]
fn returning_to_calm_hides_immediately() {
    let mut b = button(8);
    b.pointer_moved(ms(0), at(120.0), layout());
    let fx = b.pointer_moved(ms(500), at(300.0), layout());
    assert_eq!(b.level(), AnxietyLevel::Calm);
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Calm)));
    assert!(hides(&fx));
    assert!(shown_message(&fx).is_none());
}

#[test]
fn panicking_message_persists_past_hold() {
    let mut b = button(9);
    let fx = b.pointer_moved(ms(0), at(50.0), layout());
    assert!(shown_message(&fx).is_some());
    let later = b.tick(ms(2500));
    assert!(!hides(&later));
    assert_eq!(b.level(), AnxietyLevel::Panicking);
}

#[test]
fn retrigger_restarts_the_hide_timer() {
    let mut b = button(10);
    b.pointer_moved(ms(0), at(170.0), layout());
    b.pointer_moved(ms(1500), at(120.0), layout());
    assert!(!hides(&b.tick(ms(2000))));
    assert!(!hides(&b.tick(ms(3499))));
    assert!(hides(&b.tick(ms(3500))));
}

#[test]
fn evasion_locks_until_move_transition_ends() {
    let mut b = button(11);
    let fx = b.pointer_moved(ms(0), at(50.0), layout());
    assert!(fx.iter().any(|e| matches!(e, Effect::MoveButton(_))));
    assert!(b.is_running_away());

    // still locked: no second move, no jitter
    let fx = b.pointer_moved(ms(100), at(40.0), layout());
    assert!(!fx.iter().any(|e| matches!(e, Effect::MoveButton(_))));
    assert!(!fx.iter().any(|e| matches!(e, Effect::Jitter(_) | Effect::ClearJitter)));

    assert!(b.tick(ms(200)).contains(&Effect::SetRunning(false)));
    assert!(!b.is_running_away());
    let fx = b.pointer_moved(ms(250), at(40.0), layout());
    assert!(fx.iter().any(|e| matches!(e, Effect::MoveButton(_))));
}

#[test]
fn no_evasion_between_80_and_60_or_when_not_panicking() {
    let mut b = button(12);
    // very nervous at 70px: inside 80 but not panicking
    let fx = b.pointer_moved(ms(0), at(70.0), layout());
    assert_eq!(b.level(), AnxietyLevel::VeryNervous);
    assert!(!fx.iter().any(|e| matches!(e, Effect::MoveButton(_))));
    assert!(!b.is_running_away());
}

#[test]
fn tiny_zone_skips_evasion() {
    let mut b = button(13);
    let cramped = Layout {
        button: Rect::new(10.0, 10.0, 100.0, 50.0),
        zone: Rect::new(0.0, 0.0, 120.0, 120.0),
    };
    let cursor = cramped.button.center() + Vec2::new(20.0, 0.0);
    let fx = b.pointer_moved(ms(0), cursor, cramped);
    assert_eq!(b.level(), AnxietyLevel::Panicking);
    assert!(!fx.iter().any(|e| matches!(e, Effect::MoveButton(_) | Effect::SetRunning(_))));
    assert!(!b.is_running_away());
    assert_eq!(b.position(), None);
}

#[test]
fn jitter_only_when_nervous_and_bounded() {
    let mut b = button(14);
    let fx = b.pointer_moved(ms(0), at(300.0), layout());
    assert!(fx.contains(&Effect::ClearJitter));

    b.pointer_moved(ms(10), at(120.0), layout());
    for i in 0..50 {
        let fx = b.pointer_moved(ms(20 + i), at(120.0), layout());
        let j = fx
            .iter()
            .find_map(|e| match e {
                Effect::Jitter(v) => Some(*v),
                _ => None,
            })
            .expect("nervous cursor moves jitter");
        assert!(j.x >= -2.0 && j.x < 2.0);
        assert!(j.y >= -2.0 && j.y < 2.0);
    }
}

#[test]
fn seeded_runs_are_deterministic() {
    let run = |seed| {
        let mut b = button(seed);
        let mut out = Vec::new();
        out.extend(b.pointer_moved(ms(0), at(120.0), layout()));
        out.extend(b.pointer_moved(ms(10), at(50.0), layout()));
        out.extend(b.click_evasive(ms(20), layout()));
        out.extend(b.tick(ms(5000)));
        out
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn reset_unlatches_and_restores_calm() {
    let mut b = button(15);
    b.pointer_moved(ms(0), at(50.0), layout());
    b.click_evasive(ms(10), layout());
    assert!(b.has_been_clicked());

    let fx = b.reset();
    assert_eq!(fx[0], Effect::Reset);
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Calm)));
    assert!(hides(&fx));
    assert!(!b.has_been_clicked());
    assert_eq!(b.level(), AnxietyLevel::Calm);
    assert_eq!(b.position(), None);

    let fx = b.pointer_moved(ms(20), at(120.0), layout());
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Nervous)));
}

#[test]
fn reset_from_panic_clears_level_and_message() {
    let mut b = button(16);
    let fx = b.pointer_moved(ms(0), at(50.0), layout());
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Panicking)));
    // the panicking message outlives its hold
    assert!(!hides(&b.tick(ms(2500))));

    let fx = b.reset();
    assert!(fx.contains(&Effect::SetLevel(AnxietyLevel::Calm)));
    assert!(hides(&fx));
    assert_eq!(b.pending_timers(), 0);

    // already calm, so a far move has nothing left to correct
    let fx = b.pointer_moved(ms(2600), at(400.0), layout());
    assert_eq!(count(&fx, |e| matches!(e, Effect::SetLevel(_))), 0);
    assert_eq!(b.level(), AnxietyLevel::Calm);
}

#[test]
fn reset_cancels_a_pending_hide() {
    let mut b = button(17);
    b.pointer_moved(ms(0), at(120.0), layout());
    b.reset();
    assert!(b.tick(ms(5000)).is_empty());
}

#[test]
fn yes_bursts_full_confetti_from_the_evasive_button() {
    let mut b = button(18);
    let origin = layout().button.center();
    b.click_yes(ms(0), layout());
    let fx = b.tick(ms(2000));
    let pieces: Vec<_> = fx
        .iter()
        .filter_map(|e| match e {
            Effect::SpawnConfetti(p) => Some(p.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(pieces.len(), CONFETTI_COUNT);
    assert!(pieces.iter().all(|p| (p.left - origin.x).abs() <= 100.0));
    assert!(fx.contains(&Effect::RevealImage));
    assert_eq!(
        count(&b.tick(ms(6000)), |e| matches!(e, Effect::RemoveConfetti(_))),
        CONFETTI_COUNT
    );
}
