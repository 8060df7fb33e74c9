use super::anxiety::AnxietyLevel;
use rand::seq::SliceRandom;
use rand::Rng;

pub const SLIGHTLY_NERVOUS_MESSAGES: &[&str] = &[
    "Um... hi there?",
    "Oh, you're getting close...",
    "I see you...",
    "Please be gentle...",
];

pub const NERVOUS_MESSAGES: &[&str] = &[
    "Wait, what are you doing?",
    "I'm not ready for this!",
    "Can we talk about this?",
    "Please don't!",
    "I'm getting nervous...",
];

pub const VERY_NERVOUS_MESSAGES: &[&str] = &[
    "No no no no no!",
    "PLEASE STOP!",
    "I can't handle this!",
    "Why are you doing this?!",
    "I'm literally shaking!",
    "BACK AWAY!",
];

pub const PANICKING_MESSAGES: &[&str] = &[
    "I'M FREAKING OUT!!!",
    "NOOOOOO!!!",
    "SOMEBODY HELP!!!",
    "I CAN'T BREATHE!",
    "THIS IS TOO MUCH!",
    "LEAVE ME ALONE!!!",
    "I'M OUTTA HERE!",
];

/// Label shown on the evasive button once it has been caught.
pub const SUCCESS_MESSAGES: &[&str] = &[
    "You did it! 🎉",
    "I'm okay! 💚",
    "That wasn't so bad!",
    "We're friends now! 😊",
    "Phew! I survived!",
];

pub const DEFAULT_LABEL: &str = "Click Me?";

/// Candidate panic lines for a level. Calm has no pool.
pub fn panic_pool(level: AnxietyLevel) -> Option<&'static [&'static str]> {
    match level {
        AnxietyLevel::Calm => None,
        AnxietyLevel::SlightlyNervous => Some(SLIGHTLY_NERVOUS_MESSAGES),
        AnxietyLevel::Nervous => Some(NERVOUS_MESSAGES),
        AnxietyLevel::VeryNervous => Some(VERY_NERVOUS_MESSAGES),
        AnxietyLevel::Panicking => Some(PANICKING_MESSAGES),
    }
}

pub fn pick_panic_message<R: Rng + ?Sized>(
    level: AnxietyLevel,
    rng: &mut R,
) -> Option<&'static str> {
    panic_pool(level).and_then(|pool| pool.choose(rng).copied())
}

pub fn pick_success_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUCCESS_MESSAGES.choose(rng).copied().unwrap_or(DEFAULT_LABEL)
}
