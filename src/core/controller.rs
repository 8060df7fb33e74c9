use super::anxiety::{level_for_distance, AnxietyLevel};
use super::confetti::{spawn_offset, ConfettiPiece, CONFETTI_COUNT, CONFETTI_LIFETIME};
use super::evasion::{plan_escape, EVADE_LOCK, EVADE_TRIGGER_DISTANCE};
use super::geometry::Layout;
use super::messages::{pick_panic_message, pick_success_message};
use super::timeline::{Timeline, TimerId};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

// A panic line stays up this long unless the level keeps changing.
pub const PANIC_MESSAGE_HOLD: Duration = Duration::from_millis(2000);
// Delay between catching the button and the fake crash screen.
pub const CRASH_DELAY: Duration = Duration::from_millis(800);
pub const DEFAULT_REVEAL_FLASH: Duration = Duration::from_millis(800);
// Peak-to-peak micro-jitter in CSS pixels.
pub const JITTER_AMPLITUDE: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    Evasive,
    Yes,
}

/// A single DOM/audio command. The browser layer applies these in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Drop every level class from the button and body, then apply this one.
    SetLevel(AnxietyLevel),
    ShowPanicMessage(&'static str),
    HidePanicMessage,
    Jitter(Vec2),
    ClearJitter,
    /// Zone-relative `left/top` in CSS pixels.
    MoveButton(Vec2),
    SetRunning(bool),
    MarkClicked(ButtonId),
    SetLabel(&'static str),
    ShowCrash,
    StartReveal,
    RevealImage,
    /// Start the background music if needed, then open its low-pass.
    OpenAudioFilter,
    SpawnConfetti(ConfettiPiece),
    RemoveConfetti(u32),
    /// Unlatch the evasive button: label, `clicked` class and position.
    Reset,
}

pub type Effects = SmallVec<[Effect; 8]>;

#[derive(Clone, Debug)]
enum Deferred {
    HidePanicUnlessPanicking,
    ReleaseRunning,
    ShowCrash,
    RevealImage,
    SpawnConfetti(ConfettiPiece),
    RemoveConfetti(u32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub level: AnxietyLevel,
    pub has_been_clicked: bool,
    pub is_running_away: bool,
}

/// Owns all interaction state for one evasive button and turns cursor, click
/// and clock input into [`Effect`]s.
pub struct AnxiousButton<R: Rng> {
    state: InteractionState,
    rng: R,
    timeline: Timeline<Deferred>,
    panic_hide: Option<TimerId>,
    position: Option<Vec2>,
    reveal_flash: Duration,
    next_confetti_id: u32,
}

impl<R: Rng> AnxiousButton<R> {
    pub fn new(rng: R) -> Self {
        Self {
            state: InteractionState::default(),
            rng,
            timeline: Timeline::new(),
            panic_hide: None,
            position: None,
            reveal_flash: DEFAULT_REVEAL_FLASH,
            next_confetti_id: 0,
        }
    }

    pub fn with_reveal_flash(mut self, flash: Duration) -> Self {
        self.reveal_flash = flash;
        self
    }

    #[cfg(test)]
    pub fn level(&self) -> AnxietyLevel {
        self.state.level
    }

    pub fn has_been_clicked(&self) -> bool {
        self.state.has_been_clicked
    }

    #[cfg(test)]
    pub fn is_running_away(&self) -> bool {
        self.state.is_running_away
    }

    /// Last zone-relative position set by an evasion; `None` means CSS default.
    #[cfg(test)]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timeline.len()
    }

    pub fn pointer_moved(&mut self, now: Duration, cursor: Vec2, layout: Layout) -> Effects {
        let mut fx = Effects::new();
        if self.state.has_been_clicked {
            return fx;
        }
        let distance = layout.cursor_distance(cursor);

        if !self.state.is_running_away {
            if self.state.level.is_calm() {
                fx.push(Effect::ClearJitter);
            } else {
                let half = JITTER_AMPLITUDE / 2.0;
                let dx = self.rng.gen_range(-half..half);
                let dy = self.rng.gen_range(-half..half);
                fx.push(Effect::Jitter(Vec2::new(dx, dy)));
            }
        }

        self.update_level(now, distance, &mut fx);
        self.try_evade(now, cursor, distance, layout, &mut fx);
        fx
    }

    fn update_level(&mut self, now: Duration, distance: f32, fx: &mut Effects) {
        if self.state.has_been_clicked {
            return;
        }
        let next = level_for_distance(distance);
        if next == self.state.level {
            return;
        }
        log::debug!("[anxiety] {:?} -> {:?} at {:.1}px", self.state.level, next, distance);
        self.state.level = next;
        fx.push(Effect::SetLevel(next));

        if next.is_calm() {
            fx.push(Effect::HidePanicMessage);
        } else {
            self.show_panic_message(now, fx);
        }
    }

    fn show_panic_message(&mut self, now: Duration, fx: &mut Effects) {
        let Some(message) = pick_panic_message(self.state.level, &mut self.rng) else {
            return;
        };
        fx.push(Effect::ShowPanicMessage(message));
        if let Some(id) = self.panic_hide.take() {
            self.timeline.cancel(id);
        }
        self.panic_hide = Some(
            self.timeline
                .schedule(now + PANIC_MESSAGE_HOLD, Deferred::HidePanicUnlessPanicking),
        );
    }

    fn try_evade(
        &mut self,
        now: Duration,
        cursor: Vec2,
        distance: f32,
        layout: Layout,
        fx: &mut Effects,
    ) {
        if self.state.has_been_clicked || self.state.is_running_away {
            return;
        }
        if self.state.level != AnxietyLevel::Panicking || distance >= EVADE_TRIGGER_DISTANCE {
            return;
        }
        let Some(pos) = plan_escape(cursor, layout.button, layout.zone) else {
            log::debug!(
                "[evade] zone {:.0}x{:.0} too small, staying put",
                layout.zone.width,
                layout.zone.height
            );
            return;
        };
        log::debug!("[evade] moving to ({:.1}, {:.1})", pos.x, pos.y);
        self.state.is_running_away = true;
        self.position = Some(pos);
        fx.push(Effect::SetRunning(true));
        fx.push(Effect::MoveButton(pos));
        self.timeline.schedule(now + EVADE_LOCK, Deferred::ReleaseRunning);
    }

    /// The evasive button was caught.
    pub fn click_evasive(&mut self, now: Duration, layout: Layout) -> Effects {
        let mut fx = Effects::new();
        if self.state.has_been_clicked {
            return fx;
        }
        self.state.has_been_clicked = true;
        log::info!("[click] caught at level {:?}", self.state.level);

        self.timeline.schedule(now + CRASH_DELAY, Deferred::ShowCrash);
        fx.push(Effect::MarkClicked(ButtonId::Evasive));
        fx.push(Effect::SetLabel(pick_success_message(&mut self.rng)));
        fx.push(Effect::HidePanicMessage);
        self.burst_confetti(now, layout);
        fx
    }

    /// The "yes" control was chosen.
    pub fn click_yes(&mut self, now: Duration, layout: Layout) -> Effects {
        let mut fx = Effects::new();
        if self.state.has_been_clicked {
            return fx;
        }
        self.state.has_been_clicked = true;
        log::info!("[click] yes at level {:?}", self.state.level);

        fx.push(Effect::OpenAudioFilter);
        fx.push(Effect::StartReveal);
        self.timeline
            .schedule(now + self.reveal_flash, Deferred::RevealImage);
        fx.push(Effect::MarkClicked(ButtonId::Yes));
        fx.push(Effect::HidePanicMessage);
        self.burst_confetti(now, layout);
        fx
    }

    fn burst_confetti(&mut self, now: Duration, layout: Layout) {
        let origin = layout.button.center();
        for i in 0..CONFETTI_COUNT {
            let id = self.next_confetti_id;
            self.next_confetti_id = self.next_confetti_id.wrapping_add(1);
            let piece = ConfettiPiece::random(id, origin, &mut self.rng);
            self.timeline
                .schedule(now + spawn_offset(i), Deferred::SpawnConfetti(piece));
        }
    }

    /// Fire every deferred task due at `now`, including ones scheduled by
    /// tasks fired in the same call.
    pub fn tick(&mut self, now: Duration) -> Effects {
        let mut fx = Effects::new();
        loop {
            let due = self.timeline.drain_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                self.run_deferred(at, task, &mut fx);
            }
        }
        fx
    }

    fn run_deferred(&mut self, at: Duration, task: Deferred, fx: &mut Effects) {
        match task {
            Deferred::HidePanicUnlessPanicking => {
                self.panic_hide = None;
                if self.state.level != AnxietyLevel::Panicking {
                    fx.push(Effect::HidePanicMessage);
                }
            }
            Deferred::ReleaseRunning => {
                self.state.is_running_away = false;
                fx.push(Effect::SetRunning(false));
            }
            Deferred::ShowCrash => fx.push(Effect::ShowCrash),
            Deferred::RevealImage => fx.push(Effect::RevealImage),
            Deferred::SpawnConfetti(piece) => {
                self.timeline
                    .schedule(at + CONFETTI_LIFETIME, Deferred::RemoveConfetti(piece.id));
                fx.push(Effect::SpawnConfetti(piece));
            }
            Deferred::RemoveConfetti(id) => fx.push(Effect::RemoveConfetti(id)),
        }
    }

    /// Developer hook: unlatch and return the button to its calm, unmoved state.
    pub fn reset(&mut self) -> Effects {
        let mut fx = Effects::new();
        if let Some(id) = self.panic_hide.take() {
            self.timeline.cancel(id);
        }
        self.state.has_been_clicked = false;
        self.state.level = AnxietyLevel::Calm;
        self.position = None;
        fx.push(Effect::Reset);
        fx.push(Effect::SetLevel(AnxietyLevel::Calm));
        fx.push(Effect::HidePanicMessage);
        fx.push(Effect::ClearJitter);
        fx
    }
}
