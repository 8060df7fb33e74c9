use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_STAGGER: Duration = Duration::from_millis(20);
pub const CONFETTI_LIFETIME: Duration = Duration::from_millis(4000);
pub const CONFETTI_COLORS: [&str; 5] = ["#FFE66D", "#FF6B6B", "#4ECDC4", "#95E1D3", "#A8E6CF"];

// Horizontal scatter around the burst origin (total width).
const SPREAD_X: f32 = 100.0;
const SIZE_MIN: f32 = 5.0;
const SIZE_SPAN: f32 = 10.0;
const DURATION_MIN_SEC: f32 = 2.0;
const DURATION_SPAN_SEC: f32 = 2.0;
const DELAY_MAX_SEC: f32 = 0.5;

/// One decorative piece. Sizes in CSS pixels, times in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub id: u32,
    pub color: &'static str,
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(id: u32, origin: Vec2, rng: &mut R) -> Self {
        let color = CONFETTI_COLORS
            .choose(rng)
            .copied()
            .unwrap_or(CONFETTI_COLORS[0]);
        Self {
            id,
            color,
            left: origin.x + (rng.gen::<f32>() - 0.5) * SPREAD_X,
            top: origin.y,
            size: SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN,
            duration_sec: DURATION_MIN_SEC + rng.gen::<f32>() * DURATION_SPAN_SEC,
            delay_sec: rng.gen::<f32>() * DELAY_MAX_SEC,
        }
    }

    /// Inline style for the piece's `div.confetti`.
    pub fn style(&self) -> String {
        format!(
            "background-color:{};left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;animation-duration:{:.3}s;animation-delay:{:.3}s",
            self.color, self.left, self.top, self.size, self.size, self.duration_sec, self.delay_sec
        )
    }
}

/// Offset from the burst start at which piece `index` appears.
#[inline]
pub fn spawn_offset(index: usize) -> Duration {
    CONFETTI_STAGGER * index as u32
}
