//! Entrance animation timing rendered as inline CSS.
//!
//! Keyframes live in `style/main.css`; this module picks the keyframe and
//! computes delays so staggered sequences line up the same way on every page.
//! Values are recomputed per render and never stored.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Seconds each entrance takes unless overridden.
pub const DEFAULT_DURATION_SECS: f64 = 0.5;
/// Delay added between consecutive items of a staggered sequence.
pub const DEFAULT_STAGGER_SECS: f64 = 0.1;

/// Starting pose an element animates in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Opacity only.
    Fade,
    /// 20px below.
    FadeUp,
    /// 100px above (page header).
    SlideDown,
    /// 20px to the left.
    SlideRight,
    /// Scaled to 0.8.
    ScaleIn,
}

impl Entrance {
    #[must_use]
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Fade => "fade-in",
            Self::FadeUp => "fade-up",
            Self::SlideDown => "slide-down",
            Self::SlideRight => "slide-right",
            Self::ScaleIn => "scale-in",
        }
    }
}

/// One element's entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl Motion {
    #[must_use]
    pub const fn new(entrance: Entrance) -> Self {
        Self { entrance, delay_secs: 0.0, duration_secs: DEFAULT_DURATION_SECS }
    }

    #[must_use]
    pub const fn delayed(self, delay_secs: f64) -> Self {
        Self { delay_secs, ..self }
    }

    #[must_use]
    pub const fn lasting(self, duration_secs: f64) -> Self {
        Self { duration_secs, ..self }
    }

    /// Inline `style` value, e.g. `animation: fade-up 500ms ease-out 200ms backwards`.
    #[must_use]
    pub fn style(self) -> String {
        format!(
            "animation: {} {}ms ease-out {}ms backwards",
            self.entrance.keyframes(),
            secs_to_ms(self.duration_secs),
            secs_to_ms(self.delay_secs)
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn secs_to_ms(secs: f64) -> u64 {
    (secs.max(0.0) * 1000.0).round() as u64
}

/// Delay schedule for a sequence of items sharing one entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub entrance: Entrance,
    pub base_delay_secs: f64,
    pub interval_secs: f64,
    pub duration_secs: f64,
}

impl Stagger {
    #[must_use]
    pub const fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            base_delay_secs: 0.0,
            interval_secs: DEFAULT_STAGGER_SECS,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    #[must_use]
    pub const fn starting_at(self, base_delay_secs: f64) -> Self {
        Self { base_delay_secs, ..self }
    }

    #[must_use]
    pub const fn every(self, interval_secs: f64) -> Self {
        Self { interval_secs, ..self }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn delay_for(self, index: usize) -> f64 {
        self.base_delay_secs + self.interval_secs * index as f64
    }

    #[must_use]
    pub fn motion_for(self, index: usize) -> Motion {
        Motion::new(self.entrance)
            .delayed(self.delay_for(index))
            .lasting(self.duration_secs)
    }
}

/// An item placed in a staggered sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<T> {
    /// Position in the input slice.
    pub index: usize,
    pub item: T,
    pub motion: Motion,
}

/// Wrap each item with its entrance, preserving input order. `first_slot`
/// offsets the schedule when earlier siblings (a heading) share it.
#[must_use]
pub fn staggered<T: Clone>(items: &[T], stagger: Stagger, first_slot: usize) -> Vec<Row<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Row { index, item: item.clone(), motion: stagger.motion_for(first_slot + index) })
        .collect()
}
