//! Turn clock for cooperative search cancellation.

use std::time::{Duration, Instant};

/// Remaining-time capability for one turn.
///
/// The controller owns a `Deadline` for the duration of one
/// [`choose_move`](crate::search::Agent::choose_move) call and lends it to
/// every recursive search frame, which only ever queries it. Once
/// [`remaining_ms`](Deadline::remaining_ms) goes negative the turn is
/// forfeit, so the search must bail out while some margin is still left.
pub struct Deadline {
    source: Source,
}

enum Source {
    Timer { expires_at: Instant },
    Callback(Box<dyn Fn() -> f64>),
}

impl Deadline {
    /// Deadline expiring `budget` from now, on the monotonic clock.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Deadline {
            source: Source::Timer {
                expires_at: Instant::now() + budget,
            },
        }
    }

    /// Deadline expiring `budget_ms` milliseconds from now.
    #[must_use]
    pub fn after_ms(budget_ms: u64) -> Self {
        Deadline::after(Duration::from_millis(budget_ms))
    }

    /// Deadline backed by a caller-supplied "milliseconds remaining"
    /// function, e.g. a match harness clock or a scripted test clock.
    #[must_use]
    pub fn from_fn(remaining_ms: impl Fn() -> f64 + 'static) -> Self {
        Deadline {
            source: Source::Callback(Box::new(remaining_ms)),
        }
    }

    /// Milliseconds left in the turn; negative once expired.
    #[must_use]
    pub fn remaining_ms(&self) -> f64 {
        match &self.source {
            Source::Timer { expires_at } => {
                let now = Instant::now();
                if let Some(left) = expires_at.checked_duration_since(now) {
                    left.as_secs_f64() * 1000.0
                } else {
                    -(now.duration_since(*expires_at).as_secs_f64() * 1000.0)
                }
            }
            Source::Callback(f) => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn timer_counts_down() {
        let deadline = Deadline::after_ms(5_000);
        let left = deadline.remaining_ms();
        assert!(left > 0.0 && left <= 5_000.0);
    }

    #[test]
    fn expired_timer_goes_negative() {
        let deadline = Deadline::after(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(deadline.remaining_ms() < 0.0);
    }

    #[test]
    fn callback_deadline_is_queried_each_time() {
        let calls = Cell::new(0u32);
        let deadline = Deadline::from_fn(move || {
            calls.set(calls.get() + 1);
            1000.0 - f64::from(calls.get()) * 400.0
        });
        assert_eq!(deadline.remaining_ms(), 600.0);
        assert_eq!(deadline.remaining_ms(), 200.0);
        assert!(deadline.remaining_ms() < 0.0);
    }
}
