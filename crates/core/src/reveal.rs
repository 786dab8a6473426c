//! Reveal-on-enter bookkeeping
//!
//! Elements start out pending. The first time one is reported intersecting
//! it leaves the pending set and a [`RevealAction`] is emitted carrying its
//! delay; the adapter stops observing it and adds the visible class once the
//! delay has passed. An element is revealed at most once.

use std::time::Duration;

/// Longest delay a browser timer honors (`i32::MAX` milliseconds).
pub const MAX_DELAY_MS: u64 = 2_147_483_647;

/// Reads a delay attribute as milliseconds.
///
/// Missing, blank, unparsable, negative and non-finite values all mean no
/// delay. Fractions are truncated and values beyond [`MAX_DELAY_MS`] are
/// clamped.
///
/// ```
/// use std::time::Duration;
/// use pagefx_core::reveal::parse_delay;
///
/// assert_eq!(parse_delay(Some("250")), Duration::from_millis(250));
/// assert_eq!(parse_delay(Some(" 1e3 ")), Duration::from_millis(1000));
/// assert_eq!(parse_delay(Some("soon")), Duration::ZERO);
/// assert_eq!(parse_delay(None), Duration::ZERO);
/// ```
#[must_use]
pub fn parse_delay(raw: Option<&str>) -> Duration {
    let Some(ms) = raw.and_then(|s| s.trim().parse::<f64>().ok()) else {
        return Duration::ZERO;
    };
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let whole = ms.trunc().min(MAX_DELAY_MS as f64) as u64;
    Duration::from_millis(whole)
}

/// One observer report for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection<K> {
    pub target: K,
    pub is_intersecting: bool,
    pub delay: Duration,
}

/// An element that should become visible after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealAction<K> {
    pub target: K,
    pub delay: Duration,
}

/// Tracks which observed elements are still waiting to be revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    pending: Vec<K>,
}

impl<K: PartialEq> RevealTracker<K> {
    pub fn new(targets: impl IntoIterator<Item = K>) -> Self {
        Self {
            pending: targets.into_iter().collect(),
        }
    }

    /// Consumes a batch of observer reports.
    ///
    /// Returns one action per pending element reported intersecting, in
    /// report order. Non-intersecting reports and reports for elements that
    /// already revealed (or were never tracked) are ignored.
    pub fn on_intersections(
        &mut self,
        entries: impl IntoIterator<Item = Intersection<K>>,
    ) -> Vec<RevealAction<K>> {
        let mut actions = Vec::new();
        for entry in entries.into_iter().filter(|e| e.is_intersecting) {
            let Some(position) = self.pending.iter().position(|k| *k == entry.target) else {
                continue;
            };
            self.pending.swap_remove(position);
            actions.push(RevealAction {
                target: entry.target,
                delay: entry.delay,
            });
        }
        actions
    }

    #[cfg(test)]
    fn is_pending(&self, target: &K) -> bool {
        self.pending.contains(target)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drops every pending element; later reports are ignored.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(target: &'static str, delay_ms: u64) -> Intersection<&'static str> {
        Intersection {
            target,
            is_intersecting: true,
            delay: Duration::from_millis(delay_ms),
        }
    }

    #[test]
    fn test_parse_delay_defaults_to_zero() {
        assert_eq!(parse_delay(None), Duration::ZERO);
        assert_eq!(parse_delay(Some("")), Duration::ZERO);
        assert_eq!(parse_delay(Some("   ")), Duration::ZERO);
        assert_eq!(parse_delay(Some("300ms")), Duration::ZERO);
        assert_eq!(parse_delay(Some("-50")), Duration::ZERO);
        assert_eq!(parse_delay(Some("NaN")), Duration::ZERO);
        assert_eq!(parse_delay(Some("inf")), Duration::ZERO);
    }

    #[test]
    fn test_parse_delay_truncates_and_clamps() {
        assert_eq!(parse_delay(Some("150.9")), Duration::from_millis(150));
        assert_eq!(
            parse_delay(Some("99999999999")),
            Duration::from_millis(MAX_DELAY_MS)
        );
    }

    #[test]
    fn test_reveals_each_target_once() {
        let mut tracker = RevealTracker::new(["hero", "features"]);

        let first = tracker.on_intersections([hit("hero", 0)]);
        assert_eq!(first.len(), 1);
        assert!(!tracker.is_pending(&"hero"));

        let again = tracker.on_intersections([hit("hero", 0)]);
        assert!(again.is_empty());
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_non_intersecting_reports_ignored() {
        let mut tracker = RevealTracker::new(["hero"]);
        let actions = tracker.on_intersections([Intersection {
            target: "hero",
            is_intersecting: false,
            delay: Duration::ZERO,
        }]);
        assert!(actions.is_empty());
        assert!(tracker.is_pending(&"hero"));
    }

    #[test]
    fn test_actions_carry_delay_in_report_order() {
        let mut tracker = RevealTracker::new(["a", "b", "c"]);
        let actions = tracker.on_intersections([hit("c", 300), hit("a", 100), hit("zzz", 5)]);
        assert_eq!(
            actions,
            vec![
                RevealAction {
                    target: "c",
                    delay: Duration::from_millis(300)
                },
                RevealAction {
                    target: "a",
                    delay: Duration::from_millis(100)
                },
            ]
        );
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_clear_stops_future_reveals() {
        let mut tracker = RevealTracker::new(["a"]);
        tracker.clear();
        assert!(tracker.on_intersections([hit("a", 0)]).is_empty());
    }
}
