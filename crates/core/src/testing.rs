//! Test doubles for driving the carousel without a browser
//!
//! [`RecordingView`] remembers what was last rendered; [`ManualScheduler`]
//! is a clock that only moves when told to and reports how many ticks fell
//! due. Both are cheap `Rc` handles: clone one, hand the clone to the
//! carousel, and inspect through the handle you kept.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::carousel::{CarouselView, IntervalScheduler, TrackOffset};

/// Snapshot of everything a [`RecordingView`] has been told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLog {
    pub offset: Option<TrackOffset>,
    pub dots: Vec<bool>,
    pub renders: usize,
}

/// A [`CarouselView`] that records instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    log: Rc<RefCell<ViewLog>>,
}

impl RecordingView {
    /// A view with `dots` indicator dots, all inactive.
    #[must_use]
    pub fn with_dots(dots: usize) -> Self {
        Self {
            log: Rc::new(RefCell::new(ViewLog {
                offset: None,
                dots: vec![false; dots],
                renders: 0,
            })),
        }
    }

    #[must_use]
    pub fn offset(&self) -> Option<TrackOffset> {
        self.log.borrow().offset
    }

    /// Positions of the dots currently marked active.
    #[must_use]
    pub fn active_dots(&self) -> Vec<usize> {
        self.log
            .borrow()
            .dots
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    #[must_use]
    pub fn dot(&self, index: usize) -> Option<bool> {
        self.log.borrow().dots.get(index).copied()
    }

    /// Number of offset renders so far.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.log.borrow().renders
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewLog {
        self.log.borrow().clone()
    }
}

impl CarouselView for RecordingView {
    fn render_offset(&self, offset: TrackOffset) {
        let mut log = self.log.borrow_mut();
        log.offset = Some(offset);
        log.renders = log.renders.saturating_add(1);
    }

    fn set_dot_active(&self, dot: usize, active: bool) {
        if let Some(slot) = self.log.borrow_mut().dots.get_mut(dot) {
            *slot = active;
        }
    }
}

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: Vec<Scheduled>,
}

#[derive(Debug)]
struct Scheduled {
    id: u64,
    period: Duration,
    next_due: Duration,
}

/// An [`IntervalScheduler`] on a manually advanced clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    /// Timers created and not yet dropped.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Timers created over the scheduler's lifetime.
    #[must_use]
    pub fn created(&self) -> u64 {
        self.clock.borrow().next_id
    }

    /// Moves the clock forward and returns how many ticks fell due across
    /// all live timers.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.saturating_add(elapsed);
        let now = clock.now;

        let mut due = 0usize;
        for timer in clock.timers.iter_mut().filter(|t| !t.period.is_zero()) {
            while timer.next_due <= now {
                due = due.saturating_add(1);
                timer.next_due = timer.next_due.saturating_add(timer.period);
            }
        }
        due
    }
}

impl IntervalScheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn every(&self, period: Duration) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id = clock.next_id.saturating_add(1);
        let next_due = clock.now.saturating_add(period);
        clock.timers.push(Scheduled {
            id,
            period,
            next_due,
        });

        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

/// Handle returned by [`ManualScheduler::every`]; dropping it cancels.
#[derive(Debug)]
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        if let Ok(mut clock) = clock.try_borrow_mut() {
            clock.timers.retain(|t| t.id != self.id);
        }
    }
}
