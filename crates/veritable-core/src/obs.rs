//! Check-evaluation sink boundary.
//!
//! Comparator logic MUST NOT touch counters directly; all
//! instrumentation flows through CheckEvent and CheckSink. The default
//! sink keeps per-thread counters so test runs stay independent.

use crate::error::CompareOp;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static COUNTERS: RefCell<CheckCounters> = const { RefCell::new(CheckCounters::new()) };
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn CheckSink>>> = const { RefCell::new(None) };
}

///
/// CheckEvent
///

#[derive(Clone, Copy, Debug)]
pub enum CheckEvent {
    Evaluated { op: CompareOp },
    Failed { op: CompareOp },
}

///
/// CheckSink
///

pub trait CheckSink {
    fn record(&self, event: CheckEvent);
}

///
/// CheckCounters
///
/// Default per-thread sink state.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CheckCounters {
    pub evaluated: u64,
    pub failed: u64,
}

impl CheckCounters {
    const fn new() -> Self {
        Self {
            evaluated: 0,
            failed: 0,
        }
    }
}

/// Route one event to the installed sink, or the default counters.
pub fn record(event: CheckEvent) {
    let sink = SINK_OVERRIDE.with(|s| s.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => COUNTERS.with(|c| {
            let mut counters = c.borrow_mut();
            match event {
                CheckEvent::Evaluated { .. } => counters.evaluated += 1,
                CheckEvent::Failed { .. } => counters.failed += 1,
            }
        }),
    }
}

/// Install a sink for the current thread, replacing the default counters.
pub fn install_sink(sink: Rc<dyn CheckSink>) {
    SINK_OVERRIDE.with(|s| *s.borrow_mut() = Some(sink));
}

/// Restore the default counter sink for the current thread.
pub fn clear_sink() {
    SINK_OVERRIDE.with(|s| *s.borrow_mut() = None);
}

/// Snapshot of the default counters for the current thread.
#[must_use]
pub fn counters() -> CheckCounters {
    COUNTERS.with(|c| *c.borrow())
}

/// Reset the default counters for the current thread.
pub fn reset_counters() {
    COUNTERS.with(|c| *c.borrow_mut() = CheckCounters::new());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sink_counts_per_thread() {
        reset_counters();
        record(CheckEvent::Evaluated { op: CompareOp::Eq });
        record(CheckEvent::Evaluated { op: CompareOp::Lt });
        record(CheckEvent::Failed { op: CompareOp::Lt });

        assert_eq!(
            counters(),
            CheckCounters {
                evaluated: 2,
                failed: 1
            }
        );
        reset_counters();
        assert_eq!(counters(), CheckCounters::default());
    }

    #[test]
    fn installed_sink_intercepts_events() {
        use std::cell::Cell;

        struct Capture(Cell<u64>);
        impl CheckSink for Capture {
            fn record(&self, _event: CheckEvent) {
                self.0.set(self.0.get() + 1);
            }
        }

        reset_counters();
        let capture = Rc::new(Capture(Cell::new(0)));
        install_sink(capture.clone());
        record(CheckEvent::Evaluated { op: CompareOp::Eq });
        clear_sink();
        record(CheckEvent::Evaluated { op: CompareOp::Eq });

        assert_eq!(capture.0.get(), 1);
        assert_eq!(counters().evaluated, 1);
        reset_counters();
    }
}
