//! Recording doubles for the display and delay seams.
//!
//! A [`Trace`] hands out a port handle and a delay handle that log every
//! call into one shared event list. Running the real player against them
//! captures the exact frame/hold sequence a pattern or show produces,
//! which is what the host tests and the preview binary consume.

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use heapless::Vec;

use crate::led::Frame;
use crate::pattern::Millis;
use crate::OutputDriver;

/// One observed call on a seam, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// The display was written.
    Frame(Frame),
    /// The delay source was asked to block this long.
    Hold(Millis),
}

/// Fixed-capacity event log.
///
/// Events past capacity are dropped, which any comparison then reports as
/// a length mismatch rather than a silent pass.
pub struct Trace<const N: usize> {
    events: RefCell<Vec<TraceEvent, N>>,
}

impl<const N: usize> Trace<N> {
    pub const fn new() -> Trace<N> {
        Trace {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Display handle that records [`TraceEvent::Frame`] entries.
    pub fn port(&self) -> TracePort<'_, N> {
        TracePort { trace: self }
    }

    /// Delay handle that records [`TraceEvent::Hold`] entries.
    pub fn delay(&self) -> TraceDelay<'_, N> {
        TraceDelay { trace: self }
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the trace and return everything recorded.
    pub fn into_events(self) -> Vec<TraceEvent, N> {
        self.events.into_inner()
    }

    fn push(&self, event: TraceEvent) {
        let _ = self.events.borrow_mut().push(event);
    }
}

impl<const N: usize> Default for Trace<N> {
    fn default() -> Trace<N> {
        Trace::new()
    }
}

/// Display seam of a [`Trace`].
pub struct TracePort<'a, const N: usize> {
    trace: &'a Trace<N>,
}

impl<const N: usize> OutputDriver for TracePort<'_, N> {
    fn write(&mut self, frame: Frame) {
        self.trace.push(TraceEvent::Frame(frame));
    }
}

/// Delay seam of a [`Trace`].
pub struct TraceDelay<'a, const N: usize> {
    trace: &'a Trace<N>,
}

impl<const N: usize> DelayMs<Millis> for TraceDelay<'_, N> {
    fn delay_ms(&mut self, ms: Millis) {
        self.trace.push(TraceEvent::Hold(ms));
    }
}
