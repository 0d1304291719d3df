mod scheduled_departure;

use crate::{Error, Result};
use ordered_float::NotNan;
use scheduled_departure::ScheduledDeparture;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Formatter;

/// The two kinds of state change a call center simulation knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
}

/// An event selected by the [`EventClock`], paired with its timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub time: f64,
    pub kind: EventKind,
}

/// Tracks the simulated clock, the single pending arrival, and the pending departures of all busy agents.
///
/// Departures live in a min-heap keyed by timestamp, so finding and removing the earliest one is `O(log n)` in the
/// number of busy agents. Departures with equal timestamps leave the heap in the order they were scheduled, and popping
/// removes exactly one of them.
///
/// # Tie-breaking
///
/// When the pending arrival and the earliest pending departure share a timestamp, the arrival is selected first. This
/// rule decides whether a call arriving at the instant an agent frees up waits in line or not, and the statistics the
/// engine produces depend on it; it must not be changed without re-deriving their expected behavior.
///
/// # Horizon
///
/// The clock never advances to a time at or beyond its horizon. [`next_event()`] refuses with
/// [`Error::HorizonExceeded`] instead, so callers should consult [`peek()`] first and stop once it reports such a time.
///
/// [`next_event()`]: EventClock::next_event
/// [`peek()`]: EventClock::peek
#[derive(Debug)]
pub struct EventClock {
    current_time: NotNan<f64>,
    horizon: NotNan<f64>,
    next_arrival: NotNan<f64>,
    departures: BinaryHeap<Reverse<ScheduledDeparture>>,
    departures_added: usize,
}

impl EventClock {
    /// Construct a clock at time zero with no pending departures and the first arrival scheduled at `first_arrival`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] if either argument is NaN, or [`Error::BackInTime`] if `first_arrival` is negative.
    pub fn new(horizon: f64, first_arrival: f64) -> Result<Self> {
        let start = to_time(0.0)?;
        let mut clock = Self {
            current_time: start,
            horizon: to_time(horizon)?,
            next_arrival: start,
            departures: BinaryHeap::default(),
            departures_added: 0,
        };
        clock.replace_arrival(first_arrival)?;
        Ok(clock)
    }

    /// Register a departure for an agent that has just started serving a call.
    ///
    /// # Errors
    ///
    /// If `time` is less than the current clock time, returns an [`Error::BackInTime`] without modifying the pending
    /// departures. NaN times are rejected with [`Error::InvalidTime`].
    pub fn schedule_departure(&mut self, time: f64) -> Result {
        let time = self.checked_time(time)?;
        let insertion_sequence = self.increment_departure_count();
        self.departures.push(Reverse(ScheduledDeparture {
            time,
            insertion_sequence,
        }));
        Ok(())
    }

    /// Replace the single outstanding arrival with one at `time`.
    ///
    /// # Errors
    ///
    /// If `time` is less than the current clock time, returns an [`Error::BackInTime`] and keeps the previous arrival.
    /// NaN times are rejected with [`Error::InvalidTime`].
    pub fn replace_arrival(&mut self, time: f64) -> Result {
        self.next_arrival = self.checked_time(time)?;
        Ok(())
    }

    /// Report which event would be selected next, without advancing the clock or removing anything.
    pub fn peek(&self) -> Event {
        match self.departures.peek() {
            Some(Reverse(departure)) if departure.time < self.next_arrival => Event {
                time: departure.time.into_inner(),
                kind: EventKind::Departure,
            },
            _ => Event {
                time: self.next_arrival.into_inner(),
                kind: EventKind::Arrival,
            },
        }
    }

    /// Select the next event and advance the clock to its timestamp. A selected departure is removed from the pending
    /// set; a selected arrival stays in place until the caller replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HorizonExceeded`] without changing any state if the next event lies at or beyond the horizon.
    pub fn next_event(&mut self) -> Result<Event> {
        let event = self.peek();
        if event.time >= self.horizon.into_inner() {
            return Err(Error::HorizonExceeded {
                time: event.time,
                horizon: self.horizon.into_inner(),
            });
        }

        let time = match event.kind {
            EventKind::Arrival => self.next_arrival,
            EventKind::Departure => match self.departures.pop() {
                Some(Reverse(departure)) => departure.time,
                None => self.next_arrival,
            },
        };
        self.current_time = time;
        Ok(event)
    }

    pub fn current_time(&self) -> f64 {
        self.current_time.into_inner()
    }

    pub fn horizon(&self) -> f64 {
        self.horizon.into_inner()
    }

    pub fn next_arrival(&self) -> f64 {
        self.next_arrival.into_inner()
    }

    /// Earliest pending departure, if any agent is busy.
    pub fn next_departure(&self) -> Option<f64> {
        self.departures
            .peek()
            .map(|Reverse(departure)| departure.time.into_inner())
    }

    pub fn pending_departures(&self) -> usize {
        self.departures.len()
    }

    fn checked_time(&self, time: f64) -> Result<NotNan<f64>> {
        let time = to_time(time)?;
        if time < self.current_time {
            return Err(Error::BackInTime {
                time: time.into_inner(),
                now: self.current_time.into_inner(),
            });
        }
        Ok(time)
    }

    fn increment_departure_count(&mut self) -> usize {
        let count = self.departures_added;
        self.departures_added += 1;
        count
    }
}

fn to_time(value: f64) -> Result<NotNan<f64>> {
    NotNan::new(value).map_err(|_| Error::InvalidTime)
}

impl std::fmt::Display for EventClock {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "EventClock at time {} with {} pending departures and next arrival at {}",
            self.current_time.into_inner(),
            self.departures.len(),
            self.next_arrival.into_inner()
        )
    }
}
