use crate::{Error, Result};
use std::collections::VecDeque;

/// First-in-first-out line of calls that arrived while every agent was busy, stored as their arrival timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitingQueue {
    arrivals: VecDeque<f64>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a call to the back of the line.
    pub fn enqueue(&mut self, arrival_time: f64) {
        self.arrivals.push_back(arrival_time);
    }

    /// Remove the call that has waited longest and return its arrival time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if nobody is waiting. Callers should check [`is_empty()`] first.
    ///
    /// [`is_empty()`]: WaitingQueue::is_empty
    pub fn dequeue(&mut self) -> Result<f64> {
        self.arrivals.pop_front().ok_or(Error::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
