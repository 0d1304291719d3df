use ordered_float::NotNan;
use std::cmp::Ordering;

/// Helper struct for the pending-departure heap. Holds the departure time alongside a record of the insertion sequence.
///
/// The implementation of [`Ord`] on this struct cares first about the departure time, comparing the insertion sequences
/// only to break ties so that equal timestamps leave the heap in the order they were scheduled.
#[derive(Debug, Clone, Copy)]
pub(super) struct ScheduledDeparture {
    pub time: NotNan<f64>,
    pub insertion_sequence: usize,
}

impl PartialEq<Self> for ScheduledDeparture {
    fn eq(&self, other: &Self) -> bool {
        self.insertion_sequence == other.insertion_sequence && self.time == other.time
    }
}

impl Eq for ScheduledDeparture {}

impl PartialOrd<Self> for ScheduledDeparture {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledDeparture {
    fn cmp(&self, other: &Self) -> Ordering {
        let comparison = self.time.cmp(&other.time);
        match comparison {
            Ordering::Equal => self.insertion_sequence.cmp(&other.insertion_sequence),
            _ => comparison,
        }
    }
}
