use std::collections::VecDeque;
use std::ops::Index;
use std::time::Duration;

use crate::stl::core::WindowHistory;
use crate::timing::Discretizer;

/// A boolean observation of one signal side.
///
/// `timestamp` is `None` for slots that were pre-filled at construction and have not yet been
/// overwritten by a real (or synthesized) sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub value: bool,
    pub timestamp: Option<Duration>,
}

impl Sample {
    pub fn new(value: bool, timestamp: Duration) -> Self {
        Sample {
            value,
            timestamp: Some(timestamp),
        }
    }

    /// A slot with no timestamp yet.
    pub fn unset(value: bool) -> Self {
        Sample {
            value,
            timestamp: None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// Fixed-capacity sequence that evicts its oldest element on insert.
///
/// The buffer is filled to capacity at construction and never shrinks, so every position in
/// `0..capacity` is always addressable: `0` is the oldest element, `capacity - 1` the newest.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T>
where
    T: Copy,
{
    /// Creates a buffer of `capacity` copies of `fill`. A zero capacity is raised to one.
    pub fn filled(capacity: usize, fill: T) -> Self {
        let capacity = capacity.max(1);
        let mut items = VecDeque::with_capacity(capacity);
        items.extend(std::iter::repeat_n(fill, capacity));
        RingBuffer { items, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn newest(&self) -> &T {
        &self.items[self.capacity - 1]
    }

    fn newest_mut(&mut self) -> &mut T {
        &mut self.items[self.capacity - 1]
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for RingBuffer<T>
where
    T: Copy,
{
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

// -----------------------------------------------------------------------------
// Tick-addressed history (lock-step evaluators)
// -----------------------------------------------------------------------------

/// History of one side, addressed by raw tick position.
///
/// Used by the lock-step evaluators, where every call pushes exactly one sample per side.
#[derive(Clone, Debug)]
pub struct TickHistory {
    ring: RingBuffer<Sample>,
}

impl TickHistory {
    pub fn new(capacity: usize, fill_value: bool) -> Self {
        TickHistory {
            ring: RingBuffer::filled(capacity, Sample::unset(fill_value)),
        }
    }

    pub fn insert(&mut self, sample: Sample) {
        self.ring.insert(sample);
    }

    /// Sample at `tick`, counted from the oldest retained one.
    pub fn at(&self, tick: usize) -> Option<&Sample> {
        self.ring.at(tick)
    }

    pub fn newest(&self) -> &Sample {
        self.ring.newest()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Sample> {
        self.ring.iter()
    }
}

impl WindowHistory for TickHistory {
    fn value_at(&self, position: usize) -> bool {
        self.ring.at(position).is_some_and(|s| s.value)
    }
}

// -----------------------------------------------------------------------------
// Period-addressed history (time-sensitive evaluators)
// -----------------------------------------------------------------------------

/// History of one side, addressed by sampling period.
///
/// Each slot stands for one period relative to the discretizer's start time. The newest slot
/// may absorb further samples of its own period through [`PeriodHistory::merge_newest`], and
/// missing periods are filled with synthesized `false` samples by [`PeriodHistory::backfill`].
#[derive(Clone, Debug)]
pub struct PeriodHistory {
    ring: RingBuffer<Sample>,
}

impl PeriodHistory {
    pub fn new(capacity: usize, fill_value: bool) -> Self {
        PeriodHistory {
            ring: RingBuffer::filled(capacity, Sample::unset(fill_value)),
        }
    }

    pub fn newest(&self) -> &Sample {
        self.ring.newest()
    }

    /// Period index of the newest slot, or `None` while it is still unset.
    pub fn newest_period(&self, discretizer: &Discretizer) -> Option<u64> {
        self.newest()
            .timestamp
            .and_then(|t| discretizer.period_index(t))
    }

    pub fn append(&mut self, sample: Sample) {
        self.ring.insert(sample);
    }

    /// Folds `value` into the newest slot with logical OR.
    pub fn merge_newest(&mut self, value: bool) {
        let newest = self.ring.newest_mut();
        newest.value = newest.value || value;
    }

    /// Inserts a `false` sample for every period in `first..=last` and returns how many were
    /// inserted. Only the most recent `capacity` periods are written, since older ones would be
    /// evicted by the later inserts anyway. An empty range inserts nothing.
    pub fn backfill(&mut self, discretizer: &Discretizer, first: u64, last: u64) -> usize {
        if first > last {
            return 0;
        }
        let capacity = self.ring.capacity() as u64;
        let first = if last - first >= capacity {
            last - capacity + 1
        } else {
            first
        };
        for index in first..=last {
            self.ring
                .insert(Sample::new(false, discretizer.period_start(index)));
        }
        (last - first + 1) as usize
    }

    pub fn at(&self, position: usize) -> Option<&Sample> {
        self.ring.at(position)
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Sample> {
        self.ring.iter()
    }
}

impl WindowHistory for PeriodHistory {
    fn value_at(&self, position: usize) -> bool {
        self.ring.at(position).is_some_and(|s| s.value)
    }
}
