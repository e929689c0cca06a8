use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::clock::Millis;

struct Entry<T> {
    due: Millis,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Virtual-time task queue. Tasks come out ordered by due time, and tasks
/// due at the same instant come out in the order they were scheduled.
pub struct Timeline<T> {
    queue: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn schedule(&mut self, due: Millis, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry { due, seq, task }));
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pops the earliest task if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, T)> {
        if self.next_due()? > now {
            return None;
        }
        self.queue.pop().map(|Reverse(entry)| (entry.due, entry.task))
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
