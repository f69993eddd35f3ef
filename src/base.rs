use std::collections::{vec_deque, VecDeque};

/// A single-element FIFO container that a [`TupleQueue`](crate::TupleQueue)
/// stores packed records in.
///
/// Implementations must keep `len` consistent with `dequeue` and `peek`: if
/// `len` is non-zero, both must return `Some`.
pub trait BaseQueue<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn with_capacity(capacity: usize) -> Self;

    /// Inserts at the tail.
    fn enqueue(&mut self, value: T);

    /// Removes from the head.
    fn dequeue(&mut self) -> Option<T>;

    /// Reads the head without removing it.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Iterates from head to tail.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<T> BaseQueue<T> for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn enqueue(&mut self, value: T) {
        self.push_back(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}
