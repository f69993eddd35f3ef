use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::base::BaseQueue;
use crate::codec::NestedTuple;
use crate::error::{InvariantViolation, QueueError};

/// A FIFO queue of fixed-arity records.
///
/// `T` is the flat record type `(T1, .., TN)`. Each record is stored packed
/// (see [`NestedTuple`]) as a single element of the base queue `Q`, which the
/// queue owns exclusively.
///
/// Besides the operations here, each arity from 2 to 35 has the field-by-field
/// methods `enqueue`, `try_dequeue_or_default` and `try_peek_or_default`, and
/// an alias such as [`TupleQueue3`](crate::TupleQueue3).
///
/// ```
/// use tuple_queue::TupleQueue3;
///
/// let mut queue = TupleQueue3::<i32, String, bool>::new();
/// queue.enqueue(1, "a".to_string(), true);
/// assert_eq!(queue.len(), 1);
/// let (number, text, flag) = queue.dequeue().unwrap();
/// assert_eq!((number, text.as_str(), flag), (1, "a", true));
/// assert!(queue.dequeue().is_err());
/// ```
///
/// The queue does no locking. Share it between threads behind a `Mutex`.
pub struct TupleQueue<T, Q = VecDeque<<T as NestedTuple>::Packed>>
where
    T: NestedTuple,
{
    inner: Q,
    marker: PhantomData<fn() -> T>,
}

impl<T: NestedTuple> TupleQueue<T> {
    pub fn new() -> Self {
        Self::with_base(VecDeque::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_base(VecDeque::with_capacity(capacity))
    }

    /// Creates an empty queue from a signed capacity hint, rejecting negative
    /// values and hints too large to allocate.
    pub fn with_capacity_hint(hint: i64) -> Result<Self, QueueError> {
        let mut base = VecDeque::new();
        let reserved = usize::try_from(hint)
            .ok()
            .and_then(|capacity| base.try_reserve(capacity).ok());
        match reserved {
            Some(()) => Ok(Self::with_base(base)),
            None => {
                warn!(hint, "rejected capacity hint");
                Err(QueueError::CapacityOutOfRange { hint })
            }
        }
    }

    /// Creates a queue holding `values` in iteration order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }
}

impl<T, Q> TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    /// Wraps an existing base queue. Any records already in it are kept.
    pub fn with_base(base: Q) -> Self {
        TupleQueue {
            inner: base,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Appends a whole record to the back of the queue.
    pub fn enqueue_tuple(&mut self, record: T) {
        self.inner.enqueue(record.pack());
        trace!(arity = T::ARITY, len = self.inner.len(), "enqueued record");
    }

    /// Removes the record at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is no record.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvariantViolation`] if the base queue reports records
    /// but yields none.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.take_front())
    }

    /// Borrows each field of the record at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is no record.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvariantViolation`] if the base queue reports records
    /// but yields none.
    pub fn peek(&self) -> Result<T::Refs<'_>, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.borrow_front())
    }

    /// Like [`dequeue`](Self::dequeue), but returns `None` on an empty queue
    /// without touching the base queue.
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.take_front())
    }

    /// Like [`peek`](Self::peek), but returns `None` on an empty queue.
    pub fn try_peek(&self) -> Option<T::Refs<'_>> {
        if self.is_empty() {
            return None;
        }
        Some(self.borrow_front())
    }

    /// Iterates over borrowed records from front to back.
    pub fn iter(&self) -> Iter<'_, T, Q> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    // Callers have checked that the queue is not empty.
    fn take_front(&mut self) -> T {
        let len = self.inner.len();
        let Some(packed) = self.inner.dequeue() else {
            InvariantViolation {
                arity: T::ARITY,
                len,
                operation: "dequeue",
            }
            .raise()
        };
        trace!(arity = T::ARITY, len = self.inner.len(), "dequeued record");
        T::unpack(packed)
    }

    fn borrow_front(&self) -> T::Refs<'_> {
        let Some(packed) = self.inner.peek() else {
            InvariantViolation {
                arity: T::ARITY,
                len: self.inner.len(),
                operation: "peek",
            }
            .raise()
        };
        T::unpack_ref(packed)
    }
}

impl<T, Q> Default for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    fn default() -> Self {
        Self::with_base(Q::with_capacity(0))
    }
}

impl<T, Q> Clone for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: Clone,
{
    fn clone(&self) -> Self {
        TupleQueue {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, Q> fmt::Debug for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleQueue")
            .field("arity", &T::ARITY)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T, Q> FromIterator<T> for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_base(Q::with_capacity(iter.size_hint().0));
        queue.extend(iter);
        debug!(arity = T::ARITY, count = queue.len(), "built queue from values");
        queue
    }
}

impl<T, Q> Extend<T> for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for record in iter {
            self.enqueue_tuple(record);
        }
    }
}

/// Borrowing iterator over the records of a [`TupleQueue`], front to back.
pub struct Iter<'a, T, Q>
where
    T: NestedTuple + 'a,
    Q: BaseQueue<T::Packed> + 'a,
{
    inner: Q::Iter<'a>,
}

impl<'a, T, Q> Iterator for Iter<'a, T, Q>
where
    T: NestedTuple + 'a,
    Q: BaseQueue<T::Packed> + 'a,
{
    type Item = T::Refs<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(T::unpack_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, Q> ExactSizeIterator for Iter<'a, T, Q>
where
    T: NestedTuple + 'a,
    Q: BaseQueue<T::Packed> + 'a,
    Q::Iter<'a>: ExactSizeIterator,
{
}

impl<'a, T, Q> FusedIterator for Iter<'a, T, Q>
where
    T: NestedTuple + 'a,
    Q: BaseQueue<T::Packed> + 'a,
    Q::Iter<'a>: FusedIterator,
{
}

impl<'a, T, Q> IntoIterator for &'a TupleQueue<T, Q>
where
    T: NestedTuple + 'a,
    Q: BaseQueue<T::Packed> + 'a,
{
    type Item = T::Refs<'a>;
    type IntoIter = Iter<'a, T, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator over the records of a [`TupleQueue`], front to back.
pub struct IntoIter<T, Q>
where
    T: NestedTuple,
{
    queue: TupleQueue<T, Q>,
}

impl<T, Q> Iterator for IntoIter<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.try_dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, Q> ExactSizeIterator for IntoIter<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
}

impl<T, Q> FusedIterator for IntoIter<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
}

impl<T, Q> IntoIterator for TupleQueue<T, Q>
where
    T: NestedTuple,
    Q: BaseQueue<T::Packed>,
{
    type Item = T;
    type IntoIter = IntoIter<T, Q>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}
