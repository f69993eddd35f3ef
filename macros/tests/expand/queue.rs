use std::marker::PhantomData;

use tuple_queue_macros::tuple_queues;

pub trait BaseQueue<T> {}

pub struct TupleQueue<T, Q = ()> {
    inner: Q,
    marker: PhantomData<T>,
}

impl<T, Q> TupleQueue<T, Q> {
    fn enqueue_tuple(&mut self, _record: T) {}

    fn try_dequeue(&mut self) -> Option<T> {
        None
    }

    fn try_peek(&self) -> Option<&T> {
        None
    }
}

tuple_queues!(TupleQueue for 2..3);
