//! FIFO queues of fixed-arity heterogeneous records.
//!
//! A [`TupleQueue`] holds records of 2 to 35 independently typed fields and
//! takes or returns them field by field:
//!
//! ```
//! use tuple_queue::TupleQueue3;
//!
//! let mut queue = TupleQueue3::<i32, String, bool>::new();
//! queue.enqueue(1, "a".to_string(), true);
//! queue.enqueue(2, "b".to_string(), false);
//!
//! assert_eq!(queue.try_dequeue_or_default(), (true, 1, "a".to_string(), true));
//! assert_eq!(queue.len(), 1);
//! assert_eq!(queue.try_dequeue_or_default(), (true, 2, "b".to_string(), false));
//! assert_eq!(queue.try_dequeue_or_default(), (false, 0, String::new(), false));
//! ```
//!
//! Each record is stored as a single value in a base queue ([`BaseQueue`],
//! a [`VecDeque`](std::collections::VecDeque) by default). Records wider than
//! seven fields are nested, with the eighth slot of each level holding the
//! next seven fields:
//!
//! ```
//! use tuple_queue::{layout, TupleQueue9};
//!
//! let mut queue = TupleQueue9::<u8, u8, u8, u8, u8, u8, u8, u8, u8>::new();
//! queue.enqueue(1, 2, 3, 4, 5, 6, 7, 8, 9);
//! assert_eq!(queue.dequeue(), Ok((1, 2, 3, 4, 5, 6, 7, 8, 9)));
//! assert_eq!(layout::field_position(9, 9), Some((1, 2)));
//! ```
//!
//! # Errors
//!
//! [`dequeue`](TupleQueue::dequeue) and [`peek`](TupleQueue::peek) return
//! [`QueueError::Empty`] on an empty queue. The `try_` operations report the
//! same condition as `None` or `false`. A base queue that claims to hold
//! records but yields none is a bug; this is raised as a panic carrying an
//! [`InvariantViolation`].
//!
//! # Logging
//!
//! Operations emit [`tracing`] events: `trace` for each enqueue and dequeue,
//! `debug` when a queue is built from a sequence, `warn` for a rejected
//! capacity hint and `error` before an invariant panic.
mod arity;
mod base;
mod codec;
mod error;
pub mod layout;
mod queue;

pub use crate::arity::*;
pub use crate::base::BaseQueue;
pub use crate::codec::NestedTuple;
pub use crate::error::{InvariantViolation, QueueError};
pub use crate::queue::{IntoIter, Iter, TupleQueue};
