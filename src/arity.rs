use tuple_queue_macros::tuple_queues;

use crate::base::BaseQueue;
use crate::queue::TupleQueue;

tuple_queues!(TupleQueue for 2..=35);
