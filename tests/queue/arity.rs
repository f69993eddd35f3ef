use tuple_queue::{QueueError, TupleQueue};

macro_rules! field_type {
    ($index:tt) => {
        String
    };
}

macro_rules! value {
    ($round:expr, $index:tt) => {
        format!("{}-{}", $round, $index)
    };
}

// One test per arity. Each enqueues two records field by field, then checks
// peek, dequeue order, every field value and the length after each step.
macro_rules! arity_tests {
    ($($name:ident: [$($index:tt)+];)+) => {
        $(
            #[test]
            fn $name() {
                type Record = ($(field_type!($index),)+);

                let mut queue = TupleQueue::<Record>::new();
                assert_eq!(queue.dequeue().err(), Some(QueueError::Empty));
                assert_eq!(queue.peek().err(), Some(QueueError::Empty));
                assert!(queue.try_dequeue().is_none());
                assert!(queue.try_peek().is_none());
                assert_eq!(queue.len(), 0);

                queue.enqueue($(value!(1, $index)),+);
                assert_eq!(queue.len(), 1);
                queue.enqueue($(value!(2, $index)),+);
                assert_eq!(queue.len(), 2);

                let front = queue.peek().unwrap();
                $(assert_eq!(*front.$index, value!(1, $index));)+
                assert_eq!(queue.len(), 2);

                let last = queue.iter().last().unwrap();
                $(assert_eq!(*last.$index, value!(2, $index));)+

                let first = queue.dequeue().unwrap();
                $(assert_eq!(first.$index, value!(1, $index));)+
                assert_eq!(queue.len(), 1);

                let second = queue.try_dequeue().unwrap();
                $(assert_eq!(second.$index, value!(2, $index));)+
                assert_eq!(queue.len(), 0);
                assert!(queue.try_dequeue().is_none());
            }
        )+
    };
}

arity_tests! {
    arity_2: [0 1];
    arity_3: [0 1 2];
    arity_4: [0 1 2 3];
    arity_5: [0 1 2 3 4];
    arity_6: [0 1 2 3 4 5];
    arity_7: [0 1 2 3 4 5 6];
    arity_8: [0 1 2 3 4 5 6 7];
    arity_9: [0 1 2 3 4 5 6 7 8];
    arity_10: [0 1 2 3 4 5 6 7 8 9];
    arity_11: [0 1 2 3 4 5 6 7 8 9 10];
    arity_12: [0 1 2 3 4 5 6 7 8 9 10 11];
    arity_13: [0 1 2 3 4 5 6 7 8 9 10 11 12];
    arity_14: [0 1 2 3 4 5 6 7 8 9 10 11 12 13];
    arity_15: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14];
    arity_16: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15];
    arity_17: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16];
    arity_18: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17];
    arity_19: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18];
    arity_20: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19];
    arity_21: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20];
    arity_22: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21];
    arity_23: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22];
    arity_24: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23];
    arity_25: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24];
    arity_26: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25];
    arity_27: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26];
    arity_28: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27];
    arity_29: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28];
    arity_30: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29];
    arity_31: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30];
    arity_32: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31];
    arity_33: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32];
    arity_34: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33];
    arity_35: [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34];
}
