use tuple_queue_macros::nested_tuples;

/// Conversion between a flat tuple `(T1, .., TN)` and the nested form it is
/// stored in.
///
/// The nested form fills seven slots with fields and puts a tuple holding the
/// remaining fields in the eighth, recursively, so a level never exceeds eight
/// slots. See [`layout`](crate::layout) for the position of each field.
///
/// ```
/// use tuple_queue::NestedTuple;
///
/// let packed = (1, 2, 3, 4, 5, 6, 7, 8, 9).pack();
/// assert_eq!(packed, (1, 2, 3, 4, 5, 6, 7, (8, 9)));
/// assert_eq!(<(u8, u8)>::ARITY, 2);
/// ```
///
/// Implemented for tuples of 1 to 35 fields.
pub trait NestedTuple: Sized {
    /// The nested storage form.
    type Packed;

    /// A tuple of references to each field, in order.
    type Refs<'a>
    where
        Self: 'a;

    /// Number of fields.
    const ARITY: usize;

    fn pack(self) -> Self::Packed;

    fn unpack(packed: Self::Packed) -> Self;

    /// Borrows each field of a packed record.
    fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
    where
        Self: 'a;
}

nested_tuples!(NestedTuple for 1..=35);
