//! Where each field of a record lives inside its packed form.
//!
//! A packed record stores at most seven fields per level. When a record has
//! more, the eighth slot of a level holds the next level. The arithmetic here
//! matches the types generated for [`NestedTuple::Packed`](crate::NestedTuple::Packed).

/// Fields stored directly in each level.
pub const DIRECT_SLOTS: usize = 7;

/// Smallest supported record width.
pub const MIN_ARITY: usize = 2;

/// Largest supported record width.
pub const MAX_ARITY: usize = 35;

/// Number of continuation levels below the top-level tuple.
///
/// ```
/// use tuple_queue::layout::continuation_depth;
///
/// assert_eq!(continuation_depth(7), 0);
/// assert_eq!(continuation_depth(8), 1);
/// assert_eq!(continuation_depth(35), 4);
/// ```
pub const fn continuation_depth(arity: usize) -> usize {
    arity.saturating_sub(1) / DIRECT_SLOTS
}

/// The `(depth, slot)` holding field `ordinal` of a record with `arity`
/// fields. Both `ordinal` and `slot` count from 1 and `depth` counts
/// continuation levels from 0.
///
/// ```
/// use tuple_queue::layout::field_position;
///
/// assert_eq!(field_position(9, 9), Some((1, 2)));
/// assert_eq!(field_position(9, 10), None);
/// ```
pub const fn field_position(arity: usize, ordinal: usize) -> Option<(usize, usize)> {
    if ordinal == 0 || ordinal > arity {
        return None;
    }
    let offset = ordinal - 1;
    Some((offset / DIRECT_SLOTS, offset % DIRECT_SLOTS + 1))
}
