use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

/// Number of fields stored directly in each level of a packed tuple. The slot
/// after them holds the continuation.
pub const DIRECT_SLOTS: usize = 7;

/// Depth of the continuation chain for a record of `arity` fields.
pub fn continuation_depth(arity: usize) -> usize {
    arity.saturating_sub(1) / DIRECT_SLOTS
}

// Tuple types, patterns and expressions share the same parenthesized syntax,
// so one builder serves all three. Trailing commas keep 1-tuples valid.
pub fn nest<T: ToTokens>(items: &[T]) -> TokenStream {
    if items.len() <= DIRECT_SLOTS {
        return quote!((#(#items,)*));
    }
    let (direct, rest) = items.split_at(DIRECT_SLOTS);
    let rest = nest(rest);
    quote!((#(#direct,)* #rest,))
}
