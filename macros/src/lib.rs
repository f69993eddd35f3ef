//! Code generation for the `tuple_queue` crate.
//!
//! Rust tuples have no variadic generics, so every arity of a tuple queue is
//! generated by a macro that is given the name of the item to generate and the
//! range of arities to cover, in the form `Ident for MIN..=MAX`.
//!
//! # `nested_tuples!`
//!
//! ```ignore
//! nested_tuples!(NestedTuple for 1..=35);
//! ```
//!
//! implements the trait `NestedTuple` for each flat tuple `(T1, .., TN)`. The
//! trait must already be in scope and declare:
//!
//! ```ignore
//! pub trait NestedTuple: Sized {
//!     type Packed;
//!     type Refs<'a> where Self: 'a;
//!     const ARITY: usize;
//!     fn pack(self) -> Self::Packed;
//!     fn unpack(packed: Self::Packed) -> Self;
//!     fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
//!     where
//!         Self: 'a;
//! }
//! ```
//!
//! The packed form holds at most eight slots per level. Slots one to seven
//! carry fields directly and the eighth carries a tuple holding the remaining
//! fields, recursively. A 9-field record packs into
//! `(T1, T2, T3, T4, T5, T6, T7, (T8, T9))`.
//!
//! # `tuple_queues!`
//!
//! ```ignore
//! tuple_queues!(TupleQueue for 2..=35);
//! ```
//!
//! emits, for each arity N, a type alias `TupleQueueN<T1, .., TN>` and an
//! inherent `impl` on `TupleQueue<(T1, .., TN), Q>` holding the methods that
//! take or return the fields one by one: `enqueue`, `try_dequeue_or_default`
//! and `try_peek_or_default`. The generated code names `TupleQueue` and
//! `BaseQueue` unqualified, so both must be in scope at the call site.
//!
//! # Ranges
//!
//! The range may be half-open or inclusive and its bounds may use constant
//! arithmetic, e.g. `2..=5 * 7`. An omitted start means 1. The end must be
//! given and the range must contain at least one arity of 1 or more.
use proc_macro2::{Ident, Span, TokenStream, TokenTree};
use syn::spanned::Spanned as _;
use syn::{Error, Expr, Result};
use zip_clone::ZipClone as _;

mod constant;
mod layout;
mod specific;

use crate::constant::{evaluate_range, evaluate_usize};
use crate::specific::ArityContext;

macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(Error::new($spanned.span(), $message))
    };
}

/// Implement a nested-tuple codec trait for every flat tuple in a range of
/// arities.
#[proc_macro]
pub fn nested_tuples(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate(TokenStream::from(input), ArityContext::codec_impl)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Generate the arity-specific aliases and methods of a tuple queue type.
#[proc_macro]
pub fn tuple_queues(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate(TokenStream::from(input), ArityContext::queue_items)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn generate(args: TokenStream, f: fn(&ArityContext) -> TokenStream) -> Result<TokenStream> {
    let arities = parse_args(args)?;
    let mut output = TokenStream::new();
    for (count, ident) in (arities.min..=arities.max).zip_clone(arities.ident) {
        output.extend(f(&ArityContext::new(ident, count)));
    }
    Ok(output)
}

#[derive(Clone, Debug)]
struct ArityRange {
    ident: Ident,
    min: usize,
    max: usize,
}

fn parse_args(args: TokenStream) -> Result<ArityRange> {
    // NestedTuple for 1..=35
    let mut args_iter = args.into_iter();
    let ident = match args_iter.next() {
        Some(TokenTree::Ident(ident)) => ident,
        Some(tt) => abort!(tt, "expected an ident"),
        None => return Err(Error::new(Span::call_site(), "expected an ident")),
    };
    match args_iter.next() {
        Some(TokenTree::Ident(for_ident)) if for_ident == "for" => {}
        Some(tt) => abort!(tt, "expected 'for'"),
        None => abort!(ident, "expected 'for'"),
    }
    let rest = args_iter.collect::<TokenStream>();
    if rest.is_empty() {
        abort!(ident, "expected range");
    }
    let expr = syn::parse2::<Expr>(rest)?;
    let Some(range) = evaluate_range(&expr) else {
        abort!(expr, "expected range");
    };
    let min = match &range.start {
        Some(start) => match evaluate_usize(start) {
            Some(min) => min,
            None => abort!(start, "invalid start"),
        },
        None => 1,
    };
    let Some(end) = &range.end else {
        abort!(range, "range cannot be unbounded at end");
    };
    let max = match (&range.limits, evaluate_usize(end)) {
        (syn::RangeLimits::HalfOpen(_), Some(value)) => match value.checked_sub(1) {
            Some(max) => max,
            None => abort!(end, "invalid end"),
        },
        (syn::RangeLimits::Closed(_), Some(value)) => value,
        (_, None) => abort!(end, "invalid end"),
    };
    if min == 0 {
        abort!(range, "arity must be at least 1");
    }
    if max < min {
        abort!(range, "nothing to expand");
    }
    Ok(ArityRange { ident, min, max })
}
