use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use crate::layout::{continuation_depth, nest};

/// Generation state for a single arity.
#[derive(Clone)]
pub struct ArityContext {
    ident: Ident,
    count: usize,
}

impl ArityContext {
    pub fn new(ident: Ident, count: usize) -> Self {
        ArityContext { ident, count }
    }

    // T1, T2, ... TN
    fn type_params(&self) -> Vec<Ident> {
        (1..=self.count)
            .map(|i| format_ident!("T{}", i, span = self.ident.span()))
            .collect()
    }

    // v1, v2, ... vN
    fn values(&self) -> Vec<Ident> {
        (1..=self.count)
            .map(|i| format_ident!("v{}", i, span = self.ident.span()))
            .collect()
    }

    /// `impl<T1, .., TN> Ident for (T1, .., TN)` mapping the flat tuple to its
    /// packed form and back.
    pub fn codec_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let params = self.type_params();
        let values = self.values();
        let packed_type = nest(&params);
        let packed_pat = nest(&values);
        let arity = Literal::usize_unsuffixed(self.count);
        quote! {
            impl<#(#params),*> #ident for (#(#params,)*) {
                type Packed = #packed_type;
                type Refs<'a> = (#(&'a #params,)*) where Self: 'a;

                const ARITY: usize = #arity;

                #[inline]
                fn pack(self) -> Self::Packed {
                    let (#(#values,)*) = self;
                    #packed_pat
                }

                #[inline]
                fn unpack(packed: Self::Packed) -> Self {
                    let #packed_pat = packed;
                    (#(#values,)*)
                }

                #[inline]
                fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
                where
                    Self: 'a,
                {
                    let #packed_pat = packed;
                    (#(#values,)*)
                }
            }
        }
    }

    /// The `IdentN` alias plus the field-by-field API for one arity of the
    /// queue type.
    pub fn queue_items(&self) -> TokenStream {
        let ident = &self.ident;
        let alias = format_ident!("{}{}", ident, self.count);
        let params = self.type_params();
        let values = self.values();
        let packed_type = nest(&params);
        let defaults = quote!(#(<#params>::default()),*);
        let alias_doc = match continuation_depth(self.count) {
            0 => format!(" A FIFO queue of {}-field records.", self.count),
            depth => format!(
                " A FIFO queue of {}-field records, stored with {} continuation level{}.",
                self.count,
                depth,
                if depth == 1 { "" } else { "s" }
            ),
        };
        quote! {
            #[doc = #alias_doc]
            pub type #alias<#(#params),*> = #ident<(#(#params,)*)>;

            impl<#(#params,)* Q> #ident<(#(#params,)*), Q>
            where
                Q: BaseQueue<#packed_type>,
            {
                /// Appends a record, given field by field, to the back of the queue.
                pub fn enqueue(&mut self, #(#values: #params),*) {
                    self.enqueue_tuple((#(#values,)*));
                }

                /// Removes the record at the front of the queue. Returns `false` and
                /// default field values if the queue is empty.
                pub fn try_dequeue_or_default(&mut self) -> (bool, #(#params),*)
                where
                    #(#params: ::core::default::Default),*
                {
                    match self.try_dequeue() {
                        Some((#(#values,)*)) => (true, #(#values),*),
                        None => (false, #defaults),
                    }
                }

                /// Copies out the record at the front of the queue without removing it.
                /// Returns `false` and default field values if the queue is empty.
                pub fn try_peek_or_default(&self) -> (bool, #(#params),*)
                where
                    #(#params: ::core::clone::Clone + ::core::default::Default),*
                {
                    match self.try_peek() {
                        Some((#(#values,)*)) => (true, #(#values.clone()),*),
                        None => (false, #defaults),
                    }
                }
            }
        }
    }
}
