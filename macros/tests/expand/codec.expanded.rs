use tuple_queue_macros::nested_tuples;
pub trait NestedTuple: Sized {
    type Packed;
    type Refs<'a> where Self: 'a;
    const ARITY: usize;
    fn pack(self) -> Self::Packed;
    fn unpack(packed: Self::Packed) -> Self;
    fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
    where
        Self: 'a;
}
impl<T1, T2, T3, T4, T5, T6, T7> NestedTuple for (T1, T2, T3, T4, T5, T6, T7) {
    type Packed = (T1, T2, T3, T4, T5, T6, T7);
    type Refs<'a> = (
        &'a T1,
        &'a T2,
        &'a T3,
        &'a T4,
        &'a T5,
        &'a T6,
        &'a T7,
    ) where Self: 'a;
    const ARITY: usize = 7;
    #[inline]
    fn pack(self) -> Self::Packed {
        let (v1, v2, v3, v4, v5, v6, v7) = self;
        (v1, v2, v3, v4, v5, v6, v7)
    }
    #[inline]
    fn unpack(packed: Self::Packed) -> Self {
        let (v1, v2, v3, v4, v5, v6, v7) = packed;
        (v1, v2, v3, v4, v5, v6, v7)
    }
    #[inline]
    fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
    where
        Self: 'a,
    {
        let (v1, v2, v3, v4, v5, v6, v7) = packed;
        (v1, v2, v3, v4, v5, v6, v7)
    }
}
impl<T1, T2, T3, T4, T5, T6, T7, T8> NestedTuple for (T1, T2, T3, T4, T5, T6, T7, T8) {
    type Packed = (T1, T2, T3, T4, T5, T6, T7, (T8,));
    type Refs<'a> = (
        &'a T1,
        &'a T2,
        &'a T3,
        &'a T4,
        &'a T5,
        &'a T6,
        &'a T7,
        &'a T8,
    ) where Self: 'a;
    const ARITY: usize = 8;
    #[inline]
    fn pack(self) -> Self::Packed {
        let (v1, v2, v3, v4, v5, v6, v7, v8) = self;
        (v1, v2, v3, v4, v5, v6, v7, (v8,))
    }
    #[inline]
    fn unpack(packed: Self::Packed) -> Self {
        let (v1, v2, v3, v4, v5, v6, v7, (v8,)) = packed;
        (v1, v2, v3, v4, v5, v6, v7, v8)
    }
    #[inline]
    fn unpack_ref<'a>(packed: &'a Self::Packed) -> Self::Refs<'a>
    where
        Self: 'a,
    {
        let (v1, v2, v3, v4, v5, v6, v7, (v8,)) = packed;
        (v1, v2, v3, v4, v5, v6, v7, v8)
    }
}
