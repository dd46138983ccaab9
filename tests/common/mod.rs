use proptest::prelude::*;
use std::ops::Bound;

#[allow(unused_macros)]
macro_rules! assert_eq_all {
    ( $x:expr, $( $y:expr ),+ $(,)? ) => {{
        let x = $x;
        $( assert_eq!(x, $y); )+
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_eq_all;

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[allow(dead_code)]
pub(super) fn assert_eq_iters_back<I, J>(i: I, j: J)
where
    I: DoubleEndedIterator,
    J: DoubleEndedIterator<Item = I::Item>,
    I::Item: std::fmt::Debug + Eq,
{
    assert_eq_iters(i.rev(), j.rev());
}

pub(super) type U16Seq = Vec<u16>;

#[allow(dead_code)]
pub(super) fn u16_seq(max: u16, len: usize) -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0..max, 0..len)
}

#[allow(dead_code)]
pub(super) fn small_int_seq() -> impl Strategy<Value = U16Seq> {
    u16_seq(1024, 512)
}

#[allow(dead_code)]
pub(super) fn tiny_int_seq() -> impl Strategy<Value = U16Seq> {
    u16_seq(32, 24)
}

#[allow(dead_code)]
pub(super) fn range_bounds_1k(
) -> impl Strategy<Value = (Bound<u16>, Bound<u16>)> {
    use Bound::*;

    (1u16..1023)
        .prop_flat_map(|n| {
            (
                prop_oneof![
                    Just(Bound::Unbounded),
                    (0u16..=n).prop_map(Bound::Excluded),
                    (0u16..=n).prop_map(Bound::Included),
                ],
                prop_oneof![
                    Just(Bound::Unbounded),
                    (n..1024).prop_map(Bound::Excluded),
                    (n..1024).prop_map(Bound::Included),
                ],
            )
        })
        .prop_map(|(lb, ub)| match (lb, ub) {
            (Excluded(x), Excluded(y)) if x == y => {
                // convert the panic case to a non-panic case (friendlier than
                // filtering for proptest?)
                (Included(x), Excluded(y))
            }

            xy => xy,
        })
}
