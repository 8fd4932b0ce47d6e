use crate::Decimal;

use arbitrary::{Arbitrary, Result as ArbitraryResult, Unstructured};

impl<'a> Arbitrary<'a> for Decimal {
    fn arbitrary(u: &mut Unstructured<'a>) -> ArbitraryResult<Self> {
        let unscaled = i128::arbitrary(u)?;
        let scale = u.int_in_range(0..=28)?;
        Ok(Decimal::from_i128_with_scale(unscaled, scale))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        arbitrary::size_hint::and(i128::size_hint(depth), u32::size_hint(depth))
    }
}
