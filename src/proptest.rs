use crate::{Decimal, Order, Price};

use num_bigint::BigInt;
use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;
use uuid::Uuid;

impl Arbitrary for Decimal {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(i128, u8)>, fn((i128, u8)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // an arbitrary unscaled value and a scale between 0 and 28
        any::<(i128, u8)>()
            .prop_map(|(unscaled, scale)| Decimal::from_i128_with_scale(unscaled, u32::from(scale % 29)))
    }
}

impl Arbitrary for Price {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(i128, u8)>, fn((i128, u8)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // the second element widens the unscaled value past the range of an i128
        any::<(i128, u8)>().prop_map(|(unscaled, shift)| {
            let unscaled = BigInt::from(unscaled) << usize::from(shift % 64);
            Price::from_scaled(Decimal::from_bigint(unscaled, Price::SCALE))
        })
    }
}

impl Arbitrary for Order {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(u128, Price)>, fn((u128, Price)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        any::<(u128, Price)>().prop_map(|(order_id, price)| Order::from_parts(Uuid::from_u128(order_id), price))
    }
}
