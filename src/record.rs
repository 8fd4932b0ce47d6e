use crate::{Decimal, Error};

use uuid::Uuid;

/// The price of an order. The value always carries exactly [`Price::SCALE`] fractional digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PriceBuilder"))]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Number of digits after the decimal point in every price.
    pub const SCALE: u32 = 3;

    #[must_use]
    pub fn builder() -> PriceBuilder {
        PriceBuilder::default()
    }

    /// Starts a builder holding this price's fields.
    #[must_use]
    pub fn to_builder(&self) -> PriceBuilder {
        PriceBuilder {
            value: Some(self.value.clone()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Decimal {
        &self.value
    }

    // Callers guarantee the value is already at `Price::SCALE`.
    pub(crate) fn from_scaled(value: Decimal) -> Price {
        debug_assert_eq!(value.scale(), Price::SCALE);
        Price { value }
    }
}

/// Assembles a [`Price`]. Every field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PriceBuilder {
    value: Option<Decimal>,
}

impl PriceBuilder {
    #[must_use]
    pub fn value(mut self, value: Decimal) -> PriceBuilder {
        self.value = Some(value);
        self
    }

    /// Builds the price, widening the value to [`Price::SCALE`].
    ///
    /// Fails with `Error::MissingField` when no value was set and with
    /// `Error::ScaleMismatch` when the value has a non-zero digit past the third fractional
    /// place. Trailing zeros past it are dropped.
    pub fn build(self) -> Result<Price, Error> {
        let value = self.value.ok_or(Error::MissingField("value"))?;
        Ok(Price {
            value: value.rescale_exact(Price::SCALE)?,
        })
    }
}

impl TryFrom<PriceBuilder> for Price {
    type Error = Error;

    fn try_from(builder: PriceBuilder) -> Result<Self, Error> {
        builder.build()
    }
}

/// An order: a unique identifier and its price.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "OrderBuilder", rename_all = "camelCase"))]
pub struct Order {
    order_id: Uuid,
    price: Price,
}

impl Order {
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    /// Starts a builder holding this order's fields.
    #[must_use]
    pub fn to_builder(&self) -> OrderBuilder {
        OrderBuilder {
            order_id: Some(self.order_id),
            price: Some(self.price.clone()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn order_id(&self) -> &Uuid {
        &self.order_id
    }

    #[inline]
    #[must_use]
    pub const fn price(&self) -> &Price {
        &self.price
    }

    pub(crate) const fn from_parts(order_id: Uuid, price: Price) -> Order {
        Order { order_id, price }
    }
}

/// Assembles an [`Order`]. Every field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrderBuilder {
    order_id: Option<Uuid>,
    price: Option<Price>,
}

impl OrderBuilder {
    #[must_use]
    pub fn order_id(mut self, order_id: Uuid) -> OrderBuilder {
        self.order_id = Some(order_id);
        self
    }

    #[must_use]
    pub fn price(mut self, price: Price) -> OrderBuilder {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<Order, Error> {
        Ok(Order {
            order_id: self.order_id.ok_or(Error::MissingField("orderId"))?,
            price: self.price.ok_or(Error::MissingField("price"))?,
        })
    }
}

impl TryFrom<OrderBuilder> for Order {
    type Error = Error;

    fn try_from(builder: OrderBuilder) -> Result<Self, Error> {
        builder.build()
    }
}
