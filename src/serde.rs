use crate::Decimal;

use alloc::string::ToString;
use core::{fmt, str::FromStr};
use serde::{self, de::Unexpected};

impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a Decimal type representing a fixed-point number")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_str(&value.to_string()).map_err(|_| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

// Serialized as a string so no precision is lost in formats with floating point numbers.
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value = crate::str::to_str_internal(self, true, None);
        serializer.serialize_str(&value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, Order, Price};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Record {
        amount: Decimal,
    }

    #[test]
    fn deserialize_valid_decimal() {
        let data = [
            ("{\"amount\":\"1.234\"}", "1.234"),
            ("{\"amount\":\"-0.500\"}", "-0.500"),
            ("{\"amount\":1234}", "1234"),
            ("{\"amount\":-7}", "-7"),
            ("{\"amount\":1234.56}", "1234.56"),
        ];
        for &(serialized, value) in data.iter() {
            let result = serde_json::from_str(serialized);
            assert!(
                result.is_ok(),
                "expected successful deserialization for {}. Error: {:?}",
                serialized,
                result.err().unwrap()
            );
            let record: Record = result.unwrap();
            assert_eq!(
                value,
                record.amount.to_string(),
                "expected: {}, actual: {}",
                value,
                record.amount
            );
        }
    }

    #[test]
    fn deserialize_invalid_decimal() {
        let data = ["{\"amount\":\"\"}", "{\"amount\":\"1.2.3\"}", "{\"amount\":true}"];
        for &serialized in data.iter() {
            let result: Result<Record, _> = serde_json::from_str(serialized);
            assert!(result.is_err(), "expected failure deserializing {}", serialized);
        }
    }

    #[test]
    fn serialize_keeps_scale() {
        let record = Record {
            amount: Decimal::new(-1500, 3),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), "{\"amount\":\"-1.500\"}");
    }

    #[test]
    fn orders_use_camel_case_fields() {
        let order = Order::builder()
            .order_id(uuid::Uuid::from_u128(0x0123_4567_89ab_4def_8123_4567_89ab_cdef))
            .price(Price::builder().value(Decimal::new(42, 1)).build().unwrap())
            .build()
            .unwrap();
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(
            json,
            r#"{"orderId":"01234567-89ab-4def-8123-456789abcdef","price":{"value":"4.200"}}"#
        );
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn deserializing_a_price_goes_through_the_builder() {
        let price: Price = serde_json::from_str(r#"{"value":"1.5"}"#).unwrap();
        assert_eq!(price.value().scale(), Price::SCALE);

        let err = serde_json::from_str::<Price>(r#"{"value":"1.2345"}"#).unwrap_err();
        let expected = Error::ScaleMismatch { expected: 3, actual: 4 }.to_string();
        assert!(err.to_string().contains(&expected), "{}", err);
        assert!(serde_json::from_str::<Price>("{}").is_err());
        assert!(serde_json::from_str::<Order>(r#"{"price":{"value":"1"}}"#).is_err());
    }
}
