use avro_order::render::eq_ignoring_whitespace;
use avro_order::{Decimal, Error, Order, Price, Record, RecordCodec};
use uuid::Uuid;

// Write to a buffer, read it back, then render what was read.
// Any mismatch in decimal scale or precision surfaces here.
fn to_and_from_byte_buffer_to_string<R: Record + std::fmt::Display>(record: &R) -> Result<String, Error> {
    let buffer = record.to_byte_buffer()?;
    let decoded = R::from_byte_buffer(buffer)?;
    Ok(decoded.to_string())
}

fn order(value: Decimal) -> Order {
    Order::builder()
        .order_id(Uuid::new_v4())
        .price(Price::builder().value(value).build().unwrap())
        .build()
        .unwrap()
}

#[test]
fn roundtrip_byte_buffer_and_compare_to_string() {
    let order = order(Decimal::from_i128_with_scale(1234567890, 3));
    let as_string = to_and_from_byte_buffer_to_string(&order).unwrap();
    let expected = format!(
        r#"{{
            "orderId": {},
            "price": {{
                "value": 1234567.890
            }}
        }}"#,
        order.order_id()
    );
    assert!(
        eq_ignoring_whitespace(&as_string, &expected),
        "{} != {}",
        as_string,
        expected
    );
}

#[test]
fn roundtrip_preserves_every_field() {
    for value in ["0", "-0.001", "1234567.89", "99999999999999999999999999999999999999999.999"] {
        let original = order(value.parse().unwrap());
        let decoded = Order::from_byte_buffer(original.to_byte_buffer().unwrap()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.order_id(), original.order_id());
        assert_eq!(decoded.price().value().scale(), 3);
        assert_eq!(decoded.price().value().to_string(), original.price().value().to_string());
    }
}

#[test]
fn rendering_always_shows_three_fractional_digits() {
    let tests = [("1", "1.000"), ("1.5", "1.500"), ("-2.25", "-2.250"), ("0.001", "0.001")];
    for (input, rendered) in tests {
        let price = Price::builder().value(input.parse().unwrap()).build().unwrap();
        let decoded = Price::from_byte_buffer(price.to_byte_buffer().unwrap()).unwrap();
        assert_eq!(decoded.to_string(), format!(r#"{{"value": {}}}"#, rendered));
    }
}

#[test]
fn truncation_is_detected_at_every_position() {
    let bytes = order(Decimal::from_i128_with_scale(1234567890, 3))
        .to_byte_buffer()
        .unwrap();
    for len in 0..bytes.len() {
        let result = Order::from_byte_buffer(&bytes[..len]);
        let expected_field = if len < 16 { "orderId" } else { "price.value" };
        match result {
            Err(Error::TruncatedBuffer { field, needed, remaining }) => {
                assert_eq!(field, expected_field, "len {}", len);
                assert!(remaining < needed, "len {}", len);
            }
            other => panic!("len {}: expected a truncated buffer, got {:?}", len, other),
        }
    }
}

#[test]
fn trailing_bytes_are_rejected() {
    let bytes = order(Decimal::new(1, 0)).to_byte_buffer().unwrap();
    let mut extended = bytes.to_vec();
    extended.push(0);
    assert_eq!(Order::from_byte_buffer(&extended[..]), Err(Error::TrailingBytes(1)));

    let lenient = RecordCodec::new().with_strict(false);
    assert!(lenient.decode_order(&extended[..]).is_ok());
}

#[test]
fn a_corrupted_length_prefix_is_reported_as_truncation() {
    let bytes = order(Decimal::new(1, 0)).to_byte_buffer().unwrap();
    let mut corrupted = bytes.to_vec();
    corrupted[19] = 0xff;
    assert_eq!(
        Order::from_byte_buffer(&corrupted[..]),
        Err(Error::TruncatedBuffer {
            field: "price.value",
            needed: 255,
            remaining: corrupted.len() - 20
        })
    );
}

#[test]
fn prices_with_more_than_three_fractional_digits_are_rejected() {
    let result = Price::builder().value("1.2345".parse().unwrap()).build();
    assert_eq!(result, Err(Error::ScaleMismatch { expected: 3, actual: 4 }));
}

#[test]
fn prices_with_zeros_past_three_fractional_digits_are_accepted() {
    let price = Price::builder().value("1.2300".parse().unwrap()).build().unwrap();
    assert_eq!(price.value().scale(), Price::SCALE);
    let decoded = Price::from_byte_buffer(price.to_byte_buffer().unwrap()).unwrap();
    assert_eq!(decoded.to_string(), r#"{"value": 1.230}"#);
}

#[test]
fn orders_need_a_price() {
    let result = Order::builder().order_id(Uuid::new_v4()).build();
    assert_eq!(result, Err(Error::MissingField("price")));
}
