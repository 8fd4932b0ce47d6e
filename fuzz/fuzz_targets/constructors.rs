#![no_main]

use avro_order::{Decimal, DecimalCodec, Price};
use std::str::FromStr;

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    generic_str: &'a str,

    value: Decimal,
    scale: u32,
    max_width: usize,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let _ = serde_json::from_str::<Decimal>(data.generic_str);

    if let Ok(parsed) = Decimal::from_str(data.generic_str) {
        assert_eq!(Decimal::from_str(&parsed.to_string()), Ok(parsed));
    }

    let _ = Price::builder().value(data.value.clone()).build();

    let codec = DecimalCodec::new(data.scale % 64).with_max_width(data.max_width);
    if let Ok(bytes) = codec.encode(&data.value) {
        assert_eq!(codec.decode(&bytes), Ok(data.value));
    }
});
