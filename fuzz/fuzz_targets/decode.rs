#![no_main]

use avro_order::{Order, Record};

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    if let Ok(order) = Order::from_byte_buffer(data) {
        // Re-encoding is minimal so it never grows.
        let bytes = order.to_byte_buffer().unwrap();
        assert!(bytes.len() <= data.len());
        assert_eq!(Order::from_byte_buffer(bytes), Ok(order));
    }
});
