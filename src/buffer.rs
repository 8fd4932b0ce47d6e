//! Binary layout of the records.
//!
//! Fields are written in declaration order:
//!
//! * `orderId`: 16 raw bytes in UUID byte order.
//! * `price.value`: a 4 byte big-endian unsigned length `L`, then `L` bytes holding the
//!   unscaled value at scale 3 in minimal two's-complement big-endian form.
//!   `L` is never zero; a zero length is rejected with `Error::EmptyValue`.

use crate::codec::DecimalCodec;
use crate::record::{Order, Price};
use crate::Error;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use uuid::Uuid;

const ORDER_ID_LEN: usize = 16;
const LENGTH_PREFIX_LEN: usize = 4;

const ORDER_ID_FIELD: &str = "orderId";
const ORDER_PRICE_FIELD: &str = "price.value";
const PRICE_FIELD: &str = "value";

/// A record that can be written to and read back from a contiguous byte buffer.
///
/// This is what generic helpers should be written against; the default
/// [`RecordCodec`] settings apply.
pub trait Record: Sized {
    /// Serializes the record into a fresh buffer.
    fn to_byte_buffer(&self) -> Result<Bytes, Error>;

    /// Deserializes a record, consuming every byte of `buf`.
    fn from_byte_buffer<B: Buf>(buf: B) -> Result<Self, Error>;
}

impl Record for Order {
    fn to_byte_buffer(&self) -> Result<Bytes, Error> {
        RecordCodec::new().encode_order(self)
    }

    fn from_byte_buffer<B: Buf>(buf: B) -> Result<Self, Error> {
        RecordCodec::new().decode_order(buf)
    }
}

impl Record for Price {
    fn to_byte_buffer(&self) -> Result<Bytes, Error> {
        RecordCodec::new().encode_price(self)
    }

    fn from_byte_buffer<B: Buf>(buf: B) -> Result<Self, Error> {
        RecordCodec::new().decode_price(buf)
    }
}

/// Settings for reading and writing records.
///
/// By default decimals are unbounded and decoding is strict: bytes left over after the last
/// field are reported as `Error::TrailingBytes`. In lenient mode they are left unread in the
/// buffer, which allows records to be read from a stream one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordCodec {
    decimal: DecimalCodec,
    strict: bool,
}

impl Default for RecordCodec {
    fn default() -> Self {
        RecordCodec::new()
    }
}

impl RecordCodec {
    #[must_use]
    pub const fn new() -> RecordCodec {
        RecordCodec {
            decimal: DecimalCodec::new(Price::SCALE),
            strict: true,
        }
    }

    /// Caps the encoded price value at `max_width` bytes when writing and reading.
    #[must_use]
    pub const fn with_max_width(mut self, max_width: usize) -> RecordCodec {
        self.decimal = self.decimal.with_max_width(max_width);
        self
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> RecordCodec {
        self.strict = strict;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    #[inline]
    #[must_use]
    pub const fn decimal_codec(&self) -> &DecimalCodec {
        &self.decimal
    }

    pub fn encode_order(&self, order: &Order) -> Result<Bytes, Error> {
        let value = self.decimal.encode(order.price().value())?;
        let mut buf = BytesMut::with_capacity(ORDER_ID_LEN + LENGTH_PREFIX_LEN + value.len());
        buf.put_slice(order.order_id().as_bytes());
        put_length_prefixed(&mut buf, &value)?;
        tracing::trace!(len = buf.len(), "encoded order");
        Ok(buf.freeze())
    }

    pub fn decode_order<B: Buf>(&self, mut buf: B) -> Result<Order, Error> {
        ensure_remaining(&buf, ORDER_ID_FIELD, ORDER_ID_LEN)?;
        let mut order_id = [0u8; ORDER_ID_LEN];
        buf.copy_to_slice(&mut order_id);
        let price = self.get_price(&mut buf, ORDER_PRICE_FIELD)?;
        self.finish(&buf)?;
        Ok(Order::from_parts(Uuid::from_bytes(order_id), price))
    }

    pub fn encode_price(&self, price: &Price) -> Result<Bytes, Error> {
        let value = self.decimal.encode(price.value())?;
        let mut buf = BytesMut::with_capacity(LENGTH_PREFIX_LEN + value.len());
        put_length_prefixed(&mut buf, &value)?;
        Ok(buf.freeze())
    }

    pub fn decode_price<B: Buf>(&self, mut buf: B) -> Result<Price, Error> {
        let price = self.get_price(&mut buf, PRICE_FIELD)?;
        self.finish(&buf)?;
        Ok(price)
    }

    fn get_price<B: Buf>(&self, buf: &mut B, field: &'static str) -> Result<Price, Error> {
        ensure_remaining(buf, field, LENGTH_PREFIX_LEN)?;
        let len = buf.get_u32() as usize;
        if len == 0 {
            tracing::debug!(field, "zero-length decimal value");
            return Err(Error::EmptyValue(field));
        }
        ensure_remaining(buf, field, len)?;
        let raw = buf.copy_to_bytes(len);
        let value = self.decimal.decode(&raw)?;
        Ok(Price::from_scaled(value))
    }

    fn finish<B: Buf>(&self, buf: &B) -> Result<(), Error> {
        if self.strict && buf.has_remaining() {
            tracing::debug!(remaining = buf.remaining(), "trailing bytes after record");
            return Err(Error::TrailingBytes(buf.remaining()));
        }
        Ok(())
    }
}

fn put_length_prefixed(buf: &mut BytesMut, value: &[u8]) -> Result<(), Error> {
    let len = u32::try_from(value.len()).map_err(|_| Error::PrecisionOverflow {
        width: value.len(),
        max_width: u32::MAX as usize,
    })?;
    buf.put_u32(len);
    buf.put_slice(value);
    Ok(())
}

fn ensure_remaining<B: Buf>(buf: &B, field: &'static str, needed: usize) -> Result<(), Error> {
    let remaining = buf.remaining();
    if remaining < needed {
        tracing::debug!(field, needed, remaining, "record buffer truncated");
        return Err(Error::TruncatedBuffer {
            field,
            needed,
            remaining,
        });
    }
    Ok(())
}
