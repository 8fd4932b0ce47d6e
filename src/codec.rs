//! Fixed-scale decimal encoding.
//!
//! A decimal is stored as its unscaled value (`value * 10^scale`) in the shortest big-endian
//! two's-complement form, matching the Avro `decimal` logical type. The scale itself is not
//! written; reader and writer agree on it out of band.

use crate::decimal::pow10;
use crate::{Decimal, Error};

use alloc::vec::Vec;
use num_bigint::BigInt;
use num_traits::One;

/// Encodes and decodes decimals at a fixed scale, optionally bounded by a maximum byte width.
///
/// # Example
///
/// ```
/// # use avro_order::{Decimal, DecimalCodec, Error};
/// let codec = DecimalCodec::new(3).with_max_width(4);
/// let bytes = codec.encode(&Decimal::new(12345, 2))?;
/// assert_eq!(bytes, [0x01, 0xe2, 0x3a]);
/// assert_eq!(codec.decode(&bytes)?.to_string(), "123.450");
///
/// let too_wide = Decimal::from(10_000_000_000i64);
/// assert!(matches!(codec.encode(&too_wide), Err(Error::PrecisionOverflow { .. })));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalCodec {
    scale: u32,
    max_width: Option<usize>,
}

impl DecimalCodec {
    /// Creates a codec for the given scale with no width ceiling.
    #[must_use]
    pub const fn new(scale: u32) -> DecimalCodec {
        DecimalCodec { scale, max_width: None }
    }

    /// Creates a codec whose width ceiling is the number of bytes needed for `precision`
    /// decimal digits, the sizing rule used for Avro `fixed` backed decimals.
    #[must_use]
    pub fn with_precision(precision: u32, scale: u32) -> DecimalCodec {
        DecimalCodec::new(scale).with_max_width(Self::max_width_for_precision(precision))
    }

    /// Caps the encoded unscaled value at `max_width` bytes.
    #[must_use]
    pub const fn with_max_width(mut self, max_width: usize) -> DecimalCodec {
        self.max_width = Some(max_width);
        self
    }

    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    #[must_use]
    pub const fn max_width(&self) -> Option<usize> {
        self.max_width
    }

    /// Returns the number of bytes needed to hold any unscaled value of `precision` digits.
    ///
    /// ```
    /// # use avro_order::DecimalCodec;
    /// assert_eq!(DecimalCodec::max_width_for_precision(2), 1);
    /// assert_eq!(DecimalCodec::max_width_for_precision(10), 5);
    /// assert_eq!(DecimalCodec::max_width_for_precision(38), 16);
    /// ```
    #[must_use]
    pub fn max_width_for_precision(precision: u32) -> usize {
        let largest = pow10(precision) - BigInt::one();
        largest.to_signed_bytes_be().len()
    }

    /// Encodes `value` as the minimal two's-complement big-endian bytes of its unscaled value
    /// at this codec's scale.
    ///
    /// A value with a smaller scale is widened exactly, and trailing zeros beyond this codec's
    /// scale are dropped. A value whose unscaled form at this scale is not an exact integer
    /// (`1.2345` at scale 3) fails with `Error::ScaleMismatch`; nothing is rounded.
    pub fn encode(&self, value: &Decimal) -> Result<Vec<u8>, Error> {
        let value = value.rescale_exact(self.scale).map_err(|err| {
            tracing::debug!(expected = self.scale, actual = value.scale(), "decimal scale mismatch");
            err
        })?;
        let bytes = value.unscaled().to_signed_bytes_be();
        self.check_width(bytes.len())?;
        tracing::trace!(scale = self.scale, width = bytes.len(), "encoded decimal");
        Ok(bytes)
    }

    /// Decodes two's-complement big-endian bytes into a decimal with exactly this codec's
    /// scale. Sign-extended input is accepted and an empty slice decodes to zero.
    pub fn decode(&self, bytes: &[u8]) -> Result<Decimal, Error> {
        self.check_width(bytes.len())?;
        Ok(decode(bytes, self.scale))
    }

    fn check_width(&self, width: usize) -> Result<(), Error> {
        match self.max_width {
            Some(max_width) if width > max_width => {
                tracing::debug!(width, max_width, "decimal exceeds maximum width");
                Err(Error::PrecisionOverflow { width, max_width })
            }
            _ => Ok(()),
        }
    }
}

/// Encodes `value` at `scale` with no width ceiling. See [`DecimalCodec::encode`].
pub fn encode(value: &Decimal, scale: u32) -> Result<Vec<u8>, Error> {
    DecimalCodec::new(scale).encode(value)
}

/// Decodes `bytes` at `scale`. Without a width ceiling this cannot fail.
#[must_use]
pub fn decode(bytes: &[u8], scale: u32) -> Decimal {
    Decimal::from_bigint(BigInt::from_signed_bytes_be(bytes), scale)
}
