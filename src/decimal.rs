use crate::Error;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

// Fast access for 10^n where n is 0-19
static POWERS_10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

pub(crate) fn pow10(exp: u32) -> BigInt {
    match POWERS_10.get(exp as usize) {
        Some(power) => BigInt::from(*power),
        None => BigInt::from(10u32).pow(exp),
    }
}

/// `Decimal` represents an exact decimal number of arbitrary precision.
///
/// The values are of the form m / 10^e, where m is an integer of any size (the unscaled value)
/// and e is the scale. The scale is part of the representation: `1.5` and `1.500` compare as
/// equal, but they report a scale of 1 and 3 respectively and they format differently.
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    /// Returns a `Decimal` with a 64 bit `m` representation and corresponding `e` scale.
    ///
    /// # Arguments
    ///
    /// * `num` - An i64 that represents the `m` portion of the decimal number
    /// * `scale` - A u32 representing the `e` portion of the decimal number.
    ///
    /// # Example
    ///
    /// ```
    /// # use avro_order::Decimal;
    /// let pi = Decimal::new(3141, 3);
    /// assert_eq!(pi.to_string(), "3.141");
    /// ```
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Decimal {
        Decimal {
            unscaled: BigInt::from(num),
            scale,
        }
    }

    /// Creates a `Decimal` using a 128 bit signed `m` representation and corresponding `e` scale.
    ///
    /// # Example
    ///
    /// ```
    /// # use avro_order::Decimal;
    /// let price = Decimal::from_i128_with_scale(1234567890, 3);
    /// assert_eq!(price.to_string(), "1234567.890");
    /// ```
    #[must_use]
    pub fn from_i128_with_scale(num: i128, scale: u32) -> Decimal {
        Decimal {
            unscaled: BigInt::from(num),
            scale,
        }
    }

    /// Creates a `Decimal` from an unscaled integer of any size and a scale.
    #[must_use]
    pub const fn from_bigint(unscaled: BigInt, scale: u32) -> Decimal {
        Decimal { unscaled, scale }
    }

    /// Returns the scale of the decimal number, otherwise known as `e`.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the unscaled value, otherwise known as `m`.
    #[inline]
    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Consumes the decimal, returning the unscaled value.
    #[must_use]
    pub fn into_unscaled(self) -> BigInt {
        self.unscaled
    }

    /// Returns the unscaled value as an `i128`, or `None` if it does not fit.
    #[must_use]
    pub fn mantissa(&self) -> Option<i128> {
        self.unscaled.to_i128()
    }

    /// Returns `true` if this Decimal number is equivalent to zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns `true` if the decimal is negative.
    #[inline]
    #[must_use]
    pub fn is_sign_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Returns `true` if the decimal is positive. Zero is positive.
    #[inline]
    #[must_use]
    pub fn is_sign_positive(&self) -> bool {
        !self.is_sign_negative()
    }

    /// Returns the number of significant digits in the unscaled value. Zero has a precision
    /// of one.
    ///
    /// ```
    /// # use avro_order::Decimal;
    /// assert_eq!(Decimal::from_i128_with_scale(1234567890, 3).precision(), 10);
    /// assert_eq!(Decimal::new(-5, 4).precision(), 1);
    /// ```
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.unscaled.magnitude().to_str_radix(10).len() as u32
    }

    /// Returns the same number at the requested scale.
    ///
    /// Increasing the scale is always exact. Decreasing it only succeeds when every digit
    /// being dropped is zero; otherwise `Error::ScaleMismatch` is returned. This never rounds.
    ///
    /// ```
    /// # use avro_order::Decimal;
    /// # use core::str::FromStr;
    /// let value = Decimal::from_str("1.2300").unwrap();
    /// assert_eq!(value.rescale_exact(3).unwrap().to_string(), "1.230");
    /// assert_eq!(value.rescale_exact(5).unwrap().to_string(), "1.23000");
    /// assert!(value.rescale_exact(1).is_err());
    /// ```
    pub fn rescale_exact(&self, scale: u32) -> Result<Decimal, Error> {
        match scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Greater => Ok(Decimal {
                unscaled: &self.unscaled * pow10(scale - self.scale),
                scale,
            }),
            Ordering::Less => {
                let divisor = pow10(self.scale - scale);
                if !(&self.unscaled % &divisor).is_zero() {
                    return Err(Error::ScaleMismatch {
                        expected: scale,
                        actual: self.scale,
                    });
                }
                Ok(Decimal {
                    unscaled: &self.unscaled / divisor,
                    scale,
                })
            }
        }
    }

    /// Strips any trailing zeros from the fractional part, e.g. `1.500` becomes `1.5`.
    #[must_use]
    pub fn normalize(&self) -> Decimal {
        let ten = BigInt::from(10u32);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        if unscaled.is_zero() {
            return Decimal::default();
        }
        while scale > 0 && (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        Decimal { unscaled, scale }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Decimal {
        Decimal {
            unscaled: self.unscaled.abs(),
            scale: self.scale,
        }
    }

    // Unscaled value at a scale at least as large as our own.
    pub(crate) fn widened_unscaled(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.unscaled.clone()
        } else {
            &self.unscaled * pow10(scale - self.scale)
        }
    }
}

fn scaled_bigints(me: &Decimal, other: &Decimal) -> (BigInt, BigInt) {
    let scale = me.scale.max(other.scale);
    (me.widened_unscaled(scale), other.widened_unscaled(scale))
}

macro_rules! impl_from {
    ($T:ty) => {
        impl From<$T> for Decimal {
            #[inline]
            fn from(t: $T) -> Decimal {
                Decimal {
                    unscaled: BigInt::from(t),
                    scale: 0,
                }
            }
        }
    };
}

impl_from!(isize);
impl_from!(i8);
impl_from!(i16);
impl_from!(i32);
impl_from!(i64);
impl_from!(i128);
impl_from!(usize);
impl_from!(u8);
impl_from!(u16);
impl_from!(u32);
impl_from!(u64);
impl_from!(u128);

impl From<BigInt> for Decimal {
    fn from(unscaled: BigInt) -> Decimal {
        Decimal { unscaled, scale: 0 }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(value: &str) -> Result<Decimal, Self::Err> {
        crate::str::parse_str_radix_10(value)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = Error;

    #[inline]
    fn try_from(t: &str) -> Result<Self, Error> {
        Decimal::from_str(t)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rep = crate::str::to_str_internal(self, false, f.precision());
        f.pad_integral(self.is_sign_positive(), "", &rep)
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values must hash alike regardless of scale.
        let normalized = self.normalize();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        let (left, right) = scaled_bigints(self, other);
        left.cmp(&right)
    }
}
