use crate::{error::tail_error, Decimal, Error};

use alloc::string::String;
use num_bigint::{BigInt, BigUint, Sign};

// Formats the decimal with exactly `precision` fractional digits (the scale when `None`).
// Extra precision pads with zeros, less precision truncates.
pub(crate) fn to_str_internal(value: &Decimal, append_sign: bool, precision: Option<usize>) -> String {
    let scale = value.scale() as usize;
    let digits = value.unscaled().magnitude().to_str_radix(10);

    let prec = precision.unwrap_or(scale);
    let mut rep = String::with_capacity(digits.len() + prec + 3);
    if append_sign && value.is_sign_negative() {
        rep.push('-');
    }

    // Low fractionals have fewer digits than the scale, e.g. 0.001 is "1" at scale 3
    let (whole, fraction) = if digits.len() > scale {
        digits.split_at(digits.len() - scale)
    } else {
        ("", digits.as_str())
    };
    let leading_zeros = scale - fraction.len();

    if whole.is_empty() {
        rep.push('0');
    } else {
        rep.push_str(whole);
    }

    if prec > 0 {
        rep.push('.');
        let mut written = 0;
        for c in core::iter::repeat('0').take(leading_zeros).chain(fraction.chars()) {
            if written == prec {
                break;
            }
            rep.push(c);
            written += 1;
        }
        while written < prec {
            rep.push('0');
            written += 1;
        }
    }
    rep
}

pub(crate) fn parse_str_radix_10(str: &str) -> Result<Decimal, Error> {
    let bytes = str.as_bytes();
    let (negative, bytes) = match bytes {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    };
    if bytes.is_empty() {
        return tail_error("Invalid decimal: empty");
    }

    let mut digits = String::with_capacity(bytes.len());
    let mut point: Option<usize> = None;
    for &b in bytes {
        match b {
            b'0'..=b'9' => digits.push(char::from(b)),
            b'.' => {
                if point.is_some() {
                    return tail_error("Invalid decimal: two decimal points");
                }
                point = Some(digits.len());
            }
            // Separators are allowed between digits only
            b'_' if !digits.is_empty() => {}
            _ => return tail_error("Invalid decimal: unknown character"),
        }
    }

    if digits.is_empty() {
        return tail_error("Invalid decimal: no digits found");
    }
    let scale = match point {
        Some(offset) => digits.len() - offset,
        None => 0,
    };
    let scale = match u32::try_from(scale) {
        Ok(scale) => scale,
        Err(_) => return tail_error("Invalid decimal: scale out of range"),
    };

    let magnitude = match BigUint::parse_bytes(digits.as_bytes(), 10) {
        Some(magnitude) => magnitude,
        None => return tail_error("Failed to parse string"),
    };
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(Decimal::from_bigint(BigInt::from_biguint(sign, magnitude), scale))
}
