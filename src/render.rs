//! Textual form of the records.
//!
//! Records render as a JSON-like object with fields in declaration order:
//!
//! ```text
//! {"orderId": 0f0e0d0c-0b0a-4908-8706-050403020100, "price": {"value": 1234567.890}}
//! ```
//!
//! The identifier is written unquoted and decimals always carry exactly their scale in
//! fractional digits. The alternate flag (`{:#}`) spreads the object over several indented
//! lines. Whitespace carries no meaning; compare rendered text with [`eq_ignoring_whitespace`].

use crate::record::{Order, Price};

use alloc::string::{String, ToString};
use core::fmt;

const INDENT: &str = "    ";

/// Renders a record to its textual form.
pub fn render<R: fmt::Display + ?Sized>(record: &R) -> String {
    record.to_string()
}

/// Returns `true` when both strings are equal once all whitespace is removed.
///
/// ```
/// # use avro_order::render::eq_ignoring_whitespace;
/// assert!(eq_ignoring_whitespace("{\"value\": 1.000}", "{\n\t\"value\":1.000\n}"));
/// assert!(!eq_ignoring_whitespace("1.000", "1.00 0 1"));
/// ```
#[must_use]
pub fn eq_ignoring_whitespace(left: &str, right: &str) -> bool {
    let left = left.chars().filter(|c| !c.is_whitespace());
    let right = right.chars().filter(|c| !c.is_whitespace());
    left.eq(right)
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn fmt_price(price: &Price, f: &mut fmt::Formatter<'_>, depth: Option<usize>) -> fmt::Result {
    match depth {
        Some(depth) => {
            f.write_str("{\n")?;
            write_indent(f, depth + 1)?;
            writeln!(f, "\"value\": {}", price.value())?;
            write_indent(f, depth)?;
            f.write_str("}")
        }
        None => write!(f, "{{\"value\": {}}}", price.value()),
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = if f.alternate() { Some(0) } else { None };
        fmt_price(self, f, depth)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("{\n")?;
            write_indent(f, 1)?;
            writeln!(f, "\"orderId\": {},", self.order_id())?;
            write_indent(f, 1)?;
            f.write_str("\"price\": ")?;
            fmt_price(self.price(), f, Some(1))?;
            f.write_str("\n}")
        } else {
            write!(f, "{{\"orderId\": {}, \"price\": ", self.order_id())?;
            fmt_price(self.price(), f, None)?;
            f.write_str("}")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Decimal;
    use alloc::format;
    use uuid::Uuid;

    fn order() -> Order {
        Order::builder()
            .order_id(Uuid::from_u128(0x0f0e_0d0c_0b0a_4908_8706_0504_0302_0100))
            .price(
                Price::builder()
                    .value(Decimal::from_i128_with_scale(1234567890, 3))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn compact_form_is_a_single_line() {
        assert_eq!(
            render(&order()),
            r#"{"orderId": 0f0e0d0c-0b0a-4908-8706-050403020100, "price": {"value": 1234567.890}}"#
        );
    }

    #[test]
    fn alternate_form_indents_nested_records() {
        let expected = concat!(
            "{\n",
            "    \"orderId\": 0f0e0d0c-0b0a-4908-8706-050403020100,\n",
            "    \"price\": {\n",
            "        \"value\": 1234567.890\n",
            "    }\n",
            "}"
        );
        assert_eq!(format!("{:#}", order()), expected);
        assert!(eq_ignoring_whitespace(&format!("{:#}", order()), &render(&order())));
    }

    #[test]
    fn price_renders_trailing_zeros() {
        let price = Price::builder().value(Decimal::new(2, 0)).build().unwrap();
        assert_eq!(render(&price), r#"{"value": 2.000}"#);
        assert_eq!(format!("{:#}", price), "{\n    \"value\": 2.000\n}");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let price = Price::builder().value(Decimal::new(-5, 3)).build().unwrap();
        assert_eq!(render(&price), r#"{"value": -0.005}"#);
    }

    #[test]
    fn whitespace_comparison_still_sees_content() {
        assert!(eq_ignoring_whitespace("a b\tc\n", "abc"));
        assert!(!eq_ignoring_whitespace("abc", "abd"));
        assert!(!eq_ignoring_whitespace("abc", "ab"));
    }
}
