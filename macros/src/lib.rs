//!
//! A helpful macro for instantiating `Decimal` numbers.
//!
//! By default, this requires `avro_order` to be available at the project root. e.g. the macro
//! will effectively produce:
//!
//! ```ignore
//! ::avro_order::Decimal::from_i128_with_scale(1234567890, 3)
//! ```
//!
//! When looking to reexport the library this is not always desired. Enabling the feature
//! `reexportable` makes the macro produce the functional equivalent of:
//!
//! ```ignore
//! Decimal::from_i128_with_scale(1234567890, 3)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use avro_order_macros::dec;
//!
//! // If the reexportable feature is enabled, `Decimal` needs to be in scope
//! #[cfg(feature = "reexportable")]
//! use avro_order::Decimal;
//!
//! let number = dec!(1234567.890);
//! assert_eq!("1234567.890", number.to_string());
//! let number = dec!(-5.4321);
//! assert_eq!("-5.4321", number.to_string());
//! ```
//!

mod str;

use proc_macro::TokenStream;
use quote::quote;

/// Transform a decimal literal directly to a `Decimal` at compile time.
///
/// The scale is the number of digits written after the period, so `dec!(1.500)` has a scale
/// of three. Underscores may separate digits: `dec!(1_000.000_1)`. The unscaled value must
/// fit in an `i128`; larger numbers can be parsed at runtime with `FromStr`.
///
/// # Example
///
/// ```rust
/// use avro_order_macros::dec;
///
/// // If the reexportable feature is enabled, `Decimal` needs to be in scope
/// #[cfg(feature = "reexportable")]
/// use avro_order::Decimal;
///
/// let number = dec!(1.500);
/// assert_eq!(number.scale(), 3);
/// assert_eq!("1.500", number.to_string());
/// ```
#[proc_macro]
pub fn dec(input: TokenStream) -> TokenStream {
    let source = input.to_string();
    let unpacked = match str::parse_dec(&source) {
        Ok(d) => d,
        Err(e) => panic!("{}", e),
    };

    expand(unpacked.mantissa, unpacked.scale)
}

#[cfg(not(feature = "reexportable"))]
fn expand(mantissa: i128, scale: u32) -> TokenStream {
    let expanded = quote! {
        ::avro_order::Decimal::from_i128_with_scale(#mantissa, #scale)
    };
    expanded.into()
}

#[cfg(feature = "reexportable")]
fn expand(mantissa: i128, scale: u32) -> TokenStream {
    let expanded = quote! {
        Decimal::from_i128_with_scale(#mantissa, #scale)
    };
    expanded.into()
}
