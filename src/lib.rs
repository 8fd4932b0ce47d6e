#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![doc(html_root_url = "https://docs.rs/avro_order/0.1.0")]
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod buffer;
pub mod codec;
mod decimal;
mod error;
mod record;
pub mod render;
mod str;

#[cfg(feature = "rust-fuzz")]
mod arbitrary;
#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use buffer::{Record, RecordCodec};
pub use codec::DecimalCodec;
pub use decimal::Decimal;
pub use error::Error;
pub use record::{Order, OrderBuilder, Price, PriceBuilder};
pub use render::render;

#[cfg(feature = "macros")]
pub use avro_order_macros::dec;

/// A convenience module appropriate for glob imports (`use avro_order::prelude::*;`).
pub mod prelude {
    pub use crate::{Decimal, Order, Price, Record, RecordCodec};
    pub use core::str::FromStr;
}
