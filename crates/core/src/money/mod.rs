//! Money module - exact decimal amounts and currency metadata.

mod amount;
mod currency;

pub use amount::{parse_amount, parse_stored_amount};
pub use currency::Currency;
