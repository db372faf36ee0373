//! Enumerated types.

mod confirmation_type;
mod currency;
mod language;

pub use confirmation_type::ConfirmationType;
pub use currency::Currency;
pub use language::Language;
