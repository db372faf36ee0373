use std::collections::HashMap;
use lazy_static::lazy_static;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::{Display, EnumString};

/// A Steam wallet currency. The value is the ID used by the Steam Community Market.
#[derive(Serialize_repr, Deserialize_repr, Display, EnumString, TryFromPrimitive, IntoPrimitive, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u32)]
pub enum Currency {
    USD = 1,
    GBP = 2,
    EUR = 3,
    CHF = 4,
    RUB = 5,
    PLN = 6,
    BRL = 7,
    JPY = 8,
    NOK = 9,
    IDR = 10,
    MYR = 11,
    PHP = 12,
    SGD = 13,
    THB = 14,
    VND = 15,
    KRW = 16,
    TRY = 17,
    UAH = 18,
    MXN = 19,
    CAD = 20,
    AUD = 21,
    NZD = 22,
    CNY = 23,
    INR = 24,
    CLP = 25,
    PEN = 26,
    COP = 27,
    ZAR = 28,
    HKD = 29,
    TWD = 30,
    SAR = 31,
    AED = 32,
    ARS = 34,
    ILS = 35,
    BYN = 36,
    KZT = 37,
    KWD = 38,
    QAR = 39,
    CRC = 40,
    UYU = 41,
}

lazy_static! {
    /// Wallet currency symbols as displayed on the Steam Community, with anything other than
    /// letters and currency signs removed, e.g. `"S/"` is `"S"`.
    static ref CURRENCY_SYMBOLS: HashMap<&'static str, Currency> = HashMap::from([
        ("$", Currency::USD),
        ("£", Currency::GBP),
        ("€", Currency::EUR),
        ("CHF", Currency::CHF),
        ("₽", Currency::RUB),
        ("zł", Currency::PLN),
        ("R$", Currency::BRL),
        ("¥", Currency::JPY),
        ("kr", Currency::NOK),
        ("Rp", Currency::IDR),
        ("RM", Currency::MYR),
        ("₱", Currency::PHP),
        ("S$", Currency::SGD),
        ("฿", Currency::THB),
        ("₫", Currency::VND),
        ("₩", Currency::KRW),
        ("₺", Currency::TRY),
        ("₴", Currency::UAH),
        ("Mex$", Currency::MXN),
        ("CAD", Currency::CAD),
        ("AUD", Currency::AUD),
        ("NZ$", Currency::NZD),
        ("元", Currency::CNY),
        ("₹", Currency::INR),
        ("CLP$", Currency::CLP),
        ("S", Currency::PEN),
        ("COP$", Currency::COP),
        ("R", Currency::ZAR),
        ("HK$", Currency::HKD),
        ("NT$", Currency::TWD),
        ("رس", Currency::SAR),
        ("دإ", Currency::AED),
        ("₪", Currency::ILS),
        ("Br", Currency::BYN),
        ("₸", Currency::KZT),
        ("KWD", Currency::KWD),
        ("QAR", Currency::QAR),
        ("₡", Currency::CRC),
        ("UYU$", Currency::UYU),
        ("RMB", Currency::CNY),
    ]);
}

impl Currency {
    /// Looks up a currency by the symbol shown next to prices, e.g. `"zł"`. The symbol must
    /// contain only letters and currency signs, as produced by
    /// [`clean_price`](crate::market::clean_price).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        CURRENCY_SYMBOLS.get(symbol).copied()
    }

    /// The numeric ID of the currency.
    pub fn id(&self) -> u32 {
        (*self).into()
    }
}
