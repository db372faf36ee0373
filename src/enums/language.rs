use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Languages for item descriptions and market pages. The string form is the language name the
/// Steam Community expects in the `l` query parameter.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, IntoStaticStr, PartialEq, Eq, Hash, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Bulgarian,
    /// Chinese (Simplified).
    #[strum(serialize = "schinese")]
    #[serde(rename = "schinese")]
    ChineseSimplified,
    /// Chinese (Traditional).
    #[strum(serialize = "tchinese")]
    #[serde(rename = "tchinese")]
    ChineseTraditional,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    #[strum(serialize = "koreana")]
    #[serde(rename = "koreana")]
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    #[strum(serialize = "brazilian")]
    #[serde(rename = "brazilian")]
    PortugueseBrazil,
    Romanian,
    Russian,
    Spanish,
    /// Spanish (Latin America).
    #[strum(serialize = "latam")]
    #[serde(rename = "latam")]
    SpanishLatinAmerica,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

impl Language {
    /// The language name used in query parameters.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn uses_community_language_names() {
        assert_eq!(Language::English.as_str(), "english");
        assert_eq!(Language::ChineseSimplified.as_str(), "schinese");
        assert_eq!(Language::Korean.to_string(), "koreana");
    }

    #[test]
    fn parses_language_name() {
        assert_eq!(Language::from_str("brazilian").unwrap(), Language::PortugueseBrazil);
        assert!(Language::from_str("klingon").is_err());
    }
}
