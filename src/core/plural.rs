//! Numerus (plural form) rules per locale.
//!
//! A `numerus="yes"` message carries one `<numerusform>` per plural form of
//! the target language; the rule below decides how many forms a language
//! has and which one a count selects. The families follow the tables Qt
//! Linguist uses when it generates numerus forms.

/// Plural family of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Korean, Japanese, Thai, Turkish,
    /// Hungarian, Persian, ...).
    NoPlurals,
    /// `n == 1` is singular, everything else plural.
    English,
    /// `0` and `1` are singular.
    French,
    Polish,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian, Bosnian.
    Slavic,
    /// Czech, Slovak.
    Czech,
    Lithuanian,
    Romanian,
    Slovenian,
    Arabic,
}

impl PluralRule {
    /// Find the rule for a locale such as `ko_KR`, `pt-BR` or `PL`.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let (language, territory) = split_locale(locale);

        let rule = match language.as_str() {
            "ja" | "ko" | "zh" | "th" | "vi" | "id" | "ms" | "lo" | "my" | "km" | "tr" | "hu"
            | "fa" => Self::NoPlurals,
            "pt" if territory.as_deref() == Some("BR") => Self::French,
            "fr" => Self::French,
            "en" | "nl" | "de" | "es" | "it" | "sv" | "da" | "nb" | "nn" | "no" | "fi" | "el"
            | "et" | "ca" | "bg" | "eu" | "gl" | "he" | "pt" => Self::English,
            "pl" => Self::Polish,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "cs" | "sk" => Self::Czech,
            "lt" => Self::Lithuanian,
            "ro" => Self::Romanian,
            "sl" => Self::Slovenian,
            "ar" => Self::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of `<numerusform>` entries a translation must have.
    pub fn form_count(self) -> usize {
        match self {
            Self::NoPlurals => 1,
            Self::English | Self::French => 2,
            Self::Polish | Self::Slavic | Self::Czech | Self::Lithuanian | Self::Romanian => 3,
            Self::Slovenian => 4,
            Self::Arabic => 6,
        }
    }

    /// Index of the form a count selects. Negative counts use their
    /// absolute value.
    pub fn form_index(self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        let not_teen = !(10..20).contains(&n100);

        match self {
            Self::NoPlurals => 0,
            Self::English => usize::from(n != 1),
            Self::French => usize::from(n > 1),
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && not_teen {
                    1
                } else {
                    2
                }
            }
            Self::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && not_teen {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && not_teen {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if (3..=10).contains(&n100) {
                    3
                } else if n100 >= 11 {
                    4
                } else {
                    5
                }
            }
        }
    }
}

/// Split `pt_BR`, `pt-br` or `PT` into a lower-case language and an
/// upper-case territory.
pub fn split_locale(locale: &str) -> (String, Option<String>) {
    let normalized = locale.trim().replace('-', "_");
    let mut parts = normalized.split('_').filter(|p| !p.is_empty());
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let territory = parts
        .find(|p| p.len() == 2 || p.chars().all(|c| c.is_ascii_digit()))
        .map(|p| p.to_ascii_uppercase());
    (language, territory)
}
