use crate::locale::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "Brasil")]
    Brazil,
    #[serde(rename = "Estados Unidos")]
    UnitedStates,
    Portugal,
    #[serde(rename = "Espanha")]
    Spain,
    #[serde(rename = "França")]
    France,
    #[serde(rename = "Reino Unido")]
    UnitedKingdom,
    Argentina,
    Chile,
}

/// Static per-country mask settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryConfig {
    pub name: &'static str,
    pub language: Language,
    pub max_digits: usize,
    pub placeholder: &'static str,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Brazil,
        Country::UnitedStates,
        Country::Portugal,
        Country::Spain,
        Country::France,
        Country::UnitedKingdom,
        Country::Argentina,
        Country::Chile,
    ];

    pub fn config(&self) -> CountryConfig {
        let (name, language, max_digits, placeholder) = match self {
            Country::Brazil => ("Brasil", Language::Pt, 11, "(00) 00000-0000"),
            Country::UnitedStates => ("Estados Unidos", Language::En, 10, "(000) 000-0000"),
            Country::Portugal => ("Portugal", Language::Pt, 9, "000 000 000"),
            Country::Spain => ("Espanha", Language::Es, 9, "000 000 000"),
            Country::France => ("França", Language::Fr, 9, "00 00 00 00 00"),
            Country::UnitedKingdom => ("Reino Unido", Language::En, 10, "0000 000000"),
            Country::Argentina => ("Argentina", Language::Es, 10, "0000-0000"),
            Country::Chile => ("Chile", Language::Es, 9, "0 0000 0000"),
        };

        CountryConfig {
            name,
            language,
            max_digits,
            placeholder,
        }
    }

    /// Look a country up by its display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.config().name == name)
    }

    /// Same as `from_name` but unknown names use the Brazilian mask
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Re-derive the full masked phone string from whatever the user typed.
    ///
    /// Non-digits are discarded and digits past the country's maximum are
    /// truncated.
    pub fn format_phone(&self, input: &str) -> String {
        let digits = digits_only(input, self.config().max_digits);
        let d = digits.as_str();
        let len = d.len();

        match self {
            Country::Brazil => match len {
                0 => String::new(),
                1..=2 => format!("({}", d),
                3..=6 => format!("({}) {}", &d[..2], &d[2..]),
                7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
                _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
            },
            Country::UnitedStates => match len {
                0 => String::new(),
                1..=3 => format!("({}", d),
                4..=6 => format!("({}) {}", &d[..3], &d[3..]),
                _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
            },
            Country::Portugal | Country::Spain => match len {
                0..=3 => d.to_string(),
                4..=6 => format!("{} {}", &d[..3], &d[3..]),
                _ => format!("{} {} {}", &d[..3], &d[3..6], &d[6..]),
            },
            Country::France => d
                .as_bytes()
                .chunks(2)
                .map(|pair| String::from_utf8_lossy(pair).into_owned())
                .collect::<Vec<_>>()
                .join(" "),
            Country::UnitedKingdom => match len {
                0..=4 => d.to_string(),
                _ => format!("{} {}", &d[..4], &d[4..]),
            },
            Country::Argentina => match len {
                0..=4 => d.to_string(),
                _ => format!("{}-{}", &d[..4], &d[4..]),
            },
            Country::Chile => match len {
                0..=1 => d.to_string(),
                2..=5 => format!("{} {}", &d[..1], &d[1..]),
                _ => format!("{} {} {}", &d[..1], &d[1..5], &d[5..]),
            },
        }
    }
}

/// Phone input state: the masked value is tied to the selected country
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneField {
    country: Country,
    value: String,
}

impl PhoneField {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            value: String::new(),
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input(&mut self, raw: &str) -> &str {
        self.value = self.country.format_phone(raw);
        &self.value
    }

    /// Switching country clears the field so masks never mix.
    /// Returns the language associated with the new country.
    pub fn set_country(&mut self, country: Country) -> Language {
        self.country = country;
        self.value.clear();
        country.config().language
    }
}

pub(crate) fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}
