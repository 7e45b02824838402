use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// `None` is "not evaluable": qualitative tests and malformed ranges land here.
str_enum!(Flag {
    None => "none",
    Normal => "normal",
    High => "high",
    Low => "low",
});

str_enum!(Sex {
    Male => "male",
    Female => "female",
});

// Live colouring state of a result input on the entry page.
str_enum!(EntryIndicator {
    None => "none",
    Normal => "normal",
    High => "high",
    Low => "low",
});

impl Flag {
    /// High or Low.
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Self::High | Self::Low)
    }
}

impl Sex {
    /// Lenient parse of the patient sex as sent by the EHR.
    ///
    /// Accepts `male`/`female` in any case plus `m`/`f`. Anything else
    /// (blank, "unknown", "other") is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}
