use serde::{Deserialize, Serialize};

use super::DomainError;

/// Macro to generate a closed-set enum with as_str + case-insensitive FromStr.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| DomainError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    })
            }
        }
    };
}

str_enum!(Title {
    Mr => "Mr.",
    Mrs => "Mrs.",
    Ms => "Ms.",
    Miss => "Miss",
    Dr => "Dr.",
});

str_enum!(Region {
    Cervical => "cervical",
    Thoracic => "thoracic",
    Lumbar => "lumbar",
});

str_enum!(FindingCategory {
    Tone => "tone",
    Trigger => "trigger",
    RangeOfMotion => "range_of_motion",
    TestPain => "pain",
});

str_enum!(Trend {
    Improving => "improving",
    Unchanged => "unchanged",
    Worsening => "worsening",
});

str_enum!(FillMode {
    Single => "single",
    Partial => "partial",
    Full => "full",
});

impl Title {
    /// Subject pronoun used in generated prose.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Self::Mr => "he",
            Self::Mrs | Self::Ms | Self::Miss => "she",
            Self::Dr => "they",
        }
    }

    pub fn possessive(&self) -> &'static str {
        match self {
            Self::Mr => "his",
            Self::Mrs | Self::Ms | Self::Miss => "her",
            Self::Dr => "their",
        }
    }
}

impl Region {
    /// Leading letter of the vertebra codes belonging to this region (C5, T8, L3).
    pub fn letter(&self) -> char {
        match self {
            Self::Cervical => 'C',
            Self::Thoracic => 'T',
            Self::Lumbar => 'L',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Self::Cervical),
            'T' => Some(Self::Thoracic),
            'L' => Some(Self::Lumbar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_parses_case_insensitively() {
        assert_eq!("mr.".parse::<Title>().unwrap(), Title::Mr);
        assert_eq!("MRS.".parse::<Title>().unwrap(), Title::Mrs);
        assert_eq!(" Miss ".parse::<Title>().unwrap(), Title::Miss);
        assert!("Sir".parse::<Title>().is_err());
    }

    #[test]
    fn title_pronouns() {
        assert_eq!(Title::Mr.pronoun(), "he");
        assert_eq!(Title::Mr.possessive(), "his");
        assert_eq!(Title::Ms.pronoun(), "she");
        assert_eq!(Title::Mrs.possessive(), "her");
        assert_eq!(Title::Dr.pronoun(), "they");
        assert_eq!(Title::Dr.possessive(), "their");
    }

    #[test]
    fn region_letters_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_letter(region.letter()), Some(*region));
            assert_eq!(
                Region::from_letter(region.letter().to_ascii_lowercase()),
                Some(*region)
            );
        }
        assert_eq!(Region::from_letter('S'), None);
    }

    #[test]
    fn regions_order_follows_the_spine() {
        assert!(Region::Cervical < Region::Thoracic);
        assert!(Region::Thoracic < Region::Lumbar);
    }

    #[test]
    fn unknown_value_reports_enum_name() {
        let err = "sideways".parse::<Trend>().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidEnum {
                field: "Trend".into(),
                value: "sideways".into()
            }
        );
    }
}
