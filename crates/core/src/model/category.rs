use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown question category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Question domain.
///
/// Declaration order is significant: it is the iteration order of
/// [`Category::ALL`] and breaks ties when picking the strongest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Logical,
    Spatial,
    Numerical,
    Verbal,
    #[serde(rename = "Pattern Recognition")]
    PatternRecognition,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Logical,
        Category::Spatial,
        Category::Numerical,
        Category::Verbal,
        Category::PatternRecognition,
    ];

    /// Display label, also used as the key in share tokens.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Logical => "Logical",
            Category::Spatial => "Spatial",
            Category::Numerical => "Numerical",
            Category::Verbal => "Verbal",
            Category::PatternRecognition => "Pattern Recognition",
        }
    }

    /// Position in [`Category::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Careers suggested when this is the strongest category.
    #[must_use]
    pub fn careers(self) -> [&'static str; 3] {
        match self {
            Category::Logical => ["Software Architect", "Mathematician", "Philosopher"],
            Category::Spatial => ["Architect", "Pilot", "Graphic Designer"],
            Category::Numerical => ["Data Scientist", "Quantitative Analyst", "Economist"],
            Category::Verbal => ["Writer", "Diplomat", "Attorney"],
            Category::PatternRecognition => {
                ["Cryptographer", "Stock Trader", "Forensic Investigator"]
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, cat) in Category::ALL.into_iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn label_roundtrips_through_from_str() {
        for cat in Category::ALL {
            assert_eq!(cat.label().parse::<Category>().unwrap(), cat);
        }
        assert!("PatternRecognition".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Category::PatternRecognition).unwrap();
        assert_eq!(json, "\"Pattern Recognition\"");
        let back: Category = serde_json::from_str("\"Verbal\"").unwrap();
        assert_eq!(back, Category::Verbal);
    }
}
