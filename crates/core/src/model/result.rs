use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::category::Category;

//
// ─── CATEGORY SCORES ───────────────────────────────────────────────────────────
//

/// Percentage correct per category, one slot per [`Category`].
///
/// Serializes as a map keyed by category label, in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategoryScores([u32; 5]);

impl CategoryScores {
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, percent: u32) {
        self.0[category.index()] = percent;
    }

    /// Iterate `(category, percent)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Highest-scoring category; earlier categories win ties.
    #[must_use]
    pub fn strongest(&self) -> Category {
        let mut best = Category::ALL[0];
        for cat in Category::ALL {
            if self.get(cat) > self.get(best) {
                best = cat;
            }
        }
        best
    }

    /// Categories ordered by score descending, ties kept in declaration order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Category, u32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (cat, percent) in self.iter() {
            map.serialize_entry(cat.label(), &percent)?;
        }
        map.end()
    }
}

struct CategoryScoresVisitor;

impl<'de> Visitor<'de> for CategoryScoresVisitor {
    type Value = CategoryScores;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category label to percentage")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut scores = CategoryScores::default();
        while let Some((key, percent)) = access.next_entry::<String, u32>()? {
            let cat = key.parse::<Category>().map_err(de::Error::custom)?;
            scores.set(cat, percent);
        }
        Ok(scores)
    }
}

impl<'de> Deserialize<'de> for CategoryScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryScoresVisitor)
    }
}

//
// ─── QUIZ RESULT ───────────────────────────────────────────────────────────────
//

/// Outcome of a completed attempt, or of a decoded share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub score: i32,
    pub percentile: u32,
    pub category_scores: CategoryScores,
    pub analysis: String,
    pub recommended_careers: Vec<String>,
}

/// Counts shown next to a result. A shared link carries its own copy,
/// which takes precedence over whatever session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareMeta {
    pub correct_count: u32,
    pub total_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_prefers_earlier_category_on_tie() {
        let mut scores = CategoryScores::default();
        assert_eq!(scores.strongest(), Category::Logical);

        scores.set(Category::Verbal, 60);
        scores.set(Category::Spatial, 60);
        assert_eq!(scores.strongest(), Category::Spatial);

        scores.set(Category::PatternRecognition, 61);
        assert_eq!(scores.strongest(), Category::PatternRecognition);
    }

    #[test]
    fn ranked_is_stable() {
        let mut scores = CategoryScores::default();
        scores.set(Category::Numerical, 100);
        scores.set(Category::Verbal, 50);
        scores.set(Category::Logical, 50);

        let ranked = scores.ranked();
        assert_eq!(ranked[0], (Category::Numerical, 100));
        assert_eq!(ranked[1], (Category::Logical, 50));
        assert_eq!(ranked[2], (Category::Verbal, 50));
        assert_eq!(ranked[3], (Category::Spatial, 0));
    }

    #[test]
    fn serializes_labels_in_declaration_order() {
        let mut scores = CategoryScores::default();
        scores.set(Category::PatternRecognition, 75);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(
            json,
            r#"{"Logical":0,"Spatial":0,"Numerical":0,"Verbal":0,"Pattern Recognition":75}"#
        );
    }

    #[test]
    fn deserialize_fills_missing_and_rejects_unknown() {
        let scores: CategoryScores = serde_json::from_str(r#"{"Verbal":40}"#).unwrap();
        assert_eq!(scores.get(Category::Verbal), 40);
        assert_eq!(scores.get(Category::Logical), 0);

        assert!(serde_json::from_str::<CategoryScores>(r#"{"Memory":40}"#).is_err());
    }
}
