use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How a question's answer is turned into points.
///
/// Any type string the engine does not know deserializes to `Unknown`, so a
/// catalog written for a newer client still loads and those questions score 0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Likert,
    Binary,
    Multi,
    Directional,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::Likert => "likert",
            QuestionType::Binary => "binary",
            QuestionType::Multi => "multi",
            QuestionType::Directional => "directional",
            QuestionType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Answer label to point value table, kept in file order.
///
/// Serialized as a plain object (`{"Yes": 10, "No": 0}`). Order matters for
/// the case-insensitive lookup: the first matching key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping(Vec<(String, i64)>);

impl Mapping {
    pub fn new(entries: Vec<(String, i64)>) -> Self {
        Self(entries)
    }

    /// Exact key lookup.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Case-insensitive key lookup (linear scan, first match in file order).
    pub fn get_ignore_case(&self, key: &str) -> Option<i64> {
        let lowered = key.to_lowercase();
        self.0
            .iter()
            .find(|(k, _)| k.to_lowercase() == lowered)
            .map(|(_, v)| *v)
    }

    /// Largest point value, `None` for an empty mapping.
    pub fn max_value(&self) -> Option<i64> {
        self.0.iter().map(|(_, v)| *v).max()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = Mapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of answer labels to integer points")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Mapping, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, i64>()? {
                    entries.push((key, value));
                }
                Ok(Mapping(entries))
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

/// One survey item.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Question {
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(rename = "type")]
    pub kind: QuestionType,

    /// Fallback value for binary questions without a mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Mapping>,

    /// Likert only: low answers are the desirable ones
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invert: bool,

    /// Labels shown to the user, not used for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Bare question of the given type, mostly useful for building catalogs in code.
    pub fn new(id: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            kind,
            points: None,
            mapping: None,
            invert: false,
            options: None,
        }
    }

    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }
}

/// Named group of questions.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Category {
    pub category: String,
    pub questions: Vec<Question>,
}

/// The whole survey: categories in display order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All questions, flattened in category order.
    pub fn questions(&self) -> Vec<&Question> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .collect()
    }

    /// Look up a question by id, together with the name of its category.
    pub fn find(&self, id: &str) -> Option<(&str, &Question)> {
        self.categories.iter().find_map(|c| {
            c.questions
                .iter()
                .find(|q| q.id == id)
                .map(|q| (c.category.as_str(), q))
        })
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}
