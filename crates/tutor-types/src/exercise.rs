use serde::{Deserialize, Serialize};

/// Exercise difficulty, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

/// A progressive hint attached to an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub level: i64,
    pub text: String,
}

/// The schema object embedded inside an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRef {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub db_name: String,
}

/// One entry of the `/schemas/` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercise_count: i64,
}

/// A SQL exercise. Immutable once fetched; identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub initial_query: String,
    #[serde(default)]
    pub hints: Vec<Hint>,
    pub schema: SchemaRef,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Optional filter parameters for the `/exercises/` listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseFilter {
    pub schema: Option<i64>,
    pub difficulty: Option<Difficulty>,
    pub tag: Option<String>,
}

impl ExerciseFilter {
    pub fn is_empty(&self) -> bool {
        self.schema.is_none() && self.difficulty.is_none() && self.tag.is_none()
    }

    /// Query-string pairs in the form the backend expects.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(schema) = self.schema {
            pairs.push(("schema", schema.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(ref tag) = self.tag {
            pairs.push(("tag", tag.clone()));
        }
        pairs
    }
}
