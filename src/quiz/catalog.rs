//! Quiz catalog lookups and random draws.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::data;
use super::types::{CategoryInfo, QuizCategory, QuizItem};

/// Error returned for catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownCategory(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownCategory(id) => {
                write!(f, "no quiz data for category \"{}\"", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Returns the IDs of all built-in categories.
pub fn all_categories() -> Vec<&'static str> {
    vec!["brand_names", "diabetes", "anticoagulants"]
}

/// Looks up a category by ID. Unknown IDs are a lookup error, not a
/// silent fallback.
pub fn get_category(id: &str) -> Result<QuizCategory, CatalogError> {
    match id {
        "brand_names" => Ok(data::brand_names()),
        "diabetes" => Ok(data::diabetes()),
        "anticoagulants" => Ok(data::anticoagulants()),
        other => Err(CatalogError::UnknownCategory(other.to_string())),
    }
}

/// Returns summary info for one category.
pub fn category_info(id: &str) -> Result<CategoryInfo, CatalogError> {
    let category = get_category(id)?;
    Ok(CategoryInfo {
        id: category.id,
        name: category.name,
        description: category.description,
        quiz_count: category.quizzes.len(),
    })
}

/// Draws `count` distinct questions from a category, uniformly at random.
///
/// Sampling is without replacement within one draw. Asking for more
/// questions than the category holds returns every question, shuffled.
pub fn draw_random(
    id: &str,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<QuizItem>, CatalogError> {
    let category = get_category(id)?;
    Ok(draw_from_pool(category.quizzes, count, rng))
}

/// Shuffle-and-take draw over an already-loaded pool (custom packs).
pub fn draw_from_pool(mut pool: Vec<QuizItem>, count: usize, rng: &mut impl Rng) -> Vec<QuizItem> {
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Loads a custom question pack from a JSON file.
///
/// The file holds a serialized `QuizCategory`. Malformed questions are
/// rejected so a bad pack can never produce an unanswerable battle.
pub fn load_category_from_file(path: &Path) -> io::Result<QuizCategory> {
    let json = fs::read_to_string(path)?;
    let category: QuizCategory = serde_json::from_str(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if category.quizzes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("question pack \"{}\" contains no questions", category.id),
        ));
    }
    if let Some(bad) = category.quizzes.iter().find(|q| !q.is_well_formed()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("malformed question in pack \"{}\": {}", category.id, bad.prompt),
        ));
    }

    Ok(category)
}
