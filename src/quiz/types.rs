use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// `options` always contains `correct_answer` exactly once; the catalog
/// validates this when loading custom packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuizItem {
    pub fn new(prompt: &str, correct_answer: &str, options: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            correct_answer: correct_answer.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// Checks the structural invariants: at least two options, and the
    /// correct answer appears among them exactly once.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2
            && self
                .options
                .iter()
                .filter(|o| **o == self.correct_answer)
                .count()
                == 1
    }
}

/// A named collection of quiz questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quizzes: Vec<QuizItem>,
}

/// Summary row for category listings (map screen details pane).
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quiz_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_item_correctness_check() {
        let quiz = QuizItem::new(
            "What is the generic name of Tylenol?",
            "acetaminophen",
            &["acetaminophen", "ibuprofen", "naproxen", "aspirin"],
        );
        assert!(quiz.is_correct("acetaminophen"));
        assert!(!quiz.is_correct("ibuprofen"));
        assert!(!quiz.is_correct("Acetaminophen")); // exact match only
    }

    #[test]
    fn test_quiz_item_well_formed() {
        let quiz = QuizItem::new("Q?", "a", &["a", "b", "c"]);
        assert!(quiz.is_well_formed());
    }

    #[test]
    fn test_quiz_item_missing_answer_not_well_formed() {
        let quiz = QuizItem::new("Q?", "z", &["a", "b"]);
        assert!(!quiz.is_well_formed());
    }

    #[test]
    fn test_quiz_item_duplicate_answer_not_well_formed() {
        let quiz = QuizItem::new("Q?", "a", &["a", "a", "b"]);
        assert!(!quiz.is_well_formed());
    }

    #[test]
    fn test_quiz_item_single_option_not_well_formed() {
        let quiz = QuizItem::new("Q?", "a", &["a"]);
        assert!(!quiz.is_well_formed());
    }
}
