//! Configured answer checks
//!
//! A bad answer is reported, never rejected: the game still starts with it.

use super::collaborators::Dictionary;
use crate::core::{Answer, WORD_SIZE};
use std::fmt;

/// Something wrong with the configured answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerIssue {
    WrongLength { expected: usize, actual: usize },
    NotUppercase,
    NotInDictionary,
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "answer must have {expected} characters, got {actual}")
            }
            Self::NotUppercase => write!(f, "answer must be uppercase letters"),
            Self::NotInDictionary => write!(f, "answer must be a valid word"),
        }
    }
}

impl std::error::Error for AnswerIssue {}

/// Every problem with `answer`, in check order; empty if it is fine
#[must_use]
pub fn validate_answer<D: Dictionary + ?Sized>(answer: &Answer, dictionary: &D) -> Vec<AnswerIssue> {
    let mut issues = Vec::new();
    let actual = answer.text().chars().count();

    if actual != WORD_SIZE {
        issues.push(AnswerIssue::WrongLength {
            expected: WORD_SIZE,
            actual,
        });
    }
    if !answer.text().chars().all(|c| c.is_ascii_uppercase()) {
        issues.push(AnswerIssue::NotUppercase);
    }
    if !dictionary.is_valid_word(answer.text()) {
        issues.push(AnswerIssue::NotInDictionary);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(word: &str) -> bool {
        ["TESTS", "ZESTY"].contains(&word.to_ascii_uppercase().as_str())
    }

    #[test]
    fn valid_answer_has_no_issues() {
        assert!(validate_answer(&Answer::new("TESTS"), &dictionary).is_empty());
    }

    #[test]
    fn short_answer() {
        let issues = validate_answer(&Answer::new("FLY"), &dictionary);
        assert_eq!(
            issues,
            vec![
                AnswerIssue::WrongLength {
                    expected: 5,
                    actual: 3
                },
                AnswerIssue::NotInDictionary,
            ]
        );
    }

    #[test]
    fn lowercase_answer() {
        let issues = validate_answer(&Answer::new("zesty"), &dictionary);
        assert_eq!(issues, vec![AnswerIssue::NotUppercase]);
    }

    #[test]
    fn unknown_answer() {
        let issues = validate_answer(&Answer::new("QWERT"), &dictionary);
        assert_eq!(issues, vec![AnswerIssue::NotInDictionary]);
    }

    #[test]
    fn issue_messages() {
        let issue = AnswerIssue::WrongLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(issue.to_string(), "answer must have 5 characters, got 3");
    }
}
