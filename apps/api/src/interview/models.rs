use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of question categories the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Technical,
    Behavioral,
    Scenario,
    Project,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Technical,
        QuestionType::Behavioral,
        QuestionType::Scenario,
        QuestionType::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Scenario => "scenario",
            QuestionType::Project => "project",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuestionType(pub String);

impl fmt::Display for UnknownQuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown question type '{}'", self.0)
    }
}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    /// Exact, case-sensitive match against the four type names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownQuestionType(s.to_string()))
    }
}

/// Difficulty labels the model is asked to attach to each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Job metadata submitted alongside a CV.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDetails {
    pub job_title: String,
    pub job_requirements: String,
    pub job_description: String,
}

/// JSON body for `POST /interview`.
#[derive(Debug, Deserialize)]
pub struct InterviewQnaRequest {
    pub cv_text: String,
    pub user_id: String,
    #[serde(flatten)]
    pub job: JobDetails,
}

/// Response body shared by every generation endpoint.
///
/// `items` is whatever JSON the model returned; field values are trusted.
#[derive(Debug, Serialize)]
pub struct InterviewQnaResponse {
    pub items: Value,
}
