// Prompt templates for interview Q&A generation.
// Values are interpolated verbatim in a single pass: no escaping, no
// truncation, and braces inside a field are never re-expanded.

use crate::interview::models::{Difficulty, JobDetails, QuestionType};
use crate::llm_client::ChatPrompt;

const PERSONA: &str = "You are a senior technical recruiter and interviewer with deep industry experience.\n\
    Given the candidate's CV, job title, job requirements, and job description:\n";

const RETURN_FORMAT: &str = "Return ONLY valid JSON array like:\n\
    [{\"question\": str, \"answer\": str, \"type\": str, \"difficulty\": str}]";

/// Renders a closed set as `['a', 'b', 'c']`.
fn quoted_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names.map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn user_turn(cv_text: &str, job: &JobDetails, closing: &str) -> String {
    format!(
        "CV Text:\n{cv_text}\n\n\
         Job Title: {}\n\
         Requirements: {}\n\
         Description: {}\n\n\
         {closing}",
        job.job_title, job.job_requirements, job.job_description
    )
}

/// Builds the mixed-type prompt used by the upload and JSON endpoints.
pub fn build_interview_prompt(cv_text: &str, job: &JobDetails) -> ChatPrompt {
    let types = quoted_list(QuestionType::ALL.iter().map(|t| t.as_str()));
    let difficulties = quoted_list(Difficulty::ALL.iter().map(|d| d.as_str()));

    let system = format!(
        "{PERSONA}\
         - Generate 8–12 interview questions relevant to the job.\n\
         - Include a mix of scenario-based, behavioral, and project-specific questions.\n\
         - Each item must include:\n    \
             • 'question': A clearly phrased question\n    \
             • 'answer': A plausible answer\n    \
             • 'type': one of {types}\n    \
             • 'difficulty': one of {difficulties}\n\n\
         {RETURN_FORMAT}"
    );

    ChatPrompt {
        system,
        user: user_turn(cv_text, job, "Generate the Q&A set now."),
    }
}

/// Builds the prompt that restricts every item to one question type.
pub fn build_typed_interview_prompt(
    cv_text: &str,
    job: &JobDetails,
    question_type: QuestionType,
) -> ChatPrompt {
    let difficulties = quoted_list(Difficulty::ALL.iter().map(|d| d.as_str()));

    let system = format!(
        "{PERSONA}\
         - Generate 8–12 interview questions that are ONLY of type: {question_type}\n\
         - Each item must include:\n    \
             • 'question': A clearly phrased question\n    \
             • 'answer': A plausible answer\n    \
             • 'type': must be '{question_type}'\n    \
             • 'difficulty': one of {difficulties}\n\n\
         {RETURN_FORMAT}"
    );

    ChatPrompt {
        system,
        user: user_turn(
            cv_text,
            job,
            &format!("Generate only '{question_type}' questions."),
        ),
    }
}
