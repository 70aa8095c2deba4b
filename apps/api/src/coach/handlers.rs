//! Axum route handlers for the AI coaching API.
//!
//! Every handler follows the same shape: build a prompt from its template,
//! call the LLM, then recover a usable value from the raw completion before
//! handing it back to the client.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::coach::document::extract_document_text;
use crate::coach::prompts;
use crate::errors::AppError;
use crate::llm_client::recovery::{recover, RecoverMode, RecoveredValue};
use crate::state::AppState;

const DEFAULT_QUESTION_COUNT: u32 = 5;

fn default_role() -> String {
    "Software Engineer".to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: RecoveredValue,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: RecoveredValue,
}

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experiences: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_data: String,
    #[serde(default)]
    pub personal_info: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: RecoveredValue,
}

#[derive(Debug, Deserialize)]
pub struct LinkedInSummaryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct LinkedInSummaryResponse {
    pub summary: RecoveredValue,
}

/// Which turn of the mock interview the client is asking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewAction {
    #[default]
    Start,
    Feedback,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewRequest {
    #[serde(default)]
    pub action: InterviewAction,
    #[serde(default = "default_role")]
    pub job_role: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub current_question: String,
}

#[derive(Debug, Serialize)]
pub struct MockInterviewResponse {
    pub response: RecoveredValue,
}

/// Question count, tolerated as either a JSON number or a numeric string.
/// Clients have sent both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionCount {
    Number(u32),
    Text(String),
}

impl QuestionCount {
    fn resolve(&self) -> u32 {
        match self {
            QuestionCount::Number(num) => *num,
            QuestionCount::Text(text) => text.trim().parse().unwrap_or(DEFAULT_QUESTION_COUNT),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub skills: String,
    pub num: Option<QuestionCount>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: RecoveredValue,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeDocumentResponse {
    pub reply: RecoveredValue,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/advice
///
/// Generates career advice from a skills/interests profile.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let prompt = prompts::ADVICE_PROMPT_TEMPLATE
        .replace("{skills}", &request.skills)
        .replace("{interests}", &request.interests);

    let completion = state.llm.generate(&prompt).await?;
    let advice = recover(&completion, RecoverMode::Text)?;

    Ok(Json(AdviceResponse { advice }))
}

/// POST /api/v1/ai/chat
///
/// One coaching chat turn. Prior messages are folded into the prompt as a
/// context block so the model can keep the thread.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let prompt = prompts::CHAT_PROMPT_TEMPLATE
        .replace("{context}", &build_chat_context(&request.history))
        .replace("{message}", &request.message);

    let completion = state.llm.generate(&prompt).await?;
    let reply = recover(&completion, RecoverMode::Text)?;

    Ok(Json(ChatResponse { reply }))
}

/// POST /api/v1/ai/resume
///
/// Generates a structured resume. The model is instructed to reply with a
/// bare JSON object; the recovered object is returned to the client as-is.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<RecoveredValue>, AppError> {
    let prompt = prompts::RESUME_PROMPT_TEMPLATE
        .replace("{name}", &request.name)
        .replace("{email}", &request.email)
        .replace("{phone}", &request.phone)
        .replace("{summary}", &request.summary)
        .replace("{skills}", &request.skills)
        .replace("{experiences}", &request.experiences);

    let completion = state.llm.generate(&prompt).await?;
    let resume = recover(&completion, RecoverMode::Object)?;

    Ok(Json(resume))
}

/// POST /api/v1/ai/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let prompt = prompts::COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{company}", &request.company)
        .replace("{job_description}", &request.job_description)
        .replace("{personal_info}", &request.personal_info)
        .replace("{resume_data}", &request.resume_data);

    let completion = state.llm.generate(&prompt).await?;
    let cover_letter = recover(&completion, RecoverMode::Text)?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/ai/linkedin-summary
pub async fn handle_linkedin_summary(
    State(state): State<AppState>,
    Json(request): Json<LinkedInSummaryRequest>,
) -> Result<Json<LinkedInSummaryResponse>, AppError> {
    let prompt = prompts::LINKEDIN_SUMMARY_PROMPT_TEMPLATE
        .replace("{name}", &request.name)
        .replace("{summary}", &request.summary)
        .replace("{skills}", &request.skills);

    let completion = state.llm.generate(&prompt).await?;
    let summary = recover(&completion, RecoverMode::Text)?;

    Ok(Json(LinkedInSummaryResponse { summary }))
}

/// POST /api/v1/ai/mock-interview
///
/// `start` greets and asks the first question; `feedback` scores the
/// candidate's answer and asks the next one.
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    Json(request): Json<MockInterviewRequest>,
) -> Result<Json<MockInterviewResponse>, AppError> {
    let prompt = match request.action {
        InterviewAction::Start => {
            prompts::INTERVIEW_START_PROMPT_TEMPLATE.replace("{job_role}", &request.job_role)
        }
        InterviewAction::Feedback => prompts::INTERVIEW_FEEDBACK_PROMPT_TEMPLATE
            .replace("{question}", &request.current_question)
            .replace("{answer}", &request.answer)
            .replace("{job_role}", &request.job_role),
    };

    let completion = state.llm.generate(&prompt).await?;
    let response = recover(&completion, RecoverMode::Text)?;

    Ok(Json(MockInterviewResponse { response }))
}

/// POST /api/v1/ai/questions
///
/// Generates a list of interview questions, one per reply line.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let num = request
        .num
        .as_ref()
        .map(QuestionCount::resolve)
        .unwrap_or(DEFAULT_QUESTION_COUNT);

    let prompt = prompts::QUESTIONS_PROMPT_TEMPLATE
        .replace("{num}", &num.to_string())
        .replace("{role}", &request.role)
        .replace("{skills}", &request.skills);

    let completion = state.llm.generate(&prompt).await?;
    let reply = recover(&completion, RecoverMode::Text)?;
    let questions = split_questions(reply.as_text().unwrap_or_default());

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/ai/evaluate-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    let prompt = prompts::EVALUATE_ANSWER_PROMPT_TEMPLATE
        .replace("{question}", &request.question)
        .replace("{role}", &request.role)
        .replace("{skills}", &request.skills)
        .replace("{answer}", &request.answer);

    let completion = state.llm.generate(&prompt).await?;
    let feedback = recover(&completion, RecoverMode::Text)?;

    Ok(Json(EvaluateAnswerResponse { feedback }))
}

/// POST /api/v1/ai/analyze-document
///
/// Accepts a multipart `file` upload, extracts its text, and asks the model
/// for a career-coach review of the document.
pub async fn handle_analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeDocumentResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            upload = Some((file_name, content_type, data));
        }
    }

    let Some((file_name, content_type, data)) = upload else {
        return Err(AppError::Validation("no file uploaded".to_string()));
    };
    if data.is_empty() {
        return Err(AppError::Validation("no file uploaded".to_string()));
    }

    let document = extract_document_text(&file_name, &content_type, &data);
    let prompt = prompts::DOCUMENT_ANALYSIS_PROMPT_TEMPLATE.replace("{document}", &document);

    let completion = state.llm.generate(&prompt).await?;
    let reply = recover(&completion, RecoverMode::Text)?;

    Ok(Json(AnalyzeDocumentResponse { reply }))
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly helpers
// ────────────────────────────────────────────────────────────────────────────

/// Renders prior chat messages as a context block, or `""` for a fresh chat.
fn build_chat_context(history: &[ChatMessage]) -> String {
    if history.is_empty() {
        return String::new();
    }
    let mut context = String::from("Previous conversation context:\n");
    for message in history {
        let speaker = if message.sender == "user" {
            "User"
        } else {
            "Assistant"
        };
        context.push_str(speaker);
        context.push_str(": ");
        context.push_str(&message.text);
        context.push('\n');
    }
    context.push('\n');
    context
}

/// One question per non-blank line of the model's reply.
fn split_questions(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_context_empty_history() {
        assert_eq!(build_chat_context(&[]), "");
    }

    #[test]
    fn test_chat_context_prefixes_speakers() {
        let history = vec![
            ChatMessage {
                sender: "user".to_string(),
                text: "How do I switch to backend work?".to_string(),
            },
            ChatMessage {
                sender: "ai".to_string(),
                text: "Start with a small service project.".to_string(),
            },
        ];
        let context = build_chat_context(&history);
        assert!(context.starts_with("Previous conversation context:\n"));
        assert!(context.contains("User: How do I switch to backend work?\n"));
        assert!(context.contains("Assistant: Start with a small service project.\n"));
        assert!(context.ends_with("\n\n"));
    }

    #[test]
    fn test_split_questions_drops_blank_lines() {
        let reply = "What is ownership?\n\n  How does borrowing work?  \n";
        assert_eq!(
            split_questions(reply),
            vec!["What is ownership?", "How does borrowing work?"]
        );
    }

    #[test]
    fn test_question_count_accepts_number_or_string() {
        let request: QuestionsRequest =
            serde_json::from_str(r#"{"role": "SRE", "num": 3}"#).unwrap();
        assert_eq!(request.num.unwrap().resolve(), 3);

        let request: QuestionsRequest = serde_json::from_str(r#"{"num": "7"}"#).unwrap();
        assert_eq!(request.num.unwrap().resolve(), 7);

        let request: QuestionsRequest = serde_json::from_str(r#"{"num": "lots"}"#).unwrap();
        assert_eq!(request.num.unwrap().resolve(), DEFAULT_QUESTION_COUNT);
    }

    #[test]
    fn test_questions_request_defaults() {
        let request: QuestionsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.role, "Software Engineer");
        assert_eq!(request.skills, "");
        assert!(request.num.is_none());
    }

    #[test]
    fn test_mock_interview_action_defaults_to_start() {
        let request: MockInterviewRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.action, InterviewAction::Start);
        assert_eq!(request.job_role, "Software Engineer");
    }

    #[test]
    fn test_cover_letter_request_uses_camel_case_keys() {
        let request: CoverLetterRequest = serde_json::from_str(
            r#"{"jobTitle": "Platform Engineer", "company": "Acme", "personalInfo": "Jo"}"#,
        )
        .unwrap();
        assert_eq!(request.job_title, "Platform Engineer");
        assert_eq!(request.personal_info, "Jo");
        assert_eq!(request.job_description, "");
    }
}
