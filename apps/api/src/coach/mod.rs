// AI coaching endpoints: advice, chat, resume and cover letter generation,
// interview practice, document analysis.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod document;
pub mod handlers;
pub mod prompts;
