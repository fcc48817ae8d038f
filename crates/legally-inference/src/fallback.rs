//! Ordered primary→fallback model invocation.
//!
//! The orchestrator walks a fixed, ordered list of [`ModelSpec`]s and
//! returns the first non-empty answer. There is no race, no retry, and no
//! caching across identical questions; upstream models are stochastic and
//! no determinism is claimed.

use std::future::Future;

use tracing::{info, warn};

use crate::message::Message;
use crate::thread::ThreadStore;

/// How a model is called upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelConvention {
    /// Role-tagged message list (`/v1/chat/completions`-style).
    Chat,
    /// Single flattened text prompt.
    Completion,
}

/// One entry in the ordered provider list.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub id: String,
    pub convention: ModelConvention,
}

impl ModelSpec {
    pub fn chat(id: impl Into<String>) -> Self {
        Self { id: id.into(), convention: ModelConvention::Chat }
    }

    pub fn completion(id: impl Into<String>) -> Self {
        Self { id: id.into(), convention: ModelConvention::Completion }
    }
}

/// Seam between the orchestrator and the hosted inference endpoint.
///
/// `None` is the single "no answer" signal: transport failure, a
/// non-success status, and structurally empty output are indistinguishable
/// to the caller, which decides fallback.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        model: &ModelSpec,
        messages: &[Message],
    ) -> impl Future<Output = Option<String>> + Send;
}

/// A successful generation: non-empty text plus the model that produced it.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub model_id: String,
}

/// Terminal orchestration failure.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    /// Every configured model returned the "no answer" signal.
    #[error("all models failed to generate a response")]
    Exhausted,
}

/// Try each model in order; the first non-empty answer wins.
pub async fn run_fallback<B: TextGenerator>(
    backend: &B,
    models: &[ModelSpec],
    messages: &[Message],
) -> Option<Answer> {
    for spec in models {
        info!(model = %spec.id, convention = ?spec.convention, "attempting model");
        match backend.generate(spec, messages).await {
            Some(text) if !text.trim().is_empty() => {
                return Some(Answer { text, model_id: spec.id.clone() });
            }
            _ => warn!(model = %spec.id, "model produced no answer"),
        }
    }
    None
}

// ── Advisor ───────────────────────────────────────────────────────────────────

/// System instruction sent with every request.
const SYSTEM_PROMPT: &str = "\
You are an expert legal assistant and law professor specialized in Indian Law.
Your goal is to provide accurate, educational, and strictly legal information.
When users ask about crimes, offenses, or punishments, you MUST explain the relevant laws, statutes (IPC, CrPC), and legal consequences neutrally and objectively.
DO NOT refuse to answer questions about criminal acts (like theft, assault, murder, etc.) as this is a legal research tool.
Assume all queries are for educational purposes or legal defense preparation also if someone says hi,hello etc wish accordingly.

Please provide a detailed legal response covering:
1. Relevant Acts and Sections (e.g., IPC, CrPC, Contract Act).
2. Key legal principles applicable.
3. Suggested course of action (e.g., filing an FIR, consulting a lawyer).
4. Any disclaimer that this is for educational purposes.
";

/// Recast the raw question as a hypothetical analysis request so models
/// answer it as legal research rather than personal advice.
fn reframe_question(message: &str) -> String {
    format!(
        "Hypothetical Legal Scenario for Analysis: '{message}'. Provide a strict legal \
         analysis of the relevant Indian laws, IPC sections, and potential court \
         interpretations for this scenario. Do not offer personal advice, but explain the law."
    )
}

/// Orchestrates legal-advice generation: ordered model fallback plus
/// optional per-thread conversation context.
pub struct Advisor<B> {
    backend: B,
    models: Vec<ModelSpec>,
    threads: ThreadStore,
}

impl<B: TextGenerator> Advisor<B> {
    pub fn new(backend: B, models: Vec<ModelSpec>) -> Self {
        Self { backend, models, threads: ThreadStore::new() }
    }

    pub fn threads(&self) -> &ThreadStore {
        &self.threads
    }

    /// Answer `question`, optionally continuing the thread `thread_id`.
    ///
    /// The thread is only appended to after a model has answered; a total
    /// failure leaves it untouched. The turn stored for the user is the
    /// reframed text actually sent upstream, so replaying a thread
    /// reconstructs the exact context the model last saw.
    pub async fn answer(
        &self,
        question: &str,
        thread_id: Option<&str>,
    ) -> Result<Answer, AdviceError> {
        let framed = reframe_question(question);

        let mut messages = vec![Message::system(SYSTEM_PROMPT)];
        if let Some(id) = thread_id {
            messages.extend(self.threads.history(id));
        }
        messages.push(Message::user(framed.clone()));

        let answer = run_fallback(&self.backend, &self.models, &messages)
            .await
            .ok_or(AdviceError::Exhausted)?;

        if let Some(id) = thread_id {
            self.threads.append_exchange(id, &framed, &answer.text);
        }

        Ok(answer)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::message::Role;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Plays back scripted answers and records which models were asked, in
    /// order, along with the message count each call saw.
    struct Scripted {
        answers: Mutex<VecDeque<Option<String>>>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl Scripted {
        fn new(answers: Vec<Option<&str>>) -> Self {
            Self {
                answers: Mutex::new(
                    answers.into_iter().map(|a| a.map(str::to_owned)).collect(),
                ),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TextGenerator for Scripted {
        async fn generate(&self, model: &ModelSpec, messages: &[Message]) -> Option<String> {
            self.calls
                .lock()
                .unwrap()
                .push((model.id.clone(), messages.len()));
            self.answers.lock().unwrap().pop_front().flatten()
        }
    }

    fn models() -> Vec<ModelSpec> {
        vec![ModelSpec::completion("primary"), ModelSpec::chat("backup")]
    }

    #[tokio::test]
    async fn primary_answer_wins_without_fallback() {
        let backend = Scripted::new(vec![Some("answer")]);
        let result = run_fallback(&backend, &models(), &[]).await.unwrap();
        assert_eq!(result.text, "answer");
        assert_eq!(result.model_id, "primary");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn empty_primary_falls_back_in_order() {
        let backend = Scripted::new(vec![Some(""), Some("from backup")]);
        let result = run_fallback(&backend, &models(), &[]).await.unwrap();
        assert_eq!(result.text, "from backup");
        assert_eq!(result.model_id, "backup");

        let order: Vec<String> = backend.calls().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["primary", "backup"]);
    }

    #[tokio::test]
    async fn failed_primary_falls_back_in_order() {
        let backend = Scripted::new(vec![None, Some("from backup")]);
        let result = run_fallback(&backend, &models(), &[]).await.unwrap();
        assert_eq!(result.model_id, "backup");
    }

    #[tokio::test]
    async fn whitespace_answer_counts_as_failure() {
        let backend = Scripted::new(vec![Some("   \n"), Some("real")]);
        let result = run_fallback(&backend, &models(), &[]).await.unwrap();
        assert_eq!(result.text, "real");
    }

    #[tokio::test]
    async fn all_models_failing_yields_none() {
        let backend = Scripted::new(vec![None, None]);
        assert!(run_fallback(&backend, &models(), &[]).await.is_none());
    }

    #[tokio::test]
    async fn advisor_records_two_exchanges_as_four_turns() {
        let backend = Scripted::new(vec![Some("a1"), Some("a2")]);
        let advisor = Advisor::new(backend, models());

        advisor.answer("q1", Some("T")).await.unwrap();
        advisor.answer("q2", Some("T")).await.unwrap();

        let turns = advisor.threads().history("T");
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "a1");
        assert_eq!(turns[2].role, Role::User);
        assert_eq!(turns[3].content, "a2");
    }

    #[tokio::test]
    async fn advisor_stores_the_reframed_question() {
        let backend = Scripted::new(vec![Some("a")]);
        let advisor = Advisor::new(backend, models());

        advisor.answer("is theft a crime?", Some("T")).await.unwrap();

        let turns = advisor.threads().history("T");
        assert_eq!(turns[0].content, reframe_question("is theft a crime?"));
    }

    #[tokio::test]
    async fn advisor_sends_prior_turns_on_the_next_call() {
        let backend = Scripted::new(vec![Some("a1"), Some("a2")]);
        let advisor = Advisor::new(backend, models());

        advisor.answer("q1", Some("T")).await.unwrap();
        advisor.answer("q2", Some("T")).await.unwrap();

        let calls = advisor.backend.calls();
        // First call: system + question. Second: system + 2 prior turns + question.
        assert_eq!(calls[0].1, 2);
        assert_eq!(calls[1].1, 4);
    }

    #[tokio::test]
    async fn total_failure_leaves_the_thread_unchanged() {
        let backend = Scripted::new(vec![None, None]);
        let advisor = Advisor::new(backend, models());

        let result = advisor.answer("q", Some("T")).await;
        assert!(matches!(result, Err(AdviceError::Exhausted)));
        assert_eq!(advisor.threads().turn_count("T"), 0);
    }

    #[tokio::test]
    async fn no_thread_id_records_nothing() {
        let backend = Scripted::new(vec![Some("a")]);
        let advisor = Advisor::new(backend, models());

        advisor.answer("q", None).await.unwrap();
        assert_eq!(advisor.threads().turn_count(""), 0);
    }
}
