//! Narrative Augmenter — asks the LLM for suggestions, strengths and weaknesses.
//!
//! `AppState` holds an `Arc<dyn NarrativeSource>`; `LlmNarrator` is the
//! production backend. Whatever the backend does, [`analyze`] always returns
//! a report: any failure is replaced by [`Narrative::fallback`].

use async_trait::async_trait;
use tracing::{info, warn};

use crate::ats::prompts::{NARRATIVE_PROMPT_TEMPLATE, NARRATIVE_SYSTEM_PERSONA};
use crate::ats::report::{score_resume, AtsReport, Narrative, Scorecard};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{present, ResumeRecord};

const SUMMARY_PROMPT_CHARS: usize = 500;
const EXPERIENCE_SAMPLES: usize = 3;
const SKILLS_IN_PROMPT: usize = 15;

/// Source of free-text narrative for a scored resume.
#[async_trait]
pub trait NarrativeSource: Send + Sync {
    async fn narrate(
        &self,
        resume: &ResumeRecord,
        scorecard: &Scorecard,
    ) -> Result<Narrative, LlmError>;
}

pub struct LlmNarrator(pub LlmClient);

#[async_trait]
impl NarrativeSource for LlmNarrator {
    async fn narrate(
        &self,
        resume: &ResumeRecord,
        scorecard: &Scorecard,
    ) -> Result<Narrative, LlmError> {
        let prompt = build_narrative_prompt(resume, scorecard.overall_score);
        let system = format!("{NARRATIVE_SYSTEM_PERSONA} {JSON_ONLY_SYSTEM}");
        self.0.call_json::<Narrative>(&prompt, &system).await
    }
}

/// Scores the resume, then makes one narrative call. Never fails.
pub async fn analyze(resume: &ResumeRecord, narrator: &dyn NarrativeSource) -> AtsReport {
    let scorecard = score_resume(resume);
    info!(
        overall_score = scorecard.overall_score,
        keywords_found = scorecard.keywords.found.len(),
        "Resume scored"
    );

    let narrative = match narrator.narrate(resume, &scorecard).await {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!("Narrative generation failed, using rubric fallback: {e}");
            Narrative::fallback(&scorecard.breakdown)
        }
    };

    AtsReport::new(scorecard, narrative)
}

pub fn build_narrative_prompt(resume: &ResumeRecord, overall_score: u32) -> String {
    let experience: Vec<_> = resume.filled_experience().collect();
    let samples: Vec<String> = experience
        .iter()
        .take(EXPERIENCE_SAMPLES)
        .map(|e| match (present(&e.position), present(&e.company)) {
            (true, true) => format!("{} at {}", e.position.trim(), e.company.trim()),
            (true, false) => e.position.trim().to_string(),
            _ => e.company.trim().to_string(),
        })
        .collect();
    let skills: Vec<&str> = resume.listed_skills().take(SKILLS_IN_PROMPT).collect();

    NARRATIVE_PROMPT_TEMPLATE
        .replace("{name}", or_placeholder(&resume.personal.name))
        .replace(
            "{summary}",
            or_placeholder(truncate_chars(&resume.personal.summary, SUMMARY_PROMPT_CHARS)),
        )
        .replace("{experience_count}", &experience.len().to_string())
        .replace("{experience_samples}", or_placeholder(&samples.join("; ")))
        .replace(
            "{education_count}",
            &resume.filled_education().count().to_string(),
        )
        .replace("{skills}", or_placeholder(&skills.join(", ")))
        .replace(
            "{project_count}",
            &resume.filled_projects().count().to_string(),
        )
        .replace("{overall_score}", &overall_score.to_string())
}

fn or_placeholder(value: &str) -> &str {
    if present(value) {
        value.trim()
    } else {
        "Not provided"
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
