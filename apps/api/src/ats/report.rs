//! Aggregator — folds the rubric rows into a scorecard and the final ATS report.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::{match_keywords, KeywordMatch};
use crate::ats::rubric::{ScoreStatus, RUBRIC};
use crate::models::resume::ResumeRecord;

/// One row of the breakdown, in rubric order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub status: ScoreStatus,
    pub feedback: String,
}

/// The deterministic half of an ATS report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub overall_score: u32,
    pub breakdown: Vec<CategoryScore>,
    pub keywords: KeywordMatch,
}

/// Free-text suggestions, either from the LLM or derived from the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl Narrative {
    /// Built purely from the breakdown, so it cannot fail.
    pub fn fallback(breakdown: &[CategoryScore]) -> Self {
        Self {
            suggestions: breakdown
                .iter()
                .filter(|c| c.status != ScoreStatus::Good)
                .map(|c| c.feedback.clone())
                .collect(),
            strengths: breakdown
                .iter()
                .filter(|c| c.status == ScoreStatus::Good)
                .map(|c| c.category.clone())
                .collect(),
            weaknesses: breakdown
                .iter()
                .filter(|c| c.status == ScoreStatus::Critical)
                .map(|c| c.category.clone())
                .collect(),
        }
    }
}

/// Response body of every ATS analysis route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub overall_score: u32,
    pub breakdown: Vec<CategoryScore>,
    pub suggestions: Vec<String>,
    pub keywords: KeywordMatch,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl AtsReport {
    pub fn new(scorecard: Scorecard, narrative: Narrative) -> Self {
        Self {
            overall_score: scorecard.overall_score,
            breakdown: scorecard.breakdown,
            suggestions: narrative.suggestions,
            keywords: scorecard.keywords,
            strengths: narrative.strengths,
            weaknesses: narrative.weaknesses,
        }
    }
}

/// Runs every rubric row against the resume. Pure: same input, same scorecard.
pub fn score_resume(resume: &ResumeRecord) -> Scorecard {
    let keywords = match_keywords(resume);

    let breakdown: Vec<CategoryScore> = RUBRIC
        .iter()
        .map(|rule| {
            let score = rule.evaluate(resume, &keywords);
            let status = rule.status(score);
            CategoryScore {
                category: rule.category.label().to_string(),
                score,
                max_score: rule.max_score,
                status,
                feedback: rule.feedback_for(status).to_string(),
            }
        })
        .collect();

    Scorecard {
        overall_score: overall_percentage(&breakdown),
        breakdown,
        keywords,
    }
}

/// round(100 × Σscore / Σmax), 0 when nothing is scoreable.
pub fn overall_percentage(breakdown: &[CategoryScore]) -> u32 {
    let achieved: u32 = breakdown.iter().map(|c| c.score).sum();
    let possible: u32 = breakdown.iter().map(|c| c.max_score).sum();
    if possible == 0 {
        return 0;
    }
    ((achieved as f64 / possible as f64) * 100.0).round() as u32
}
