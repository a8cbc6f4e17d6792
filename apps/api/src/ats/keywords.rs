//! Keyword Matcher — checks the resume text against a fixed technical keyword list.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// Technical keywords in reporting order. `missing` is truncated in this order.
pub const TECHNICAL_KEYWORDS: [&str; 13] = [
    "javascript",
    "python",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "api",
    "html",
    "css",
    "git",
    "agile",
    "scrum",
];

pub const MAX_MISSING_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Lowercased concatenation of every resume field the matcher looks at.
pub fn keyword_corpus(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![resume.personal.summary.as_str()];
    for entry in &resume.experience {
        parts.push(&entry.position);
        parts.push(&entry.description);
    }
    parts.extend(resume.skills.iter().map(String::as_str));
    for project in &resume.projects {
        parts.push(&project.name);
        parts.push(&project.description);
        parts.push(&project.technologies);
    }

    parts
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Substring match, not word-boundary: "node" matches inside "nodejs".
pub fn match_keywords(resume: &ResumeRecord) -> KeywordMatch {
    let corpus = keyword_corpus(resume);

    let (found, missing): (Vec<&str>, Vec<&str>) = TECHNICAL_KEYWORDS
        .iter()
        .copied()
        .partition(|kw| corpus.contains(*kw));

    KeywordMatch {
        found: found.into_iter().map(String::from).collect(),
        missing: missing
            .into_iter()
            .take(MAX_MISSING_KEYWORDS)
            .map(String::from)
            .collect(),
    }
}
