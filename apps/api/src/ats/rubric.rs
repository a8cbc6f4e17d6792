//! Category Scorers — the fixed-weight ATS rubric.
//!
//! Each category is one row in [`RUBRIC`]: its maximum, the per-category
//! status cutoffs, a pure scoring function and one feedback line per status.
//! The cutoffs are hardcoded per row; they are not a uniform percentage.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::keywords::KeywordMatch;
use crate::models::resume::{present, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Keywords,
}

impl Category {
    /// Display name used in the breakdown and in narrative fallbacks.
    pub fn label(self) -> &'static str {
        match self {
            Category::Contact => "Contact Information",
            Category::Summary => "Professional Summary",
            Category::Experience => "Work Experience",
            Category::Education => "Education",
            Category::Skills => "Skills Section",
            Category::Projects => "Projects",
            Category::Certifications => "Certifications",
            Category::Keywords => "ATS Keywords",
        }
    }
}

pub struct Feedback {
    pub good: &'static str,
    pub warning: &'static str,
    pub critical: &'static str,
}

/// One row of the rubric.
pub struct CategoryRule {
    pub category: Category,
    pub max_score: u32,
    pub good_cutoff: u32,
    pub warn_cutoff: u32,
    pub score: fn(&ResumeRecord, &KeywordMatch) -> u32,
    pub feedback: Feedback,
}

impl CategoryRule {
    pub fn status(&self, score: u32) -> ScoreStatus {
        if score >= self.good_cutoff {
            ScoreStatus::Good
        } else if score >= self.warn_cutoff {
            ScoreStatus::Warning
        } else {
            ScoreStatus::Critical
        }
    }

    pub fn feedback_for(&self, status: ScoreStatus) -> &'static str {
        match status {
            ScoreStatus::Good => self.feedback.good,
            ScoreStatus::Warning => self.feedback.warning,
            ScoreStatus::Critical => self.feedback.critical,
        }
    }

    /// Runs the scoring function, clamped to this row's maximum.
    pub fn evaluate(&self, resume: &ResumeRecord, keywords: &KeywordMatch) -> u32 {
        (self.score)(resume, keywords).min(self.max_score)
    }
}

pub static RUBRIC: [CategoryRule; 8] = [
    CategoryRule {
        category: Category::Contact,
        max_score: 10,
        good_cutoff: 8,
        warn_cutoff: 5,
        score: score_contact,
        feedback: Feedback {
            good: "Contact information is complete",
            warning: "Add the missing contact details such as phone, location or LinkedIn",
            critical: "Add your name, email and phone so recruiters can reach you",
        },
    },
    CategoryRule {
        category: Category::Summary,
        max_score: 15,
        good_cutoff: 12,
        warn_cutoff: 5,
        score: score_summary,
        feedback: Feedback {
            good: "Professional summary has a strong length",
            warning: "Expand your summary to 40-100 words highlighting your key strengths",
            critical: "Add a professional summary of 40-100 words",
        },
    },
    CategoryRule {
        category: Category::Experience,
        max_score: 25,
        good_cutoff: 20,
        warn_cutoff: 10,
        score: score_experience,
        feedback: Feedback {
            good: "Work experience is well documented with action verbs and results",
            warning: "Start bullets with action verbs and quantify results with numbers",
            critical: "Add work experience entries with detailed, quantified descriptions",
        },
    },
    CategoryRule {
        category: Category::Education,
        max_score: 10,
        good_cutoff: 7,
        warn_cutoff: 4,
        score: score_education,
        feedback: Feedback {
            good: "Education section is complete",
            warning: "Include your degree and field of study",
            critical: "Add your educational background",
        },
    },
    CategoryRule {
        category: Category::Skills,
        max_score: 15,
        good_cutoff: 12,
        warn_cutoff: 5,
        score: score_skills,
        feedback: Feedback {
            good: "Skills section is well populated",
            warning: "List at least 6 relevant skills",
            critical: "Add a skills section with your technical and soft skills",
        },
    },
    CategoryRule {
        category: Category::Projects,
        max_score: 10,
        good_cutoff: 7,
        warn_cutoff: 3,
        score: score_projects,
        feedback: Feedback {
            good: "Projects showcase your practical work",
            warning: "Add more projects with technologies used and links",
            critical: "Add projects to demonstrate hands-on experience",
        },
    },
    CategoryRule {
        category: Category::Certifications,
        max_score: 5,
        good_cutoff: 4,
        warn_cutoff: 2,
        score: score_certifications,
        feedback: Feedback {
            good: "Certifications strengthen your profile",
            warning: "Consider adding more relevant certifications",
            critical: "Add industry certifications to stand out",
        },
    },
    CategoryRule {
        category: Category::Keywords,
        max_score: 10,
        good_cutoff: 7,
        warn_cutoff: 4,
        score: score_keywords,
        feedback: Feedback {
            good: "Resume contains strong industry keywords",
            warning: "Include more technical keywords relevant to your target role",
            critical: "Add industry-specific keywords that ATS systems scan for",
        },
    },
];

pub const ACTION_VERBS: [&str; 15] = [
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "launched",
    "delivered",
    "optimized",
    "streamlined",
];

fn quantified_result_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\d+\s*%|\$\s*\d+|\d+\+?\s*(users|customers|projects|team|revenue)")
            .expect("quantified result pattern is valid")
    })
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn score_contact(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    let p = &resume.personal;
    [
        (&p.name, 2u32),
        (&p.email, 3),
        (&p.phone, 2),
        (&p.location, 1),
        (&p.linkedin, 2),
    ]
    .into_iter()
    .filter(|(field, _)| present(field))
    .map(|(_, points)| points)
    .sum()
}

fn score_summary(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    match word_count(&resume.personal.summary) {
        0 => 0,
        n if n < 20 => 5,
        n if n < 40 => 10,
        n if n <= 100 => 15,
        _ => 12,
    }
}

fn score_experience(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    let filled: Vec<_> = resume.filled_experience().collect();
    let mut score = filled.len().min(3) as u32 * 5;

    let descriptions: Vec<String> = filled
        .iter()
        .map(|e| e.description.to_lowercase())
        .collect();

    if descriptions
        .iter()
        .any(|d| ACTION_VERBS.iter().any(|verb| d.contains(verb)))
    {
        score += 5;
    }

    if descriptions
        .iter()
        .any(|d| quantified_result_pattern().is_match(d))
    {
        score += 5;
    }

    score
}

fn score_education(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    let filled: Vec<_> = resume.filled_education().collect();
    if filled.is_empty() {
        return 0;
    }
    let mut score = 5;
    if filled.iter().any(|e| present(&e.degree)) {
        score += 2;
    }
    if filled.iter().any(|e| present(&e.field)) {
        score += 2;
    }
    if filled.iter().any(|e| present(&e.gpa)) {
        score += 1;
    }
    score
}

fn score_skills(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    match resume.listed_skills().count() {
        0 => 0,
        n if n < 3 => 5,
        n if n < 6 => 10,
        n if n <= 15 => 15,
        _ => 12,
    }
}

fn score_projects(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    let filled: Vec<_> = resume.filled_projects().collect();
    let mut score = 0;
    if !filled.is_empty() {
        score += 3;
    }
    if filled.len() >= 2 {
        score += 3;
    }
    if filled.iter().any(|p| present(&p.technologies)) {
        score += 2;
    }
    if filled.iter().any(|p| present(&p.link)) {
        score += 2;
    }
    score
}

fn score_certifications(resume: &ResumeRecord, _: &KeywordMatch) -> u32 {
    resume.filled_certifications().count() as u32 * 2
}

fn score_keywords(_: &ResumeRecord, keywords: &KeywordMatch) -> u32 {
    // floor(1.5 * n) in integer arithmetic
    (keywords.found.len() as u32 * 3) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::keywords::match_keywords;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    };

    fn rule(category: Category) -> &'static CategoryRule {
        RUBRIC.iter().find(|r| r.category == category).unwrap()
    }

    fn eval(category: Category, resume: &ResumeRecord) -> u32 {
        rule(category).evaluate(resume, &match_keywords(resume))
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn experience(description: &str) -> ExperienceEntry {
        ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rubric_order_and_total_max() {
        let order: Vec<Category> = RUBRIC.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Contact,
                Category::Summary,
                Category::Experience,
                Category::Education,
                Category::Skills,
                Category::Projects,
                Category::Certifications,
                Category::Keywords,
            ]
        );
        assert_eq!(RUBRIC.iter().map(|r| r.max_score).sum::<u32>(), 100);
    }

    #[test]
    fn test_cutoffs_are_hardcoded_per_category() {
        let cutoffs: Vec<(u32, u32)> = RUBRIC
            .iter()
            .map(|r| (r.good_cutoff, r.warn_cutoff))
            .collect();
        assert_eq!(
            cutoffs,
            vec![(8, 5), (12, 5), (20, 10), (7, 4), (12, 5), (7, 3), (4, 2), (7, 4)]
        );
    }

    #[test]
    fn test_status_boundaries() {
        let exp = rule(Category::Experience);
        assert_eq!(exp.status(25), ScoreStatus::Good);
        assert_eq!(exp.status(20), ScoreStatus::Good);
        assert_eq!(exp.status(19), ScoreStatus::Warning);
        assert_eq!(exp.status(10), ScoreStatus::Warning);
        assert_eq!(exp.status(9), ScoreStatus::Critical);
        assert_eq!(exp.status(0), ScoreStatus::Critical);
    }

    #[test]
    fn test_contact_points() {
        let mut resume = ResumeRecord::default();
        assert_eq!(eval(Category::Contact, &resume), 0);
        resume.personal.email = "a@b.com".to_string();
        assert_eq!(eval(Category::Contact, &resume), 3);
        resume.personal.name = "Ada".to_string();
        resume.personal.phone = "555".to_string();
        resume.personal.location = "London".to_string();
        resume.personal.linkedin = "linkedin.com/in/ada".to_string();
        assert_eq!(eval(Category::Contact, &resume), 10);
    }

    #[test]
    fn test_summary_word_count_branches() {
        let mut resume = ResumeRecord::default();
        for (n, expected) in [(0, 0), (19, 5), (20, 10), (39, 10), (40, 15), (100, 15), (101, 12)] {
            resume.personal.summary = words(n);
            assert_eq!(eval(Category::Summary, &resume), expected, "{n} words");
        }
    }

    #[test]
    fn test_summary_over_one_hundred_words_scores_twelve() {
        let mut resume = ResumeRecord::default();
        resume.personal.summary = words(110);
        assert_eq!(eval(Category::Summary, &resume), 12);
    }

    #[test]
    fn test_experience_count_caps_at_three_entries() {
        let resume = ResumeRecord {
            experience: vec![experience(""); 5],
            ..Default::default()
        };
        assert_eq!(eval(Category::Experience, &resume), 15);
    }

    #[test]
    fn test_experience_unfilled_entries_ignored() {
        let resume = ResumeRecord {
            experience: vec![ExperienceEntry {
                description: "Led a team that increased revenue by 20%".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(eval(Category::Experience, &resume), 0);
    }

    #[test]
    fn test_experience_verb_and_quantified_bonuses() {
        let resume = ResumeRecord {
            experience: vec![experience("Led migration"), experience("Served 500 users")],
            ..Default::default()
        };
        assert_eq!(eval(Category::Experience, &resume), 20);

        let maxed = ResumeRecord {
            experience: vec![
                experience("Led a team and increased revenue by 20%"),
                experience(""),
                experience(""),
            ],
            ..Default::default()
        };
        assert_eq!(eval(Category::Experience, &maxed), 25);
    }

    #[test]
    fn test_quantified_pattern_variants() {
        let pattern = quantified_result_pattern();
        assert!(pattern.is_match("cut costs by 30 %"));
        assert!(pattern.is_match("saved $2M"));
        assert!(pattern.is_match("onboarded 50+ customers"));
        assert!(pattern.is_match("shipped 12 Projects"));
        assert!(!pattern.is_match("worked on many things"));
    }

    #[test]
    fn test_education_points() {
        let resume = ResumeRecord {
            education: vec![EducationEntry {
                school: "MIT".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                gpa: "3.9".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(eval(Category::Education, &resume), 10);

        let school_only = ResumeRecord {
            education: vec![EducationEntry {
                school: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(eval(Category::Education, &school_only), 5);
    }

    #[test]
    fn test_skills_count_branches() {
        let mut resume = ResumeRecord::default();
        for (n, expected) in [(0, 0), (2, 5), (3, 10), (5, 10), (6, 15), (15, 15), (16, 12)] {
            resume.skills = (0..n).map(|i| format!("skill{i}")).collect();
            assert_eq!(eval(Category::Skills, &resume), expected, "{n} skills");
        }
    }

    #[test]
    fn test_projects_points() {
        let project = ProjectEntry {
            name: "Compiler".to_string(),
            technologies: "Rust".to_string(),
            link: "https://example.com".to_string(),
            ..Default::default()
        };
        let one = ResumeRecord {
            projects: vec![project.clone()],
            ..Default::default()
        };
        assert_eq!(eval(Category::Projects, &one), 7);

        let two = ResumeRecord {
            projects: vec![project.clone(), project],
            ..Default::default()
        };
        assert_eq!(eval(Category::Projects, &two), 10);
    }

    #[test]
    fn test_certifications_capped_at_five() {
        let cert = CertificationEntry {
            name: "AWS SA".to_string(),
            ..Default::default()
        };
        let mut resume = ResumeRecord::default();
        for (n, expected) in [(0, 0), (1, 2), (2, 4), (3, 5), (6, 5)] {
            resume.certifications = vec![cert.clone(); n];
            assert_eq!(eval(Category::Certifications, &resume), expected, "{n} certs");
        }
    }

    #[test]
    fn test_keyword_points_floor_and_cap() {
        let kw = |n: usize| KeywordMatch {
            found: vec!["x".to_string(); n],
            missing: vec![],
        };
        let keywords = rule(Category::Keywords);
        let empty = ResumeRecord::default();
        assert_eq!(keywords.evaluate(&empty, &kw(0)), 0);
        assert_eq!(keywords.evaluate(&empty, &kw(1)), 1);
        assert_eq!(keywords.evaluate(&empty, &kw(3)), 4);
        assert_eq!(keywords.evaluate(&empty, &kw(6)), 9);
        assert_eq!(keywords.evaluate(&empty, &kw(7)), 10);
        assert_eq!(keywords.evaluate(&empty, &kw(13)), 10);
    }
}
