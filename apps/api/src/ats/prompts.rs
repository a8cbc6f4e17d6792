// LLM prompt templates for the ATS analysis.

/// Persona half of the narrative system prompt; `JSON_ONLY_SYSTEM` is appended at call time.
pub const NARRATIVE_SYSTEM_PERSONA: &str = "You are an expert ATS (Applicant Tracking System) \
    analyst and career coach. You review resumes and give specific, actionable advice.";

/// Narrative prompt template.
/// Replace: {name}, {summary}, {experience_count}, {experience_samples},
///          {education_count}, {skills}, {project_count}, {overall_score}
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS compatibility and provide feedback.

Resume:
- Name: {name}
- Summary: {summary}
- Experience: {experience_count} positions ({experience_samples})
- Education: {education_count} entries
- Skills: {skills}
- Projects: {project_count} projects

The rubric-based ATS score is {overall_score}/100.

Return a JSON object with this EXACT schema:
{
  "suggestions": ["specific improvement suggestion 1", "suggestion 2", "suggestion 3"],
  "strengths": ["strength 1", "strength 2"],
  "weaknesses": ["weakness 1", "weakness 2"]
}

Give 3-5 suggestions. Refer to the resume's actual content, not generic advice."#;
