// All LLM prompt constants for the Generation module, plus the renderer
// that injects request fields into them.

/// ATS optimization prompt template.
/// Replace: `{resume_text}`, `{job_description}`.
pub const ATS_OPTIMIZATION_TEMPLATE: &str = r#"
You are an ATS Resume Optimization Expert.

Your task:
1. Rewrite the provided resume to be 100% ATS-friendly.
2. Use a single-column layout.
3. START with the candidate's name and contact info at the very top (Email | Phone | Location | GitHub | LinkedIn).
4. Use a clear section-based structure with markdown headers (e.g., # SECTION NAME):
   - # PROFESSIONAL SUMMARY
   - # TECHNICAL SKILLS
   - # WORK EXPERIENCE
   - # PROJECTS
   - # EDUCATION
5. For sections with bullet points (Experience, Projects), use a clear bullet symbol (•).
6. Naturally include missing job description keywords ONLY if they align with the candidate's experience.
7. Do NOT invent skills or experience.
8. Structure Work Experience as: **Job Title**, Company Name | Date Range.
9. CRITICAL: Do NOT use horizontal lines (---), emojis, or special icons. Use only standard text and # for headers.
10. Output should be clean, professional, and use clear headings so it can be perfectly formatted into a PDF.

Input:
Resume:
{resume_text}

Job Description:
{job_description}

Output:
Return only the rewritten ATS-friendly resume text.
"#;

/// Interview question prompt template.
/// Replace: `{resume_text}`, `{job_role}`.
pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"
You are an experienced technical interviewer preparing to interview a candidate.

Your task:
1. Read the candidate's resume and the target job role below.
2. Generate 5-7 interview questions tailored to this specific candidate and role.
3. Mix technical questions grounded in the candidate's listed skills with behavioral questions about their projects and work experience.
4. Keep every question to a single sentence.
5. Output one question per line, each line starting with the bullet symbol •.
6. Do NOT number the questions, do NOT add headings, and do NOT include any text other than the questions themselves.

Job Role:
{job_role}

Resume:
{resume_text}
"#;

/// Substitutes `{name}` tokens in `template` with values from `fields`.
///
/// Single pass over the template: substituted values are emitted verbatim
/// and never re-scanned, so a field containing `{other_token}` cannot
/// trigger a second substitution. Tokens with no matching field are left
/// in place.
pub fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let Some(end) = after.find('}') else {
            out.push_str(after);
            return out;
        };
        let token = &after[1..end];
        match fields.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&after[..=end]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Builds the resume-optimization prompt from the caller's validated fields.
pub fn build_ats_prompt(resume_text: &str, job_description: &str) -> String {
    render(
        ATS_OPTIMIZATION_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    )
}

/// Builds the interview-question prompt from the caller's validated fields.
pub fn build_interview_prompt(resume_text: &str, job_role: &str) -> String {
    render(
        INTERVIEW_QUESTIONS_TEMPLATE,
        &[("resume_text", resume_text), ("job_role", job_role)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_each_placeholder_exactly_once() {
        let prompt = build_ats_prompt("RESUME BODY", "JD BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
        assert_eq!(prompt.matches("RESUME BODY").count(), 1);
        assert_eq!(prompt.matches("JD BODY").count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = build_interview_prompt("resume", "Backend Engineer");
        let second = build_interview_prompt("resume", "Backend Engineer");
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_leaves_unknown_tokens_in_place() {
        let out = render("a {known} b {unknown} c", &[("known", "X")]);
        assert_eq!(out, "a X b {unknown} c");
    }

    #[test]
    fn test_render_does_not_resubstitute_field_values() {
        let out = render(
            "{resume_text} / {job_description}",
            &[
                ("resume_text", "body with {job_description} inside"),
                ("job_description", "JD"),
            ],
        );
        assert_eq!(out, "body with {job_description} inside / JD");
    }

    #[test]
    fn test_render_emits_unterminated_token_verbatim() {
        let out = render("before {broken", &[("broken", "X")]);
        assert_eq!(out, "before {broken");
    }

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert_eq!(
            ATS_OPTIMIZATION_TEMPLATE.matches("{resume_text}").count(),
            1
        );
        assert_eq!(
            ATS_OPTIMIZATION_TEMPLATE
                .matches("{job_description}")
                .count(),
            1
        );
        assert_eq!(
            INTERVIEW_QUESTIONS_TEMPLATE.matches("{resume_text}").count(),
            1
        );
        assert_eq!(
            INTERVIEW_QUESTIONS_TEMPLATE.matches("{job_role}").count(),
            1
        );
    }
}
