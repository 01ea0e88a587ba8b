// Prompt template for portfolio generation.

/// Portfolio prompt template. Replace `{resume_text}` before sending.
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"
You are a senior front-end developer.

Create a PROFESSIONAL portfolio website.

RULES:
- Clean layout
- Content wrapped inside containers
- No dark text on dark backgrounds
- Use semantic HTML

MUST INCLUDE:
<link rel="stylesheet" href="style.css">
<script defer src="script.js"></script>

OUTPUT FORMAT:
===HTML===
(html)

===CSS===
(css)

===JS===
(js)

RESUME:
{resume_text}
"#;

/// Embeds the résumé text verbatim. No truncation or token budgeting.
pub fn build_prompt(resume_text: &str) -> String {
    PORTFOLIO_PROMPT_TEMPLATE.replacen("{resume_text}", resume_text, 1)
}
