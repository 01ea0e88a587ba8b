//! Portfolio Generation — orchestrates one generation run.
//!
//! Flow: build_prompt → model call → parse blocks → inject assets →
//!       enhance CSS → package zip.
//!
//! One model call per run. A failed call is reported, never retried.

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_prompt;
use crate::llm_client::TextGenerator;
use crate::site::{create_bundle, GeneratedSite};

/// Output of a successful run: the site files plus their zip bundle.
#[derive(Debug, Clone)]
pub struct GeneratedPortfolio {
    pub site: GeneratedSite,
    pub bundle: Bytes,
}

/// Runs the full pipeline for one résumé.
pub async fn generate_portfolio(
    llm: &dyn TextGenerator,
    resume_text: &str,
) -> Result<GeneratedPortfolio, AppError> {
    let prompt = build_prompt(resume_text);
    info!("Generating portfolio from {} char prompt", prompt.len());

    let response = llm.generate(&prompt).await?;
    info!("Model replied with {} chars", response.len());

    let site = GeneratedSite::from_model_response(&response);
    let bundle = create_bundle(&site)?;
    info!("Packaged portfolio bundle ({} bytes)", bundle.len());

    Ok(GeneratedPortfolio {
        site,
        bundle: Bytes::from(bundle),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::site::bundle::tests::read_bundle;

    pub(crate) const CANNED_RESPONSE: &str = "===HTML===\n<html><head></head><body><h1>Jane</h1></body></html>\n===CSS===\nh1{color:green}\n===JS===\nconsole.log('hi')";

    /// Returns a fixed reply and records the prompts it was given.
    pub(crate) struct CannedGenerator {
        pub reply: Result<String, ()>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                reply: Err(()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_pipeline_produces_site_and_bundle() {
        let llm = CannedGenerator::replying(CANNED_RESPONSE);
        let portfolio = generate_portfolio(&llm, "Jane Doe").await.unwrap();

        assert!(portfolio.site.html.contains("href='style.css'"));
        assert!(portfolio.site.html.contains("src='script.js'"));
        assert!(portfolio.site.css.ends_with("h1{color:green}"));
        assert_eq!(portfolio.site.js, "console.log('hi')");

        let entries = read_bundle(&portfolio.bundle).unwrap();
        assert_eq!(entries[0], ("index.html".to_string(), portfolio.site.html));
        assert_eq!(entries[1], ("style.css".to_string(), portfolio.site.css));
        assert_eq!(entries[2], ("script.js".to_string(), portfolio.site.js));
    }

    #[tokio::test]
    async fn test_pipeline_sends_resume_in_prompt() {
        let llm = CannedGenerator::replying(CANNED_RESPONSE);
        generate_portfolio(&llm, "UNIQUE-RESUME-MARKER").await.unwrap();

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("UNIQUE-RESUME-MARKER"));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let llm = CannedGenerator::failing();
        let err = generate_portfolio(&llm, "Jane Doe").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }
}
