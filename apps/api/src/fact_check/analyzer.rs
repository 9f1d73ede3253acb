//! Claim Analyzer: classify, select a format, generate, stamp identity.
//!
//! Flow: classify → get_format → remote generator (if configured) →
//!       template generator on any failure → FactCheckResult.
//!
//! `analyze` is infallible: the template generator always produces a result.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::fact_check::formats::get_format;
use crate::fact_check::generator::{Analysis, ClaimGenerator, GenerationInput};
use crate::fact_check::result::{new_result_id, new_session_id, FactCheckRequest, FactCheckResult};
use crate::fact_check::templates::{self, TemplateGenerator};
use crate::fact_check::topics::classify;

pub struct ClaimAnalyzer {
    remote: Option<Arc<dyn ClaimGenerator>>,
}

impl ClaimAnalyzer {
    /// `remote` is tried first on every call; `None` means template-only.
    pub fn new(remote: Option<Arc<dyn ClaimGenerator>>) -> Self {
        Self { remote }
    }

    pub fn template_only() -> Self {
        Self { remote: None }
    }

    pub async fn analyze(&self, request: &FactCheckRequest) -> FactCheckResult {
        let topic = classify(&request.claim);
        let input = GenerationInput {
            claim: &request.claim,
            topic,
            format: get_format(topic),
            additional_context: request.additional_context.as_deref(),
        };
        info!("Analyzing claim: topic={:?}", topic);

        let analysis = self.generate(&input).await;

        let session_id = request
            .session_id
            .clone()
            .unwrap_or_else(new_session_id);
        analysis.into_result(new_result_id(), request.claim.clone(), session_id, Utc::now())
    }

    async fn generate(&self, input: &GenerationInput<'_>) -> Analysis {
        if let Some(remote) = &self.remote {
            match remote.generate(input).await {
                Ok(analysis) => return analysis,
                Err(e) => warn!(
                    "{} generator failed, falling back to templates: {}",
                    remote.name(),
                    e
                ),
            }
        }

        TemplateGenerator
            .generate(input)
            .await
            .unwrap_or_else(|_| templates::render(input.claim, input.topic, Utc::now().date_naive()))
    }
}
