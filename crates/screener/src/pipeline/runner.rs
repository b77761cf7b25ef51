use std::path::Path;

use tracing::{debug, info_span};

use crate::candidate::CandidateRecord;
use crate::config::Requirements;
use crate::contact::{extract_contact, FirstLineNameExtractor, NameExtractor};
use crate::processor::ProcessorRegistry;
use crate::sanitize;
use crate::scoring::{self, Status};

use super::context::ScreeningContext;
use super::error::PipelineError;

pub struct ScreeningPipeline {
    processor: ProcessorRegistry,
    names: Box<dyn NameExtractor>,
}

impl ScreeningPipeline {
    pub fn new() -> Self {
        Self::with_name_extractor(Box::new(FirstLineNameExtractor))
    }

    pub fn with_name_extractor(names: Box<dyn NameExtractor>) -> Self {
        Self {
            processor: ProcessorRegistry::new(),
            names,
        }
    }

    /// Scores one stored document against `requirements`.
    ///
    /// The document must already be saved and its extension validated; the
    /// caller persists the returned record.
    pub fn run(
        &self,
        path: &Path,
        requirements: &Requirements,
    ) -> Result<CandidateRecord, PipelineError> {
        let filename = sanitize::redact_path(path);
        let _pipeline_span = info_span!("pipeline",
            filename = %filename,
            search_mode = %requirements.search_mode,
        )
        .entered();

        let mut ctx = ScreeningContext::new(path);

        // Step 1: Extract text
        {
            let _step = info_span!("extract_text").entered();
            self.step_extract_text(&mut ctx)?;
        }

        // Step 2: Contact details and name
        {
            let _step = info_span!("extract_contact").entered();
            self.step_extract_contact(&mut ctx)?;
        }

        // Step 3: Structure and content scores
        {
            let _step = info_span!("score").entered();
            self.step_score(&mut ctx, requirements)?;
        }

        // Step 4: Weighted score and verdict
        {
            let _step = info_span!("decide").entered();
            self.step_decide(&mut ctx, requirements)?;
        }

        let record = ctx.into_record(requirements.threshold)?;

        debug!(
            "Scored {} -> content {} structure {} final {} ({})",
            filename,
            record.content_score,
            record.structure_score,
            record.final_score,
            record.status
        );

        Ok(record)
    }

    pub fn step_extract_text(&self, ctx: &mut ScreeningContext) -> Result<(), PipelineError> {
        let extracted = self.processor.extract(&ctx.document_path)?;
        ctx.extracted = Some(extracted);
        Ok(())
    }

    pub fn step_extract_contact(&self, ctx: &mut ScreeningContext) -> Result<(), PipelineError> {
        let text = ctx.text()?;
        ctx.contact = Some(extract_contact(&text.text, self.names.as_ref()));
        Ok(())
    }

    /// Both scores read the text extracted in step 1 rather than re-reading
    /// the document.
    pub fn step_score(
        &self,
        ctx: &mut ScreeningContext,
        requirements: &Requirements,
    ) -> Result<(), PipelineError> {
        let extracted = ctx.text()?;
        let structure = scoring::structure_score(&extracted.text, extracted.format);
        let content = scoring::content_score(&extracted.text, &requirements.requirements);

        ctx.structure_score = Some(structure);
        ctx.content_score = Some(content);
        Ok(())
    }

    pub fn step_decide(
        &self,
        ctx: &mut ScreeningContext,
        requirements: &Requirements,
    ) -> Result<(), PipelineError> {
        ctx.text()?;
        let content = ctx.content_score.ok_or(PipelineError::StepSkipped("score"))?;
        let structure = ctx
            .structure_score
            .ok_or(PipelineError::StepSkipped("score"))?;

        let final_score = scoring::final_score(content, structure);
        ctx.final_score = Some(final_score);
        ctx.status = Some(Status::for_score(final_score, requirements.threshold));
        Ok(())
    }
}

impl Default for ScreeningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
