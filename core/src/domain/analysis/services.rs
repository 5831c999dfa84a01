use tracing::{error, info, instrument, warn};

use crate::domain::{
    analysis::{
        entities::{AnalysisKind, ImageAnalysis, Language, Severity},
        parser::parse_analysis,
        ports::{AnalysisService, LLMClient},
        prompts,
        value_objects::{
            AnalyzeImagesInput, MAX_IMAGES_PER_ANALYSIS, MIN_SYMPTOM_DESCRIPTION_CHARS,
            SymptomCheckInput,
        },
    },
    common::{entities::app_errors::CoreError, services::Service, truncate_for_display},
    history::entities::{EntryPayload, HistoryEntry, SOURCE_TEXT_DISPLAY_CHARS, tracker_entries_for},
    provider::ports::LocationSearchPort,
    session::{entities::SessionHandle, ports::SessionRepository},
};

/// Symptom durations accepted by the form, in days.
pub const SYMPTOM_DURATION_DAYS: std::ops::RangeInclusive<u16> = 1..=90;

impl<LLM, LS, SR> AnalysisService for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    #[instrument(
        skip(self, input),
        fields(session_id = %input.session_id, images = input.images.len(), language = input.language.as_str())
    )]
    async fn analyze_images(&self, input: AnalyzeImagesInput) -> Result<HistoryEntry, CoreError> {
        // 1. Validate the upload
        let total = input.images.len();
        if total == 0 {
            return Err(CoreError::Invalid("at least one image is required".to_string()));
        }
        if total > MAX_IMAGES_PER_ANALYSIS {
            return Err(CoreError::Invalid(format!(
                "at most {MAX_IMAGES_PER_ANALYSIS} images can be analyzed together"
            )));
        }
        if let Some(empty) = input.images.iter().find(|image| image.data.is_empty()) {
            return Err(CoreError::Invalid(format!("image '{}' is empty", empty.file_name)));
        }

        let session = self.session(input.session_id).await?;

        // 2. Analyze every image; the session stays unlocked while the collaborator runs
        let kind = if total > 1 {
            AnalysisKind::MultiImage
        } else {
            AnalysisKind::Image
        };
        let mut analyses = Vec::with_capacity(total);

        for (index, image) in input.images.into_iter().enumerate() {
            let image_number = index + 1;
            let image_name = image.file_name.clone();
            let prompt = prompts::image_prompt_for(input.language, image_number, total);

            let raw_text = self
                .llm_client
                .generate_with_image(prompt, image)
                .await
                .inspect_err(|e| error!(error = %e, image_number, "image analysis failed"))?;

            let result = parse_analysis(&raw_text, input.language, kind);
            if !result.is_confident() {
                warn!(image_number, outcome = ?result.outcome, severity = %result.severity, "analysis parsed with fallback");
            }

            analyses.push(ImageAnalysis {
                image_number,
                image_name,
                result,
            });
        }

        // 3. Record
        let payload = image_payload(analyses);
        Ok(record_analysis(&session, input.language, payload).await)
    }

    #[instrument(
        skip(self, input),
        fields(session_id = %input.session_id, language = input.language.as_str())
    )]
    async fn check_symptoms(&self, input: SymptomCheckInput) -> Result<HistoryEntry, CoreError> {
        // 1. Validate the form
        let description = input.description.trim();
        if description.chars().count() <= MIN_SYMPTOM_DESCRIPTION_CHARS {
            return Err(CoreError::Invalid(format!(
                "symptom description must be longer than {MIN_SYMPTOM_DESCRIPTION_CHARS} characters"
            )));
        }
        if !SYMPTOM_DURATION_DAYS.contains(&input.duration_days) {
            return Err(CoreError::Invalid(
                "symptom duration must be between 1 and 90 days".to_string(),
            ));
        }
        if let Some(reported) = input.reported_severity {
            if !(Severity::MIN..=Severity::MAX).contains(&reported) {
                return Err(CoreError::Invalid(
                    "self-reported severity must be between 1 and 5".to_string(),
                ));
            }
        }

        let session = self.session(input.session_id).await?;

        // 2. Ask the collaborator
        let raw_text = self
            .llm_client
            .generate_with_text(
                prompts::symptom_prompt(input.language).to_string(),
                input.to_prompt_input(),
            )
            .await
            .inspect_err(|e| error!(error = %e, "symptom analysis failed"))?;

        let result = parse_analysis(&raw_text, input.language, AnalysisKind::Symptom);
        if !result.is_confident() {
            warn!(outcome = ?result.outcome, severity = %result.severity, "analysis parsed with fallback");
        }

        // 3. Record
        let payload = EntryPayload::SymptomCheck {
            source_text: truncate_for_display(description, SOURCE_TEXT_DISPLAY_CHARS),
            reported_severity: input.reported_severity,
            result,
        };
        Ok(record_analysis(&session, input.language, payload).await)
    }
}

/// A single image becomes an image analysis; several are merged with the
/// highest severity and the first-seen union of their conditions.
pub fn image_payload(mut analyses: Vec<ImageAnalysis>) -> EntryPayload {
    if analyses.len() == 1 {
        if let Some(single) = analyses.pop() {
            return EntryPayload::ImageAnalysis {
                image_name: single.image_name,
                result: single.result,
            };
        }
    }

    let combined_severity = analyses
        .iter()
        .fold(Severity::unset(), |acc, a| acc.combine(a.result.severity));

    let mut all_conditions: Vec<String> = Vec::new();
    for condition in analyses.iter().flat_map(|a| a.result.conditions.iter()) {
        if !all_conditions.iter().any(|c| c.eq_ignore_ascii_case(condition)) {
            all_conditions.push(condition.clone());
        }
    }

    EntryPayload::MultiImageAnalysis {
        analyses,
        combined_severity,
        all_conditions,
    }
}

async fn record_analysis(
    session: &SessionHandle,
    language: Language,
    payload: EntryPayload,
) -> HistoryEntry {
    let mut session = session.lock().await;
    let (timestamp, _) = crate::domain::common::generate_timestamp();
    let id = session.next_entry_id(timestamp);
    let entry = HistoryEntry::new(id, timestamp, payload);

    let tracked = tracker_entries_for(&entry, language.general_condition_label());
    let tracked_count = tracked.len();

    session.language = language;
    session.store.append(entry.clone());
    for tracker_entry in tracked {
        session.store.add_tracker_entry(tracker_entry);
    }

    info!(
        entry_id = %entry.id,
        entry_type = ?entry.entry_type(),
        severity = %entry.severity(),
        conditions = entry.conditions().len(),
        tracker_entries = tracked_count,
        "analysis recorded"
    );

    entry
}
