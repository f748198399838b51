//! The scoring engine: one request in, one scored report out.
//!
//! The engine owns the read-only context the pipeline needs — the trained
//! model bundle and the competency taxonomy — passed in explicitly at
//! construction (no ambient globals). Everything per request runs on the
//! calling thread in a single deterministic pass; any error aborts the
//! whole request.

use chrono::{DateTime, Utc};
use rolefit_model::ModelBundle;
use rolefit_taxonomy::Taxonomy;
use rolefit_text::normalize;

use crate::{
    MISSING_SKILLS_CAP, ScoreError, ScoringResult, composite, matcher::match_skills, similarity,
};

/// One scoring request, assembled by the calling layer.
///
/// The caller checks input preconditions before building this: resume text
/// present, a target role selected. The engine assumes both and validates
/// only what it owns — the role against the taxonomy.
#[derive(Debug, Clone)]
pub struct ScoringRequest {
    /// Full resume text (document text first, any extra resume info
    /// appended after — the order affects classification n-grams).
    pub resume_text: String,
    /// Target role; must be a taxonomy key or the request is refused.
    pub target_role: String,
    /// Job description text, possibly empty.
    pub job_description: String,
    /// Extra job information, possibly empty.
    pub extra_job_info: String,
}

/// The resume-role fit scoring engine.
///
/// Constructed once at process start with the loaded artifacts; shared
/// read-only across requests thereafter.
pub struct ScoringEngine {
    /// The trained vectorizer/classifier/label artifacts.
    bundle: ModelBundle,
    /// The competency taxonomy.
    taxonomy: Taxonomy,
}

impl ScoringEngine {
    /// Creates an engine from loaded artifacts and a taxonomy.
    pub fn new(bundle: ModelBundle, taxonomy: Taxonomy) -> Self {
        Self { bundle, taxonomy }
    }

    /// The taxonomy this engine validates roles against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Scores a request, stamping the current time.
    pub fn score(&self, request: &ScoringRequest) -> Result<ScoringResult, ScoreError> {
        self.score_at(request, Utc::now())
    }

    /// Scores a request with an injected timestamp.
    ///
    /// Everything except the timestamp is a deterministic function of the
    /// request and the loaded artifacts: identical inputs produce
    /// bit-identical results.
    pub fn score_at(
        &self,
        request: &ScoringRequest,
        timestamp: DateTime<Utc>,
    ) -> Result<ScoringResult, ScoreError> {
        // Refuse unknown roles before any vectorization work.
        if !self.taxonomy.contains(&request.target_role) {
            return Err(ScoreError::UnknownRole {
                role: request.target_role.clone(),
            });
        }

        let cleaned = normalize::inference(&request.resume_text);
        let resume_vector = self.bundle.vectorizer.transform(&cleaned);
        let predicted_role = self.bundle.classifier.predict(&resume_vector).to_string();

        // Skill matching runs against the raw text, not the normalized form.
        let skills = match_skills(&self.taxonomy, &request.target_role, &request.resume_text)?;

        let description_subscore = similarity::description_subscore(
            &resume_vector,
            &request.job_description,
            &request.extra_job_info,
            &self.bundle.vectorizer,
        );

        let role_match = composite::is_role_match(&predicted_role, &request.target_role);
        let role_subscore = composite::role_subscore(role_match);
        let skill_subscore = composite::skill_subscore(skills.present.len(), skills.required.len());
        let effectiveness =
            composite::effectiveness(role_subscore, skill_subscore, description_subscore);

        let mut missing_skills = skills.missing;
        missing_skills.truncate(MISSING_SKILLS_CAP);

        Ok(ScoringResult {
            effectiveness,
            predicted_role,
            target_role: request.target_role.clone(),
            role_match,
            required_skills: skills.required,
            present_skills: skills.present,
            missing_skills,
            role_subscore,
            skill_subscore,
            description_subscore,
            timestamp,
        })
    }
}
