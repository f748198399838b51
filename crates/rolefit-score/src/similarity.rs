//! Job-description similarity scoring.
//!
//! Measures directional closeness between the resume vector and a job
//! description vector produced by the same shared vectorizer, scaled into
//! the description sub-score.

use rolefit_model::TfidfVectorizer;
use rolefit_text::normalize;

/// Ceiling of the description similarity sub-score.
pub const DESCRIPTION_CEILING: f32 = 20.0;

/// Computes the description sub-score in `[0, 20]`.
///
/// When both the job description and the extra job info are blank this
/// returns 0 without vectorizing anything. Otherwise the two texts are
/// concatenated (description first, newline separator — the order affects
/// n-gram boundaries and is part of the contract), normalized with the
/// inference profile, vectorized, and compared by cosine similarity
/// scaled by 20. TF-style vectors are non-negative so the cosine cannot go
/// negative, but the result is clamped defensively anyway: downstream
/// summation assumes non-negative sub-scores.
pub fn description_subscore(
    resume_vector: &[f32],
    job_description: &str,
    extra_job_info: &str,
    vectorizer: &TfidfVectorizer,
) -> f32 {
    if job_description.trim().is_empty() && extra_job_info.trim().is_empty() {
        return 0.0;
    }

    let combined = format!("{job_description}\n{extra_job_info}");
    let job_vector = vectorizer.transform(&normalize::inference(&combined));

    (cosine_similarity(resume_vector, &job_vector) * DESCRIPTION_CEILING)
        .clamp(0.0, DESCRIPTION_CEILING)
}

/// Cosine similarity between two vectors of equal dimension.
///
/// Returns 0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod test {
    use rolefit_model::VectorizerConfig;

    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        let docs: Vec<String> = vec![
            "python machine learning models".to_string(),
            "python sql data pipelines".to_string(),
            "payroll recruitment employee relations".to_string(),
        ];
        let config = VectorizerConfig {
            min_df: 1,
            max_df_ratio: 1.0,
            ..VectorizerConfig::default()
        };
        TfidfVectorizer::fit(&docs, config).unwrap()
    }

    #[test]
    fn identical_vectors_have_unit_similarity() {
        let a = vec![0.5, 0.5, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_zero_similarity() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_norm_yields_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn blank_inputs_short_circuit_to_zero() {
        let v = vectorizer();
        let resume = v.transform("python machine learning");
        assert_eq!(description_subscore(&resume, "", "", &v), 0.0);
        assert_eq!(description_subscore(&resume, "   \n\t", "  ", &v), 0.0);
    }

    #[test]
    fn matching_description_scores_high() {
        let v = vectorizer();
        let resume = v.transform("python machine learning models");

        let on_topic =
            description_subscore(&resume, "seeking python machine learning models", "", &v);
        let off_topic = description_subscore(&resume, "payroll recruitment employee", "", &v);

        assert!(on_topic > off_topic);
        assert!(on_topic > 15.0, "on-topic score was {on_topic}");
        assert!((0.0..=DESCRIPTION_CEILING).contains(&on_topic));
    }

    #[test]
    fn extra_info_alone_is_scored() {
        let v = vectorizer();
        let resume = v.transform("python machine learning models");

        let score = description_subscore(&resume, "", "python machine learning", &v);
        assert!(score > 0.0);
    }

    #[test]
    fn unrelated_description_scores_zero() {
        let v = vectorizer();
        let resume = v.transform("python machine learning models");

        // Every description token is out-of-vocabulary: zero vector.
        let score = description_subscore(&resume, "underwater basket weaving", "", &v);
        assert_eq!(score, 0.0);
    }
}
