//! Persisted model artifacts.
//!
//! The trainer produces three JSON files — vectorizer, classifier, and
//! label mapping — that are always written together and always loaded
//! together. Loading verifies what it can: file presence, format version,
//! vector-dimension agreement, and label agreement. A classifier trained
//! against a *different* vocabulary of the same size is indistinguishable
//! from the right one; treating the three files as the indivisible output
//! of a single trainer run is an operational invariant, not something this
//! code can prove.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{LinearClassifier, ModelError, TfidfVectorizer};

/// Vectorizer artifact file name.
pub const VECTORIZER_FILE: &str = "vectorizer.json";
/// Classifier artifact file name.
pub const CLASSIFIER_FILE: &str = "classifier.json";
/// Label-mapping artifact file name.
pub const LABELS_FILE: &str = "labels.json";

/// Artifact format version; bumped when the serialized shape changes.
pub const FORMAT_VERSION: u32 = 1;

/// Index → label mapping persisted alongside the models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    /// Class labels in decision-index order.
    pub labels: Vec<String>,
}

impl LabelMap {
    /// Looks up a label by class index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Version wrapper written around every artifact payload.
#[derive(Serialize, Deserialize)]
struct VersionedArtifact<T> {
    /// Artifact format version.
    format_version: u32,
    /// The artifact payload.
    payload: T,
}

/// The three trained artifacts, loaded and used as a unit.
#[derive(Clone)]
pub struct ModelBundle {
    /// The fitted vectorizer.
    pub vectorizer: TfidfVectorizer,
    /// The trained classifier.
    pub classifier: LinearClassifier,
    /// The persisted label mapping.
    pub labels: LabelMap,
}

impl ModelBundle {
    /// Loads all three artifacts from a directory and verifies consistency.
    ///
    /// A missing file, an undecodable file, a version mismatch, a
    /// vectorizer/classifier dimension disagreement, or a classifier/label
    /// disagreement are all fatal configuration errors.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let vectorizer: TfidfVectorizer = read_artifact(&dir.join(VECTORIZER_FILE))?;
        let classifier: LinearClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;
        let labels: LabelMap = read_artifact(&dir.join(LABELS_FILE))?;

        if classifier.dimension() != vectorizer.dimension() {
            return Err(ModelError::DimensionMismatch {
                vectorizer: vectorizer.dimension(),
                classifier: classifier.dimension(),
            });
        }

        if classifier.classes() != labels.labels.as_slice() {
            return Err(ModelError::LabelMismatch {
                message: format!(
                    "classifier has {} classes, label mapping lists {}",
                    classifier.classes().len(),
                    labels.len()
                ),
            });
        }

        Ok(Self {
            vectorizer,
            classifier,
            labels,
        })
    }

    /// Persists all three artifacts to a directory.
    ///
    /// Each artifact is serialized and written to a temporary sibling
    /// first; the final names only appear once every temporary write has
    /// succeeded (rename-on-completion). A failure part-way leaves at most
    /// stale previous artifacts, never a torn set of new ones.
    pub fn store(&self, dir: &Path) -> Result<(), ModelError> {
        fs::create_dir_all(dir)?;

        let files = [
            (VECTORIZER_FILE, encode(&self.vectorizer)?),
            (CLASSIFIER_FILE, encode(&self.classifier)?),
            (LABELS_FILE, encode(&self.labels)?),
        ];

        let staged: Vec<_> = files
            .iter()
            .map(|(name, contents)| {
                let tmp = dir.join(format!("{name}.tmp"));
                fs::write(&tmp, contents).map(|()| (tmp, dir.join(name)))
            })
            .collect::<Result<_, io::Error>>()
            .inspect_err(|_| discard_staged(dir))?;

        for (tmp, target) in staged {
            fs::rename(tmp, target)?;
        }

        Ok(())
    }
}

/// Serializes an artifact payload with its version wrapper.
fn encode<T: Serialize>(payload: &T) -> Result<String, ModelError> {
    let versioned = VersionedArtifact {
        format_version: FORMAT_VERSION,
        payload,
    };
    serde_json::to_string_pretty(&versioned).map_err(|source| {
        ModelError::Io(io::Error::new(io::ErrorKind::InvalidData, source.to_string()))
    })
}

/// Reads and unwraps a versioned artifact file.
fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    if !path.exists() {
        return Err(ModelError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let versioned: VersionedArtifact<T> =
        serde_json::from_str(&contents).map_err(|source| ModelError::ArtifactFormat {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;

    if versioned.format_version != FORMAT_VERSION {
        return Err(ModelError::ArtifactVersion {
            path: path.to_path_buf(),
            found: versioned.format_version,
            expected: FORMAT_VERSION,
        });
    }

    Ok(versioned.payload)
}

/// Best-effort removal of staged temporary files after a failed store.
fn discard_staged(dir: &Path) {
    for name in [VECTORIZER_FILE, CLASSIFIER_FILE, LABELS_FILE] {
        let _ = fs::remove_file(dir.join(format!("{name}.tmp")));
    }
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;
    use crate::VectorizerConfig;

    fn small_bundle() -> ModelBundle {
        let docs: Vec<String> = vec![
            "python pandas models data".to_string(),
            "python sql data pipelines".to_string(),
            "recruiting payroll people data".to_string(),
            "recruiting people relations data".to_string(),
        ];
        let config = VectorizerConfig {
            min_df: 1,
            max_df_ratio: 1.0,
            ..VectorizerConfig::default()
        };
        let vectorizer = TfidfVectorizer::fit(&docs, config).unwrap();
        let vectors: Vec<Vec<f32>> = docs.iter().map(|d| vectorizer.transform(d)).collect();
        let labels = vec![0, 0, 1, 1];
        let classes = vec!["Data Science".to_string(), "HR".to_string()];
        let classifier = LinearClassifier::fit(&vectors, &labels, classes.clone(), 42).unwrap();

        ModelBundle {
            vectorizer,
            classifier,
            labels: LabelMap { labels: classes },
        }
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let bundle = small_bundle();
        bundle.store(dir.path()).unwrap();

        for name in [VECTORIZER_FILE, CLASSIFIER_FILE, LABELS_FILE] {
            assert!(dir.path().join(name).exists(), "{name} should exist");
            assert!(
                !dir.path().join(format!("{name}.tmp")).exists(),
                "{name}.tmp should be gone"
            );
        }

        let loaded = ModelBundle::load(dir.path()).unwrap();
        let vector = loaded.vectorizer.transform("python sql data");
        assert_eq!(
            loaded.classifier.predict(&vector),
            bundle.classifier.predict(&vector)
        );
    }

    #[test]
    fn missing_artifact_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let bundle = small_bundle();
        bundle.store(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join(CLASSIFIER_FILE)).unwrap();

        let result = ModelBundle::load(dir.path());
        assert!(matches!(result, Err(ModelError::MissingArtifact { .. })));
    }

    #[test]
    fn malformed_artifact_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let bundle = small_bundle();
        bundle.store(dir.path()).unwrap();
        std::fs::write(dir.path().join(LABELS_FILE), "not json").unwrap();

        let result = ModelBundle::load(dir.path());
        assert!(matches!(result, Err(ModelError::ArtifactFormat { .. })));
    }

    #[test]
    fn version_mismatch_is_detected() {
        let dir = TempDir::new().unwrap();
        let bundle = small_bundle();
        bundle.store(dir.path()).unwrap();

        let labels_path = dir.path().join(LABELS_FILE);
        let contents = std::fs::read_to_string(&labels_path).unwrap();
        let bumped = contents.replace(
            &format!("\"format_version\": {FORMAT_VERSION}"),
            "\"format_version\": 999",
        );
        std::fs::write(&labels_path, bumped).unwrap();

        let result = ModelBundle::load(dir.path());
        assert!(matches!(
            result,
            Err(ModelError::ArtifactVersion { found: 999, .. })
        ));
    }

    #[test]
    fn label_disagreement_is_detected() {
        let dir = TempDir::new().unwrap();
        let mut bundle = small_bundle();
        bundle.labels = LabelMap {
            labels: vec!["Data Science".to_string(), "Advocate".to_string()],
        };
        bundle.store(dir.path()).unwrap();

        let result = ModelBundle::load(dir.path());
        assert!(matches!(result, Err(ModelError::LabelMismatch { .. })));
    }

    #[test]
    fn dimension_disagreement_is_detected() {
        let dir = TempDir::new().unwrap();
        let bundle = small_bundle();
        bundle.store(dir.path()).unwrap();

        // Replace the classifier with one trained on a different dimension.
        let samples = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let other = LinearClassifier::fit(
            &samples,
            &[0, 1],
            vec!["Data Science".to_string(), "HR".to_string()],
            42,
        )
        .unwrap();
        let narrow = ModelBundle {
            vectorizer: bundle.vectorizer.clone(),
            classifier: other,
            labels: bundle.labels.clone(),
        };
        // Store only the classifier artifact over the old one.
        let tmp = TempDir::new().unwrap();
        narrow.store(tmp.path()).unwrap();
        std::fs::copy(
            tmp.path().join(CLASSIFIER_FILE),
            dir.path().join(CLASSIFIER_FILE),
        )
        .unwrap();

        let result = ModelBundle::load(dir.path());
        assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
    }
}
