use super::Predictor;
use crate::{
    record::{FieldValue, PredictionRecord, FIELD_NAMES},
    Error, Result,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Serialized regression artifact: an intercept plus per-column weights.
///
/// Numeric columns contribute `value * coefficient`; text columns contribute
/// the coefficient of their matching level, or zero for levels unseen in
/// training. The artifact carries its own column list, which must exactly
/// match [`FIELD_NAMES`] or the load is rejected.
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    schema: Vec<String>,
    intercept: f64,
    #[serde(default)]
    numeric: HashMap<String, f64>,
    #[serde(default)]
    categorical: HashMap<String, HashMap<String, f64>>,
}

impl LinearModel {
    /// Loads and schema-checks the artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading model artifact from: {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&raw)?;
        model.check_schema()?;

        Ok(model)
    }

    fn check_schema(&self) -> Result<()> {
        if self.schema.len() != FIELD_NAMES.len() {
            return Err(Error::predictor(format!(
                "artifact schema has {} columns, expected {}",
                self.schema.len(),
                FIELD_NAMES.len()
            )));
        }

        for (got, expected) in self.schema.iter().zip(FIELD_NAMES) {
            if got != expected {
                return Err(Error::predictor(format!(
                    "artifact schema mismatch: found column {got:?} where {expected:?} was expected"
                )));
            }
        }

        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, record: &PredictionRecord) -> Result<f64> {
        let mut total = self.intercept;

        for (name, value) in record.fields() {
            match value {
                FieldValue::Float(v) => {
                    if let Some(coef) = self.numeric.get(name) {
                        total += coef * v;
                    }
                }
                FieldValue::Int(v) => {
                    if let Some(coef) = self.numeric.get(name) {
                        total += coef * v as f64;
                    }
                }
                FieldValue::Text(v) => {
                    if let Some(levels) = self.categorical.get(name) {
                        total += levels.get(&v).copied().unwrap_or(0.0);
                    }
                }
            }
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Submission;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn artifact_json(schema: &[&str]) -> String {
        serde_json::json!({
            "schema": schema,
            "intercept": 10000.0,
            "numeric": {
                "Min_Experience": 1000.0,
                "Max_Experience": 500.0,
                "Company Size": 2.0
            },
            "categorical": {
                "Qualifications": { "PhD": 5000.0, "MBA": 3000.0 },
                "location": { "Mumbai": 1500.0 }
            }
        })
        .to_string()
    }

    fn write_artifact(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn sample_record() -> PredictionRecord {
        PredictionRecord::from_submission(&Submission {
            min_experience: "2".to_string(),
            max_experience: "5".to_string(),
            company_size: "500".to_string(),
            qualification: "PhD".to_string(),
            location: "Mumbai".to_string(),
            work_type: "Full-Time".to_string(),
            job_title: "Data Scientist".to_string(),
            sector: "Information Technology".to_string(),
            industry: "Computer Software".to_string(),
            skills: "Python, SQL".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn loads_artifact_with_matching_schema() {
        let file = write_artifact(&artifact_json(&FIELD_NAMES));
        let model = LinearModel::load(file.path()).unwrap();

        assert_eq!(model.intercept, 10000.0);
        assert_eq!(model.schema.len(), 19);
    }

    #[test]
    fn rejects_artifact_with_wrong_column_count() {
        let file = write_artifact(&artifact_json(&FIELD_NAMES[..5]));
        let err = LinearModel::load(file.path()).unwrap_err();

        assert!(matches!(err, Error::Predictor(_)));
        assert!(err.to_string().contains("5 columns"));
    }

    #[test]
    fn rejects_artifact_with_renamed_column() {
        let mut schema = FIELD_NAMES.to_vec();
        schema[0] = "qualifications";
        let file = write_artifact(&artifact_json(&schema));
        let err = LinearModel::load(file.path()).unwrap_err();

        assert!(matches!(err, Error::Predictor(_)));
        assert!(err.to_string().contains("schema mismatch"));
    }

    #[test]
    fn rejects_missing_artifact_file() {
        let err = LinearModel::load("/no/such/artifact.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn rejects_malformed_artifact() {
        let file = write_artifact("not json");
        let err = LinearModel::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn prediction_sums_intercept_and_weights() {
        let file = write_artifact(&artifact_json(&FIELD_NAMES));
        let model = LinearModel::load(file.path()).unwrap();

        // 10000 + 2*1000 + 5*500 + 500*2 + 5000 (PhD) + 1500 (Mumbai)
        let value = model.predict(&sample_record()).unwrap();
        assert_eq!(value, 22000.0);
    }

    #[test]
    fn unseen_categorical_level_contributes_zero() {
        let file = write_artifact(&artifact_json(&FIELD_NAMES));
        let model = LinearModel::load(file.path()).unwrap();

        let mut record = sample_record();
        record.qualification = "BCA".to_string();

        let value = model.predict(&record).unwrap();
        assert_eq!(value, 17000.0);
    }
}
