//! The model input row and its assembly from form input.
//!
//! The column names and order in [`FIELD_NAMES`] are a strict contract with
//! the model artifact: they must exactly match the columns the model was
//! trained on, or the prediction is wrong or fails outright. The form only
//! collects ten of the nineteen columns; the rest are filled with fixed
//! defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column names the model was fit against, in training order.
pub const FIELD_NAMES: [&str; 19] = [
    "Qualifications",
    "location",
    "Country",
    "Work Type",
    "Preference",
    "Job Title",
    "Role",
    "Job Portal",
    "Sector",
    "Industry",
    "Salary_Spread",
    "Min_Experience",
    "Max_Experience",
    "Company Size",
    "Posting_Year",
    "Posting_Month",
    "skills",
    "Benefits",
    "Full_Job_Text",
];

// Defaults for columns the form does not collect.
const DEFAULT_COUNTRY: &str = "India";
const DEFAULT_PREFERENCE: &str = "Any";
const DEFAULT_ROLE: &str = "Engineer";
const DEFAULT_JOB_PORTAL: &str = "LinkedIn";
const DEFAULT_SALARY_SPREAD: i64 = 50_000;
const DEFAULT_POSTING_YEAR: i64 = 2023;
const DEFAULT_POSTING_MONTH: i64 = 10;
const DEFAULT_BENEFITS: &str = "Health Insurance, PTO";

/// Form fields as they arrive on the wire, all strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    pub min_experience: String,
    pub max_experience: String,
    pub company_size: String,
    pub qualification: String,
    pub location: String,
    pub work_type: String,
    pub job_title: String,
    pub sector: String,
    pub industry: String,
    pub skills: String,
}

/// A single value in the model input row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Int(i64),
}

/// One model input row, built fresh per submission and discarded after the
/// prediction call.
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    pub qualification: String,
    pub location: String,
    pub work_type: String,
    pub job_title: String,
    pub sector: String,
    pub industry: String,
    pub skills: String,
    pub min_experience: f64,
    pub max_experience: f64,
    pub company_size: i64,
}

impl PredictionRecord {
    /// Coerces the raw form fields into a typed record. Non-numeric
    /// experience or company-size input is an [`Error::InputCoercion`],
    /// never a panic.
    pub fn from_submission(form: &Submission) -> Result<Self> {
        Ok(Self {
            min_experience: parse_float("min_experience", &form.min_experience)?,
            max_experience: parse_float("max_experience", &form.max_experience)?,
            company_size: parse_int("company_size", &form.company_size)?,
            qualification: form.qualification.clone(),
            location: form.location.clone(),
            work_type: form.work_type.clone(),
            job_title: form.job_title.clone(),
            sector: form.sector.clone(),
            industry: form.industry.clone(),
            skills: form.skills.clone(),
        })
    }

    /// Ordered (column, value) view passed to the predictor. This is the
    /// only place the 19-column layout is spelled out.
    pub fn fields(&self) -> [(&'static str, FieldValue); 19] {
        [
            ("Qualifications", FieldValue::Text(self.qualification.clone())),
            ("location", FieldValue::Text(self.location.clone())),
            ("Country", FieldValue::Text(DEFAULT_COUNTRY.to_string())),
            ("Work Type", FieldValue::Text(self.work_type.clone())),
            ("Preference", FieldValue::Text(DEFAULT_PREFERENCE.to_string())),
            ("Job Title", FieldValue::Text(self.job_title.clone())),
            ("Role", FieldValue::Text(DEFAULT_ROLE.to_string())),
            ("Job Portal", FieldValue::Text(DEFAULT_JOB_PORTAL.to_string())),
            ("Sector", FieldValue::Text(self.sector.clone())),
            ("Industry", FieldValue::Text(self.industry.clone())),
            ("Salary_Spread", FieldValue::Int(DEFAULT_SALARY_SPREAD)),
            ("Min_Experience", FieldValue::Float(self.min_experience)),
            ("Max_Experience", FieldValue::Float(self.max_experience)),
            ("Company Size", FieldValue::Int(self.company_size)),
            ("Posting_Year", FieldValue::Int(DEFAULT_POSTING_YEAR)),
            ("Posting_Month", FieldValue::Int(DEFAULT_POSTING_MONTH)),
            ("skills", FieldValue::Text(self.skills.clone())),
            ("Benefits", FieldValue::Text(DEFAULT_BENEFITS.to_string())),
            // The form has no free-text description field; skills stands in.
            ("Full_Job_Text", FieldValue::Text(self.skills.clone())),
        ]
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| Error::InputCoercion {
        field,
        value: value.to_string(),
    })
}

fn parse_int(field: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::InputCoercion {
        field,
        value: value.to_string(),
    })
}

/// Formats a model output as currency text: `84523.7` -> `"$84,523.70"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}
