use crate::{options, record::Submission};
use std::fmt::Write;

/// Everything the page needs: the prediction line (if any), the six option
/// catalogs, and the previously submitted values so the form re-displays
/// what the user entered.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub prediction_text: Option<String>,
    pub submitted: Option<Submission>,
}

impl RenderContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_submission(prediction_text: String, submission: &Submission) -> Self {
        Self {
            prediction_text: Some(prediction_text),
            submitted: Some(submission.clone()),
        }
    }

    /// Renders the full page. All interpolated user text is HTML-escaped.
    pub fn to_html(&self) -> String {
        let submitted = self.submitted.clone().unwrap_or_default();

        let mut body = String::with_capacity(4096);
        body.push_str(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <title>Salary Prediction</title>\n\
             </head>\n<body>\n\
             <h1>Job Salary Prediction</h1>\n\
             <form method=\"post\" action=\"/\">\n",
        );

        number_input(&mut body, "min_experience", "Minimum Experience (years)", &submitted.min_experience);
        number_input(&mut body, "max_experience", "Maximum Experience (years)", &submitted.max_experience);
        number_input(&mut body, "company_size", "Company Size", &submitted.company_size);

        select_field(&mut body, "qualification", "Qualification", options::QUALIFICATIONS, &submitted.qualification);
        select_field(&mut body, "location", "Location", options::LOCATIONS, &submitted.location);
        select_field(&mut body, "work_type", "Work Type", options::WORK_TYPES, &submitted.work_type);
        select_field(&mut body, "job_title", "Job Title", options::JOB_TITLES, &submitted.job_title);
        select_field(&mut body, "sector", "Sector", options::SECTORS, &submitted.sector);
        select_field(&mut body, "industry", "Industry", options::INDUSTRIES, &submitted.industry);

        text_input(&mut body, "skills", "Skills (comma separated)", &submitted.skills);

        body.push_str("<button type=\"submit\">Predict Salary</button>\n</form>\n");

        if let Some(text) = &self.prediction_text {
            let _ = write!(
                body,
                "<p id=\"prediction\">Predicted Salary: {}</p>\n",
                escape_html(text)
            );
        }

        body.push_str("</body>\n</html>\n");
        body
    }
}

fn select_field(out: &mut String, name: &str, label: &str, choices: &[&str], selected: &str) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\" required>\n"
    );
    for choice in choices {
        let marker = if *choice == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape_html(choice),
            marker
        );
    }
    out.push_str("</select>\n");
}

fn text_input(out: &mut String, name: &str, label: &str, value: &str) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\" required>\n",
        escape_html(value)
    );
}

fn number_input(out: &mut String, name: &str, label: &str, value: &str) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"number\" step=\"any\" id=\"{name}\" name=\"{name}\" value=\"{}\" required>\n",
        escape_html(value)
    );
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_context_renders_all_option_lists_and_no_prediction() {
        let html = RenderContext::empty().to_html();

        for list in [
            options::QUALIFICATIONS,
            options::LOCATIONS,
            options::WORK_TYPES,
            options::JOB_TITLES,
            options::SECTORS,
            options::INDUSTRIES,
        ] {
            for choice in list {
                assert!(
                    html.contains(&escape_html(choice)),
                    "missing option: {choice}"
                );
            }
        }
        assert!(!html.contains("id=\"prediction\""));
    }

    #[test]
    fn prediction_text_is_rendered() {
        let html = RenderContext::with_submission("$84,523.70".to_string(), &Submission::default())
            .to_html();
        assert!(html.contains("Predicted Salary: $84,523.70"));
    }

    #[test]
    fn submitted_values_are_redisplayed() {
        let submission = Submission {
            skills: "Python, SQL".to_string(),
            qualification: "PhD".to_string(),
            ..Submission::default()
        };
        let html = RenderContext::with_submission("$1.00".to_string(), &submission).to_html();

        assert!(html.contains("value=\"Python, SQL\""));
        assert!(html.contains("<option value=\"PhD\" selected>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let submission = Submission {
            skills: "<script>alert(1)</script>".to_string(),
            ..Submission::default()
        };
        let html = RenderContext::with_submission("$1.00".to_string(), &submission).to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn escape_html_covers_the_special_characters() {
        assert_eq!(escape_html("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
