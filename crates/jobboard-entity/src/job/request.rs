//! Create-request validation.
//!
//! The body of `POST /jobs` is checked field by field so that every
//! problem is reported at once, each with the path of the offending field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobboard_core::error::AppError;

use super::model::NewJob;

/// One failed check on a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the field, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    /// Human-readable reason.
    pub msg: String,
    /// Machine-readable reason, e.g. `"missing"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn body(path: &[&str], msg: &str, kind: &str) -> Self {
        let mut loc = vec!["body".to_string()];
        loc.extend(path.iter().map(|p| p.to_string()));
        Self {
            loc,
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Error for a body that is not valid JSON or not sent as JSON.
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: "json_invalid".to_string(),
        }
    }
}

/// Every field error found in one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The collected errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(err: FieldError) -> Self {
        Self(vec![err])
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let summary = errors
            .0
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::validation(format!("Request validation failed: {summary}"))
            .with_details(serde_json::to_value(&errors.0).unwrap_or(Value::Null))
    }
}

/// Walks a JSON object, collecting typed values and errors.
struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl FieldReader<'_> {
    fn required_str(&mut self, name: &str) -> String {
        match self.obj.get(name) {
            None => {
                self.errors
                    .push(FieldError::body(&[name], "Field required", "missing"));
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.errors.push(FieldError::body(
                    &[name],
                    "Input should be a valid string",
                    "string_type",
                ));
                String::new()
            }
        }
    }

    fn optional_str(&mut self, name: &str) -> Option<String> {
        match self.obj.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.errors.push(FieldError::body(
                    &[name],
                    "Input should be a valid string",
                    "string_type",
                ));
                None
            }
        }
    }

    fn optional_i32(&mut self, name: &str) -> Option<i32> {
        let value = match self.obj.get(name) {
            None | Some(Value::Null) => return None,
            Some(v) => v,
        };
        let whole = match value.as_i64() {
            Some(n) => Some(n as f64),
            // Integral floats such as `2.0` are accepted.
            None => match value.as_f64() {
                Some(f) if f.fract() == 0.0 => Some(f),
                Some(_) => {
                    self.errors.push(FieldError::body(
                        &[name],
                        "Input should be a valid integer, got a number with a fractional part",
                        "int_from_float",
                    ));
                    return None;
                }
                None => None,
            },
        };

        let Some(whole) = whole else {
            self.errors.push(FieldError::body(
                &[name],
                "Input should be a valid integer",
                "int_type",
            ));
            return None;
        };

        if whole < f64::from(i32::MIN) || whole > f64::from(i32::MAX) {
            self.errors.push(FieldError::body(
                &[name],
                "Input should fit in a 32-bit signed integer",
                "int_range",
            ));
            return None;
        }
        Some(whole as i32)
    }

    fn bool_or(&mut self, name: &str, default: bool) -> bool {
        match self.obj.get(name) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.errors.push(FieldError::body(
                    &[name],
                    "Input should be a valid boolean",
                    "bool_type",
                ));
                default
            }
        }
    }
}

/// Validate a create payload and convert it to a [`NewJob`].
///
/// Keys use wire names (`assignmentType`, `personalSpec`, ...). Unknown
/// keys, including any client-supplied `id`, are ignored. `contacts`
/// defaults to `false` when omitted.
pub fn from_create_request(input: &Value) -> Result<NewJob, ValidationErrors> {
    let obj = input.as_object().ok_or_else(|| {
        ValidationErrors::from(FieldError::body(
            &[],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        ))
    })?;

    let mut r = FieldReader {
        obj,
        errors: Vec::new(),
    };

    let job = NewJob {
        title: r.required_str("title"),
        description: r.required_str("description"),
        organisation: r.required_str("organisation"),
        location: r.required_str("location"),
        grade: r.required_str("grade"),
        assignment_type: r.required_str("assignmentType"),
        personal_spec: r.required_str("personalSpec"),
        nationality_requirement: r.optional_str("nationalityRequirement"),
        summary: r.optional_str("summary"),
        apply_url: r.optional_str("applyUrl"),
        benefits: r.optional_str("benefits"),
        profession: r.optional_str("profession"),
        apply_detail: r.optional_str("applyDetail"),
        salary: r.optional_str("salary"),
        closing_date: r.optional_str("closingDate"),
        job_numbers: r.optional_i32("jobNumbers"),
        contacts: r.bool_or("contacts", false),
        contact_name: r.optional_str("contactName"),
        contact_email: r.optional_str("contactEmail"),
        contact_phone: r.optional_str("contactPhone"),
        recruitment_email: r.required_str("recruitmentEmail"),
    };

    if r.errors.is_empty() {
        Ok(job)
    } else {
        Err(ValidationErrors(r.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::error::ErrorKind;
    use serde_json::json;

    fn analyst() -> Value {
        json!({
            "title": "Analyst",
            "description": "d",
            "organisation": "Home Office",
            "location": "London",
            "grade": "G7",
            "assignmentType": "Permanent",
            "personalSpec": "spec",
            "recruitmentEmail": "r@x.gov"
        })
    }

    #[test]
    fn test_minimal_payload() {
        let job = from_create_request(&analyst()).expect("valid");
        assert_eq!(job.title, "Analyst");
        assert_eq!(job.assignment_type, "Permanent");
        assert_eq!(job.personal_spec, "spec");
        assert_eq!(job.recruitment_email, "r@x.gov");
        assert!(!job.contacts);
        assert_eq!(job.summary, None);
        assert_eq!(job.job_numbers, None);
    }

    #[test]
    fn test_optional_fields_pass_through() {
        let mut body = analyst();
        body["salary"] = json!("£45,000");
        body["summary"] = json!("");
        body["jobNumbers"] = json!(3);
        body["contacts"] = json!(true);
        body["contactName"] = json!("Sam");
        body["closingDate"] = Value::Null;

        let job = from_create_request(&body).expect("valid");
        assert_eq!(job.salary.as_deref(), Some("£45,000"));
        assert_eq!(job.summary.as_deref(), Some(""));
        assert_eq!(job.job_numbers, Some(3));
        assert!(job.contacts);
        assert_eq!(job.contact_name.as_deref(), Some("Sam"));
        assert_eq!(job.closing_date, None);
    }

    #[test]
    fn test_missing_required_field_reports_path() {
        let mut body = analyst();
        body.as_object_mut().expect("object").remove("title");

        let errors = from_create_request(&body).expect_err("invalid");
        assert_eq!(
            errors.errors(),
            &[FieldError {
                loc: vec!["body".into(), "title".into()],
                msg: "Field required".into(),
                kind: "missing".into(),
            }]
        );
    }

    #[test]
    fn test_collects_every_error() {
        let body = json!({
            "title": 5,
            "description": "d",
            "organisation": "o",
            "location": "l",
            "grade": "g",
            "personalSpec": "p",
            "recruitmentEmail": "r",
            "jobNumbers": "many",
            "contacts": "yes"
        });

        let errors = from_create_request(&body).expect_err("invalid");
        let kinds: Vec<(String, String)> = errors
            .errors()
            .iter()
            .map(|e| (e.loc[1].clone(), e.kind.clone()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("title".into(), "string_type".into()),
                ("assignmentType".into(), "missing".into()),
                ("jobNumbers".into(), "int_type".into()),
                ("contacts".into(), "bool_type".into()),
            ]
        );
    }

    #[test]
    fn test_null_required_field_is_type_error() {
        let mut body = analyst();
        body["grade"] = Value::Null;
        let errors = from_create_request(&body).expect_err("invalid");
        assert_eq!(errors.errors()[0].kind, "string_type");
    }

    #[test]
    fn test_job_numbers_out_of_range() {
        let mut body = analyst();
        body["jobNumbers"] = json!(i64::from(i32::MAX) + 1);
        let errors = from_create_request(&body).expect_err("invalid");
        assert_eq!(errors.errors()[0].kind, "int_range");
    }

    #[test]
    fn test_job_numbers_accepts_integral_float() {
        let mut body = analyst();
        body["jobNumbers"] = json!(2.0);
        let job = from_create_request(&body).expect("valid");
        assert_eq!(job.job_numbers, Some(2));
    }

    #[test]
    fn test_job_numbers_rejects_fraction() {
        let mut body = analyst();
        body["jobNumbers"] = json!(2.5);
        let errors = from_create_request(&body).expect_err("invalid");
        assert_eq!(errors.errors()[0].loc, vec!["body", "jobNumbers"]);
        assert_eq!(errors.errors()[0].kind, "int_from_float");
    }

    #[test]
    fn test_job_numbers_large_float_out_of_range() {
        let mut body = analyst();
        body["jobNumbers"] = json!(1e12);
        let errors = from_create_request(&body).expect_err("invalid");
        assert_eq!(errors.errors()[0].kind, "int_range");
    }

    #[test]
    fn test_non_object_body() {
        let errors = from_create_request(&json!([1, 2])).expect_err("invalid");
        assert_eq!(errors.errors()[0].loc, vec!["body".to_string()]);
    }

    #[test]
    fn test_client_id_is_ignored() {
        let mut body = analyst();
        body["id"] = json!("CSJ-FFFFFFFF");
        assert!(from_create_request(&body).is_ok());
    }

    #[test]
    fn test_into_app_error_carries_details() {
        let err: AppError = ValidationErrors::from(FieldError::malformed_body("bad json")).into();
        assert_eq!(err.kind, ErrorKind::Validation);
        let details = err.details.expect("details");
        assert_eq!(details[0]["loc"], json!(["body"]));
        assert_eq!(details[0]["type"], "json_invalid");
    }
}
