//! JSON representation of a job posting.

use serde::{Deserialize, Serialize};

use jobboard_core::types::JobId;

use super::model::JobRow;

/// A job posting as exchanged over HTTP.
///
/// Field names are camelCase on the wire. Absent optional values serialize
/// as `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub organisation: String,
    pub location: String,
    pub grade: String,
    pub assignment_type: String,
    pub personal_spec: String,
    pub nationality_requirement: Option<String>,
    pub summary: Option<String>,
    pub apply_url: Option<String>,
    pub benefits: Option<String>,
    pub profession: Option<String>,
    pub apply_detail: Option<String>,
    pub salary: Option<String>,
    pub closing_date: Option<String>,
    pub job_numbers: Option<i32>,
    pub contacts: bool,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub recruitment_email: String,
}

/// Map a stored row to its wire shape.
pub fn to_wire(row: JobRow) -> Job {
    Job {
        id: row.id,
        title: row.title,
        description: row.description,
        organisation: row.organisation,
        location: row.location,
        grade: row.grade,
        assignment_type: row.assignment_type,
        personal_spec: row.personal_spec,
        nationality_requirement: row.nationality_requirement,
        summary: row.summary,
        apply_url: row.apply_url,
        benefits: row.benefits,
        profession: row.profession,
        apply_detail: row.apply_detail,
        salary: row.salary,
        closing_date: row.closing_date,
        job_numbers: row.job_numbers,
        contacts: row.contacts,
        contact_name: row.contact_name,
        contact_email: row.contact_email,
        contact_phone: row.contact_phone,
        recruitment_email: row.recruitment_email,
    }
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        to_wire(row)
    }
}
