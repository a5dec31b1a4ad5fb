//! Stored job row.

use sqlx::FromRow;

use jobboard_core::types::JobId;

/// A row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct JobRow {
    /// Primary key, `CSJ-XXXXXXXX`.
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
    /// Whether contact details are present.
    pub contacts: bool,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub recruitment_email: String,
}

/// A validated create payload: every [`JobRow`] field except `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewJob {
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

impl NewJob {
    /// Attach an identifier, producing the row to insert.
    pub fn into_row(self, id: JobId) -> JobRow {
        JobRow {
            id,
            title: self.title,
            description: self.description,
            organisation: self.organisation,
            location: self.location,
            grade: self.grade,
            assignment_type: self.assignment_type,
            personal_spec: self.personal_spec,
            nationality_requirement: self.nationality_requirement,
            summary: self.summary,
            apply_url: self.apply_url,
            benefits: self.benefits,
            profession: self.profession,
            apply_detail: self.apply_detail,
            salary: self.salary,
            closing_date: self.closing_date,
            job_numbers: self.job_numbers,
            contacts: self.contacts,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            recruitment_email: self.recruitment_email,
        }
    }
}
