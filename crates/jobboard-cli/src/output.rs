//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use jobboard_entity::job::Job;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One table row per job.
#[derive(Debug, Tabled)]
struct JobSummary {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Organisation")]
    organisation: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Closing")]
    closing_date: String,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title.clone(),
            organisation: job.organisation.clone(),
            location: job.location.clone(),
            grade: job.grade.clone(),
            closing_date: or_dash(job.closing_date.as_deref()),
        }
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Print a list of jobs in the selected format
pub fn print_jobs(jobs: &[Job], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if jobs.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<JobSummary> = jobs.iter().map(JobSummary::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(jobs, "[]"),
    }
}

/// Print a single job in the selected format
pub fn print_job(job: &Job, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("ID", job.id.as_str());
            print_kv("Title", &job.title);
            print_kv("Description", &job.description);
            print_kv("Organisation", &job.organisation);
            print_kv("Location", &job.location);
            print_kv("Grade", &job.grade);
            print_kv("Assignment type", &job.assignment_type);
            print_kv("Salary", &or_dash(job.salary.as_deref()));
            print_kv("Closing date", &or_dash(job.closing_date.as_deref()));
            print_kv("Recruitment email", &job.recruitment_email);
            if job.contacts {
                print_kv("Contact", &or_dash(job.contact_name.as_deref()));
                print_kv("Contact email", &or_dash(job.contact_email.as_deref()));
                print_kv("Contact phone", &or_dash(job.contact_phone.as_deref()));
            }
        }
        OutputFormat::Json => print_json(job, "{}"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
