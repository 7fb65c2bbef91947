use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The main resume, as returned by `GET /resume`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub contact: Option<Contact>,
    pub summary: Option<ProfessionalSummary>,
    #[serde(default)]
    pub skills: Vec<TechnicalSkill>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkill {
    pub id: Uuid,
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<String>,
}

impl Education {
    pub fn date_range(&self) -> String {
        format_date_range(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub lines: Vec<WorkExperienceLine>,
}

impl WorkExperience {
    pub fn date_range(&self) -> String {
        format_date_range(Some(self.start_date), self.end_date)
    }

    /// Lines in display order.
    pub fn sorted_lines(&self) -> Vec<&WorkExperienceLine> {
        let mut lines: Vec<&WorkExperienceLine> = self.lines.iter().collect();
        lines.sort_by_key(|l| l.sort_order);
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceLine {
    pub id: Uuid,
    pub content: String,
    pub sort_order: i32,
}

// ────────────────────────────────────────────────────────────────────────────
// Write payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInput {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationInput {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceInput {
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Line contents in display order.
    pub lines: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Date formatting
// ────────────────────────────────────────────────────────────────────────────

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Jan 2020"
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

/// "Jan 2020 - Mar 2022", "Jan 2020 - Present", "Mar 2022" (no start), "" (neither).
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{} - {}", format_month_year(start), format_month_year(end))
        }
        (Some(start), None) => format!("{} - Present", format_month_year(start)),
        (None, Some(end)) => format_month_year(end),
        (None, None) => String::new(),
    }
}
