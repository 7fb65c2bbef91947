use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{ProfessionalSummary, Resume, WorkExperienceLine};

/// A named, tailored view over the main resume.
///
/// List endpoints return only the header fields, so the collections default
/// to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedResume {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub summary: Option<ScopedProfessionalSummary>,
    #[serde(default)]
    pub skills: Vec<ScopedSkill>,
    #[serde(default)]
    pub work_experiences: Vec<ScopedWorkExperience>,
}

impl ScopedResume {
    pub fn includes_skill(&self, skill_id: Uuid) -> bool {
        self.skills.iter().any(|s| s.skill_id == skill_id)
    }

    pub fn includes_work_experience(&self, work_experience_id: Uuid) -> bool {
        self.work_experiences
            .iter()
            .any(|w| w.work_experience_id == work_experience_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedProfessionalSummary {
    pub id: Uuid,
    pub content: String,
}

/// Inclusion of one main-resume `TechnicalSkill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedSkill {
    pub id: Uuid,
    pub skill_id: Uuid,
}

/// Inclusion of one main-resume `WorkExperience`, with its own line sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedWorkExperience {
    pub id: Uuid,
    pub work_experience_id: Uuid,
    #[serde(default)]
    pub lines: Vec<ScopedWorkExperienceLine>,
}

/// Either points at an original line, carries custom text, or both
/// (custom text wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedWorkExperienceLine {
    pub id: Uuid,
    pub original_line_id: Option<Uuid>,
    pub content: Option<String>,
    pub sort_order: i32,
}

impl ScopedWorkExperienceLine {
    pub fn is_custom(&self) -> bool {
        self.original_line_id.is_none()
    }
}

/// Renders the tailored resume a scoped resume describes.
///
/// Contact and education pass through. Skills and work experiences keep the
/// main resume's order and are filtered to the ones the scoped resume
/// references. A scoped work experience with lines replaces the original
/// lines; one without lines keeps them.
pub fn project_scoped(resume: &Resume, scoped: &ScopedResume) -> Resume {
    let skill_ids: HashSet<Uuid> = scoped.skills.iter().map(|s| s.skill_id).collect();
    let scoped_experiences: HashMap<Uuid, &ScopedWorkExperience> = scoped
        .work_experiences
        .iter()
        .map(|w| (w.work_experience_id, w))
        .collect();

    let summary = match &scoped.summary {
        Some(s) => Some(ProfessionalSummary {
            id: s.id,
            content: s.content.clone(),
        }),
        None => resume.summary.clone(),
    };

    let work_experiences = resume
        .work_experiences
        .iter()
        .filter_map(|we| {
            let scoped_we = scoped_experiences.get(&we.id)?;
            let mut projected = we.clone();
            if !scoped_we.lines.is_empty() {
                projected.lines = resolve_lines(&we.lines, &scoped_we.lines);
            }
            Some(projected)
        })
        .collect();

    Resume {
        contact: resume.contact.clone(),
        summary,
        skills: resume
            .skills
            .iter()
            .filter(|s| skill_ids.contains(&s.id))
            .cloned()
            .collect(),
        education: resume.education.clone(),
        work_experiences,
    }
}

fn resolve_lines(
    originals: &[WorkExperienceLine],
    scoped: &[ScopedWorkExperienceLine],
) -> Vec<WorkExperienceLine> {
    let by_id: HashMap<Uuid, &WorkExperienceLine> = originals.iter().map(|l| (l.id, l)).collect();

    let mut ordered: Vec<&ScopedWorkExperienceLine> = scoped.iter().collect();
    ordered.sort_by_key(|l| l.sort_order);

    ordered
        .into_iter()
        .filter_map(|line| {
            let content = match (&line.content, line.original_line_id) {
                (Some(custom), _) => custom.clone(),
                (None, Some(original_id)) => by_id.get(&original_id)?.content.clone(),
                (None, None) => return None,
            };
            Some(WorkExperienceLine {
                id: line.id,
                content,
                sort_order: line.sort_order,
            })
        })
        .collect()
}
