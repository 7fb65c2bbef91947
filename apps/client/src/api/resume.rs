//! Main-resume endpoints. Thin typed wrappers: one write, one confirmation.

use serde::Serialize;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::resume::{
    Contact, ContactInput, Education, EducationInput, ProfessionalSummary, Resume, SkillInput,
    TechnicalSkill, WorkExperience, WorkExperienceInput,
};

#[derive(Serialize)]
struct SummaryRequest<'a> {
    content: &'a str,
}

/// GET /resume
pub async fn get_resume(api: &ApiClient) -> Result<Resume, ApiError> {
    api.get("/resume").await
}

/// PUT /contact
pub async fn update_contact(api: &ApiClient, input: &ContactInput) -> Result<Contact, ApiError> {
    api.put("/contact", input).await
}

/// PUT /summary
pub async fn update_summary(api: &ApiClient, content: &str) -> Result<ProfessionalSummary, ApiError> {
    api.put("/summary", &SummaryRequest { content }).await
}

/// POST /skills
pub async fn create_skill(api: &ApiClient, input: &SkillInput) -> Result<TechnicalSkill, ApiError> {
    api.post("/skills", input).await
}

/// PUT /skills/:id
pub async fn update_skill(
    api: &ApiClient,
    id: Uuid,
    input: &SkillInput,
) -> Result<TechnicalSkill, ApiError> {
    api.put(&format!("/skills/{id}"), input).await
}

/// DELETE /skills/:id
pub async fn delete_skill(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete::<serde_json::Value>(&format!("/skills/{id}"))
        .await
        .map(|_| ())
}

/// POST /education
pub async fn create_education(
    api: &ApiClient,
    input: &EducationInput,
) -> Result<Education, ApiError> {
    api.post("/education", input).await
}

/// PUT /education/:id
pub async fn update_education(
    api: &ApiClient,
    id: Uuid,
    input: &EducationInput,
) -> Result<Education, ApiError> {
    api.put(&format!("/education/{id}"), input).await
}

/// DELETE /education/:id
pub async fn delete_education(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete::<serde_json::Value>(&format!("/education/{id}"))
        .await
        .map(|_| ())
}

/// POST /work-experiences
pub async fn create_work_experience(
    api: &ApiClient,
    input: &WorkExperienceInput,
) -> Result<WorkExperience, ApiError> {
    api.post("/work-experiences", input).await
}

/// PUT /work-experiences/:id
pub async fn update_work_experience(
    api: &ApiClient,
    id: Uuid,
    input: &WorkExperienceInput,
) -> Result<WorkExperience, ApiError> {
    api.put(&format!("/work-experiences/{id}"), input).await
}

/// DELETE /work-experiences/:id
pub async fn delete_work_experience(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete::<serde_json::Value>(&format!("/work-experiences/{id}"))
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_backend;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_get_resume_reads_all_sections() {
        let skill_id = Uuid::new_v4();
        let router = Router::new().route(
            "/api/resume",
            get(move || async move {
                Json(json!({
                    "data": {
                        "contact": {
                            "id": Uuid::new_v4(),
                            "fullName": "Ada Lovelace",
                            "email": "ada@example.com"
                        },
                        "summary": {"id": Uuid::new_v4(), "content": "Analyst"},
                        "skills": [{"id": skill_id, "category": "Languages", "name": "Rust"}],
                        "education": [],
                        "workExperiences": []
                    }
                }))
            }),
        );
        let api = ApiClient::new(spawn_backend(router).await);

        let resume = get_resume(&api).await.unwrap();
        assert_eq!(resume.contact.unwrap().full_name, "Ada Lovelace");
        assert_eq!(resume.summary.unwrap().content, "Analyst");
        assert_eq!(resume.skills[0].id, skill_id);
    }

    #[tokio::test]
    async fn test_update_skill_puts_to_item_path() {
        let router = Router::new().route(
            "/api/skills/:id",
            put(|Path(id): Path<Uuid>, Json(body): Json<Value>| async move {
                Json(json!({"data": {"id": id, "category": body["category"], "name": body["name"]}}))
            })
            .delete(|| async { Json(json!({"data": {"deleted": true}})) }),
        );
        let api = ApiClient::new(spawn_backend(router).await);
        let id = Uuid::new_v4();

        let updated = update_skill(
            &api,
            id,
            &SkillInput {
                category: "Frameworks".to_string(),
                name: "Axum".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Axum");

        delete_skill(&api, id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_education_surfaces_rejection() {
        let router = Router::new().route(
            "/api/education/:id",
            axum::routing::delete(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": "Education is referenced by a scoped resume"})),
                )
            }),
        );
        let api = ApiClient::new(spawn_backend(router).await);

        let err = delete_education(&api, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.status(), 409);
        assert_eq!(err.message(), "Education is referenced by a scoped resume");
    }
}
