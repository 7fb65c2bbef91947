//! Scoped-resume endpoints.

use serde::Serialize;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::scoped::ScopedResume;

#[derive(Serialize)]
struct NameRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct DuplicateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IncludeSkillRequest {
    skill_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IncludeWorkExperienceRequest {
    work_experience_id: Uuid,
}

/// GET /scoped-resumes
pub async fn list_scoped_resumes(api: &ApiClient) -> Result<Vec<ScopedResume>, ApiError> {
    api.get("/scoped-resumes").await
}

/// GET /scoped-resumes/:id
pub async fn get_scoped_resume(api: &ApiClient, id: Uuid) -> Result<ScopedResume, ApiError> {
    api.get(&format!("/scoped-resumes/{id}")).await
}

/// POST /scoped-resumes
pub async fn create_scoped_resume(api: &ApiClient, name: &str) -> Result<ScopedResume, ApiError> {
    api.post("/scoped-resumes", &NameRequest { name }).await
}

/// PUT /scoped-resumes/:id
pub async fn rename_scoped_resume(
    api: &ApiClient,
    id: Uuid,
    name: &str,
) -> Result<ScopedResume, ApiError> {
    api.put(&format!("/scoped-resumes/{id}"), &NameRequest { name })
        .await
}

/// POST /scoped-resumes/:id/duplicate
///
/// Without a name the backend picks one (typically "<name> (copy)").
pub async fn duplicate_scoped_resume(
    api: &ApiClient,
    id: Uuid,
    name: Option<&str>,
) -> Result<ScopedResume, ApiError> {
    api.post(
        &format!("/scoped-resumes/{id}/duplicate"),
        &DuplicateRequest { name },
    )
    .await
}

/// DELETE /scoped-resumes/:id
pub async fn delete_scoped_resume(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete::<serde_json::Value>(&format!("/scoped-resumes/{id}"))
        .await
        .map(|_| ())
}

/// POST /scoped-resumes/:id/skills (include) or
/// DELETE /scoped-resumes/:id/skills/:skill_id (exclude)
pub async fn set_skill_included(
    api: &ApiClient,
    scoped_resume_id: Uuid,
    skill_id: Uuid,
    included: bool,
) -> Result<(), ApiError> {
    let result = if included {
        api.post::<_, serde_json::Value>(
            &format!("/scoped-resumes/{scoped_resume_id}/skills"),
            &IncludeSkillRequest { skill_id },
        )
        .await
    } else {
        api.delete::<serde_json::Value>(&format!(
            "/scoped-resumes/{scoped_resume_id}/skills/{skill_id}"
        ))
        .await
    };
    result.map(|_| ())
}

/// POST /scoped-resumes/:id/work-experiences (include) or
/// DELETE /scoped-resumes/:id/work-experiences/:work_experience_id (exclude)
pub async fn set_work_experience_included(
    api: &ApiClient,
    scoped_resume_id: Uuid,
    work_experience_id: Uuid,
    included: bool,
) -> Result<(), ApiError> {
    let result = if included {
        api.post::<_, serde_json::Value>(
            &format!("/scoped-resumes/{scoped_resume_id}/work-experiences"),
            &IncludeWorkExperienceRequest { work_experience_id },
        )
        .await
    } else {
        api.delete::<serde_json::Value>(&format!(
            "/scoped-resumes/{scoped_resume_id}/work-experiences/{work_experience_id}"
        ))
        .await
    };
    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_backend;
    use axum::extract::Path;
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn scoped_json(id: Uuid, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_accepts_bare_array() {
        let router = Router::new().route(
            "/api/scoped-resumes",
            get(|| async {
                Json(json!([
                    scoped_json(Uuid::new_v4(), "Frontend Role"),
                    scoped_json(Uuid::new_v4(), "Platform Role")
                ]))
            }),
        );
        let api = ApiClient::new(spawn_backend(router).await);

        let list = list_scoped_resumes(&api).await.unwrap();
        let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Frontend Role", "Platform Role"]);
    }

    #[tokio::test]
    async fn test_duplicate_omits_name_when_absent() {
        let router = Router::new().route(
            "/api/scoped-resumes/:id/duplicate",
            post(|Path(id): Path<Uuid>, Json(body): Json<Value>| async move {
                let name = body
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{id} (copy)"));
                Json(json!({"data": scoped_json(Uuid::new_v4(), &name)}))
            }),
        );
        let api = ApiClient::new(spawn_backend(router).await);
        let source = Uuid::new_v4();

        let copy = duplicate_scoped_resume(&api, source, None).await.unwrap();
        assert_eq!(copy.name, format!("{source} (copy)"));

        let named = duplicate_scoped_resume(&api, source, Some("Backend Role"))
            .await
            .unwrap();
        assert_eq!(named.name, "Backend Role");
    }

    #[tokio::test]
    async fn test_skill_inclusion_uses_post_and_delete() {
        let router = Router::new()
            .route(
                "/api/scoped-resumes/:id/skills",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({"data": {"skillId": body["skillId"]}}))
                }),
            )
            .route(
                "/api/scoped-resumes/:id/skills/:skill_id",
                delete(|| async { Json(json!({"data": {"removed": true}})) }),
            );
        let api = ApiClient::new(spawn_backend(router).await);
        let (scoped_id, skill_id) = (Uuid::new_v4(), Uuid::new_v4());

        set_skill_included(&api, scoped_id, skill_id, true).await.unwrap();
        set_skill_included(&api, scoped_id, skill_id, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_route_is_a_server_error() {
        let router = Router::new();
        let api = ApiClient::new(spawn_backend(router).await);

        let err = set_work_experience_included(&api, Uuid::new_v4(), Uuid::new_v4(), true)
            .await
            .unwrap_err();
        // axum's fallback 404 has an empty body, which parses as null.
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "HTTP 404");
    }
}
