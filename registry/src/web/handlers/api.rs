//! REST API handlers
//!
//! HTTP endpoints over the engineer service. Field validation lives entirely
//! here: the service and store only ever see well-formed input, and domain
//! errors coming back are translated to status codes at this boundary
//! (not found → 404, duplicate email → 409, bad input → 422).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::core::EngineerService;
use crate::traits::EngineerStore;
use shared::{CertificationLevel, CloudPlatform, EngineerDraft, EngineerPatch, RegistryError};

/// Error response with the status code already decided
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let status = match err {
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::DuplicateEmail { .. } => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEngineerRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub hourly_rate: f64,
    pub certification_level: CertificationLevel,
}

impl CreateEngineerRequest {
    /// Validate field constraints and produce a draft for the service
    pub fn into_draft(self) -> Result<EngineerDraft, ApiError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_rate(self.hourly_rate, self.certification_level)?;

        Ok(EngineerDraft {
            name: self.name,
            email: self.email,
            specialty: self.specialty,
            hourly_rate: self.hourly_rate,
            certification_level: self.certification_level,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UpdateEngineerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub certification_level: Option<CertificationLevel>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl UpdateEngineerRequest {
    /// Validate the fields that are present and produce a patch
    pub fn into_patch(self) -> Result<EngineerPatch, ApiError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(rate) = self.hourly_rate {
            if rate <= 0.0 || rate > 500.0 {
                return Err(ApiError::validation("hourly_rate must be in (0, 500]"));
            }
        }

        Ok(EngineerPatch {
            name: self.name,
            email: self.email,
            specialty: self.specialty,
            hourly_rate: self.hourly_rate,
            certification_level: self.certification_level,
            is_available: self.is_available,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificationRequest {
    pub cert_code: String,
    pub platform: CloudPlatform,
}

fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() || name.len() > 100 {
        return Err(ApiError::validation("name must be 1-100 characters"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(ApiError::validation(format!("invalid email: {}", email)));
    }
    Ok(())
}

fn validate_rate(rate: f64, level: CertificationLevel) -> Result<(), ApiError> {
    if rate <= 0.0 || rate > 500.0 {
        return Err(ApiError::validation("hourly_rate must be in (0, 500]"));
    }
    // Rate plausibility bounds per tier
    if level == CertificationLevel::Junior && rate > 100.0 {
        return Err(ApiError::validation(
            "junior rate should not exceed 100/hour",
        ));
    }
    if level >= CertificationLevel::Senior && rate < 100.0 {
        return Err(ApiError::validation(
            "senior rate should be at least 100/hour",
        ));
    }
    Ok(())
}

fn validate_cert_code(cert_code: &str) -> Result<(), ApiError> {
    if cert_code.len() < 2 || cert_code.len() > 20 {
        return Err(ApiError::validation("cert_code must be 2-20 characters"));
    }
    Ok(())
}

/// Create a new engineer - POST /engineers
pub async fn create_engineer<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Json(request): Json<CreateEngineerRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    let draft = request.into_draft()?;
    let engineer = service.create_engineer(draft).await.map_err(|e| {
        warn!("Create rejected: {}", e);
        ApiError::from(e)
    })?;
    Ok((StatusCode::CREATED, Json(engineer)))
}

/// List all engineers - GET /engineers
pub async fn list_engineers<S>(State(service): State<Arc<EngineerService<S>>>) -> impl IntoResponse
where
    S: EngineerStore,
{
    Json(service.list_engineers().await)
}

/// Get a single engineer - GET /engineers/:id
pub async fn get_engineer<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    let engineer = service.get_engineer(id).await?;
    Ok(Json(engineer))
}

/// Partially update an engineer - PATCH /engineers/:id
pub async fn update_engineer<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateEngineerRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    let patch = request.into_patch()?;
    let engineer = service.update_engineer(id, patch).await?;
    Ok(Json(engineer))
}

/// Delete an engineer - DELETE /engineers/:id
pub async fn delete_engineer<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    service.delete_engineer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a certification - POST /engineers/:id/certifications
pub async fn add_certification<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Path(id): Path<u64>,
    Json(request): Json<CertificationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    validate_cert_code(&request.cert_code)?;
    let engineer = service.add_certification(id, &request.cert_code).await?;
    Ok(Json(engineer))
}

/// List available engineers - GET /engineers/available
pub async fn list_available<S>(State(service): State<Arc<EngineerService<S>>>) -> impl IntoResponse
where
    S: EngineerStore,
{
    Json(service.list_available().await)
}

/// Find available engineers certified for a platform - GET /engineers/platform/:platform
pub async fn find_for_platform<S>(
    State(service): State<Arc<EngineerService<S>>>,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: EngineerStore,
{
    let platform: CloudPlatform = platform.parse().map_err(ApiError::validation)?;
    Ok(Json(service.find_engineers_for_platform(platform).await))
}

/// Revenue projection report - GET /reports/revenue
pub async fn revenue_report<S>(State(service): State<Arc<EngineerService<S>>>) -> impl IntoResponse
where
    S: EngineerStore,
{
    Json(service.revenue_report().await)
}

/// Health check - GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
