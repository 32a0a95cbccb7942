//! Dispatches space requests by http method and maps failures onto status codes

use std::str::FromStr;

use lambda_http::http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::{
    codec,
    model::{CreatedSpace, SpaceError},
    ports::{IdGenerator, SpaceRepository},
    validation::{FieldUpdate, SpaceCandidate},
};


const SPACE_NOT_FOUND: &str = "Space not found.";
const SPACE_DELETED: &str = "Space deleted.";
const MISSING_UPDATE_ARGS: &str = "Bad Request: Please provide an id and a field to update.";
const MISSING_DELETE_ID: &str = "Bad Request: Please provide a valid ID to delete.";
const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

/// The methods the spaces api supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SpaceMethod {
    /// list, or fetch one by id
    Get,
    /// create
    Post,
    /// update a single field
    Put,
    /// delete by id
    Delete,
}

/// Transport independent view of an inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceRequest {
    /// The raw http method
    pub method: String,
    /// The `id` query parameter, if one was supplied and is non empty
    pub id: Option<String>,
    /// The raw request body, if there is one
    pub body: Option<String>,
}

impl SpaceRequest {
    /// A request with no id and no body
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    /// set the `id` query parameter
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// set the raw body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A status code and a json body
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceResponse {
    /// The http status
    pub status: StatusCode,
    /// The json payload
    pub body: Value,
}

impl SpaceResponse {
    fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self, SpaceError> {
        let body = serde_json::to_value(body)?;
        Ok(Self { status, body })
    }

    fn message(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }),
        }
    }
}

impl From<SpaceError> for SpaceResponse {
    fn from(err: SpaceError) -> Self {
        match err {
            SpaceError::Client(err) => {
                tracing::warn!(error=%err, "rejected client input");
                SpaceResponse::message(StatusCode::BAD_REQUEST, &err.to_string())
            }
            err @ (SpaceError::Server(_) | SpaceError::Serialization(_)) => {
                tracing::error!(error=?err, "failed to handle space request");
                SpaceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Routes [SpaceRequest]s to the [SpaceRepository].
/// Holds no per request state, so one router serves every invocation of the process.
#[derive(Debug, Clone)]
pub struct SpaceRouter<R, G>
where
    R: SpaceRepository,
    G: IdGenerator,
{
    /// The underlying space repository
    repository: R,
    /// Source of ids for new spaces
    ids: G,
}

impl<R, G> SpaceRouter<R, G>
where
    R: SpaceRepository,
    G: IdGenerator,
{
    /// Creates a new SpaceRouter
    pub fn new(repository: R, ids: G) -> Self {
        Self { repository, ids }
    }

    /// The repository requests are routed to
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Handle one request. Never fails: every error is turned into a response
    #[tracing::instrument(skip(self, request), fields(method = %request.method, id = ?request.id))]
    pub async fn handle(&self, request: SpaceRequest) -> SpaceResponse {
        let Ok(method) = SpaceMethod::from_str(&request.method) else {
            tracing::warn!("unsupported method");
            return SpaceResponse::message(
                StatusCode::METHOD_NOT_ALLOWED,
                &format!("Unsupported method: {}", request.method),
            );
        };

        let SpaceRequest { id, body, .. } = request;
        let result = match method {
            SpaceMethod::Get => self.get(id.as_deref()).await,
            SpaceMethod::Post => self.post(body.as_deref()).await,
            SpaceMethod::Put => self.put(id.as_deref(), body.as_deref()).await,
            SpaceMethod::Delete => self.delete(id.as_deref()).await,
        };

        result.unwrap_or_else(SpaceResponse::from)
    }

    async fn get(&self, id: Option<&str>) -> Result<SpaceResponse, SpaceError> {
        let Some(id) = id else {
            let spaces = self.repository.list().await?;
            return SpaceResponse::json(StatusCode::OK, &spaces);
        };

        match self.repository.get_by_id(id).await? {
            Some(space) => SpaceResponse::json(StatusCode::OK, &space),
            None => Ok(SpaceResponse::message(StatusCode::NOT_FOUND, SPACE_NOT_FOUND)),
        }
    }

    async fn post(&self, body: Option<&str>) -> Result<SpaceResponse, SpaceError> {
        let id = self.ids.new_id();
        let parsed = codec::parse(body.unwrap_or_default())?;
        let space = SpaceCandidate::from_value(parsed)?
            .with_id(id)
            .into_record()?;

        self.repository.create(&space).await?;
        tracing::info!(id=%space.id, "created space");

        SpaceResponse::json(StatusCode::CREATED, &CreatedSpace { id: &space.id })
    }

    async fn put(&self, id: Option<&str>, body: Option<&str>) -> Result<SpaceResponse, SpaceError> {
        let (Some(id), Some(body)) = (id, body) else {
            return Ok(SpaceResponse::message(
                StatusCode::BAD_REQUEST,
                MISSING_UPDATE_ARGS,
            ));
        };

        let update = FieldUpdate::from_value(codec::parse(body)?)?;
        let updated = self
            .repository
            .update_field(id, update.field, &update.value)
            .await?;

        SpaceResponse::json(StatusCode::NO_CONTENT, &updated)
    }

    async fn delete(&self, id: Option<&str>) -> Result<SpaceResponse, SpaceError> {
        let Some(id) = id else {
            return Ok(SpaceResponse::message(
                StatusCode::BAD_REQUEST,
                MISSING_DELETE_ID,
            ));
        };

        self.repository.delete_by_id(id).await?;
        tracing::info!(id=%id, "deleted space");

        Ok(SpaceResponse::message(StatusCode::OK, SPACE_DELETED))
    }
}
