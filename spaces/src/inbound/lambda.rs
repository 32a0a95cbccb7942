//! The lambda http adapter

use lambda_http::{Body, Request, RequestExt, Response, http::header::CONTENT_TYPE};

use crate::{
    domain::{
        codec,
        model::{ClientError, SpaceError},
        ports::{IdGenerator, SpaceRepository},
    },
    inbound::router::{SpaceRequest, SpaceResponse, SpaceRouter},
};


/// Name of the query string parameter selecting a single space
const ID_PARAM: &str = "id";

impl TryFrom<&Request> for SpaceRequest {
    type Error = ClientError;

    fn try_from(event: &Request) -> Result<Self, ClientError> {
        let id = event
            .query_string_parameters_ref()
            .and_then(|params| params.first(ID_PARAM))
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        if id.is_none() {
            tracing::trace!("no id query parameter supplied");
        }

        let body = match event.body() {
            Body::Empty => None,
            Body::Text(text) => Some(text.clone()),
            Body::Binary(bytes) => Some(
                std::str::from_utf8(bytes)
                    .map_err(|err| {
                        tracing::warn!(error=?err, "request body is not utf-8");
                        ClientError::InvalidJson("request body must be valid UTF-8".to_string())
                    })?
                    .to_owned(),
            ),
        }
        .filter(|body| !body.is_empty());

        Ok(SpaceRequest {
            method: event.method().as_str().to_owned(),
            id,
            body,
        })
    }
}

/// Render a [SpaceResponse] as a json http response
pub fn render(response: SpaceResponse) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(response.status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(codec::encode(&response.body)?))?)
}

/// Entry point for every invocation
#[tracing::instrument(skip(router, event))]
pub async fn handler<R, G>(
    router: &SpaceRouter<R, G>,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error>
where
    R: SpaceRepository,
    G: IdGenerator,
{
    let response = match SpaceRequest::try_from(&event) {
        Ok(request) => router.handle(request).await,
        Err(err) => SpaceResponse::from(SpaceError::from(err)),
    };
    tracing::trace!(status = %response.status, "handled request");
    render(response)
}
