//! Drives the spaces handler against the configured table from a developer machine:
//! lists every space, creates one in Sydney and reads it back.

use std::collections::HashMap;

use anyhow::Context;
use lambda_http::{Body, Request, RequestExt, Response, http};
use serde_json::Value;
use spaces::{domain::codec, inbound::lambda::handler};
use spaces_entrypoint::{Environment, SpacesEntrypoint};
use spaces_handler::{DynamoSpaceRouter, build_router, config::Config};

fn request(method: &str, id: Option<&str>, body: Body) -> anyhow::Result<Request> {
    let request = http::Request::builder()
        .method(method)
        .uri("https://localhost/spaces")
        .body(body)?;

    Ok(match id {
        Some(id) => request
            .with_query_string_parameters(HashMap::from([("id".to_string(), id.to_string())])),
        None => request,
    })
}

async fn send(router: &DynamoSpaceRouter, request: Request) -> anyhow::Result<Option<Value>> {
    let method = request.method().clone();
    let response: Response<Body> = handler(router, request)
        .await
        .map_err(|err| anyhow::anyhow!(err))?;

    let raw = String::from_utf8_lossy(response.body().as_ref()).into_owned();
    let body: Option<Value> = codec::try_parse(&raw);
    tracing::info!(%method, status = %response.status(), body = ?body, "response");
    Ok(body)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SpacesEntrypoint::new(Environment::Local).init();

    let config = Config::from_env(Environment::Local);
    let router = build_router(&config).await;

    send(&router, request("GET", None, Body::Empty)?).await?;

    let created = send(
        &router,
        request(
            "POST",
            None,
            Body::from(r#"{"location":"Sydney","name":"Local debug space"}"#),
        )?,
    )
    .await?;

    let id = created
        .as_ref()
        .and_then(|body| body.get("id"))
        .and_then(Value::as_str)
        .context("create did not return an id")?;

    send(&router, request("GET", Some(id), Body::Empty)?).await?;

    Ok(())
}
