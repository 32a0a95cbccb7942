use lambda_http::{Error, Request, run, service_fn};
use spaces::inbound::lambda::handler;
use spaces_entrypoint::SpacesEntrypoint;
use spaces_handler::{build_router, config::Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = SpacesEntrypoint::default().init();
    tracing::trace!("initiating lambda");

    let config = Config::from_env(entrypoint.environment());
    let router = &build_router(&config).await;

    run(service_fn(move |event: Request| async move {
        handler(router, event).await
    }))
    .await
}
