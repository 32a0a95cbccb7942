//! Wiring shared by the spaces lambda and the local debug binary

use aws_sdk_dynamodb::Client;
use spaces::{
    inbound::router::SpaceRouter,
    outbound::{dynamodb::DynamoSpaceRepository, id_generator::UuidGenerator},
};

pub mod config;

use config::{Config, load_aws_config};

/// The router every binary serves requests with
pub type DynamoSpaceRouter = SpaceRouter<DynamoSpaceRepository, UuidGenerator>;

/// Build a router over the table named in `config`
pub async fn build_router(config: &Config) -> DynamoSpaceRouter {
    let sdk_config = load_aws_config().await;
    let repository = DynamoSpaceRepository::new(Client::new(&sdk_config), config.table_name.clone());
    SpaceRouter::new(repository, UuidGenerator)
}
