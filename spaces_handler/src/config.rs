use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
pub use spaces_entrypoint::Environment;


/// Name of the variable holding the spaces table name
const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Runtime configuration of the spaces binaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// self explanatory
    pub environment: Environment,
    /// the spaces table. Checked on the first store call, not at start-up
    pub table_name: Option<String>,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env(environment: Environment) -> Self {
        let config = Self::new(environment, std::env::var(TABLE_NAME_VAR).ok());
        if config.table_name.is_none() {
            tracing::warn!("{TABLE_NAME_VAR} is not set, every store call will fail");
        }
        config
    }

    /// An empty table name counts as unset
    pub fn new(environment: Environment, table_name: Option<String>) -> Self {
        Self {
            environment,
            table_name: table_name.filter(|name| !name.is_empty()),
        }
    }
}

/// Aws config for the current region, falling back to us-east-1
pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
