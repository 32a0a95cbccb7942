#![deny(missing_docs)]
//! Shared start-up for the spaces binaries: loads a `.env` file, installs the panic hook
//! and configures the tracing subscriber for the current [Environment]

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

mod environment;

pub use environment::Environment;

/// Defines how a spaces binary is initialized
#[derive(Debug)]
pub struct SpacesEntrypoint {
    env: Environment,
}

impl Default for SpacesEntrypoint {
    fn default() -> Self {
        SpacesEntrypoint {
            env: Environment::from_env(),
        }
    }
}

/// sentinel struct which guarantees that we called [SpacesEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// The environment the binary was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;

impl SpacesEntrypoint {
    /// Initialize for an explicit [Environment] instead of reading `ENVIRONMENT`
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// `RUST_LOG` when set, otherwise [Environment::default_directives]
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.env.default_directives()))
    }

    fn output(&self) -> OutputLayer {
        match self.env {
            Environment::Local => fmt::layer()
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            // lambda ships stdout to cloudwatch, one flattened json event per line
            Environment::Production | Environment::Develop => fmt::layer()
                .with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .boxed(),
        }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        tracing_subscriber::registry()
            .with(self.output())
            .with(self.filter())
            .init();

        tracing::debug!(environment = %self.env, "initialized entrypoint");
        InitializedEntrypoint(self.env)
    }
}
