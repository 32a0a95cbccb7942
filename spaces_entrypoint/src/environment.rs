#[cfg(test)]
mod test;

/// Name of the variable holding the deployment environment
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment a spaces binary is running in, parsed from `prod`, `dev` or `local`
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum Environment {
    /// Production environment
    #[strum(serialize = "prod")]
    Production,
    /// Dev and or staging environment
    #[strum(serialize = "dev")]
    Develop,
    /// Running on a developer machine
    #[strum(serialize = "local")]
    Local,
}

impl Environment {
    /// Read `ENVIRONMENT`. Unset or unrecognised values mean production
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn default_directives(self) -> &'static str {
        match self {
            Environment::Production => "info",
            Environment::Develop => "info,spaces=debug,spaces_handler=debug",
            Environment::Local => "info,spaces=trace,spaces_handler=trace,local_debug=trace",
        }
    }
}
