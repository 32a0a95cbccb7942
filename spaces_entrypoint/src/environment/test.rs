use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use super::*;

const ALL: [Environment; 3] = [
    Environment::Production,
    Environment::Develop,
    Environment::Local,
];

#[test]
fn test_parse_known_environments() {
    assert_eq!(Environment::from_str("prod"), Ok(Environment::Production));
    assert_eq!(Environment::from_str("dev"), Ok(Environment::Develop));
    assert_eq!(Environment::from_str("local"), Ok(Environment::Local));
}

#[test]
fn test_parse_unknown_environment() {
    assert_eq!(
        Environment::from_str("staging"),
        Err(strum::ParseError::VariantNotFound)
    );
    // values are case sensitive, and variant names are not accepted
    assert!(Environment::from_str("PROD").is_err());
    assert!(Environment::from_str("Production").is_err());
}

#[test]
fn test_display_matches_parse() {
    for env in ALL {
        assert_eq!(Environment::from_str(&env.to_string()), Ok(env));
    }
}

#[test]
fn test_default_directives_are_valid() {
    for env in ALL {
        assert!(
            EnvFilter::try_new(env.default_directives()).is_ok(),
            "{env}"
        );
    }
}
