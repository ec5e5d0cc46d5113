//! Property-based tests for profile validation.
//!
//! Test coverage:
//! - Empty endpoint always fails, whatever the credentials
//! - Non-empty endpoint with empty/missing username always passes, whatever the password
//! - Non-empty username with empty/missing password always fails
//! - Non-empty username with non-empty password always passes

use proptest::prelude::*;
use secrecy::SecretString;

use harness_config::{ConfigError, Profile};

/// Strategy for generating endpoints in the shapes used by test clusters.
fn endpoint_strategy() -> impl Strategy<Value = String> {
    let localhost = (9200u16..=9300u16).prop_map(|port| format!("http://localhost:{}", port));

    let host = prop_oneof![
        Just("opensearch"),
        Just("search-node-1"),
        Just("es-test"),
    ];
    let domain = prop_oneof![Just("internal.local"), Just("example.com")];
    let remote = (host, domain, 9200u16..=9210u16)
        .prop_map(|(host, domain, port)| format!("https://{}.{}:{}", host, domain, port));

    prop_oneof![localhost, remote]
}

fn username_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("admin".to_string()),
        "[a-z][a-z0-9_]{0,20}".prop_map(String::from),
    ]
}

fn optional_password_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[ -~]{1,32}".prop_map(Some),
    ]
}

fn to_secret(password: Option<String>) -> Option<SecretString> {
    password.map(|p| SecretString::new(p.into()))
}

proptest! {
    #[test]
    fn prop_empty_endpoint_always_fails(
        username in proptest::option::of(username_strategy()),
        password in optional_password_strategy(),
    ) {
        let profile = Profile {
            endpoint: String::new(),
            username,
            password: to_secret(password),
        };
        prop_assert!(matches!(profile.validate(), Err(ConfigError::MissingEndpoint)));
    }

    #[test]
    fn prop_anonymous_profile_always_valid(
        endpoint in endpoint_strategy(),
        empty_username in any::<bool>(),
        password in optional_password_strategy(),
    ) {
        let profile = Profile {
            endpoint,
            username: empty_username.then(String::new),
            password: to_secret(password),
        };
        prop_assert!(profile.validate().is_ok());
    }

    #[test]
    fn prop_username_without_password_always_fails(
        endpoint in endpoint_strategy(),
        username in username_strategy(),
        empty_password in any::<bool>(),
    ) {
        let profile = Profile {
            endpoint,
            username: Some(username),
            password: to_secret(empty_password.then(String::new)),
        };
        prop_assert!(matches!(profile.validate(), Err(ConfigError::MissingPassword)));
    }

    #[test]
    fn prop_username_with_password_always_valid(
        endpoint in endpoint_strategy(),
        username in username_strategy(),
        password in "[ -~]{1,32}",
    ) {
        let profile = Profile::with_basic_auth(endpoint, username, SecretString::new(password.into()));
        prop_assert!(profile.validate().is_ok());
    }
}
