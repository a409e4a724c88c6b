//! Option key tests

use opconf_domain::{Error, OptionKey, UnknownOptionPolicy};

#[test]
fn test_option_names_round_trip() {
    for key in OptionKey::ALL {
        assert_eq!(key.as_str().parse::<OptionKey>().unwrap(), key);
        assert_eq!(key.to_string(), key.as_str());
    }
}

#[test]
fn test_fixed_option_set() {
    let names: Vec<&str> = OptionKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        names,
        [
            "verify",
            "cert",
            "timeout",
            "allow_redirects",
            "max_redirects",
            "proxies",
            "use_env_proxies",
            "retries"
        ]
    );
}

#[test]
fn test_unknown_name_is_rejected() {
    let err = "Verify".parse::<OptionKey>().unwrap_err();
    assert!(matches!(err, Error::UnknownOption { .. }));
}

#[test]
fn test_policy_default_rejects() {
    assert_eq!(UnknownOptionPolicy::default(), UnknownOptionPolicy::Reject);
}
