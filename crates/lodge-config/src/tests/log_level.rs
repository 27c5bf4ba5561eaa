use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_names_when_parsed_then_levels_match() {
    for (name, expected) in [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ] {
        assert_eq!(LogLevel::from_str(name).unwrap().0, expected);
    }
}

#[test]
fn given_mixed_case_name_when_parsed_then_level_matches() {
    assert_eq!(LogLevel::from_str("DeBuG").unwrap().0, LevelFilter::Debug);
}

#[test]
fn given_unknown_name_when_parsed_then_falls_back_to_info() {
    assert_eq!(
        LogLevel::from_str("chatty").unwrap().0,
        LevelFilter::Info
    );
}
