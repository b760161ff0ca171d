use sblogger::Level;
use sblogger::level::passes;

#[test]
fn ordering_is_by_severity() {
    let all = Level::all();
    for pair in all.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(all[0], Level::Trace);
    assert_eq!(all[6], Level::Off);
}

#[test]
fn parses_names_and_abbreviations() {
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("wn".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);
    assert_eq!("none".parse::<Level>().unwrap(), Level::Off);
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn parse_error_converts_to_crate_error() {
    let err: sblogger::Error = "loud".parse::<Level>().unwrap_err().into();
    assert!(matches!(err, sblogger::Error::InvalidLevel(ref s) if s == "loud"));
}

#[test]
fn words_used_by_tokens() {
    assert_eq!(Level::Critical.name(), "Critical");
    assert_eq!(Level::Critical.upper_name(), "CRITICAL");
    assert_eq!(Level::Warn.as_str(), "warn");
}

#[test]
fn gate_matches_threshold_table() {
    assert!(!passes(Level::Debug, Level::Info));
    assert!(passes(Level::Debug, Level::Debug));
    assert!(passes(Level::Debug, Level::Trace));
    assert!(!passes(Level::Critical, Level::Off));
}
