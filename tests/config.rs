use sblogger::{Config, Error, LineEnding, Logger};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn full_config_parses() {
    let config = Config::parse(
        r#"
[general]
level = "info"

[logger]
target = "daily"
path = "~/logs/app-%F.log"
format = "[%F %T] [%^lvl] %msg"
auto_flush = false
line_ending = "crlf"

[rotation]
hour = 3
minute = 15
poll_interval_ms = 250

[internal]
level = "error"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level(), sblogger::Level::Info);
    assert_eq!(config.logger.target, "daily");
    assert_eq!(config.logger.auto_flush, Some(false));
    assert_eq!(config.parse_line_ending(), LineEnding::CrLf);
    assert_eq!(config.rotation.hour, 3);
    assert_eq!(config.rotation.second, 0);
    assert_eq!(config.poll_interval(), Duration::from_millis(250));
    assert_eq!(config.internal_level(), sblogger::Level::Error);
}

#[test]
fn bad_values_fall_back() {
    let config =
        Config::parse("[general]\nlevel = \"loud\"\n[logger]\nline_ending = \"?\"\n").unwrap();
    assert_eq!(config.parse_level(), sblogger::Level::Trace);
    assert_eq!(config.parse_line_ending(), LineEnding::default());
}

#[test]
fn syntax_error_is_reported() {
    assert!(matches!(
        Config::parse("[logger\n"),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.logger.target, "stdout");
}

#[test]
fn sources_merge_with_including_file_winning() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("base.toml");
    let shared = dir.path().join("shared.toml");

    fs::write(
        &shared,
        "[logger]\ntarget = \"stderr\"\nformat = \"%msg\"\n[rotation]\nhour = 4\n",
    )
    .unwrap();
    fs::write(
        &base,
        format!(
            "source = \"{}\"\n[logger]\nformat = \"[%^lvl] %msg\"\n",
            shared.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&base).unwrap();
    assert_eq!(config.logger.target, "stderr");
    assert_eq!(config.logger.format, "[%^lvl] %msg");
    assert_eq!(config.rotation.hour, 4);
}

#[test]
fn cyclic_sources_are_rejected() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.toml");
    let b = dir.path().join("b.toml");
    fs::write(&a, format!("source = \"{}\"\n", b.display())).unwrap();
    fs::write(&b, format!("source = \"{}\"\n", a.display())).unwrap();

    assert!(matches!(
        Config::load_from(&a),
        Err(Error::CyclicInclude(_))
    ));
}

#[test]
fn from_config_builds_file_logger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg.log");
    let config = Config::parse(&format!(
        "[logger]\ntarget = \"file\"\npath = \"{}\"\nformat = \"> %msg\"\nline_ending = \"lf\"\n",
        path.display()
    ))
    .unwrap();

    {
        let mut logger = sblogger::from_config(&config).unwrap();
        assert_eq!(logger.format(), "> %msg");
        logger.write_line("configured", &[]);
    }
    assert_eq!(fs::read_to_string(path).unwrap(), "> configured\n");
}

#[test]
fn from_config_builds_daily_logger() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("d-%Y.log");
    let config = Config::parse(&format!(
        "[logger]\ntarget = \"daily\"\npath = \"{}\"\n[rotation]\nhour = 5\n",
        template.display()
    ))
    .unwrap();

    let logger = sblogger::from_config(&config).unwrap();
    drop(logger);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn from_config_rejects_bad_targets() {
    let unknown = Config::parse("[logger]\ntarget = \"syslog\"\n").unwrap();
    assert!(matches!(
        sblogger::from_config(&unknown),
        Err(Error::InvalidTarget(_))
    ));

    let no_path = Config::parse("[logger]\ntarget = \"file\"\n").unwrap();
    assert!(matches!(
        sblogger::from_config(&no_path),
        Err(Error::InvalidPath(_))
    ));

    let bad_time = Config::parse(
        "[logger]\ntarget = \"daily\"\npath = \"x-%F.log\"\n[rotation]\nhour = 25\n",
    )
    .unwrap();
    assert!(matches!(
        sblogger::from_config(&bad_time),
        Err(Error::TimeRange { field: "hour", .. })
    ));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("z-%F.log");
    let config = Config::parse(&format!(
        "[logger]\ntarget = \"daily\"\npath = \"{}\"\n[rotation]\npoll_interval_ms = 0\n",
        template.display()
    ))
    .unwrap();

    assert_eq!(config.poll_interval(), Duration::ZERO);
    assert!(matches!(
        sblogger::from_config(&config),
        Err(Error::ZeroPollInterval)
    ));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
