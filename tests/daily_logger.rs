use chrono::{DateTime, Local, TimeDelta, TimeZone};
use sblogger::{DailyLogger, Error, LineEnding, Logger, ManualClock};
use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const POLL: Duration = Duration::from_millis(10);

fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .unwrap()
}

fn template(dir: &TempDir) -> String {
    dir.path().join("app-%F.log").to_string_lossy().into_owned()
}

fn wait_for_rotations(logger: &DailyLogger, count: u64) {
    let started = Instant::now();
    while logger.rotation_count() < count {
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "rotation did not happen"
        );
        thread::sleep(POLL);
    }
}

fn build(dir: &TempDir, clock: &ManualClock) -> DailyLogger {
    DailyLogger::builder(&template(dir))
        .clock(clock.clone())
        .poll_interval(POLL)
        .line_ending(LineEnding::Lf)
        .build()
        .unwrap()
}

#[test]
fn first_file_is_named_from_clock() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 12, 0, 0));
    let mut logger = build(&dir, &clock);

    logger.write_line("hello", &[]);
    let expected = dir.path().join("app-2026-10-16.log");
    assert_eq!(logger.current_path(), expected);
    assert_eq!(fs::read_to_string(expected).unwrap(), "hello\n");
    assert_eq!(logger.next_rotation(), local(2026, 10, 17, 0, 0, 0));
    assert_eq!(logger.rotation_count(), 0);
}

#[test]
fn rotates_once_after_deadline() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 23, 59, 58));
    let mut logger = build(&dir, &clock);
    logger.write_line("before", &[]);
    let first = logger.current_path();

    clock.advance(TimeDelta::seconds(5));
    wait_for_rotations(&logger, 1);
    thread::sleep(POLL * 5);
    assert_eq!(logger.rotation_count(), 1);

    logger.write_line("after", &[]);
    let second = logger.current_path();
    assert_ne!(first, second);
    assert_eq!(second, dir.path().join("app-2026-10-17.log"));
    assert_eq!(fs::read_to_string(&first).unwrap(), "before\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "after\n");
    assert_eq!(logger.next_rotation(), local(2026, 10, 18, 0, 0, 0));
}

#[test]
fn custom_time_of_day() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 6, 0, 0));
    let logger = DailyLogger::builder(&template(&dir))
        .at(6, 30, 15)
        .clock(clock)
        .poll_interval(POLL)
        .build()
        .unwrap();
    assert_eq!(logger.next_rotation(), local(2026, 10, 16, 6, 30, 15));
}

#[test]
fn concurrent_writes_survive_rotation() {
    const THREADS: usize = 4;
    const LINES: usize = 200;

    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 23, 59, 59));
    let logger = Arc::new(Mutex::new(build(&dir, &clock)));

    let writers: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES {
                    logger.lock().unwrap().write_line("w{0}-{1}", &[&t, &i]);
                    if i % 50 == 0 {
                        thread::sleep(Duration::from_millis(1));
                    }
                }
            })
        })
        .collect();

    clock.advance(TimeDelta::seconds(2));
    for writer in writers {
        writer.join().unwrap();
    }

    wait_for_rotations(&logger.lock().unwrap(), 1);
    drop(logger);

    let mut lines = Vec::new();
    for name in ["app-2026-10-16.log", "app-2026-10-17.log"] {
        let path = dir.path().join(name);
        if path.exists() {
            let content = fs::read_to_string(path).unwrap();
            lines.extend(content.lines().map(str::to_string));
        }
    }

    assert_eq!(lines.len(), THREADS * LINES);
    for line in &lines {
        assert!(line.starts_with('w') && line.contains('-'), "torn line: {line:?}");
    }
    for t in 0..THREADS {
        for i in 0..LINES {
            assert!(lines.contains(&format!("w{t}-{i}")));
        }
    }
}

#[test]
fn failed_rotation_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("2026-10-16")).unwrap();
    let template = dir.path().join("%F").join("app.log");
    let clock = ManualClock::new(local(2026, 10, 16, 23, 59, 59));
    let mut logger = DailyLogger::builder(&template.to_string_lossy())
        .clock(clock.clone())
        .poll_interval(POLL)
        .line_ending(LineEnding::Lf)
        .build()
        .unwrap();
    let first = logger.current_path();

    clock.advance(TimeDelta::seconds(5));
    wait_for_rotations(&logger, 1);

    logger.write_line("still here", &[]);
    assert_eq!(logger.current_path(), first);
    assert_eq!(fs::read_to_string(&first).unwrap(), "still here\n");
    assert!(!dir.path().join("2026-10-17").exists());
}

#[test]
fn clear_logs_truncates_current_file() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 12, 0, 0));
    let mut logger = build(&dir, &clock);
    logger.write_line("old content that goes away", &[]);
    logger.clear_logs().unwrap();
    logger.write("x", &[]);
    assert_eq!(fs::read_to_string(logger.current_path()).unwrap(), "x");
}

#[test]
fn drop_stops_thread_and_flushes() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(local(2026, 10, 16, 12, 0, 0));
    let path;
    {
        let mut logger = DailyLogger::builder(&template(&dir))
            .clock(clock)
            .auto_flush(false)
            .poll_interval(Duration::from_secs(60))
            .build()
            .unwrap();
        logger.write("unflushed", &[]);
        path = logger.current_path();

        let started = Instant::now();
        drop(logger);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
    assert_eq!(fs::read_to_string(path).unwrap(), "unflushed");
}

#[test]
fn out_of_range_time_is_rejected_before_opening() {
    let dir = TempDir::new().unwrap();
    for (h, m, s, field) in [(24, 0, 0, "hour"), (0, 60, 0, "minute"), (0, 0, 60, "second")] {
        let err = DailyLogger::at(&template(&dir), h, m, s).err().unwrap();
        assert!(
            matches!(err, Error::TimeRange { field: f, .. } if f == field),
            "{err}"
        );
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_template_is_rejected() {
    let err = DailyLogger::new("").err().unwrap();
    assert!(matches!(err, Error::InvalidPath(_)));
}

#[test]
fn zero_poll_interval_is_rejected_before_opening() {
    let dir = TempDir::new().unwrap();
    let err = DailyLogger::builder(&template(&dir))
        .poll_interval(Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, Error::ZeroPollInterval));
    assert!(err.is_construction_error());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn runs_without_file_until_directory_returns() {
    let dir = TempDir::new().unwrap();
    let day_dir = dir.path().join("2026-10-16");
    fs::create_dir(&day_dir).unwrap();
    let template = dir.path().join("%F").join("app.log");
    let clock = ManualClock::new(local(2026, 10, 16, 23, 59, 59));
    let mut logger = DailyLogger::builder(&template.to_string_lossy())
        .clock(clock.clone())
        .poll_interval(POLL)
        .line_ending(LineEnding::Lf)
        .build()
        .unwrap();
    let first = logger.current_path();

    fs::remove_dir_all(&day_dir).unwrap();
    clock.advance(TimeDelta::seconds(5));
    wait_for_rotations(&logger, 1);

    logger.write_line("dropped", &[]);
    logger.flush().unwrap();
    assert_eq!(logger.current_path(), first);
    assert!(!first.exists());

    fs::create_dir(&day_dir).unwrap();
    let started = Instant::now();
    while !first.exists() {
        assert!(started.elapsed() < Duration::from_secs(5), "file was not reopened");
        thread::sleep(POLL);
    }

    logger.write_line("back", &[]);
    assert_eq!(fs::read_to_string(&first).unwrap(), "back\n");
    assert_eq!(logger.rotation_count(), 1);
}
