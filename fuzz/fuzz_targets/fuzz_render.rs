#![no_main]
use chrono::Local;
use libfuzzer_sys::fuzz_target;
use sblogger::fmt::{self, CallSite, FormatTemplate, RenderContext};
use sblogger::level::Level;

fuzz_target!(|data: &str| {
    // First line is the template, the rest is the message
    let (template, message) = data.split_once('\n').unwrap_or(("", data));
    let site = CallSite::new("src/fuzz.rs", 1, "target");
    let ctx = RenderContext {
        indent: 1,
        colors: true,
        level: Level::Warn,
        site: Some(&site),
        now: Local::now(),
    };

    // Must not panic on any template or message
    let _ = fmt::render(&FormatTemplate::new(template), message, &[&"a", &42], &ctx);
    let _ = fmt::render_path(data, Level::Info, Local::now());
});
