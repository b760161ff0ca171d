#![no_main]
use libfuzzer_sys::fuzz_target;
use sblogger::fmt::{color, padding};

fuzz_target!(|data: &str| {
    // Index arithmetic on arbitrary UTF-8 must stay on char boundaries
    let _ = padding::apply(data);
    let _ = color::resolve(data, true);
    let _ = color::resolve(data, false);
});
