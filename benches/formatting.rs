use chrono::{Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use sblogger::fmt::{self, CallSite, FormatTemplate, RenderContext, color, datetime, padding};
use sblogger::level::Level;
use std::fmt::Display;
use std::hint::black_box;

fn ctx(site: Option<&CallSite>, colors: bool) -> RenderContext<'_> {
    RenderContext {
        indent: 1,
        colors,
        level: Level::Info,
        site,
        now: Local
            .with_ymd_and_hms(2026, 10, 16, 8, 30, 0)
            .earliest()
            .unwrap_or_else(Local::now),
    }
}

fn bench_render_plain(c: &mut Criterion) {
    let template = FormatTemplate::default();
    let args: [&dyn Display; 0] = [];
    let ctx = ctx(None, false);

    c.bench_function("render/plain", |b| {
        b.iter(|| fmt::render(&template, black_box("connection accepted"), &args, &ctx));
    });
}

fn bench_render_full(c: &mut Criterion) {
    let template = FormatTemplate::new("[%F %T.%3f] [{green}%5^lvl{reset}] %src:%ln %func: %msg");
    let site = CallSite::new("src/server/accept.rs", 118, "accept_loop");
    let args: [&dyn Display; 2] = [&"10.0.0.7", &443];
    let mut group = c.benchmark_group("render/full");

    let plain = ctx(Some(&site), false);
    group.bench_function("colors_off", |b| {
        b.iter(|| fmt::render(&template, black_box("peer {0}:{1} connected"), &args, &plain));
    });

    let colored = ctx(Some(&site), true);
    group.bench_function("colors_on", |b| {
        b.iter(|| fmt::render(&template, black_box("peer {0}:{1} connected"), &args, &colored));
    });

    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let now = Local::now();
    let mut group = c.benchmark_group("passes");

    group.bench_function("padding", |b| {
        b.iter(|| padding::apply(black_box("[%8.2^lvl] %4msg")));
    });
    group.bench_function("color", |b| {
        b.iter(|| color::resolve(black_box("{red}error{reset} in {^bg-blue}module{reset}"), true));
    });
    group.bench_function("datetime", |b| {
        b.iter(|| datetime::resolve(black_box("%Y-%m-%d %H:%M:%S%.3f %:z"), &now));
    });

    group.finish();
}

criterion_group!(benches, bench_render_plain, bench_render_full, bench_passes);
criterion_main!(benches);
