// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_carousel::app::{self, Flags};
use iced_carousel::carousel::CarouselConfig;
use log::LevelFilter;

const DEFAULT_SLIDE_COUNT: usize = 5;
const DEFAULT_SLIDES_PER_VIEW: usize = 1;
const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("iced_carousel", LevelFilter::Info)
            .init();
    }
}

fn main() -> iced::Result {
    init_logger();

    let mut args = pico_args::Arguments::from_env();

    let slides: usize = match args.opt_value_from_str("--slides") {
        Ok(value) => value.unwrap_or(DEFAULT_SLIDE_COUNT),
        Err(err) => exit_with_usage(&err),
    };
    let per_view: usize = match args.opt_value_from_str("--per-view") {
        Ok(value) => value.unwrap_or(DEFAULT_SLIDES_PER_VIEW),
        Err(err) => exit_with_usage(&err),
    };
    let interval_ms: u64 = match args.opt_value_from_str("--interval") {
        Ok(value) => value.unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
        Err(err) => exit_with_usage(&err),
    };

    let config = match CarouselConfig::new(slides, per_view, interval_ms) {
        Ok(config) => config,
        Err(err) => exit_with_usage(&err),
    };

    app::run(Flags { config })
}

fn exit_with_usage(err: &dyn std::fmt::Display) -> ! {
    eprintln!("{err}");
    eprintln!(
        "usage: iced_carousel [--slides N] [--per-view N] [--interval MS]\n\
         \x20 --slides    number of demo slides (default {DEFAULT_SLIDE_COUNT})\n\
         \x20 --per-view  items advanced per navigation step, at least 1 (default {DEFAULT_SLIDES_PER_VIEW})\n\
         \x20 --interval  autoplay interval in milliseconds, 0 disables (default {DEFAULT_AUTOPLAY_INTERVAL_MS})"
    );
    std::process::exit(2);
}
