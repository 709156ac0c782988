pub mod cards;
pub mod gameplay;
pub mod players;

/// Initialize terminal logging.
///
/// INFO by default; `debug` raises the filter so post-round table dumps
/// and per-draw traces become visible.
pub fn log(debug: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    let level = match debug {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
