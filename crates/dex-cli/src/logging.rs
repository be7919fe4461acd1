use log::LevelFilter;

/// `RUST_LOG` wins when set; otherwise `--debug` selects debug output and the
/// default shows warnings only.
pub fn init_logging(debug: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }

    env_logger::Builder::new()
        .filter_level(level_for(debug))
        .format_timestamp(None)
        .init();
}

fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
