use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` as the global logger; later calls do nothing
///
/// `filter` uses the `env_logger` syntax ("info", "pickitup=debug"). Without one, `RUST_LOG` is read,
/// and without that everything at `info` and above is shown.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let filter = filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok());
        let mut builder = env_logger::Builder::new();
        match filter {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        // a test harness or the host may have installed one already
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logging(Some("warn"));
        init_logging(None);
        log::warn!("still alive");
    }
}
