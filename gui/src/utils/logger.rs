use std::path::PathBuf;

use lazy_static::lazy_static;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::utils::defines::{CRASH_LOG_FILE, LOG_FILE};

lazy_static! {
    pub(crate) static ref LOG_DIR: PathBuf = match home::home_dir() {
        Some(home) => home.join(".uelaunch").join("logs"),
        None => PathBuf::from("log"),
    };
}

pub(crate) fn init_log() -> anyhow::Result<()> {
    let launcher_name = "launcher".to_string();
    let launcher_out = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}{n}")))
        .build(LOG_DIR.join(LOG_FILE))?;
    let config = Config::builder()
        .appender(Appender::builder().build(&launcher_name, Box::new(launcher_out)))
        .build(
            Root::builder()
                .appender(&launcher_name)
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Write every panic with a backtrace to the crash log next to the settings file.
pub(crate) fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        let report = format!("{}\n\n{}", info, backtrace);
        log::error!("{}", report);
        if let Err(e) = std::fs::write(CRASH_LOG_FILE, &report) {
            log::error!("failed to write {}: {}", CRASH_LOG_FILE, e);
        }
        default_hook(info);
    }));
}
