use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod message;
mod pages;

use taskflow::api;
use taskflow::config;
use taskflow::core;

use application::{Flags, LaunchMode, Taskflow};
use config::{TaskflowConfig, CONFIG_VERSION};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.taskflow.app", CONFIG_VERSION)
        .expect("Failed to create cosmic config");
    let config = TaskflowConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t taskflow -f`).
    // Wrapper filters: taskflow crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("taskflow") || target.starts_with("application") || target.starts_with("pages") {
                    let max = if taskflow::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("taskflow".to_string());

        taskflow::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        // Global max must be Debug so taskflow debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Parse CLI flags
    let launch_mode = {
        let args: Vec<String> = std::env::args().collect();
        if args.iter().any(|a| a == "--admin") {
            LaunchMode::Admin
        } else if args.iter().any(|a| a == "--user") {
            LaunchMode::User
        } else {
            LaunchMode::Normal
        }
    };

    // Environment override wins for this session only; the persistent value
    // lives in the config entry and is editable on the settings page.
    let backend_url = std::env::var("TASKFLOW_BACKEND_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.backend_url.clone());

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(400.0).min_height(300.0));

    let flags = Flags { config, cosmic_config: cosmic_cfg, backend_url, launch_mode };
    cosmic::app::run::<Taskflow>(settings, flags)?;

    Ok(())
}
