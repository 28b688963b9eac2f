use badgeforge::{batch, config::Settings, error::Result};
use std::{io, process::ExitCode};

#[cfg(feature = "config")]
fn settings() -> Result<Settings> {
    Settings::load(std::path::Path::new(badgeforge::config::SETTINGS_FILE))
}

#[cfg(not(feature = "config"))]
fn settings() -> Result<Settings> {
    Ok(Settings::default())
}

fn run() -> Result<()> {
    let settings = settings()?;
    let stdout = io::stdout();
    let result = batch::generate_all(&batch::ICONS, &settings, &mut stdout.lock());
    #[cfg(feature = "log")]
    badgeforge::log::close_all();
    result.map(|_| ())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
