use crate::{
    badge::{self, font::FontSource, RenderReport},
    config::Settings,
    error::Result,
};
use std::io::Write;

/// One icon to generate: pixel size and path relative to the base directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub path: &'static str,
}

pub const ICONS: [IconSpec; 8] = [
    IconSpec { size: 16, path: "assets/icon16.png" },
    IconSpec { size: 32, path: "assets/icon32.png" },
    IconSpec { size: 48, path: "assets/icon48.png" },
    IconSpec { size: 64, path: "assets/icon64.png" },
    IconSpec { size: 128, path: "assets/icon128.png" },
    // Default icon, same as 128.
    IconSpec { size: 128, path: "assets/icon.png" },
    IconSpec { size: 16, path: "images/icon16.png" },
    IconSpec { size: 48, path: "images/icon48.png" },
];

pub const BANNER: &str = "All icons have been updated!";

/// The activity log never stops a batch; a failed write is reported on stderr.
#[cfg(feature = "log")]
fn record(settings: &Settings, line: &str) {
    if let Some(log_file) = &settings.log_file {
        if let Err(err) = crate::log::write(log_file, line) {
            eprintln!("warning: activity log {}: {err}", log_file.display());
        }
    }
}

#[cfg(not(feature = "log"))]
fn record(_settings: &Settings, _line: &str) {}

/// Renders every spec in order, printing a line per icon and a banner at the end.
/// Stops at the first failure; icons already written are left in place.
pub fn generate_all<W: Write>(
    specs: &[IconSpec],
    settings: &Settings,
    out: &mut W,
) -> Result<Vec<RenderReport>> {
    zone!("generate_all");
    let fonts = FontSource::load(&settings.font_path, settings.font_index);
    record(settings, &format!("using {fonts}"));

    let mut reports = Vec::with_capacity(specs.len());
    for spec in specs {
        let report = badge::render_icon(spec.size, &settings.base_dir.join(spec.path), &fonts)?;
        writeln!(out, "{report}")?;
        record(
            settings,
            &format!("{report}, text size {}, {} font", report.text_size, report.font),
        );
        reports.push(report);
    }

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    record(settings, BANNER);
    Ok(reports)
}
