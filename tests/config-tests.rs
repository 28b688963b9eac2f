#![cfg(feature = "config")]

use badgeforge::{
    badge::font::DEFAULT_FONT_PATH,
    config::Settings,
    error::Error,
};
use std::path::{Path, PathBuf};

#[test]
fn empty_file_is_defaults() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.base_dir, PathBuf::from("."));
    assert_eq!(settings.font_path, PathBuf::from(DEFAULT_FONT_PATH));
    assert_eq!(settings.font_index, 0);
    #[cfg(feature = "log")]
    assert_eq!(settings.log_file, None);
}

#[test]
fn reads_every_key() {
    let settings = Settings::from_toml(
        r#"
base_dir = "/srv/extension"
font_path = "/usr/share/fonts/TTF/Inter-Bold.ttf"
font_index = 2
"#,
    )
    .unwrap();
    assert_eq!(settings.base_dir, PathBuf::from("/srv/extension"));
    assert_eq!(
        settings.font_path,
        PathBuf::from("/usr/share/fonts/TTF/Inter-Bold.ttf")
    );
    assert_eq!(settings.font_index, 2);
}

#[cfg(feature = "log")]
#[test]
fn reads_log_file() {
    let settings = Settings::from_toml(r#"log_file = "logs/icons.log""#).unwrap();
    assert_eq!(settings.log_file, Some(PathBuf::from("logs/icons.log")));
}

#[cfg(not(feature = "log"))]
#[test]
fn log_file_needs_log_feature() {
    assert!(matches!(
        Settings::from_toml(r#"log_file = "logs/icons.log""#),
        Err(Error::Config(_))
    ));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let settings = Settings::from_toml(r#"base_dir = "out""#).unwrap();
    assert_eq!(settings.base_dir, PathBuf::from("out"));
    assert_eq!(settings.font_path, PathBuf::from(DEFAULT_FONT_PATH));
}

#[test]
fn malformed_file_is_an_error() {
    assert!(matches!(
        Settings::from_toml("base_dir = "),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        Settings::from_toml("font_index = \"two\""),
        Err(Error::Config(_))
    ));
}

#[test]
fn icon_list_is_not_configurable() {
    assert!(matches!(
        Settings::from_toml("[[icons]]\nsize = 256\npath = \"assets/icon256.png\""),
        Err(Error::Config(_))
    ));
}

#[test]
fn missing_file_is_defaults() {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("no-such-badgeforge.toml");
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn loads_file_from_disk() {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("loads_file_from_disk");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("badgeforge.toml");
    std::fs::write(&path, "font_index = 1\n").unwrap();
    assert_eq!(Settings::load(&path).unwrap().font_index, 1);
}
