use std::cell::RefCell;
use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::collections::HashMap;
use std::fs;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};

thread_local! {
    static FILE_MAP: RefCell<HashMap<PathBuf, File>> = RefCell::new(HashMap::new());
}

pub fn timestamped(data: &str) -> String {
    format!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"), data)
}

fn append(path: &Path, data: String) -> Result<usize> {
    let mut data = data;
    data.push('\n');

    FILE_MAP.with(|cell| {
        if path.file_name().is_none() {
            return Err(Error::InvalidFilename);
        }

        let mut map = cell.borrow_mut();
        let file = match map.entry(path.to_owned()) {
            Occupied(elem) => elem.into_mut(),
            Vacant(elem) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let file = OpenOptions::new().append(true).create(true).open(path)?;
                elem.insert(file)
            }
        };

        file.write_all(data.as_bytes())?;
        Ok(data.len())
    })
}

/// Appends `data` to the log at `path`, one timestamp per line.
pub fn write(path: &Path, data: &str) -> Result<usize> {
    data.split('\n')
        .map(|line| append(path, timestamped(line)))
        .sum()
}

pub fn close_all() {
    FILE_MAP.with(|cell| {
        let mut map = cell.borrow_mut();
        map.clear();
    });
}
