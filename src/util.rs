use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn utc_compact_string(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];

    loop {
        let count = file
            .read(&mut buf)
            .with_context(|| format!("failed to read file for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// `report.pdf` becomes `<output_dir>/report.json`.
pub fn outline_path_for(pdf_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = pdf_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid UTF-8 filename: {}", pdf_path.display()))?;

    Ok(output_dir.join(format!("{stem}.json")))
}

pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let mut data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;
    data.push(b'\n');

    write_file_atomically(path, |file| file.write_all(&data))
}

/// Writes through a sibling `<name>.tmp` file that only replaces `path` once
/// `write` has succeeded. On failure the temporary file is removed and `path`
/// is left untouched.
pub fn write_file_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp_path = temporary_path_for(path);

    let result = File::create(&tmp_path)
        .with_context(|| format!("failed to create file: {}", tmp_path.display()))
        .and_then(|mut file| {
            write(&mut file).with_context(|| format!("failed to write file: {}", path.display()))?;
            file.sync_all()
                .with_context(|| format!("failed to sync file: {}", tmp_path.display()))
        })
        .and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("failed to move file into place: {}", path.display()))
        });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

fn temporary_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
