use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{error, info};

use crate::cli::ExtractArgs;
use crate::model::{BatchReport, DocumentOutline, DocumentReport, DocumentStatus, PageText};
use crate::outline::OutlineExtractor;
use crate::util::{
    ensure_directory, file_name_string, now_utc_string, outline_path_for, sha256_file,
    utc_compact_string, write_json_pretty,
};

mod batch;
mod discovery;
mod run;
mod text_layer;

pub use run::run;

use batch::*;
use discovery::*;
use text_layer::*;
