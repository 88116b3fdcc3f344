//! Output writer.
//!
//! Layout under the output root:
//!
//! ```text
//! <root>/README.md                          index, append-only
//! <root>/.gitkeep
//! <root>/<YYYY>/<YYYY-MM-DD>_<slug>.py
//! <root>/<YYYY>/<YYYY-MM-DD>_<slug>_v2.py   second run on the same day
//! ```
//!
//! Existing files are never overwritten and the index is never rewritten.
//! There is no locking; a single invocation per output root is assumed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{CoreError, Result};
use crate::render::Rendered;
use crate::template::Template;

const GITKEEP_FILE: &str = ".gitkeep";
const EXTENSION: &str = "py";

/// Where a generated file ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Path relative to the output root, `/`-separated, as linked from the index.
    pub relative_path: String,
}

fn write_failed(path: &Path) -> impl FnOnce(io::Error) -> CoreError + '_ {
    move |source| CoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes generated files and maintains the index.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    index_file: String,
    index_header: String,
}

impl OutputWriter {
    /// Writer rooted at `root` with the default index file and header.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            root: root.into(),
            index_file: defaults.index_file.clone(),
            index_header: defaults.index_header(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            root: config.output_dir.clone(),
            index_file: config.index_file.clone(),
            index_header: config.index_header(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    /// Create the output root, `.gitkeep` and the index header if missing.
    ///
    /// Safe to call repeatedly; an existing index is left untouched.
    pub fn ensure_scaffold(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(write_failed(&self.root))?;

        let gitkeep = self.root.join(GITKEEP_FILE);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&gitkeep)
            .map_err(write_failed(&gitkeep))?;

        let index = self.index_path();
        match OpenOptions::new().write(true).create_new(true).open(&index) {
            Ok(mut file) => {
                file.write_all(self.index_header.as_bytes())
                    .map_err(write_failed(&index))?;
                info!(path = %index.display(), "created index");
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(write_failed(&index)(e)),
        }
        Ok(())
    }

    fn year_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format("%Y").to_string())
    }

    fn file_name(date: NaiveDate, slug: &str, version: u32) -> String {
        let date = date.format("%Y-%m-%d");
        if version <= 1 {
            format!("{date}_{slug}.{EXTENSION}")
        } else {
            format!("{date}_{slug}_v{version}.{EXTENSION}")
        }
    }

    /// First non-existing path for `slug` on `date`: the plain name, then
    /// `_v2`, `_v3`, ... Creates the year directory.
    pub fn resolve_path(&self, date: NaiveDate, slug: &str) -> Result<PathBuf> {
        let dir = self.year_dir(date);
        fs::create_dir_all(&dir).map_err(write_failed(&dir))?;
        let mut version = 1;
        while dir.join(Self::file_name(date, slug, version)).exists() {
            version += 1;
        }
        Ok(dir.join(Self::file_name(date, slug, version)))
    }

    /// `/`-separated form of `path` relative to the output root.
    fn relative_to_root(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Write `rendered` under a fresh path and record it in the index.
    pub fn write(
        &self,
        rendered: &Rendered,
        template: &Template,
        now: DateTime<Utc>,
    ) -> Result<WrittenFile> {
        self.ensure_scaffold()?;

        let date = now.date_naive();
        let slug = template.slug();
        let mut path = self.resolve_path(date, &slug)?;
        let mut file = loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "path taken, trying next version");
                    path = self.resolve_path(date, &slug)?;
                }
                Err(e) => return Err(write_failed(&path)(e)),
            }
        };
        file.write_all(rendered.content.as_bytes())
            .map_err(write_failed(&path))?;
        info!(path = %path.display(), template = template.name, "wrote generated file");

        let relative_path = self.relative_to_root(&path);
        self.append_index(&relative_path, &rendered.title, template.description, now)?;

        Ok(WrittenFile {
            path,
            relative_path,
        })
    }

    /// Append one entry line to the index.
    pub fn append_index(
        &self,
        relative_path: &str,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let index = self.index_path();
        let line = index_line(relative_path, title, description, now);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&index)
            .map_err(write_failed(&index))?;
        file.write_all(line.as_bytes()).map_err(write_failed(&index))?;
        debug!(path = %index.display(), entry = relative_path, "appended index entry");
        Ok(())
    }
}

/// `- <YYYY-MM-DD HH:MM UTC>: [<title>](<relative path>) — <description>`
pub fn index_line(relative_path: &str, title: &str, description: &str, now: DateTime<Utc>) -> String {
    format!(
        "- {}: [{}]({}) — {}\n",
        now.format("%Y-%m-%d %H:%M UTC"),
        title,
        relative_path,
        description
    )
}
