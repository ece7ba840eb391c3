use std::path::{Path, PathBuf};

use manuscript::{Chapter, Scene};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod text;

pub use text::{format_chapter, format_project, scene_body};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported output flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Plain,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Export configuration. Defaults mirror the single-chapter export
/// panel: titles on, page breaks off, plain text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExportOptions {
    pub include_chapter_title: bool,
    pub include_scene_titles: bool,
    pub add_page_breaks: bool,
    pub format: ExportFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_chapter_title: true,
            include_scene_titles: true,
            add_page_breaks: false,
            format: ExportFormat::Plain,
        }
    }
}

/// Derive a download file name from a title: non-word characters are
/// stripped, runs of whitespace become hyphens, and the result is
/// lower-cased before the format extension is appended.
pub fn export_file_name(title: &str, format: ExportFormat) -> String {
    let stripped = regex::Regex::new(r"[^\w\s-]")
        .unwrap()
        .replace_all(title, "");
    let hyphenated = regex::Regex::new(r"\s+")
        .unwrap()
        .replace_all(stripped.trim(), "-");
    format!("{}.{}", hyphenated.to_lowercase(), format.extension())
}

/// Main exporter struct; wraps the options once and writes files the
/// way the UI's download trigger does.
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn chapter(&self, chapter: &Chapter) -> String {
        format_chapter(chapter, &self.options)
    }

    pub fn project(&self, chapters: &[Chapter]) -> String {
        format_project(chapters, &self.options)
    }

    /// A lone scene is exported as its raw content, always plain text.
    pub fn write_scene(&self, scene: &Scene, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(export_file_name(&scene.title, ExportFormat::Plain));
        std::fs::write(&path, scene_body(scene))?;
        Ok(path)
    }

    pub fn write_chapter(&self, chapter: &Chapter, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(export_file_name(&chapter.title, self.options.format));
        std::fs::write(&path, self.chapter(chapter))?;
        Ok(path)
    }

    pub fn write_project(
        &self,
        chapters: &[Chapter],
        project_title: &str,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let path = dir.join(export_file_name(project_title, self.options.format));
        std::fs::write(&path, self.project(chapters))?;
        Ok(path)
    }
}

// Custom serialization keeps the on-disk strings stable.
impl Serialize for ExportFormat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self {
            ExportFormat::Plain => "plain",
            ExportFormat::Markdown => "markdown",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "plain" => Ok(ExportFormat::Plain),
            "markdown" => Ok(ExportFormat::Markdown),
            _ => Err(serde::de::Error::unknown_variant(&s, &["plain", "markdown"])),
        }
    }
}
