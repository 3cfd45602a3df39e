//! Slide manifests: a TOML (or JSON) description of a carousel and its slides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use serde::Deserialize;

use crate::carousel::CarouselConfig;
use crate::constants::DEFAULT_INTERVAL_MS;
use crate::slide::{ClickHandler, Slide};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub carousel: CarouselConfig,
    pub default_interval_ms: Option<u64>,
    pub slides: Vec<SlideEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlideEntry {
    pub id: Option<String>,
    pub image: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub interval_ms: Option<u64>,
}

impl Manifest {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read slide manifest from {}", path.display()))?;

        let mut manifest: Manifest = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .with_context(|| format!("invalid slide manifest {}", path.display()))?,
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid slide manifest {}: {}", path.display(), err))?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        if let Some(base) = path.parent() {
            manifest.resolve_images(base);
        }
        Ok(manifest)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse slide manifest {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn default_interval(&self) -> Duration {
        Duration::from_millis(self.default_interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
    }

    /// Makes relative image paths relative to `base` instead of the working directory.
    /// URLs and absolute paths are left alone.
    fn resolve_images(&mut self, base: &Path) {
        for entry in &mut self.slides {
            let image = entry.image.as_str();
            if image.is_empty() || image.contains("://") || Path::new(image).is_absolute() {
                continue;
            }
            entry.image = base.join(image).to_string_lossy().into_owned();
        }
    }

    pub fn into_slides(self) -> Vec<Slide> {
        self.slides.into_iter().map(SlideEntry::into_slide).collect()
    }
}

/// Image files in `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif") {
                paths.push(path);
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(anyhow!("no image files found in directory {}", dir.display()))
    } else {
        Ok(paths)
    }
}

/// One slide per image in `dir`, titled after the file stem.
pub fn slides_from_directory(dir: &Path) -> anyhow::Result<Vec<Slide>> {
    let slides = load_sorted_image_paths(dir)?
        .into_iter()
        .map(|path| {
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
                .unwrap_or_default();
            Slide::new(path.to_string_lossy()).with_title(title)
        })
        .collect();
    Ok(slides)
}

impl SlideEntry {
    fn into_slide(self) -> Slide {
        let on_click = self.button_link.map(|link| {
            let label = self.button_text.clone().unwrap_or_default();
            ClickHandler::new(move || log::info!("button '{}' activated, following {}", label, link))
        });

        Slide {
            id: self.id,
            image: self.image,
            title: self.title.map(Into::into),
            description: self.description,
            button_text: self.button_text,
            button_on_click: on_click,
            interval: self.interval_ms.map(Duration::from_millis),
        }
    }
}
