//! Page generation and static asset mirroring.
//!
//! Pages fail independently: a markdown file that cannot be rendered is
//! logged and skipped, the rest of the build carries on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::{Error, extract_title, render_document};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: Error },
}

/// Counts from a page tree build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub generated: usize,
    pub skipped: usize,
}

/// Fill the template placeholders and rewrite root-relative links.
pub fn apply_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);

    if base_path == "/" {
        return page;
    }
    page.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

fn read(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(|source| SiteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one markdown file into `dest` through `template_path`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read(from)?;
    let template = read(template_path)?;
    let page = render_page(&markdown, &template, base_path).map_err(|source| {
        SiteError::Render {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        create_dir_all(parent)?;
    }
    fs::write(dest, page).map_err(|source| SiteError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, Error> {
    let content = render_document(markdown)?;
    let title = extract_title(markdown)?;
    Ok(apply_template(template, &title, &content, base_path))
}

/// Render every `*.md` file under `content_dir` into the mirrored path under
/// `dest_dir`, with an `.html` extension.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport::default();
    generate_dir(content_dir, template_path, dest_dir, base_path, &mut report)?;
    Ok(report)
}

fn generate_dir(
    dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
    report: &mut BuildReport,
) -> Result<(), SiteError> {
    for path in sorted_entries(dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            generate_dir(&path, template_path, &dest, base_path, report)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            match generate_page(&path, template_path, &dest.with_extension("html"), base_path) {
                Ok(()) => report.generated += 1,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    report.skipped += 1;
                }
            }
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let read_err = |source| SiteError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    entries.sort();
    Ok(entries)
}

/// Recursively mirror `src` into `dest`. Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    create_dir_all(dest)?;

    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            copied += copy_static(&path, &target)?;
        } else {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(|source| SiteError::Copy {
                from: path.clone(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Build the whole site described by `config`.
pub fn build_site(config: &Config) -> Result<BuildReport, SiteError> {
    let paths = &config.paths;

    if config.site.clean && paths.output.exists() {
        log::info!("Removing {}", paths.output.display());
        fs::remove_dir_all(&paths.output).map_err(|source| SiteError::Remove {
            path: paths.output.clone(),
            source,
        })?;
    }

    if paths.static_dir.is_dir() {
        let copied = copy_static(&paths.static_dir, &paths.output)?;
        log::info!(
            "Copied {copied} static files from {}",
            paths.static_dir.display()
        );
    } else {
        log::info!(
            "No static directory at {}, skipping assets",
            paths.static_dir.display()
        );
        create_dir_all(&paths.output)?;
    }

    let report = generate_pages_recursive(
        &paths.content,
        &paths.template,
        &paths.output,
        &config.site.base_path,
    )?;
    log::info!(
        "Generated {} pages, skipped {}",
        report.generated,
        report.skipped
    );
    Ok(report)
}
