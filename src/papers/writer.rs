//! Output bundle: one directory holding three plain-text renderings of a
//! paper list.
//!
//! ```text
//! {dir}/
//! ├── {base}.txt                titles
//! ├── {base}_with_authors.txt   title + authors
//! └── {base}_with_links.txt     title + link
//! ```
//!
//! Every entry is followed by a blank line. Files are overwritten in full,
//! including when the list is empty.

use std::path::{Path, PathBuf};

use super::PaperRecord;
use crate::dblp::DblpError;

/// Paths of the files written for one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub dir: PathBuf,
    pub titles: PathBuf,
    pub with_authors: PathBuf,
    pub with_links: PathBuf,
}

impl BundlePaths {
    pub fn new(dir: &Path, base_name: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            titles: dir.join(format!("{base_name}.txt")),
            with_authors: dir.join(format!("{base_name}_with_authors.txt")),
            with_links: dir.join(format!("{base_name}_with_links.txt")),
        }
    }
}

pub fn render_titles(papers: &[PaperRecord]) -> String {
    papers
        .iter()
        .map(|paper| format!("{}\n\n", paper.title))
        .collect()
}

pub fn render_with_authors(papers: &[PaperRecord]) -> String {
    papers
        .iter()
        .map(|paper| format!("{}\n{}\n\n", paper.title, paper.authors))
        .collect()
}

pub fn render_with_links(papers: &[PaperRecord]) -> String {
    papers
        .iter()
        .map(|paper| format!("{}\n{}\n\n", paper.title, paper.link))
        .collect()
}

/// Create `dir` if needed and write the three renderings of `papers` into it.
pub async fn write_bundle(
    papers: &[PaperRecord],
    dir: &Path,
    base_name: &str,
) -> Result<BundlePaths, DblpError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| DblpError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let paths = BundlePaths::new(dir, base_name);
    write_file(&paths.titles, render_titles(papers)).await?;
    write_file(&paths.with_authors, render_with_authors(papers)).await?;
    write_file(&paths.with_links, render_with_links(papers)).await?;

    log::info!(
        "Wrote {} papers to {}",
        papers.len(),
        paths.dir.display()
    );
    Ok(paths)
}

async fn write_file(path: &Path, contents: String) -> Result<(), DblpError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| DblpError::Io {
            path: path.to_path_buf(),
            source,
        })
}
