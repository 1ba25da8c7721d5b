//! Project layout resolution

use crate::config::LayoutConfig;
use std::path::{Path, PathBuf};

const METADATA_FILE: &str = "metadata.json";
const BOOK_FILE: &str = "book.json";
const ASSESSMENTS_FILE: &str = "assessments.json";
const ASSESSMENTS_DIR: &str = "assessments";
const INDEX_FILE: &str = "index.json";

/// A located guide project.
///
/// `root` is the assignment root (the directory that holds code and the
/// guides directory); `guides` is the guides directory itself, which is also
/// the tree scanned for references.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    guides: PathBuf,
    layout: LayoutConfig,
}

impl Project {
    /// Locate a project from a command-line path.
    ///
    /// A path whose last component is the guides directory name is taken as
    /// the guides directory; anything else is taken as the assignment root.
    pub fn locate(path: &Path, layout: &LayoutConfig) -> Self {
        let names_guides_dir = path
            .file_name()
            .map(|name| name == layout.guides_dir.as_str())
            .unwrap_or(false);

        let (root, guides) = if names_guides_dir {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            (parent, path.to_path_buf())
        } else {
            (path.to_path_buf(), path.join(&layout.guides_dir))
        };

        Self {
            root,
            guides,
            layout: layout.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn guides(&self) -> &Path {
        &self.guides
    }

    pub fn img_dir(&self) -> PathBuf {
        self.guides.join(&self.layout.img_dir)
    }

    pub fn code_dir(&self) -> PathBuf {
        self.root.join(&self.layout.code_dir)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.guides.join(&self.layout.content_dir)
    }

    /// Root `index.json` of the V3 content tree.
    pub fn content_index(&self) -> PathBuf {
        self.content_dir().join(INDEX_FILE)
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.guides.join(METADATA_FILE)
    }

    pub fn book_file(&self) -> PathBuf {
        self.guides.join(BOOK_FILE)
    }

    pub fn assessments_file(&self) -> PathBuf {
        self.guides.join(ASSESSMENTS_FILE)
    }

    pub fn assessments_dir(&self) -> PathBuf {
        self.guides.join(ASSESSMENTS_DIR)
    }

    /// Name of the per-directory order manifest in the V3 content tree.
    pub fn index_file_name() -> &'static str {
        INDEX_FILE
    }
}
