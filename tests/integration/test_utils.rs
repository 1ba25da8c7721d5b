//! Shared test utilities for integration tests
//!
//! Fixture builders for V2 and V3 guide projects, filesystem snapshots, and
//! isolated XDG environments for configuration tests.

#![allow(dead_code)]

use guides_cleaner::config::LayoutConfig;
use guides_cleaner::project::Project;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        match self.xdg_config_home {
            Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

/// Run `f` with XDG_CONFIG_HOME and HOME pointing into `test_dir`.
///
/// The global config file then lives at
/// `<test_dir>/guides-cleaner/config.toml`. The original environment is
/// restored afterwards; a global mutex keeps parallel tests apart.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

/// Run `f` with extra environment variables set, removing them afterwards.
/// Only call this inside [`with_xdg_env`], which holds the environment lock.
pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let result = f();
    for (key, _) in vars {
        std::env::remove_var(key);
    }
    result
}

pub fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Every file below `dir` with its bytes, keyed by relative path.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (relative, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Relative paths of every file below `dir`, sorted.
pub fn file_list(dir: &Path) -> Vec<String> {
    snapshot(dir)
        .keys()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

pub fn locate(path: &Path) -> Project {
    Project::locate(path, &LayoutConfig::default())
}

/// A V2 project below `root`:
///
/// - `intro.md` and `loops.md` are listed in `metadata.json`, `draft.md` is not
/// - `draft.md` is the only reference to `img/old.png` and assessment `t2`
/// - `img/unused.jpg` and `code/helpers/util.py` are referenced nowhere
pub fn v2_project(root: &Path) -> Project {
    let guides = root.join(".guides");
    write_file(
        &guides.join("metadata.json"),
        r#"{
  "sections": [
    {"id": "s1", "title": "Intro", "content-file": ".guides/content/intro.md"},
    {"id": "s2", "title": "Loops", "content-file": ".guides/content/loops.md"}
  ]
}"#,
    );
    write_file(
        &guides.join("book.json"),
        r#"{"name": "Book", "children": [{"id": "s1"}, {"id": "s2"}]}"#,
    );
    write_file(
        &guides.join("assessments.json"),
        r#"[{"taskId": "t1", "type": "test"}, {"taskId": "t2", "type": "test"}]"#,
    );
    write_file(
        &guides.join("content").join("intro.md"),
        "Welcome ![logo](.guides/img/logo.png)\n\n{Check It!|assessment}(t1)\n",
    );
    write_file(
        &guides.join("content").join("loops.md"),
        "Open code/loops.py and study .guides/img/diagrams/flow.png\n",
    );
    write_file(
        &guides.join("content").join("draft.md"),
        "Old picture ![](.guides/img/old.png)\n{Try it|assessment}(t2)\n",
    );
    write_file(&guides.join("img").join("logo.png"), "png");
    write_file(&guides.join("img").join("diagrams").join("flow.png"), "png");
    write_file(&guides.join("img").join("old.png"), "png");
    write_file(&guides.join("img").join("unused.jpg"), "jpg");
    write_file(&root.join("code").join("loops.py"), "for i in range(3): pass\n");
    write_file(&root.join("code").join("helpers").join("util.py"), "def f(): pass\n");
    locate(&guides)
}

/// A V3 project below `root`:
///
/// - `content/index.json` orders `intro` and `basics`; `drafts/` and
///   `notes.json` are not listed
/// - `basics/index.json` orders `loops`; `stale.md` is not listed
/// - `drafts/x.md` is the only reference to `img/old.png`
/// - `assessments/t2.json` is tagged nowhere, `code/unused.py` referenced nowhere
pub fn v3_project(root: &Path) -> Project {
    let guides = root.join(".guides");
    let content = guides.join("content");
    write_file(&content.join("index.json"), r#"{"title": "Root", "order": ["intro", "basics"]}"#);
    write_file(
        &content.join("intro.md"),
        "![logo](.guides/img/logo.png)\n{Check It!|assessment}(t1)\n",
    );
    write_file(&content.join("notes.json"), r#"{"title": "Notes"}"#);
    write_file(&content.join("basics").join("index.json"), r#"{"order": ["loops"]}"#);
    write_file(&content.join("basics").join("loops.md"), "Run code/loops.py\n");
    write_file(&content.join("basics").join("stale.md"), "{Stale|assessment}(t2)\n");
    write_file(&content.join("drafts").join("index.json"), r#"{"order": ["x"]}"#);
    write_file(&content.join("drafts").join("x.md"), "![](.guides/img/old.png)\n");
    write_file(&guides.join("assessments").join("t1.json"), r#"{"taskId": "t1"}"#);
    write_file(&guides.join("assessments").join("t2.json"), r#"{"taskId": "t2"}"#);
    write_file(&guides.join("img").join("logo.png"), "png");
    write_file(&guides.join("img").join("old.png"), "png");
    write_file(&root.join("code").join("loops.py"), "print(1)\n");
    write_file(&root.join("code").join("unused.py"), "print(2)\n");
    locate(&guides)
}
