//! Integration tests for layered configuration loading

use guides_cleaner::config::{global_config_path, ConfigLoader, PROJECT_CONFIG_FILE};
use tempfile::TempDir;

use crate::integration::{with_env_vars, with_xdg_env, write_file};

#[test]
fn test_defaults_without_any_source() {
    let xdg = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();

    let config = with_xdg_env(&xdg, || ConfigLoader::load(base.path()).unwrap());

    assert_eq!(config.layout.guides_dir, ".guides");
    assert_eq!(config.layout.img_dir, "img");
    assert_eq!(config.merge.exclude, vec![".git".to_string()]);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_global_config_path_follows_xdg() {
    let xdg = TempDir::new().unwrap();

    let path = with_xdg_env(&xdg, global_config_path).unwrap();

    assert_eq!(path, xdg.path().join("guides-cleaner").join("config.toml"));
}

#[test]
fn test_project_file_overrides_global_file() {
    let xdg = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    write_file(
        &xdg.path().join("guides-cleaner").join("config.toml"),
        "[layout]\nimg_dir = \"global-img\"\ncode_dir = \"global-code\"\n",
    );
    write_file(
        &base.path().join(PROJECT_CONFIG_FILE),
        "[layout]\nimg_dir = \"project-img\"\n",
    );

    let config = with_xdg_env(&xdg, || ConfigLoader::load(base.path()).unwrap());

    assert_eq!(config.layout.img_dir, "project-img");
    assert_eq!(config.layout.code_dir, "global-code");
}

#[test]
fn test_environment_overrides_files() {
    let xdg = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    write_file(
        &base.path().join(PROJECT_CONFIG_FILE),
        "[layout]\ncontent_dir = \"pages\"\n",
    );

    let config = with_xdg_env(&xdg, || {
        with_env_vars(&[("GUIDES_CLEANER__LAYOUT__CONTENT_DIR", "chapters")], || {
            ConfigLoader::load(base.path()).unwrap()
        })
    });

    assert_eq!(config.layout.content_dir, "chapters");
}

#[test]
fn test_invalid_logging_is_rejected() {
    let xdg = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    write_file(
        &base.path().join(PROJECT_CONFIG_FILE),
        "[logging]\noutput = \"file\"\n",
    );

    let err = with_xdg_env(&xdg, || ConfigLoader::load(base.path()).unwrap_err());

    assert!(err.to_string().contains("logging"));
}
