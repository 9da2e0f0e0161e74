use git_patchgen::config::PatchgenConfig;

mod support;
use support::{git, init_repo};

#[test]
fn config_defaults_when_unset() {
    let repo = init_repo();
    let cfg = PatchgenConfig::load(repo.path()).expect("load config");
    assert_eq!(cfg.output_dir, None);
    assert_eq!(cfg.language, None);
    assert!(!cfg.reveal);
}

#[test]
fn config_loads_from_repo_config() {
    let repo = init_repo();
    let root = repo.path();

    git(root, &["config", "patchgen.output-dir", "out/patches"]);
    git(root, &["config", "patchgen.language", "zh-cn"]);
    git(root, &["config", "patchgen.reveal", "true"]);

    let cfg = PatchgenConfig::load(root).expect("load config");
    assert_eq!(cfg.output_dir.as_deref(), Some("out/patches"));
    assert_eq!(cfg.language.as_deref(), Some("zh-cn"));
    assert!(cfg.reveal);
}

#[test]
fn config_load_fails_outside_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("not-a-repo");
    std::fs::create_dir(&nested).unwrap();
    // Only meaningful when no ancestor of the temp dir is a repository.
    if git2::Repository::discover(&nested).is_err() {
        assert!(PatchgenConfig::load(&nested).is_err());
    }
}
