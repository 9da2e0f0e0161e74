use predicates::prelude::*;

mod support;
use support::{commit_file, init_repo, patchgen, short};

#[test]
fn test_diff_from_comparison_label() {
    let repo = init_repo();
    let root = repo.path();
    let c1 = commit_file(root, "foo.css", ".a { color: red; }\n", "first");
    let c2 = commit_file(root, "foo.css", ".a { color: blue; }\n", "second");
    let (s1, s2) = (short(&c1), short(&c2));

    let label = format!("foo.css ({s1}) ↔ foo.css ({s2})");
    let name = format!("foo.css.{s1}_{s2}.patch");

    patchgen(root)
        .args(["diff", "foo.css", "--label", label.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Patch file generated: {name}")));

    let patch = std::fs::read_to_string(root.join("patch").join(&name)).unwrap();
    assert!(patch.contains("-.a { color: red; }"));
    assert!(patch.contains("+.a { color: blue; }"));
}

#[test]
fn test_diff_dry_run_prints_command() {
    let repo = init_repo();
    let root = repo.path();
    let c1 = commit_file(root, "foo.css", "one\n", "first");
    let c2 = commit_file(root, "foo.css", "two\n", "second");
    let (s1, s2) = (short(&c1), short(&c2));

    patchgen(root)
        .args(["--dry-run", "diff", "foo.css", "--label"])
        .arg(format!("foo.css ({s1}) ↔ foo.css ({s2})"))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "git diff {s1} {s2} -- \"foo.css\""
        )))
        .stdout(predicate::str::contains(format!("foo.css.{s1}_{s2}.patch")));

    assert!(!root.join("patch").exists());
}

#[test]
fn test_diff_nested_file_with_explicit_commits_and_output_dir() {
    let repo = init_repo();
    let root = repo.path();
    let c1 = commit_file(root, "src/ui/part.ts", "export const a = 1;\n", "first");
    let c2 = commit_file(root, "src/ui/part.ts", "export const a = 2;\n", "second");

    patchgen(root)
        .args(["-o", "out/patches", "diff", "src/ui/part.ts", "--from", c1.as_str(), "--to", c2.as_str()])
        .assert()
        .success();

    let patch = root
        .join("out/patches")
        .join(format!("part.ts.{c1}_{c2}.patch"));
    let contents = std::fs::read_to_string(patch).unwrap();
    assert!(contents.contains("+export const a = 2;"));
}

#[test]
fn test_diff_from_subdirectory_uses_workspace_relative_path() {
    let repo = init_repo();
    let root = repo.path();
    let c1 = commit_file(root, "src/lib.rs", "fn a() {}\n", "first");
    let c2 = commit_file(root, "src/lib.rs", "fn b() {}\n", "second");

    patchgen(&root.join("src"))
        .args(["diff", "lib.rs", "--from", short(&c1), "--to", short(&c2)])
        .assert()
        .success();

    assert!(
        root.join("patch")
            .join(format!("lib.rs.{}_{}.patch", short(&c1), short(&c2)))
            .is_file()
    );
}

#[test]
fn test_diff_unparsable_label() {
    let repo = init_repo();
    let root = repo.path();
    commit_file(root, "foo.css", "one\n", "first");

    patchgen(root)
        .args(["diff", "foo.css", "--label", "foo.css (Working Tree)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse commit hash from tab."));
}

#[test]
fn test_diff_without_label() {
    let repo = init_repo();
    patchgen(repo.path())
        .args(["diff", "foo.css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to get current tab info."));
}

#[test]
fn test_diff_without_file() {
    let repo = init_repo();
    patchgen(repo.path())
        .args(["diff", "--label", "foo.css (1111111) ↔ foo.css (2222222)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to get diff file path."));
}

#[test]
fn test_diff_file_outside_workspace() {
    let repo = init_repo();
    let other = tempfile::TempDir::new().unwrap();
    std::fs::write(other.path().join("foo.css"), "x").unwrap();

    patchgen(repo.path())
        .args(["diff", "--label", "foo.css (1111111) ↔ foo.css (2222222)"])
        .arg(other.path().join("foo.css"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to locate workspace."));
}

#[test]
fn test_diff_unknown_commit_writes_nothing() {
    let repo = init_repo();
    let root = repo.path();
    commit_file(root, "foo.css", "one\n", "first");

    patchgen(root)
        .args(["diff", "foo.css", "--label", "foo.css (1111111) ↔ foo.css (2222222)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Commit does not exist"));

    let written = std::fs::read_dir(root.join("patch")).unwrap().count();
    assert_eq!(written, 0);
}

#[test]
fn test_diff_chinese_messages() {
    let repo = init_repo();
    let root = repo.path();
    let c1 = commit_file(root, "a.txt", "1\n", "first");
    let c2 = commit_file(root, "a.txt", "2\n", "second");

    patchgen(root)
        .args(["--lang", "zh-cn", "diff", "a.txt", "--from", c1.as_str(), "--to", c2.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patch 文件已生成"));

    patchgen(root)
        .env("LANG", "zh_CN.UTF-8")
        .args(["diff", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("未能获取当前标签信息。"));
}
