//! Uploader behaviour against an in-memory repository.

use super::fakes::{Call, FakeRepo};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use gh_upload_file::{BranchStatus, FsSource, RepoRef, UploadConfig, UploadError, Uploader};
use std::path::Path;
use tempfile::TempDir;

fn config(file: &Path, branch: Option<&str>, update_file: Option<&str>) -> UploadConfig {
    UploadConfig {
        file: file.to_path_buf(),
        repository: RepoRef::new("octo", "site"),
        token: "ghs_test".into(),
        message: "docs: publish changelog".into(),
        path: "docs/release/CHANGELOG.md".into(),
        branch: branch.map(str::to_string),
        update_file: update_file.map(str::to_string),
        server_url: "https://github.com".into(),
    }
}

fn write_source(dir: &TempDir, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("CHANGELOG.md");
    std::fs::write(&path, bytes).unwrap();
    path
}

#[tokio::test]
async fn uploads_file_bytes_as_base64() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = b"## 1.2.0\n\n- binary safe \x00\xff\n";
    let file = write_source(&dir, bytes);
    let repo = FakeRepo::with_default_branch("main", "base0001");

    let outcome = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, None, None))
        .await
        .unwrap();

    let puts = repo.puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(STANDARD.decode(&puts[0].content).unwrap(), bytes);
    assert_eq!(puts[0].path, "docs/release/CHANGELOG.md");
    assert_eq!(puts[0].message, "docs: publish changelog");
    assert_eq!(puts[0].branch, None);
    assert_eq!(puts[0].sha, None);

    assert_eq!(outcome.branch, BranchStatus::Default);
    assert_eq!(outcome.commit_sha(), Some("commit0001"));
    assert_eq!(outcome.content_sha(), Some("blob0001"));
    assert_eq!(
        repo.calls(),
        vec![Call::PutFile {
            path: "docs/release/CHANGELOG.md".into(),
            sha: None
        }]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn symlink_uploads_its_target_text() {
    let dir = tempfile::tempdir().unwrap();
    let target = write_source(&dir, b"the real file contents");
    let link = dir.path().join("latest.md");
    std::os::unix::fs::symlink(&target, &link).unwrap();
    let repo = FakeRepo::with_default_branch("main", "base0001");

    Uploader::new(repo.clone(), FsSource)
        .run(&config(&link, None, None))
        .await
        .unwrap();

    let uploaded = STANDARD.decode(&repo.puts()[0].content).unwrap();
    assert_eq!(uploaded, target.to_string_lossy().as_bytes());
}

#[cfg(unix)]
#[tokio::test]
async fn dangling_symlink_still_uploads() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink("does/not/exist.txt", &link).unwrap();
    let repo = FakeRepo::with_default_branch("main", "base0001");

    Uploader::new(repo.clone(), FsSource)
        .run(&config(&link, None, None))
        .await
        .unwrap();

    let uploaded = STANDARD.decode(&repo.puts()[0].content).unwrap();
    assert_eq!(uploaded, b"does/not/exist.txt");
}

#[tokio::test]
async fn missing_path_fails_before_any_remote_call() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let repo = FakeRepo::with_default_branch("main", "base0001");

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&missing, Some("feature"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::PathNotFound(_)));
    assert_eq!(err.to_string(), format!("Path not found: {}", missing.display()));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn missing_branch_is_created_from_default_head() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("trunk", "abc123");

    let outcome = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap();

    assert_eq!(
        outcome.branch,
        BranchStatus::Created {
            base: "trunk".into(),
            sha: "abc123".into()
        }
    );
    assert_eq!(
        repo.calls(),
        vec![
            Call::LookupBranch("reports".into()),
            Call::DefaultBranch,
            Call::LookupBranch("trunk".into()),
            Call::CreateRef {
                branch: "reports".into(),
                sha: "abc123".into()
            },
            Call::PutFile {
                path: "docs/release/CHANGELOG.md".into(),
                sha: None
            },
        ]
    );
    assert_eq!(repo.has_branch("reports").as_deref(), Some("abc123"));
    assert_eq!(repo.puts()[0].branch.as_deref(), Some("reports"));
}

#[tokio::test]
async fn existing_branch_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.add_branch("reports", "feed42");

    let outcome = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap();

    assert_eq!(outcome.branch, BranchStatus::Existing);
    let creates = repo
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::CreateRef { .. } | Call::DefaultBranch))
        .count();
    assert_eq!(creates, 0);
}

#[tokio::test]
async fn absent_update_file_uploads_without_sha() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");

    let outcome = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("main"), Some("docs/release/CHANGELOG.md")))
        .await
        .unwrap();

    assert_eq!(outcome.replaced_sha, None);
    assert!(repo.calls().contains(&Call::LookupFileSha {
        path: "docs/release/CHANGELOG.md".into(),
        reference: Some("main".into()),
    }));
    assert_eq!(repo.puts()[0].sha, None);
}

#[tokio::test]
async fn failed_revision_lookup_is_soft() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.add_file("docs/release/CHANGELOG.md", "old0001");
    repo.fail_file_lookup();

    Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, None, Some("docs/release/CHANGELOG.md")))
        .await
        .unwrap();

    assert_eq!(repo.puts()[0].sha, None);
}

#[tokio::test]
async fn existing_update_file_sha_is_sent() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes v2");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.add_file("docs/release/CHANGELOG.md", "old0001");

    let outcome = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, None, Some("docs/release/CHANGELOG.md")))
        .await
        .unwrap();

    assert_eq!(outcome.replaced_sha.as_deref(), Some("old0001"));
    assert_eq!(repo.puts()[0].sha.as_deref(), Some("old0001"));
    assert!(repo.calls().contains(&Call::LookupFileSha {
        path: "docs/release/CHANGELOG.md".into(),
        reference: None,
    }));
}

#[tokio::test]
async fn rejected_write_names_the_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.add_branch("reports", "feed42");
    repo.reject_puts();

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, UploadError::ExistingFile { .. }));
    assert!(message.contains("[CHANGELOG.md]"), "{message}");
    assert!(
        message.contains("https://github.com/octo/site/tree/reports/docs/release"),
        "{message}"
    );
}

#[tokio::test]
async fn created_branch_survives_a_failed_write() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.reject_puts();

    let result = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await;

    assert!(result.is_err());
    assert_eq!(repo.has_branch("reports").as_deref(), Some("base0001"));
}

fn wrote_anything(repo: &FakeRepo) -> bool {
    repo.calls()
        .iter()
        .any(|c| matches!(c, Call::PutFile { .. }))
}

#[tokio::test]
async fn branch_lookup_failure_is_fatal_and_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.fail_branch_lookup();

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Branch { ref branch, .. } if branch == "reports"));
    assert_eq!(repo.calls(), vec![Call::LookupBranch("reports".into())]);
    assert_eq!(repo.has_branch("reports"), None);
}

#[tokio::test]
async fn default_branch_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.fail_default_branch();

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Branch { .. }));
    assert!(!wrote_anything(&repo));
    assert!(
        !repo
            .calls()
            .iter()
            .any(|c| matches!(c, Call::CreateRef { .. }))
    );
}

#[tokio::test]
async fn missing_default_branch_head_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.remove_branch("main");

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Branch { .. }));
    assert!(err.to_string().contains("default branch main"), "{err}");
    assert_eq!(
        repo.calls(),
        vec![
            Call::LookupBranch("reports".into()),
            Call::DefaultBranch,
            Call::LookupBranch("main".into()),
        ]
    );
}

#[tokio::test]
async fn create_ref_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(&dir, b"notes");
    let repo = FakeRepo::with_default_branch("main", "base0001");
    repo.fail_create_ref();

    let err = Uploader::new(repo.clone(), FsSource)
        .run(&config(&file, Some("reports"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Branch { .. }));
    assert!(!wrote_anything(&repo));
}
