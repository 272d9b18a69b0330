use std::process::Command;

/// Runs git and returns trimmed stdout, or `None` outside a repository.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    for watched in [".git/HEAD", ".git/index"] {
        println!("cargo:rerun-if-changed={}", watched);
    }

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let date = git(&["show", "-s", "--format=%cd", "--date=format:%Y-%m-%d %H:%M", "HEAD"])
        .unwrap_or_default();

    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["describe", "--tags", "--exact-match", "HEAD"])
        .is_some_and(|tag| tag == version || tag.strip_prefix('v') == Some(version));
    let clean = git(&["status", "--porcelain"]).is_some_and(|s| s.is_empty());

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=GIT_COMMIT_DATE={}", date);
    println!("cargo:rustc-env=IS_RELEASE={}", tagged && clean);
}
