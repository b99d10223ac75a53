//! Embeds git metadata at compile time so the CLI can report a
//! `dev@{hash}` version between release tags.

use std::process::Command;

/// Run git with `args`, returning trimmed stdout on success.
fn git_stdout(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    // Recompute whenever HEAD moves (commits, checkouts, tags).
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let hash = git_stdout(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let on_tag = git_stdout(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    println!("cargo:rustc-env=GIT_HASH={hash}");
    println!("cargo:rustc-env=ON_RELEASE_TAG={on_tag}");
}
