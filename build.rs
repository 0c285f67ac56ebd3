use std::process::Command;

// Exposes the commit the binary was built from as `USERLIST_GIT_SHA`.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let sha = git_sha().unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=USERLIST_GIT_SHA={sha}");
}

fn git_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();

    (!sha.is_empty()).then(|| sha.to_string())
}
