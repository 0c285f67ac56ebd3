/// Commit the binary was built from, or `unknown` outside a git checkout.
pub const GIT_COMMIT_HASH: &str = env!("USERLIST_GIT_SHA");

/// Long version string shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("USERLIST_GIT_SHA"),
    ")"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_includes_package_version_and_commit() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains(GIT_COMMIT_HASH));
        assert!(!GIT_COMMIT_HASH.is_empty());
    }
}
