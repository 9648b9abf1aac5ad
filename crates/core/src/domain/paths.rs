// Literal path helpers
//
// Directory locality is decided on path strings exactly as the caller spelled
// them; nothing here touches the filesystem or resolves `..`/symlinks.

/// Directory component of `path`.
///
/// Everything before the last `/`, with trailing slashes removed unless the
/// directory is the root. A bare file name has an empty directory.
pub fn dirname(path: &str) -> &str {
    let head = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => return "",
    };

    let trimmed = head.trim_end_matches('/');
    if trimmed.is_empty() {
        head
    } else {
        trimmed
    }
}

/// Directory argument for `-o`: an empty directory means the working directory
pub fn output_dir_arg(dir: &str) -> &str {
    if dir.is_empty() {
        "."
    } else {
        dir
    }
}
