#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Absolute path of a file or directory under `tests/`.
pub fn fixture<P: AsRef<Path>>(relative: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(relative)
}

/// Asserts that `needles` occur in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("'{needle}' not found in order in:\n{haystack}"),
        }
    }
}
