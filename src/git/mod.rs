//! Staged-diff capture via the git CLI.

pub mod diff;

pub use diff::{capture_staged_diff, capture_staged_diff_in, ensure_git_installed};
