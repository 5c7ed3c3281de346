//! Session badge icon lookup
//!
//! Badges follow the established `<lowercase session name>_badge.png`
//! naming. Icon sets in the wild depend on this exact form, so it is not
//! configurable.

use std::path::{Path, PathBuf};

/// Badge used when no search directory has one for the session
pub const FALLBACK_ICON: &str = "./graphics/session_icons/unknown_badge.png";

/// Suffix appended to the lowercased session name
const BADGE_SUFFIX: &str = "_badge.png";

/// Default directories searched for session badges, in priority order
pub fn default_search_directories() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/share/greeter/graphics/session_icons"),
        PathBuf::from("/usr/local/share/unity-greeter"),
        PathBuf::from("/usr/share/unity-greeter"),
    ]
}

/// Candidate badge path for `session_name` inside `directory`
///
/// An empty directory resolves against the filesystem root, matching
/// `"" + "/" + file`.
pub fn badge_path(directory: &Path, session_name: &str) -> PathBuf {
    let file_name = format!("{}{BADGE_SUFFIX}", session_name.to_lowercase());
    if directory.as_os_str().is_empty() {
        return Path::new("/").join(file_name);
    }
    // `join` reuses a trailing separator instead of doubling it
    directory.join(file_name)
}

/// Resolve the badge for `session_name`.
///
/// Directories are tried in order and the first existing badge wins. When
/// none exists the result is [`FALLBACK_ICON`]; a missing badge is never an
/// error.
pub fn icon_url<P: AsRef<Path>>(session_name: &str, search_directories: &[P]) -> PathBuf {
    search_directories
        .iter()
        .map(|directory| badge_path(directory.as_ref(), session_name))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_ICON))
}
