//! Installed session discovery
//!
//! Sessions come from freedesktop `.desktop` files in the X11 and Wayland
//! session directories. [`SessionList`] exposes them as a [`ListModel`]
//! with the roles a display manager greeter expects.

pub mod desktop;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::{ListModel, ModelIndex, Role, RoleNames, Value};

pub use desktop::DesktopEntry;

/// Display-server kind a session runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionType {
    X,
    Wayland,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::X => "x",
            SessionType::Wayland => "wayland",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Directory holding session `.desktop` files of one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDirectory {
    pub path: PathBuf,
    pub session_type: SessionType,
}

impl SessionDirectory {
    pub fn new(path: impl Into<PathBuf>, session_type: SessionType) -> Self {
        Self {
            path: path.into(),
            session_type,
        }
    }

    /// Standard system session directories
    pub fn defaults() -> Vec<SessionDirectory> {
        vec![
            SessionDirectory::new("/usr/share/xsessions", SessionType::X),
            SessionDirectory::new("/usr/share/wayland-sessions", SessionType::Wayland),
        ]
    }
}

/// A session the greeter can start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Desktop file stem, passed back to the display manager on login
    pub key: String,
    /// Human readable name
    pub name: String,
    pub comment: Option<String>,
    pub exec: Option<String>,
    pub session_type: SessionType,
    pub desktop_file: PathBuf,
}

impl Session {
    /// Build a session from a parsed entry found at `desktop_file`
    pub fn from_entry(entry: DesktopEntry, desktop_file: &Path, session_type: SessionType) -> Self {
        let key = desktop_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            key,
            name: entry.name,
            comment: entry.comment,
            exec: entry.exec,
            session_type,
            desktop_file: desktop_file.to_path_buf(),
        }
    }
}

/// Roles answered by [`SessionList`]
pub struct SessionRoles;

impl SessionRoles {
    pub const DISPLAY: Role = Role::DISPLAY;
    pub const COMMENT: Role = Role::TOOL_TIP;
    pub const KEY: Role = Role::user(0);
    pub const TYPE: Role = Role::user(1);
}

/// Flat list of discovered sessions
#[derive(Debug, Clone, Default)]
pub struct SessionList {
    sessions: Vec<Session>,
}

impl SessionList {
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Scan `directories` in order for session `.desktop` files.
    ///
    /// Unreadable or invalid files are skipped with a warning. Hidden entries
    /// and entries whose `TryExec` binary is missing are skipped. When two
    /// directories provide the same key, the earlier directory wins.
    pub fn discover(directories: &[SessionDirectory]) -> Self {
        let mut sessions = Vec::new();
        let mut seen_keys = HashSet::new();

        for directory in directories {
            for session in scan_directory(directory) {
                if seen_keys.insert(session.key.clone()) {
                    sessions.push(session);
                } else {
                    debug!(
                        key = %session.key,
                        path = %session.desktop_file.display(),
                        "Session shadowed by an earlier directory"
                    );
                }
            }
        }

        debug!(count = sessions.len(), "Discovered sessions");
        Self { sessions }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_at(&self, index: &ModelIndex) -> Option<&Session> {
        match (index.row(), index.column()) {
            (Some(row), Some(0)) => self.sessions.get(row),
            _ => None,
        }
    }
}

impl ListModel for SessionList {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() {
            0
        } else {
            self.sessions.len()
        }
    }

    fn data(&self, index: &ModelIndex, role: Role) -> Value {
        let Some(session) = self.session_at(index) else {
            return Value::Invalid;
        };

        match role {
            SessionRoles::DISPLAY => Value::from(session.name.as_str()),
            SessionRoles::COMMENT => session
                .comment
                .as_deref()
                .map(Value::from)
                .unwrap_or_default(),
            SessionRoles::KEY => Value::from(session.key.as_str()),
            SessionRoles::TYPE => Value::from(session.session_type.as_str()),
            _ => Value::Invalid,
        }
    }

    fn role_names(&self) -> RoleNames {
        RoleNames::from([
            (SessionRoles::DISPLAY, "display".to_string()),
            (SessionRoles::COMMENT, "toolTip".to_string()),
            (SessionRoles::KEY, "key".to_string()),
            (SessionRoles::TYPE, "type".to_string()),
        ])
    }
}

/// Read every visible, runnable session in one directory, sorted by file name
fn scan_directory(directory: &SessionDirectory) -> Vec<Session> {
    let Ok(entries) = fs::read_dir(&directory.path) else {
        debug!(path = %directory.path.display(), "Session directory not readable");
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("desktop"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .filter_map(|path| read_session(&path, directory.session_type))
        .collect()
}

fn read_session(path: &Path, session_type: SessionType) -> Option<Session> {
    let entry = match DesktopEntry::load(path) {
        Ok(entry) => entry,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unusable session file");
            return None;
        }
    };

    if !entry.is_visible() {
        debug!(path = %path.display(), "Skipping hidden session");
        return None;
    }

    if let Some(try_exec) = entry.try_exec.as_deref() {
        if !binary_available(try_exec) {
            debug!(path = %path.display(), try_exec, "Skipping session with missing TryExec");
            return None;
        }
    }

    Some(Session::from_entry(entry, path, session_type))
}

/// Absolute paths are checked directly, bare names are looked up on PATH
fn binary_available(program: &str) -> bool {
    let path = Path::new(program);
    if path.is_absolute() {
        path.exists()
    } else {
        which::which(program).is_ok()
    }
}
