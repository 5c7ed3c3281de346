//! Freedesktop `.desktop` session entries
//!
//! Only the `[Desktop Entry]` group is read. Localized keys such as
//! `Name[de]` are ignored.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{DesktopEntryError, Result};

const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";

/// Keys of a session `.desktop` file that matter to the greeter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: String,
    pub comment: Option<String>,
    pub exec: Option<String>,
    pub try_exec: Option<String>,
    pub hidden: bool,
    pub no_display: bool,
}

impl DesktopEntry {
    /// Read and parse the `.desktop` file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    /// Parse the contents of a `.desktop` file
    pub fn parse(contents: &str) -> std::result::Result<Self, DesktopEntryError> {
        let mut in_entry_group = false;
        let mut seen_entry_group = false;
        let mut keys: HashMap<&str, &str> = HashMap::new();

        for (number, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(group) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_entry_group = group == DESKTOP_ENTRY_GROUP;
                seen_entry_group |= in_entry_group;
                continue;
            }

            if !in_entry_group {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(DesktopEntryError::MalformedLine {
                    line: number + 1,
                    content: raw_line.to_string(),
                });
            };

            // First occurrence wins
            keys.entry(key.trim()).or_insert(value.trim());
        }

        if !seen_entry_group {
            return Err(DesktopEntryError::MissingGroup);
        }

        let name = keys
            .get("Name")
            .filter(|name| !name.is_empty())
            .ok_or(DesktopEntryError::MissingKey("Name"))?;

        let text = |key: &str| {
            keys.get(key)
                .filter(|value| !value.is_empty())
                .map(|value| unescape(value))
        };
        let flag = |key: &str| keys.get(key).is_some_and(|value| *value == "true");

        Ok(Self {
            name: unescape(name),
            comment: text("Comment"),
            exec: text("Exec"),
            try_exec: text("TryExec"),
            hidden: flag("Hidden"),
            no_display: flag("NoDisplay"),
        })
    }

    /// Whether the greeter should offer this entry at all
    pub fn is_visible(&self) -> bool {
        !self.hidden && !self.no_display
    }
}

/// Expand the escapes allowed in `string` values
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
