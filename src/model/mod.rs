//! List model contract shared by the session source and the sessions model
//!
//! Mirrors the shape a declarative UI binds against: a flat list of rows,
//! each read one role at a time, plus a map from role id to role name.

pub mod sort;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use sort::{CaseSensitivity, SortOptions, SortOrder, SortProxy};

/// Attribute identifier used to select which field of a row to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Role(pub i32);

impl Role {
    /// Primary text of a row
    pub const DISPLAY: Role = Role(0);
    /// Secondary description of a row
    pub const TOOL_TIP: Role = Role(3);
    /// First id available for model-specific roles
    pub const USER: Role = Role(256);

    /// Role offset from [`Role::USER`]
    pub const fn user(offset: i32) -> Role {
        Role(Self::USER.0 + offset)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from role id to the name the UI layer binds to
pub type RoleNames = BTreeMap<Role, String>;

/// Position of a cell in a list model
///
/// The invalid index stands for the root; flat lists only have rows under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModelIndex {
    position: Option<(usize, usize)>,
}

impl ModelIndex {
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            position: Some((row, column)),
        }
    }

    /// The root index
    pub const fn invalid() -> Self {
        Self { position: None }
    }

    pub fn is_valid(&self) -> bool {
        self.position.is_some()
    }

    pub fn row(&self) -> Option<usize> {
        self.position.map(|(row, _)| row)
    }

    pub fn column(&self) -> Option<usize> {
        self.position.map(|(_, column)| column)
    }
}

/// Cell value returned by [`ListModel::data`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No data for this index/role
    #[default]
    Invalid,
    String(String),
    Url(PathBuf),
}

impl Value {
    /// Text form of the value; empty for [`Value::Invalid`]
    pub fn to_text(&self) -> String {
        match self {
            Value::Invalid => String::new(),
            Value::String(s) => s.clone(),
            Value::Url(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        Value::Url(value)
    }
}

/// Read-only list model
pub trait ListModel {
    /// Number of rows under `parent`
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Value stored under `role` for the item at `index`
    fn data(&self, index: &ModelIndex, role: Role) -> Value;

    /// Roles this model answers, by name
    fn role_names(&self) -> RoleNames;

    /// Index for `row`/`column` under the root, invalid when out of range
    fn index(&self, row: usize, column: usize) -> ModelIndex {
        if column == 0 && row < self.row_count(&ModelIndex::invalid()) {
            ModelIndex::new(row, column)
        } else {
            ModelIndex::invalid()
        }
    }
}
