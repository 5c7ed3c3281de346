//! Session list model for the greeter UI
//!
//! Wraps a session source and adds an `icon_url` role holding the badge for
//! each session. Every other role passes straight through to the source.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::icon;
use crate::model::{
    CaseSensitivity, ListModel, ModelIndex, Role, RoleNames, SortOptions, SortOrder, SortProxy,
    Value,
};
use crate::sessions::{SessionList, SessionRoles};

/// Role holding the resolved badge path, after the session source's roles
pub const ICON_ROLE: Role = Role::user(2);

/// Name the UI binds the icon role to
pub const ICON_ROLE_NAME: &str = "icon_url";

/// How a role read is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleKind {
    Icon,
    PassThrough(Role),
}

impl RoleKind {
    fn of(role: Role) -> Self {
        if role == ICON_ROLE {
            RoleKind::Icon
        } else {
            RoleKind::PassThrough(role)
        }
    }
}

/// Sessions list with badge icons
pub struct SessionsModel<S = SessionList> {
    source: S,
    sort: SortProxy,
    role_names: RoleNames,
    icon_search_directories: Vec<PathBuf>,
}

impl SessionsModel<SessionList> {
    /// Discover installed sessions using the configured directories
    pub fn from_config(config: &Config) -> Self {
        let source = SessionList::discover(&config.session_dirs);
        Self::new(source, config.icon_search_dirs.clone())
    }
}

impl<S: ListModel> SessionsModel<S> {
    /// Wrap `source`, resolving badges against `icon_search_directories`.
    ///
    /// Rows are sorted by display name, case-insensitively.
    pub fn new(source: S, icon_search_directories: Vec<PathBuf>) -> Self {
        let mut role_names = source.role_names();
        role_names.insert(ICON_ROLE, ICON_ROLE_NAME.to_string());

        let mut sort = SortProxy::new(SortOptions {
            role: SessionRoles::DISPLAY,
            case_sensitivity: CaseSensitivity::Insensitive,
            locale_aware: true,
            order: SortOrder::Ascending,
        });
        sort.sort(&source, 0);

        Self {
            source,
            sort,
            role_names,
            icon_search_directories,
        }
    }

    /// Wrap `source` with the default badge directories
    pub fn with_default_icons(source: S) -> Self {
        Self::new(source, icon::default_search_directories())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Directories consulted by [`SessionsModel::icon_url`], in priority order
    pub fn icon_search_directories(&self) -> &[PathBuf] {
        &self.icon_search_directories
    }

    /// Badge for `session_name` in the configured directories
    pub fn icon_url(&self, session_name: &str) -> PathBuf {
        Self::icon_url_in(session_name, &self.icon_search_directories)
    }

    /// Badge for `session_name` in the given directories
    pub fn icon_url_in<P: AsRef<Path>>(session_name: &str, search_directories: &[P]) -> PathBuf {
        icon::icon_url(session_name, search_directories)
    }

    /// Source rows in display order
    pub fn sorted_rows(&self) -> &[usize] {
        self.sort.source_rows()
    }

    /// Source index shown at `proxy_row` in display order
    pub fn map_to_source(&self, proxy_row: usize) -> ModelIndex {
        self.sort.map_to_source(proxy_row, 0)
    }

    pub fn sort_options(&self) -> &SortOptions {
        self.sort.options()
    }

    /// Re-read the source and sort again
    pub fn resort(&mut self) {
        let column = self.sort.sort_column().unwrap_or(0);
        self.sort.sort(&self.source, column);
    }
}

impl<S: ListModel> ListModel for SessionsModel<S> {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        self.source.row_count(parent)
    }

    fn data(&self, index: &ModelIndex, role: Role) -> Value {
        match RoleKind::of(role) {
            RoleKind::Icon => {
                let name = self.source.data(index, SessionRoles::DISPLAY).to_text();
                Value::Url(self.icon_url(&name))
            }
            RoleKind::PassThrough(role) => self.source.data(index, role),
        }
    }

    fn role_names(&self) -> RoleNames {
        self.role_names.clone()
    }
}
