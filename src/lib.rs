pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod sessions;
pub mod sessions_model;
pub mod util;

pub use config::Config;
pub use error::{DesktopEntryError, Result, SessionsError};
pub use icon::{icon_url, FALLBACK_ICON};
pub use model::{ListModel, ModelIndex, Role, RoleNames, Value};
pub use sessions::{Session, SessionDirectory, SessionList, SessionRoles, SessionType};
pub use sessions_model::{SessionsModel, ICON_ROLE, ICON_ROLE_NAME};
