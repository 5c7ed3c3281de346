//! Integration tests for the sessions model over discovered sessions

use super::common::fixtures::{toml_paths, write_config, IconDir, SessionDir};
use greeter_sessions::{
    Config, ListModel, ModelIndex, Role, SessionDirectory, SessionList, SessionRoles,
    SessionType, SessionsModel, Value, FALLBACK_ICON, ICON_ROLE, ICON_ROLE_NAME,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn model_for(sessions: &SessionDir, icons: &IconDir) -> SessionsModel {
    let config = Config::default()
        .with_session_dirs(vec![SessionDirectory::new(&sessions.path, SessionType::X)])
        .with_icon_search_dirs(vec![icons.path.clone()]);
    SessionsModel::from_config(&config)
}

/// Badges resolve per row and missing ones fall back
#[test]
fn test_icon_role_per_row() {
    let sessions = SessionDir::new();
    sessions.add_session("ubuntu", "Ubuntu");
    sessions.add_session("gnome-classic", "GNOME Classic");
    let icons = IconDir::with_badges(&["ubuntu"]);

    let model = model_for(&sessions, &icons);
    assert_eq!(model.row_count(&ModelIndex::invalid()), 2);

    for row in 0..2 {
        let index = ModelIndex::new(row, 0);
        let name = model.data(&index, SessionRoles::DISPLAY).to_text();
        let expected = if name == "Ubuntu" {
            icons.badge("ubuntu")
        } else {
            PathBuf::from(FALLBACK_ICON)
        };
        assert_eq!(model.data(&index, ICON_ROLE), Value::Url(expected));
    }
}

/// Role names are the source roles plus exactly one icon role
#[test]
fn test_role_names_superset() {
    let sessions = SessionDir::new();
    let icons = IconDir::new();
    let model = model_for(&sessions, &icons);

    let source = SessionList::default().role_names();
    let merged = model.role_names();

    assert_eq!(merged.len(), source.len() + 1);
    assert!(source.iter().all(|(role, name)| merged.get(role) == Some(name)));
    assert_eq!(merged[&ICON_ROLE], ICON_ROLE_NAME);
}

/// Non-icon reads match the source, including out-of-range rows
#[test]
fn test_pass_through_reads() {
    let sessions = SessionDir::new();
    sessions.add_session("xfce", "Xfce Session");
    sessions.add_session("awesome", "awesome");
    let icons = IconDir::new();
    let model = model_for(&sessions, &icons);

    for row in 0..3 {
        let index = ModelIndex::new(row, 0);
        for role in [
            SessionRoles::DISPLAY,
            SessionRoles::COMMENT,
            SessionRoles::KEY,
            SessionRoles::TYPE,
            Role(4242),
        ] {
            assert_eq!(model.data(&index, role), model.source().data(&index, role));
        }
    }
    assert_eq!(
        model.row_count(&ModelIndex::new(0, 0)),
        model.source().row_count(&ModelIndex::new(0, 0))
    );
}

/// Display order is case-insensitive by name
#[test]
fn test_display_order() {
    let sessions = SessionDir::new();
    sessions.add_session("xfce", "Xfce Session");
    sessions.add_session("awesome", "awesome");
    sessions.add_session("budgie", "Budgie Desktop");
    let icons = IconDir::new();
    let model = model_for(&sessions, &icons);

    let names: Vec<String> = (0..model.row_count(&ModelIndex::invalid()))
        .map(|row| {
            model
                .data(&model.map_to_source(row), SessionRoles::DISPLAY)
                .to_text()
        })
        .collect();
    assert_eq!(names, vec!["awesome", "Budgie Desktop", "Xfce Session"]);
}

/// Config file drives both session discovery and badge lookup
#[test]
fn test_model_from_config_file() {
    let sessions = SessionDir::new();
    sessions.add_session("sway", "Sway");
    let icons = IconDir::with_badges(&["sway"]);
    let config_dir = TempDir::new().unwrap();

    let path = write_config(
        config_dir.path(),
        &format!(
            "[icons]\nsearch_dirs = {}\n\n[sessions]\nx_dirs = []\nwayland_dirs = {}\n",
            toml_paths(&[icons.path.as_path()]),
            toml_paths(&[sessions.path.as_path()]),
        ),
    );

    let config = Config::load_from(&path).unwrap();
    let model = SessionsModel::from_config(&config);

    assert_eq!(model.icon_search_directories(), &[icons.path.clone()]);
    assert_eq!(model.row_count(&ModelIndex::invalid()), 1);

    let index = ModelIndex::new(0, 0);
    assert_eq!(model.data(&index, SessionRoles::TYPE), Value::from("wayland"));
    assert_eq!(model.data(&index, ICON_ROLE), Value::Url(icons.badge("sway")));
}
