//! End-to-end navigation over a real indexed workspace.
//!
//! These tests build a genuine index snapshot on disk with the index command,
//! load it back, and drive a navigation session over it.

use index_navigator::core::change::ChangeStatus;
use index_navigator::core::error::Result;
use index_navigator::core::index::JsonIndex;
use index_navigator::core::launcher::{EditorLauncher, NoopLauncher};
use index_navigator::core::node::NodeKind;
use index_navigator::core::session::{NavCommand, NavSession};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

mod common;
use common::{fixtures::*, repository::*};

/// Launcher that records every launched path instead of spawning anything
struct RecordingLauncher {
    launched: RefCell<Vec<PathBuf>>,
}

impl RecordingLauncher {
    fn new() -> Self {
        Self {
            launched: RefCell::new(Vec::new()),
        }
    }
}

impl EditorLauncher for RecordingLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        self.launched.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

fn type_token(session: &mut NavSession<'_>, token: &str) {
    session.apply(NavCommand::EnterInput);
    for c in token.chars() {
        session.apply(NavCommand::Keystroke(c));
    }
    session.apply(NavCommand::CommitInput);
}

#[test]
fn test_root_lists_repositories_in_index_order() -> anyhow::Result<()> {
    let (workspace, repo_a, repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let session = NavSession::new(&index, &launcher)?;

    let listing = session.listing();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].index, 1);
    assert_eq!(listing[0].node.absolute_path, repo_a);
    assert_eq!(listing[1].index, 2);
    assert_eq!(listing[1].node.absolute_path, repo_b);
    Ok(())
}

#[test]
fn test_directories_list_before_files() -> anyhow::Result<()> {
    let (workspace, _repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select); // into repoA
    let listing = session.listing();
    assert_eq!(listing[0].node.display_path, "src");
    assert_eq!(listing[0].node.kind, NodeKind::Directory);
    assert_eq!(listing[1].node.display_path, "README.md");
    assert_eq!(listing[1].node.kind, NodeKind::File);
    Ok(())
}

#[test]
fn test_clean_files_show_unchanged() -> anyhow::Result<()> {
    let (workspace, _repo) = create_single_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select);
    assert!(session
        .listing()
        .iter()
        .all(|e| e.status == ChangeStatus::Unchanged));
    Ok(())
}

#[test]
fn test_edited_file_shows_modified_in_listing() -> anyhow::Result<()> {
    let (workspace, repo) = create_single_repo_workspace()?;
    let db = build_index(&workspace)?;

    sleep(Duration::from_millis(20));
    create_file(&repo, "edit.txt", "rewritten content\n")?;
    remove_file(&repo, "gone.txt")?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select);
    let status_of = |name: &str| {
        session
            .listing()
            .iter()
            .find(|e| e.node.display_path == name)
            .map(|e| e.status.clone())
    };
    assert_eq!(status_of("edit.txt"), Some(ChangeStatus::Modified));
    assert_eq!(status_of("gone.txt"), Some(ChangeStatus::Missing));
    assert_eq!(status_of("keep.txt"), Some(ChangeStatus::Unchanged));
    Ok(())
}

#[test]
fn test_parent_restores_cursor_to_departed_repository() -> anyhow::Result<()> {
    let (workspace, _repo_a, repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::MoveDown); // onto repoB
    session.apply(NavCommand::Select);
    assert_eq!(session.current_node().unwrap().absolute_path, repo_b);

    session.apply(NavCommand::GoToParent);
    assert_eq!(session.cursor(), Some(1));
    assert_eq!(
        session.selected_entry().unwrap().node.absolute_path,
        repo_b
    );
    Ok(())
}

#[test]
fn test_quoted_name_jump_selects_by_verbatim_match() -> anyhow::Result<()> {
    let (workspace, _repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select); // into repoA
    type_token(&mut session, "\"README.md\"");

    assert_eq!(
        session.selected_entry().unwrap().node.display_path,
        "README.md"
    );
    assert!(session.status_line().is_none());
    Ok(())
}

#[test]
fn test_name_jump_without_quotes() -> anyhow::Result<()> {
    let (workspace, _repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select);
    type_token(&mut session, "README.md");

    assert_eq!(
        session.selected_entry().unwrap().node.display_path,
        "README.md"
    );
    Ok(())
}

#[test]
fn test_absolute_path_jump_rebuilds_stack_from_root() -> anyhow::Result<()> {
    let (workspace, repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    let target = repo_a.join("src").join("main.rs");
    type_token(&mut session, target.to_str().unwrap());

    assert_eq!(session.path_stack().len(), 2);
    assert_eq!(session.path_stack()[0].absolute_path, repo_a);
    assert_eq!(session.path_stack()[1].display_path, "src");
    assert_eq!(
        session.selected_entry().unwrap().node.display_path,
        "main.rs"
    );
    Ok(())
}

#[test]
fn test_unindexed_path_jump_is_a_reported_noop() -> anyhow::Result<()> {
    let (workspace, _repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    // A real file on disk that the index never recorded
    let outside = workspace.path().join("outside.txt");
    std::fs::write(&outside, "not indexed\n")?;

    let index = JsonIndex::load(&db)?;
    let launcher = NoopLauncher;
    let mut session = NavSession::new(&index, &launcher)?;

    type_token(&mut session, outside.to_str().unwrap());

    assert!(session.path_stack().is_empty());
    assert!(session
        .status_line()
        .unwrap()
        .contains("no corresponding chain"));
    Ok(())
}

#[test]
fn test_open_externally_hands_selected_file_to_launcher() -> anyhow::Result<()> {
    let (workspace, repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = RecordingLauncher::new();
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::Select); // into repoA
    session.apply(NavCommand::MoveDown); // onto README.md
    session.apply(NavCommand::OpenExternally);

    assert_eq!(
        launcher.launched.borrow().as_slice(),
        &[repo_a.join("README.md")]
    );
    // Session continues browsing after the hand-off
    assert!(!session.is_terminated());
    Ok(())
}

#[test]
fn test_open_externally_on_directory_does_not_launch() -> anyhow::Result<()> {
    let (workspace, _repo_a, _repo_b) = create_two_repo_workspace()?;
    let db = build_index(&workspace)?;

    let index = JsonIndex::load(&db)?;
    let launcher = RecordingLauncher::new();
    let mut session = NavSession::new(&index, &launcher)?;

    session.apply(NavCommand::OpenExternally);
    assert!(launcher.launched.borrow().is_empty());
    assert!(session.status_line().unwrap().contains("not a file"));
    Ok(())
}
