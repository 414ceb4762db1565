//! Interactive browsing over a built index.
//!
//! Line-oriented display layer: each prompt reads one token from stdin and
//! translates it into session commands. Single-letter tokens map to movement
//! and selection; anything else is committed as a jump (number, name, quoted
//! name, or filesystem path).

use crate::commands::resolve_index_path;
use crate::core::colors::format_listing_entry;
use crate::core::config::NavigatorConfig;
use crate::core::error::Result;
use crate::core::index::JsonIndex;
use crate::core::launcher::launcher_from_config;
use crate::core::output::print_status;
use crate::core::session::{NavCommand, NavSession};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub fn execute_browse(db: Option<PathBuf>) -> Result<()> {
    let index_path = resolve_index_path(db)?;
    let index = JsonIndex::load(&index_path)?;
    let config = NavigatorConfig::load_or_create().unwrap_or_default();
    let launcher = launcher_from_config(&config);

    let mut session = NavSession::new(&index, launcher.as_ref())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&session);
        if session.is_terminated() {
            break;
        }

        let line = match lines.next() {
            Some(line) => line?,
            // EOF ends the session like an explicit quit
            None => break,
        };
        dispatch(&mut session, line.trim());
    }

    Ok(())
}

fn render(session: &NavSession<'_>) {
    println!("\n{}", session.breadcrumb().bold());

    if session.listing().is_empty() {
        println!("  {}", "(empty)".bright_black());
    }
    for (position, entry) in session.listing().iter().enumerate() {
        let selected = session.cursor() == Some(position);
        println!("  {}", format_listing_entry(entry, selected));
    }

    if let Some(status) = session.status_line() {
        print_status(status);
    }
    if session.is_terminated() {
        return;
    }

    print!("{} ", "nav>".cyan());
    // The prompt must appear before the blocking read
    let _ = io::stdout().flush();
}

/// Translate one input token into session commands
fn dispatch(session: &mut NavSession<'_>, token: &str) {
    match token {
        "" => {}
        "q" | "quit" => session.apply(NavCommand::Quit),
        "k" | "up" => session.apply(NavCommand::MoveUp),
        "j" | "down" => session.apply(NavCommand::MoveDown),
        "." | "select" => session.apply(NavCommand::Select),
        ".." | "back" => session.apply(NavCommand::GoToParent),
        "o" | "open" => session.apply(NavCommand::OpenExternally),
        _ => {
            session.apply(NavCommand::EnterInput);
            for c in token.chars() {
                session.apply(NavCommand::Keystroke(c));
            }
            session.apply(NavCommand::CommitInput);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::{IndexSnapshot, IndexedRecord, JsonIndex, RepositoryRecord};
    use crate::core::launcher::NoopLauncher;
    use crate::core::session::SessionMode;
    use std::path::Path;
    use std::time::SystemTime;

    fn record(repo: &str, rel: &str) -> IndexedRecord {
        IndexedRecord {
            repo_root: PathBuf::from(repo),
            rel_path: PathBuf::from(rel),
            abs_path: Path::new(repo).join(rel),
            mtime: SystemTime::UNIX_EPOCH,
            size: 0,
            hash: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
        }
    }

    fn small_index() -> JsonIndex {
        JsonIndex::from_snapshot(IndexSnapshot {
            generated_at: chrono::Utc::now(),
            repositories: vec![
                RepositoryRecord {
                    root: PathBuf::from("/w/repoA"),
                },
                RepositoryRecord {
                    root: PathBuf::from("/w/repoB"),
                },
            ],
            files: vec![
                record("/w/repoA", "src/main.rs"),
                record("/w/repoB", "notes.txt"),
            ],
        })
    }

    #[test]
    fn test_dispatch_movement_tokens() -> Result<()> {
        let index = small_index();
        let launcher = NoopLauncher;
        let mut session = NavSession::new(&index, &launcher)?;

        dispatch(&mut session, "j");
        assert_eq!(session.cursor(), Some(1));
        dispatch(&mut session, "k");
        assert_eq!(session.cursor(), Some(0));
        Ok(())
    }

    #[test]
    fn test_dispatch_select_and_back() -> Result<()> {
        let index = small_index();
        let launcher = NoopLauncher;
        let mut session = NavSession::new(&index, &launcher)?;

        dispatch(&mut session, ".");
        assert_eq!(session.path_stack().len(), 1);
        dispatch(&mut session, "..");
        assert!(session.path_stack().is_empty());
        Ok(())
    }

    #[test]
    fn test_dispatch_free_text_becomes_a_jump() -> Result<()> {
        let index = small_index();
        let launcher = NoopLauncher;
        let mut session = NavSession::new(&index, &launcher)?;

        dispatch(&mut session, "2");
        assert_eq!(session.mode(), &SessionMode::Browsing);
        assert_eq!(session.cursor(), Some(1));
        Ok(())
    }

    #[test]
    fn test_dispatch_quit_terminates() -> Result<()> {
        let index = small_index();
        let launcher = NoopLauncher;
        let mut session = NavSession::new(&index, &launcher)?;

        dispatch(&mut session, "q");
        assert!(session.is_terminated());
        Ok(())
    }

    #[test]
    fn test_dispatch_empty_token_is_noop() -> Result<()> {
        let index = small_index();
        let launcher = NoopLauncher;
        let mut session = NavSession::new(&index, &launcher)?;

        dispatch(&mut session, "");
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.mode(), &SessionMode::Browsing);
        Ok(())
    }
}
