//! The navigation state machine.
//!
//! [`NavSession`] owns the current location (an explicit path stack from root
//! to the active node), the active listing, and the cursor. It interprets one
//! [`NavCommand`] at a time to completion; there is no concurrent mutation.
//!
//! # Public API
//! - [`NavSession`]: Session state plus command interpreter
//! - [`NavCommand`]: The discrete command set accepted from the display layer
//! - [`SessionMode`]: `Browsing`, `AwaitingInput`, or `Terminated`
//!
//! # Failure Semantics
//! Every error from a sub-component is caught at this boundary and converted
//! into a status message plus a state-preserving no-op. A failed listing fetch
//! keeps the previous listing visible. Only an explicit `Quit` terminates the
//! session.

use crate::core::error::{NavigatorError, Result};
use crate::core::index::IndexSource;
use crate::core::launcher::EditorLauncher;
use crate::core::listing::{ListingEntry, ListingProvider};
use crate::core::node::{HierarchyNode, NodeKind};
use crate::core::resolver::{self, ResolvedTarget};
use std::path::Path;

/// Session lifecycle state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMode {
    /// Listing displayed, cursor active
    Browsing,
    /// A jump token is being typed
    AwaitingInput { buffer: String },
    /// Session is ending
    Terminated,
}

/// Discrete navigation commands accepted from the display layer
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    MoveUp,
    MoveDown,
    /// Descend into the selected repository/directory; no-op on a file
    Select,
    GoToParent,
    EnterInput,
    Keystroke(char),
    CommitInput,
    CancelInput,
    /// Hand the selected file to the external editor integration
    OpenExternally,
    Quit,
}

/// Navigation session: path stack, active listing, cursor, and mode
pub struct NavSession<'a> {
    index: &'a dyn IndexSource,
    provider: ListingProvider<'a>,
    launcher: &'a dyn EditorLauncher,
    /// Root to current node; empty means the tree root (repository overview)
    stack: Vec<HierarchyNode>,
    listing: Vec<ListingEntry>,
    /// `None` is the explicit "no selection" state of an empty listing
    cursor: Option<usize>,
    mode: SessionMode,
    status_line: Option<String>,
}

impl<'a> NavSession<'a> {
    /// Start a session browsing at the tree root
    pub fn new(index: &'a dyn IndexSource, launcher: &'a dyn EditorLauncher) -> Result<Self> {
        let mut provider = ListingProvider::new(index);
        let listing = provider.list(None)?;
        let cursor = if listing.is_empty() { None } else { Some(0) };
        Ok(Self {
            index,
            provider,
            launcher,
            stack: Vec::new(),
            listing,
            cursor,
            mode: SessionMode::Browsing,
            status_line: None,
        })
    }

    // === Accessors for the display layer ===

    pub fn listing(&self) -> &[ListingEntry] {
        &self.listing
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    pub fn path_stack(&self) -> &[HierarchyNode] {
        &self.stack
    }

    pub fn current_node(&self) -> Option<&HierarchyNode> {
        self.stack.last()
    }

    pub fn selected_entry(&self) -> Option<&ListingEntry> {
        self.cursor.and_then(|c| self.listing.get(c))
    }

    pub fn input_buffer(&self) -> Option<&str> {
        match &self.mode {
            SessionMode::AwaitingInput { buffer } => Some(buffer),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.mode, SessionMode::Terminated)
    }

    /// Path stack rendered for the header line
    pub fn breadcrumb(&self) -> String {
        if self.stack.is_empty() {
            "(root)".to_string()
        } else {
            self.stack
                .iter()
                .map(|n| n.display_path.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }

    // === Command interpreter ===

    /// Process one command to completion
    pub fn apply(&mut self, command: NavCommand) {
        if self.is_terminated() {
            return;
        }
        self.status_line = None;

        if matches!(self.mode, SessionMode::AwaitingInput { .. }) {
            self.apply_while_awaiting_input(command);
            return;
        }

        match command {
            NavCommand::MoveUp => self.move_cursor(-1),
            NavCommand::MoveDown => self.move_cursor(1),
            NavCommand::Select => self.select(),
            NavCommand::GoToParent => self.go_to_parent(),
            NavCommand::EnterInput => {
                self.mode = SessionMode::AwaitingInput {
                    buffer: String::new(),
                };
            }
            NavCommand::OpenExternally => self.open_externally(),
            NavCommand::Quit => self.mode = SessionMode::Terminated,
            // Input-mode commands are meaningless while browsing
            NavCommand::Keystroke(_) | NavCommand::CommitInput | NavCommand::CancelInput => {}
        }
    }

    fn apply_while_awaiting_input(&mut self, command: NavCommand) {
        match command {
            NavCommand::Keystroke(c) => {
                if let SessionMode::AwaitingInput { buffer } = &mut self.mode {
                    buffer.push(c);
                }
            }
            NavCommand::CommitInput => {
                let previous = std::mem::replace(&mut self.mode, SessionMode::Browsing);
                if let SessionMode::AwaitingInput { buffer } = previous {
                    self.jump(&buffer);
                }
            }
            // Cancel discards the buffer; everything else is untouched
            NavCommand::CancelInput => self.mode = SessionMode::Browsing,
            NavCommand::Quit => self.mode = SessionMode::Terminated,
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if let Some(cursor) = self.cursor {
            let last = self.listing.len().saturating_sub(1) as isize;
            let next = (cursor as isize + delta).clamp(0, last);
            self.cursor = Some(next as usize);
        }
    }

    fn select(&mut self) {
        let node = match self.selected_entry() {
            Some(entry) if entry.node.kind.is_container() => entry.node.clone(),
            // Select on a file is a no-op; opening is a separate action
            _ => return,
        };
        self.enter(node);
    }

    fn enter(&mut self, node: HierarchyNode) {
        match self.provider.list(Some(&node)) {
            Ok(listing) => {
                self.stack.push(node);
                self.cursor = if listing.is_empty() { None } else { Some(0) };
                self.listing = listing;
            }
            // Previous listing stays visible
            Err(e) => self.report(e),
        }
    }

    fn go_to_parent(&mut self) {
        // Already at root: no-op
        if self.stack.is_empty() {
            return;
        }
        let parent = if self.stack.len() >= 2 {
            Some(self.stack[self.stack.len() - 2].clone())
        } else {
            None
        };
        match self.provider.list(parent.as_ref()) {
            Ok(listing) => {
                let departed = self.stack.pop();
                self.cursor = departed
                    .as_ref()
                    .and_then(|d| {
                        listing
                            .iter()
                            .position(|e| e.node.absolute_path == d.absolute_path)
                    })
                    .or_else(|| if listing.is_empty() { None } else { Some(0) });
                self.listing = listing;
            }
            Err(e) => self.report(e),
        }
    }

    fn jump(&mut self, raw_input: &str) {
        match resolver::resolve(raw_input, &self.listing) {
            Ok(ResolvedTarget::ByIndex(i)) | Ok(ResolvedTarget::ByName(i)) => {
                self.cursor = Some(i);
            }
            Ok(ResolvedTarget::ByPath(path)) => {
                // A path that resolves back into the current listing is a
                // plain cursor move; anything else rebuilds the stack.
                match self
                    .listing
                    .iter()
                    .position(|e| e.node.absolute_path == path)
                {
                    Some(i) => self.cursor = Some(i),
                    None => self.jump_to_path(&path),
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn jump_to_path(&mut self, path: &Path) {
        match self.locate(path) {
            Ok((stack, listing, cursor)) => {
                self.stack = stack;
                self.listing = listing;
                self.cursor = cursor;
            }
            Err(e) => self.report(e),
        }
    }

    /// Rebuild a path stack by walking from root down through indexed nodes.
    ///
    /// Builds the whole replacement state before anything is committed, so a
    /// failure mid-walk leaves the session untouched.
    fn locate(
        &mut self,
        path: &Path,
    ) -> Result<(Vec<HierarchyNode>, Vec<ListingEntry>, Option<usize>)> {
        let repositories = self.index.repositories()?;
        let repository = repositories
            .into_iter()
            .find(|r| path.starts_with(&r.root))
            .ok_or_else(|| NavigatorError::path_not_indexed(path))?;

        let rest = path
            .strip_prefix(&repository.root)
            .map_err(|_| NavigatorError::path_not_indexed(path))?;
        let components: Vec<String> = rest
            .components()
            .map(|c| {
                c.as_os_str()
                    .to_str()
                    .map(str::to_string)
                    .ok_or_else(|| NavigatorError::path_not_indexed(path))
            })
            .collect::<Result<_>>()?;

        let mut stack = vec![HierarchyNode::repository(repository.root)];
        let mut file_target: Option<String> = None;

        for (i, name) in components.iter().enumerate() {
            let current = stack[stack.len() - 1].clone();
            let children = self.index.children(&current)?;
            let (child_name, kind) = children
                .into_iter()
                .find(|(n, _)| n == name)
                .ok_or_else(|| NavigatorError::path_not_indexed(path))?;

            if kind == NodeKind::File {
                // A file must terminate the walk; its parent becomes current
                if i + 1 != components.len() {
                    return Err(NavigatorError::path_not_indexed(path));
                }
                file_target = Some(child_name);
            } else {
                let absolute = current.absolute_path.join(&child_name);
                stack.push(HierarchyNode::directory(child_name, absolute));
            }
        }

        let top = stack.last().cloned();
        let listing = self.provider.list(top.as_ref())?;
        let cursor = file_target
            .as_ref()
            .and_then(|name| listing.iter().position(|e| &e.node.display_path == name))
            .or_else(|| if listing.is_empty() { None } else { Some(0) });

        Ok((stack, listing, cursor))
    }

    fn open_externally(&mut self) {
        let (kind, display, absolute) = match self.selected_entry() {
            Some(entry) => (
                entry.node.kind,
                entry.node.display_path.clone(),
                entry.node.absolute_path.clone(),
            ),
            None => {
                self.status_line = Some("Nothing selected".to_string());
                return;
            }
        };
        if kind != NodeKind::File {
            self.status_line = Some(format!("'{display}' is a {kind}, not a file"));
            return;
        }
        if let Err(e) = self.launcher.launch(&absolute) {
            self.report(e);
        }
    }

    fn report(&mut self, error: NavigatorError) {
        log::debug!("Command failed: {error}");
        self.status_line = Some(error.to_string());
    }
}
