use crate::commands::{reveal_after, write_export};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::messages;
use crate::notify::{NotificationKind, Notifications};
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::{Confirm, Input, Select};
use roster_core::{ClearError, Roster, RosterError, Selection};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
    Draw,
    Export,
    Clear,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Add,
        Action::Remove,
        Action::Draw,
        Action::Export,
        Action::Clear,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Add => "Add a participant",
            Action::Remove => "Remove a participant",
            Action::Draw => "Draw",
            Action::Export => "Export list",
            Action::Clear => "Clear list",
            Action::Quit => "Quit",
        }
    }
}

/// State of an interactive session: the roster plus what is on screen.
///
/// Every handler updates state and notifications; `render` draws the
/// result. Prompts live in `run_session` only.
pub struct Session {
    roster: Roster,
    notifications: Notifications,
    last_draw: Option<Selection>,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            roster: Roster::new(),
            notifications: Notifications::new(config.error_ttl(), config.success_ttl()),
            last_draw: None,
            config,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn last_draw(&self) -> Option<&Selection> {
        self.last_draw.as_ref()
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    fn fail(&mut self, err: impl Into<RosterError>) {
        self.notifications.error(messages::describe(&err.into()));
    }

    /// Returns `true` if the name was added
    pub fn add(&mut self, raw: &str) -> bool {
        match self.roster.add(raw) {
            Ok(()) => {
                self.notifications.dismiss(NotificationKind::Error);
                self.notifications.success(messages::added(raw.trim()));
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    /// Keep asking for a name until one is added or `prompt` gives up.
    ///
    /// `prompt` sees the session (with the latest notifications) and the
    /// number of rejected attempts so far. Returns `true` once a name is in.
    pub fn add_with_prompt<F>(&mut self, mut prompt: F) -> Result<bool>
    where
        F: FnMut(&mut Self, usize) -> Result<Option<String>>,
    {
        let mut attempt = 0;
        while let Some(raw) = prompt(self, attempt)? {
            if self.add(&raw) {
                return Ok(true);
            }
            attempt += 1;
        }
        Ok(false)
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        match self.roster.remove(index) {
            Ok(name) => {
                self.notifications.success(messages::removed(&name));
                Some(name)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Clear after `confirm` agrees. An empty roster is reported without
    /// asking. Returns `true` if the roster was cleared.
    pub fn clear<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce(usize) -> Result<bool>,
    {
        let count = self.roster.len();
        if count == 0 {
            self.fail(ClearError::AlreadyEmpty);
            return Ok(false);
        }

        if !confirm(count)? {
            tracing::debug!("Clear declined");
            return Ok(false);
        }

        match self.roster.clear() {
            Ok(()) => {
                self.last_draw = None;
                self.notifications.success(messages::cleared(count));
                Ok(true)
            }
            Err(err) => {
                self.fail(err);
                Ok(false)
            }
        }
    }

    /// Draw a participant without revealing it yet
    pub fn draw(&mut self) -> Option<Selection> {
        match self.roster.draw() {
            Ok(selection) => {
                self.last_draw = None;
                Some(selection)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    pub fn reveal(&mut self, selection: Selection) {
        self.last_draw = Some(selection);
    }

    /// Export to the configured file, returning where it was written
    pub fn export(&mut self) -> Result<Option<PathBuf>> {
        let content = match self.roster.export() {
            Ok(content) => content,
            Err(err) => {
                self.fail(err);
                return Ok(None);
            }
        };

        let path = self.config.export_path();
        write_export(&path, &content)?;
        self.notifications.success(messages::exported(&path));
        Ok(Some(path))
    }

    pub fn render(&mut self) {
        println!();
        if self.roster.is_empty() {
            println!("No participants yet. Start by adding some names!");
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["#", "Name"]);
            for (i, name) in self.roster.names().iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), name.clone()]);
            }
            println!("{}", table);
        }

        if let Some(selection) = self.last_draw() {
            println!();
            println!("*** {} ***", messages::drawn(&selection.name));
        }

        for notification in self.notifications.visible() {
            match notification.kind {
                NotificationKind::Error => println!("[!] {}", notification.message),
                NotificationKind::Success => println!("[ok] {}", notification.message),
            }
        }
        println!();
    }
}

/// Interactive roster session. The roster lives only as long as this call.
pub async fn run_session(config: SessionConfig, assume_yes: bool) -> Result<()> {
    let reveal_delay = config.reveal_delay();
    let mut session = Session::new(config);
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut cursor = 0;

    tracing::info!("Roster session started");

    loop {
        session.render();

        cursor = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(cursor)
            .interact()?;

        match Action::ALL[cursor] {
            Action::Add => {
                session.add_with_prompt(|session, attempt| {
                    if attempt > 0 {
                        session.render();
                    }
                    let prompt = if attempt == 0 {
                        "Name"
                    } else {
                        "Name (blank to go back)"
                    };
                    let raw = Input::<String>::new()
                        .with_prompt(prompt)
                        .allow_empty(true)
                        .interact_text()?;
                    if attempt > 0 && raw.trim().is_empty() {
                        return Ok(None);
                    }
                    Ok(Some(raw))
                })?;
            }
            Action::Remove => {
                if session.roster().is_empty() {
                    session.notifications_mut().error("There is nobody to remove.");
                    continue;
                }
                let choice = Select::new()
                    .with_prompt("Remove who? (Esc to go back)")
                    .items(session.roster().names())
                    .default(0)
                    .interact_opt()?;
                if let Some(index) = choice {
                    session.remove(index);
                }
            }
            Action::Draw => {
                if let Some(selection) = session.draw() {
                    println!("Drawing...");
                    if reveal_after(reveal_delay).await {
                        session.reveal(selection);
                    } else {
                        session.notifications_mut().error("Draw cancelled.");
                    }
                }
            }
            Action::Export => {
                session.export()?;
            }
            Action::Clear => {
                session.clear(|count| {
                    if assume_yes {
                        return Ok(true);
                    }
                    let confirmed = Confirm::new()
                        .with_prompt(format!(
                            "Remove all {} participants? This cannot be undone.",
                            count
                        ))
                        .default(false)
                        .interact()?;
                    Ok(confirmed)
                })?;
            }
            Action::Quit => break,
        }
    }

    tracing::info!("Roster session ended with {} participants", session.roster().len());
    Ok(())
}
