//! Pause dialogue: NPC speech that suspends player motion while it is shown

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A modal interaction that gates player motion
pub trait PauseDialogue {
    /// Whether motion is currently suspended
    fn is_active(&self) -> bool;

    /// Called once per tick while active
    fn advance(&mut self, event_pressed: bool);
}

/// Lines spoken by one NPC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechEvent {
    pub speaker: String,
    pub lines: Vec<String>,
    current: usize,
    texting: bool,
}

impl SpeechEvent {
    pub fn new(speaker: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            speaker: speaker.into(),
            lines,
            current: 0,
            texting: false,
        }
    }

    /// Whether a line is currently on screen
    pub fn is_texting(&self) -> bool {
        self.texting
    }

    /// Put the first line on screen
    pub fn begin(&mut self) {
        self.current = 0;
        self.texting = !self.lines.is_empty();
    }

    /// Move to the next line; stops texting after the last one
    pub fn next(&mut self) {
        self.current += 1;
        if self.current >= self.lines.len() {
            self.current = 0;
            self.texting = false;
        }
    }

    pub fn current_line(&self) -> Option<&str> {
        if self.texting {
            self.lines.get(self.current).map(String::as_str)
        } else {
            None
        }
    }
}

/// Tracks which speech events have been seen
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    pub heard: Vec<String>,
}

/// Registry of speech events with at most one engaged at a time
#[derive(Debug, Default)]
pub struct DialogueSystem {
    events: HashMap<String, SpeechEvent>,
    active: Option<String>,
    pub history: ConversationHistory,
}

impl DialogueSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a speech event under `key`, replacing any previous one
    pub fn register(&mut self, key: impl Into<String>, event: SpeechEvent) {
        self.events.insert(key.into(), event);
    }

    /// Engage the speech event under `key`. Returns false when another
    /// dialogue is already engaged or the key is unknown.
    pub fn engage(&mut self, key: &str) -> bool {
        if self.active.is_some() {
            return false;
        }
        if !self.events.contains_key(key) {
            warn!(key, "No speech event registered");
            return false;
        }

        info!(key, "Dialogue engaged");
        self.active = Some(key.to_string());
        if !self.history.heard.iter().any(|heard| heard == key) {
            self.history.heard.push(key.to_string());
        }
        true
    }

    /// Key of the engaged speech event
    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Line currently on screen
    pub fn current_line(&self) -> Option<&str> {
        let key = self.active.as_ref()?;
        self.events.get(key)?.current_line()
    }
}

impl PauseDialogue for DialogueSystem {
    fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn advance(&mut self, event_pressed: bool) {
        let Some(key) = self.active.clone() else {
            return;
        };
        let Some(event) = self.events.get_mut(&key) else {
            self.active = None;
            return;
        };

        if !event.is_texting() {
            event.begin();
            if !event.is_texting() {
                // Nothing to say
                self.active = None;
            }
            return;
        }

        if event_pressed {
            event.next();
            debug!(key = key.as_str(), line = event.current, "Dialogue advanced");
            if !event.is_texting() {
                info!(key = key.as_str(), "Dialogue finished");
                self.active = None;
            }
        }
    }
}
