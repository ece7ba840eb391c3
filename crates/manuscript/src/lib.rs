use serde::{Deserialize, Serialize};
use thiserror::Error;

mod ids;
pub use ids::*;
mod ops;
pub use ops::*;
mod commands;
pub use commands::*;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("history empty: {0}")]
    HistoryEmpty(&'static str),
}

/// Fixed category labels offered by the prompt manager. Prompt cards
/// store the category as a plain string; nothing enforces membership.
pub const PROMPT_CATEGORIES: [(&str, &str); 6] = [
    ("general", "General"),
    ("character", "Character Development"),
    ("plot", "Plot Ideas"),
    ("dialogue", "Dialogue"),
    ("setting", "Setting & World Building"),
    ("editing", "Editing & Refinement"),
];

/// Root aggregate. Exactly one lives in the running application; every
/// editing operation replaces it wholesale (see `ops`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub updated_at: i64,
    pub chapters: Vec<Chapter>,
    pub characters: Vec<Character>,
    pub prompts: Vec<PromptCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Display/export sort key. Not required to be contiguous or to
    /// match array position; deletions leave gaps.
    pub order: u32,
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub content: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Reusable prompt stored on the project, independent of chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ids: &dyn IdProvider,
    ) -> Self {
        Self {
            id: ids.next_id(),
            title: title.into(),
            description: description.into(),
            updated_at: chrono::Utc::now().timestamp(),
            chapters: Vec::new(),
            characters: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// The seed project shown on first launch.
    pub fn sample() -> Self {
        Self {
            id: "1".to_string(),
            title: "My Novel".to_string(),
            description: "A captivating story about adventure and discovery.".to_string(),
            updated_at: chrono::Utc::now().timestamp(),
            chapters: vec![Chapter {
                id: "ch1".to_string(),
                title: "Chapter 1: Beginnings".to_string(),
                order: 0,
                scenes: vec![
                    Scene {
                        id: "sc1".to_string(),
                        title: "The Awakening".to_string(),
                        content: "It was a cold morning when everything changed...".to_string(),
                        order: 0,
                    },
                    Scene {
                        id: "sc2".to_string(),
                        title: "First Encounter".to_string(),
                        content: "The stranger approached cautiously, their eyes scanning the horizon..."
                            .to_string(),
                        order: 1,
                    },
                ],
            }],
            characters: vec![Character {
                id: "char1".to_string(),
                name: "Alex Morgan".to_string(),
                description: "The protagonist with a mysterious past".to_string(),
                traits: vec![
                    "brave".to_string(),
                    "resourceful".to_string(),
                    "haunted".to_string(),
                ],
                background: "Grew up in a small town but always dreamed of adventure. Left home at 18 after a family tragedy."
                    .to_string(),
                image: None,
            }],
            prompts: Vec::new(),
        }
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn scene(&self, chapter_id: &str, scene_id: &str) -> Option<&Scene> {
        self.chapter(chapter_id)?.scenes.iter().find(|s| s.id == scene_id)
    }

    pub fn character(&self, character_id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == character_id)
    }

    pub fn prompt(&self, prompt_id: &str) -> Option<&PromptCard> {
        self.prompts.iter().find(|p| p.id == prompt_id)
    }

    /// Chapters in display order. `order` is a sort key only, so gaps
    /// from deleted siblings are tolerated here rather than resequenced.
    pub fn sorted_chapters(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<_> = self.chapters.iter().collect();
        chapters.sort_by_key(|c| c.order);
        chapters
    }
}

impl Chapter {
    pub fn sorted_scenes(&self) -> Vec<&Scene> {
        let mut scenes: Vec<_> = self.scenes.iter().collect();
        scenes.sort_by_key(|s| s.order);
        scenes
    }
}
