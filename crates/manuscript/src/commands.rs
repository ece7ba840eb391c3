use serde::{Deserialize, Serialize};

use crate::{ops, Character, DocumentError, IdProvider, Project, PromptCard};

/// One editing action against a project. Commands are how the UI shell
/// drives the model; serializable so a session can be journaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ProjectCommand {
    AddChapter {
        title: String,
    },
    RenameChapter {
        chapter_id: String,
        title: String,
    },
    RemoveChapter {
        chapter_id: String,
    },
    AddScene {
        chapter_id: String,
        title: String,
    },
    RenameScene {
        chapter_id: String,
        scene_id: String,
        title: String,
    },
    SaveScene {
        chapter_id: String,
        scene_id: String,
        content: String,
        #[serde(default)]
        title: Option<String>,
    },
    RemoveScene {
        chapter_id: String,
        scene_id: String,
    },
    AddCharacter {
        name: String,
        description: String,
        traits: Vec<String>,
        background: String,
    },
    UpdateCharacter {
        character: Character,
    },
    RemoveCharacter {
        character_id: String,
    },
    AddPrompt {
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
    },
    UpdatePrompt {
        prompt: PromptCard,
    },
    RemovePrompt {
        prompt_id: String,
    },
}

/// Applies a command, returning the next project value. The input is
/// untouched; validation failures leave no partial state behind.
pub fn apply_command(
    project: &Project,
    command: &ProjectCommand,
    ids: &dyn IdProvider,
) -> Result<Project, DocumentError> {
    match command {
        ProjectCommand::AddChapter { title } => ops::add_chapter(project, title, ids),
        ProjectCommand::RenameChapter { chapter_id, title } => {
            ops::rename_chapter(project, chapter_id, title)
        }
        ProjectCommand::RemoveChapter { chapter_id } => ops::remove_chapter(project, chapter_id),
        ProjectCommand::AddScene { chapter_id, title } => {
            ops::add_scene(project, chapter_id, title, ids)
        }
        ProjectCommand::RenameScene {
            chapter_id,
            scene_id,
            title,
        } => ops::rename_scene(project, chapter_id, scene_id, title),
        ProjectCommand::SaveScene {
            chapter_id,
            scene_id,
            content,
            title,
        } => ops::save_scene(project, chapter_id, scene_id, content, title.as_deref()),
        ProjectCommand::RemoveScene {
            chapter_id,
            scene_id,
        } => ops::remove_scene(project, chapter_id, scene_id),
        ProjectCommand::AddCharacter {
            name,
            description,
            traits,
            background,
        } => ops::add_character(project, name, description, traits.clone(), background, ids),
        ProjectCommand::UpdateCharacter { character } => ops::update_character(project, character),
        ProjectCommand::RemoveCharacter { character_id } => {
            ops::remove_character(project, character_id)
        }
        ProjectCommand::AddPrompt {
            title,
            content,
            category,
            tags,
        } => ops::add_prompt(project, title, content, category, tags.clone(), ids),
        ProjectCommand::UpdatePrompt { prompt } => ops::update_prompt(project, prompt),
        ProjectCommand::RemovePrompt { prompt_id } => ops::remove_prompt(project, prompt_id),
    }
}

/// Undo/redo over whole-project snapshots. Copy-on-write mutation makes
/// the previous value the exact inverse of any command.
#[derive(Debug, Default, Clone)]
pub struct History {
    undo_stack: Vec<Project>,
    redo_stack: Vec<Project>,
}

impl History {
    pub fn apply(
        &mut self,
        project: &mut Project,
        command: &ProjectCommand,
        ids: &dyn IdProvider,
    ) -> Result<(), DocumentError> {
        let next = apply_command(project, command, ids)?;
        self.undo_stack.push(std::mem::replace(project, next));
        self.redo_stack.clear();
        Ok(())
    }

    pub fn undo(&mut self, project: &mut Project) -> Result<(), DocumentError> {
        let previous = self
            .undo_stack
            .pop()
            .ok_or(DocumentError::HistoryEmpty("undo stack"))?;
        self.redo_stack.push(std::mem::replace(project, previous));
        Ok(())
    }

    pub fn redo(&mut self, project: &mut Project) -> Result<(), DocumentError> {
        let next = self
            .redo_stack
            .pop()
            .ok_or(DocumentError::HistoryEmpty("redo stack"))?;
        self.undo_stack.push(std::mem::replace(project, next));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequentialIds;

    #[test]
    fn test_apply_command_matches_direct_ops() {
        let ids = SequentialIds::starting_at(50);
        let project = Project::sample();
        let via_command = apply_command(
            &project,
            &ProjectCommand::AddScene {
                chapter_id: "ch1".to_string(),
                title: "Third".to_string(),
            },
            &ids,
        )
        .unwrap();
        let direct = ops::add_scene(&project, "ch1", "Third", &SequentialIds::starting_at(50)).unwrap();
        assert_eq!(via_command, direct);
    }

    #[test]
    fn test_history_undo_redo() {
        let ids = SequentialIds::new();
        let mut project = Project::sample();
        let mut history = History::default();

        history
            .apply(
                &mut project,
                &ProjectCommand::RemoveScene {
                    chapter_id: "ch1".to_string(),
                    scene_id: "sc1".to_string(),
                },
                &ids,
            )
            .unwrap();
        assert_eq!(project.chapter("ch1").unwrap().scenes.len(), 1);

        history.undo(&mut project).unwrap();
        assert_eq!(project.chapter("ch1").unwrap().scenes.len(), 2);

        history.redo(&mut project).unwrap();
        assert_eq!(project.chapter("ch1").unwrap().scenes.len(), 1);
    }

    #[test]
    fn test_failed_command_leaves_history_alone() {
        let ids = SequentialIds::new();
        let mut project = Project::sample();
        let mut history = History::default();

        let result = history.apply(
            &mut project,
            &ProjectCommand::AddChapter {
                title: "  ".to_string(),
            },
            &ids,
        );
        assert!(result.is_err());
        assert!(history.undo(&mut project).is_err());
    }

    #[test]
    fn test_history_exhaustion_errors() {
        let mut project = Project::sample();
        let mut history = History::default();
        assert!(matches!(
            history.undo(&mut project),
            Err(DocumentError::HistoryEmpty("undo stack"))
        ));
        assert!(matches!(
            history.redo(&mut project),
            Err(DocumentError::HistoryEmpty("redo stack"))
        ));
    }

    #[test]
    fn test_command_serde_shape() {
        let command = ProjectCommand::AddChapter {
            title: "Chapter 2".to_string(),
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["command"], "add_chapter");
        assert_eq!(json["title"], "Chapter 2");
    }
}
