//! Copy-on-write mutation operations.
//!
//! Every operation takes the current `Project` by reference and returns
//! a fresh value; the input is never modified. Updates and deletes that
//! reference an unknown id return an unchanged copy rather than an
//! error. Title-like fields are validated before anything is touched.

use crate::{Chapter, Character, DocumentError, IdProvider, Project, PromptCard, Scene};

fn require(value: &str, field: &'static str) -> Result<(), DocumentError> {
    if value.trim().is_empty() {
        Err(DocumentError::EmptyField(field))
    } else {
        Ok(())
    }
}

pub fn add_chapter(
    project: &Project,
    title: &str,
    ids: &dyn IdProvider,
) -> Result<Project, DocumentError> {
    require(title, "chapter title")?;
    let chapter = Chapter {
        id: ids.next_id(),
        title: title.to_string(),
        order: project.chapters.len() as u32,
        scenes: Vec::new(),
    };
    let mut chapters = project.chapters.clone();
    chapters.push(chapter);
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

pub fn rename_chapter(
    project: &Project,
    chapter_id: &str,
    title: &str,
) -> Result<Project, DocumentError> {
    require(title, "chapter title")?;
    let chapters = project
        .chapters
        .iter()
        .map(|chapter| {
            if chapter.id == chapter_id {
                Chapter {
                    title: title.to_string(),
                    ..chapter.clone()
                }
            } else {
                chapter.clone()
            }
        })
        .collect();
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

/// Removing a chapter discards its scenes with it; sibling chapters keep
/// their `order` values (gaps are allowed).
pub fn remove_chapter(project: &Project, chapter_id: &str) -> Result<Project, DocumentError> {
    let chapters = project
        .chapters
        .iter()
        .filter(|chapter| chapter.id != chapter_id)
        .cloned()
        .collect();
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

pub fn add_scene(
    project: &Project,
    chapter_id: &str,
    title: &str,
    ids: &dyn IdProvider,
) -> Result<Project, DocumentError> {
    require(title, "scene title")?;
    let chapters = project
        .chapters
        .iter()
        .map(|chapter| {
            if chapter.id == chapter_id {
                let scene = Scene {
                    id: ids.next_id(),
                    title: title.to_string(),
                    content: String::new(),
                    order: chapter.scenes.len() as u32,
                };
                let mut scenes = chapter.scenes.clone();
                scenes.push(scene);
                Chapter {
                    scenes,
                    ..chapter.clone()
                }
            } else {
                chapter.clone()
            }
        })
        .collect();
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

pub fn rename_scene(
    project: &Project,
    chapter_id: &str,
    scene_id: &str,
    title: &str,
) -> Result<Project, DocumentError> {
    require(title, "scene title")?;
    map_scene(project, chapter_id, scene_id, |scene| Scene {
        title: title.to_string(),
        ..scene.clone()
    })
}

/// Editor save: replaces the content and, when a non-empty title is
/// supplied, the title as well. Content itself is not validated.
pub fn save_scene(
    project: &Project,
    chapter_id: &str,
    scene_id: &str,
    content: &str,
    title: Option<&str>,
) -> Result<Project, DocumentError> {
    map_scene(project, chapter_id, scene_id, |scene| {
        let title = match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => scene.title.clone(),
        };
        Scene {
            title,
            content: content.to_string(),
            ..scene.clone()
        }
    })
}

pub fn remove_scene(
    project: &Project,
    chapter_id: &str,
    scene_id: &str,
) -> Result<Project, DocumentError> {
    let chapters = project
        .chapters
        .iter()
        .map(|chapter| {
            if chapter.id == chapter_id {
                let scenes = chapter
                    .scenes
                    .iter()
                    .filter(|scene| scene.id != scene_id)
                    .cloned()
                    .collect();
                Chapter {
                    scenes,
                    ..chapter.clone()
                }
            } else {
                chapter.clone()
            }
        })
        .collect();
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

fn map_scene(
    project: &Project,
    chapter_id: &str,
    scene_id: &str,
    update: impl Fn(&Scene) -> Scene,
) -> Result<Project, DocumentError> {
    let chapters = project
        .chapters
        .iter()
        .map(|chapter| {
            if chapter.id == chapter_id {
                let scenes = chapter
                    .scenes
                    .iter()
                    .map(|scene| {
                        if scene.id == scene_id {
                            update(scene)
                        } else {
                            scene.clone()
                        }
                    })
                    .collect();
                Chapter {
                    scenes,
                    ..chapter.clone()
                }
            } else {
                chapter.clone()
            }
        })
        .collect();
    Ok(Project {
        chapters,
        ..project.clone()
    })
}

pub fn add_character(
    project: &Project,
    name: &str,
    description: &str,
    traits: Vec<String>,
    background: &str,
    ids: &dyn IdProvider,
) -> Result<Project, DocumentError> {
    require(name, "character name")?;
    let character = Character {
        id: ids.next_id(),
        name: name.to_string(),
        description: description.to_string(),
        traits,
        background: background.to_string(),
        image: None,
    };
    let mut characters = project.characters.clone();
    characters.push(character);
    Ok(Project {
        characters,
        ..project.clone()
    })
}

/// Whole-entity replace by id.
pub fn update_character(
    project: &Project,
    character: &Character,
) -> Result<Project, DocumentError> {
    require(&character.name, "character name")?;
    let characters = project
        .characters
        .iter()
        .map(|existing| {
            if existing.id == character.id {
                character.clone()
            } else {
                existing.clone()
            }
        })
        .collect();
    Ok(Project {
        characters,
        ..project.clone()
    })
}

pub fn remove_character(project: &Project, character_id: &str) -> Result<Project, DocumentError> {
    let characters = project
        .characters
        .iter()
        .filter(|character| character.id != character_id)
        .cloned()
        .collect();
    Ok(Project {
        characters,
        ..project.clone()
    })
}

pub fn add_prompt(
    project: &Project,
    title: &str,
    content: &str,
    category: &str,
    tags: Vec<String>,
    ids: &dyn IdProvider,
) -> Result<Project, DocumentError> {
    require(title, "prompt title")?;
    require(content, "prompt content")?;
    let prompt = PromptCard {
        id: ids.next_id(),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        tags,
    };
    let mut prompts = project.prompts.clone();
    prompts.push(prompt);
    Ok(Project {
        prompts,
        ..project.clone()
    })
}

pub fn update_prompt(project: &Project, prompt: &PromptCard) -> Result<Project, DocumentError> {
    require(&prompt.title, "prompt title")?;
    require(&prompt.content, "prompt content")?;
    let prompts = project
        .prompts
        .iter()
        .map(|existing| {
            if existing.id == prompt.id {
                prompt.clone()
            } else {
                existing.clone()
            }
        })
        .collect();
    Ok(Project {
        prompts,
        ..project.clone()
    })
}

pub fn remove_prompt(project: &Project, prompt_id: &str) -> Result<Project, DocumentError> {
    let prompts = project
        .prompts
        .iter()
        .filter(|prompt| prompt.id != prompt_id)
        .cloned()
        .collect();
    Ok(Project {
        prompts,
        ..project.clone()
    })
}
