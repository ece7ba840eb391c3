//! Plain-text and markdown rendering of chapters and scenes.
//!
//! Output is deterministic for a given input and options. Page breaks
//! are emitted strictly between siblings, never before the first or
//! after the last.

use manuscript::{Chapter, Scene};

use crate::{ExportFormat, ExportOptions};

const SCENE_BREAK_PLAIN: &str = "\n\n----------\n\n";
const SCENE_BREAK_MARKDOWN: &str = "---\n\n";
const CHAPTER_BREAK_PLAIN: &str = "\n\n==========\n\n";
const CHAPTER_BREAK_MARKDOWN: &str = "\n\n---\n\n";

/// A scene on its own is just its content.
pub fn scene_body(scene: &Scene) -> &str {
    &scene.content
}

pub fn format_chapter(chapter: &Chapter, options: &ExportOptions) -> String {
    let mut out = String::new();

    if options.include_chapter_title {
        match options.format {
            ExportFormat::Markdown => {
                out.push_str(&format!("# {}\n\n", chapter.title));
            }
            ExportFormat::Plain => {
                out.push_str(&format!("{}\n\n", chapter.title));
            }
        }
    }

    let scenes = chapter.sorted_scenes();
    for (index, scene) in scenes.iter().enumerate() {
        if options.include_scene_titles {
            match options.format {
                ExportFormat::Markdown => {
                    out.push_str(&format!("## {}\n\n", scene.title));
                }
                ExportFormat::Plain => {
                    out.push_str(&format!("{}\n\n", scene.title));
                }
            }
        }

        out.push_str(&format!("{}\n\n", scene.content));

        if options.add_page_breaks && index < scenes.len() - 1 {
            out.push_str(match options.format {
                ExportFormat::Markdown => SCENE_BREAK_MARKDOWN,
                ExportFormat::Plain => SCENE_BREAK_PLAIN,
            });
        }
    }

    out
}

pub fn format_project(chapters: &[Chapter], options: &ExportOptions) -> String {
    let mut out = String::new();

    for (index, chapter) in chapters.iter().enumerate() {
        out.push_str(&format_chapter(chapter, options));

        if options.add_page_breaks && index < chapters.len() - 1 {
            out.push_str(match options.format {
                ExportFormat::Markdown => CHAPTER_BREAK_MARKDOWN,
                ExportFormat::Plain => CHAPTER_BREAK_PLAIN,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, scenes: Vec<(&str, &str)>) -> Chapter {
        Chapter {
            id: "ch".to_string(),
            title: title.to_string(),
            order: 0,
            scenes: scenes
                .into_iter()
                .enumerate()
                .map(|(i, (title, content))| Scene {
                    id: format!("sc{i}"),
                    title: title.to_string(),
                    content: content.to_string(),
                    order: i as u32,
                })
                .collect(),
        }
    }

    #[test]
    fn test_markdown_chapter_round_trip() {
        let chapter = chapter("Intro", vec![("Start", "Hello.")]);
        let options = ExportOptions {
            include_chapter_title: true,
            include_scene_titles: true,
            add_page_breaks: false,
            format: ExportFormat::Markdown,
        };
        assert_eq!(
            format_chapter(&chapter, &options),
            "# Intro\n\n## Start\n\nHello.\n\n"
        );
    }

    #[test]
    fn test_plain_titles_are_bare_lines() {
        let chapter = chapter("Intro", vec![("Start", "Hello.")]);
        let options = ExportOptions {
            format: ExportFormat::Plain,
            ..ExportOptions::default()
        };
        assert_eq!(format_chapter(&chapter, &options), "Intro\n\nStart\n\nHello.\n\n");
    }

    #[test]
    fn test_scene_breaks_only_between_siblings() {
        let chapter = chapter("C", vec![("a", "1"), ("b", "2"), ("c", "3")]);
        let options = ExportOptions {
            include_chapter_title: false,
            include_scene_titles: false,
            add_page_breaks: true,
            format: ExportFormat::Plain,
        };
        let out = format_chapter(&chapter, &options);
        assert_eq!(out.matches("----------").count(), 2);
        assert!(!out.starts_with("\n\n----------"));
        assert!(!out.ends_with("----------\n\n"));
        assert_eq!(out, "1\n\n\n\n----------\n\n2\n\n\n\n----------\n\n3\n\n");
    }

    #[test]
    fn test_no_breaks_for_single_scene() {
        let chapter = chapter("C", vec![("a", "1")]);
        let options = ExportOptions {
            add_page_breaks: true,
            format: ExportFormat::Markdown,
            ..ExportOptions::default()
        };
        let out = format_chapter(&chapter, &options);
        assert_eq!(out, "# C\n\n## a\n\n1\n\n");
    }

    #[test]
    fn test_chapter_breaks_in_project_export() {
        let chapters = vec![
            chapter("One", vec![("a", "1")]),
            chapter("Two", vec![("b", "2")]),
        ];
        let options = ExportOptions {
            include_chapter_title: true,
            include_scene_titles: false,
            add_page_breaks: true,
            format: ExportFormat::Plain,
        };
        let out = format_project(&chapters, &options);
        assert_eq!(out.matches("==========").count(), 1);
        assert_eq!(out, "One\n\n1\n\n\n\n==========\n\nTwo\n\n2\n\n");
    }

    #[test]
    fn test_markdown_project_break_marker() {
        let chapters = vec![
            chapter("One", vec![("a", "1")]),
            chapter("Two", vec![("b", "2")]),
        ];
        let options = ExportOptions {
            include_scene_titles: false,
            add_page_breaks: true,
            format: ExportFormat::Markdown,
            ..ExportOptions::default()
        };
        let out = format_project(&chapters, &options);
        assert_eq!(out, "# One\n\n1\n\n\n\n---\n\n# Two\n\n2\n\n");
    }

    #[test]
    fn test_scenes_render_in_order_key_sequence() {
        let mut ch = chapter("C", vec![("a", "1"), ("b", "2")]);
        ch.scenes[0].order = 5;
        ch.scenes[1].order = 2;
        let options = ExportOptions {
            include_chapter_title: false,
            include_scene_titles: false,
            add_page_breaks: false,
            format: ExportFormat::Plain,
        };
        assert_eq!(format_chapter(&ch, &options), "2\n\n1\n\n");
    }

    #[test]
    fn test_determinism() {
        let chapter = chapter("C", vec![("a", "1"), ("b", "2")]);
        let options = ExportOptions::default();
        assert_eq!(
            format_chapter(&chapter, &options),
            format_chapter(&chapter, &options)
        );
    }
}
