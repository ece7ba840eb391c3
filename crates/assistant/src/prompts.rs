//! Purpose-to-prompt templating. Pure functions, total over the closed
//! purpose set; no randomness, no external state.

use crate::Purpose;

/// System instruction used when no recognized purpose applies.
pub const GENERIC_SYSTEM_INSTRUCTION: &str = "You are a helpful writing assistant. Provide thoughtful, creative, and useful responses to help with writing projects.";

/// Wrap the user's context in the instruction template for `purpose`.
pub fn build_user_prompt(purpose: Purpose, context: &str) -> String {
    match purpose {
        Purpose::PlotIdea => format!(
            "Generate three creative plot ideas or plot twists that could work well in this context: \"{context}\""
        ),
        Purpose::CharacterDevelopment => format!(
            "Suggest character development opportunities or backstory elements for this character: \"{context}\""
        ),
        Purpose::Dialogue => format!(
            "Write realistic and engaging dialogue for a character who is: \"{context}\""
        ),
        Purpose::SettingDescription => {
            format!("Create a vivid description for this setting: \"{context}\"")
        }
        Purpose::Conflict => format!(
            "Suggest interesting conflicts or obstacles that could arise in this scenario: \"{context}\""
        ),
        Purpose::Rewrite => format!(
            "Rewrite the following text to improve its quality while keeping the same meaning: \"{context}\""
        ),
    }
}

/// The system instruction sent to the generation server for `purpose`.
pub fn build_system_instruction(purpose: Purpose) -> &'static str {
    match purpose {
        Purpose::PlotIdea => {
            "You are a creative writing assistant. Generate three unique and creative plot ideas or plot twists. Be specific, original, and provide enough detail to spark inspiration."
        }
        Purpose::CharacterDevelopment => {
            "You are a character development expert. Suggest detailed character development opportunities or backstory elements. Focus on creating complex, believable characters with depth."
        }
        Purpose::Dialogue => {
            "You are a dialogue expert. Write realistic, engaging, and character-appropriate dialogue. Ensure the dialogue reveals character and advances the narrative."
        }
        Purpose::SettingDescription => {
            "You are a setting description specialist. Create vivid, immersive descriptions that engage multiple senses and establish atmosphere, mood, and context."
        }
        Purpose::Conflict => {
            "You are a narrative conflict expert. Suggest compelling conflicts or obstacles that create tension, challenge characters, and drive plot development."
        }
        Purpose::Rewrite => {
            "You are an editing assistant. Rewrite the provided text to improve quality, clarity, and impact while maintaining the original meaning and voice."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_context() {
        for purpose in Purpose::ALL {
            let prompt = build_user_prompt(purpose, "a lighthouse keeper");
            assert!(prompt.contains("\"a lighthouse keeper\""), "{purpose}: {prompt}");
        }
    }

    #[test]
    fn test_templates_are_deterministic() {
        assert_eq!(
            build_user_prompt(Purpose::Rewrite, "x"),
            build_user_prompt(Purpose::Rewrite, "x")
        );
    }

    #[test]
    fn test_system_instructions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for purpose in Purpose::ALL {
            assert!(seen.insert(build_system_instruction(purpose)));
        }
        assert!(!seen.contains(GENERIC_SYSTEM_INSTRUCTION));
    }
}
