use indoc::indoc;
use llm::CompletionRequest;

pub const GENERATE_TEMPERATURE: f32 = 0.7;

/// Returned verbatim when prompt generation fails.
pub const ERROR_OUTPUT: &str = "**Error generating prompts**\nPlease try again later.";

pub const FORMAT_INSTRUCTION: &str = indoc! {
    "Format as:
    **Main Prompt** (bold)
    - Variation 1 (bullet)
    - Variation 2 (bullet)
    *Follow-up Question* (italic)"
};

/// Free-text request carrying `plan` as the system instruction.
pub fn generate_request(model: &str, plan: &str) -> CompletionRequest {
    CompletionRequest::new(model, plan, FORMAT_INSTRUCTION).temperature(GENERATE_TEMPERATURE)
}

/// Best-effort guess at the main topic: the text after the first `**` up to
/// the next `**`, or to the end of the output if no closing marker follows.
pub fn extract_main_topic(output: &str) -> Option<&str> {
    output.split("**").nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm::ResponseFormat;

    #[test]
    fn request_is_free_text() {
        let req = generate_request("m", "the plan");
        assert_eq!(req.messages[0].content, "the plan");
        assert_eq!(req.messages[1].content, FORMAT_INSTRUCTION);
        assert_eq!(req.temperature, GENERATE_TEMPERATURE);
        assert_eq!(req.response_format, ResponseFormat::Text);
    }

    #[test]
    fn topic_is_first_bold_span() {
        let out = "**The Last Vegan Croissant**\n- A baker...\n- A rival...\n*What would you bake?*";
        assert_eq!(extract_main_topic(out), Some("The Last Vegan Croissant"));
    }

    #[test]
    fn text_before_marker_is_skipped() {
        assert_eq!(extract_main_topic("Prompt: **AI Ethics** today"), Some("AI Ethics"));
    }

    #[test]
    fn unclosed_marker_runs_to_end() {
        assert_eq!(extract_main_topic("**Hidden Gems of Europe"), Some("Hidden Gems of Europe"));
    }

    #[test]
    fn no_marker_no_topic() {
        assert_eq!(extract_main_topic("*italic only*"), None);
        assert_eq!(extract_main_topic(""), None);
    }
}
