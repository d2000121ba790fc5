//! Prompt templates for the two model calls.

const SUMMARY_TEMPLATE: &str = "You are an expert content summarizer. Write a concise, \
informative summary of the following blog post in English. Focus on the main points, key \
insights and important takeaways. Keep it between 150 and 300 words and write in plain \
paragraphs without headings.

Title: {title}

Content:
{content}

Summary:";

const TRANSLATION_TEMPLATE: &str = "Translate the following English text into Urdu. \
Preserve the meaning and tone exactly and use natural, fluent Urdu script. Return only the \
Urdu translation with no commentary.

English text:
{text}

Urdu translation:";

pub fn summary_prompt(title: &str, content: &str) -> String {
    SUMMARY_TEMPLATE
        .replace("{title}", title)
        .replace("{content}", content)
}

pub fn translation_prompt(english_summary: &str) -> String {
    TRANSLATION_TEMPLATE.replace("{text}", english_summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_title_and_content() {
        let prompt = summary_prompt("My Trip", "We went to the mountains.");
        assert!(prompt.contains("Title: My Trip"));
        assert!(prompt.contains("We went to the mountains."));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_translation_prompt_embeds_text() {
        let prompt = translation_prompt("A short summary.");
        assert!(prompt.contains("Urdu"));
        assert!(prompt.contains("A short summary."));
        assert!(!prompt.contains("{text}"));
    }
}
