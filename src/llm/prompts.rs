//! Prompt templates for post analysis.

/// Prompt for analyzing a social media post. `{text}` is replaced with the post.
pub const ANALYSIS_PROMPT: &str = r#"You are a social media analysis assistant.
Analyze the given text and respond ONLY in valid JSON.
Do not include explanations or markdown. Do not wrap the JSON in a string.
Follow this exact JSON structure strictly:
{
  "sentiment": "<Positive/Negative/Neutral>",
  "emotions": ["<list of detected emotions>"],
  "topics": ["<list of main themes>"],
  "engagement_score": "<1-10 rating of how engaging this text is>",
  "suggestions": ["<3 short improvements for engagement>"],
  "audience": "<best-fit target audience>",
  "hashtags": ["<list of suggested hashtags>"],
  "rewrites": {
    "friendly": "<casual Instagram-style rewrite>",
    "professional": "<LinkedIn-style rewrite>",
    "concise": "<short Twitter/X-style rewrite>"
  },
  "summary": "<1-2 sentence summary of the post>"
}

text : '{text}'"#;

/// Embed the post text into the analysis prompt.
pub fn analysis_prompt(text: &str) -> String {
    ANALYSIS_PROMPT.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_once() {
        let prompt = analysis_prompt("I love this product!");
        assert!(prompt.ends_with("text : 'I love this product!'"));
        assert!(!prompt.contains("{text}"));
        assert_eq!(prompt.matches("I love this product!").count(), 1);
    }

    #[test]
    fn test_prompt_names_every_field() {
        for field in [
            "sentiment",
            "emotions",
            "topics",
            "engagement_score",
            "suggestions",
            "audience",
            "hashtags",
            "rewrites",
            "friendly",
            "professional",
            "concise",
            "summary",
        ] {
            assert!(
                ANALYSIS_PROMPT.contains(&format!("\"{}\"", field)),
                "missing {}",
                field
            );
        }
    }
}
