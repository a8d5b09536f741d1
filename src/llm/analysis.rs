//! Typed form of the model's analysis and the parser that produces it.

use serde::{Deserialize, Serialize};

use super::LlmError;

/// Overall tone of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(alias = "positive", alias = "POSITIVE")]
    Positive,
    #[serde(alias = "negative", alias = "NEGATIVE")]
    Negative,
    #[serde(alias = "neutral", alias = "NEUTRAL")]
    Neutral,
    #[serde(alias = "mixed", alias = "MIXED")]
    Mixed,
}

/// Engagement rating. The model is asked for "1-10" and answers with either
/// a number or a string such as `"7"` or `"7/10"`; both are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngagementScore {
    Number(f64),
    Text(String),
}

impl EngagementScore {
    /// Numeric value of the score, if one can be read.
    pub fn value(&self) -> Option<f64> {
        match self {
            EngagementScore::Number(n) => Some(*n),
            EngagementScore::Text(s) => s.split('/').next()?.trim().parse().ok(),
        }
    }
}

/// Suggested rewrites of the post for different platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rewrites {
    pub friendly: String,
    pub professional: String,
    pub concise: String,
}

/// Sentiment and engagement analysis of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment: Sentiment,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub engagement_score: EngagementScore,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub rewrites: Rewrites,
    pub summary: String,
}

/// Parse the model's raw reply into an [`Analysis`].
///
/// Markdown code fences are stripped first. If the reply still isn't a JSON
/// object, the outermost `{...}` span is tried before giving up.
pub fn parse_analysis(raw: &str) -> Result<Analysis, LlmError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    match serde_json::from_str(cleaned) {
        Ok(analysis) => Ok(analysis),
        Err(first_err) => {
            let span = cleaned
                .find('{')
                .zip(cleaned.rfind('}'))
                .filter(|(start, end)| start < end)
                .map(|(start, end)| &cleaned[start..=end]);

            match span {
                Some(span) if span.len() < cleaned.len() => serde_json::from_str(span)
                    .map_err(|e| LlmError::Parse(format!("malformed analysis JSON: {}", e))),
                _ => Err(LlmError::Parse(format!(
                    "malformed analysis JSON: {}",
                    first_err
                ))),
            }
        }
    }
}

fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line (e.g. "json")
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "sentiment": "Positive",
        "emotions": ["joy", "satisfaction"],
        "topics": ["product review"],
        "engagement_score": "7",
        "suggestions": ["Add a photo", "Tag the brand", "Ask a question"],
        "audience": "Online shoppers",
        "hashtags": ["#love", "#review"],
        "rewrites": {
            "friendly": "Totally obsessed with this!",
            "professional": "I am very pleased with this product.",
            "concise": "Love it!"
        },
        "summary": "The author is happy with a product."
    }"##;

    #[test]
    fn test_parse_plain_json() {
        let analysis = parse_analysis(SAMPLE).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.emotions, vec!["joy", "satisfaction"]);
        assert_eq!(analysis.engagement_score.value(), Some(7.0));
        assert_eq!(analysis.rewrites.concise, "Love it!");
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", SAMPLE);
        let analysis = parse_analysis(&fenced).unwrap();
        assert_eq!(analysis.summary, "The author is happy with a product.");
    }

    #[test]
    fn test_parse_json_with_preamble() {
        let chatty = format!("Here is the analysis:\n{}\nHope this helps.", SAMPLE);
        let analysis = parse_analysis(&chatty).unwrap();
        assert_eq!(analysis.hashtags.len(), 2);
    }

    #[test]
    fn test_numeric_score_and_lowercase_sentiment() {
        let raw = r#"{
            "sentiment": "negative",
            "engagement_score": 3,
            "rewrites": {"friendly": "a", "professional": "b", "concise": "c"},
            "summary": "Unhappy customer."
        }"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert_eq!(analysis.engagement_score, EngagementScore::Number(3.0));
        assert!(analysis.topics.is_empty());
    }

    #[test]
    fn test_score_with_denominator() {
        let score = EngagementScore::Text("8/10".to_string());
        assert_eq!(score.value(), Some(8.0));
        let score = EngagementScore::Text("very".to_string());
        assert_eq!(score.value(), None);
    }

    #[test]
    fn test_malformed_output_is_rejected() {
        assert!(matches!(
            parse_analysis("I cannot analyze this."),
            Err(LlmError::Parse(_))
        ));
        assert!(matches!(
            parse_analysis(r#"{"sentiment": "Positive"}"#),
            Err(LlmError::Parse(_))
        ));
        assert!(matches!(parse_analysis("```json\n```"), Err(LlmError::EmptyResponse)));
    }
}
