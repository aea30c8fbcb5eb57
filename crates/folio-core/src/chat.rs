//! Rule-based chat responder for the site's assistant widget.
//!
//! Pure keyword matching over a canned-reply table, no model and no state.
//! The shipped table is intentionally small; sites are expected to supply
//! their own via [`ChatResponder::new`].

/// A keyword-matching responder. Matching is case-insensitive substring
/// containment; the first matching table entry wins, then the code and
/// general development buckets, then the unknown reply.
pub struct ChatResponder {
    replies: Vec<(String, String)>,
    code_keywords: Vec<String>,
    dev_keywords: Vec<String>,
    code_reply: String,
    dev_reply: String,
    unknown_reply: String,
}

impl ChatResponder {
    /// Build a responder from a keyword table. Keywords are lowercased
    /// here so matching against the lowercased input works regardless of
    /// how the table was written.
    pub fn new(
        replies: Vec<(String, String)>,
        code_reply: impl Into<String>,
        dev_reply: impl Into<String>,
        unknown_reply: impl Into<String>,
    ) -> Self {
        let lower = |words: &[&str]| words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            replies: replies
                .into_iter()
                .map(|(keyword, reply)| (keyword.to_lowercase(), reply))
                .collect(),
            code_keywords: lower(&["code", "bug", "error", "function", "debug", "syntax"]),
            dev_keywords: lower(&["develop", "website", "app", "frontend", "backend", "design"]),
            code_reply: code_reply.into(),
            dev_reply: dev_reply.into(),
            unknown_reply: unknown_reply.into(),
        }
    }

    /// Pick the canned reply for a visitor message.
    pub fn reply(&self, input: &str) -> &str {
        let input = input.to_lowercase();
        let input = input.trim();

        for (keyword, reply) in &self.replies {
            if input.contains(keyword.as_str()) {
                return reply;
            }
        }

        if self.code_keywords.iter().any(|k| input.contains(k.as_str())) {
            return &self.code_reply;
        }
        if self.dev_keywords.iter().any(|k| input.contains(k.as_str())) {
            return &self.dev_reply;
        }

        &self.unknown_reply
    }
}

impl Default for ChatResponder {
    fn default() -> Self {
        let entry = |k: &str, v: &str| (k.to_string(), v.to_string());
        Self::new(
            vec![
                entry(
                    "hello",
                    "Hi there! Ask me anything about the blog or the projects on this site.",
                ),
                entry(
                    "blog",
                    "The blog covers frontend engineering, performance and testing. \
                     Use the search and tag filters on the listing page to dig in.",
                ),
                entry(
                    "project",
                    "The projects page showcases recent work. Each entry links to a \
                     write-up and, where public, the source.",
                ),
                entry(
                    "contact",
                    "You can reach out through the contact page; messages land \
                     straight in the site owner's inbox.",
                ),
            ],
            "Sounds like a code question! The blog's testing and debugging posts \
             are a good starting point.",
            "For development topics, check the latest posts or browse by tag.",
            "I'm not sure about that one. Try asking about the blog, the \
             projects, or how to get in touch.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_win_over_buckets() {
        let responder = ChatResponder::default();
        // "hello" is a table key even though the message mentions code.
        let reply = responder.reply("Hello! I have a code question");
        assert!(reply.starts_with("Hi there!"));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let responder = ChatResponder::default();
        assert_eq!(
            responder.reply("WHERE IS THE BLOG?"),
            responder.reply("tell me about your blog")
        );
    }

    #[test]
    fn bucket_precedence_is_code_then_dev_then_unknown() {
        let responder = ChatResponder::default();
        assert!(responder.reply("I found a bug").contains("code question"));
        assert!(responder.reply("tips on backend work").contains("development"));
        assert!(responder.reply("what's the weather").contains("not sure"));
    }

    #[test]
    fn custom_table_is_respected() {
        let responder = ChatResponder::new(
            vec![("pricing".to_string(), "It's free.".to_string())],
            "code",
            "dev",
            "unknown",
        );
        assert_eq!(responder.reply("What's your PRICING?"), "It's free.");
        assert_eq!(responder.reply("anything else"), "unknown");
    }

    #[test]
    fn uppercase_table_keywords_still_match() {
        let responder = ChatResponder::new(
            vec![("Pricing".to_string(), "It's free.".to_string())],
            "code",
            "dev",
            "unknown",
        );
        assert_eq!(responder.reply("pricing?"), "It's free.");
        assert_eq!(responder.reply("PRICING?"), "It's free.");
    }
}
