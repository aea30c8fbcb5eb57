//! Helpers over the restricted markdown subset used by post bodies:
//! `#`/`##`/`###` headings, triple-backtick code fences, `>` blockquotes,
//! blank-line-separated paragraphs.

use chrono::{DateTime, Utc};

use crate::domain::BlogPost;

/// A heading extracted from a post body, for table-of-contents rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `#`, 2 for `##`, 3 for `###`.
    pub level: u8,
    pub text: String,
    /// Zero-based source line index, usable as a stable anchor.
    pub line: usize,
}

/// Extract the heading outline from a post body.
/// Lines inside fenced code blocks are ignored, so a `# comment` in a
/// shell snippet never shows up in the table of contents.
pub fn outline(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_fence = false;

    for (line_idx, line) in content.lines().enumerate() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let hashes = line.chars().take_while(|c| *c == '#').count();
        if (1..=3).contains(&hashes) {
            let rest = &line[hashes..];
            if let Some(text) = rest.strip_prefix(' ') {
                let text = text.trim();
                if !text.is_empty() {
                    headings.push(Heading {
                        level: hashes as u8,
                        text: text.to_string(),
                        line: line_idx,
                    });
                }
            }
        }
    }

    headings
}

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, at 200 words per minute.
/// Never less than one minute.
pub fn reading_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}

/// Display form of a post date, e.g. "August 15, 2025".
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Other posts sharing at least one tag with `post`, most shared tags
/// first (stable for equal counts), at most `limit` results.
pub fn related_posts(post: &BlogPost, all: &[BlogPost], limit: usize) -> Vec<BlogPost> {
    let shared = |candidate: &BlogPost| {
        candidate
            .tags
            .iter()
            .filter(|tag| post.tags.contains(tag))
            .count()
    };

    let mut related: Vec<BlogPost> = all
        .iter()
        .filter(|candidate| candidate.id != post.id && shared(candidate) > 0)
        .cloned()
        .collect();
    related.sort_by(|a, b| shared(b).cmp(&shared(a)));
    related.truncate(limit);
    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogPost, PostDraft};

    fn tagged(title: &str, tags: &[&str]) -> BlogPost {
        BlogPost::from_draft(PostDraft {
            title: title.to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    #[test]
    fn outline_extracts_levels_and_lines() {
        let content = "# Title\n\nIntro paragraph.\n\n## Section\n\n### Detail\n";
        let headings = outline(content);
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading {
            level: 1,
            text: "Title".to_string(),
            line: 0
        });
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[2].level, 3);
        assert_eq!(headings[2].line, 6);
    }

    #[test]
    fn outline_skips_fenced_code() {
        let content = "# Real\n```bash\n# not a heading\n```\n## Also Real\n";
        let texts: Vec<_> = outline(content).into_iter().map(|h| h.text).collect();
        assert_eq!(texts, vec!["Real", "Also Real"]);
    }

    #[test]
    fn outline_ignores_deeper_headings_and_bare_hashes() {
        let content = "#### too deep\n#nospace\n# \n# ok\n";
        let texts: Vec<_> = outline(content).into_iter().map(|h| h.text).collect();
        assert_eq!(texts, vec!["ok"]);
    }

    #[test]
    fn reading_time_has_a_floor_of_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("just a few words"), 1);
    }

    #[test]
    fn reading_time_rounds_up() {
        let words_201 = vec!["word"; 201].join(" ");
        assert_eq!(reading_time_minutes(&words_201), 2);
        let words_400 = vec!["word"; 400].join(" ");
        assert_eq!(reading_time_minutes(&words_400), 2);
    }

    #[test]
    fn display_date_is_long_form() {
        let date: DateTime<Utc> = "2025-08-15T09:12:31Z".parse().unwrap();
        assert_eq!(format_display_date(date), "August 15, 2025");
        let date: DateTime<Utc> = "2024-01-05T00:00:00Z".parse().unwrap();
        assert_eq!(format_display_date(date), "January 5, 2024");
    }

    #[test]
    fn related_posts_rank_by_shared_tags() {
        let subject = tagged("subject", &["rust", "wasm", "perf"]);
        let close = tagged("close", &["rust", "wasm"]);
        let far = tagged("far", &["perf"]);
        let unrelated = tagged("unrelated", &["css"]);
        let all = vec![
            subject.clone(),
            far.clone(),
            close.clone(),
            unrelated.clone(),
        ];

        let related = related_posts(&subject, &all, 10);
        let titles: Vec<_> = related.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["close", "far"]);

        assert_eq!(related_posts(&subject, &all, 1).len(), 1);
        assert!(related_posts(&unrelated, &[unrelated.clone()], 10).is_empty());
    }
}
