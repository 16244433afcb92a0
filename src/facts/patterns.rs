//! Text scanning primitives shared by both artifact kinds.

use regex::Regex;
use std::sync::LazyLock;

/// Items are separated by horizontal rules: a run of three or more dashes
/// followed by a newline.
static ITEM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}\n").expect("separator pattern is valid"));

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("image pattern is valid"));

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```\w*\n.*?\n```").expect("code block pattern is valid"));

/// Vocabulary scanned for in LinkedIn posts.
static POST_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(LLM|transformer|architecture|performance|benchmark|optimization|implementation|algorithm|model|training|inference)\b")
        .expect("post vocabulary pattern is valid")
});

/// Vocabulary scanned for in research blogs.
static BLOG_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(architecture|performance|benchmark|optimization|implementation|algorithm|model|training|inference|efficiency|scalability|latency|throughput)\b",
    )
    .expect("blog vocabulary pattern is valid")
});

/// Split a file into items, dropping segments that are empty after trimming.
pub fn split_items(content: &str) -> Vec<&str> {
    ITEM_SEPARATOR.split(content).filter(|segment| !segment.trim().is_empty()).collect()
}

pub fn count_words(content: &str) -> u64 {
    content.split_whitespace().count() as u64
}

pub fn count_hashtags(content: &str) -> u64 {
    HASHTAG.find_iter(content).count() as u64
}

pub fn count_image_refs(content: &str) -> u64 {
    IMAGE_REF.find_iter(content).count() as u64
}

pub fn count_code_blocks(content: &str) -> u64 {
    CODE_BLOCK.find_iter(content).count() as u64
}

#[derive(Debug, Clone, Copy)]
pub enum Vocabulary {
    Posts,
    Blogs,
}

/// Technical vocabulary density: whole-word matches divided by total words.
///
/// The `* 100.0` is a heuristic amplifier that makes sparse vocabulary hits
/// register on the unit scale, not a percent conversion; the result is clamped
/// to 1.0.
pub fn technical_depth(content: &str, vocabulary: Vocabulary, total_words: u64) -> f64 {
    let pattern = match vocabulary {
        Vocabulary::Posts => &*POST_VOCABULARY,
        Vocabulary::Blogs => &*BLOG_VOCABULARY,
    };

    #[expect(clippy::cast_precision_loss, reason = "term and word counts are far below f64 precision limits")]
    let ratio = pattern.find_iter(content).count() as f64 / total_words.max(1) as f64;
    (ratio * 100.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_requires_three_dashes() {
        let content = "first\n--\nstill first\n---\nsecond\n";
        let items = split_items(content);
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("still first"));
    }

    #[test]
    fn test_split_drops_blank_segments() {
        let content = "one\n---\n\n   \n----\ntwo\n";
        assert_eq!(split_items(content).len(), 2);
    }

    #[test]
    fn test_split_long_rule_is_one_separator() {
        let content = "a\n----------\nb\n";
        assert_eq!(split_items(content).len(), 2);
    }

    #[test]
    fn test_count_hashtags_counts_occurrences() {
        // Double counting within one item is intentional
        assert_eq!(count_hashtags("#AI and #ML, plus #AI again"), 3);
        assert_eq!(count_hashtags("no tags here"), 0);
        assert_eq!(count_hashtags("# not a tag"), 0);
    }

    #[test]
    fn test_count_image_refs() {
        assert_eq!(count_image_refs("![alt](img.png) and ![](other.svg)"), 2);
        assert_eq!(count_image_refs("[link](not-an-image.png)"), 0);
    }

    #[test]
    fn test_count_code_blocks_with_and_without_language() {
        let content = "```rust\nfn main() {}\n```\ntext\n```\nplain\n```\n";
        assert_eq!(count_code_blocks(content), 2);
    }

    #[test]
    fn test_count_code_blocks_spans_lines() {
        let content = "```python\nline one\nline two\n```\n";
        assert_eq!(count_code_blocks(content), 1);
    }

    #[test]
    fn test_technical_depth_case_insensitive_whole_words() {
        // 2 matches ("LLM", "model") out of 6 words: 2/6*100 clamps to 1.0
        let depth = technical_depth("the llm is a model indeed", Vocabulary::Posts, 6);
        assert!((depth - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_technical_depth_no_partial_word_matches() {
        let depth = technical_depth("modeling remodeled", Vocabulary::Posts, 2);
        assert!(depth.abs() < f64::EPSILON);
    }

    #[test]
    fn test_technical_depth_sparse_text() {
        // 1 match in 1000 words: 1/1000*100 = 0.1
        let filler = "word ".repeat(999);
        let content = format!("{filler}benchmark");
        let depth = technical_depth(&content, Vocabulary::Blogs, 1000);
        assert!((depth - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_blog_vocabulary_includes_throughput_but_not_llm() {
        assert!(technical_depth("throughput", Vocabulary::Blogs, 1) > 0.0);
        assert!(technical_depth("llm", Vocabulary::Blogs, 1).abs() < f64::EPSILON);
    }
}
