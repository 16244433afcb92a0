use crate::config::Config;
use crate::facts::content_facts::{BlogFacts, ContentFacts, PostFacts};
use crate::facts::patterns::{self, Vocabulary};
use camino::Utf8Path;
use std::fs;
use std::io;

/// Gather facts from the generated content artifacts.
///
/// A missing artifact is a normal condition (the pipeline may not have produced
/// it yet) and yields zeroed facts for that channel. Any other read failure is
/// logged and likewise yields zeroed facts, so fact gathering itself never
/// fails.
#[must_use]
pub fn gather(base_dir: &Utf8Path, config: &Config) -> ContentFacts {
    ContentFacts {
        posts: read_artifact(base_dir, &config.linkedin_file).map(|text| analyze_posts(&text)).unwrap_or_default(),
        blogs: read_artifact(base_dir, &config.blogs_file).map(|text| analyze_blogs(&text)).unwrap_or_default(),
    }
}

fn read_artifact(base_dir: &Utf8Path, name: &str) -> Option<String> {
    let path = base_dir.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("artifact {path} not found, treating as empty");
            None
        }
        Err(e) => {
            log::warn!("unable to read artifact {path}: {e}");
            None
        }
    }
}

#[expect(clippy::cast_precision_loss, reason = "word counts are far below f64 precision limits")]
fn analyze_posts(text: &str) -> PostFacts {
    let generated = patterns::split_items(text).len() as u64;
    let total_words = patterns::count_words(text);

    PostFacts {
        generated,
        total_words,
        avg_length: total_words as f64 / generated.max(1) as f64,
        with_hashtags: patterns::count_hashtags(text),
        with_visualizations: patterns::count_image_refs(text),
        technical_depth: patterns::technical_depth(text, Vocabulary::Posts, total_words),
    }
}

#[expect(clippy::cast_precision_loss, reason = "word counts are far below f64 precision limits")]
fn analyze_blogs(text: &str) -> BlogFacts {
    let generated = patterns::split_items(text).len() as u64;
    let total_words = patterns::count_words(text);

    BlogFacts {
        generated,
        total_words,
        avg_length: total_words as f64 / generated.max(1) as f64,
        with_code: patterns::count_code_blocks(text),
        with_diagrams: patterns::count_image_refs(text),
        technical_depth: patterns::technical_depth(text, Vocabulary::Blogs, total_words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;
    use tempfile::tempdir;

    fn posts_fixture() -> String {
        let mut text = String::new();
        _ = write!(
            text,
            "Post one about a transformer model with forty words padding {} #AI #ML\n---\n",
            "pad ".repeat(30)
        );
        _ = write!(text, "Post two, plain text and an image ![arch](diagram.png)\n---\n");
        _ = write!(text, "Post three closes the file\n");
        text
    }

    #[test]
    fn test_gather_missing_artifacts_yields_zeros() {
        let dir = tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let facts = gather(base, &Config::default());
        assert_eq!(facts, ContentFacts::default());
    }

    #[test]
    fn test_gather_posts_counts() {
        let dir = tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let config = Config::default();
        fs::write(base.join(&config.linkedin_file), posts_fixture()).unwrap();

        let facts = gather(base, &config);
        assert_eq!(facts.posts.generated, 3);
        assert_eq!(facts.posts.with_hashtags, 2);
        assert_eq!(facts.posts.with_visualizations, 1);
        assert!(facts.posts.total_words > 0);
        assert!(facts.posts.technical_depth > 0.0);
        assert_eq!(facts.blogs, BlogFacts::default());
    }

    #[test]
    fn test_gather_blogs_counts() {
        let dir = tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let config = Config::default();
        let blog = "Deep dive on inference latency\n```rust\nfn f() {}\n```\n---\nSecond entry ![fig](f.png)\n";
        fs::write(base.join(&config.blogs_file), blog).unwrap();

        let facts = gather(base, &config);
        assert_eq!(facts.blogs.generated, 2);
        assert_eq!(facts.blogs.with_code, 1);
        assert_eq!(facts.blogs.with_diagrams, 1);
        assert_eq!(facts.posts, PostFacts::default());
    }

    #[test]
    fn test_gather_is_deterministic() {
        let dir = tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let config = Config::default();
        fs::write(base.join(&config.linkedin_file), posts_fixture()).unwrap();

        assert_eq!(gather(base, &config), gather(base, &config));
    }

    #[test]
    fn test_avg_length_is_words_per_item() {
        let dir = tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let config = Config::default();
        fs::write(base.join(&config.linkedin_file), "one two\n---\nthree four five six\n").unwrap();

        let facts = gather(base, &config);
        assert_eq!(facts.posts.generated, 2);
        assert!((facts.posts.avg_length - 3.0).abs() < f64::EPSILON);
    }
}
