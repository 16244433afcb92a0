use super::common::{Common, CommonArgs};
use camino::Utf8PathBuf;
use clap::Parser;
use content_rank::advice::{self, TopicCategory};
use content_rank::facts::split_items;
use content_rank::Result;
use ohno::IntoAppError;

#[derive(Parser, Debug)]
pub struct AdviseArgs {
    /// File of post content to review instead of the configured posts file
    #[arg(long, value_name = "PATH")]
    pub file: Option<Utf8PathBuf>,

    /// Produce visualization prompts for this topic instead of reviewing posts
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Visualization kinds to generate prompts for
    #[arg(long, value_name = "KINDS", default_value = "infographic", requires = "topic")]
    pub visual: String,

    /// Target content type for the visualization prompts
    #[arg(long, value_name = "TYPE", default_value = "linkedin", requires = "topic")]
    pub content_type: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn advise_content(args: &AdviseArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    if let Some(topic) = &args.topic {
        return advise_visuals(topic, &args.content_type, &args.visual);
    }

    let path = match &args.file {
        Some(file) => file.clone(),
        None => common.base_dir.join(&common.config.linkedin_file),
    };

    let content = std::fs::read_to_string(&path).into_app_err_with(|| format!("reading {path}"))?;
    let posts = split_items(&content);
    if posts.is_empty() {
        println!("No posts found in {path}");
        return Ok(());
    }

    for (index, post) in posts.iter().enumerate() {
        let report = advice::analyze_post(post);
        let rendered = serde_json::to_string_pretty(&report).into_app_err("serializing post review")?;
        println!("Post {}:", index + 1);
        println!("{rendered}");
        println!();
    }

    Ok(())
}

fn advise_visuals(topic: &str, content_type: &str, visualization: &str) -> Result<()> {
    println!("Topic category: {}", TopicCategory::classify(topic));

    let prompts = advice::prompts(topic, content_type, visualization);
    let rendered = serde_json::to_string_pretty(&prompts).into_app_err("serializing visualization prompts")?;
    println!("{rendered}");

    Ok(())
}
