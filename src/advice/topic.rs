use serde::Serialize;
use strum::Display;

/// Topic families with dedicated prompt templates. Classification is ordered
/// first-match; a topic mentioning both LLMs and RAG classifies as `Llm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TopicCategory {
    Llm,
    Rag,
    MlOps,
    Healthcare,
    General,
}

impl TopicCategory {
    #[must_use]
    pub fn classify(topic: &str) -> Self {
        let lowered = topic.to_lowercase();
        if lowered.contains("llm") || lowered.contains("large language model") {
            Self::Llm
        } else if lowered.contains("rag") || lowered.contains("retrieval") {
            Self::Rag
        } else if lowered.contains("mlops") || lowered.contains("production") {
            Self::MlOps
        } else if lowered.contains("healthcare") || lowered.contains("clinical") {
            Self::Healthcare
        } else {
            Self::General
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisualKind {
    Architecture,
    Infographic,
    Flowchart,
    Comparison,
}

/// One image-generation prompt with its caption and alt text.
#[derive(Debug, Serialize)]
pub struct VisualPrompt {
    pub prompt: String,
    pub description: String,
    pub alt_text: String,
}

/// Build image-generation prompts for a topic.
///
/// `visualization` is matched by substring against the known kinds; when
/// nothing matches, a single infographic prompt is produced. `content_type`
/// refines the prompts for the targeted channel.
#[must_use]
pub fn prompts(topic: &str, content_type: &str, visualization: &str) -> Vec<VisualPrompt> {
    let category = TopicCategory::classify(topic);
    let requested = requested_kinds(visualization);

    let mut results: Vec<VisualPrompt> = requested
        .iter()
        .map(|&kind| VisualPrompt {
            prompt: template(category, kind, topic),
            description: describe(kind, topic),
            alt_text: alt_text(kind, topic),
        })
        .collect();

    if results.is_empty() {
        results.push(VisualPrompt {
            prompt: template(category, VisualKind::Infographic, topic),
            description: format!("Visual representation of {topic} concepts"),
            alt_text: format!("Visual diagram illustrating key concepts of {topic}"),
        });
    }

    let content_lower = content_type.to_lowercase();
    for result in &mut results {
        if content_lower.contains("linkedin") {
            result.prompt.push_str(", optimized for social media, professional networking content");
        }
        if content_lower.contains("blog") {
            result.prompt.push_str(", publication quality, academic research content");
        }
    }

    results
}

fn requested_kinds(visualization: &str) -> Vec<VisualKind> {
    let lowered = visualization.to_lowercase();
    let mut kinds = Vec::new();
    if lowered.contains("diagram") || lowered.contains("architecture") {
        kinds.push(VisualKind::Architecture);
    }
    if lowered.contains("infographic") || lowered.contains("info") {
        kinds.push(VisualKind::Infographic);
    }
    if lowered.contains("flowchart") || lowered.contains("process") {
        kinds.push(VisualKind::Flowchart);
    }
    if lowered.contains("comparison") || lowered.contains("chart") {
        kinds.push(VisualKind::Comparison);
    }
    kinds
}

fn describe(kind: VisualKind, topic: &str) -> String {
    match kind {
        VisualKind::Architecture => format!("Technical architecture diagram of {topic}"),
        VisualKind::Infographic => format!("Infographic explaining {topic} concepts and insights"),
        VisualKind::Flowchart => format!("Flowchart showing {topic} process and workflow"),
        VisualKind::Comparison => format!("Comparison chart of {topic} approaches and methods"),
    }
}

fn alt_text(kind: VisualKind, topic: &str) -> String {
    match kind {
        VisualKind::Architecture => format!("Technical diagram showing the architecture of {topic} system with components and data flow"),
        VisualKind::Infographic => format!("Infographic displaying key concepts and insights about {topic}"),
        VisualKind::Flowchart => format!("Flowchart illustrating the process and workflow of {topic}"),
        VisualKind::Comparison => format!("Comparison chart showing different approaches and methods for {topic}"),
    }
}

// The Rag, MlOps, and Healthcare templates describe their subject directly
// and do not interpolate the topic text.
fn template(category: TopicCategory, kind: VisualKind, topic: &str) -> String {
    match (category, kind) {
        (TopicCategory::Llm, VisualKind::Architecture) => format!(
            "Professional technical diagram of {topic} architecture, clean minimalist design, blue and white color scheme, showing neural network layers, transformers, attention mechanisms, vector embeddings, professional infographic style, high quality, detailed"
        ),
        (TopicCategory::Llm | TopicCategory::General, VisualKind::Infographic) => format!(
            "Modern infographic about {topic}, clean design, professional color palette, showing key concepts, statistics, and insights, minimalist style, high quality, detailed"
        ),
        (TopicCategory::Llm, VisualKind::Flowchart) => format!(
            "Professional flowchart of {topic} process, clean lines, logical flow, blue and white color scheme, technical diagram style, high quality, detailed"
        ),
        (TopicCategory::Llm | TopicCategory::General, VisualKind::Comparison) => format!(
            "Professional comparison chart of {topic}, side-by-side analysis, clean design, data visualization style, professional color scheme, high quality, detailed"
        ),
        (TopicCategory::Rag, VisualKind::Architecture) => {
            "Technical diagram of RAG (Retrieval-Augmented Generation) system architecture, showing knowledge base, retrieval system, language model, clean professional design, blue and green color scheme, high quality, detailed".to_string()
        }
        (TopicCategory::Rag, VisualKind::Infographic) => {
            "Modern infographic explaining RAG systems, showing retrieval process, knowledge integration, response generation, clean design, professional colors, high quality, detailed".to_string()
        }
        (TopicCategory::Rag, VisualKind::Flowchart) => {
            "Professional flowchart of RAG system workflow, showing query processing, document retrieval, knowledge synthesis, response generation, clean design, high quality, detailed".to_string()
        }
        (TopicCategory::Rag, VisualKind::Comparison) => {
            "Comparison chart of different RAG approaches, showing performance metrics, accuracy comparisons, clean professional design, high quality, detailed".to_string()
        }
        (TopicCategory::MlOps, VisualKind::Architecture) => {
            "Technical diagram of MLOps pipeline architecture, showing data processing, model training, deployment, monitoring, clean professional design, blue and orange color scheme, high quality, detailed".to_string()
        }
        (TopicCategory::MlOps, VisualKind::Infographic) => {
            "Modern infographic about MLOps best practices, showing automation, monitoring, deployment strategies, clean design, professional colors, high quality, detailed".to_string()
        }
        (TopicCategory::MlOps, VisualKind::Flowchart) => {
            "Professional flowchart of MLOps workflow, showing CI/CD pipeline, model versioning, deployment stages, clean design, high quality, detailed".to_string()
        }
        (TopicCategory::MlOps, VisualKind::Comparison) => {
            "Comparison chart of MLOps tools and platforms, showing features, capabilities, clean professional design, high quality, detailed".to_string()
        }
        (TopicCategory::Healthcare, VisualKind::Architecture) => {
            "Technical diagram of healthcare AI system architecture, showing medical data processing, AI models, clinical decision support, clean professional design, medical blue color scheme, high quality, detailed".to_string()
        }
        (TopicCategory::Healthcare, VisualKind::Infographic) => {
            "Modern infographic about healthcare AI applications, showing diagnosis, treatment, patient monitoring, clean design, professional medical colors, high quality, detailed".to_string()
        }
        (TopicCategory::Healthcare, VisualKind::Flowchart) => {
            "Professional flowchart of healthcare AI workflow, showing data collection, analysis, clinical decision making, clean design, high quality, detailed".to_string()
        }
        (TopicCategory::Healthcare, VisualKind::Comparison) => {
            "Comparison chart of healthcare AI approaches, showing accuracy, safety, regulatory compliance, clean professional design, high quality, detailed".to_string()
        }
        (TopicCategory::General, VisualKind::Architecture) => format!(
            "Professional technical diagram of {topic} system architecture, clean minimalist design, modern color scheme, showing components and connections, professional infographic style, high quality, detailed"
        ),
        (TopicCategory::General, VisualKind::Flowchart) => format!(
            "Professional flowchart of {topic} process, clean lines, logical flow, modern color scheme, technical diagram style, high quality, detailed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_precedence() {
        assert_eq!(TopicCategory::classify("LLM-powered RAG systems"), TopicCategory::Llm);
        assert_eq!(TopicCategory::classify("RAG in production"), TopicCategory::Rag);
        assert_eq!(TopicCategory::classify("MLOps for clinical trials"), TopicCategory::MlOps);
        assert_eq!(TopicCategory::classify("Clinical decision support"), TopicCategory::Healthcare);
        assert_eq!(TopicCategory::classify("Graph databases"), TopicCategory::General);
    }

    #[test]
    fn test_prompt_interpolates_topic_for_llm() {
        let results = prompts("LLM quantization", "research blog", "architecture diagram");
        assert_eq!(results.len(), 1);
        assert!(results[0].prompt.contains("LLM quantization"));
        assert!(results[0].prompt.ends_with(", publication quality, academic research content"));
        assert_eq!(results[0].description, "Technical architecture diagram of LLM quantization");
    }

    #[test]
    fn test_rag_templates_are_fixed_text() {
        let results = prompts("rag evaluation", "blog", "diagram");
        assert!(results[0].prompt.contains("Retrieval-Augmented Generation"));
        assert!(!results[0].prompt.contains("rag evaluation"));
    }

    #[test]
    fn test_multiple_kinds_from_one_request() {
        let results = prompts("mlops rollouts", "blog", "flowchart and comparison chart");
        assert_eq!(results.len(), 2);
        assert!(results[0].prompt.contains("MLOps workflow"));
        assert!(results[1].prompt.contains("MLOps tools and platforms"));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_infographic() {
        let results = prompts("vector search", "linkedin post", "sketch");
        assert_eq!(results.len(), 1);
        assert!(results[0].prompt.contains("Modern infographic about vector search"));
        assert!(results[0].prompt.ends_with(", optimized for social media, professional networking content"));
        assert_eq!(results[0].description, "Visual representation of vector search concepts");
    }

    #[test]
    fn test_linkedin_and_blog_suffixes_stack() {
        let results = prompts("topic", "linkedin blog crosspost", "infographic");
        assert!(results[0].prompt.contains("optimized for social media"));
        assert!(results[0].prompt.ends_with(", publication quality, academic research content"));
    }
}
