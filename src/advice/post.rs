use serde::Serialize;

/// Engagement assessment for a single LinkedIn post.
#[derive(Debug, Serialize)]
pub struct PostAdvice {
    /// Predicted engagement score on a 1-10 scale
    pub engagement_score: u8,
    /// Up to five suggested hashtags, most specific first
    pub hashtag_suggestions: Vec<&'static str>,
    pub optimization_tips: Vec<&'static str>,
    pub target_audience_match: &'static str,
}

/// Keyword-pair rules appending hashtag groups, applied in order. Duplicates
/// across groups are kept; the final list is truncated to five.
const HASHTAG_RULES: &[(&str, &str, &[&str])] = &[
    ("research", "paper", &["#Research", "#AIResearch", "#MLResearch", "#AcademicResearch"]),
    ("llm", "large language model", &["#LLM", "#LargeLanguageModels", "#AI", "#MachineLearning"]),
    ("rag", "retrieval augmented generation", &["#RAG", "#RetrievalAugmentedGeneration", "#AI", "#NLP"]),
    ("innovation", "breakthrough", &["#Innovation", "#AIInnovation", "#ResearchInnovation", "#TechInnovation"]),
    ("optimal", "method", &["#OptimalMethods", "#ResearchMethods", "#AI", "#MachineLearning"]),
    ("scientist", "research", &["#ResearchScientist", "#AIScientist", "#MLScientist", "#TechResearch"]),
    ("pytorch", "tensorflow", &["#PyTorch", "#TensorFlow", "#DeepLearning", "#AI"]),
    ("arxiv", "paper", &["#ArXiv", "#ResearchPaper", "#Academic", "#AIResearch"]),
    ("healthcare", "clinical", &["#HealthcareAI", "#ClinicalAI", "#HealthTech", "#AI"]),
    ("finance", "fintech", &["#FinTech", "#FinanceAI", "#AI", "#MachineLearning"]),
];

const GENERAL_HASHTAGS: &[&str] = &["#LinkedIn", "#AIResearch", "#MachineLearning", "#ResearchScientist", "#TechResearch"];

const MAX_HASHTAGS: usize = 5;
const BASE_SCORE: u8 = 5;
const GOOD_SCORE: u8 = 7;
const LONG_POST_WORDS: usize = 50;
const SHORT_POST_CHARS: usize = 100;

/// Assess one post with the fixed engagement rules.
#[must_use]
pub fn analyze_post(content: &str) -> PostAdvice {
    let lowered = content.to_lowercase();

    let mut score = BASE_SCORE;
    if content.contains('?') {
        score += 1;
    }
    if content.contains('!') {
        score += 1;
    }
    if content.split_whitespace().count() > LONG_POST_WORDS {
        score += 1;
    }
    if content.contains('#') {
        score += 1;
    }
    if content.contains("https://") || content.contains("http://") {
        score += 1;
    }

    let mut hashtags = Vec::new();
    for (first, second, group) in HASHTAG_RULES {
        if lowered.contains(first) || lowered.contains(second) {
            hashtags.extend_from_slice(group);
        }
    }
    hashtags.extend_from_slice(GENERAL_HASHTAGS);
    hashtags.truncate(MAX_HASHTAGS);

    let mut tips = Vec::new();
    if score < GOOD_SCORE {
        tips.push("Add research depth to demonstrate scientific expertise");
        tips.push("Include relevant research hashtags");
        tips.push("Add a call-to-action for research discussion");
    }
    if content.len() < SHORT_POST_CHARS {
        tips.push("Expand on research concepts for better engagement");
    }
    if !content.contains('?') {
        tips.push("Ask a research question to encourage comments");
    }
    if !lowered.contains("research") && !lowered.contains("paper") {
        tips.push("Consider adding research insights");
    }
    if !lowered.contains("innovation") && !lowered.contains("optimal") {
        tips.push("Include innovation and optimal methods insights");
    }

    PostAdvice {
        engagement_score: score.min(10),
        hashtag_suggestions: hashtags,
        optimization_tips: tips,
        target_audience_match: if score >= GOOD_SCORE { "Good" } else { "Needs improvement" },
    }
}
