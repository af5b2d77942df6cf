use super::announce;
use colored::Colorize;
use postdeck_application::AppContext;
use postdeck_core::content::{
    CommentGenerationRequest, ContentGenerationRequest, PublishRequest, SCORE_MAX,
};

pub async fn generate(context: &AppContext, request: &ContentGenerationRequest) {
    let outcome = context.social_media.generate_content(request).await;
    announce("Generated content", &outcome);
    println!("\n{}", outcome.value());
}

pub async fn comment(context: &AppContext, request: &CommentGenerationRequest) {
    let outcome = context.social_media.generate_comment(request).await;
    announce("Generated comment", &outcome);
    println!("\n{}", outcome.value());
}

pub async fn evaluate(context: &AppContext, content: &str) {
    let outcome = context.social_media.evaluate_content(content).await;
    announce("Evaluation", &outcome);

    let eval = outcome.value();
    let labels = ["Cultural fit", "Virality", "Engagement", "Sentiment"];
    for (label, score) in labels.iter().zip(eval.scores()) {
        println!("  {label:<14} {score:>3}/{SCORE_MAX}");
    }
    if !eval.overall_feedback.is_empty() {
        println!("\n{}", eval.overall_feedback);
    }
    for suggestion in &eval.suggestions {
        println!("  {} {}", "•".cyan(), suggestion);
    }
    for replacement in &eval.word_replacements {
        println!(
            "  {} → {} ({})",
            replacement.original.red(),
            replacement.suggested.green(),
            replacement.reason.dimmed()
        );
    }
    for risk in &eval.risk_factors {
        println!("  {} {}", "⚠".yellow(), risk);
    }
    if !eval.recommended_tags.is_empty() {
        println!("  tags: {}", eval.recommended_tags.join(" "));
    }
}

pub async fn publish(context: &AppContext, request: &PublishRequest) {
    let outcome = context.social_media.publish_content(request).await;
    announce("Publish", &outcome);

    let verb = if request.scheduled_time.is_some() {
        "Scheduled"
    } else {
        "Published"
    };
    println!("   {} to {} account(s)", verb.green(), request.accounts.len());
}
