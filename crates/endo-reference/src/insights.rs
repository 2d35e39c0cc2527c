//! Static recommendation bundles keyed by status label.

use endo_core::models::Insights;
use endo_core::panel::StatusLabel;

struct InsightsEntry {
    title: &'static str,
    description: &'static str,
    recommendations: &'static [&'static str],
    color: &'static str,
    urgency: &'static str,
}

const NORMAL: InsightsEntry = InsightsEntry {
    title: "Healthy Hormonal Balance",
    description: "Your hormone levels are within optimal ranges, indicating good endocrine health.",
    recommendations: &[
        "Maintain your current healthy lifestyle",
        "Continue regular exercise (30-45 min, 4-5 times/week)",
        "Ensure 7-9 hours of quality sleep",
        "Schedule routine check-ups every 6-12 months",
    ],
    color: "success",
    urgency: "low",
};

const MILD: InsightsEntry = InsightsEntry {
    title: "Mild Hormonal Variation",
    description: "Some hormone levels show minor deviations. This is often manageable with lifestyle adjustments.",
    recommendations: &[
        "Focus on stress management techniques (meditation, yoga)",
        "Optimize sleep schedule and quality",
        "Review diet for nutrient deficiencies",
        "Consider retesting in 4-6 weeks",
        "Track symptoms and energy levels",
    ],
    color: "warning",
    urgency: "moderate",
};

const MODERATE: InsightsEntry = InsightsEntry {
    title: "Moderate Hormonal Imbalance",
    description: "Your hormone levels show noticeable deviations that warrant attention and monitoring.",
    recommendations: &[
        "Schedule a consultation with your healthcare provider",
        "Consider comprehensive hormone panel testing",
        "Document current symptoms and health changes",
        "Avoid high-stress activities temporarily",
        "Review medications for hormonal interactions",
    ],
    color: "orange",
    urgency: "high",
};

const SEVERE: InsightsEntry = InsightsEntry {
    title: "Significant Hormonal Imbalance",
    description: "Your hormone levels show significant deviation from normal ranges. Medical consultation is recommended.",
    recommendations: &[
        "Consult an endocrinologist promptly",
        "Get comprehensive blood work and imaging if advised",
        "Do not self-medicate or take hormone supplements",
        "Keep a detailed symptom diary",
        "Follow up with your primary care physician",
    ],
    color: "danger",
    urgency: "urgent",
};

/// Look up the recommendation bundle for a status label.
pub fn for_status(status: StatusLabel) -> Insights {
    let entry = match status {
        StatusLabel::Normal => &NORMAL,
        StatusLabel::Mild => &MILD,
        StatusLabel::Moderate => &MODERATE,
        StatusLabel::Severe => &SEVERE,
    };
    Insights {
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        recommendations: entry.recommendations.iter().map(|r| r.to_string()).collect(),
        color: entry.color.to_string(),
        urgency: entry.urgency.to_string(),
    }
}
