//! Disease-specific treatment advice for classifier results

use serde::Serialize;

use crate::models::DiseaseLabel;

/// Confidence below which the advice carries a second-opinion note
pub const SECOND_OPINION_CONFIDENCE: f64 = 0.6;

/// Treatment guidance for a diagnosed leaf condition
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiseaseAdvice {
    pub label: DiseaseLabel,
    pub disease: &'static str,
    pub severity: &'static str,
    pub immediate_actions: Vec<&'static str>,
    pub preventive_measures: Vec<&'static str>,
    pub monitoring: Vec<&'static str>,
    pub fertilizer_advice: &'static str,
    pub organic_solutions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_note: Option<String>,
}

/// Look up advice for a label, noting low detection confidence
///
/// A zero confidence means no score was reported, so it carries no note.
pub fn lookup(label: DiseaseLabel, confidence: Option<f64>) -> DiseaseAdvice {
    let mut advice = base_advice(label);
    if let Some(confidence) = confidence.filter(|c| c.is_finite() && *c > 0.0) {
        if confidence < SECOND_OPINION_CONFIDENCE {
            advice.confidence_note = Some(format!(
                "⚠️ Detection confidence: {:.1}%. Consider getting second opinion.",
                confidence * 100.0
            ));
        }
    }
    advice
}

fn base_advice(label: DiseaseLabel) -> DiseaseAdvice {
    match label {
        DiseaseLabel::Blight => DiseaseAdvice {
            label,
            disease: "Leaf Blight",
            severity: "High",
            immediate_actions: vec![
                "🚨 Remove and destroy affected leaves immediately",
                "💧 Reduce watering frequency - avoid overhead watering",
                "🌿 Apply copper-based fungicide spray every 7-10 days",
                "🍃 Improve air circulation around plants",
            ],
            preventive_measures: vec![
                "🌱 Plant resistant varieties in future seasons",
                "💨 Ensure proper plant spacing for air circulation",
                "🚰 Use drip irrigation instead of sprinkler systems",
                "🧹 Clean garden tools between plants",
            ],
            monitoring: vec![
                "👁️ Check plants daily for new spots",
                "📊 Monitor humidity levels (keep below 85%)",
                "🌡️ Optimal temperature range: 20-25°C",
            ],
            fertilizer_advice: "Reduce nitrogen fertilizer temporarily. Apply balanced NPK (10-10-10) after disease control.",
            organic_solutions: vec![
                "🥛 Spray diluted milk solution (1:10 ratio)",
                "🧄 Neem oil application every 5-7 days",
                "🍃 Baking soda spray (1 tsp per liter water)",
            ],
            confidence_note: None,
        },
        DiseaseLabel::Healthy => DiseaseAdvice {
            label,
            disease: "No Disease Detected",
            severity: "None",
            immediate_actions: vec![
                "✅ Continue current care routine",
                "💧 Maintain regular watering schedule",
                "🌿 Monitor for any changes in leaf color or texture",
            ],
            preventive_measures: vec![
                "🔄 Rotate crops annually to prevent soil depletion",
                "🌱 Apply organic compost monthly",
                "🛡️ Maintain preventive spray schedule with neem oil",
                "🌾 Ensure proper plant nutrition",
            ],
            monitoring: vec![
                "📅 Weekly health inspections",
                "🌧️ Monitor weather conditions for disease risks",
                "🐛 Check for early pest signs",
            ],
            fertilizer_advice: "Apply balanced fertilizer (NPK 20-20-20) bi-weekly during growing season.",
            organic_solutions: vec![
                "🍂 Mulch around plants to retain moisture",
                "🦋 Encourage beneficial insects with companion planting",
                "☀️ Ensure 6-8 hours of direct sunlight daily",
            ],
            confidence_note: None,
        },
        DiseaseLabel::Mosaic => DiseaseAdvice {
            label,
            disease: "Mosaic Virus",
            severity: "High",
            immediate_actions: vec![
                "🚨 Isolate affected plants immediately",
                "🔥 Remove and burn infected plants (do not compost)",
                "🧤 Disinfect tools with 10% bleach solution",
                "🚫 Avoid handling healthy plants after touching infected ones",
            ],
            preventive_measures: vec![
                "🐛 Control aphids and other virus-carrying insects",
                "🌱 Use certified virus-free seeds and seedlings",
                "🧹 Maintain strict garden hygiene",
                "🚰 Avoid overhead watering",
            ],
            monitoring: vec![
                "🔍 Inspect new growth for mosaic patterns",
                "🐜 Monitor for aphid populations",
                "📈 Track spread to neighboring plants",
            ],
            fertilizer_advice: "Boost plant immunity with phosphorus-rich fertilizer. Avoid high nitrogen during infection.",
            organic_solutions: vec![
                "🌿 Spray insecticidal soap for aphid control",
                "🧄 Apply neem oil to deter virus vectors",
                "🍃 Use reflective mulch to confuse aphids",
            ],
            confidence_note: None,
        },
        DiseaseLabel::Rust => DiseaseAdvice {
            label,
            disease: "Leaf Rust",
            severity: "Medium",
            immediate_actions: vec![
                "🍃 Remove rust-infected leaves and dispose in trash",
                "💨 Improve air circulation around plants",
                "🌿 Apply sulfur-based fungicide spray",
                "💧 Water at soil level, avoid wetting leaves",
            ],
            preventive_measures: vec![
                "🌱 Choose rust-resistant plant varieties",
                "📏 Maintain proper plant spacing",
                "🌤️ Avoid watering in evening hours",
                "🧹 Clean up fallen leaves regularly",
            ],
            monitoring: vec![
                "👀 Check undersides of leaves for orange spores",
                "🌡️ Monitor temperature (rust thrives in 20-25°C)",
                "💧 Watch humidity levels (high humidity increases risk)",
            ],
            fertilizer_advice: "Apply potassium-rich fertilizer to strengthen plant resistance. Reduce nitrogen temporarily.",
            organic_solutions: vec![
                "🧄 Weekly neem oil applications",
                "☕ Spray compost tea to boost plant immunity",
                "🌿 Plant garlic nearby as natural fungicide",
            ],
            confidence_note: None,
        },
        DiseaseLabel::Unknown => DiseaseAdvice {
            label,
            disease: "Unidentified Condition",
            severity: "Unknown",
            immediate_actions: vec![
                "📸 Take clearer photos with better lighting",
                "🔍 Consult agricultural expert for identification",
                "🌿 Isolate plant as precautionary measure",
            ],
            preventive_measures: vec!["Not applicable until proper identification"],
            monitoring: vec!["Not applicable until proper identification"],
            fertilizer_advice: "Not applicable - proper diagnosis required first",
            organic_solutions: vec!["Not applicable until proper identification"],
            confidence_note: None,
        },
    }
}
