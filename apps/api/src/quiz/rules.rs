//! Recommendation Engine — ordered keyword rules mapping a hair-quiz
//! submission to service suggestions.
//!
//! This is a static rule table, not a learned or configurable model: any
//! change means editing the rules here. The rules are independent — zero,
//! one, or all of them may fire — and their output order is fixed. When
//! nothing fires, the engine falls back to a single consultation entry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct QuizInput {
    pub hair_type: String,
    pub condition: String,
    #[serde(default)]
    pub scalp: Option<String>,
    pub goals: Vec<String>,
    #[serde(default)]
    pub past_treatments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub service: String,
    pub price_from: f64,
    pub why: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

fn suggestion(service: &str, price_from: f64, why: &str) -> Recommendation {
    Recommendation {
        service: service.to_string(),
        price_from,
        why: why.to_string(),
    }
}

/// Evaluates the rule table against a quiz submission.
///
/// Matching is case-insensitive substring search over `condition` and the
/// space-joined goals text, with one historical quirk kept on purpose: the
/// colour rule checks the raw goals list for the exact token "colour" AND
/// the joined text for the substring "color". Both checks stay as-is.
pub fn recommend(input: &QuizInput) -> QuizResponse {
    let condition = input.condition.to_lowercase();
    let goals_text = input.goals.join(" ").to_lowercase();

    let mut recommendations = Vec::new();

    if condition.contains("frizz") || goals_text.contains("smooth") {
        recommendations.push(suggestion(
            "Keratin Silk Infusion",
            280.0,
            "Intensive smoothing to reduce frizz and add mirror-shine.",
        ));
    }

    if goals_text.contains("volume") {
        recommendations.push(suggestion(
            "Signature Cut & Finish",
            95.0,
            "Precision shape tailored to enhance natural volume.",
        ));
    }

    if input.goals.iter().any(|goal| goal == "colour") || goals_text.contains("color") {
        recommendations.push(suggestion(
            "Balayage Luminé",
            240.0,
            "Lived-in dimension with soft, seamless tones.",
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(suggestion(
            "Personalised Consultation",
            0.0,
            "Meet your stylist to design a bespoke plan.",
        ));
    }

    QuizResponse {
        summary: "Curated for your hair profile.".to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(condition: &str, goals: &[&str]) -> QuizInput {
        QuizInput {
            hair_type: "wavy".to_string(),
            condition: condition.to_string(),
            scalp: None,
            goals: goals.iter().map(|g| g.to_string()).collect(),
            past_treatments: None,
        }
    }

    fn services(response: &QuizResponse) -> Vec<&str> {
        response
            .recommendations
            .iter()
            .map(|r| r.service.as_str())
            .collect()
    }

    #[test]
    fn test_frizz_and_volume_fire_in_order_without_colour() {
        let response = recommend(&quiz("frizz", &["smooth", "volume"]));
        assert_eq!(
            services(&response),
            vec!["Keratin Silk Infusion", "Signature Cut & Finish"]
        );
    }

    #[test]
    fn test_empty_input_yields_single_consultation() {
        let response = recommend(&quiz("", &[]));
        assert_eq!(
            response.recommendations,
            vec![Recommendation {
                service: "Personalised Consultation".to_string(),
                price_from: 0.0,
                why: "Meet your stylist to design a bespoke plan.".to_string(),
            }]
        );
    }

    #[test]
    fn test_all_three_rules_can_fire_together() {
        let response = recommend(&quiz("frizzy ends", &["more volume", "fresh color"]));
        assert_eq!(
            services(&response),
            vec![
                "Keratin Silk Infusion",
                "Signature Cut & Finish",
                "Balayage Luminé"
            ]
        );
    }

    #[test]
    fn test_condition_matching_is_case_insensitive() {
        let response = recommend(&quiz("Bad FRIZZ lately", &[]));
        assert_eq!(services(&response), vec!["Keratin Silk Infusion"]);
    }

    #[test]
    fn test_colour_exact_token_fires_rule() {
        let response = recommend(&quiz("", &["colour"]));
        assert_eq!(services(&response), vec!["Balayage Luminé"]);
    }

    #[test]
    fn test_capitalised_colour_does_not_fire_rule() {
        // "Colour" fails the exact-token check, and its lowercase form
        // does not contain the substring "color". Preserved quirk.
        let response = recommend(&quiz("", &["Colour"]));
        assert_eq!(services(&response), vec!["Personalised Consultation"]);
    }

    #[test]
    fn test_color_substring_inside_goal_fires_rule() {
        let response = recommend(&quiz("", &["thinking about recoloring"]));
        assert_eq!(services(&response), vec!["Balayage Luminé"]);
    }

    #[test]
    fn test_prices_match_the_service_catalog() {
        let response = recommend(&quiz("frizz", &["volume", "color"]));
        let prices: Vec<f64> = response
            .recommendations
            .iter()
            .map(|r| r.price_from)
            .collect();
        assert_eq!(prices, vec![280.0, 95.0, 240.0]);
    }

    #[test]
    fn test_summary_is_fixed() {
        assert_eq!(
            recommend(&quiz("", &[])).summary,
            "Curated for your hair profile."
        );
    }
}
