//! Fixed placeholder tables, one per public content type.
//!
//! These are what the site renders before an operator has seeded any real
//! records, and what it falls back to if the store is unreachable. The
//! values are part of the public contract — the marketing pages are built
//! against them — so they change only deliberately.

use serde_json::{json, Value};

pub fn placeholder_services() -> Vec<Value> {
    vec![
        json!({
            "name": "Signature Cut & Finish",
            "description": "Precision cut, luxury cleanse, high-gloss finish.",
            "duration_minutes": 60,
            "price_from": 95.0,
            "category": "Cut & Style"
        }),
        json!({
            "name": "Balayage Luminé",
            "description": "Hand-painted highlights for sunlit dimension.",
            "duration_minutes": 180,
            "price_from": 240.0,
            "category": "Color"
        }),
        json!({
            "name": "Keratin Silk Infusion",
            "description": "Smoothing treatment for mirror-shine and control.",
            "duration_minutes": 150,
            "price_from": 280.0,
            "category": "Treatment"
        }),
    ]
}

pub fn placeholder_stylists() -> Vec<Value> {
    vec![
        json!({
            "name": "Aria Bennett",
            "bio": "Creative Director. Editorial finishes and precision bobs.",
            "specialty": ["Cutting", "Editorial"],
            "photo_url": "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?q=80&w=1200&auto=format&fit=crop"
        }),
        json!({
            "name": "Luca Romano",
            "bio": "Senior Colourist. Lived-in blondes and Italian brunettes.",
            "specialty": ["Balayage", "Color"],
            "photo_url": "https://images.unsplash.com/photo-1520975922203-b8807aabde6c?q=80&w=1200&auto=format&fit=crop"
        }),
        json!({
            "name": "Maya Chen",
            "bio": "Treatment Specialist. Keratin and scalp wellness.",
            "specialty": ["Treatment", "Scalp"],
            "photo_url": "https://images.unsplash.com/photo-1607247130973-1eaba0e1ff55?q=80&w=1200&auto=format&fit=crop"
        }),
    ]
}

pub fn placeholder_reviews() -> Vec<Value> {
    vec![
        json!({
            "name": "Sofia",
            "rating": 5,
            "comment": "Flawless service – my hair has never looked better.",
            "source": "Google"
        }),
        json!({
            "name": "James",
            "rating": 5,
            "comment": "Luxury from start to finish. Highly recommend.",
            "source": "Google"
        }),
        json!({
            "name": "Layla",
            "rating": 5,
            "comment": "Beautiful space, expert team, immaculate results.",
            "source": "Google"
        }),
    ]
}

pub fn placeholder_promotions() -> Vec<Value> {
    vec![json!({
        "title": "New Guest Welcome",
        "description": "Enjoy 15% off your first colour service.",
        "code": "WELCOME15"
    })]
}

pub fn placeholder_faqs() -> Vec<Value> {
    vec![
        json!({
            "question": "Do you offer consultations?",
            "answer": "Yes, complimentary consultations are available for all services."
        }),
        json!({
            "question": "What is your cancellation policy?",
            "answer": "We kindly ask for 24 hours' notice to reschedule or cancel."
        }),
    ]
}

pub fn placeholder_gallery() -> Vec<Value> {
    vec![
        json!({
            "image_url": "https://images.unsplash.com/photo-1514575114800-4eec5aadae06?q=80&w=1600&auto=format&fit=crop",
            "caption": "Balayage Luminé",
            "category": "Color"
        }),
        json!({
            "image_url": "https://images.unsplash.com/photo-1503951458645-643d53bfd90f?q=80&w=1600&auto=format&fit=crop",
            "caption": "Classic Bob",
            "category": "Cut"
        }),
        json!({
            "image_url": "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?q=80&w=1600&auto=format&fit=crop",
            "caption": "Runway Finish",
            "category": "Style"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{Faq, GalleryItem, Promotion, Review, Service, Stylist};

    #[test]
    fn test_placeholder_table_sizes() {
        assert_eq!(placeholder_services().len(), 3);
        assert_eq!(placeholder_stylists().len(), 3);
        assert_eq!(placeholder_reviews().len(), 3);
        assert_eq!(placeholder_promotions().len(), 1);
        assert_eq!(placeholder_faqs().len(), 2);
        assert_eq!(placeholder_gallery().len(), 3);
    }

    #[test]
    fn test_placeholder_services_satisfy_schema_bounds() {
        for value in placeholder_services() {
            let service: Service = serde_json::from_value(value).unwrap();
            service.validate().unwrap();
        }
    }

    #[test]
    fn test_placeholder_stylists_satisfy_schema_bounds() {
        for value in placeholder_stylists() {
            let stylist: Stylist = serde_json::from_value(value).unwrap();
            stylist.validate().unwrap();
            // rating is absent in the table; the schema default applies
            assert_eq!(stylist.rating, Some(4.9));
        }
    }

    #[test]
    fn test_placeholder_reviews_satisfy_schema_bounds() {
        for value in placeholder_reviews() {
            let review: Review = serde_json::from_value(value).unwrap();
            review.validate().unwrap();
        }
    }

    #[test]
    fn test_remaining_placeholders_deserialize() {
        for value in placeholder_promotions() {
            let _: Promotion = serde_json::from_value(value).unwrap();
        }
        for value in placeholder_faqs() {
            let _: Faq = serde_json::from_value(value).unwrap();
        }
        for value in placeholder_gallery() {
            let _: GalleryItem = serde_json::from_value(value).unwrap();
        }
    }

    #[test]
    fn test_placeholder_service_names_are_the_quiz_catalog() {
        let names: Vec<String> = placeholder_services()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Signature Cut & Finish",
                "Balayage Luminé",
                "Keratin Silk Infusion"
            ]
        );
    }
}
