#![allow(dead_code)]

//! Content record schemas. The API never accepts these over the wire —
//! real records are seeded externally straight into the document store —
//! but the shapes and their bounds are the contract the placeholder tables
//! and any seeded data must satisfy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_stylist_rating() -> Option<f64> {
    Some(4.9)
}

fn default_review_source() -> String {
    "Google".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration_minutes: i64,
    pub price_from: f64,
    #[serde(default)]
    pub category: Option<String>,
}

impl Service {
    pub fn validate(&self) -> Result<(), String> {
        if !(15..=300).contains(&self.duration_minutes) {
            return Err("duration_minutes must be between 15 and 300".to_string());
        }
        if self.price_from < 0.0 {
            return Err("price_from must be non-negative".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stylist {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub specialty: Option<Vec<String>>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default = "default_stylist_rating")]
    pub rating: Option<f64>,
}

impl Stylist {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err("rating must be between 0 and 5".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: i64,
    pub comment: String,
    #[serde(default = "default_review_source")]
    pub source: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Review {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err("rating must be between 1 and 5".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
