//! Write-side record schemas: appointment and contact submissions.
//!
//! Dates and times are carried as plain strings on purpose — the booking
//! flow stores whatever the site sent, and no cross-entity check is made
//! against services or stylists (ids are opaque here).

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "web".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub service_id: String,
    pub service_name: String,
    #[serde(default)]
    pub stylist_id: Option<String>,
    #[serde(default)]
    pub stylist_name: Option<String>,
    /// Date string YYYY-MM-DD.
    pub date: String,
    /// Time string HH:MM.
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Expected price at time of booking.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub calendar_synced: bool,
    /// email | whatsapp | sms
    #[serde(default)]
    pub reminder_method: Option<String>,
}

impl Appointment {
    /// Checks the request before any store call. Returns a descriptive
    /// message for the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("customer_name is required".to_string());
        }
        if self.service_id.trim().is_empty() {
            return Err("service_id is required".to_string());
        }
        if self.service_name.trim().is_empty() {
            return Err("service_name is required".to_string());
        }
        if self.date.trim().is_empty() {
            return Err("date is required".to_string());
        }
        if self.time.trim().is_empty() {
            return Err("time is required".to_string());
        }
        if let Some(price) = self.price {
            if price < 0.0 {
                return Err("price must be non-negative".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_appointment() -> Appointment {
        serde_json::from_value(json!({
            "customer_name": "Sofia Marsh",
            "service_id": "svc-1",
            "service_name": "Signature Cut & Finish",
            "date": "2025-06-09",
            "time": "10:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_minimal_appointment_passes_with_defaults() {
        let appt = valid_appointment();
        assert!(appt.validate().is_ok());
        assert_eq!(appt.source, "web");
        assert!(!appt.calendar_synced);
        assert!(appt.price.is_none());
    }

    #[test]
    fn test_missing_customer_name_is_rejected() {
        let result: Result<Appointment, _> = serde_json::from_value(json!({
            "service_id": "svc-1",
            "service_name": "Signature Cut & Finish",
            "date": "2025-06-09",
            "time": "10:00"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_customer_name_is_rejected() {
        let mut appt = valid_appointment();
        appt.customer_name = "   ".to_string();
        assert_eq!(
            appt.validate().unwrap_err(),
            "customer_name is required"
        );
    }

    #[test]
    fn test_blank_service_id_is_rejected() {
        let mut appt = valid_appointment();
        appt.service_id = String::new();
        assert_eq!(appt.validate().unwrap_err(), "service_id is required");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut appt = valid_appointment();
        appt.price = Some(-1.0);
        assert_eq!(
            appt.validate().unwrap_err(),
            "price must be non-negative"
        );
    }

    #[test]
    fn test_contact_message_requires_name_and_message() {
        let msg = ContactMessage {
            name: "Layla".to_string(),
            email: None,
            phone: None,
            message: String::new(),
        };
        assert_eq!(msg.validate().unwrap_err(), "message is required");

        let msg = ContactMessage {
            name: String::new(),
            email: None,
            phone: None,
            message: "Hello".to_string(),
        };
        assert_eq!(msg.validate().unwrap_err(), "name is required");
    }
}
