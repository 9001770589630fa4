//! Customer domain model

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer on file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with required fields
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            phone: None,
            email: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate customer data before sending it to the backend
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("customer name cannot be empty".to_string());
        }
        if let Some(email) = &self.email {
            if !valid_email(email) {
                return Err(format!("invalid email address: {}", email));
            }
        }
        if let Some(phone) = &self.phone {
            if !valid_phone(phone) {
                return Err(format!("invalid phone number: {}", phone));
            }
        }
        Ok(())
    }
}

/// Loose email shape check; the backend stays the authority
fn valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(email.trim())
}

/// Digits with optional leading +, separators allowed, 6-15 digits total
fn valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if !(6..=15).contains(&digits.len()) {
        return false;
    }
    let re = Regex::new(r"^\+?[\d\s\-()]+$").unwrap();
    re.is_match(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(valid_email("ada@example.com"));
        assert!(valid_email(" ada@example.co.uk "));
        assert!(!valid_email("ada@example"));
        assert!(!valid_email("not an email"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(valid_phone("+1 (555) 867-5309"));
        assert!(valid_phone("01711-000000"));
        assert!(!valid_phone("12345"));
        assert!(!valid_phone("call me maybe"));
    }

    #[test]
    fn test_customer_validation() {
        let mut customer = Customer::new(Uuid::new_v4(), "Grace Hopper");
        assert!(customer.validate().is_ok());

        customer.email = Some("grace@navy.mil".to_string());
        customer.phone = Some("+1 555 0100".to_string());
        assert!(customer.validate().is_ok());

        customer.email = Some("grace@".to_string());
        assert!(customer.validate().is_err());
    }
}
