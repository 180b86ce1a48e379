//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
///
/// Only shape is checked here; the directory decides whether it matches.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a navigation target supplied by a client
pub fn validate_target(target: &str) -> Result<(), String> {
    if target.is_empty() {
        return Err("Target is required".to_string());
    }

    static TARGET_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = TARGET_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9-]{1,64}$").expect("Failed to compile target regex"));

    if !regex.is_match(target) {
        return Err("Target can only contain lowercase letters, digits and dashes".to_string());
    }

    Ok(())
}
