//! Input validation functions
//!
//! Field-level checks shared by the user and student flows. Error strings are
//! the exact messages the API returns in 400 bodies.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() || email.len() > 255 {
        return Err("Invalid email".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email".to_string());
    }
    Ok(())
}

/// Validate a CPF (Brazilian taxpayer id): exactly 11 numeric digits
pub fn validate_cpf(cpf: &str) -> Result<(), String> {
    let cpf_regex = regex_lite::Regex::new(r"^\d{11}$").unwrap();
    if !cpf_regex.is_match(cpf) {
        return Err("CPF must contain 11 numeric digits".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a path id: must be a positive integer
pub fn validate_id(id: i64) -> Result<(), String> {
    if id <= 0 {
        return Err("Invalid ID".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("student@example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "no-at-sign", "a@b", "a b@c.d", "@missing.local"] {
            assert!(validate_email(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn cpf_must_be_eleven_digits() {
        assert!(validate_cpf("12345678901").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("123456789012").is_err());
        assert!(validate_cpf("1234567890a").is_err());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long-enough-1").is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn id_must_be_positive() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-5).is_err());
    }
}
