use crate::scan::sanitize::sanitize_text;
use crate::types::error::AppError;
use serde::{Deserialize, Serialize};

/// One leader plus three additional members.
pub const TEAM_SIZE: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemberDraft {
    pub full_name: String,
    pub identifier: String,
    pub gender: String,
    pub department: String,
    pub year: String,
    pub section: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RRegistrationSubmit {
    pub team_name: String,
    pub members: Vec<MemberDraft>,
}

impl RRegistrationSubmit {
    /// Form-layer checks only. Capacity and uniqueness are re-validated at
    /// the store boundary; nothing here is trusted for integrity.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.team_name.trim().is_empty() {
            return Err(AppError::Validation("Team name is required".into()));
        }
        if self.members.len() != TEAM_SIZE {
            return Err(AppError::Validation(format!(
                "Expected exactly {} members, got {}",
                TEAM_SIZE,
                self.members.len()
            )));
        }
        for (i, m) in self.members.iter().enumerate() {
            let label = |field: &str| format!("Member {}: {} is required", i + 1, field);
            if m.full_name.trim().is_empty() {
                return Err(AppError::Validation(label("full name")));
            }
            if sanitize_text(&m.identifier).is_empty() {
                return Err(AppError::Validation(label("registration number")));
            }
            if m.department.trim().is_empty() {
                return Err(AppError::Validation(label("department")));
            }
            if m.section.trim().is_empty() {
                return Err(AppError::Validation(label("section")));
            }
            if !email_shape_ok(m.email.trim()) {
                return Err(AppError::Validation(format!(
                    "Member {}: invalid email format",
                    i + 1
                )));
            }
            if m.mobile.len() != 10 || !m.mobile.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AppError::Validation(format!(
                    "Member {}: mobile must be exactly 10 digits",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Canonical form handed to the registration saga: identifiers pass
    /// through the same sanitizer the check-in path uses, so a scan later
    /// matches what was stored, and surrounding whitespace is trimmed off
    /// the free-text fields.
    pub fn sanitized_members(&self) -> Vec<MemberDraft> {
        self.members
            .iter()
            .map(|m| MemberDraft {
                full_name: m.full_name.trim().to_string(),
                identifier: sanitize_text(&m.identifier),
                gender: m.gender.trim().to_string(),
                department: m.department.trim().to_string(),
                year: m.year.trim().to_string(),
                section: m.section.trim().to_string(),
                email: m.email.trim().to_string(),
                mobile: m.mobile.trim().to_string(),
            })
            .collect()
    }
}

// Same shape the registration form enforces: local@domain with a dot in the
// domain and no whitespace anywhere.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationSubmitRes {
    pub id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationStatusRes {
    pub open: bool,
    pub limit: u64,
    pub registered: u64,
}

#[derive(Serialize, Debug)]
pub struct TeamWithMembers {
    #[serde(flatten)]
    pub team: entity::team::Model,
    pub members: Vec<entity::member::Model>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResetRes {
    pub deleted: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSettingsUpdate {
    pub registrations_open: Option<bool>,
    pub registration_limit: Option<u64>,
}
