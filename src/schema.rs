// 📐 Shape Layer - Schema Validation
// Validates raw appliance input before anything reaches the registry

use crate::parser::RawAppliance;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// SCHEMA VALIDATOR
// ============================================================================

/// Validates a RawAppliance against the registry invariant:
/// non-empty name, positive finite power rating, finite usage hours
/// within [0, usage_ceiling].
///
/// Every violated field is reported, not just the first one.
pub struct SchemaValidator {
    /// Upper bound for daily usage hours. A day has 24 of them.
    usage_ceiling: f64,
}

impl SchemaValidator {
    pub fn new() -> Self {
        SchemaValidator {
            usage_ceiling: 24.0,
        }
    }

    /// Validate a raw appliance against the core Appliance schema
    pub fn validate_appliance(&self, raw: &RawAppliance) -> ValidationResult {
        let mut errors = Vec::new();

        if raw.name.is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is empty".to_string(),
                context: "Appliance".to_string(),
            });
        }

        if !raw.power_rating.is_finite() {
            errors.push(ValidationError {
                field: "power_rating".to_string(),
                message: format!("Must be a finite number, got {}", raw.power_rating),
                context: "Appliance".to_string(),
            });
        } else if raw.power_rating <= 0.0 {
            errors.push(ValidationError {
                field: "power_rating".to_string(),
                message: format!("Must be greater than 0 W, got {}", raw.power_rating),
                context: "Appliance".to_string(),
            });
        }

        if !raw.daily_usage_hours.is_finite() {
            errors.push(ValidationError {
                field: "daily_usage_hours".to_string(),
                message: format!("Must be a finite number, got {}", raw.daily_usage_hours),
                context: "Appliance".to_string(),
            });
        } else if raw.daily_usage_hours < 0.0 || raw.daily_usage_hours > self.usage_ceiling {
            errors.push(ValidationError {
                field: "daily_usage_hours".to_string(),
                message: format!(
                    "Must be between 0 and {}, got {}",
                    self.usage_ceiling, raw.daily_usage_hours
                ),
                context: "Appliance".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
