use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Lexical `YYYY-MM-DDTHH:MM:SSZ` shape. Not calendar-aware: `2024-19-39T59:09:59Z`
/// passes, and minutes/seconds must start with `0` or `5`.
pub static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-1][0-9]-[0-3][0-9]T[0-5][0-9]:[05][0-9]:[05][0-9]Z$")
        .expect("date pattern is a valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Venue {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub location: String,
}

/// A calendar event. Missing fields deserialize to empty values so that
/// validation, not parsing, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Event {
    pub id: String,
    #[validate(length(min = 10, message = "must be at least 10 characters long"))]
    pub name: String,
    #[validate(nested)]
    pub venue: Venue,
    #[validate(length(min = 30, message = "must be at least 30 characters long"))]
    pub description: String,
    #[validate(regex(path = *DATE_PATTERN, message = "must match YYYY-MM-DDTHH:MM:SSZ"))]
    pub date: String,
}

/// One unmet field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted path of the field, e.g. `venue.name`.
    pub field: String,
    /// Constraint kind reported by the validator (`length`, `regex`).
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

impl Event {
    /// Every constraint this event breaks, sorted by field. Empty means valid.
    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if let Err(errors) = self.validate() {
            flatten("", &errors, &mut out);
        }
        out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        out
    }
}

fn flatten(prefix: &str, errors: &ValidationErrors, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|err| Violation {
                    field: path.clone(),
                    code: err.code.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed {} check", err.code)),
                }));
            }
            ValidationErrorsKind::Struct(inner) => flatten(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
