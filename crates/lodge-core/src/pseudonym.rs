use thiserror::Error;

/// Upper bound on pseudonym length, in Unicode scalar values.
pub const PSEUDONYM_MAX_CHARS: usize = 256;

/// A single violated pseudonym rule.
///
/// Violations carry a stable rule id so callers can report several of them
/// deterministically instead of collapsing everything into one message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PseudonymViolation {
    #[error("pseudonym must contain at least 1 character")]
    Empty,

    #[error("pseudonym must not exceed 256 characters (got {chars})")]
    TooLong { chars: usize },
}

impl PseudonymViolation {
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Empty => "pseudonym-empty",
            Self::TooLong { .. } => "pseudonym-too-long",
        }
    }
}

/// Check a candidate pseudonym against the admission rules.
///
/// Length is measured in Unicode scalar values, not bytes, so a name built
/// entirely of multi-byte characters is judged by its character count.
/// Returns every violated rule in declaration order; an empty vec means the
/// pseudonym is acceptable.
pub fn validate_pseudonym(pseudonym: &str) -> Vec<PseudonymViolation> {
    let mut violations = Vec::new();

    let chars = pseudonym.chars().count();
    if chars == 0 {
        violations.push(PseudonymViolation::Empty);
    } else if chars > PSEUDONYM_MAX_CHARS {
        violations.push(PseudonymViolation::TooLong { chars });
    }

    violations
}
