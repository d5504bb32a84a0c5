//! Error flags recorded by the preflight checks.

use std::collections::BTreeSet;
use std::fmt;

/// A failure kind recorded by one of the preflight checks.
///
/// Variants are declared in report priority order; [`PreflightErrors`]
/// iterates in this order regardless of the order checks ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreflightError {
    /// The target is not a directory, or has no `package.json`.
    MissingDirOrEmptyProject,
    /// The target has no `components.json`.
    MissingConfig,
    /// `components.json` could not be loaded.
    FailedConfigRead,
}

impl PreflightError {
    /// Stable identifier, as used in logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingDirOrEmptyProject => "MISSING_DIR_OR_EMPTY_PROJECT",
            Self::MissingConfig => "MISSING_CONFIG",
            Self::FailedConfigRead => "FAILED_CONFIG_READ",
        }
    }
}

impl fmt::Display for PreflightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The set of error flags recorded during one gate run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreflightErrors {
    flags: BTreeSet<PreflightError>,
}

impl PreflightErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error`. Recording the same kind twice has no further effect.
    pub fn insert(&mut self, error: PreflightError) {
        self.flags.insert(error);
    }

    #[must_use]
    pub fn contains(&self, error: PreflightError) -> bool {
        self.flags.contains(&error)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Iterates the recorded flags in priority order.
    pub fn iter(&self) -> impl Iterator<Item = PreflightError> + '_ {
        self.flags.iter().copied()
    }
}

impl FromIterator<PreflightError> for PreflightErrors {
    fn from_iter<I: IntoIterator<Item = PreflightError>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PreflightErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.iter().map(PreflightError::code).collect();
        write!(f, "{{{}}}", codes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_priority_not_insertion() {
        let mut errors = PreflightErrors::new();
        errors.insert(PreflightError::FailedConfigRead);
        errors.insert(PreflightError::MissingDirOrEmptyProject);
        errors.insert(PreflightError::MissingConfig);

        let order: Vec<_> = errors.iter().collect();
        assert_eq!(
            order,
            vec![
                PreflightError::MissingDirOrEmptyProject,
                PreflightError::MissingConfig,
                PreflightError::FailedConfigRead,
            ]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut errors = PreflightErrors::new();
        assert!(errors.is_empty());
        errors.insert(PreflightError::MissingConfig);
        errors.insert(PreflightError::MissingConfig);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(PreflightError::MissingConfig));
        assert!(!errors.contains(PreflightError::FailedConfigRead));
    }

    #[test]
    fn test_display_uses_codes() {
        let errors: PreflightErrors =
            [PreflightError::FailedConfigRead, PreflightError::MissingConfig].into_iter().collect();
        assert_eq!(errors.to_string(), "{MISSING_CONFIG, FAILED_CONFIG_READ}");
        assert_eq!(PreflightErrors::new().to_string(), "{}");
    }
}
