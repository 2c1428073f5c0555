//! Shared types used across pdf-protector.
//! Includes `ProtectionPolicy`, `AccessPermissions`, `FailurePolicy` and the
//! invocation-level `Outcome` with its exit-code mapping.
use serde::Serialize;

/// Key length applied to every protected output.
pub const KEY_LENGTH_BITS: u16 = 256;

/// User access permissions stored in a protected document.
///
/// Field order follows the permission bits of the standard security handler
/// (print, modify, copy, annotate, fill forms, accessibility extraction,
/// assemble, high-quality print).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct AccessPermissions {
    pub print: bool,
    pub modify: bool,
    pub copy: bool,
    pub annotate: bool,
    pub fill_forms: bool,
    pub extract_for_accessibility: bool,
    pub assemble: bool,
    pub print_high_quality: bool,
}

impl AccessPermissions {
    /// Unrestricted access: every permission granted.
    pub const fn full() -> Self {
        Self {
            print: true,
            modify: true,
            copy: true,
            annotate: true,
            fill_forms: true,
            extract_for_accessibility: true,
            assemble: true,
            print_high_quality: true,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::full()
    }

    /// Bit representation of the `/P` entry (bits 3-6 and 9-12).
    pub fn bits(&self) -> u32 {
        let flags = [
            (self.print, 1 << 2),
            (self.modify, 1 << 3),
            (self.copy, 1 << 4),
            (self.annotate, 1 << 5),
            (self.fill_forms, 1 << 8),
            (self.extract_for_accessibility, 1 << 9),
            (self.assemble, 1 << 10),
            (self.print_high_quality, 1 << 11),
        ];
        flags
            .iter()
            .filter(|(granted, _)| *granted)
            .fold(0, |acc, (_, bit)| acc | bit)
    }
}

impl Default for AccessPermissions {
    fn default() -> Self {
        Self::full()
    }
}

/// Passwords, permissions and cipher parameters applied to one document.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProtectionPolicy {
    /// Always empty: no administrative password is ever set.
    pub owner_password: String,
    pub user_password: String,
    pub permissions: AccessPermissions,
    pub key_length: u16,
    pub prefer_aes: bool,
}

impl ProtectionPolicy {
    /// Fresh policy for a work item: only the user password varies.
    pub fn for_user_password(user_password: &str) -> Self {
        Self {
            owner_password: String::new(),
            user_password: user_password.to_string(),
            permissions: AccessPermissions::full(),
            key_length: KEY_LENGTH_BITS,
            prefer_aes: true,
        }
    }
}

/// What the batch does after a document fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub enum FailurePolicy {
    /// Stop at the first failed document; later inputs are never opened.
    #[default]
    FailFast,
    /// Keep processing the remaining documents and report every failure.
    ContinueOnError,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::FailFast => write!(f, "FailFast"),
            FailurePolicy::ContinueOnError => write!(f, "ContinueOnError"),
        }
    }
}

/// Result of one invocation, independent of how it is surfaced.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum Outcome {
    Success,
    Help,
    UsageError,
    ConfigurationError,
    ProcessingFailure,
    Unsupported,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success | Outcome::Help => 0,
            Outcome::ProcessingFailure => 1,
            Outcome::UsageError => 2,
            Outcome::ConfigurationError => 3,
            Outcome::Unsupported => 4,
        }
    }
}

impl From<crate::error::ErrorClass> for Outcome {
    fn from(class: crate::error::ErrorClass) -> Self {
        use crate::error::ErrorClass;
        match class {
            ErrorClass::Usage => Outcome::UsageError,
            ErrorClass::Configuration => Outcome::ConfigurationError,
            ErrorClass::Password | ErrorClass::Io | ErrorClass::Collision => {
                Outcome::ProcessingFailure
            }
            ErrorClass::Unsupported => Outcome::Unsupported,
        }
    }
}
