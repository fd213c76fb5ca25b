use crate::sbom_comparison::domain::Component;
use std::fmt;
use std::str::FromStr;

/// IdentityKeyPolicy decides which components of two inventories are "the same"
///
/// The matcher joins components on the key this policy returns, so swapping
/// the policy changes matching without touching the differ.
pub trait IdentityKeyPolicy: Send + Sync {
    /// Returns the join key for a component
    fn identity_key(&self, component: &Component) -> String;
}

/// Name-based identity: trimmed, lower-cased component name
///
/// `purl` is frequently missing from extracted components, so the name is the
/// only key every component carries. Unrelated components sharing a name will
/// be matched with each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameKeyPolicy;

impl NameKeyPolicy {
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

impl IdentityKeyPolicy for NameKeyPolicy {
    fn identity_key(&self, component: &Component) -> String {
        Self::normalize_name(component.name())
    }
}

/// Stricter identity: normalized name plus the trimmed purl when one is declared
///
/// Components without a purl fall back to the plain name key. Name and purl
/// are joined with NUL, which is stripped from the name, so a purl key never
/// equals a name-only key and never splits at a different point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePurlKeyPolicy;

impl NamePurlKeyPolicy {
    const SEPARATOR: char = '\0';
}

impl IdentityKeyPolicy for NamePurlKeyPolicy {
    fn identity_key(&self, component: &Component) -> String {
        let name = NameKeyPolicy::normalize_name(component.name()).replace(Self::SEPARATOR, "");
        match component.purl().map(str::trim).filter(|p| !p.is_empty()) {
            Some(purl) => format!("{}{}{}", name, Self::SEPARATOR, purl),
            None => name,
        }
    }
}

/// Selectable identity-key strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchKey {
    #[default]
    Name,
    NamePurl,
}

impl MatchKey {
    /// Creates the policy object for this strategy
    pub fn policy(&self) -> Box<dyn IdentityKeyPolicy> {
        match self {
            MatchKey::Name => Box::new(NameKeyPolicy),
            MatchKey::NamePurl => Box::new(NamePurlKeyPolicy),
        }
    }
}

impl FromStr for MatchKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(MatchKey::Name),
            "name-purl" | "name_purl" | "purl" => Ok(MatchKey::NamePurl),
            _ => Err(format!(
                "Invalid match key: {}. Please specify 'name' or 'name-purl'",
                s
            )),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKey::Name => write!(f, "name"),
            MatchKey::NamePurl => write!(f, "name-purl"),
        }
    }
}
