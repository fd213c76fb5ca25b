use super::matcher::{MatchedIdentity, Presence};
use crate::sbom_comparison::domain::{Component, ComponentDifference, DifferenceType};

/// Differ service classifying each matched identity
///
/// Version outcome and license disagreement are decided independently: a
/// `common` row may still carry `license_diff = true`.
pub struct Differ;

impl Differ {
    /// Classifies every identity, preserving the matcher's order
    pub fn diff(identities: &[MatchedIdentity<'_>]) -> Vec<ComponentDifference> {
        identities.iter().map(Self::classify).collect()
    }

    /// Classifies a single identity
    pub fn classify(identity: &MatchedIdentity<'_>) -> ComponentDifference {
        match identity.presence {
            Presence::OnlyInApp1(component) => ComponentDifference {
                component_name: Self::display_name(component),
                app1_version: Some(Self::normalize_version(component.version())),
                app2_version: None,
                difference_type: DifferenceType::Removed,
                license_diff: false,
                app1_license: Self::display_license(component.license()),
                app2_license: None,
            },
            Presence::OnlyInApp2(component) => ComponentDifference {
                component_name: Self::display_name(component),
                app1_version: None,
                app2_version: Some(Self::normalize_version(component.version())),
                difference_type: DifferenceType::Added,
                license_diff: false,
                app1_license: None,
                app2_license: Self::display_license(component.license()),
            },
            Presence::InBoth(left, right) => {
                let app1_version = Self::normalize_version(left.version());
                let app2_version = Self::normalize_version(right.version());
                let difference_type = if app1_version == app2_version {
                    DifferenceType::Common
                } else {
                    DifferenceType::Version
                };

                ComponentDifference {
                    component_name: Self::display_name(left),
                    app1_version: Some(app1_version),
                    app2_version: Some(app2_version),
                    difference_type,
                    license_diff: Self::licenses_differ(left.license(), right.license()),
                    app1_license: Self::display_license(left.license()),
                    app2_license: Self::display_license(right.license()),
                }
            }
        }
    }

    /// Trimmed version string; an undeclared version becomes `""`, so two
    /// undeclared versions compare equal
    pub fn normalize_version(version: Option<&str>) -> String {
        version.map(str::trim).unwrap_or_default().to_string()
    }

    /// Comparison form of a license: trimmed and ASCII lower-cased
    ///
    /// `None` is the "no license" sentinel and never equals a declared license.
    pub fn normalize_license(license: Option<&str>) -> Option<String> {
        license
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_ascii_lowercase)
    }

    pub fn licenses_differ(app1: Option<&str>, app2: Option<&str>) -> bool {
        Self::normalize_license(app1) != Self::normalize_license(app2)
    }

    fn display_name(component: &Component) -> String {
        component.name().trim().to_string()
    }

    fn display_license(license: Option<&str>) -> Option<String> {
        license
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
    }
}
