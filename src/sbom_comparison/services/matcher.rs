use crate::sbom_comparison::domain::Component;
use crate::sbom_comparison::policies::IdentityKeyPolicy;
use indexmap::IndexMap;

/// Where an identity key was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<'a> {
    OnlyInApp1(&'a Component),
    OnlyInApp2(&'a Component),
    InBoth(&'a Component, &'a Component),
}

/// One identity key from the union of both inventories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedIdentity<'a> {
    pub key: String,
    pub presence: Presence<'a>,
}

/// Matcher service establishing the correspondence between two inventories
///
/// Pure and deterministic: the same ordered inputs always produce the same
/// identities in the same order.
pub struct Matcher<'p> {
    policy: &'p dyn IdentityKeyPolicy,
}

impl<'p> Matcher<'p> {
    pub fn new(policy: &'p dyn IdentityKeyPolicy) -> Self {
        Self { policy }
    }

    /// Picks one representative per identity key: the first occurrence in
    /// input order wins and later duplicates are ignored
    ///
    /// Producers do not guarantee unique names inside an inventory, so this
    /// rule is part of the matching contract.
    pub fn select_representatives<'a>(
        &self,
        components: &'a [Component],
    ) -> IndexMap<String, &'a Component> {
        let mut representatives: IndexMap<String, &'a Component> = IndexMap::new();
        for component in components {
            let key = self.policy.identity_key(component);
            if representatives.contains_key(&key) {
                tracing::debug!(
                    key = %key,
                    version = component.version().unwrap_or(""),
                    "duplicate component ignored, keeping first occurrence"
                );
                continue;
            }
            representatives.insert(key, component);
        }
        representatives
    }

    /// Returns every distinct identity key present in either inventory
    ///
    /// Keys of the first inventory come first, in its input order, followed by
    /// keys found only in the second inventory, in its input order.
    pub fn match_inventories<'a>(
        &self,
        app1: &'a [Component],
        app2: &'a [Component],
    ) -> Vec<MatchedIdentity<'a>> {
        let app1_map = self.select_representatives(app1);
        let app2_map = self.select_representatives(app2);

        let mut identities = Vec::with_capacity(app1_map.len() + app2_map.len());

        for (key, left) in &app1_map {
            let presence = match app2_map.get(key) {
                Some(right) => Presence::InBoth(*left, *right),
                None => Presence::OnlyInApp1(*left),
            };
            identities.push(MatchedIdentity {
                key: key.clone(),
                presence,
            });
        }

        for (key, right) in &app2_map {
            if !app1_map.contains_key(key) {
                identities.push(MatchedIdentity {
                    key: key.clone(),
                    presence: Presence::OnlyInApp2(*right),
                });
            }
        }

        identities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_comparison::policies::{NameKeyPolicy, NamePurlKeyPolicy};

    fn keys(identities: &[MatchedIdentity<'_>]) -> Vec<String> {
        identities.iter().map(|i| i.key.clone()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let components = vec![
            Component::new("openssl").with_version("3.0.13"),
            Component::new("zlib").with_version("1.3"),
            Component::new("OpenSSL ").with_version("1.1.1w"),
        ];
        let matcher = Matcher::new(&NameKeyPolicy);
        let representatives = matcher.select_representatives(&components);

        assert_eq!(representatives.len(), 2);
        assert_eq!(representatives["openssl"].version(), Some("3.0.13"));
        assert_eq!(
            representatives.keys().cloned().collect::<Vec<_>>(),
            vec!["openssl", "zlib"]
        );
    }

    #[test]
    fn test_union_of_keys_in_order() {
        let app1 = vec![
            Component::new("b").with_version("1"),
            Component::new("a").with_version("1"),
        ];
        let app2 = vec![
            Component::new("c").with_version("1"),
            Component::new("A").with_version("2"),
        ];
        let matcher = Matcher::new(&NameKeyPolicy);
        let identities = matcher.match_inventories(&app1, &app2);

        assert_eq!(keys(&identities), vec!["b", "a", "c"]);
        assert!(matches!(identities[0].presence, Presence::OnlyInApp1(_)));
        assert!(matches!(identities[1].presence, Presence::InBoth(_, _)));
        assert!(matches!(identities[2].presence, Presence::OnlyInApp2(_)));
    }

    #[test]
    fn test_empty_inventories() {
        let matcher = Matcher::new(&NameKeyPolicy);
        assert!(matcher.match_inventories(&[], &[]).is_empty());
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let app1 = vec![
            Component::new("x").with_version("1"),
            Component::new("x").with_version("2"),
            Component::new("y"),
        ];
        let app2 = vec![Component::new("y"), Component::new("z")];
        let matcher = Matcher::new(&NameKeyPolicy);

        let first = matcher.match_inventories(&app1, &app2);
        let second = matcher.match_inventories(&app1, &app2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_policy_changes_matching() {
        let app1 = vec![Component::new("json").with_purl("pkg:pypi/json")];
        let app2 = vec![Component::new("json").with_purl("pkg:npm/json")];

        let by_name = Matcher::new(&NameKeyPolicy).match_inventories(&app1, &app2);
        assert_eq!(by_name.len(), 1);

        let by_purl = Matcher::new(&NamePurlKeyPolicy).match_inventories(&app1, &app2);
        assert_eq!(by_purl.len(), 2);
    }
}
