//! Resource URL resolution
//!
//! This module handles:
//! - Picking an environment override for a resource when one is set
//! - Falling back to the resource's path under the site's static-asset root
//!
//! Resolution is a pure string computation. An override that is empty or
//! whitespace-only counts as absent, so a deployment template that exports
//! `VITE_ELAM_URL=""` still gets the bundled game.

pub mod asset_root;
pub mod descriptor;

use serde::Serialize;

use crate::env::EnvSnapshot;

pub use asset_root::AssetRoot;
pub use descriptor::ResourceDescriptor;

/// Where a resolved URL came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UrlSource {
    /// Taken verbatim from an environment variable
    Override { variable: String },
    /// Built from the descriptor's fallback path
    Fallback,
}

/// Result of resolving a single resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrl {
    pub name: String,
    pub url: String,
    pub source: UrlSource,
}

/// Resolves resource URLs against a fixed static-asset root
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    root: AssetRoot,
}

impl Resolver {
    pub fn new(root: AssetRoot) -> Self {
        Self { root }
    }

    /// Resolve the URL at which `descriptor` should be loaded
    ///
    /// The descriptor is expected to have passed [`ResourceDescriptor::validate`].
    pub fn resolve(&self, descriptor: &ResourceDescriptor, env: &EnvSnapshot) -> String {
        let variable = descriptor.override_variable.as_str();

        if let Some(value) = env.get_non_blank(variable) {
            tracing::debug!(
                resource = %descriptor.name,
                variable,
                "using environment override"
            );
            return value.to_string();
        }

        if env.get(variable).is_some() {
            tracing::warn!(
                resource = %descriptor.name,
                variable,
                "override variable is set but blank, using fallback path"
            );
        }

        let url = self.root.join(&descriptor.fallback_path);
        tracing::debug!(resource = %descriptor.name, %url, "using fallback path");
        url
    }

    /// Like [`Resolver::resolve`], also reporting which branch was taken
    pub fn resolve_detailed(
        &self,
        descriptor: &ResourceDescriptor,
        env: &EnvSnapshot,
    ) -> ResolvedUrl {
        ResolvedUrl {
            name: descriptor.name.clone(),
            url: self.resolve(descriptor, env),
            source: source_of(descriptor, env),
        }
    }

    /// Resolve every descriptor, preserving order
    pub fn resolve_all<'a, I>(&self, descriptors: I, env: &EnvSnapshot) -> Vec<ResolvedUrl>
    where
        I: IntoIterator<Item = &'a ResourceDescriptor>,
    {
        descriptors
            .into_iter()
            .map(|descriptor| self.resolve_detailed(descriptor, env))
            .collect()
    }
}

fn source_of(descriptor: &ResourceDescriptor, env: &EnvSnapshot) -> UrlSource {
    let variable = descriptor.override_variable.as_str();
    match env.get_non_blank(variable) {
        Some(_) => UrlSource::Override {
            variable: variable.to_string(),
        },
        None => UrlSource::Fallback,
    }
}

/// Resolve against the default static-asset root (`/`)
///
/// For callers without a `portal.yaml`; configured sites go through a
/// [`Resolver`] built from [`crate::config::SiteConfig::asset_root`].
#[allow(dead_code)]
pub fn resolve(descriptor: &ResourceDescriptor, env: &EnvSnapshot) -> String {
    Resolver::default().resolve(descriptor, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elam() -> ResourceDescriptor {
        ResourceDescriptor::new("elam", "VITE_ELAM_URL", "games/elam/index.html")
    }

    #[test]
    fn test_override_is_returned_verbatim() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "https://custom.example.com/elam")]);
        assert_eq!(resolve(&elam(), &env), "https://custom.example.com/elam");
    }

    #[test]
    fn test_override_keeps_surrounding_whitespace() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", " ../elam ")]);
        assert_eq!(resolve(&elam(), &env), " ../elam ");
    }

    #[test]
    fn test_override_shape_is_not_checked() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "not a url at all")]);
        assert_eq!(resolve(&elam(), &env), "not a url at all");
    }

    #[test]
    fn test_empty_override_falls_back() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "")]);
        let url = resolve(&elam(), &env);
        assert!(url.contains("games/elam/index.html"));
        assert_eq!(url, "/games/elam/index.html");
    }

    #[test]
    fn test_whitespace_override_falls_back() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "  \t ")]);
        assert_eq!(resolve(&elam(), &env), "/games/elam/index.html");
    }

    #[test]
    fn test_absent_override_falls_back() {
        let env = EnvSnapshot::from_pairs([("VITE_OTHER_URL", "https://other.example")]);
        assert_eq!(resolve(&elam(), &env), "/games/elam/index.html");
    }

    #[test]
    fn test_resolve_is_pure() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "https://custom.example.com/elam")]);
        let descriptor = elam();
        let first = resolve(&descriptor, &env);
        let second = resolve(&descriptor, &env);
        assert_eq!(first, second);
        assert_eq!(
            env.get("VITE_ELAM_URL"),
            Some("https://custom.example.com/elam")
        );
    }

    #[test]
    fn test_fallback_uses_configured_root() {
        let resolver = Resolver::new(AssetRoot::new("/portal"));
        let url = resolver.resolve(&elam(), &EnvSnapshot::new());
        assert_eq!(url, "/portal/games/elam/index.html");
    }

    #[test]
    fn test_override_ignores_configured_root() {
        let resolver = Resolver::new(AssetRoot::new("/portal"));
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "/elsewhere/elam")]);
        assert_eq!(resolver.resolve(&elam(), &env), "/elsewhere/elam");
    }

    #[test]
    fn test_resolve_detailed_reports_source() {
        let resolver = Resolver::default();
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "https://x.example")]);

        let resolved = resolver.resolve_detailed(&elam(), &env);
        assert_eq!(
            resolved.source,
            UrlSource::Override {
                variable: "VITE_ELAM_URL".to_string()
            }
        );

        let resolved = resolver.resolve_detailed(&elam(), &EnvSnapshot::new());
        assert_eq!(resolved.source, UrlSource::Fallback);
        assert_eq!(resolved.name, "elam");
    }

    #[test]
    fn test_resolve_detailed_agrees_with_resolve() {
        let resolver = Resolver::new(AssetRoot::new("https://cdn.example.com/arcade"));
        for value in ["https://x.example", "", "   "] {
            let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", value)]);
            let detailed = resolver.resolve_detailed(&elam(), &env);
            assert_eq!(detailed.url, resolver.resolve(&elam(), &env));
            assert_eq!(
                detailed.source == UrlSource::Fallback,
                value.trim().is_empty()
            );
        }
    }

    #[test]
    fn test_resolve_all_preserves_order() {
        let descriptors = vec![
            ResourceDescriptor::new("snake", "VITE_SNAKE_URL", "games/snake/"),
            elam(),
        ];
        let env = EnvSnapshot::from_pairs([("VITE_SNAKE_URL", "https://snake.example")]);
        let resolved = Resolver::default().resolve_all(&descriptors, &env);
        let names: Vec<_> = resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["snake", "elam"]);
        assert_eq!(resolved[0].url, "https://snake.example");
        assert_eq!(resolved[1].url, "/games/elam/index.html");
    }

    #[test]
    fn test_resolved_url_serializes_with_source_kind() {
        let resolved = Resolver::default().resolve_detailed(&elam(), &EnvSnapshot::new());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["url"], "/games/elam/index.html");
        assert_eq!(json["source"]["kind"], "fallback");
    }
}
