//! Resolve command implementation
//!
//! Resolves the URL of each requested resource (or all of them) against the
//! site's static-asset root, using an environment snapshot built from the
//! process environment, env files and `--set` assignments.

use crate::cli::ResolveArgs;
use crate::commands::helpers::{GlobalOptions, build_env};
use crate::config::SiteConfig;
use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::resolver::{ResolvedUrl, Resolver};
use crate::ui::display;

/// Run resolve command
pub fn run(options: &GlobalOptions, args: ResolveArgs) -> Result<()> {
    let loaded = options.load_config()?;
    let env = build_env(&args.env)?;

    let resolved = resolve_names(&loaded.config, &args.names, &env)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else if resolved.is_empty() {
        println!("No resources configured.");
    } else {
        display::display_resolved(&resolved);
    }

    Ok(())
}

/// Resolve the named resources, or every resource when `names` is empty
///
/// # Errors
///
/// Returns `PortalError::ResourceNotFound` for the first unknown name.
pub fn resolve_names(
    config: &SiteConfig,
    names: &[String],
    env: &EnvSnapshot,
) -> Result<Vec<ResolvedUrl>> {
    let resolver = Resolver::new(config.asset_root());

    if names.is_empty() {
        return Ok(resolver.resolve_all(&config.resources, env));
    }

    let descriptors = names
        .iter()
        .map(|name| config.find(name))
        .collect::<Result<Vec<_>>>()?;
    Ok(resolver.resolve_all(descriptors, env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use crate::resolver::UrlSource;

    fn config() -> SiteConfig {
        SiteConfig::from_yaml(
            r"
base: /arcade
resources:
  - { name: elam, env: VITE_ELAM_URL, fallback: games/elam/index.html }
  - { name: snake, env: VITE_SNAKE_URL, fallback: /games/snake/ }
",
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_all_in_config_order() {
        let env = EnvSnapshot::from_pairs([("VITE_ELAM_URL", "https://custom.example.com/elam")]);
        let resolved = resolve_names(&config(), &[], &env).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].url, "https://custom.example.com/elam");
        assert_eq!(resolved[1].url, "/arcade/games/snake/");
        assert_eq!(resolved[1].source, UrlSource::Fallback);
    }

    #[test]
    fn test_resolve_selected_names_in_request_order() {
        let names = vec!["snake".to_string(), "elam".to_string()];
        let resolved = resolve_names(&config(), &names, &EnvSnapshot::new()).unwrap();
        assert_eq!(resolved[0].name, "snake");
        assert_eq!(resolved[1].url, "/arcade/games/elam/index.html");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let names = vec!["elam".to_string(), "tetris".to_string()];
        let result = resolve_names(&config(), &names, &EnvSnapshot::new());
        assert!(matches!(
            result,
            Err(PortalError::ResourceNotFound { ref name }) if name == "tetris"
        ));
    }
}
