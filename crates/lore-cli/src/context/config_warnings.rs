use lore_config::LoreConfig;

/// Emit warnings for sources that will degrade and for likely mistyped env var keys.
pub fn warn_unconfigured(config: &LoreConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LoreConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.youtube.is_configured() && has_single_underscore_key(&env_keys, "LORE_YOUTUBE") {
        warnings.push(
            "YouTube config appears default while LORE_YOUTUBE_* env vars exist. Use double underscores (example: LORE_YOUTUBE__API_KEY)."
                .to_string(),
        );
    }

    if !config.cohere.is_configured() && has_single_underscore_key(&env_keys, "LORE_COHERE") {
        warnings.push(
            "Cohere config appears default while LORE_COHERE_* env vars exist. Use double underscores (example: LORE_COHERE__API_KEY)."
                .to_string(),
        );
    }

    if !config.scholar.has_api_key() && has_single_underscore_key(&env_keys, "LORE_SCHOLAR") {
        warnings.push(
            "Scholar config appears default while LORE_SCHOLAR_* env vars exist. Use double underscores (example: LORE_SCHOLAR__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

/// A key like `LORE_YOUTUBE_API_KEY` that figment reads as a top-level field.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use lore_config::LoreConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = LoreConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("LORE_YOUTUBE_API_KEY".to_string(), "yt".to_string()),
                ("LORE_COHERE_API_KEY".to_string(), "co".to_string()),
                ("LORE_SCHOLAR_API_KEY".to_string(), "s2".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let mut config = LoreConfig::default();
        config.youtube.api_key = "yt".to_string();
        config.cohere.api_key = "co".to_string();
        config.scholar.api_key = "s2".to_string();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("LORE_YOUTUBE__API_KEY".to_string(), "yt".to_string()),
                ("LORE_COHERE__API_KEY".to_string(), "co".to_string()),
                ("LORE_SCHOLAR__API_KEY".to_string(), "s2".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn double_underscore_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &LoreConfig::default(),
            vec![
                ("LORE_YOUTUBE__ENDPOINT".to_string(), "http://localhost".to_string()),
                ("LORE_COHERE__MODEL".to_string(), "command-r".to_string()),
                ("LORE_SCHOLAR__ENDPOINT".to_string(), "http://localhost".to_string()),
            ],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn unrelated_env_is_ignored() {
        let warnings = collect_unconfigured_warnings(
            &LoreConfig::default(),
            vec![("LORE_LOG".to_string(), "debug".to_string())],
        );
        assert!(warnings.is_empty());
    }
}
