use figment::Jail;
use lore_config::LoreConfig;

#[test]
fn env_fills_api_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("LORE_COHERE__API_KEY", "co-from-env");
        jail.set_env("LORE_SCHOLAR__API_KEY", "s2-from-env");

        let config = LoreConfig::load().expect("config loads");
        assert_eq!(config.cohere.api_key, "co-from-env");
        assert!(config.scholar.has_api_key());
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_reach_section() {
    Jail::expect_with(|jail| {
        jail.set_env("LORE_YOUTUBE_API_KEY", "mistyped");

        let config = LoreConfig::load().expect("config loads");
        assert!(!config.youtube.is_configured());
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "LORE_WIKIPEDIA__SENTENCES=4\n")?;

        let config = LoreConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.wikipedia.sentences, 4);
        Ok(())
    });
}
