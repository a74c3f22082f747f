use std::path::PathBuf;

use anyhow::Context;
use lore_config::LoreConfig;
use lore_report::ReportAssembler;
use lore_sources::SourceClient;
use lore_tutor::TutorClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LoreConfig,
    pub sources: SourceClient,
    pub tutor: TutorClient,
    pub assembler: ReportAssembler,
}

impl AppContext {
    /// Build the HTTP clients and report assembler from `config`.
    pub fn init(config: LoreConfig) -> anyhow::Result<Self> {
        let sources =
            SourceClient::from_config(&config).context("failed to build content source client")?;
        let tutor = TutorClient::from_config(&config).context("failed to build tutor client")?;
        let assembler = ReportAssembler::new(config.general.attribution.clone());

        Ok(Self {
            config,
            sources,
            tutor,
            assembler,
        })
    }

    /// Directory for saved reports: explicit flag, else `general.output_dir`.
    #[must_use]
    pub fn output_dir(&self, explicit: Option<&str>) -> PathBuf {
        PathBuf::from(explicit.unwrap_or(&self.config.general.output_dir))
    }
}
