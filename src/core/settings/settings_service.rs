// Turns an uploaded Panda3DS config file into a SettingsSnapshot.
//
// Downloading is behind the AttachmentFetcher port so the parser can be tested
// without a network. Every failure is terminal for the request: there are no
// retries and no partial summaries.

use super::settings_models::{Renderer, SettingsFile, SettingsSnapshot};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Attachment download returned HTTP {0}")]
    Status(u16),
    #[error("Attachment download failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Download(#[from] FetchError),
    #[error("Settings file is empty")]
    EmptyFile,
    #[error("Settings file could not be parsed: {0}")]
    Parse(String),
}

impl SettingsError {
    /// Short text shown to the user. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            SettingsError::Download(_) => "Failed to download file",
            SettingsError::EmptyFile => "File size is 0",
            SettingsError::Parse(_) => "Failed to parse file",
        }
    }
}

/// Downloads the raw bytes of an uploaded attachment.
#[async_trait]
pub trait AttachmentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct SettingsService<F: AttachmentFetcher> {
    fetcher: F,
}

impl<F: AttachmentFetcher> SettingsService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Download the attachment behind `url` and parse it.
    pub async fn summarize(&self, url: &str) -> Result<SettingsSnapshot, SettingsError> {
        let bytes = self.fetcher.fetch(url).await?;
        parse_settings(&bytes)
    }
}

/// Parse the TOML body of a settings file.
///
/// Missing sections fall back to defaults. A present section with a missing
/// or mistyped key is a parse error, as is anything that isn't valid TOML.
pub fn parse_settings(bytes: &[u8]) -> Result<SettingsSnapshot, SettingsError> {
    if bytes.is_empty() {
        return Err(SettingsError::EmptyFile);
    }

    let text = std::str::from_utf8(bytes).map_err(|e| SettingsError::Parse(e.to_string()))?;
    let file: SettingsFile =
        toml::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;

    let mut snapshot = SettingsSnapshot::default();

    if let Some(gpu) = file.gpu {
        snapshot.renderer = Renderer::from_setting(&gpu.renderer);
        snapshot.shader_jit = gpu.enable_shader_jit;
    }

    if let Some(audio) = file.audio {
        snapshot.dsp_emulation = audio.dsp_emulation;
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::settings_models::{checkbox, UNKNOWN};

    struct FakeFetcher(Result<Vec<u8>, FetchError>);

    #[async_trait]
    impl AttachmentFetcher for FakeFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            self.0.clone()
        }
    }

    const FULL_CONFIG: &str = r#"
[General]
EnableDiscordRPC = true

[GPU]
Renderer = "vulkan"
EnableShaderJIT = true

[Audio]
DSPEmulation = "hle"
EnableAudio = false
"#;

    #[test]
    fn full_config_is_summarised() {
        let snapshot = parse_settings(FULL_CONFIG.as_bytes()).unwrap();

        assert_eq!(snapshot.renderer, Renderer::Vulkan);
        assert_eq!(
            snapshot.renderer.display_token(),
            "<:vulkant:1148648218658340894>"
        );
        assert_eq!(checkbox(snapshot.shader_jit), "☑");
        assert_eq!(snapshot.dsp_emulation, "hle");
    }

    #[test]
    fn opengl_maps_to_its_token() {
        let config = "[GPU]\nRenderer = \"opengl\"\nEnableShaderJIT = false\n";
        let snapshot = parse_settings(config.as_bytes()).unwrap();

        assert_eq!(
            snapshot.renderer.display_token(),
            "<:opengl:1148648565879603231>"
        );
        assert_eq!(checkbox(snapshot.shader_jit), "☐");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let snapshot = parse_settings(b"[General]\nEnableDiscordRPC = false\n").unwrap();

        assert_eq!(snapshot.renderer, Renderer::Unknown);
        assert_eq!(snapshot.renderer.display_token(), UNKNOWN);
        assert!(!snapshot.shader_jit);
        assert_eq!(snapshot.dsp_emulation, UNKNOWN);
    }

    #[test]
    fn unrecognised_renderer_is_null() {
        let config = "[GPU]\nRenderer = \"software\"\nEnableShaderJIT = true\n";
        let snapshot = parse_settings(config.as_bytes()).unwrap();

        assert_eq!(snapshot.renderer, Renderer::Other("software".to_string()));
        assert_eq!(snapshot.renderer.display_token(), "null");
    }

    #[test]
    fn renderer_match_is_case_sensitive() {
        let config = "[GPU]\nRenderer = \"Vulkan\"\nEnableShaderJIT = true\n";
        let snapshot = parse_settings(config.as_bytes()).unwrap();
        assert_eq!(snapshot.renderer.display_token(), "null");
    }

    #[test]
    fn empty_payload_short_circuits() {
        let err = parse_settings(b"").unwrap_err();
        assert!(matches!(err, SettingsError::EmptyFile));
        assert_eq!(err.user_message(), "File size is 0");
    }

    #[test]
    fn missing_key_in_present_section_fails() {
        let err = parse_settings(b"[GPU]\nRenderer = \"vulkan\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn wrong_type_fails() {
        let config = "[GPU]\nRenderer = \"vulkan\"\nEnableShaderJIT = \"yes\"\n";
        let err = parse_settings(config.as_bytes()).unwrap_err();
        assert_eq!(err.user_message(), "Failed to parse file");
    }

    #[test]
    fn malformed_toml_fails() {
        let err = parse_settings(b"[GPU\nRenderer = ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[tokio::test]
    async fn summarize_reports_download_failures() {
        let service = SettingsService::new(FakeFetcher(Err(FetchError::Status(404))));
        let err = service.summarize("https://cdn.example/config.toml").await.unwrap_err();

        assert!(matches!(err, SettingsError::Download(FetchError::Status(404))));
        assert_eq!(err.user_message(), "Failed to download file");
    }

    #[tokio::test]
    async fn summarize_parses_fetched_bytes() {
        let service = SettingsService::new(FakeFetcher(Ok(FULL_CONFIG.as_bytes().to_vec())));
        let snapshot = service.summarize("https://cdn.example/config.toml").await.unwrap();
        assert_eq!(snapshot.dsp_emulation, "hle");
    }
}
