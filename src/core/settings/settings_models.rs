use serde::Deserialize;

const VULKAN_TOKEN: &str = "<:vulkant:1148648218658340894>";
const OPENGL_TOKEN: &str = "<:opengl:1148648565879603231>";
const UNRECOGNISED_RENDERER: &str = "null";
pub const UNKNOWN: &str = "unknown";

/// Values of `GPU.Renderer` we have an emoji for. Matching is exact and case-sensitive.
const KNOWN_RENDERERS: &[(&str, Renderer)] = &[
    ("vulkan", Renderer::Vulkan),
    ("opengl", Renderer::OpenGl),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Vulkan,
    OpenGl,
    /// A renderer name we have no token for.
    Other(String),
    /// The file had no `[GPU]` section at all.
    Unknown,
}

impl Renderer {
    pub fn from_setting(value: &str) -> Self {
        KNOWN_RENDERERS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, renderer)| renderer.clone())
            .unwrap_or_else(|| Renderer::Other(value.to_string()))
    }

    pub fn display_token(&self) -> &'static str {
        match self {
            Renderer::Vulkan => VULKAN_TOKEN,
            Renderer::OpenGl => OPENGL_TOKEN,
            Renderer::Other(_) => UNRECOGNISED_RENDERER,
            Renderer::Unknown => UNKNOWN,
        }
    }
}

/// What we pull out of an uploaded settings file. Rebuilt per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub renderer: Renderer,
    pub shader_jit: bool,
    pub dsp_emulation: String,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            renderer: Renderer::Unknown,
            shader_jit: false,
            dsp_emulation: UNKNOWN.to_string(),
        }
    }
}

pub fn checkbox(value: bool) -> &'static str {
    if value {
        "☑"
    } else {
        "☐"
    }
}

// Raw file layout. Sections are optional, but once a section is present its
// keys are required and must have the right type.

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsFile {
    #[serde(rename = "GPU")]
    pub gpu: Option<GpuSection>,
    #[serde(rename = "Audio")]
    pub audio: Option<AudioSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GpuSection {
    #[serde(rename = "Renderer")]
    pub renderer: String,
    #[serde(rename = "EnableShaderJIT")]
    pub enable_shader_jit: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AudioSection {
    #[serde(rename = "DSPEmulation")]
    pub dsp_emulation: String,
}
