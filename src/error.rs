use thiserror::Error;

/// Problems with a scene description
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse scene JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Leg segment lengths must be positive, got upper={upper} lower={lower}")]
    InvalidLimb { upper: f64, lower: f64 },

    #[error("Frame rate must be nonzero")]
    InvalidFps,

    #[error("Viewport must be non-empty, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("Scene has no lights")]
    NoLights,
}

/// Problems talking to the display
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(String),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(String),

    #[error("Device request failed: {0}")]
    Device(String),
}
