use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "CameraConfig::default_zoom_min")]
    pub zoom_min: f32,
    #[serde(default = "CameraConfig::default_zoom_max")]
    pub zoom_max: f32,
    #[serde(default = "CameraConfig::default_zoom_initial")]
    pub zoom_initial: f32,
    #[serde(default = "CameraConfig::default_height")]
    pub height: f32,
    #[serde(default = "CameraConfig::default_pitch_degrees")]
    pub pitch_degrees: f32,
}

impl CameraConfig {
    const fn default_zoom_min() -> f32 {
        4.0
    }

    const fn default_zoom_max() -> f32 {
        10.0
    }

    const fn default_zoom_initial() -> f32 {
        6.0
    }

    const fn default_height() -> f32 {
        12.0
    }

    const fn default_pitch_degrees() -> f32 {
        55.0
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_min: Self::default_zoom_min(),
            zoom_max: Self::default_zoom_max(),
            zoom_initial: Self::default_zoom_initial(),
            height: Self::default_height(),
            pitch_degrees: Self::default_pitch_degrees(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundConfig {
    /// Picking plane sits slightly above the y = 0 floor geometry.
    #[serde(default = "GroundConfig::default_plane_height")]
    pub plane_height: f32,
}

impl GroundConfig {
    const fn default_plane_height() -> f32 {
        0.1
    }
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self { plane_height: Self::default_plane_height() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub ground: GroundConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"camera":{"zoom_max":8.0}}"#).expect("parse partial config");
        assert_eq!(cfg.camera.zoom_max, 8.0);
        assert_eq!(cfg.camera.zoom_min, 4.0);
        assert_eq!(cfg.ground.plane_height, 0.1);
    }
}
