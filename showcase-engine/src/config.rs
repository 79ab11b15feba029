// config.rs - Per-showcase configuration
//
// Defaults reproduce the hand-tuned monitor scene. A page can override any
// field through the JSON manifest; omitted fields keep their default.

use glam::{Vec2, Vec3};
use serde::Deserialize;

use crate::error::ShowcaseError;
use crate::tween::Easing;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    /// Horizontal distance between neighbouring screens
    pub spacing: f32,
    pub duration_ms: f64,
    pub rest_eye: Vec3,
    pub zoom_eye: Vec3,
    pub fov_y_deg: f32,
    /// Button opacity while hovered (sliding enabled only)
    pub button_opacity: f32,
    pub button_x: f32,
    pub button_z: f32,
    pub button_scale: Vec2,
    pub zoom_easing: Easing,
    pub slide_easing: Easing,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            duration_ms: 500.0,
            rest_eye: Vec3::new(-3.0, 2.0, 6.5),
            zoom_eye: Vec3::new(0.0, 0.0, 5.0),
            fov_y_deg: 35.0,
            button_opacity: 0.25,
            button_x: 1.75,
            button_z: 0.11,
            button_scale: Vec2::new(0.09, 0.07),
            zoom_easing: Easing::QuadraticOut,
            slide_easing: Easing::QuadraticInOut,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if !(self.spacing > 0.0) {
            return Err(ShowcaseError::InvalidTuning(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if !(self.duration_ms > 0.0) {
            return Err(ShowcaseError::InvalidTuning(format!(
                "durationMs must be positive, got {}",
                self.duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.button_opacity) {
            return Err(ShowcaseError::InvalidTuning(format!(
                "buttonOpacity must be within [0, 1], got {}",
                self.button_opacity
            )));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(ShowcaseError::InvalidTuning(format!(
                "fovYDeg must be within (0, 180), got {}",
                self.fov_y_deg
            )));
        }
        Ok(())
    }
}

/// One showcase mount
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseSpec {
    pub container: String,
    pub images: Vec<String>,
    #[serde(default = "sliding_default")]
    pub sliding: bool,
    #[serde(default)]
    pub tuning: Tuning,
}

fn sliding_default() -> bool {
    true
}

impl ShowcaseSpec {
    pub fn new(container: impl Into<String>, images: Vec<String>, sliding: bool) -> Self {
        Self {
            container: container.into(),
            images,
            sliding,
            tuning: Tuning::default(),
        }
    }

    /// Everything that can be rejected without touching the page
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if self.images.is_empty() {
            return Err(ShowcaseError::EmptyImageList(self.container.clone()));
        }
        self.tuning.validate()
    }
}

/// Parse a JSON array of showcase specs
pub fn parse_manifest(json: &str) -> Result<Vec<ShowcaseSpec>, ShowcaseError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn spec_without_images_is_invalid() {
        let spec = ShowcaseSpec::new("threejs-background-2", Vec::new(), true);
        assert!(matches!(spec.validate(), Err(ShowcaseError::EmptyImageList(name)) if name == "threejs-background-2"));
        assert!(ShowcaseSpec::new("threejs-background-2", vec!["a.png".into()], false).validate().is_ok());
    }

    #[test]
    fn manifest_fills_defaults() {
        let specs = parse_manifest(
            r#"[
                { "container": "threejs-background-1", "images": ["a.png", "b.png"] },
                { "container": "threejs-background-3", "images": ["c.png"], "sliding": false,
                  "tuning": { "spacing": 5.0, "zoomEye": [0.0, 0.5, 4.0] } }
            ]"#,
        )
        .unwrap();

        assert_eq!(specs.len(), 2);
        assert!(specs[0].sliding);
        assert_eq!(specs[0].tuning, Tuning::default());

        assert!(!specs[1].sliding);
        assert_eq!(specs[1].tuning.spacing, 5.0);
        assert_eq!(specs[1].tuning.zoom_eye, Vec3::new(0.0, 0.5, 4.0));
        assert_eq!(specs[1].tuning.duration_ms, 500.0);
    }

    #[test]
    fn easing_names_are_kebab_case() {
        let tuning: Tuning = serde_json::from_str(r#"{ "slideEasing": "quadratic-out" }"#).unwrap();
        assert_eq!(tuning.slide_easing, Easing::QuadraticOut);
    }

    #[test]
    fn malformed_manifest_is_reported() {
        let err = parse_manifest(r#"[{ "images": [] }]"#).unwrap_err();
        assert!(matches!(err, ShowcaseError::Manifest(_)));
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let cases = [
            Tuning { spacing: 0.0, ..Tuning::default() },
            Tuning { duration_ms: -1.0, ..Tuning::default() },
            Tuning { button_opacity: 1.5, ..Tuning::default() },
            Tuning { fov_y_deg: f32::NAN, ..Tuning::default() },
        ];
        for tuning in cases {
            assert!(matches!(tuning.validate(), Err(ShowcaseError::InvalidTuning(_))));
        }
    }
}
