use crate::constants::{DEFAULT_TEXT, DOT_COUNT, DOT_RADIUS};

/// Runtime settings of the particle field, read from the field element's
/// `data-text`, `data-dots` and `data-dot-radius` attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub text: String,
    pub dot_count: usize,
    pub dot_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            dot_count: DOT_COUNT,
            dot_radius: DOT_RADIUS,
        }
    }
}

impl FieldConfig {
    /// Apply optional raw attribute values; unusable ones keep the current setting.
    pub fn with_overrides(
        mut self,
        text: Option<&str>,
        dot_count: Option<&str>,
        dot_radius: Option<&str>,
    ) -> Self {
        if let Some(t) = text.map(str::trim).filter(|t| !t.is_empty()) {
            self.text = t.to_string();
        }
        if let Some(raw) = dot_count {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.dot_count = n,
                _ => log::warn!("[config] ignoring data-dots={:?}", raw),
            }
        }
        if let Some(raw) = dot_radius {
            match raw.trim().parse::<f32>() {
                Ok(r) if r.is_finite() && r > 0.0 => self.dot_radius = r,
                _ => log::warn!("[config] ignoring data-dot-radius={:?}", raw),
            }
        }
        self
    }
}
