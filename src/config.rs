//! Layout configuration.

use crate::errors::ConfigError;
use crate::layout::defaults;
use crate::types::{Color, Px, check_positive};

/// Tunable parameters of a layout pass.
///
/// `Default` reproduces the reference tuning. The annealing caps were tuned
/// together with the force constants, so change them as a group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Distance of the initial label spread from its anchor
    pub spread_radius: Px,
    /// Sectors of the initial spread; label `i` starts at angle
    /// `(i % sectors) * 2π / sectors` on ring `i / sectors + 1`
    pub spread_sectors: usize,
    /// Working-set cap for the O(n²) force model and the viewport clamp
    pub max_working_set: usize,
    pub steps: StepPolicy,
    /// `T0 = ceil(viewport_width / temperature_divisor)`
    pub temperature_divisor: f64,
    /// `area = viewport_width * viewport_height / area_divisor`
    pub area_divisor: f64,
    /// Offset from the label's top-left to the connector endpoint
    pub connector_inset_x: Px,
    pub connector_inset_y: Px,
    pub connector_color: Color,
    pub connector_highlight_color: Color,
    /// Class name applied to labels bound through `register_pair`
    pub label_class_name: String,
}

/// Annealing step count as a function of the tracked label count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepPolicy {
    /// Label counts up to and including this run `full_steps`
    pub full_steps_max_labels: usize,
    /// Label counts from this on run `minimal_steps`
    pub minimal_steps_min_labels: usize,
    pub full_steps: usize,
    pub reduced_steps: usize,
    pub minimal_steps: usize,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            full_steps_max_labels: defaults::FULL_STEPS_MAX_LABELS,
            minimal_steps_min_labels: defaults::MINIMAL_STEPS_MIN_LABELS,
            full_steps: defaults::FULL_STEPS,
            reduced_steps: defaults::REDUCED_STEPS,
            minimal_steps: defaults::MINIMAL_STEPS,
        }
    }
}

impl StepPolicy {
    /// Number of annealing steps for `labels` tracked labels.
    pub fn steps_for(&self, labels: usize) -> usize {
        if labels <= self.full_steps_max_labels {
            self.full_steps
        } else if labels < self.minimal_steps_min_labels {
            self.reduced_steps
        } else {
            self.minimal_steps
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spread_radius: Px(defaults::SPREAD_RADIUS),
            spread_sectors: defaults::SPREAD_SECTORS,
            max_working_set: defaults::MAX_WORKING_SET,
            steps: StepPolicy::default(),
            temperature_divisor: defaults::TEMPERATURE_DIVISOR,
            area_divisor: defaults::AREA_DIVISOR,
            connector_inset_x: Px(defaults::CONNECTOR_INSET_X),
            connector_inset_y: Px(defaults::CONNECTOR_INSET_Y),
            connector_color: defaults::CONNECTOR_COLOR,
            connector_highlight_color: defaults::CONNECTOR_HIGHLIGHT_COLOR,
            label_class_name: defaults::LABEL_CLASS_NAME.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Check every numeric parameter. Called by `LayoutEngine::initialize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, val: f64| {
            check_positive(val).map(|_| ()).map_err(|e| ConfigError::new(field, e))
        };
        let count = |field: &'static str, val: usize| positive(field, val as f64);

        Px::try_non_negative(self.spread_radius.raw())
            .map_err(|e| ConfigError::new("spread_radius", e))?;
        count("spread_sectors", self.spread_sectors)?;
        count("max_working_set", self.max_working_set)?;
        count("steps.full_steps", self.steps.full_steps)?;
        count("steps.reduced_steps", self.steps.reduced_steps)?;
        count("steps.minimal_steps", self.steps.minimal_steps)?;
        positive("temperature_divisor", self.temperature_divisor)?;
        positive("area_divisor", self.area_divisor)?;
        Px::try_new(self.connector_inset_x.raw())
            .map_err(|e| ConfigError::new("connector_inset_x", e))?;
        Px::try_new(self.connector_inset_y.raw())
            .map_err(|e| ConfigError::new("connector_inset_y", e))?;
        Ok(())
    }
}
