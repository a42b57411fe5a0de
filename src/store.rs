use tracing::{debug, info};
use uuid::Uuid;

use crate::types::{
    Oscillator, OscillatorPatch, OscillatorSpec, ParameterUpdate, PatternParameters,
};

/// Single source of truth for the pattern parameters and the oscillator
/// collection. The panel mutates it through the methods below; the canvas
/// re-reads it every frame. Everything runs on the UI thread, so a mutation
/// applied between two frames is observed in full on the next one.
#[derive(Debug, Default)]
pub struct PatternStore {
    params: PatternParameters,
    oscillators: Vec<Oscillator>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &PatternParameters {
        &self.params
    }

    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Replaces exactly one field, leaving all others untouched. Values are
    /// accepted as-is; the bounded controls are the only sanctioned writer.
    pub fn set_parameter(&mut self, update: ParameterUpdate) {
        match update {
            ParameterUpdate::Shape(value) => self.params.shape = value,
            ParameterUpdate::Size(value) => self.params.size = value,
            ParameterUpdate::Rotation(value) => self.params.rotation = value,
            ParameterUpdate::Scale(value) => self.params.scale = value,
            ParameterUpdate::Position(value) => self.params.position = value,
            ParameterUpdate::Opacity(value) => self.params.opacity = value,
            ParameterUpdate::Color(value) => self.params.color = value,
            ParameterUpdate::Density(value) => self.params.density = value,
            ParameterUpdate::Spacing(value) => self.params.spacing = value,
            ParameterUpdate::Symmetry(value) => self.params.symmetry = value,
            ParameterUpdate::Noise(value) => self.params.noise = value,
            ParameterUpdate::Complexity(value) => self.params.complexity = value,
            ParameterUpdate::NumShapes(value) => self.params.num_shapes = value,
        }
    }

    /// Restores every parameter to its default in one step. Oscillators are
    /// not affected.
    pub fn reset_parameters(&mut self) {
        info!("resetting parameters to defaults");
        self.params = PatternParameters::default();
    }

    pub fn add_oscillator(&mut self, spec: OscillatorSpec) -> Uuid {
        let id = Uuid::new_v4();
        debug!(%id, name = %spec.name, "adding oscillator");
        self.oscillators.push(Oscillator {
            id,
            name: spec.name,
            target: spec.target,
            frequency: spec.frequency,
            amplitude: spec.amplitude,
            enabled: spec.enabled,
        });
        id
    }

    /// Merges the patch into the oscillator with the given id. Returns
    /// `false` when no oscillator matches; the list is left unchanged.
    pub fn update_oscillator(&mut self, id: Uuid, patch: OscillatorPatch) -> bool {
        let Some(oscillator) = self.oscillators.iter_mut().find(|o| o.id == id) else {
            debug!(%id, "update for unknown oscillator ignored");
            return false;
        };

        if let Some(name) = patch.name {
            oscillator.name = name;
        }
        if let Some(target) = patch.target {
            oscillator.target = target;
        }
        if let Some(frequency) = patch.frequency {
            oscillator.frequency = frequency;
        }
        if let Some(amplitude) = patch.amplitude {
            oscillator.amplitude = amplitude;
        }
        if let Some(enabled) = patch.enabled {
            oscillator.enabled = enabled;
        }
        true
    }

    /// Deletes the oscillator with the given id. Returns `false` when no
    /// oscillator matches.
    pub fn remove_oscillator(&mut self, id: Uuid) -> bool {
        let before = self.oscillators.len();
        self.oscillators.retain(|o| o.id != id);
        let removed = self.oscillators.len() != before;
        if removed {
            debug!(%id, "removed oscillator");
        } else {
            debug!(%id, "remove for unknown oscillator ignored");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ModTarget, ShapeKind};

    fn spec(name: &str) -> OscillatorSpec {
        OscillatorSpec {
            name: name.to_owned(),
            target: ModTarget::Rotation,
            frequency: 1.0,
            amplitude: 0.5,
            enabled: true,
        }
    }

    #[test]
    fn set_parameter_replaces_exactly_one_field() {
        let mut store = PatternStore::new();
        store.set_parameter(ParameterUpdate::Size(120.0));

        let expected = PatternParameters {
            size: 120.0,
            ..PatternParameters::default()
        };
        assert_eq!(*store.params(), expected);
    }

    #[test]
    fn set_parameter_accepts_out_of_bounds_values() {
        let mut store = PatternStore::new();
        store.set_parameter(ParameterUpdate::Spacing(-3.0));
        assert_eq!(store.params().spacing, -3.0);
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut store = PatternStore::new();
        store.set_parameter(ParameterUpdate::Shape(ShapeKind::Hexagon));
        store.set_parameter(ParameterUpdate::Density(19));
        store.set_parameter(ParameterUpdate::Noise(0.9));

        store.reset_parameters();
        assert_eq!(*store.params(), PatternParameters::default());

        store.reset_parameters();
        assert_eq!(*store.params(), PatternParameters::default());
    }

    #[test]
    fn reset_does_not_touch_oscillators() {
        let mut store = PatternStore::new();
        store.add_oscillator(spec("wobble"));
        store.reset_parameters();
        assert_eq!(store.oscillators().len(), 1);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut store = PatternStore::new();
        store.add_oscillator(spec("keep"));
        let baseline = store.oscillators().to_vec();

        let id = store.add_oscillator(spec("transient"));
        assert!(store.remove_oscillator(id));
        assert_eq!(store.oscillators(), baseline.as_slice());
    }

    #[test]
    fn ids_are_unique_across_rapid_creation() {
        let mut store = PatternStore::new();
        let mut ids: Vec<_> = (0..64).map(|_| store.add_oscillator(spec("osc"))).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut store = PatternStore::new();
        let id = store.add_oscillator(spec("wobble"));

        let updated = store.update_oscillator(
            id,
            OscillatorPatch {
                frequency: Some(4.0),
                enabled: Some(false),
                ..OscillatorPatch::default()
            },
        );
        assert!(updated);

        let oscillator = &store.oscillators()[0];
        assert_eq!(oscillator.name, "wobble");
        assert_eq!(oscillator.target, ModTarget::Rotation);
        assert_eq!(oscillator.frequency, 4.0);
        assert_eq!(oscillator.amplitude, 0.5);
        assert!(!oscillator.enabled);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = PatternStore::new();
        store.add_oscillator(spec("wobble"));
        let baseline = store.oscillators().to_vec();

        let updated = store.update_oscillator(
            Uuid::new_v4(),
            OscillatorPatch {
                amplitude: Some(1.0),
                ..OscillatorPatch::default()
            },
        );
        assert!(!updated);
        assert_eq!(store.oscillators(), baseline.as_slice());
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut store = PatternStore::new();
        store.add_oscillator(spec("wobble"));
        let baseline = store.oscillators().to_vec();

        assert!(!store.remove_oscillator(Uuid::new_v4()));
        assert_eq!(store.oscillators(), baseline.as_slice());
    }
}
