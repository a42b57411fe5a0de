use std::f32::consts::TAU;

use crate::types::{ModTarget, Oscillator, PatternParameters};

/// Summed per-target offsets for one frame. Same-target oscillators add
/// linearly and the sums are never clamped, so the effective value handed to
/// the planner may leave the field's nominal bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModOffsets {
    pub rotation: f32,
    pub position: f32,
    pub scale: f32,
    pub opacity: f32,
    pub size: f32,
    pub noise: f32,
}

impl ModOffsets {
    fn accumulate(&mut self, target: ModTarget, value: f32) {
        match target {
            ModTarget::Rotation => self.rotation += value,
            ModTarget::Position => self.position += value,
            ModTarget::Scale => self.scale += value,
            ModTarget::Opacity => self.opacity += value,
            ModTarget::Size => self.size += value,
            ModTarget::Noise => self.noise += value,
        }
    }
}

/// Evaluates every enabled oscillator at time `t` (seconds). Pure: the same
/// list and time always produce the same offsets.
pub fn evaluate(oscillators: &[Oscillator], t: f32) -> ModOffsets {
    let mut offsets = ModOffsets::default();
    for oscillator in oscillators {
        if !oscillator.enabled {
            continue;
        }
        let value = oscillator.amplitude * (TAU * oscillator.frequency * t).sin();
        offsets.accumulate(oscillator.target, value);
    }
    offsets
}

impl PatternParameters {
    /// Effective parameter set for one frame: base values plus the summed
    /// offsets for the six targetable fields, everything else passed through.
    pub fn modulated(&self, offsets: &ModOffsets) -> PatternParameters {
        PatternParameters {
            rotation: self.rotation + offsets.rotation,
            position: self.position + offsets.position,
            scale: self.scale + offsets.scale,
            opacity: self.opacity + offsets.opacity,
            size: self.size + offsets.size,
            noise: self.noise + offsets.noise,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn oscillator(target: ModTarget, frequency: f32, amplitude: f32) -> Oscillator {
        Oscillator {
            id: Uuid::new_v4(),
            name: "osc".to_owned(),
            target,
            frequency,
            amplitude,
            enabled: true,
        }
    }

    #[test]
    fn disabled_oscillators_contribute_nothing() {
        let mut wobble = oscillator(ModTarget::Scale, 2.0, 1.0);
        wobble.enabled = false;
        let list = vec![wobble, {
            let mut o = oscillator(ModTarget::Opacity, 0.5, 0.7);
            o.enabled = false;
            o
        }];

        for step in 0..50 {
            let t = step as f32 * 0.173;
            assert_eq!(evaluate(&list, t), ModOffsets::default());
        }
    }

    #[test]
    fn offset_follows_the_sine_of_frequency_and_time() {
        let list = vec![oscillator(ModTarget::Rotation, 0.25, 1.0)];
        // At f = 0.25 Hz, t = 1 s sits a quarter of the way through the
        // cycle, i.e. at the sine peak.
        let offsets = evaluate(&list, 1.0);
        assert!((offsets.rotation - 1.0).abs() < 1e-5);
        assert_eq!(offsets.scale, 0.0);
    }

    #[test]
    fn same_target_oscillators_sum_linearly() {
        let a = oscillator(ModTarget::Size, 1.3, 0.3);
        let b = oscillator(ModTarget::Size, 1.3, 0.2);
        let both = vec![a.clone(), b.clone()];

        for step in 0..100 {
            let t = step as f32 * 0.0417;
            let solo_a = evaluate(std::slice::from_ref(&a), t).size;
            let solo_b = evaluate(std::slice::from_ref(&b), t).size;
            let combined = evaluate(&both, t).size;
            assert!((combined - (solo_a + solo_b)).abs() < 1e-6);
        }
    }

    #[test]
    fn sums_are_not_clamped() {
        let list = vec![
            oscillator(ModTarget::Opacity, 0.25, 1.0),
            oscillator(ModTarget::Opacity, 0.25, 1.0),
        ];
        let offsets = evaluate(&list, 1.0);
        assert!(offsets.opacity > 1.5);
    }

    #[test]
    fn modulated_applies_offsets_and_passes_the_rest_through() {
        let base = PatternParameters::default();
        let offsets = ModOffsets {
            rotation: 0.4,
            size: -5.0,
            ..ModOffsets::default()
        };

        let effective = base.modulated(&offsets);
        assert_eq!(effective.rotation, base.rotation + 0.4);
        assert_eq!(effective.size, base.size - 5.0);
        assert_eq!(effective.position, base.position);
        assert_eq!(effective.scale, base.scale);
        assert_eq!(effective.shape, base.shape);
        assert_eq!(effective.density, base.density);
        assert_eq!(effective.num_shapes, base.num_shapes);
    }
}
