use eframe::egui::Color32;
use uuid::Uuid;

use crate::error::{Result, StudioError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternParameters {
    pub shape: ShapeKind,
    pub size: f32,
    pub rotation: f32,
    pub scale: f32,
    pub position: f32,
    pub opacity: f32,
    pub color: Color32,
    pub density: u32,
    pub spacing: f32,
    /// Reserved for mirrored layouts; the frame planner does not read it yet.
    pub symmetry: u32,
    pub noise: f32,
    pub complexity: u32,
    pub num_shapes: u32,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            size: 50.0,
            rotation: 0.0,
            scale: 1.0,
            position: 0.0,
            opacity: 0.8,
            color: Color32::from_rgb(0x0e, 0xa5, 0xe9),
            density: 5,
            spacing: 20.0,
            symmetry: 4,
            noise: 0.2,
            complexity: 3,
            num_shapes: 12,
        }
    }
}

/// A single-field replacement applied through [`crate::store::PatternStore`].
///
/// One variant per settable field keeps every write statically typed; the
/// store dispatches with an exhaustive match instead of a stringly keyed
/// lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterUpdate {
    Shape(ShapeKind),
    Size(f32),
    Rotation(f32),
    Scale(f32),
    Position(f32),
    Opacity(f32),
    Color(Color32),
    Density(u32),
    Spacing(f32),
    Symmetry(u32),
    Noise(f32),
    Complexity(u32),
    NumShapes(u32),
}

/// The subset of parameters an oscillator may perturb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModTarget {
    Rotation,
    Position,
    Scale,
    Opacity,
    Size,
    Noise,
}

impl ModTarget {
    pub const ALL: [ModTarget; 6] = [
        ModTarget::Rotation,
        ModTarget::Position,
        ModTarget::Scale,
        ModTarget::Opacity,
        ModTarget::Size,
        ModTarget::Noise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModTarget::Rotation => "rotation",
            ModTarget::Position => "position",
            ModTarget::Scale => "scale",
            ModTarget::Opacity => "opacity",
            ModTarget::Size => "size",
            ModTarget::Noise => "noise",
        }
    }
}

/// A sinusoidal modulation source bound to one target parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    pub id: Uuid,
    pub name: String,
    pub target: ModTarget,
    pub frequency: f32,
    pub amplitude: f32,
    pub enabled: bool,
}

/// Everything an oscillator needs except its id, which the store assigns.
#[derive(Clone, Debug)]
pub struct OscillatorSpec {
    pub name: String,
    pub target: ModTarget,
    pub frequency: f32,
    pub amplitude: f32,
    pub enabled: bool,
}

/// Partial update merged into an existing oscillator; `None` fields are left
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct OscillatorPatch {
    pub name: Option<String>,
    pub target: Option<ModTarget>,
    pub frequency: Option<f32>,
    pub amplitude: Option<f32>,
    pub enabled: Option<bool>,
}

pub fn parse_hex_color(value: &str) -> Result<Color32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.is_ascii() {
        return Err(StudioError::InvalidColor(value.to_owned()));
    }

    let channel = |slice: &str| {
        u8::from_str_radix(slice, 16).map_err(|_| StudioError::InvalidColor(value.to_owned()))
    };

    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                let nibble = ch
                    .to_digit(16)
                    .ok_or_else(|| StudioError::InvalidColor(value.to_owned()))?
                    as u8;
                *slot = (nibble << 4) | nibble;
            }
            Ok(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(StudioError::InvalidColor(value.to_owned())),
    }
}

pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
