use crate::curve::bezier::CubicBezierCurve;

/// Which preset tab a curve belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PresetCategory {
    /// Everyday CSS-style timing curves.
    Basic,
    /// Approximations of the classic Penner families, some overshooting.
    Advanced,
}

/// A named, built-in control-point tuple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub category: PresetCategory,
    pub curve: CubicBezierCurve,
}

const fn preset(
    name: &'static str,
    category: PresetCategory,
    [x1, y1, x2, y2]: [f64; 4],
) -> Preset {
    Preset {
        name,
        category,
        curve: CubicBezierCurve::new(x1, y1, x2, y2),
    }
}

/// Built-in presets, basic tab first.
pub const PRESETS: &[Preset] = &[
    preset("Linear", PresetCategory::Basic, [0.0, 0.0, 1.0, 1.0]),
    preset("Ease", PresetCategory::Basic, [0.25, 0.1, 0.25, 1.0]),
    preset("Ease In", PresetCategory::Basic, [0.42, 0.0, 1.0, 1.0]),
    preset("Ease Out", PresetCategory::Basic, [0.0, 0.0, 0.58, 1.0]),
    preset("Ease In-Out", PresetCategory::Basic, [0.42, 0.0, 0.58, 1.0]),
    preset("Fast Out", PresetCategory::Basic, [0.0, 0.0, 0.2, 1.0]),
    preset("Fast In", PresetCategory::Basic, [0.8, 0.0, 1.0, 1.0]),
    preset("Fast In-Out", PresetCategory::Basic, [0.8, 0.0, 0.2, 1.0]),
    preset("Bounce", PresetCategory::Advanced, [0.68, -0.55, 0.265, 1.55]),
    preset("Elastic", PresetCategory::Advanced, [0.175, 0.885, 0.32, 1.275]),
    preset("Back", PresetCategory::Advanced, [0.68, -0.6, 0.32, 1.6]),
    preset("Circ", PresetCategory::Advanced, [0.6, 0.04, 0.98, 0.34]),
    preset("Cubic", PresetCategory::Advanced, [0.55, 0.055, 0.675, 0.19]),
    preset("Expo", PresetCategory::Advanced, [0.95, 0.05, 0.795, 0.035]),
    preset("Quad", PresetCategory::Advanced, [0.55, 0.085, 0.68, 0.53]),
    preset("Quart", PresetCategory::Advanced, [0.895, 0.03, 0.685, 0.22]),
];

/// Look a preset up by name, ignoring case and surrounding whitespace.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn presets_in(category: PresetCategory) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.category == category)
}
