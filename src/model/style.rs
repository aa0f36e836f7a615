//! Shared style primitives: dimensions, colors and fonts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude in a single direction, in the given units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimension {
    /// The magnitude
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub magnitude: Option<f64>,

    /// The units for magnitude (e.g. "PT")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Dimension {
    /// Create a dimension measured in points.
    pub fn points(magnitude: f64) -> Self {
        Self {
            magnitude: Some(magnitude),
            unit: Some("PT".to_string()),
        }
    }

    /// The magnitude, treating an absent value as zero.
    pub fn value(&self) -> f64 {
        self.magnitude.unwrap_or(0.0)
    }
}

/// A color that may be absent (fully transparent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionalColor {
    /// The color, or `None` for transparent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl OptionalColor {
    /// Wrap an RGB color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            color: Some(Color {
                rgb_color: Some(RgbColor {
                    red: Some(red),
                    green: Some(green),
                    blue: Some(blue),
                }),
            }),
        }
    }

    /// The RGB components, if a color is set.
    pub fn rgb_color(&self) -> Option<&RgbColor> {
        self.color.as_ref().and_then(|c| c.rgb_color.as_ref())
    }
}

/// A solid color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Color {
    /// RGB components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
}

/// An RGB color with components in `[0, 1]`. Absent components are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RgbColor {
    /// Red component
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub red: Option<f64>,

    /// Green component
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub green: Option<f64>,

    /// Blue component
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub blue: Option<f64>,
}

impl RgbColor {
    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

fn channel(component: Option<f64>) -> u8 {
    (component.unwrap_or(0.0) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A font family with an optional weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightedFontFamily {
    /// Font family name (e.g. "Arial")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font weight (100-900)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// Vertical offset of text from its normal position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BaselineOffset {
    /// Inherited from the parent
    #[default]
    Unspecified,
    /// Normal baseline
    None,
    /// Raised
    Superscript,
    /// Lowered
    Subscript,
}

impl From<String> for BaselineOffset {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NONE" => BaselineOffset::None,
            "SUPERSCRIPT" => BaselineOffset::Superscript,
            "SUBSCRIPT" => BaselineOffset::Subscript,
            _ => BaselineOffset::Unspecified,
        }
    }
}

/// Serialize integral values without a fractional part (`72` rather than `72.0`).
pub(crate) fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 => {
            serializer.serialize_i64(v as i64)
        }
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        let red = RgbColor {
            red: Some(1.0),
            green: Some(0.0),
            blue: Some(0.0),
        };
        assert_eq!(red.to_hex(), "#ff0000");

        // Docs omits zero components
        let blue = RgbColor {
            blue: Some(1.0),
            ..Default::default()
        };
        assert_eq!(blue.to_hex(), "#0000ff");

        let grey = RgbColor {
            red: Some(0.5),
            green: Some(0.5),
            blue: Some(0.5),
        };
        assert_eq!(grey.to_hex(), "#808080");
    }

    #[test]
    fn test_rgb_out_of_range_is_clamped() {
        let color = RgbColor {
            red: Some(1.5),
            green: Some(-0.2),
            blue: None,
        };
        assert_eq!(color.to_hex(), "#ff0000");
    }

    #[test]
    fn test_dimension_serializes_integral_magnitude() {
        let json = serde_json::to_string(&Dimension::points(72.0)).unwrap();
        assert_eq!(json, r#"{"magnitude":72,"unit":"PT"}"#);

        let json = serde_json::to_string(&Dimension::points(10.5)).unwrap();
        assert_eq!(json, r#"{"magnitude":10.5,"unit":"PT"}"#);
    }

    #[test]
    fn test_baseline_offset_from_wire() {
        let offset: BaselineOffset = serde_json::from_str("\"SUPERSCRIPT\"").unwrap();
        assert_eq!(offset, BaselineOffset::Superscript);

        let offset: BaselineOffset = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(offset, BaselineOffset::Unspecified);
    }
}
