//! Request model for the QR generation endpoint.
//!
//! # Design
//! Every optional field is an `Option` and is skipped during serialization
//! when unset, so "not specified" never turns into an explicit default on the
//! wire. Enum-typed fields are closed Rust enums; free-form strings (colors,
//! gradient style) are passed through unvalidated and the remote service has
//! the final word on them.

use std::fmt;

use serde::{Serialize, Serializer};

/// Output size of the rendered QR image.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Size {
    #[serde(rename = "s")]
    Small,
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
    #[serde(rename = "xl")]
    XL,
    #[serde(rename = "xxl")]
    XXL,
    #[serde(rename = "xxxl")]
    XXXL,
}

impl Size {
    pub const ALL: [Size; 6] = [
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::XL,
        Size::XXL,
        Size::XXXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "s",
            Size::Medium => "m",
            Size::Large => "l",
            Size::XL => "xl",
            Size::XXL => "xxl",
            Size::XXXL => "xxxl",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// QR error correction tier, in the order the service lists them.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ErrorCorrection {
    L,
    M,
    H,
    Q,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::L,
        ErrorCorrection::M,
        ErrorCorrection::H,
        ErrorCorrection::Q,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::H => "H",
            ErrorCorrection::Q => "Q",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the three corner locator squares ("eyes").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeShape {
    RoundRect,
    RectRect,
    RectCircle,
    RoundRectCircle,
    CircleCircle,
    BottomRightLeaf,
    TopRightLeaf,
    BottomLeftLeaf,
    TopLeftLeaf,
    TopRightBottomRightLeaf,
    TopRightBottomLeftLeaf,
    TopRightBottomLeftLeafCircle,
    TopRightBottomLeftLeafDiad,
    RectDiad,
    UniLeaf,
    BloatRect,
    WarpRect0,
    CurveRect,
    DistRect,
    ZigZag,
    WarpRect1,
    BlackHole,
    Star,
    Grid,
    Scion,
    Octagon,
    Flower,
    Hut,
    DarkHut,
}

impl EyeShape {
    pub const ALL: [EyeShape; 29] = [
        EyeShape::RoundRect,
        EyeShape::RectRect,
        EyeShape::RectCircle,
        EyeShape::RoundRectCircle,
        EyeShape::CircleCircle,
        EyeShape::BottomRightLeaf,
        EyeShape::TopRightLeaf,
        EyeShape::BottomLeftLeaf,
        EyeShape::TopLeftLeaf,
        EyeShape::TopRightBottomRightLeaf,
        EyeShape::TopRightBottomLeftLeaf,
        EyeShape::TopRightBottomLeftLeafCircle,
        EyeShape::TopRightBottomLeftLeafDiad,
        EyeShape::RectDiad,
        EyeShape::UniLeaf,
        EyeShape::BloatRect,
        EyeShape::WarpRect0,
        EyeShape::CurveRect,
        EyeShape::DistRect,
        EyeShape::ZigZag,
        EyeShape::WarpRect1,
        EyeShape::BlackHole,
        EyeShape::Star,
        EyeShape::Grid,
        EyeShape::Scion,
        EyeShape::Octagon,
        EyeShape::Flower,
        EyeShape::Hut,
        EyeShape::DarkHut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EyeShape::RoundRect => "ROUND_RECT",
            EyeShape::RectRect => "RECT_RECT",
            EyeShape::RectCircle => "RECT_CIRC",
            EyeShape::RoundRectCircle => "ROUNDRECT_CIRC",
            EyeShape::CircleCircle => "CIRC_CIRC",
            EyeShape::BottomRightLeaf => "BR_LEAF",
            EyeShape::TopRightLeaf => "TR_LEAF",
            EyeShape::BottomLeftLeaf => "BL_LEAF",
            EyeShape::TopLeftLeaf => "TL_LEAF",
            EyeShape::TopRightBottomRightLeaf => "TRBR_LEAF",
            EyeShape::TopRightBottomLeftLeaf => "TRBL_LEAF",
            EyeShape::TopRightBottomLeftLeafCircle => "TRBL_LEAF_CIRC",
            EyeShape::TopRightBottomLeftLeafDiad => "TRBL_LEAF_DIAD",
            EyeShape::RectDiad => "RECT_DIAD",
            EyeShape::UniLeaf => "UNI_LEAF",
            EyeShape::BloatRect => "BLOAT_RECT",
            EyeShape::WarpRect0 => "WARP_RECT0",
            EyeShape::CurveRect => "CURVE_RECT",
            EyeShape::DistRect => "DIST_RECT",
            EyeShape::ZigZag => "ZIGZAG",
            EyeShape::WarpRect1 => "WARP_RECT1",
            EyeShape::BlackHole => "BLACK_HOLE",
            EyeShape::Star => "STAR",
            EyeShape::Grid => "GRID",
            EyeShape::Scion => "SCION",
            EyeShape::Octagon => "OCTAGON",
            EyeShape::Flower => "FLOWER",
            EyeShape::Hut => "HUT",
            EyeShape::DarkHut => "DARK_HUT",
        }
    }
}

impl fmt::Display for EyeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EyeShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Direction of the data-module color gradient.
///
/// The service takes the gradient style as a free-form string; this enum
/// names the values it documents. See [`Request::with_gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    None,
    Horizontal,
    Vertical,
    Diagonal,
    Radial,
}

impl Gradient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gradient::None => "None",
            Gradient::Horizontal => "Horizontal",
            Gradient::Vertical => "Vertical",
            Gradient::Diagonal => "Diagonal",
            Gradient::Radial => "Radial",
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image overlaid at the center of the QR code.
///
/// `url` and `excavated` are always sent once a logo is attached; the numeric
/// fields are sent only when non-zero.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Logo {
    pub url: String,

    /// Logo size as a percentage of the QR code.
    #[serde(rename = "size", skip_serializing_if = "is_zero")]
    pub percent_size: f64,

    #[serde(skip_serializing_if = "is_zero")]
    pub angle: f64,

    /// Remove the data modules that overlap the logo.
    pub excavated: bool,
}

impl Logo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_percent_size(mut self, percent_size: f64) -> Self {
        self.percent_size = percent_size;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn excavated(mut self, excavated: bool) -> Self {
        self.excavated = excavated;
        self
    }
}

/// Styling options for a QR code that encodes `url`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Request {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_correction: Option<ErrorCorrection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_pattern: Option<EyeShape>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_gradient_style: Option<String>,

    #[serde(rename = "eye_color_inner", skip_serializing_if = "Option::is_none")]
    pub inner_eye_color: Option<String>,

    #[serde(rename = "eye_color_outer", skip_serializing_if = "Option::is_none")]
    pub outer_eye_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_gradient_start_color: Option<String>,
}

impl Request {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = Some(level);
        self
    }

    pub fn with_eye_pattern(mut self, shape: EyeShape) -> Self {
        self.eye_pattern = Some(shape);
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.data_gradient_style = Some(gradient.as_str().to_string());
        self
    }

    pub fn with_gradient_start_color(mut self, color: impl Into<String>) -> Self {
        self.data_gradient_start_color = Some(color.into());
        self
    }

    pub fn with_inner_eye_color(mut self, color: impl Into<String>) -> Self {
        self.inner_eye_color = Some(color.into());
        self
    }

    pub fn with_outer_eye_color(mut self, color: impl Into<String>) -> Self {
        self.outer_eye_color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_serializes_to_short_codes() {
        let encoded: Vec<String> = Size::ALL
            .iter()
            .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(encoded, ["s", "m", "l", "xl", "xxl", "xxxl"]);
    }

    #[test]
    fn serde_names_match_as_str() {
        for size in Size::ALL {
            assert_eq!(serde_json::to_value(size).unwrap(), size.as_str());
        }
        for level in ErrorCorrection::ALL {
            assert_eq!(serde_json::to_value(level).unwrap(), level.as_str());
        }
        for shape in EyeShape::ALL {
            assert_eq!(serde_json::to_value(shape).unwrap(), shape.as_str());
        }
    }

    #[test]
    fn eye_shape_names_are_distinct() {
        let mut names: Vec<&str> = EyeShape::ALL.iter().map(EyeShape::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EyeShape::ALL.len());
    }

    #[test]
    fn eye_shape_wire_names() {
        assert_eq!(EyeShape::CircleCircle.as_str(), "CIRC_CIRC");
        assert_eq!(EyeShape::RoundRectCircle.as_str(), "ROUNDRECT_CIRC");
        assert_eq!(EyeShape::TopRightBottomLeftLeafDiad.as_str(), "TRBL_LEAF_DIAD");
        assert_eq!(EyeShape::DarkHut.to_string(), "DARK_HUT");
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let json = serde_json::to_value(Request::new("https://example.com")).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "https://example.com" }));
    }

    #[test]
    fn logo_always_carries_url_and_excavated() {
        let json = serde_json::to_value(Logo::new("https://example.com/logo.png")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "url": "https://example.com/logo.png", "excavated": false })
        );
    }

    #[test]
    fn gradient_helper_sets_style_string() {
        let req = Request::new("x").with_gradient(Gradient::Radial);
        assert_eq!(req.data_gradient_style.as_deref(), Some("Radial"));
    }

    #[test]
    fn inner_and_outer_eye_colors_use_distinct_keys() {
        let req = Request::new("x")
            .with_inner_eye_color("#000000")
            .with_outer_eye_color("#ff0000");
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["eye_color_inner"], "#000000");
        assert_eq!(json["eye_color_outer"], "#ff0000");
    }
}
