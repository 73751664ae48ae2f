//! Layer model shared between the core and the host workspace
//!
//! The host owns the real layers; these types carry exactly what the
//! capture and export code reads or writes.

use crate::constants::layers;
use crate::coordinate::{Point, Rectangle, ReferenceFrame};

/// Geometry type declared by a vector layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPolygon,
}

impl GeometryType {
    /// True for the two polygon types whose extents `read_bbox` accepts
    pub fn is_polygonal(&self) -> bool {
        matches!(self, GeometryType::Polygon | GeometryType::MultiPolygon)
    }
}

/// Polygon geometry as a list of closed rings (exterior first)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub rings: Vec<Vec<Point>>,
}

impl Polygon {
    /// Polygon with the rectangle's corners as its single ring
    pub fn from_rect(rect: &Rectangle) -> Self {
        Polygon {
            rings: vec![rect.ring().to_vec()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|ring| ring.is_empty())
    }

    /// Bounding box over every vertex, `None` for an empty polygon
    pub fn bounding_box(&self) -> Option<Rectangle> {
        let vertices: Vec<Point> = self.rings.iter().flatten().copied().collect();
        Rectangle::envelope(&vertices)
    }
}

/// A single vector feature; geometry may be missing, as in any GIS layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub geometry: Option<Polygon>,
}

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        let [r, g, b, _] = self.0;
        Rgba([r, g, b, alpha])
    }
}

/// Simple fill symbol: fill color, outline color and outline width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub fill: Rgba,
    pub stroke: Rgba,
    /// Outline width in millimeters
    pub stroke_width: f64,
}

impl FillStyle {
    /// Hollow fill with a fully opaque outline, used to show the region
    /// without hiding the imagery underneath
    pub fn outline(color: Rgba) -> Self {
        FillStyle {
            fill: color.with_alpha(0),
            stroke: color.with_alpha(255),
            stroke_width: layers::REGION_STROKE_WIDTH,
        }
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            fill: Rgba([190, 178, 151, 255]),
            stroke: Rgba([35, 35, 35, 255]),
            stroke_width: 0.26,
        }
    }
}

/// In-memory vector layer
#[derive(Debug, Clone, PartialEq)]
pub struct VectorLayer {
    pub name: String,
    pub provider: String,
    pub frame: ReferenceFrame,
    pub geometry_type: GeometryType,
    pub features: Vec<Feature>,
    pub style: FillStyle,
}

impl VectorLayer {
    /// Create an empty memory-backed polygon layer
    pub fn polygon(name: &str, frame: ReferenceFrame) -> Self {
        VectorLayer {
            name: name.to_string(),
            provider: layers::MEMORY_PROVIDER.to_string(),
            frame,
            geometry_type: GeometryType::Polygon,
            features: Vec::new(),
            style: FillStyle::default(),
        }
    }

    /// Extent over all non-empty feature geometries
    pub fn extent(&self) -> Option<Rectangle> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .filter(|g| !g.is_empty())
            .filter_map(Polygon::bounding_box)
            .reduce(|acc, r| acc.union(&r))
    }
}

/// Handle to a remote tiled-map layer added to the workspace for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReference {
    /// Display label ("Luchtfoto (PDOK, WMTS)")
    pub label: String,
    /// Provider kind, "wms" for WMS/WMTS services
    pub provider: String,
    /// Request-parameter string the reference was created from
    pub request: String,
    /// Identity token ("service/variant") set when the core created it
    pub identity: Option<String>,
    /// Whether the provider accepted the request
    pub valid: bool,
    /// Full extent of the layer in the target frame, when known
    pub extent: Option<Rectangle>,
}

/// Any layer the workspace can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Vector(VectorLayer),
    Source(SourceReference),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Vector(v) => &v.name,
            Layer::Source(s) => &s.label,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            Layer::Vector(v) => &v.provider,
            Layer::Source(s) => &s.provider,
        }
    }

    pub fn as_vector(&self) -> Option<&VectorLayer> {
        match self {
            Layer::Vector(v) => Some(v),
            Layer::Source(_) => None,
        }
    }

    pub fn as_source(&self) -> Option<&SourceReference> {
        match self {
            Layer::Source(s) => Some(s),
            Layer::Vector(_) => None,
        }
    }
}
