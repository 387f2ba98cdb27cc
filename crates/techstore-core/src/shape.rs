//! Primitive stand-in shapes for the 3D product viewer.
//!
//! Each known product type maps to one geometry. Unknown types fall back to a
//! 2×2×2 box through [`select_shape`]; callers that want to reject them use
//! [`try_select_shape`] instead.

use std::f32::consts::TAU;
use std::str::FromStr;

use crate::CoreError;

/// Showcase colour used when nothing else is selected.
pub const DEFAULT_COLOR: &str = "#FF4500";

/// Angular speed of the idle spin, in radians per second, around the Y axis.
pub const ROTATION_RATE: f32 = 0.5;

/// Bounds of the viewer's scale slider.
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Laptop,
    Phone,
    Headphones,
    Watch,
}

impl ProductKind {
    /// Exact-match lookup on the backend's `product_type` tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "laptop" => Some(ProductKind::Laptop),
            "phone" => Some(ProductKind::Phone),
            "headphones" => Some(ProductKind::Headphones),
            "watch" => Some(ProductKind::Watch),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Laptop => "laptop",
            ProductKind::Phone => "phone",
            ProductKind::Headphones => "headphones",
            ProductKind::Watch => "watch",
        }
    }

    #[must_use]
    pub fn geometry(self) -> Geometry {
        match self {
            ProductKind::Laptop => Geometry::Box {
                width: 4.0,
                height: 0.3,
                depth: 3.0,
            },
            ProductKind::Phone => Geometry::Box {
                width: 1.5,
                height: 0.2,
                depth: 3.0,
            },
            ProductKind::Headphones => Geometry::Sphere { radius: 1.5 },
            ProductKind::Watch => Geometry::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.0,
                height: 0.5,
            },
        }
    }
}

impl FromStr for ProductKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductKind::parse(s).ok_or_else(|| CoreError::UnknownProductType(s.to_string()))
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
}

impl Geometry {
    /// Shape used for product types with no dedicated geometry.
    pub const FALLBACK: Geometry = Geometry::Box {
        width: 2.0,
        height: 2.0,
        depth: 2.0,
    };

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Box { .. } => "box",
            Geometry::Sphere { .. } => "sphere",
            Geometry::Cylinder { .. } => "cylinder",
        }
    }

    /// Constructor arguments in renderer order.
    #[must_use]
    pub fn dimensions(&self) -> Vec<f32> {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            } => vec![width, height, depth],
            Geometry::Sphere { radius } => vec![radius],
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => vec![radius_top, radius_bottom, height],
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = self
            .dimensions()
            .iter()
            .map(f32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({dims})", self.kind())
    }
}

/// Everything the viewer needs to draw a product stand-in.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub geometry: Geometry,
    pub color: String,
    pub scale: f32,
    pub rotating: bool,
}

impl ShapeDescriptor {
    #[must_use]
    pub fn with_rotation(mut self, rotating: bool) -> Self {
        self.rotating = rotating;
        self
    }

    /// Limits the scale to the slider range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        self
    }
}

/// Maps a product-type tag to its shape. Never fails: unknown tags get
/// [`Geometry::FALLBACK`]. Rotation starts enabled, as in the showcase.
///
/// A non-finite or non-positive `scale` is replaced with `1.0`.
#[must_use]
pub fn select_shape(product_type: &str, color: &str, scale: f32) -> ShapeDescriptor {
    let geometry =
        ProductKind::parse(product_type).map_or(Geometry::FALLBACK, ProductKind::geometry);
    describe(geometry, color, scale)
}

/// Strict counterpart of [`select_shape`].
///
/// # Errors
///
/// Returns [`CoreError::UnknownProductType`] for tags outside [`ProductKind`].
pub fn try_select_shape(
    product_type: &str,
    color: &str,
    scale: f32,
) -> Result<ShapeDescriptor, CoreError> {
    let kind: ProductKind = product_type.parse()?;
    Ok(describe(kind.geometry(), color, scale))
}

fn describe(geometry: Geometry, color: &str, scale: f32) -> ShapeDescriptor {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    ShapeDescriptor {
        geometry,
        color: color.to_string(),
        scale,
        rotating: true,
    }
}

/// Current Y-axis orientation of a spinning shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    angle: f32,
}

impl Spin {
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advances by `elapsed_secs` of animation time if `shape` is rotating and
    /// returns the new angle in `[0, TAU)`.
    pub fn advance(&mut self, shape: &ShapeDescriptor, elapsed_secs: f32) -> f32 {
        if shape.rotating && elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.angle = (self.angle + elapsed_secs * ROTATION_RATE).rem_euclid(TAU);
        }
        self.angle
    }
}
