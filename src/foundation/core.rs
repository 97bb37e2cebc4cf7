pub use kurbo::{Point, Rect, Size};

/// Extent substituted for an unspecified proposal dimension.
pub const DEFAULT_UNSPECIFIED_EXTENT: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Primary axis of a stack.
pub enum Axis {
    /// Children laid out left to right.
    #[default]
    Horizontal,
    /// Children laid out top to bottom.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `size` along this axis.
    pub fn extent_of(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// `(min, max)` of `rect` along this axis.
    pub fn span_of(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// Build a point from main/cross coordinates.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Size offered to a child or container; `None` leaves a dimension unspecified.
pub struct ProposedSize {
    /// Proposed width, if any.
    #[serde(default)]
    pub width: Option<f64>,
    /// Proposed height, if any.
    #[serde(default)]
    pub height: Option<f64>,
}

impl ProposedSize {
    /// Both dimensions unspecified.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Proposal with the given optional dimensions.
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// Proposal fixing both dimensions to `size`.
    pub fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    /// The proposed dimension along `axis`, if specified.
    pub fn along(self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Build a proposal from main/cross components.
    pub fn from_axis(axis: Axis, main: Option<f64>, cross: Option<f64>) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Concrete size with unspecified dimensions replaced by
    /// [`DEFAULT_UNSPECIFIED_EXTENT`].
    pub fn replacing_unspecified(self) -> Size {
        Size::new(
            self.width.unwrap_or(DEFAULT_UNSPECIFIED_EXTENT),
            self.height.unwrap_or(DEFAULT_UNSPECIFIED_EXTENT),
        )
    }
}

impl From<Size> for ProposedSize {
    fn from(value: Size) -> Self {
        Self::exact(value)
    }
}
