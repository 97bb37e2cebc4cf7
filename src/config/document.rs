use crate::{
    foundation::core::{Axis, ProposedSize, Rect, Size},
    foundation::error::{LayoutError, LayoutResult},
    layout::{
        allocator::{AllocationOrder, ChildRequest},
        child::{FixedChild, Proportioned},
        equal::{DEFAULT_SPACING, EqualWidthHStack, EqualWidthVStack},
        proportional::{AxisAlignment, Placement, ProportionalStack},
    },
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A stack and its children, as loaded from JSON.
///
/// Documents describe fixed-size boxes so a layout can be evaluated without a
/// host UI; see [`LayoutDocument::evaluate`].
pub struct LayoutDocument {
    /// Which family of stack to build.
    pub kind: StackKind,
    /// Primary axis.
    #[serde(default)]
    pub axis: Axis,
    /// Cross-axis alignment (proportional stacks only).
    #[serde(default)]
    pub alignment: AxisAlignment,
    /// Allocation order; defaults to the axis' natural order.
    #[serde(default)]
    pub order: Option<AllocationOrder>,
    /// Gap between cells (equal stacks only).
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Shrink cells to a specified proposal width (equal rows only).
    #[serde(default = "default_fit_to_view")]
    pub fit_to_view: bool,
    /// Container bounds in host coordinates.
    pub bounds: BoundsSpec,
    /// Proposal offered to the container; defaults to the bounds' size.
    #[serde(default)]
    pub proposal: Option<ProposedSize>,
    /// Ordered children.
    #[serde(default)]
    pub children: Vec<ChildSpec>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Stack family.
pub enum StackKind {
    /// Split by requested proportions.
    #[default]
    Proportional,
    /// Equal cells sized to the largest child.
    Equal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Origin and size of the container.
pub struct BoundsSpec {
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width, `>= 0`.
    pub width: f64,
    /// Height, `>= 0`.
    pub height: f64,
}

impl BoundsSpec {
    /// The bounds as a rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fixed-size child box.
pub struct ChildSpec {
    /// Free-form name echoed in the output.
    #[serde(default)]
    pub label: Option<String>,
    /// Requested share of the primary axis; absent or `0` shares the leftover.
    #[serde(default)]
    pub proportion: Option<f64>,
    /// Priority under priority-ordered allocation.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Natural size of the box.
    pub size: Size,
}

impl ChildSpec {
    fn to_child(&self) -> Proportioned<FixedChild> {
        Proportioned {
            inner: FixedChild { size: self.size },
            request: ChildRequest {
                proportion: self.proportion,
                priority: self.priority,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Result of evaluating a document.
pub struct DocumentLayout {
    /// Size the container reports for the proposal.
    pub size: Size,
    /// One entry per child, in document order.
    pub placements: Vec<LabeledPlacement>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A placement paired with the child's label.
pub struct LabeledPlacement {
    /// Label copied from the child spec.
    pub label: Option<String>,
    /// Where the child goes.
    #[serde(flatten)]
    pub placement: Placement,
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

fn default_fit_to_view() -> bool {
    true
}

impl LayoutDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        serde_json::from_str(json).map_err(|e| LayoutError::serde(e.to_string()))
    }

    /// Reject non-finite or negative geometry and proportions.
    pub fn validate(&self) -> LayoutResult<()> {
        let b = &self.bounds;
        for (name, value) in [("x", b.x), ("y", b.y)] {
            if !value.is_finite() {
                return Err(LayoutError::validation(format!(
                    "bounds.{name} must be finite"
                )));
            }
        }
        for (name, value) in [("width", b.width), ("height", b.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::validation(format!(
                    "bounds.{name} must be finite and >= 0"
                )));
            }
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::validation("spacing must be finite and >= 0"));
        }
        if let Some(p) = self.proposal {
            for (name, value) in [("width", p.width), ("height", p.height)] {
                if let Some(v) = value
                    && (!v.is_finite() || v < 0.0)
                {
                    return Err(LayoutError::validation(format!(
                        "proposal.{name} must be finite and >= 0 when set"
                    )));
                }
            }
        }

        for (index, child) in self.children.iter().enumerate() {
            let name = child
                .label
                .clone()
                .unwrap_or_else(|| format!("#{index}"));
            if !child.size.width.is_finite()
                || !child.size.height.is_finite()
                || child.size.width < 0.0
                || child.size.height < 0.0
            {
                return Err(LayoutError::validation(format!(
                    "child '{name}' size must be finite and >= 0"
                )));
            }
            if let Some(p) = child.proportion
                && (!p.is_finite() || p < 0.0)
            {
                return Err(LayoutError::invalid_proportion(format!(
                    "child '{name}' proportion must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Validate, build the described stack and place its children.
    #[tracing::instrument(skip(self), fields(kind = ?self.kind, axis = ?self.axis))]
    pub fn evaluate(&self) -> LayoutResult<DocumentLayout> {
        self.validate()?;

        let bounds = self.bounds.to_rect();
        let proposal = self
            .proposal
            .unwrap_or_else(|| ProposedSize::exact(bounds.size()));
        let children: Vec<Proportioned<FixedChild>> =
            self.children.iter().map(ChildSpec::to_child).collect();

        let (size, placements) = match (self.kind, self.axis) {
            (StackKind::Proportional, axis) => {
                let mut stack = match axis {
                    Axis::Horizontal => ProportionalStack::horizontal(self.alignment),
                    Axis::Vertical => ProportionalStack::vertical(self.alignment),
                };
                if let Some(order) = self.order {
                    stack = stack.with_order(order);
                }
                (
                    stack.size_that_fits(proposal),
                    stack.place(&children, bounds, proposal),
                )
            }
            (StackKind::Equal, Axis::Horizontal) => {
                let stack = EqualWidthHStack::new(self.fit_to_view).with_spacing(self.spacing);
                (
                    stack.size_that_fits(&children, proposal),
                    stack.place(&children, bounds, proposal),
                )
            }
            (StackKind::Equal, Axis::Vertical) => {
                let stack = EqualWidthVStack::default().with_spacing(self.spacing);
                (
                    stack.size_that_fits(&children, proposal),
                    stack.place(&children, bounds, proposal),
                )
            }
        };

        let placements = self
            .children
            .iter()
            .zip(placements)
            .map(|(child, placement)| LabeledPlacement {
                label: child.label.clone(),
                placement,
            })
            .collect();
        Ok(DocumentLayout { size, placements })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/document.rs"]
mod tests;
