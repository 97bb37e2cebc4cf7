use crate::{
    foundation::core::{Axis, Point, ProposedSize, Rect, Size},
    layout::{
        allocator::{AllocationOrder, ChildRequest, allocate_with},
        child::LayoutChild,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Cross-axis alignment of every child in a stack.
pub enum AxisAlignment {
    /// Top edge of a row, leading edge of a column.
    Start,
    /// Centered on the cross axis.
    #[default]
    Center,
    /// Bottom edge of a row, trailing edge of a column.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Where a child goes and what it is offered.
pub struct Placement {
    /// Center anchor of the child.
    pub position: Point,
    /// Proposal the child should lay itself out in.
    pub proposal: ProposedSize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A row or column that splits its primary axis by requested proportions.
pub struct ProportionalStack {
    /// Axis split among the children.
    pub axis: Axis,
    /// Placement of children on the other axis.
    pub alignment: AxisAlignment,
    /// Order in which child requests are offered the budget.
    pub order: AllocationOrder,
}

impl ProportionalStack {
    /// Row of columns. Honours child priorities when requests conflict.
    pub fn horizontal(alignment: AxisAlignment) -> Self {
        Self {
            axis: Axis::Horizontal,
            alignment,
            order: AllocationOrder::Priority,
        }
    }

    /// Column of rows, allocated in child order.
    pub fn vertical(alignment: AxisAlignment) -> Self {
        Self {
            axis: Axis::Vertical,
            alignment,
            order: AllocationOrder::Sequence,
        }
    }

    /// Replace the allocation order.
    pub fn with_order(mut self, order: AllocationOrder) -> Self {
        self.order = order;
        self
    }

    /// A proportional stack fills whatever it is offered.
    pub fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        proposal.replacing_unspecified()
    }

    /// Primary-axis extent of each child within `bounds`.
    pub fn extents<C: LayoutChild>(&self, children: &[C], bounds: Rect) -> Vec<f64> {
        let requests: Vec<ChildRequest> = children.iter().map(LayoutChild::request).collect();
        allocate_with(&requests, self.axis.extent_of(bounds.size()), self.order)
    }

    /// Place every child inside `bounds`, one placement per child in order.
    #[tracing::instrument(skip(self, children), fields(axis = ?self.axis, children = children.len()))]
    pub fn place<C: LayoutChild>(
        &self,
        children: &[C],
        bounds: Rect,
        proposal: ProposedSize,
    ) -> Vec<Placement> {
        let axis = self.axis;
        let cross_axis = axis.cross();
        let (cross_min, cross_max) = cross_axis.span_of(bounds);
        let cross_anchor = match self.alignment {
            AxisAlignment::Start => cross_min,
            AxisAlignment::Center => (cross_min + cross_max) * 0.5,
            AxisAlignment::End => cross_max,
        };
        let offered_cross = proposal.along(cross_axis);

        let extents = self.extents(children, bounds);
        let mut main = axis.span_of(bounds).0;
        let mut placements = Vec::with_capacity(children.len());
        for (child, extent) in children.iter().zip(extents) {
            main += extent * 0.5;
            let child_proposal = ProposedSize::from_axis(axis, Some(extent), offered_cross);
            let child_cross = cross_axis.extent_of(child.size_that_fits(child_proposal));
            let cross = cross_anchor
                + match self.alignment {
                    AxisAlignment::Start => child_cross * 0.5,
                    AxisAlignment::Center => 0.0,
                    AxisAlignment::End => -child_cross * 0.5,
                };
            placements.push(Placement {
                position: axis.point(main, cross),
                proposal: child_proposal,
            });
            main += extent * 0.5;
        }
        placements
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/proportional.rs"]
mod tests;
