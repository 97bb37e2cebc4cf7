//! Stacks that give every child the same cell: the size of the largest child.

use crate::{
    foundation::core::{Point, ProposedSize, Rect, Size},
    layout::{child::LayoutChild, proportional::Placement},
};

/// Spacing between adjacent children when none is configured.
pub const DEFAULT_SPACING: f64 = 8.0;

fn total_spacing(count: usize, spacing: f64) -> f64 {
    count.saturating_sub(1) as f64 * spacing
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Row of equal-width cells.
pub struct EqualWidthHStack {
    /// Shrink cells so the row fits a specified proposal width.
    pub fit_to_view: bool,
    /// Gap between adjacent cells.
    pub spacing: f64,
}

impl Default for EqualWidthHStack {
    fn default() -> Self {
        Self {
            fit_to_view: true,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl EqualWidthHStack {
    /// Row with [`DEFAULT_SPACING`] and the given fit-to-view setting.
    pub fn new(fit_to_view: bool) -> Self {
        Self {
            fit_to_view,
            ..Self::default()
        }
    }

    /// Replace the gap between cells.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Size of a single cell. With `fit_to_view` and a specified proposal
    /// width, an oversized row is narrowed and the widest child re-measured.
    pub fn cell_size<C: LayoutChild>(&self, children: &[C], proposal: ProposedSize) -> Size {
        let mut widest = None::<(usize, f64)>;
        let mut max = Size::ZERO;
        for (index, child) in children.iter().enumerate() {
            let natural = child.size_that_fits(ProposedSize::UNSPECIFIED);
            if widest.is_none_or(|(_, w)| natural.width > w) {
                widest = Some((index, natural.width));
            }
            max.width = max.width.max(natural.width);
            max.height = max.height.max(natural.height);
        }

        let (Some((widest, _)), true, Some(width)) = (widest, self.fit_to_view, proposal.width)
        else {
            return max;
        };
        let fitted = (width - total_spacing(children.len(), self.spacing)) / children.len() as f64;
        if max.width <= fitted {
            return max;
        }
        let height = children[widest]
            .size_that_fits(ProposedSize::new(Some(fitted), None))
            .height;
        Size::new(fitted, height)
    }

    /// All cells side by side plus the gaps between them.
    pub fn size_that_fits<C: LayoutChild>(&self, children: &[C], proposal: ProposedSize) -> Size {
        let cell = self.cell_size(children, proposal);
        Size::new(
            cell.width * children.len() as f64 + total_spacing(children.len(), self.spacing),
            cell.height,
        )
    }

    /// Place cells left to right from the leading edge of `bounds`,
    /// vertically centered.
    #[tracing::instrument(skip(self, children), fields(children = children.len()))]
    pub fn place<C: LayoutChild>(
        &self,
        children: &[C],
        bounds: Rect,
        proposal: ProposedSize,
    ) -> Vec<Placement> {
        let cell = self.cell_size(children, proposal);
        let y = bounds.center().y;
        let mut x = bounds.x0 + cell.width * 0.5;
        let mut placements = Vec::with_capacity(children.len());
        for _ in children {
            placements.push(Placement {
                position: Point::new(x, y),
                proposal: ProposedSize::exact(cell),
            });
            x += cell.width + self.spacing;
        }
        placements
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Column of equally sized cells.
pub struct EqualWidthVStack {
    /// Gap between adjacent cells.
    pub spacing: f64,
}

impl Default for EqualWidthVStack {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl EqualWidthVStack {
    /// Replace the gap between cells.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Size of a single cell. Children wider than a specified proposal width
    /// are re-measured at that width.
    pub fn cell_size<C: LayoutChild>(&self, children: &[C], proposal: ProposedSize) -> Size {
        children
            .iter()
            .map(|child| {
                let natural = child.size_that_fits(ProposedSize::UNSPECIFIED);
                match proposal.width {
                    Some(width) if natural.width > width => {
                        child.size_that_fits(ProposedSize::new(Some(width), None))
                    }
                    _ => natural,
                }
            })
            .fold(Size::ZERO, |acc, s| {
                Size::new(acc.width.max(s.width), acc.height.max(s.height))
            })
    }

    /// All cells stacked plus the gaps between them.
    pub fn size_that_fits<C: LayoutChild>(&self, children: &[C], proposal: ProposedSize) -> Size {
        let cell = self.cell_size(children, proposal);
        Size::new(
            cell.width,
            cell.height * children.len() as f64 + total_spacing(children.len(), self.spacing),
        )
    }

    /// Place cells top to bottom from the top of `bounds`, horizontally
    /// centered.
    #[tracing::instrument(skip(self, children), fields(children = children.len()))]
    pub fn place<C: LayoutChild>(
        &self,
        children: &[C],
        bounds: Rect,
        proposal: ProposedSize,
    ) -> Vec<Placement> {
        let cell = self.cell_size(children, proposal);
        let x = bounds.center().x;
        let mut y = bounds.y0 + cell.height * 0.5;
        let mut placements = Vec::with_capacity(children.len());
        for _ in children {
            placements.push(Placement {
                position: Point::new(x, y),
                proposal: ProposedSize::exact(cell),
            });
            y += cell.height + self.spacing;
        }
        placements
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/equal.rs"]
mod tests;
