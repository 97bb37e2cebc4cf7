use crate::{
    foundation::core::{ProposedSize, Size},
    layout::allocator::ChildRequest,
};

/// A child as seen by the stacks: an opaque handle the host can measure.
pub trait LayoutChild {
    /// Natural size of the child for a given proposal.
    fn size_that_fits(&self, proposal: ProposedSize) -> Size;

    /// Requested share of the primary axis. Defaults to no request.
    fn request(&self) -> ChildRequest {
        ChildRequest::UNSPECIFIED
    }
}

impl<C: LayoutChild + ?Sized> LayoutChild for &C {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn request(&self) -> ChildRequest {
        (**self).request()
    }
}

impl<C: LayoutChild + ?Sized> LayoutChild for Box<C> {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn request(&self) -> ChildRequest {
        (**self).request()
    }
}

/// Wraps a child with an explicit [`ChildRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct Proportioned<C> {
    /// The wrapped child, measured unchanged.
    pub inner: C,
    /// Request reported in place of the child's own.
    pub request: ChildRequest,
}

impl<C: LayoutChild> LayoutChild for Proportioned<C> {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        self.inner.size_that_fits(proposal)
    }

    fn request(&self) -> ChildRequest {
        self.request
    }
}

/// Modifiers that attach a proportion or a priority to any child.
pub trait ProportionExt: LayoutChild + Sized {
    /// Request `proportion` of the stack's primary axis.
    fn proportion(self, proportion: f64) -> Proportioned<Self> {
        let priority = self.request().priority;
        Proportioned {
            inner: self,
            request: ChildRequest {
                proportion: Some(proportion),
                priority,
            },
        }
    }

    /// Set the priority used when a stack allocates in priority order.
    fn layout_priority(self, priority: i32) -> Proportioned<Self> {
        let request = self.request().with_priority(priority);
        Proportioned {
            inner: self,
            request,
        }
    }
}

impl<C: LayoutChild> ProportionExt for C {}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A box with a fixed natural size that shrinks to fit any specified proposal.
pub struct FixedChild {
    /// Natural size when nothing narrower is proposed.
    pub size: Size,
}

impl FixedChild {
    /// Box with the given natural width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl LayoutChild for FixedChild {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        let clamp = |natural: f64, offered: Option<f64>| match offered {
            Some(o) => natural.min(o.max(0.0)),
            None => natural,
        };
        Size::new(
            clamp(self.size.width, proposal.width),
            clamp(self.size.height, proposal.height),
        )
    }
}
