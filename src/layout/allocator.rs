//! Proportional allocation of one axis among an ordered set of children.
//!
//! Requests are honoured first-come, space-permitting: once a request would
//! push the claimed fraction above the whole extent, it and every request
//! processed after it fall back to an even share of whatever is left.

use crate::foundation::error::{LayoutError, LayoutResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// What a single child asks of the allocator.
pub struct ChildRequest {
    /// Requested fraction of the total extent. `None` and `Some(0.0)` both
    /// share the leftover.
    #[serde(default)]
    pub proportion: Option<f64>,
    /// Processing priority (higher first) under [`AllocationOrder::Priority`].
    /// Absent counts as `0`.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl ChildRequest {
    /// A child with no explicit request.
    pub const UNSPECIFIED: Self = Self {
        proportion: None,
        priority: None,
    };

    /// Request `proportion` of the extent. A proportion of `0` is stored as
    /// given but allocates exactly like [`ChildRequest::UNSPECIFIED`].
    pub fn exact(proportion: f64) -> Self {
        Self {
            proportion: Some(proportion),
            priority: None,
        }
    }

    /// Normalizing constructor: `0.0` becomes [`ChildRequest::UNSPECIFIED`].
    pub fn from_fraction(proportion: f64) -> Self {
        if proportion == 0.0 {
            Self::UNSPECIFIED
        } else {
            Self::exact(proportion)
        }
    }

    /// Set the priority used under [`AllocationOrder::Priority`].
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }

    /// Proportion that may claim space. Zero, negative and NaN requests never do.
    fn claim(&self) -> Option<f64> {
        self.proportion.filter(|p| *p > 0.0)
    }
}

impl From<f64> for ChildRequest {
    fn from(value: f64) -> Self {
        Self::from_fraction(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Order in which requests are offered the remaining budget.
pub enum AllocationOrder {
    /// Original child order.
    #[default]
    Sequence,
    /// Descending priority, ties in original order.
    Priority,
}

/// Allocate `total` among `requests` in sequence order.
pub fn allocate(requests: &[ChildRequest], total: f64) -> Vec<f64> {
    allocate_with(requests, total, AllocationOrder::Sequence)
}

/// Allocate `total` among `requests`, offering the budget in `order`.
///
/// Never fails: a negative or non-finite `total` is treated as `0`, and
/// requests that cannot be honoured share the leftover evenly. The result has
/// one non-negative extent per request, in request order.
pub fn allocate_with(requests: &[ChildRequest], total: f64, order: AllocationOrder) -> Vec<f64> {
    let total = sanitize_extent(total);
    let mut assigned: Vec<Option<f64>> = vec![None; requests.len()];
    let mut used = 0.0f64;

    for index in processing_order(requests, order) {
        let Some(proportion) = requests[index].claim() else {
            continue;
        };
        if used + proportion > 1.0 {
            tracing::debug!(
                index,
                proportion,
                used,
                "proportion exceeds remaining budget; stopping"
            );
            break;
        }
        used += proportion;
        assigned[index] = Some(proportion * total);
    }

    let unassigned = assigned.iter().filter(|a| a.is_none()).count();
    let share = if unassigned == 0 {
        0.0
    } else {
        ((1.0 - used) * total / unassigned as f64).max(0.0)
    };

    assigned
        .into_iter()
        .map(|a| a.unwrap_or(share))
        .collect()
}

/// Like [`allocate_with`], but rejects input the lenient allocator would
/// silently reinterpret.
pub fn allocate_strict(
    requests: &[ChildRequest],
    total: f64,
    order: AllocationOrder,
) -> LayoutResult<Vec<f64>> {
    if !total.is_finite() || total < 0.0 {
        return Err(LayoutError::invalid_extent(format!(
            "total extent must be finite and >= 0, got {total}"
        )));
    }

    let mut sum = 0.0f64;
    for (index, request) in requests.iter().enumerate() {
        let Some(p) = request.proportion else {
            continue;
        };
        if !p.is_finite() || p < 0.0 {
            return Err(LayoutError::invalid_proportion(format!(
                "child {index} requests {p}; proportions must be finite and >= 0"
            )));
        }
        sum += p;
    }
    if sum > 1.0 {
        return Err(LayoutError::invalid_proportion(format!(
            "requested proportions sum to {sum}, which exceeds 1"
        )));
    }

    Ok(allocate_with(requests, total, order))
}

fn processing_order(requests: &[ChildRequest], order: AllocationOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..requests.len()).collect();
    if order == AllocationOrder::Priority {
        // sort_by_key is stable, so equal priorities keep their original order.
        indices.sort_by_key(|&i| std::cmp::Reverse(requests[i].effective_priority()));
    }
    indices
}

pub(crate) fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent >= 0.0 {
        extent
    } else {
        tracing::warn!(extent, "clamping unusable extent to 0");
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/allocator.rs"]
mod tests;
