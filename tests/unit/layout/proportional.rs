use super::*;
use crate::layout::child::{FixedChild, ProportionExt, Proportioned};

fn unspecified(inner: FixedChild) -> Proportioned<FixedChild> {
    Proportioned {
        inner,
        request: ChildRequest::UNSPECIFIED,
    }
}

fn row() -> Vec<Proportioned<FixedChild>> {
    vec![
        FixedChild::new(20.0, 10.0).proportion(0.25),
        FixedChild::new(20.0, 30.0).proportion(0.5),
        unspecified(FixedChild::new(20.0, 20.0)),
        unspecified(FixedChild::new(20.0, 40.0)),
    ]
}

#[test]
fn size_that_fits_fills_the_proposal() {
    let stack = ProportionalStack::horizontal(AxisAlignment::Center);
    assert_eq!(
        stack.size_that_fits(ProposedSize::new(Some(300.0), None)),
        Size::new(300.0, 10.0)
    );
}

#[test]
fn hstack_centers_children_in_their_columns() {
    let stack = ProportionalStack::horizontal(AxisAlignment::Center);
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let out = stack.place(&row(), bounds, ProposedSize::exact(bounds.size()));

    let xs: Vec<f64> = out.iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![12.5, 50.0, 81.25, 93.75]);
    assert!(out.iter().all(|p| p.position.y == 25.0));
    assert_eq!(out[1].proposal, ProposedSize::new(Some(50.0), Some(50.0)));
    assert_eq!(out[3].proposal.width, Some(12.5));
}

#[test]
fn hstack_start_and_end_align_edges() {
    let bounds = Rect::new(10.0, 100.0, 110.0, 150.0);
    let proposal = ProposedSize::exact(bounds.size());

    let top = ProportionalStack::horizontal(AxisAlignment::Start).place(&row(), bounds, proposal);
    let ys: Vec<f64> = top.iter().map(|p| p.position.y).collect();
    assert_eq!(ys, vec![105.0, 115.0, 110.0, 120.0]);
    assert_eq!(top[0].position.x, 22.5);

    let bottom = ProportionalStack::horizontal(AxisAlignment::End).place(&row(), bounds, proposal);
    let ys: Vec<f64> = bottom.iter().map(|p| p.position.y).collect();
    assert_eq!(ys, vec![145.0, 135.0, 140.0, 130.0]);
}

#[test]
fn hstack_honours_priority_and_vstack_does_not() {
    let children = vec![
        FixedChild::new(5.0, 5.0).proportion(0.6).layout_priority(1),
        FixedChild::new(5.0, 5.0).proportion(0.6).layout_priority(2),
    ];
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);

    let h = ProportionalStack::horizontal(AxisAlignment::Center);
    assert_eq!(h.extents(&children, bounds), vec![40.0, 60.0]);

    let v = ProportionalStack::vertical(AxisAlignment::Center);
    assert_eq!(v.extents(&children, bounds), vec![60.0, 40.0]);
    assert_eq!(
        v.with_order(AllocationOrder::Priority)
            .extents(&children, bounds),
        vec![40.0, 60.0]
    );
}

#[test]
fn vstack_stacks_rows_from_bounds_origin() {
    let stack = ProportionalStack::vertical(AxisAlignment::Start);
    let bounds = Rect::new(0.0, 20.0, 80.0, 220.0);
    let children = vec![
        FixedChild::new(30.0, 10.0).proportion(0.5),
        unspecified(FixedChild::new(60.0, 10.0)),
    ];
    let out = stack.place(&children, bounds, ProposedSize::new(Some(80.0), None));

    assert_eq!(out[0].position, Point::new(15.0, 70.0));
    assert_eq!(out[1].position, Point::new(30.0, 170.0));
    assert_eq!(out[0].proposal, ProposedSize::new(Some(80.0), Some(100.0)));
}

#[test]
fn vstack_end_alignment_uses_trailing_edge() {
    let stack = ProportionalStack::vertical(AxisAlignment::End);
    let bounds = Rect::new(0.0, 0.0, 80.0, 100.0);
    let children = vec![FixedChild::new(30.0, 10.0)];
    let out = stack.place(&children, bounds, ProposedSize::exact(bounds.size()));
    assert_eq!(out[0].position, Point::new(65.0, 50.0));
}

#[test]
fn empty_stack_places_nothing() {
    let stack = ProportionalStack::vertical(AxisAlignment::Center);
    let none: Vec<FixedChild> = Vec::new();
    assert!(
        stack
            .place(&none, Rect::new(0.0, 0.0, 10.0, 10.0), ProposedSize::UNSPECIFIED)
            .is_empty()
    );
}

#[test]
fn trait_objects_can_share_a_stack() {
    let a = FixedChild::new(10.0, 10.0).proportion(0.75);
    let b = FixedChild::new(10.0, 10.0);
    let children: Vec<&dyn LayoutChild> = vec![&a, &b];
    let stack = ProportionalStack::horizontal(AxisAlignment::Center);
    assert_eq!(
        stack.extents(&children, Rect::new(0.0, 0.0, 200.0, 10.0)),
        vec![150.0, 50.0]
    );
}

#[test]
fn zero_proportion_modifier_shares_leftover() {
    let children: Vec<Box<dyn LayoutChild>> = vec![
        Box::new(FixedChild::new(10.0, 10.0).proportion(0.25)),
        Box::new(FixedChild::new(10.0, 10.0).proportion(0.5)),
        Box::new(FixedChild::new(10.0, 10.0).proportion(0.0)),
        Box::new(FixedChild::new(10.0, 10.0).proportion(0.0).layout_priority(4)),
    ];
    let bounds = Rect::new(0.0, 0.0, 10.0, 100.0);

    let v = ProportionalStack::vertical(AxisAlignment::Center);
    assert_eq!(v.extents(&children, bounds), vec![25.0, 50.0, 12.5, 12.5]);

    let h = ProportionalStack::horizontal(AxisAlignment::Center);
    let wide = Rect::new(0.0, 0.0, 100.0, 10.0);
    assert_eq!(h.extents(&children, wide), vec![25.0, 50.0, 12.5, 12.5]);
}
