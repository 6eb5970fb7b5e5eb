// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Read-only view of a host element tree.
///
/// Two parent relations are exposed because layout and structure differ:
/// offsets are measured against the *offset parent* (the nearest positioned
/// ancestor), while containment checks follow the *structural* parent.
pub trait ElementGeometry {
    /// Handle identifying one element.
    type Node: Copy + Eq;

    /// Returns `true` if `node` refers to a live element.
    fn contains(&self, node: Self::Node) -> bool;

    /// Offset of `node` relative to its offset parent.
    fn offset(&self, node: Self::Node) -> Vec2;

    /// Nearest positioned ancestor of `node`, if any.
    fn offset_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Structural parent of `node`, if any.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Current bounding-box size of `node`.
    fn size(&self, node: Self::Node) -> Size;
}

/// Page-relative offset of `node`, summed over its offset-parent chain.
///
/// `None` is the base case and yields a zero offset. This is the recursive
/// formulation; it accumulates in the same order as
/// [`cumulative_offset_iterative`] so both produce bit-identical results.
///
/// The chain must be acyclic.
#[must_use]
pub fn cumulative_offset<G>(geometry: &G, node: Option<G::Node>) -> Vec2
where
    G: ElementGeometry + ?Sized,
{
    accumulate_offset(geometry, node, Vec2::ZERO)
}

fn accumulate_offset<G>(geometry: &G, node: Option<G::Node>, acc: Vec2) -> Vec2
where
    G: ElementGeometry + ?Sized,
{
    match node {
        None => acc,
        Some(node) => accumulate_offset(
            geometry,
            geometry.offset_parent(node),
            acc + geometry.offset(node),
        ),
    }
}

/// Loop form of [`cumulative_offset`].
#[must_use]
pub fn cumulative_offset_iterative<G>(geometry: &G, node: Option<G::Node>) -> Vec2
where
    G: ElementGeometry + ?Sized,
{
    let mut total = Vec2::ZERO;
    let mut current = node;
    while let Some(node) = current {
        total = total + geometry.offset(node);
        current = geometry.offset_parent(node);
    }
    total
}

/// Converts a page-level point into coordinates local to `node`.
#[must_use]
pub fn position_on_element<G>(geometry: &G, node: G::Node, page: Point) -> Point
where
    G: ElementGeometry + ?Sized,
{
    page - cumulative_offset_iterative(geometry, Some(node))
}

/// Returns `true` if `candidate` is `container` or lies below it.
///
/// Walks structural parents upward from `candidate`. A missing candidate
/// (for example a pointer leaving the window) is never a descendant.
#[must_use]
pub fn is_descendant_of<G>(geometry: &G, candidate: Option<G::Node>, container: G::Node) -> bool
where
    G: ElementGeometry + ?Sized,
{
    let mut current = candidate;
    while let Some(node) = current {
        if node == container {
            return true;
        }
        current = geometry.parent(node);
    }
    false
}

/// Center of `node`'s bounding box in its own local coordinates.
#[must_use]
pub fn surface_center<G>(geometry: &G, node: G::Node) -> Point
where
    G: ElementGeometry + ?Sized,
{
    let size = geometry.size(node);
    Point::new(size.width / 2.0, size.height / 2.0)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::*;
    use crate::ElementArena;

    fn nested() -> (ElementArena, [crate::ElementId; 3]) {
        let mut tree = ElementArena::new();
        let root = tree.push_root(Vec2::new(5.0, 7.0), Size::new(800.0, 600.0));
        let mid = tree.push_child(root, Vec2::new(20.0, 30.0), Size::new(400.0, 300.0));
        let leaf = tree.push_child(mid, Vec2::new(1.5, 2.5), Size::new(100.0, 50.0));
        (tree, [root, mid, leaf])
    }

    #[test]
    fn missing_node_has_zero_offset() {
        let (tree, _) = nested();
        assert_eq!(cumulative_offset(&tree, None), Vec2::ZERO);
        assert_eq!(cumulative_offset_iterative(&tree, None), Vec2::ZERO);
    }

    #[test]
    fn offsets_sum_along_the_chain() {
        let (tree, [root, mid, leaf]) = nested();
        assert_eq!(cumulative_offset(&tree, Some(root)), Vec2::new(5.0, 7.0));
        assert_eq!(cumulative_offset(&tree, Some(mid)), Vec2::new(25.0, 37.0));
        assert_eq!(cumulative_offset(&tree, Some(leaf)), Vec2::new(26.5, 39.5));
        assert_eq!(
            cumulative_offset_iterative(&tree, Some(leaf)),
            cumulative_offset(&tree, Some(leaf))
        );
    }

    #[test]
    fn page_point_becomes_local() {
        let (tree, [_, _, leaf]) = nested();
        let local = position_on_element(&tree, leaf, Point::new(100.0, 100.0));
        assert_eq!(local, Point::new(73.5, 60.5));
    }

    #[test]
    fn unpositioned_parent_is_skipped_for_offsets() {
        let mut tree = ElementArena::new();
        let root = tree.push_root(Vec2::ZERO, Size::new(800.0, 600.0));
        let wrapper = tree.push_child(root, Vec2::new(50.0, 50.0), Size::new(200.0, 200.0));
        // Offset is measured against `root`, not the structural parent.
        let inner = tree.insert(crate::ElementData {
            offset: Vec2::new(60.0, 70.0),
            size: Size::new(10.0, 10.0),
            parent: Some(wrapper),
            offset_parent: Some(root),
        });
        assert_eq!(cumulative_offset(&tree, Some(inner)), Vec2::new(60.0, 70.0));
        assert!(is_descendant_of(&tree, Some(inner), wrapper));
    }

    #[test]
    fn descendant_check_is_inclusive_and_directional() {
        let (tree, [root, mid, leaf]) = nested();
        assert!(is_descendant_of(&tree, Some(leaf), root));
        assert!(is_descendant_of(&tree, Some(mid), mid));
        assert!(!is_descendant_of(&tree, Some(root), leaf));
        assert!(!is_descendant_of(&tree, None, root));
    }

    #[test]
    fn center_is_half_the_size() {
        let (tree, [_, mid, _]) = nested();
        assert_eq!(surface_center(&tree, mid), Point::new(200.0, 150.0));
    }
}
