// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the offset-chain walk.
//!
//! The recursive and loop formulations of the offset sum must agree exactly,
//! and page-to-local conversion must invert the summed offset.

use kurbo::{Point, Size, Vec2};
use panzoom_geometry::{
    ElementArena, ElementId, cumulative_offset, cumulative_offset_iterative, is_descendant_of,
    position_on_element,
};
use proptest::prelude::*;

fn chain(offsets: &[(f64, f64)]) -> (ElementArena, Vec<ElementId>) {
    let mut tree = ElementArena::new();
    let mut ids = Vec::with_capacity(offsets.len());
    for &(x, y) in offsets {
        let id = match ids.last() {
            None => tree.push_root(Vec2::new(x, y), Size::new(100.0, 100.0)),
            Some(&parent) => tree.push_child(parent, Vec2::new(x, y), Size::new(100.0, 100.0)),
        };
        ids.push(id);
    }
    (tree, ids)
}

proptest! {
    #[test]
    fn recursive_and_iterative_offsets_agree(
        offsets in prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4), 1..48)
    ) {
        let (tree, ids) = chain(&offsets);
        for &id in &ids {
            let a = cumulative_offset(&tree, Some(id));
            let b = cumulative_offset_iterative(&tree, Some(id));
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn local_position_inverts_offset(
        offsets in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..16),
        px in -2e3f64..2e3,
        py in -2e3f64..2e3,
    ) {
        let (tree, ids) = chain(&offsets);
        let leaf = *ids.last().unwrap();
        let local = position_on_element(&tree, leaf, Point::new(px, py));
        let back = local + cumulative_offset(&tree, Some(leaf));
        prop_assert!((back.x - px).abs() < 1e-9);
        prop_assert!((back.y - py).abs() < 1e-9);
    }

    #[test]
    fn every_chain_member_contains_the_leaf(
        offsets in prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 1..16)
    ) {
        let (tree, ids) = chain(&offsets);
        let leaf = *ids.last().unwrap();
        for &id in &ids {
            prop_assert!(is_descendant_of(&tree, Some(leaf), id));
        }
    }
}
