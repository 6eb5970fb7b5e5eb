// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Size, Vec2};

use crate::element::ElementGeometry;

/// Handle to an element stored in an [`ElementArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of this element in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Layout data for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementData {
    /// Offset relative to `offset_parent` (or the page when there is none).
    pub offset: Vec2,
    /// Bounding-box size.
    pub size: Size,
    /// Structural parent.
    pub parent: Option<ElementId>,
    /// Nearest positioned ancestor.
    pub offset_parent: Option<ElementId>,
}

/// Flat, append-only element tree implementing [`ElementGeometry`].
///
/// Unknown handles behave like detached zero-sized elements.
#[derive(Clone, Debug, Default)]
pub struct ElementArena {
    elements: Vec<ElementData>,
}

impl ElementArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element with explicit parent relations.
    pub fn insert(&mut self, data: ElementData) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(data);
        id
    }

    /// Inserts a top-level element positioned at `offset` on the page.
    pub fn push_root(&mut self, offset: Vec2, size: Size) -> ElementId {
        self.insert(ElementData {
            offset,
            size,
            parent: None,
            offset_parent: None,
        })
    }

    /// Inserts a positioned child of `parent`.
    ///
    /// The parent is both the structural parent and the offset parent.
    pub fn push_child(&mut self, parent: ElementId, offset: Vec2, size: Size) -> ElementId {
        self.insert(ElementData {
            offset,
            size,
            parent: Some(parent),
            offset_parent: Some(parent),
        })
    }

    /// Returns the data stored for `id`.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.elements.get(id.0)
    }

    /// Moves `id` relative to its offset parent. Unknown ids are ignored.
    pub fn set_offset(&mut self, id: ElementId, offset: Vec2) {
        if let Some(el) = self.elements.get_mut(id.0) {
            el.offset = offset;
        }
    }

    /// Resizes `id`. Unknown ids are ignored.
    pub fn set_size(&mut self, id: ElementId, size: Size) {
        if let Some(el) = self.elements.get_mut(id.0) {
            el.size = size;
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements were inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementGeometry for ElementArena {
    type Node = ElementId;

    fn contains(&self, node: ElementId) -> bool {
        node.0 < self.elements.len()
    }

    fn offset(&self, node: ElementId) -> Vec2 {
        self.get(node).map_or(Vec2::ZERO, |el| el.offset)
    }

    fn offset_parent(&self, node: ElementId) -> Option<ElementId> {
        self.get(node).and_then(|el| el.offset_parent)
    }

    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.get(node).and_then(|el| el.parent)
    }

    fn size(&self, node: ElementId) -> Size {
        self.get(node).map_or(Size::ZERO, |el| el.size)
    }
}
