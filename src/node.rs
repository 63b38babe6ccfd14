// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::types::{Link, NodePointer};

/// A single value in a [`LinkedStack`][LinkedStack].
///
/// `prev` points at the node pushed just before this one, `next` at the one
/// pushed just after it. Neither link owns anything: every node is owned by
/// the stack that allocated it, and is released by turning its pointer back
/// into a `Box` with [`Node::from_pointer()`][from_pointer].
///
/// [LinkedStack]: ../struct.LinkedStack.html
/// [from_pointer]: #method.from_pointer
pub(crate) struct Node<A> {
    pub(crate) value: A,
    pub(crate) prev: Link<A>,
    pub(crate) next: Link<A>,
}

impl<A> Node<A> {
    pub(crate) fn new(value: A, prev: Link<A>) -> Self {
        Self {
            value,
            prev,
            next: None,
        }
    }

    /// Give up the box, leaving the caller responsible for the allocation.
    pub(crate) fn into_pointer(self: Box<Self>) -> NodePointer<A> {
        NodePointer::from(Box::leak(self))
    }

    /// Reclaim ownership of a node allocated by
    /// [`into_pointer()`][into_pointer].
    ///
    /// # Safety
    ///
    /// `pointer` must have come from `into_pointer()`, and must not be
    /// reclaimed twice or dereferenced after this call.
    ///
    /// [into_pointer]: #method.into_pointer
    pub(crate) unsafe fn from_pointer(pointer: NodePointer<A>) -> Box<Self> {
        Box::from_raw(pointer.as_ptr())
    }

    pub(crate) fn into_value(self: Box<Self>) -> A {
        self.value
    }
}
