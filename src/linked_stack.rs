// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::counter::Counter;
use crate::error::StackError;
use crate::node::Node;
use crate::stack::{check_capacity, check_not_full, empty_error, Contents, Stack};
use crate::types::Link;
use crate::BufferStack;

const VARIANT: &str = "linked";

/// A bounded stack of individually allocated, doubly linked nodes.
///
/// Every value lives in its own heap node, linked to the node pushed before
/// it and the node pushed after it. The stack keeps track of both ends of
/// the chain: the bottom node for walking the stack in push order, and the
/// top node where values are pushed and popped, so both operations are
/// O(1).
///
/// All of the stack's operations come from the [`Stack`][Stack] trait, which
/// has to be in scope to use them.
///
/// # Examples
///
/// ```rust
/// # use bounded_stack::{LinkedStack, Stack};
/// let mut stack = LinkedStack::new(3).unwrap();
/// for value in 1..=3 {
///     stack.push(value).unwrap();
/// }
/// assert!(stack.is_full());
/// assert!(stack.push(4).is_err());
/// assert_eq!(Ok(3), stack.pop());
/// assert_eq!(vec![1, 2], stack.as_sequence());
/// ```
///
/// [Stack]: trait.Stack.html
pub struct LinkedStack<A> {
    capacity: usize,
    len: usize,
    head: Link<A>,
    tail: Link<A>,
    marker: PhantomData<Box<Node<A>>>,
}

// The nodes are uniquely owned by the stack, as if they were in a `Box`.
unsafe impl<A: Send> Send for LinkedStack<A> {}
unsafe impl<A: Sync> Sync for LinkedStack<A> {}

impl<A> LinkedStack<A> {
    fn empty(capacity: usize) -> Self {
        Self {
            capacity,
            len: Default::default(),
            head: None,
            tail: None,
            marker: PhantomData,
        }
    }

    /// Link a new node on top of the chain. The caller checks capacity.
    fn link_tail(&mut self, value: A) {
        let node = Box::new(Node::new(value, self.tail)).into_pointer();
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len.inc();
    }

    fn unlink_tail(&mut self) -> Option<A> {
        self.tail.map(|tail| {
            let node = unsafe { Node::from_pointer(tail) };
            self.tail = node.prev;
            match self.tail {
                Some(prev) => unsafe { (*prev.as_ptr()).next = None },
                None => self.head = None,
            }
            self.len.dec();
            node.into_value()
        })
    }

    fn unlink_head(&mut self) -> Option<A> {
        self.head.map(|head| {
            let node = unsafe { Node::from_pointer(head) };
            self.head = node.next;
            match self.head {
                Some(next) => unsafe { (*next.as_ptr()).prev = None },
                None => self.tail = None,
            }
            self.len.dec();
            node.into_value()
        })
    }
}

impl<A> Stack<A> for LinkedStack<A> {
    fn new(capacity: usize) -> Result<Self, StackError<A>> {
        check_capacity(VARIANT, capacity).map(Self::empty)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.len.count()
    }

    fn push(&mut self, value: A) -> Result<(), StackError<A>> {
        let value = check_not_full(VARIANT, self.len(), self.capacity, value)?;
        self.link_tail(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<A, StackError<A>> {
        match self.unlink_tail() {
            Some(value) => Ok(value),
            None => Err(empty_error(VARIANT, self.capacity)),
        }
    }

    fn peek(&self) -> Option<&A> {
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    fn peek_mut(&mut self) -> Option<&mut A> {
        self.tail.map(|tail| unsafe { &mut (*tail.as_ptr()).value })
    }

    fn clear(&mut self) {
        // Keeps unlinking if a value's destructor panics.
        struct DropGuard<'a, A>(&'a mut LinkedStack<A>);

        impl<'a, A> Drop for DropGuard<'a, A> {
            fn drop(&mut self) {
                while self.0.unlink_tail().is_some() {}
            }
        }

        while let Some(value) = self.unlink_tail() {
            let guard = DropGuard(self);
            drop(value);
            std::mem::forget(guard);
        }
    }

    #[allow(refining_impl_trait)]
    fn iter<'a>(&'a self) -> Iter<'a, A>
    where
        A: 'a,
    {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.len(),
            marker: PhantomData,
        }
    }

    fn copy_of(source: &Self) -> Self
    where
        A: Clone,
    {
        tracing::trace!(
            variant = VARIANT,
            len = source.len(),
            capacity = source.capacity,
            "copying stack"
        );
        let mut stack = Self::empty(source.capacity);
        for value in source.iter() {
            stack.link_tail(value.clone());
        }
        stack
    }

    fn take(source: &mut Self) -> Self {
        tracing::trace!(
            variant = VARIANT,
            len = source.len(),
            capacity = source.capacity,
            "transferring stack"
        );
        Self {
            capacity: source.capacity,
            len: std::mem::take(&mut source.len),
            head: source.head.take(),
            tail: source.tail.take(),
            marker: PhantomData,
        }
    }
}

impl<A> Drop for LinkedStack<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<A> Clone for LinkedStack<A>
where
    A: Clone,
{
    /// Make a deep copy of the stack: every node is freshly allocated.
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }

    /// Make `self` a deep copy of `source`, capacity included.
    ///
    /// Existing values are overwritten in place where the two stacks overlap,
    /// so only the difference in length gets allocated or freed.
    fn clone_from(&mut self, source: &Self) {
        while self.len() > source.len() {
            self.unlink_tail();
        }
        let targets = IterMut {
            head: self.head,
            remaining: self.len(),
            marker: PhantomData,
        };
        let mut values = source.iter();
        for (target, value) in targets.zip(&mut values) {
            target.clone_from(value);
        }
        for value in values {
            self.link_tail(value.clone());
        }
        self.capacity = source.capacity;
    }
}

impl<A, B> PartialEq<B> for LinkedStack<A>
where
    A: PartialEq,
    B: Stack<A>,
{
    fn eq(&self, other: &B) -> bool {
        self.equals(other)
    }
}

impl<A: Eq> Eq for LinkedStack<A> {}

impl<A> Debug for LinkedStack<A>
where
    A: Debug,
{
    /// Debug implementation for `LinkedStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_stack::{LinkedStack, Stack};
    /// let mut stack = LinkedStack::new(4).unwrap();
    /// stack.push("a").unwrap();
    /// assert_eq!(r#"LinkedStack[1/4]: ["a"]"#, format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "LinkedStack{:?}",
            Contents::new(self.len(), self.capacity, self.iter())
        )
    }
}

impl<A> Display for LinkedStack<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "LinkedStack{}",
            Contents::new(self.len(), self.capacity, self.iter())
        )
    }
}

impl<A> From<BufferStack<A>> for LinkedStack<A> {
    /// Move the values of a `BufferStack` into linked nodes, keeping their
    /// order and the stack's capacity.
    fn from(stack: BufferStack<A>) -> Self {
        let mut linked = Self::empty(stack.capacity());
        for value in stack {
            linked.link_tail(value);
        }
        linked
    }
}

impl<'a, A> IntoIterator for &'a LinkedStack<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> IntoIterator for LinkedStack<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

/// A borrowing iterator over a [`LinkedStack`][LinkedStack], from the bottom
/// of the stack to the top.
///
/// [LinkedStack]: struct.LinkedStack.html
pub struct Iter<'a, A> {
    head: Link<A>,
    tail: Link<A>,
    remaining: usize,
    marker: PhantomData<&'a Node<A>>,
}

unsafe impl<'a, A: Sync> Send for Iter<'a, A> {}
unsafe impl<'a, A: Sync> Sync for Iter<'a, A> {}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|head| {
            let node = unsafe { &*head.as_ptr() };
            self.remaining -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|tail| {
            let node = unsafe { &*tail.as_ptr() };
            self.remaining -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}
impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, A> Debug for Iter<'a, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_tuple("Iter").field(&self.remaining).finish()
    }
}

/// Mutable walk from the bottom of the stack, used to clone in place.
struct IterMut<'a, A> {
    head: Link<A>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<A>>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|head| {
            let node = unsafe { &mut *head.as_ptr() };
            self.remaining -= 1;
            self.head = node.next;
            &mut node.value
        })
    }
}

/// An owning iterator over a [`LinkedStack`][LinkedStack], from the bottom of
/// the stack to the top.
///
/// Each node is freed as its value is yielded.
///
/// [LinkedStack]: struct.LinkedStack.html
pub struct IntoIter<A> {
    stack: LinkedStack<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.unlink_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.stack.unlink_tail()
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}
impl<A> FusedIterator for IntoIter<A> {}

impl<A> Debug for IntoIter<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_tuple("IntoIter").field(&self.stack).finish()
    }
}
