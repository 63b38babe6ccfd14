// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};

use crate::error::StackError;
use crate::stack::{check_capacity, check_not_full, empty_error, Contents, Stack};

const VARIANT: &str = "buffer";

/// A bounded stack backed by a contiguous `Vec`.
///
/// The buffer is allocated up front to hold `capacity` values, and the full
/// check keeps it from ever growing past that.
///
/// # Examples
///
/// ```rust
/// # use bounded_stack::{BufferStack, Stack};
/// let mut stack = BufferStack::new(2).unwrap();
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert!(stack.push('c').unwrap_err().is_full());
/// assert_eq!(Ok('b'), stack.pop());
/// ```
pub struct BufferStack<A> {
    capacity: usize,
    items: Vec<A>,
}

impl<A> BufferStack<A> {
    /// Get the stack's values as a slice, from the bottom to the top.
    pub fn as_slice(&self) -> &[A] {
        &self.items
    }
}

impl<A> Stack<A> for BufferStack<A> {
    fn new(capacity: usize) -> Result<Self, StackError<A>> {
        let capacity = check_capacity(VARIANT, capacity)?;
        Ok(Self {
            capacity,
            items: Vec::with_capacity(capacity),
        })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, value: A) -> Result<(), StackError<A>> {
        let value = check_not_full(VARIANT, self.len(), self.capacity, value)?;
        self.items.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<A, StackError<A>> {
        match self.items.pop() {
            Some(value) => Ok(value),
            None => Err(empty_error(VARIANT, self.capacity)),
        }
    }

    fn peek(&self) -> Option<&A> {
        self.items.last()
    }

    fn peek_mut(&mut self) -> Option<&mut A> {
        self.items.last_mut()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    #[allow(refining_impl_trait)]
    fn iter<'a>(&'a self) -> std::slice::Iter<'a, A>
    where
        A: 'a,
    {
        self.items.iter()
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
        let mut items = Vec::with_capacity(source.capacity);
        items.extend_from_slice(&source.items);
        Self {
            capacity: source.capacity,
            items,
        }
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
            items: std::mem::take(&mut source.items),
        }
    }
}

impl<A> Clone for BufferStack<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }

    fn clone_from(&mut self, source: &Self) {
        self.items.clone_from(&source.items);
        self.capacity = source.capacity;
    }
}

impl<A, B> PartialEq<B> for BufferStack<A>
where
    A: PartialEq,
    B: Stack<A>,
{
    fn eq(&self, other: &B) -> bool {
        self.equals(other)
    }
}

impl<A: Eq> Eq for BufferStack<A> {}

impl<A> Debug for BufferStack<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "BufferStack{:?}",
            Contents::new(self.len(), self.capacity, self.iter())
        )
    }
}

impl<A> Display for BufferStack<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "BufferStack{}",
            Contents::new(self.len(), self.capacity, self.iter())
        )
    }
}

impl<'a, A> IntoIterator for &'a BufferStack<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<A> IntoIterator for BufferStack<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled(capacity: usize, values: std::ops::Range<usize>) -> BufferStack<usize> {
        let mut stack = BufferStack::new(capacity).unwrap();
        for value in values {
            stack.push(value).unwrap();
        }
        stack
    }

    #[test]
    fn construct() {
        assert!(BufferStack::<i32>::new(0)
            .err()
            .map_or(false, |error| error.is_invalid_capacity()));
        for capacity in &[1, 10, 1000] {
            let stack: BufferStack<i32> = BufferStack::new(*capacity).unwrap();
            assert_eq!(*capacity, stack.capacity());
            assert!(stack.is_empty());
        }
    }

    #[test]
    fn buffer_never_grows_past_capacity() {
        let mut stack = filled(100, 0..100);
        assert!(stack.is_full());
        assert_eq!(100, stack.len());
        let allocated = stack.items.capacity();
        assert!(stack.push(100).is_err());
        assert_eq!(allocated, stack.items.capacity());
        assert_eq!(100, stack.len());
    }

    #[test]
    fn push_pop_roundtrip() {
        let mut stack = BufferStack::new(10).unwrap();
        for value in 0..10 {
            stack.push(value).unwrap();
            assert_eq!(Some(&value), stack.peek());
            assert_eq!(Ok(value), stack.pop());
        }
        assert_eq!(Err(StackError::Empty), stack.pop());
    }

    #[test]
    fn empty_pop_leaves_stack_usable() {
        let mut stack = BufferStack::new(10).unwrap();
        assert_eq!(Err(StackError::Empty), stack.pop());
        stack.push(1).unwrap();
        assert_eq!(Ok(1), stack.pop());
        assert_eq!(Err(StackError::Empty), stack.pop());
    }

    #[test]
    fn copy_is_independent() {
        let original = filled(10, 0..10);
        let mut copy = BufferStack::copy_of(&original);
        assert_eq!(original, copy);
        assert_ne!(original.items.as_ptr(), copy.items.as_ptr());
        for _ in 0..5 {
            copy.pop().unwrap();
        }
        assert_eq!(10, original.len());
        assert_eq!(5, copy.len());
    }

    #[test]
    fn take_moves_the_buffer() {
        let mut source = filled(10, 0..10);
        let buffer = source.items.as_ptr();
        let mut taken = BufferStack::take(&mut source);
        assert_eq!(buffer, taken.items.as_ptr());
        assert!(source.is_empty());
        assert_eq!(0, source.items.capacity());
        assert_eq!(10, source.capacity());
        for value in (0..10).rev() {
            assert_eq!(Ok(value), taken.pop());
        }
    }

    #[test]
    fn clone_from_takes_capacity() {
        let source = filled(10, 0..10);
        let mut target = filled(1, 5..6);
        target.clone_from(&source);
        assert_eq!(source, target);
        assert_eq!(10, target.capacity());
    }

    #[test]
    fn render() {
        let stack = filled(4, 0..2);
        assert_eq!("[2/4]: [0, 1]", stack.render());
        assert_eq!("BufferStack[2/4]: [0, 1]", stack.to_string());
        assert_eq!("BufferStack[2/4]: [0, 1]", format!("{:?}", stack));
        assert_eq!(&[0, 1], stack.as_slice());
    }
}
