// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};

/// Errors raised when a stack operation's precondition doesn't hold.
///
/// A failed operation never changes the stack it was called on.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StackError<A> {
    /// A stack was requested with a capacity of zero.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
    /// [`pop()`][pop] was called on a stack holding no values.
    ///
    /// [pop]: trait.Stack.html#tymethod.pop
    Empty,
    /// [`push()`][push] was called on a stack already holding `capacity`
    /// values.
    ///
    /// The value that couldn't be pushed is handed back rather than dropped.
    ///
    /// [push]: trait.Stack.html#tymethod.push
    Full {
        /// The capacity of the stack that refused the value.
        capacity: usize,
        /// The rejected value.
        value: A,
    },
}

impl<A> StackError<A> {
    /// Recover the value a full stack refused to take.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_stack::{LinkedStack, Stack};
    /// let mut stack = LinkedStack::new(1).unwrap();
    /// stack.push("first").unwrap();
    /// let error = stack.push("second").unwrap_err();
    /// assert_eq!(Some("second"), error.into_value());
    /// ```
    pub fn into_value(self) -> Option<A> {
        match self {
            StackError::Full { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Test whether this is a [`Full`][Full] error.
    ///
    /// [Full]: #variant.Full
    pub fn is_full(&self) -> bool {
        matches!(self, StackError::Full { .. })
    }

    /// Test whether this is an [`Empty`][Empty] error.
    ///
    /// [Empty]: #variant.Empty
    pub fn is_empty(&self) -> bool {
        matches!(self, StackError::Empty)
    }

    /// Test whether this is an [`InvalidCapacity`][InvalidCapacity] error.
    ///
    /// [InvalidCapacity]: #variant.InvalidCapacity
    pub fn is_invalid_capacity(&self) -> bool {
        matches!(self, StackError::InvalidCapacity { .. })
    }
}

impl<A> Display for StackError<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StackError::InvalidCapacity { capacity } => write!(
                f,
                "invalid stack capacity {}: capacity must be at least 1",
                capacity
            ),
            StackError::Empty => write!(f, "cannot pop from an empty stack"),
            StackError::Full { capacity, .. } => write!(
                f,
                "cannot push to a full stack (capacity {})",
                capacity
            ),
        }
    }
}

impl<A> Debug for StackError<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StackError::InvalidCapacity { capacity } => f
                .debug_struct("InvalidCapacity")
                .field("capacity", capacity)
                .finish(),
            StackError::Empty => f.write_str("Empty"),
            StackError::Full { capacity, value } => f
                .debug_struct("Full")
                .field("capacity", capacity)
                .field("value", value)
                .finish(),
        }
    }
}

impl<A> std::error::Error for StackError<A> where A: Debug {}
