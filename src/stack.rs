// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};

use crate::error::StackError;

/// The operations shared by every bounded stack.
///
/// A stack is created with a fixed capacity, which never changes for the
/// lifetime of the stack. It can hold at most `capacity` values, and values
/// come back out in strict last in, first out order.
///
/// Implementors only have to provide the storage specific operations; the
/// predicates, equality, rendering and snapshot operations are derived from
/// them.
///
/// # Examples
///
/// Code written against the trait works with either stack:
///
/// ```rust
/// # use bounded_stack::{BufferStack, LinkedStack, Stack, StackError};
/// fn reverse<S: Stack<char>>(input: &str) -> Result<String, StackError<char>> {
///     let mut stack = S::new(input.chars().count().max(1))?;
///     for c in input.chars() {
///         stack.push(c)?;
///     }
///     let mut output = String::new();
///     while let Ok(c) = stack.pop() {
///         output.push(c);
///     }
///     Ok(output)
/// }
///
/// assert_eq!("olleh", reverse::<LinkedStack<char>>("hello").unwrap());
/// assert_eq!("olleh", reverse::<BufferStack<char>>("hello").unwrap());
/// ```
pub trait Stack<A>: Sized {
    /// Construct an empty stack which can hold up to `capacity` values.
    ///
    /// Fails with [`StackError::InvalidCapacity`][InvalidCapacity] if
    /// `capacity` is zero.
    ///
    /// [InvalidCapacity]: enum.StackError.html#variant.InvalidCapacity
    fn new(capacity: usize) -> Result<Self, StackError<A>>;

    /// Get the maximum number of values the stack can hold.
    fn capacity(&self) -> usize;

    /// Get the number of values currently on the stack.
    fn len(&self) -> usize;

    /// Test whether the stack holds `capacity` values.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Test whether the stack holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push a value onto the top of the stack.
    ///
    /// Fails with [`StackError::Full`][Full] if the stack is full, in which
    /// case the value is returned inside the error and the stack is left
    /// unchanged.
    ///
    /// [Full]: enum.StackError.html#variant.Full
    fn push(&mut self, value: A) -> Result<(), StackError<A>>;

    /// Remove and return the value on top of the stack.
    ///
    /// Fails with [`StackError::Empty`][Empty] if there's nothing to pop.
    ///
    /// [Empty]: enum.StackError.html#variant.Empty
    fn pop(&mut self) -> Result<A, StackError<A>>;

    /// Get a reference to the value on top of the stack, if any.
    fn peek(&self) -> Option<&A>;

    /// Get a mutable reference to the value on top of the stack, if any.
    fn peek_mut(&mut self) -> Option<&mut A>;

    /// Remove every value from the stack. The capacity is unaffected.
    fn clear(&mut self);

    /// Iterate over the values on the stack, from the bottom to the top.
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a A> + ExactSizeIterator + Clone
    where
        A: 'a;

    /// Construct a new stack with the same capacity and the same values as
    /// `source`.
    ///
    /// The two stacks share nothing: pushing to or popping from one of them
    /// never shows up in the other.
    fn copy_of(source: &Self) -> Self
    where
        A: Clone;

    /// Construct a new stack by taking over the storage of `source`.
    ///
    /// No values are copied or reallocated. Afterwards, `source` is an empty
    /// stack with its original capacity, and has no way to reach the values
    /// it used to hold.
    fn take(source: &mut Self) -> Self;

    /// Test whether two stacks hold the same values in the same order.
    ///
    /// Capacity isn't taken into account, and neither is the kind of storage
    /// backing each stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_stack::{BufferStack, LinkedStack, Stack};
    /// let mut small = LinkedStack::new(2).unwrap();
    /// let mut large = BufferStack::new(100).unwrap();
    /// for value in 0..2 {
    ///     small.push(value).unwrap();
    ///     large.push(value).unwrap();
    /// }
    /// assert!(small.equals(&large));
    /// ```
    fn equals<S>(&self, other: &S) -> bool
    where
        S: Stack<A>,
        A: PartialEq,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }

    /// Copy the values on the stack, from the bottom to the top, into a
    /// `Vec`.
    ///
    /// The result doesn't borrow from the stack, so it stays valid whatever
    /// happens to the stack afterwards.
    fn as_sequence(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Render the stack's size, capacity and values as a string.
    ///
    /// The format is `[len/capacity]: [bottom, ..., top]`. It's meant for
    /// humans, and nothing parses it back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_stack::{LinkedStack, Stack};
    /// let mut stack = LinkedStack::new(3).unwrap();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!("[2/3]: [1, 2]", stack.render());
    /// ```
    fn render(&self) -> String
    where
        A: Display,
    {
        Contents::new(self.len(), self.capacity(), self.iter()).to_string()
    }
}

/// Validate a requested capacity.
pub(crate) fn check_capacity<A>(
    variant: &'static str,
    capacity: usize,
) -> Result<usize, StackError<A>> {
    if capacity == 0 {
        tracing::debug!(variant, capacity, "rejected stack capacity");
        Err(StackError::InvalidCapacity { capacity })
    } else {
        Ok(capacity)
    }
}

/// Refuse `value` if a stack holding `len` values is at `capacity`.
pub(crate) fn check_not_full<A>(
    variant: &'static str,
    len: usize,
    capacity: usize,
    value: A,
) -> Result<A, StackError<A>> {
    if len >= capacity {
        tracing::debug!(variant, len, capacity, "rejected push to full stack");
        Err(StackError::Full { capacity, value })
    } else {
        Ok(value)
    }
}

/// The error for popping a stack holding no values.
pub(crate) fn empty_error<A>(variant: &'static str, capacity: usize) -> StackError<A> {
    tracing::debug!(variant, capacity, "rejected pop from empty stack");
    StackError::Empty
}

/// Shared `Display` and `Debug` rendering for stack contents.
pub(crate) struct Contents<I> {
    len: usize,
    capacity: usize,
    values: I,
}

impl<I> Contents<I> {
    pub(crate) fn new(len: usize, capacity: usize, values: I) -> Self {
        Self {
            len,
            capacity,
            values,
        }
    }

    fn write_values<'a, A, F>(&self, f: &mut Formatter<'_>, fmt_value: F) -> Result<(), Error>
    where
        A: 'a,
        I: Iterator<Item = &'a A> + Clone,
        F: Fn(&A, &mut Formatter<'_>) -> Result<(), Error>,
    {
        write!(f, "[{}/{}]: [", self.len, self.capacity)?;
        for (index, value) in self.values.clone().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt_value(value, f)?;
        }
        f.write_str("]")
    }
}

impl<'a, A, I> Display for Contents<I>
where
    A: Display + 'a,
    I: Iterator<Item = &'a A> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.write_values(f, <A as Display>::fmt)
    }
}

impl<'a, A, I> Debug for Contents<I>
where
    A: Debug + 'a,
    I: Iterator<Item = &'a A> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.write_values(f, <A as Debug>::fmt)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            Err(StackError::<()>::InvalidCapacity { capacity: 0 }),
            check_capacity::<()>("test", 0)
        );
        for capacity in &[1, 10, 1000] {
            assert_eq!(Ok(*capacity), check_capacity::<()>("test", *capacity));
        }
    }

    #[test]
    fn full_check_hands_value_back() {
        assert_eq!(Ok("value"), check_not_full("test", 2, 3, "value"));
        assert_eq!(
            Err(StackError::Full {
                capacity: 3,
                value: "value"
            }),
            check_not_full("test", 3, 3, "value")
        );
    }

    #[test]
    fn contents_render_bottom_to_top() {
        let values = vec![1, 2, 3];
        assert_eq!(
            "[3/5]: [1, 2, 3]",
            Contents::new(3, 5, values.iter()).to_string()
        );
        let empty: Vec<u8> = Vec::new();
        assert_eq!("[0/1]: []", Contents::new(0, 1, empty.iter()).to_string());
        let words = vec!["a", "b"];
        assert_eq!(
            r#"[2/2]: ["a", "b"]"#,
            format!("{:?}", Contents::new(2, 2, words.iter()))
        );
    }
}
