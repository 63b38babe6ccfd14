// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bounded stacks: last in, first out containers with a capacity fixed at
//! construction time.
//!
//! Two interchangeable implementations are provided:
//!
//!   * [`LinkedStack`][LinkedStack] keeps every value in its own heap node,
//!     with each node linked to its neighbours in both directions.
//!   * [`BufferStack`][BufferStack] keeps its values in a single contiguous
//!     buffer.
//!
//! Both implement the [`Stack`][Stack] trait, which is where all of their
//! operations live, so you'll want to `use bounded_stack::Stack` wherever you
//! work with them. Code written against the trait can switch between them by
//! changing a type parameter.
//!
//! # Capacity
//!
//! A stack is constructed with [`Stack::new(capacity)`][Stack::new], which
//! fails with [`StackError::InvalidCapacity`][InvalidCapacity] if the capacity
//! is zero. The capacity never changes afterwards. Pushing onto a stack which
//! already holds `capacity` values fails with [`StackError::Full`][Full],
//! which hands the rejected value back to you, and popping an empty stack
//! fails with [`StackError::Empty`][Empty]. A failed push or pop leaves the
//! stack exactly as it was.
//!
//! If you run out of room, make a bigger stack and move the values across.
//!
//! # Copying and Transferring
//!
//! There are two distinct ways to make a stack from another one:
//!
//!   * [`Stack::copy_of()`][Stack::copy_of] (and [`Clone`][Clone]) makes a
//!     deep copy. The two stacks share nothing, and changing one never
//!     affects the other.
//!   * [`Stack::take()`][Stack::take] takes over the source's storage without
//!     copying or allocating, and leaves the source empty.
//!
//! # Logging
//!
//! Rejected operations are reported as `debug` level [`tracing`][tracing]
//! events, and copies and transfers as `trace` level events. Nothing is
//! printed unless you install a subscriber.
//!
//! # Example
//!
//! ```rust
//! # use bounded_stack::{LinkedStack, Stack, StackError};
//! let mut stack: LinkedStack<i32> = LinkedStack::new(3)?;
//! stack.push(1)?;
//! stack.push(2)?;
//! stack.push(3)?;
//! assert!(stack.is_full());
//!
//! // Grow into a larger stack, keeping the order of the values.
//! let mut larger: LinkedStack<i32> = LinkedStack::new(6)?;
//! for value in stack.iter() {
//!     larger.push(*value)?;
//! }
//! larger.push(4)?;
//!
//! // Hand the values over to a new owner.
//! let owner = LinkedStack::take(&mut larger);
//! assert!(larger.is_empty());
//! assert_eq!(vec![1, 2, 3, 4], owner.as_sequence());
//! # Ok::<(), StackError<i32>>(())
//! ```
//!
//! [Stack]: trait.Stack.html
//! [Stack::new]: trait.Stack.html#tymethod.new
//! [Stack::copy_of]: trait.Stack.html#tymethod.copy_of
//! [Stack::take]: trait.Stack.html#tymethod.take
//! [LinkedStack]: struct.LinkedStack.html
//! [BufferStack]: struct.BufferStack.html
//! [InvalidCapacity]: enum.StackError.html#variant.InvalidCapacity
//! [Full]: enum.StackError.html#variant.Full
//! [Empty]: enum.StackError.html#variant.Empty
//! [Clone]: https://doc.rust-lang.org/std/clone/trait.Clone.html
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod buffer_stack;
mod counter;
mod error;
mod linked_stack;
mod node;
mod stack;
mod types;

pub use self::buffer_stack::BufferStack;
pub use self::error::StackError;
pub use self::linked_stack::{IntoIter, Iter, LinkedStack};
pub use self::stack::Stack;
