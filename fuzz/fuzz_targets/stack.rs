#![no_main]
use arbitrary::Arbitrary;
use bounded_stack::{BufferStack, LinkedStack, Stack, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    PeekMut(String),
    Clear,
    Copy,
    Take,
    CloneFrom(u8),
}

use self::Action::*;

/// Check both stacks against the model.
fn check(
    model: &[String],
    capacity: usize,
    linked: &LinkedStack<String>,
    buffer: &BufferStack<String>,
) {
    assert_eq!(model.len(), linked.len());
    assert_eq!(model.len(), buffer.len());
    assert_eq!(capacity, linked.capacity());
    assert_eq!(capacity, buffer.capacity());
    assert_eq!(model.len() == capacity, linked.is_full());
    assert_eq!(model.is_empty(), linked.is_empty());
    assert!(linked.iter().eq(model.iter()));
    assert!(linked.iter().rev().eq(model.iter().rev()));
    assert!(buffer.iter().eq(model.iter()));
    assert_eq!(model.last(), linked.peek());
    assert!(linked.equals(buffer));
}

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let (mut linked, mut buffer) = match (
        LinkedStack::<String>::new(capacity),
        BufferStack::<String>::new(capacity),
    ) {
        (Ok(linked), Ok(buffer)) => (linked, buffer),
        (Err(left), Err(right)) => {
            assert_eq!(0, capacity);
            assert_eq!(StackError::InvalidCapacity { capacity: 0 }, left);
            assert_eq!(left, right);
            return;
        }
        _ => panic!("stacks disagree on capacity {}", capacity),
    };
    let mut model: Vec<String> = Vec::new();
    for action in input.1 {
        match action {
            Push(value) => {
                let left = linked.push(value.clone());
                let right = buffer.push(value.clone());
                if model.len() < capacity {
                    assert_eq!(Ok(()), left);
                    assert_eq!(Ok(()), right);
                    model.push(value);
                } else {
                    assert_eq!(Some(&value), left.unwrap_err().into_value().as_ref());
                    assert!(right.unwrap_err().is_full());
                }
            }
            Pop => {
                let expected = model.pop();
                assert_eq!(expected, linked.pop().ok());
                assert_eq!(expected, buffer.pop().ok());
            }
            PeekMut(value) => {
                if let Some(top) = model.last_mut() {
                    *top = value.clone();
                    *linked.peek_mut().unwrap() = value.clone();
                    *buffer.peek_mut().unwrap() = value;
                } else {
                    assert!(linked.peek_mut().is_none());
                    assert!(buffer.peek_mut().is_none());
                }
            }
            Clear => {
                model.clear();
                linked.clear();
                buffer.clear();
            }
            Copy => {
                let copy = LinkedStack::copy_of(&linked);
                linked.clear();
                assert!(copy.iter().eq(model.iter()));
                linked = copy;
                let copy = BufferStack::copy_of(&buffer);
                buffer.clear();
                assert!(copy.iter().eq(model.iter()));
                buffer = copy;
            }
            Take => {
                let mut source = linked;
                linked = LinkedStack::take(&mut source);
                assert!(source.is_empty());
                assert_eq!(None, source.peek());
                let mut source = buffer;
                buffer = BufferStack::take(&mut source);
                assert!(source.is_empty());
            }
            CloneFrom(size) => {
                let size = (size as usize).max(1);
                let mut other = LinkedStack::new(size).unwrap();
                while !other.is_full() {
                    other.push(String::from("filler")).unwrap();
                }
                other.clone_from(&linked);
                linked = other;
                let mut other = BufferStack::new(size).unwrap();
                other.clone_from(&buffer);
                buffer = other;
            }
        }
        check(&model, capacity, &linked, &buffer);
    }
});
