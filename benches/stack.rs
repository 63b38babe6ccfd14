// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use bounded_stack::{BufferStack, LinkedStack, Stack};

const SIZES: &[usize] = &[1024, 4096, 16384, 65536];

fn filled<S: Stack<usize>>(size: usize) -> S {
    let mut stack = S::new(size).unwrap();
    for value in 0..size {
        stack.push(value).unwrap();
    }
    stack
}

pub fn push_pop<S: Stack<usize>>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || Vec::with_capacity(size),
                |vec| {
                    for value in 0..size {
                        vec.push(value);
                    }
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("stack", size), size, |b, &size| {
            b.iter_batched_ref(
                || S::new(size).unwrap(),
                |stack| {
                    for value in 0..size {
                        stack.push(value).unwrap();
                    }
                    while let Ok(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn copy_and_take<S: Stack<usize>>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("copy_of", size), size, |b, &size| {
            let source: S = filled(size);
            b.iter(|| black_box(S::copy_of(&source)))
        });
        group.bench_with_input(BenchmarkId::new("take", size), size, |b, &size| {
            b.iter_batched_ref(
                || filled::<S>(size),
                |source| black_box(S::take(source)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn push_pop_linked(c: &mut Criterion) {
    push_pop::<LinkedStack<usize>>("push_pop/linked", c)
}

fn push_pop_buffer(c: &mut Criterion) {
    push_pop::<BufferStack<usize>>("push_pop/buffer", c)
}

fn copy_and_take_linked(c: &mut Criterion) {
    copy_and_take::<LinkedStack<usize>>("copy_and_take/linked", c)
}

fn copy_and_take_buffer(c: &mut Criterion) {
    copy_and_take::<BufferStack<usize>>("copy_and_take/buffer", c)
}

criterion_group!(
    stack,
    push_pop_linked,
    push_pop_buffer,
    copy_and_take_linked,
    copy_and_take_buffer
);
criterion_main!(stack);
