//! Callables of every spelling, shared by the integration tests.

use std::{ops::Mul, pin::Pin, ptr};

use callsig_core::callable;

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Stores `a + b` in `c` and returns a borrow of it.
pub fn store_sum(a: i32, b: i32, c: &mut i32) -> &i32 {
    *c = a + b;
    c
}

pub fn null_const() -> *const i32 {
    ptr::null()
}

pub fn null_mut() -> *mut () {
    ptr::null_mut()
}

pub fn one() -> i32 {
    1
}

pub fn nothing() {}

pub fn count_char(count: usize, text: &str, needle: char) -> usize {
    count + text.chars().filter(|c| *c == needle).count()
}

/// A plain type with an associated function and a method.
#[derive(Debug, Default)]
pub struct Clz;

impl Clz {
    pub fn static_method(a: i32, b: i32) -> i32 {
        a + b
    }

    pub fn method(&mut self, a: i32, b: i32) -> i32 {
        a + b
    }
}

/// Counts ticks; its operator takes a pinned receiver.
#[derive(Debug, Default)]
pub struct Ticker {
    pub ticks: u32,
}

#[callable]
impl Ticker {
    pub fn tick(self: Pin<&mut Self>, by: u32) -> u32 {
        let this = self.get_mut();
        this.ticks += by;
        this.ticks
    }
}

/// A hand-written callable whose operator sums two integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyFunctor;

#[callable]
impl AnyFunctor {
    pub fn call(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

/// Keeps a running total; its operator takes `&mut self`.
#[derive(Debug, Default)]
pub struct Accumulator {
    pub total: i64,
}

#[callable(push)]
impl Accumulator {
    pub fn new(total: i64) -> Self {
        Self { total }
    }

    pub fn push(&mut self, value: i64) -> i64 {
        self.total += value;
        self.total
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// Multiplies by a fixed factor of any copyable numeric type.
#[derive(Debug, Clone, Copy)]
pub struct Scale<T> {
    pub factor: T,
}

#[callable]
impl<T> Scale<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn call(&self, value: T) -> T {
        value * self.factor
    }
}

/// Looks up names it borrows for `'a`.
#[derive(Debug, Clone, Copy)]
pub struct Directory<'a> {
    names: &'a [&'a str],
}

#[callable]
impl<'a> Directory<'a> {
    pub fn new(names: &'a [&'a str]) -> Self {
        Self { names }
    }

    pub fn lookup(&self, index: usize) -> Option<&'a str> {
        self.names.get(index).copied()
    }
}

/// Consumes itself to render its lines; its operator takes `self`.
#[derive(Debug, Default)]
pub struct Report {
    pub lines: Vec<String>,
}

#[callable(finish)]
impl Report {
    pub fn line(&mut self, line: &str) -> &mut Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn finish(self, separator: &'static str) -> String {
        self.lines.join(separator)
    }
}
