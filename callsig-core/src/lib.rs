//! Compile-time resolution of a callable's result type.
//!
//! Generic calling code often needs to name the type a callable returns
//! without asking its caller to spell it out. This crate answers that question
//! entirely in the type system:
//!
//! - [`Signature`]: the resolution table, keyed by how a callable is spelled
//! - [`ResultOf`]: the resolved result type of a spelling
//! - [`Spelling`]: which row of the table a type matched
//! - [`CallOperator`] and [`callable`]: user types that name a call operator
//! - [`Invoke`]: resolution for closures and function items, keyed by the
//!   argument tuple the caller is about to pass
//!
//! Nothing here ever calls anything on its own; [`Invoke::invoke`] exists so
//! consumers can forward arguments through the same trait they resolved with.
//!
//! # Example
//!
//! ```
//! use callsig_core::{ResultOf, Spelling, Signature, assert_resolves};
//!
//! struct Counter(i32);
//!
//! impl Counter {
//!     fn bump(&mut self, by: i32) -> i32 {
//!         self.0 += by;
//!         self.0
//!     }
//! }
//!
//! assert_resolves!(fn(i32, i32) -> i32 => i32);
//! assert_resolves!(fn(&mut Counter, i32) -> i32 => i32);
//! assert_resolves!(&dyn Fn() -> &'static str => &'static str);
//!
//! let bump: fn(&mut Counter, i32) -> i32 = Counter::bump;
//! let mut counter = Counter(1);
//! let total: ResultOf<fn(&mut Counter, i32) -> i32> = bump(&mut counter, 2);
//! assert_eq!(total, 3);
//! assert_eq!(<fn(&mut Counter, i32) -> i32 as Signature>::KIND, Spelling::MemberFnPtr);
//! ```

#[macro_use]
mod macros;

mod assert;
mod descriptor;
mod function;
mod handle;
mod invoke;
mod member;
mod operator;
mod signature;
mod spelling;

pub use assert::{
    TypeEq, assert_invoke_result, assert_result, assert_type_eq, assert_type_of, same_type,
    same_type_of,
};
pub use descriptor::{Descriptor, describe};
pub use invoke::{Invoke, InvokeResult};
pub use operator::CallOperator;
pub use signature::{ResultOf, Signature};
pub use spelling::Spelling;

#[cfg(feature = "macros")]
pub use callsig_macros::callable;
