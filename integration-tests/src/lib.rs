//! Consumer-side helpers for the integration tests.
//!
//! The resolver never calls anything itself. These helpers play the part of
//! generic calling code: they take a callable and its arguments, declare their
//! return type through the resolver, and perform the call.

use std::any::TypeId;

use callsig_core::{Invoke, InvokeResult, ResultOf, Signature};

pub mod fixtures;

/// Invokes `callable` with `args`.
///
/// Works for anything callable: function items, closures, function pointers,
/// handles to them, and `#[callable]` types.
pub fn call<F, Args>(callable: F, args: Args) -> InvokeResult<F, Args>
where
    F: Invoke<Args>,
{
    callable.invoke(args)
}

/// Invokes a callable whose spelling can be named, declaring the return type
/// as the spelling's resolved result.
pub fn call_spelled<S, Args>(callable: S, args: Args) -> ResultOf<S>
where
    S: Signature + Invoke<Args, Output = ResultOf<S>>,
{
    callable.invoke(args)
}

/// Returns the `TypeId` of the type `callable` resolves to for `Args`.
pub fn result_type_id<F, Args>(_callable: &F) -> TypeId
where
    F: Invoke<Args>,
    F::Output: 'static,
{
    TypeId::of::<F::Output>()
}
