//! Type-equality assertions for checking resolution results.
//!
//! The `assert_*` functions have empty bodies: a call compiles only when the
//! types involved are equal, so each call is a compile-time assertion.

use std::any::TypeId;

use crate::{Invoke, ResultOf, Signature};

/// Implemented for a type and only that type: `A: TypeEq<B>` holds exactly
/// when `A` and `B` are the same type.
pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compiles only when `A` and `B` are the same type.
pub const fn assert_type_eq<A, B>()
where
    A: ?Sized + TypeEq<B>,
    B: ?Sized,
{
}

/// Compiles only when the spelling `S` resolves to exactly `R`.
pub const fn assert_result<S, R>()
where
    S: Signature + ?Sized,
    ResultOf<S>: TypeEq<R>,
    R: ?Sized,
{
}

/// Compiles only when invoking `F` with `Args` resolves to exactly `R`.
///
/// Takes the callable by reference so closure types can be inferred.
pub fn assert_invoke_result<F, Args, R>(_callable: &F)
where
    F: Invoke<Args>,
    F::Output: TypeEq<R>,
    R: ?Sized,
{
}

/// Compiles only when `value` has type `U`.
pub fn assert_type_of<T, U>(_value: &T)
where
    T: ?Sized + TypeEq<U>,
    U: ?Sized,
{
}

/// Returns `true` when `A` and `B` are the same type.
///
/// A runtime counterpart to [`assert_type_eq`] for checks that must be able to
/// fail, such as asserting that two closures have distinct types.
#[must_use]
pub fn same_type<A, B>() -> bool
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Returns `true` when `a` and `b` have the same type.
#[must_use]
pub fn same_type_of<A, B>(_a: &A, _b: &B) -> bool
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    same_type::<A, B>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_types() {
        assert_type_eq::<i32, i32>();
        assert_type_eq::<&'static str, &'static str>();
        assert_type_eq::<str, str>();
        assert_type_eq::<dyn Fn(), dyn Fn()>();
        assert_type_of::<_, u8>(&7_u8);
    }

    #[test]
    fn runtime_type_comparison() {
        assert!(same_type::<i32, i32>());
        assert!(!same_type::<i32, i64>());
        assert!(!same_type::<&'static i32, i32>());
        assert!(same_type_of(&1_u8, &2_u8));
    }

    #[test]
    fn distinct_closures_are_distinct_types() {
        let f1 = |a: i32, b: i32| -> i32 { a + b };
        let f2 = |a: i32, b: i32| -> i32 { a + b };
        let f3 = f1;

        assert!(!same_type_of(&f1, &f2));
        assert!(same_type_of(&f1, &f3));
        assert_eq!(f1(1, 2), f3(1, 2));
    }
}
