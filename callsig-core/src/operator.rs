use crate::Signature;

/// Names the call operator of a user-defined callable type.
///
/// A type implementing `CallOperator` resolves by treating its operator as a
/// new spelling, so `ResultOf<T>` is `ResultOf<T::Operator>`. The operator is
/// usually one of the method spellings, such as `fn(&Self, i32) -> i32`.
///
/// Implementations are normally generated by [`#[callable]`](crate::callable),
/// which also implements [`Signature`] and [`Invoke`](crate::Invoke) for the
/// type. The attribute only accepts impl blocks with a single, unambiguous
/// operator:
///
/// ```
/// use callsig_core::{ResultOf, Signature, Spelling, assert_resolves, callable};
///
/// struct Scale(f64);
///
/// #[callable]
/// impl Scale {
///     fn call(&self, value: f64) -> f64 {
///         value * self.0
///     }
/// }
///
/// assert_resolves!(Scale => f64);
/// assert_eq!(<Scale as Signature>::KIND, Spelling::GenericCallable);
/// ```
///
/// Two candidate operators with no selection fail to compile:
///
/// ```compile_fail
/// use callsig_core::callable;
///
/// struct Overloaded;
///
/// #[callable]
/// impl Overloaded {
///     fn add(&self, a: i32, b: i32) -> i32 {
///         a + b
///     }
///
///     fn concat(&self, a: String, b: String) -> String {
///         a + &b
///     }
/// }
/// ```
///
/// A lifetime hidden in a path of the operator's signature has nothing to
/// bind to in the generated impls, and the compiler reports it as a missing
/// lifetime specifier. Name it on the impl block instead (`Cow<'a, str>`):
///
/// ```compile_fail
/// use std::borrow::Cow;
///
/// use callsig_core::callable;
///
/// struct Greeting(String);
///
/// #[callable]
/// impl Greeting {
///     fn call(&self) -> Cow<str> {
///         Cow::Borrowed(&self.0)
///     }
/// }
/// ```
pub trait CallOperator {
    /// The call operator, spelled as a function pointer.
    type Operator: Signature;
}
