use crate::Spelling;

/// Resolves the type produced by invoking a callable, given only how that
/// callable is spelled.
///
/// Each implementation is one row of the resolution table:
///
/// | Spelling | Example | [`Spelling`] |
/// |---|---|---|
/// | unsized function type | `dyn Fn(i32) -> bool` | [`FreeFunction`] |
/// | function pointer | `fn(i32) -> bool` | [`FunctionPointer`] |
/// | shared handle | `&S`, `&mut S`, `Rc<S>`, `Arc<S>` | [`LvalueFunctionRef`] |
/// | owning handle | `Box<S>` | [`RvalueFunctionRef`] |
/// | method, mutable receiver | `fn(&mut Owner, i32) -> bool` | [`MemberFnPtr`] |
/// | method, pinned receiver | `fn(Pin<&mut Owner>, i32) -> bool` | [`ConstMemberFnPtr`] |
/// | method, shared receiver | `fn(&Owner, i32) -> bool` | [`ConstMemberFn`] |
/// | type with a call operator | `#[callable]` types | [`GenericCallable`] |
///
/// The result type is carried over verbatim: `fn() -> &'static i32` resolves
/// to `&'static i32`, never to `i32`. Parameter types take part in matching
/// but are not exposed.
///
/// Up to twelve parameters are supported, not counting a method's receiver.
///
/// A function whose first parameter is a reference has the same type as a
/// method on the referent, so it resolves through the method rows.
///
/// Each borrowed parameter with an elided lifetime, as in `dyn Fn(&str)`,
/// makes the spelling higher-ranked and needs an impl of its own. Borrowed
/// parameters are matched for spellings of up to three parameters, counting a
/// method's receiver:
///
/// ```
/// use callsig_core::assert_resolves;
///
/// assert_resolves!(dyn Fn(&str) -> bool => bool);
/// assert_resolves!(Box<dyn Fn(&str, usize) -> char> => char);
/// assert_resolves!(fn(i32, &str) -> bool => bool);
/// assert_resolves!(fn(&String, &str) -> usize => usize);
/// ```
///
/// Unique borrows (`&mut T`) are matched only as the sole parameter after any
/// receiver. Longer borrowed spellings fail to compile with an "implementation
/// is not general enough" error. Name their lifetimes or resolve them through
/// [`Invoke`](crate::Invoke), as closures do:
///
/// ```compile_fail
/// use callsig_core::assert_resolves;
///
/// assert_resolves!(dyn Fn(&str, &str, &str, &str) -> bool => bool);
/// ```
///
/// Types that match no row fail to compile:
///
/// ```compile_fail
/// use callsig_core::ResultOf;
///
/// let _: ResultOf<i32> = 0;
/// ```
///
/// [`FreeFunction`]: Spelling::FreeFunction
/// [`FunctionPointer`]: Spelling::FunctionPointer
/// [`LvalueFunctionRef`]: Spelling::LvalueFunctionRef
/// [`RvalueFunctionRef`]: Spelling::RvalueFunctionRef
/// [`MemberFnPtr`]: Spelling::MemberFnPtr
/// [`ConstMemberFnPtr`]: Spelling::ConstMemberFnPtr
/// [`ConstMemberFn`]: Spelling::ConstMemberFn
/// [`GenericCallable`]: Spelling::GenericCallable
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no single resolvable call signature",
    label = "no result type can be resolved for this type",
    note = "function pointers, `dyn Fn*` types, handles to them and `#[callable]` types resolve; closures resolve through `Invoke`"
)]
pub trait Signature {
    /// The type produced by invoking a callable of this spelling.
    type Output;

    /// The row of the resolution table this spelling matched.
    const KIND: Spelling;
}

/// The result type of invoking a callable spelled as `S`.
pub type ResultOf<S> = <S as Signature>::Output;
