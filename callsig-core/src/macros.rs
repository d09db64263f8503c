/// Invokes `$callback!` once per supported arity, from zero to twelve
/// parameters, passing the parameter type names for that arity.
macro_rules! for_each_arity {
    ($callback:ident) => {
        for_each_arity!(@step $callback; A11, A10, A9, A8, A7, A6, A5, A4, A3, A2, A1, A0);
    };
    (@step $callback:ident;) => {
        $callback!();
    };
    (@step $callback:ident; $head:ident $(, $tail:ident)*) => {
        for_each_arity!(@step $callback; $($tail),*);
        $callback!($head $(, $tail)*);
    };
}

/// Asserts at compile time that a spelling resolves to the given type.
///
/// Expands to a `const` item, so a mismatch is a compile error rather than a
/// test failure.
///
/// ```
/// use callsig_core::assert_resolves;
///
/// assert_resolves!(fn() -> *const i32 => *const i32);
/// assert_resolves!(Box<dyn FnOnce(String) -> usize> => usize);
/// ```
///
/// ```compile_fail
/// use callsig_core::assert_resolves;
///
/// assert_resolves!(fn() -> &'static i32 => i32);
/// ```
#[macro_export]
macro_rules! assert_resolves {
    ($spelling:ty => $result:ty) => {
        const _: () = $crate::assert_result::<$spelling, $result>();
    };
}
