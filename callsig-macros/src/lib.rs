mod callable;
mod error;
mod scan;

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{ItemImpl, parse_macro_input};

/// Designates a method of an inherent impl block as the type's call operator.
///
/// The impl block is emitted unchanged, followed by implementations of
/// [`CallOperator`], [`Signature`] and [`Invoke`] for the block's self type.
///
/// ## Selecting the operator
///
/// - `#[callable(name)]` selects the method called `name`.
/// - `#[callable]` selects the method called `call` if there is one, or else
///   the only method in the block that takes a receiver.
///
/// ## Restrictions
///
/// The selected method must:
///
/// - take `self`, `&self`, `&mut self` or `self: Pin<&mut Self>`,
/// - have no generic parameters and no `impl Trait` in its signature,
/// - not be `async`, `unsafe` or `extern`,
/// - not borrow through an elided lifetime outside its receiver.
///
/// Anything else has no single nameable signature and is rejected at compile
/// time, as is an impl block with several candidate methods and no selection.
///
/// Elided lifetimes are only recognised where they are written: `&T` and
/// `'_`. A lifetime hidden in a path, such as `Cow<str>` or a `Names` type
/// declared as `Names<'a>`, cannot be seen from the syntax alone. It is left to
/// the compiler, which reports a missing lifetime specifier at that type. Write
/// such types as `Cow<'a, str>` with `'a` declared on the impl block.
///
/// ## Example
///
/// ### Input
///
/// ```ignore
/// #[callable]
/// impl Adder {
///     fn call(&self, a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
/// ```
///
/// ### Expanded
///
/// ```ignore
/// impl Adder {
///     fn call(&self, a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
///
/// impl ::callsig_core::CallOperator for Adder {
///     type Operator = fn(&Self, i32, i32) -> i32;
/// }
///
/// impl ::callsig_core::Signature for Adder {
///     type Output = <<Self as ::callsig_core::CallOperator>::Operator as ::callsig_core::Signature>::Output;
///     const KIND: ::callsig_core::Spelling = ::callsig_core::Spelling::GenericCallable;
/// }
///
/// impl ::callsig_core::Invoke<(i32, i32,)> for Adder {
///     type Output = i32;
///
///     fn invoke(self, (arg0, arg1,): (i32, i32,)) -> Self::Output {
///         Self::call(&self, arg0, arg1)
///     }
/// }
/// ```
///
/// [`CallOperator`]: https://docs.rs/callsig-core/latest/callsig_core/trait.CallOperator.html
/// [`Signature`]: https://docs.rs/callsig-core/latest/callsig_core/trait.Signature.html
/// [`Invoke`]: https://docs.rs/callsig-core/latest/callsig_core/trait.Invoke.html
#[proc_macro_attribute]
pub fn callable(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as callable::ParsedAttr);
    let item = parse_macro_input!(item as ItemImpl);

    match callable::Parsed::new(attr, item.clone()) {
        Ok(parsed) => parsed.expand().into(),
        Err(error) => {
            let mut tokens = item.into_token_stream();
            tokens.extend(error.to_compile_error());
            tokens.into()
        }
    }
}
