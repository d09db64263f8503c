use quote::ToTokens;
use thiserror::Error;

/// Reasons an impl block cannot provide a single call operator.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum OperatorError {
    #[error("`#[callable]` must be applied to an inherent impl block, not a trait impl.")]
    TraitImpl,

    #[error("No method named `{name}` in this impl block.")]
    Missing { name: String },

    #[error("No call operator found. Add a method that takes a receiver.")]
    NoOperator,

    #[error(
        "Ambiguous call operator: {candidates} all qualify. Select one with `#[callable(name)]`."
    )]
    Ambiguous { candidates: String },

    #[error(
        "`{name}` has no receiver. A call operator must take `self`, `&self`, `&mut self` or `self: Pin<&mut Self>`."
    )]
    NoReceiver { name: String },

    #[error(
        "Unsupported receiver. A call operator must take `self`, `&self`, `&mut self` or `self: Pin<&mut Self>`."
    )]
    UnsupportedReceiver,

    #[error("Generic call operators have no single signature.")]
    Generic,

    #[error("`impl Trait` gives the call operator no single signature.")]
    ImplTrait,

    #[error("`{qualifier}` call operators are not supported.")]
    Qualifier { qualifier: &'static str },

    #[error(
        "Elided lifetimes are not supported in a call operator's signature. Name the lifetime on the impl block."
    )]
    ElidedLifetime,
}

impl OperatorError {
    /// Converts into a `syn::Error` pointing at `tokens`.
    pub(crate) fn spanned<T: ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quote::quote;

    #[test]
    fn messages_name_the_offending_method() {
        let error = OperatorError::NoReceiver {
            name: "new".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "`new` has no receiver. A call operator must take `self`, `&self`, `&mut self` or `self: Pin<&mut Self>`."
        );

        let error = OperatorError::Qualifier { qualifier: "async" };
        assert_eq!(error.to_string(), "`async` call operators are not supported.");
    }

    #[test]
    fn spanned_keeps_the_message() {
        let error = OperatorError::Generic.spanned(quote! { <T> });
        assert_eq!(
            error.to_string(),
            "Generic call operators have no single signature."
        );
    }
}
