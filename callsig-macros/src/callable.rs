use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, GenericArgument, Generics, Ident, ImplItem, ImplItemFn, ItemImpl, PathArguments,
    Result, ReturnType, Type, TypePath,
    parse::{Parse, ParseStream},
    parse_quote,
};

use crate::{error::OperatorError, scan::Scan};

/// Represents the parsed `#[callable]` or `#[callable(method)]` attribute.
#[derive(Debug)]
pub(crate) struct ParsedAttr {
    name: Option<Ident>,
}

impl Parse for ParsedAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { name: None });
        }

        Ok(Self {
            name: Some(input.parse()?),
        })
    }
}

/// How the call operator takes its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Receiver {
    Value,
    Shared,
    Mutable,
    Pinned,
}

impl Receiver {
    fn from_syn(receiver: &syn::Receiver) -> Result<Self> {
        if receiver.colon_token.is_some() {
            return if is_pinned_self(&receiver.ty) {
                Ok(Receiver::Pinned)
            } else {
                Err(OperatorError::UnsupportedReceiver.spanned(receiver))
            };
        }

        match &receiver.reference {
            None => Ok(Receiver::Value),
            Some((_, Some(lifetime))) => Err(OperatorError::UnsupportedReceiver.spanned(lifetime)),
            Some((_, None)) if receiver.mutability.is_some() => Ok(Receiver::Mutable),
            Some((_, None)) => Ok(Receiver::Shared),
        }
    }
}

/// Returns `true` for `Pin<&mut Self>` with an elided lifetime.
fn is_pinned_self(ty: &Type) -> bool {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return false;
    };
    let Some(segment) = path.segments.last() else {
        return false;
    };
    if segment.ident != "Pin" {
        return false;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return false;
    };

    match arguments.args.iter().collect::<Vec<_>>().as_slice() {
        [GenericArgument::Type(Type::Reference(reference))] => {
            reference.lifetime.is_none()
                && reference.mutability.is_some()
                && matches!(reference.elem.as_ref(), Type::Path(elem) if elem.path.is_ident("Self"))
        }
        _ => false,
    }
}

/// The method selected as a type's call operator.
#[derive(Debug)]
struct Operator {
    ident: Ident,
    receiver: Receiver,
    inputs: Vec<Type>,
    output: Type,
}

impl Operator {
    /// Validates `method` and extracts its signature.
    fn from_method(method: &ImplItemFn) -> Result<Self> {
        let sig = &method.sig;

        if let Some(token) = &sig.asyncness {
            return Err(OperatorError::Qualifier { qualifier: "async" }.spanned(token));
        }
        if let Some(token) = &sig.unsafety {
            return Err(OperatorError::Qualifier { qualifier: "unsafe" }.spanned(token));
        }
        if let Some(abi) = &sig.abi {
            return Err(OperatorError::Qualifier { qualifier: "extern" }.spanned(abi));
        }
        if !sig.generics.params.is_empty() {
            return Err(OperatorError::Generic.spanned(&sig.generics));
        }

        let receiver = match sig.receiver() {
            Some(receiver) => Receiver::from_syn(receiver)?,
            None => {
                return Err(OperatorError::NoReceiver {
                    name: sig.ident.to_string(),
                }
                .spanned(&sig.ident));
            }
        };

        let inputs: Vec<Type> = sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                FnArg::Typed(arg) => Some(arg.ty.as_ref().clone()),
                FnArg::Receiver(_) => None,
            })
            .collect();

        let output: Type = match &sig.output {
            ReturnType::Default => parse_quote! { () },
            ReturnType::Type(_, ty) => ty.as_ref().clone(),
        };

        for ty in inputs.iter().chain([&output]) {
            let scan = Scan::of(ty);
            if scan.impl_trait {
                return Err(OperatorError::ImplTrait.spanned(ty));
            }
            if scan.elided {
                return Err(OperatorError::ElidedLifetime.spanned(ty));
            }
        }

        Ok(Self {
            ident: sig.ident.clone(),
            receiver,
            inputs,
            output,
        })
    }

    /// Spells the operator as a function pointer taking `Self` first.
    fn spelling(&self) -> TokenStream {
        let receiver = match self.receiver {
            Receiver::Value => quote! { Self },
            Receiver::Shared => quote! { &Self },
            Receiver::Mutable => quote! { &mut Self },
            Receiver::Pinned => quote! { ::core::pin::Pin<&mut Self> },
        };
        let inputs = &self.inputs;
        let output = &self.output;

        quote! { fn(#receiver #(, #inputs)*) -> #output }
    }
}

/// Represents an impl block processed by `#[callable]`.
#[derive(Debug)]
pub(crate) struct Parsed {
    item: ItemImpl,
    generics: Generics,
    operator: Operator,
}

impl Parsed {
    /// Selects and validates the call operator of `item`.
    ///
    /// The generated impls reuse the block's generics, extended with any
    /// `where` predicates of the selected method.
    pub(crate) fn new(attr: ParsedAttr, item: ItemImpl) -> Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(OperatorError::TraitImpl.spanned(path));
        }

        let method = select(&item, attr.name.as_ref())?;
        let operator = Operator::from_method(method)?;

        let mut generics = item.generics.clone();
        if let Some(where_clause) = &method.sig.generics.where_clause {
            generics
                .make_where_clause()
                .predicates
                .extend(where_clause.predicates.iter().cloned());
        }

        Ok(Self {
            item,
            generics,
            operator,
        })
    }

    /// Generates the full token stream for the macro expansion.
    pub(crate) fn expand(self) -> TokenStream {
        let item = &self.item;
        let call_operator_impl = self.generate_call_operator_impl();
        let signature_impl = self.generate_signature_impl();
        let invoke_impl = self.generate_invoke_impl();

        quote! {
            #item
            #call_operator_impl
            #signature_impl
            #invoke_impl
        }
    }

    /// Generates the `CallOperator` implementation.
    fn generate_call_operator_impl(&self) -> TokenStream {
        let self_ty = &self.item.self_ty;
        let (impl_generics, _ty_generics, where_clause) = self.generics.split_for_impl();
        let operator = self.operator.spelling();

        quote! {
            impl #impl_generics ::callsig_core::CallOperator for #self_ty #where_clause {
                type Operator = #operator;
            }
        }
    }

    /// Generates the `Signature` implementation, which resolves through the operator.
    fn generate_signature_impl(&self) -> TokenStream {
        let self_ty = &self.item.self_ty;
        let (impl_generics, _ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics ::callsig_core::Signature for #self_ty #where_clause {
                type Output = <<Self as ::callsig_core::CallOperator>::Operator as ::callsig_core::Signature>::Output;
                const KIND: ::callsig_core::Spelling = ::callsig_core::Spelling::GenericCallable;
            }
        }
    }

    /// Generates the `Invoke` implementation for the operator's argument tuple.
    fn generate_invoke_impl(&self) -> TokenStream {
        let self_ty = &self.item.self_ty;
        let (impl_generics, _ty_generics, where_clause) = self.generics.split_for_impl();
        let Operator {
            ident,
            receiver,
            inputs,
            output,
        } = &self.operator;

        let args: Vec<Ident> = (0..inputs.len())
            .map(|index| format_ident!("arg{}", index))
            .collect();

        let (binding, receiver) = match receiver {
            Receiver::Value => (quote! { self }, quote! { self }),
            Receiver::Shared => (quote! { self }, quote! { &self }),
            Receiver::Mutable => (quote! { mut self }, quote! { &mut self }),
            Receiver::Pinned => (quote! { self }, quote! { ::core::pin::pin!(self) }),
        };

        quote! {
            impl #impl_generics ::callsig_core::Invoke<(#(#inputs,)*)> for #self_ty #where_clause {
                type Output = #output;

                fn invoke(#binding, (#(#args,)*): (#(#inputs,)*)) -> Self::Output {
                    Self::#ident(#receiver #(, #args)*)
                }
            }
        }
    }
}

/// Picks the method acting as the call operator.
fn select<'a>(item: &'a ItemImpl, name: Option<&Ident>) -> Result<&'a ImplItemFn> {
    let methods: Vec<&ImplItemFn> = item
        .items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) => Some(method),
            _ => None,
        })
        .collect();

    if let Some(name) = name {
        return methods
            .into_iter()
            .find(|method| method.sig.ident == *name)
            .ok_or_else(|| {
                OperatorError::Missing {
                    name: name.to_string(),
                }
                .spanned(name)
            });
    }

    if let Some(call) = methods.iter().copied().find(|method| method.sig.ident == "call") {
        return Ok(call);
    }

    let candidates: Vec<&ImplItemFn> = methods
        .into_iter()
        .filter(|method| method.sig.receiver().is_some())
        .collect();

    match candidates.as_slice() {
        [] => Err(OperatorError::NoOperator.spanned(&item.self_ty)),
        [method] => Ok(*method),
        _ => {
            let candidates = candidates
                .iter()
                .map(|method| format!("`{}`", method.sig.ident))
                .collect::<Vec<_>>()
                .join(", ");
            Err(OperatorError::Ambiguous { candidates }.spanned(&item.self_ty))
        }
    }
}
