use syn::{
    Lifetime, ParenthesizedGenericArguments, Type, TypeBareFn, TypeImplTrait, TypeReference,
    visit::{self, Visit},
};

/// Findings from scanning one type in a call operator's signature.
///
/// Nested function pointer types and `Fn(..)` bounds bind their own
/// lifetimes, so their contents are not scanned. A lifetime parameter left out
/// of a path entirely, as in `Cow<str>`, is not visible in the syntax and is
/// not reported.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Scan {
    /// A reference without a lifetime, or a `'_` lifetime, was found.
    pub(crate) elided: bool,

    /// An `impl Trait` type was found.
    pub(crate) impl_trait: bool,
}

impl Scan {
    /// Scans `ty` and everything nested in it.
    pub(crate) fn of(ty: &Type) -> Self {
        let mut scan = Self::default();
        scan.visit_type(ty);
        scan
    }
}

impl<'ast> Visit<'ast> for Scan {
    fn visit_type_reference(&mut self, node: &'ast TypeReference) {
        if node.lifetime.is_none() {
            self.elided = true;
        }
        visit::visit_type_reference(self, node);
    }

    fn visit_lifetime(&mut self, node: &'ast Lifetime) {
        if node.ident == "_" {
            self.elided = true;
        }
    }

    fn visit_type_impl_trait(&mut self, _node: &'ast TypeImplTrait) {
        self.impl_trait = true;
    }

    fn visit_type_bare_fn(&mut self, _node: &'ast TypeBareFn) {}

    fn visit_parenthesized_generic_arguments(
        &mut self,
        _node: &'ast ParenthesizedGenericArguments,
    ) {
    }
}
