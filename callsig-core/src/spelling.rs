use std::fmt;

/// The surface forms a callable can be spelled in.
///
/// Variants are declared in resolution priority order, most specific first.
/// Every [`Signature`](crate::Signature) implementation reports exactly one of
/// them through its `KIND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spelling {
    /// An unsized function type, such as `dyn Fn(i32) -> i32`.
    FreeFunction,

    /// A function pointer, such as `fn(i32) -> i32`.
    FunctionPointer,

    /// A shared handle to another spelling: `&S`, `&mut S`, `Rc<S>` or `Arc<S>`.
    LvalueFunctionRef,

    /// An owning handle to another spelling: `Box<S>`.
    RvalueFunctionRef,

    /// A method taking its receiver by unique borrow: `fn(&mut Owner, ..) -> R`.
    MemberFnPtr,

    /// A method taking a pinned receiver: `fn(Pin<&mut Owner>, ..) -> R`.
    ///
    /// The receiver pointer stays fixed while the method may mutate through it.
    ConstMemberFnPtr,

    /// A method taking its receiver by shared borrow: `fn(&Owner, ..) -> R`.
    ///
    /// This is the shape of an `Fn` closure's call operator.
    ConstMemberFn,

    /// A type that names its own call operator, see [`CallOperator`](crate::CallOperator).
    GenericCallable,
}

impl Spelling {
    /// All spellings in resolution priority order.
    pub const ALL: [Spelling; 8] = [
        Spelling::FreeFunction,
        Spelling::FunctionPointer,
        Spelling::LvalueFunctionRef,
        Spelling::RvalueFunctionRef,
        Spelling::MemberFnPtr,
        Spelling::ConstMemberFnPtr,
        Spelling::ConstMemberFn,
        Spelling::GenericCallable,
    ];

    /// Returns the one-based priority of this spelling; lower is more specific.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Spelling::FreeFunction => 1,
            Spelling::FunctionPointer => 2,
            Spelling::LvalueFunctionRef => 3,
            Spelling::RvalueFunctionRef => 4,
            Spelling::MemberFnPtr => 5,
            Spelling::ConstMemberFnPtr => 6,
            Spelling::ConstMemberFn => 7,
            Spelling::GenericCallable => 8,
        }
    }

    /// Returns `true` for spellings whose first parameter is a receiver.
    #[must_use]
    pub const fn is_member(self) -> bool {
        matches!(
            self,
            Spelling::MemberFnPtr | Spelling::ConstMemberFnPtr | Spelling::ConstMemberFn
        )
    }

    /// Returns `true` for spellings that wrap another spelling.
    #[must_use]
    pub const fn is_handle(self) -> bool {
        matches!(
            self,
            Spelling::LvalueFunctionRef | Spelling::RvalueFunctionRef
        )
    }

    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Spelling::FreeFunction => "function",
            Spelling::FunctionPointer => "function pointer",
            Spelling::LvalueFunctionRef => "function reference",
            Spelling::RvalueFunctionRef => "owned function",
            Spelling::MemberFnPtr => "method",
            Spelling::ConstMemberFnPtr => "pinned method",
            Spelling::ConstMemberFn => "shared method",
            Spelling::GenericCallable => "callable",
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_by_priority() {
        let priorities: Vec<u8> = Spelling::ALL.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let mut sorted = Spelling::ALL;
        sorted.sort();
        assert_eq!(sorted, Spelling::ALL);
    }

    #[test]
    fn member_and_handle_groups() {
        let members: Vec<_> = Spelling::ALL.into_iter().filter(|s| s.is_member()).collect();
        assert_eq!(
            members,
            vec![
                Spelling::MemberFnPtr,
                Spelling::ConstMemberFnPtr,
                Spelling::ConstMemberFn
            ]
        );

        let handles: Vec<_> = Spelling::ALL.into_iter().filter(|s| s.is_handle()).collect();
        assert_eq!(
            handles,
            vec![Spelling::LvalueFunctionRef, Spelling::RvalueFunctionRef]
        );

        assert!(!Spelling::GenericCallable.is_member());
        assert!(!Spelling::GenericCallable.is_handle());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Spelling::FunctionPointer.to_string(), "function pointer");
        assert_eq!(Spelling::ConstMemberFn.to_string(), "shared method");
        assert_eq!(format!("{}", Spelling::GenericCallable), "callable");
    }
}
