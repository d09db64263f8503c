//! Method spellings: function pointers whose first parameter is the receiver.

#![allow(coherence_leak_check)]

use std::pin::Pin;

use crate::{Signature, Spelling};

macro_rules! member_signatures {
    ($($arg:ident),*) => {
        impl<R, Owner: ?Sized, $($arg),*> Signature for fn(&mut Owner, $($arg),*) -> R {
            type Output = R;
            const KIND: Spelling = Spelling::MemberFnPtr;
        }

        impl<R, Owner: ?Sized, $($arg),*> Signature for fn(Pin<&mut Owner>, $($arg),*) -> R {
            type Output = R;
            const KIND: Spelling = Spelling::ConstMemberFnPtr;
        }

        impl<R, Owner: ?Sized, $($arg),*> Signature for fn(&Owner, $($arg),*) -> R {
            type Output = R;
            const KIND: Spelling = Spelling::ConstMemberFn;
        }
    };
}

for_each_arity!(member_signatures);

// Methods whose parameters after the receiver include a borrow. As with free
// functions, each borrow makes the pointer higher-ranked over one more
// lifetime, so these shapes are listed separately.
macro_rules! borrowed_member_signatures {
    ($(([$($arg:ident),*] [$($borrowed:ident),*] ($($param:ty),+)))+) => {
        $(
            impl<R, Owner: ?Sized, $($arg,)* $($borrowed: ?Sized),*> Signature
                for fn(&mut Owner, $($param),+) -> R
            {
                type Output = R;
                const KIND: Spelling = Spelling::MemberFnPtr;
            }

            impl<R, Owner: ?Sized, $($arg,)* $($borrowed: ?Sized),*> Signature
                for fn(Pin<&mut Owner>, $($param),+) -> R
            {
                type Output = R;
                const KIND: Spelling = Spelling::ConstMemberFnPtr;
            }

            impl<R, Owner: ?Sized, $($arg,)* $($borrowed: ?Sized),*> Signature
                for fn(&Owner, $($param),+) -> R
            {
                type Output = R;
                const KIND: Spelling = Spelling::ConstMemberFn;
            }
        )+
    };
}

borrowed_member_signatures! {
    ([] [B0] (&B0))
    ([] [B0] (&mut B0))
    ([A1] [B0] (&B0, A1))
    ([A0] [B1] (A0, &B1))
    ([] [B0, B1] (&B0, &B1))
}
