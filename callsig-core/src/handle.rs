//! Handles: references and smart pointers that forward to the spelling they wrap.

use std::{rc::Rc, sync::Arc};

use crate::{Signature, Spelling};

macro_rules! handle_signature {
    ($kind:expr => $($handle:ty),+) => {
        $(
            impl<S> Signature for $handle
            where
                S: Signature + ?Sized,
            {
                type Output = S::Output;
                const KIND: Spelling = $kind;
            }
        )+
    };
}

handle_signature!(Spelling::LvalueFunctionRef => &S, &mut S, Rc<S>, Arc<S>);
handle_signature!(Spelling::RvalueFunctionRef => Box<S>);
