//! Free function spellings: unsized function types and function pointers.

// Method pointers are higher-ranked over their receiver, which keeps them
// disjoint from the plain function pointer impls below.
#![allow(coherence_leak_check)]

use crate::{Signature, Spelling};

macro_rules! function_signatures {
    ($($arg:ident),*) => {
        function_signatures!(@pointer []; $($arg),*);
        function_signatures!(@pointer [unsafe]; $($arg),*);
        function_signatures!(@pointer [extern "C"]; $($arg),*);
        function_signatures!(@pointer [unsafe extern "C"]; $($arg),*);

        function_signatures!(@unsized Fn []; $($arg),*);
        function_signatures!(@unsized Fn [Send]; $($arg),*);
        function_signatures!(@unsized Fn [Send, Sync]; $($arg),*);
        function_signatures!(@unsized FnMut []; $($arg),*);
        function_signatures!(@unsized FnMut [Send]; $($arg),*);
        function_signatures!(@unsized FnMut [Send, Sync]; $($arg),*);
        function_signatures!(@unsized FnOnce []; $($arg),*);
        function_signatures!(@unsized FnOnce [Send]; $($arg),*);
        function_signatures!(@unsized FnOnce [Send, Sync]; $($arg),*);
    };
    (@pointer [$($qualifier:tt)*]; $($arg:ident),*) => {
        impl<R, $($arg),*> Signature for $($qualifier)* fn($($arg),*) -> R {
            type Output = R;
            const KIND: Spelling = Spelling::FunctionPointer;
        }
    };
    (@unsized $fn_trait:ident [$($marker:ident),*]; $($arg:ident),*) => {
        impl<'a, R, $($arg),*> Signature for dyn $fn_trait($($arg),*) -> R $(+ $marker)* + 'a {
            type Output = R;
            const KIND: Spelling = Spelling::FreeFunction;
        }
    };
}

for_each_arity!(function_signatures);

// A borrowed parameter such as `&str` is higher-ranked over its lifetime, so
// `dyn Fn(&str) -> bool` is a different type from every `dyn Fn(A0) -> R`.
// Shapes of up to three parameters get impls of their own. Each parameter is
// either owned (`A*`) or a shared borrow (`&B*`); a unique borrow is covered
// for a single parameter only.
macro_rules! borrowed_function_signatures {
    (dyn $($shape:tt)+) => {
        $(
            borrowed_function_signatures!(@unsized Fn []; $shape);
            borrowed_function_signatures!(@unsized Fn [Send]; $shape);
            borrowed_function_signatures!(@unsized Fn [Send, Sync]; $shape);
            borrowed_function_signatures!(@unsized FnMut []; $shape);
            borrowed_function_signatures!(@unsized FnMut [Send]; $shape);
            borrowed_function_signatures!(@unsized FnMut [Send, Sync]; $shape);
            borrowed_function_signatures!(@unsized FnOnce []; $shape);
            borrowed_function_signatures!(@unsized FnOnce [Send]; $shape);
            borrowed_function_signatures!(@unsized FnOnce [Send, Sync]; $shape);
        )+
    };
    (fn $($shape:tt)+) => {
        $(
            borrowed_function_signatures!(@pointer []; $shape);
            borrowed_function_signatures!(@pointer [unsafe]; $shape);
            borrowed_function_signatures!(@pointer [extern "C"]; $shape);
            borrowed_function_signatures!(@pointer [unsafe extern "C"]; $shape);
        )+
    };
    (
        @unsized $fn_trait:ident [$($marker:ident),*];
        ([$($arg:ident),*] [$($borrowed:ident),*] ($($param:ty),+))
    ) => {
        impl<'a, R, $($arg,)* $($borrowed: ?Sized),*> Signature
            for dyn $fn_trait($($param),+) -> R $(+ $marker)* + 'a
        {
            type Output = R;
            const KIND: Spelling = Spelling::FreeFunction;
        }
    };
    (
        @pointer [$($qualifier:tt)*];
        ([$($arg:ident),*] [$($borrowed:ident),*] ($($param:ty),+))
    ) => {
        impl<R, $($arg,)* $($borrowed: ?Sized),*> Signature
            for $($qualifier)* fn($($param),+) -> R
        {
            type Output = R;
            const KIND: Spelling = Spelling::FunctionPointer;
        }
    };
}

borrowed_function_signatures! { dyn
    ([] [B0] (&B0))
    ([] [B0] (&mut B0))
    ([A1] [B0] (&B0, A1))
    ([A0] [B1] (A0, &B1))
    ([] [B0, B1] (&B0, &B1))
    ([A1, A2] [B0] (&B0, A1, A2))
    ([A0, A2] [B1] (A0, &B1, A2))
    ([A0, A1] [B2] (A0, A1, &B2))
    ([A2] [B0, B1] (&B0, &B1, A2))
    ([A1] [B0, B2] (&B0, A1, &B2))
    ([A0] [B1, B2] (A0, &B1, &B2))
    ([] [B0, B1, B2] (&B0, &B1, &B2))
}

// A pointer whose first parameter is a borrow has the shape of a method and
// resolves through the method rows instead.
borrowed_function_signatures! { fn
    ([A0] [B1] (A0, &B1))
    ([A0, A2] [B1] (A0, &B1, A2))
    ([A0, A1] [B2] (A0, A1, &B2))
    ([A0] [B1, B2] (A0, &B1, &B2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ResultOf, assert_result, assert_type_eq};

    fn kind<S: Signature + ?Sized>() -> Spelling {
        S::KIND
    }

    #[test]
    fn function_pointers_resolve_to_their_return_type() {
        assert_result::<fn(), ()>();
        assert_result::<fn() -> i32, i32>();
        assert_result::<fn(i32, i32) -> i32, i32>();
        assert_result::<fn() -> &'static i32, &'static i32>();
        assert_result::<fn() -> *const i32, *const i32>();
        assert_result::<fn() -> &'static mut i32, &'static mut i32>();
        assert_result::<fn() -> *mut (), *mut ()>();
        assert_result::<fn(String, Vec<u8>, char) -> Option<String>, Option<String>>();
    }

    #[test]
    fn unsafe_and_foreign_pointers_resolve() {
        assert_result::<unsafe fn(i32) -> u8, u8>();
        assert_result::<extern "C" fn(i32, i32) -> i64, i64>();
        assert_result::<unsafe extern "C" fn() -> *const u8, *const u8>();

        assert_eq!(kind::<unsafe extern "C" fn()>(), Spelling::FunctionPointer);
    }

    #[test]
    fn unsized_function_types_resolve_to_their_return_type() {
        assert_result::<dyn Fn() -> i32, i32>();
        assert_result::<dyn Fn(i32, i32) -> &'static i32, &'static i32>();
        assert_result::<dyn FnMut(u8) -> *const i32, *const i32>();
        assert_result::<dyn FnOnce(String) -> String, String>();
        assert_result::<dyn Fn() -> bool + Send, bool>();
        assert_result::<dyn FnOnce() -> bool + Send + Sync, bool>();

        assert_eq!(kind::<dyn Fn(i32) -> i32>(), Spelling::FreeFunction);
        assert_eq!(kind::<dyn FnMut() + Send>(), Spelling::FreeFunction);
    }

    #[test]
    fn same_result_across_free_function_spellings() {
        assert_type_eq::<ResultOf<dyn Fn(i32, i32) -> i32>, ResultOf<fn(i32, i32) -> i32>>();
        assert_type_eq::<
            ResultOf<dyn Fn(i32) -> &'static i32>,
            ResultOf<fn(i32) -> &'static i32>,
        >();
    }

    #[test]
    fn borrowed_parameters_resolve() {
        assert_result::<dyn Fn(&str) -> bool, bool>();
        assert_result::<dyn FnMut(&mut Vec<u8>) -> usize, usize>();
        assert_result::<dyn Fn(&[u8], usize) -> Option<u8>, Option<u8>>();
        assert_result::<dyn Fn(i32, &str) -> bool + Send + Sync, bool>();
        assert_result::<dyn FnOnce(&str, &str) -> String, String>();
        assert_result::<dyn Fn(&str, u8, &[u8]), ()>();
        assert_result::<dyn Fn(&str, &str, &str) -> &'static str, &'static str>();

        assert_result::<fn(i32, &str) -> bool, bool>();
        assert_result::<fn(String, &str, char) -> usize, usize>();
        assert_result::<unsafe extern "C" fn(i32, &u8, &u8) -> i32, i32>();

        assert_eq!(kind::<dyn Fn(&str) -> bool>(), Spelling::FreeFunction);
        assert_eq!(kind::<fn(i32, &str) -> bool>(), Spelling::FunctionPointer);
    }

    #[test]
    fn borrowed_parameters_do_not_shadow_owned_ones() {
        assert_result::<dyn Fn(&'static str) -> bool, bool>();
        assert_result::<fn(i32, &'static str) -> bool, bool>();
        assert_type_eq::<ResultOf<dyn Fn(&str) -> u8>, ResultOf<dyn Fn(&'static str) -> u8>>();
    }

    #[test]
    fn twelve_parameters_are_supported() {
        type Twelve = fn(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) -> u16;
        assert_result::<Twelve, u16>();
        assert_eq!(kind::<Twelve>(), Spelling::FunctionPointer);
    }

    #[test]
    fn function_items_coerce_into_a_resolvable_spelling() {
        fn add(a: i32, b: i32) -> i32 {
            a + b
        }

        let pointer: fn(i32, i32) -> i32 = add;
        let result: ResultOf<fn(i32, i32) -> i32> = pointer(1, 2);
        assert_eq!(result, 3);
    }
}
