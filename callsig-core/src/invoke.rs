/// Resolves and performs a call for a given argument tuple.
///
/// Closure and function item types cannot be named, so [`Signature`] cannot be
/// implemented for them. `Invoke` resolves their result type from the type of
/// the arguments the caller is about to pass instead, and is implemented for
/// every `FnOnce` with up to twelve parameters. Types annotated with
/// [`#[callable]`](crate::callable) implement it for their operator's
/// arguments.
///
/// For any type implementing both traits, `Invoke::Output` is the same type
/// as [`Signature::Output`].
///
/// # Example
///
/// ```
/// use callsig_core::{Invoke, InvokeResult};
///
/// fn apply<F, Args>(callable: F, args: Args) -> InvokeResult<F, Args>
/// where
///     F: Invoke<Args>,
/// {
///     callable.invoke(args)
/// }
///
/// let offset = 10;
/// assert_eq!(apply(|a: i32, b: i32| a + b + offset, (1, 2)), 13);
/// assert_eq!(apply(str::len, ("four",)), 4);
/// ```
///
/// [`Signature`]: crate::Signature
/// [`Signature::Output`]: crate::Signature::Output
pub trait Invoke<Args> {
    /// The type produced by the call.
    type Output;

    /// Calls `self` with the unpacked `args`.
    fn invoke(self, args: Args) -> Self::Output;
}

/// The result type of invoking `F` with an argument tuple of type `Args`.
pub type InvokeResult<F, Args> = <F as Invoke<Args>>::Output;

macro_rules! invoke_impls {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Invoke<($($arg,)*)> for F
        where
            F: FnOnce($($arg),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

for_each_arity!(invoke_impls);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{ResultOf, assert_invoke_result, assert_type_eq};

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn invokes_function_items() {
        assert_eq!(add.invoke((1, 2)), 3);
        assert_type_eq::<InvokeResult<fn(i32, i32) -> i32, (i32, i32)>, i32>();
    }

    #[test]
    fn invokes_closures() {
        let f = |a: i32, b: i32| -> i32 { a + b };
        assert_invoke_result::<_, (i32, i32), i32>(&f);
        assert_eq!(f.invoke((4, 3)), 7);

        let mut count = 0;
        let mut bump = || {
            count += 1;
            count
        };
        assert_eq!((&mut bump).invoke(()), 1);
        assert_eq!(bump.invoke(()), 2);
    }

    #[test]
    fn consumes_once_closures() {
        let name = String::from("callsig");
        let take = move |suffix: &str| name + suffix;
        assert_eq!(take.invoke(("-core",)), "callsig-core");
    }

    #[test]
    fn invokes_methods_with_a_receiver() {
        struct Counter(i32);

        impl Counter {
            fn add(&mut self, a: i32, b: i32) -> i32 {
                self.0 += a + b;
                self.0
            }
        }

        let mut counter = Counter(0);
        assert_eq!(Counter::add.invoke((&mut counter, 4, 2)), 6);
        assert_eq!(counter.0, 6);
    }

    #[test]
    fn agrees_with_signature() {
        assert_type_eq::<
            InvokeResult<fn(i32) -> &'static str, (i32,)>,
            ResultOf<fn(i32) -> &'static str>,
        >();
        assert_type_eq::<
            InvokeResult<Box<dyn Fn(u8) -> u16>, (u8,)>,
            ResultOf<Box<dyn Fn(u8) -> u16>>,
        >();
    }

    #[test]
    fn floating_point_results() {
        let area = |radius: f64| std::f64::consts::PI * radius * radius;
        assert_relative_eq!(area.invoke((2.0,)), 12.566_370_614_359_172, epsilon = 1e-12);
    }
}
