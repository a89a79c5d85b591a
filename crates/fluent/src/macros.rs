//! The `tw!` macro.
//!
//! `tw!` accepts the chain syntax directly in Rust source and expands to
//! the same [`Chain::get`](crate::Chain::get) and
//! [`Access::call`](crate::Access::call) sequence a hand-written chain
//! would use.
//!
//! ```
//! use fluent::tw;
//!
//! let chain = tw!(flex.flexCol.gap(4).hover(bg("blue-500")));
//! assert_eq!(chain.items().len(), 4);
//!
//! // Rust expressions go in braces.
//! let size = 8;
//! let chain = tw!(tw.p({ size }).rounded);
//! assert_eq!(chain.items().len(), 2);
//! ```

/// Builds a [`Chain`](crate::Chain) from chain syntax.
///
/// Arguments are literals, nested chains, or `{ expr }` for anything
/// convertible into an [`Arg`](crate::Arg).
#[macro_export]
macro_rules! tw {
    () => {
        $crate::Chain::new()
    };
    (tw $($rest:tt)*) => {
        $crate::__tw_segments!(($crate::Access::Chain($crate::Chain::new())) $($rest)*)
    };
    ($name:ident $($rest:tt)*) => {
        $crate::__tw_segments!(($crate::Chain::new().get(stringify!($name))) $($rest)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tw_segments {
    (($access:expr)) => {
        $access.into_chain()
    };
    (($access:expr) . $name:ident $($rest:tt)*) => {
        $crate::__tw_segments!(($access.get(stringify!($name))) $($rest)*)
    };
    (($access:expr) ( $($args:tt)* ) $($rest:tt)*) => {
        $crate::__tw_segments!(
            ($crate::Access::Chain($access.call($crate::__tw_args!([] $($args)*))))
            $($rest)*
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tw_args {
    (@chain [$($done:expr),*] [$($cur:tt)*] , $($rest:tt)*) => {
        $crate::__tw_args!([$($done,)* $crate::Arg::from($crate::tw!($($cur)*))] $($rest)*)
    };
    (@chain [$($done:expr),*] [$($cur:tt)*]) => {
        $crate::__tw_args!([$($done,)* $crate::Arg::from($crate::tw!($($cur)*))])
    };
    (@chain [$($done:expr),*] [$($cur:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__tw_args!(@chain [$($done),*] [$($cur)* $next] $($rest)*)
    };
    ([$($done:expr),*]) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($done),*];
        args
    }};
    ([$($done:expr),*] $lit:literal $(, $($rest:tt)*)?) => {
        $crate::__tw_args!([$($done,)* $crate::Arg::from($lit)] $($($rest)*)?)
    };
    ([$($done:expr),*] { $value:expr } $(, $($rest:tt)*)?) => {
        $crate::__tw_args!([$($done,)* $crate::Arg::from($value)] $($($rest)*)?)
    };
    ([$($done:expr),*] $($rest:tt)+) => {
        $crate::__tw_args!(@chain [$($done),*] [] $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Chain, tw};
    use acss::Item;

    #[test]
    fn macro_matches_the_hand_written_chain() {
        let by_macro = tw!(tw.flex.p(4).hover(bg("white"), textColor("black")).italic);
        let by_hand = Chain::new()
            .get("flex")
            .get("p")
            .call([4])
            .get("hover")
            .call([
                Chain::new().call("bg", ["white"]),
                Chain::new().call("textColor", ["black"]),
            ])
            .get("italic")
            .into_chain();
        assert_eq!(by_macro, by_hand);
    }

    #[test]
    fn negative_numbers_and_multiple_arguments() {
        let chain = tw!(mt(-2).ring(2, "red-500"));
        let rules: Vec<_> = chain.items().iter().filter_map(Item::as_rule).collect();
        assert_eq!(rules[0].declaration("margin-top"), Some("-0.5rem"));
        assert_eq!(rules[1].declaration("box-shadow"), Some("0 0 0 2px #ef4444"));
    }

    #[test]
    fn empty_macro_is_an_empty_chain() {
        assert_eq!(tw!(), Chain::new());
    }
}
