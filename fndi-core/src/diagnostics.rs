use std::any::type_name;

const ANONYMOUS: &str = "<anonymous>";

/// The path and name of the function type `F`, like `my_crate::handlers::login`.
///
/// Closures are named after the function that defines them, followed by `{{closure}}`.
pub fn fn_path<F: ?Sized>() -> &'static str {
    match type_name::<F>() {
        "" => ANONYMOUS,
        path => path,
    }
}

/// Same as [`fn_path`], for when the function type can't be named
#[inline(always)]
pub fn fn_path_of_val<F: ?Sized>(_func: &F) -> &'static str {
    fn_path::<F>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() {}

    #[test]
    fn fn_items_are_named_by_path() {
        assert_eq!(fn_path_of_val(&handler), "fndi_core::diagnostics::tests::handler");
    }

    #[test]
    fn closures_are_named_after_their_scope() {
        let closure = || ();
        let path = fn_path_of_val(&closure);
        assert!(path.starts_with("fndi_core::diagnostics::tests::closures_are_named_after_their_scope"));
        assert!(path.ends_with("{{closure}}"));
    }
}
