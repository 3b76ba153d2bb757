use darling::export::NestedMeta;
use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ReturnType, Type};

use crate::ctxt::Ctxt;

#[derive(Debug, FromMeta)]
struct Args {
}

pub fn cortex_m() -> TokenStream {
    quote! {
        #[::tinyblink::internal::cortex_m_rt::entry]
        fn main() -> ! {
            let hw = unsafe { ::tinyblink::internal::init() };
            __tinyblink_main(hw)
        }
    }
}

pub fn run(args: &[NestedMeta], f: syn::ItemFn, main: TokenStream) -> Result<TokenStream, TokenStream> {
    #[allow(unused_variables)]
    let _args = Args::from_list(args).map_err(|e| e.write_errors())?;

    let fargs = f.sig.inputs.clone();

    let ctxt = Ctxt::new();

    if f.sig.asyncness.is_some() {
        ctxt.error_spanned_by(&f.sig, "main function must not be async");
    }
    if !f.sig.generics.params.is_empty() {
        ctxt.error_spanned_by(&f.sig, "main function must not be generic");
    }
    if f.sig.generics.where_clause.is_some() {
        ctxt.error_spanned_by(&f.sig, "main function must not have `where` clauses");
    }
    if f.sig.abi.is_some() {
        ctxt.error_spanned_by(&f.sig, "main function must not have an ABI qualifier");
    }
    if f.sig.variadic.is_some() {
        ctxt.error_spanned_by(&f.sig, "main function must not be variadic");
    }
    match &f.sig.output {
        ReturnType::Type(_, ty) if matches!(**ty, Type::Never(_)) => {}
        _ => ctxt.error_spanned_by(&f.sig, "main function must return `!`"),
    }

    if fargs.len() != 1 {
        ctxt.error_spanned_by(&f.sig, "main function must have 1 argument: the hardware.");
    }

    ctxt.check()?;

    let attrs = &f.attrs;
    let f_body = f.block;

    let result = quote! {
        #[doc(hidden)]
        #(#attrs)*
        #[inline(always)]
        fn __tinyblink_main(#fargs) -> ! #f_body

        #main
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(f: syn::ItemFn) -> Result<String, String> {
        run(&[], f, cortex_m())
            .map(|t| t.to_string())
            .map_err(|t| t.to_string())
    }

    #[test]
    fn wraps_blocking_main_in_entry_point() {
        let out = expand(parse_quote! {
            fn main(hw: Hardware) -> ! {
                loop {}
            }
        })
        .unwrap();

        assert!(out.contains("fn __tinyblink_main (hw : Hardware) -> !"));
        assert!(out.contains("cortex_m_rt :: entry"));
        assert!(out.contains(":: tinyblink :: internal :: init ()"));
    }

    #[test]
    fn keeps_user_attributes() {
        let out = expand(parse_quote! {
            #[allow(unused_variables)]
            fn main(hw: Hardware) -> ! {
                loop {}
            }
        })
        .unwrap();

        assert!(out.contains("# [allow (unused_variables)]"));
    }

    #[test]
    fn rejects_async() {
        let err = expand(parse_quote! {
            async fn main(hw: Hardware) -> ! {
                loop {}
            }
        })
        .unwrap_err();

        assert!(err.contains("must not be async"));
    }

    #[test]
    fn rejects_returning_main() {
        let err = expand(parse_quote! {
            fn main(hw: Hardware) {}
        })
        .unwrap_err();

        assert!(err.contains("must return `!`"));
    }

    #[test]
    fn rejects_wrong_arity_and_generics_together() {
        let err = expand(parse_quote! {
            fn main<T>() -> ! {
                loop {}
            }
        })
        .unwrap_err();

        assert!(err.contains("must not be generic"));
        assert!(err.contains("must have 1 argument"));
    }
}
