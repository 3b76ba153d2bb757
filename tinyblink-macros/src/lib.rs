// Based on Embassy, under MIT OR Apache-2.0
extern crate proc_macro;

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use syn::parse::{Parse, ParseBuffer};
use syn::punctuated::Punctuated;
use syn::Token;

mod ctxt;
mod main_attr;

struct Args {
    meta: Vec<NestedMeta>,
}

impl Parse for Args {
    fn parse(input: &ParseBuffer) -> syn::Result<Self> {
        let meta = Punctuated::<NestedMeta, Token![,]>::parse_terminated(input)?;
        Ok(Args {
            meta: meta.into_iter().collect(),
        })
    }
}

/// Defines the program entry point.
///
/// The chip's clocks are configured before the function runs, and it
/// receives the `Hardware` token.
///
/// The following restrictions apply:
///
/// * The function must accept exactly one parameter: `hw: Hardware`
/// * The function must not be `async`.
/// * The function must not use generics.
/// * The function must return `!`.
///
/// ## Examples
///
/// ``` rust,ignore
/// #[tinyblink::main]
/// fn main(hw: Hardware) -> ! {
///     loop {}
/// }
/// ```
#[proc_macro_attribute]
pub fn main_cortex_m(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(args as Args);
    let f = syn::parse_macro_input!(item as syn::ItemFn);
    main_attr::run(&args.meta, f, main_attr::cortex_m()).unwrap_or_else(|x| x).into()
}
