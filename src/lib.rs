/*
 *  Iris - Discord bot for ranking emoji usage across a server.
 *  Copyright (C) 2026  Iris contributors
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */
/*
 * The package doubles as a library only because procedural macros must live in
 * a dedicated crate type; the bot itself is the binary target.
 */
extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use quote::ToTokens as _; // To use function.into_token_stream().
use syn::spanned::Spanned as _; // To use span() on language items.
use syn::{parse_macro_input, ItemFn};

/**
 * Extracts the identifier of a command function's context argument (the `ctx`
 * of `ctx: Context<'_>`), which every poise command takes first.
 */
fn context_ident(function: &ItemFn) -> Result<syn::Ident, syn::Error> {
    let Some(first_arg) = function.sig.inputs.first() else {
        return Err(syn::Error::new(
            function.sig.span(),
            "[log_cmd] command function takes no arguments",
        ));
    };
    let syn::FnArg::Typed(ctx_arg) = first_arg else {
        return Err(syn::Error::new(
            first_arg.span(),
            "[log_cmd] `self` is not a command context",
        ));
    };
    let syn::Pat::Ident(pat) = &*ctx_arg.pat else {
        return Err(syn::Error::new(
            ctx_arg.pat.span(),
            "[log_cmd] context argument must be a plain identifier",
        ));
    };
    Ok(pat.ident.clone())
}

/**
 * Attribute for command functions that logs every invocation to stderr before
 * the command body runs, via the crate's `elog_cmd!` macro.
 */
#[proc_macro_attribute]
pub fn log_cmd(_macro_attrs: TokenStream, function: TokenStream) -> TokenStream {
    let mut function = parse_macro_input!(function as ItemFn);

    let ctx_ident = match context_ident(&function) {
        Ok(ident) => ident,
        Err(err) => return darling::Error::from(err).write_errors().into(),
    };

    // Prepend the logging statement to the command body:
    function.block.stmts.insert(
        0,
        syn::parse(
            quote! {
            crate::utils::elog_cmd!(#ctx_ident);
            }
            .into(),
        )
        .unwrap(),
    );

    function.into_token_stream().into()
}
