//! `#[derive(Newtype)]` for `newtype-kit`.
//!
//! The derive always implements `newtype_kit::Newtype` for a single-field
//! struct. Every further impl is opt-in through a `#[newtype(...)]` capability
//! list and forwards to the matching function in `newtype_kit::ops`.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, punctuated::Punctuated, Data, DeriveInput, Ident, Index,
    Member, Result as SynResult, Token, Type,
};

/// Capabilities requested through `#[newtype(...)]`.
#[derive(Default)]
struct Capabilities {
    partial_eq: bool,
    eq: bool,
    partial_ord: bool,
    ord: bool,
    hash: bool,
    serialize: bool,
    deserialize: bool,
    add: bool,
    sub: bool,
    mul: bool,
    neg: bool,
    display: bool,
    from_str: bool,
    integer_literal: bool,
    string_literal: bool,
}

impl Capabilities {
    fn from_attrs(attrs: &[syn::Attribute]) -> SynResult<Self> {
        let mut caps = Capabilities::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("newtype")) {
            let idents = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
            for ident in idents {
                match ident.to_string().as_str() {
                    "partial_eq" => caps.partial_eq = true,
                    "eq" => {
                        caps.partial_eq = true;
                        caps.eq = true;
                    }
                    "partial_ord" => caps.partial_ord = true,
                    "ord" => {
                        caps.partial_ord = true;
                        caps.ord = true;
                    }
                    "hash" => caps.hash = true,
                    "serialize" => caps.serialize = true,
                    "deserialize" => caps.deserialize = true,
                    "serde" => {
                        caps.serialize = true;
                        caps.deserialize = true;
                    }
                    "add" => caps.add = true,
                    "sub" => caps.sub = true,
                    "mul" => caps.mul = true,
                    "neg" => caps.neg = true,
                    "display" => caps.display = true,
                    "from_str" => caps.from_str = true,
                    "integer_literal" => caps.integer_literal = true,
                    "string_literal" => caps.string_literal = true,
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown newtype capability `{}`", other),
                        ))
                    }
                }
            }
        }
        Ok(caps)
    }
}

/// The single stored field of the wrapper.
struct RawField {
    member: Member,
    ty: Type,
}

fn raw_field(input: &DeriveInput) -> SynResult<RawField> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Newtype can only be derived for structs",
            ))
        }
    };
    let mut fields = data.fields.iter();
    match (fields.next(), fields.next()) {
        (Some(field), None) => {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index {
                    index: 0,
                    span: Span::call_site(),
                }),
            };
            Ok(RawField {
                member,
                ty: field.ty.clone(),
            })
        }
        _ => Err(syn::Error::new(
            input.ident.span(),
            "Newtype requires a struct with exactly one field",
        )),
    }
}

/// Where clause made of the struct's own predicates plus `raw: bound`.
fn where_with(input: &DeriveInput, raw: &Type, bound: TokenStream2) -> TokenStream2 {
    let existing = input
        .generics
        .where_clause
        .as_ref()
        .map(|w| w.predicates.iter().collect::<Vec<_>>())
        .unwrap_or_default();
    quote! { where #(#existing,)* #raw: #bound }
}

#[proc_macro_derive(Newtype, attributes(newtype))]
pub fn derive_newtype(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> SynResult<TokenStream2> {
    let caps = Capabilities::from_attrs(&input.attrs)?;
    let RawField { member, ty: raw } = raw_field(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let is_generic = !input.generics.params.is_empty();
    let krate = quote!(::newtype_kit);
    let ops = quote!(#krate::ops);

    let mut out = quote! {
        impl #impl_generics #krate::Newtype for #name #ty_generics #where_clause {
            type Raw = #raw;

            #[inline]
            fn from_raw(raw: Self::Raw) -> Self {
                Self { #member: raw }
            }

            #[inline]
            fn raw(&self) -> &Self::Raw {
                &self.#member
            }

            #[inline]
            fn into_raw(self) -> Self::Raw {
                self.#member
            }
        }
    };

    if caps.partial_eq {
        let wc = where_with(input, &raw, quote!(::core::cmp::PartialEq));
        out.extend(quote! {
            impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #wc {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    #ops::eq(self, other)
                }
            }
        });
    }

    if caps.eq {
        let wc = where_with(input, &raw, quote!(::core::cmp::Eq));
        out.extend(quote! {
            impl #impl_generics ::core::cmp::Eq for #name #ty_generics #wc {}
        });
    }

    if caps.ord {
        let wc = where_with(input, &raw, quote!(::core::cmp::Ord));
        out.extend(quote! {
            impl #impl_generics ::core::cmp::PartialOrd for #name #ty_generics #wc {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(#ops::cmp(self, other))
                }
            }

            impl #impl_generics ::core::cmp::Ord for #name #ty_generics #wc {
                #[inline]
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    #ops::cmp(self, other)
                }
            }
        });
    } else if caps.partial_ord {
        let wc = where_with(input, &raw, quote!(::core::cmp::PartialOrd));
        out.extend(quote! {
            impl #impl_generics ::core::cmp::PartialOrd for #name #ty_generics #wc {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    #ops::partial_cmp(self, other)
                }
            }
        });
    }

    if caps.hash {
        let wc = where_with(input, &raw, quote!(::core::hash::Hash));
        out.extend(quote! {
            impl #impl_generics ::core::hash::Hash for #name #ty_generics #wc {
                #[inline]
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    #ops::hash(self, state)
                }
            }
        });
    }

    if caps.serialize {
        let serde = quote!(#krate::__private::serde);
        let wc = where_with(input, &raw, quote!(#serde::Serialize));
        out.extend(quote! {
            impl #impl_generics #serde::Serialize for #name #ty_generics #wc {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: #serde::Serializer,
                {
                    #ops::serialize(self, serializer)
                }
            }
        });
    }

    if caps.deserialize {
        let serde = quote!(#krate::__private::serde);
        let mut de_generics = input.generics.clone();
        de_generics.params.insert(0, parse_quote!('de));
        let (de_impl_generics, _, _) = de_generics.split_for_impl();
        let wc = where_with(input, &raw, quote!(#serde::Deserialize<'de>));
        out.extend(quote! {
            impl #de_impl_generics #serde::Deserialize<'de> for #name #ty_generics #wc {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: #serde::Deserializer<'de>,
                {
                    #ops::deserialize(deserializer)
                }
            }
        });
    }

    for (enabled, trait_name, method) in [
        (caps.add, quote!(Add), quote!(add)),
        (caps.sub, quote!(Sub), quote!(sub)),
        (caps.mul, quote!(Mul), quote!(mul)),
    ] {
        if !enabled {
            continue;
        }
        let wc = where_with(input, &raw, quote!(::core::ops::#trait_name<Output = #raw>));
        out.extend(quote! {
            impl #impl_generics ::core::ops::#trait_name for #name #ty_generics #wc {
                type Output = Self;

                #[inline]
                fn #method(self, rhs: Self) -> Self {
                    #ops::#method(self, rhs)
                }
            }
        });
    }

    if caps.neg {
        let wc = where_with(input, &raw, quote!(::core::ops::Neg<Output = #raw>));
        out.extend(quote! {
            impl #impl_generics ::core::ops::Neg for #name #ty_generics #wc {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    #ops::neg(self)
                }
            }
        });
    }

    if caps.display {
        let wc = where_with(input, &raw, quote!(::core::fmt::Display));
        out.extend(quote! {
            impl #impl_generics ::core::fmt::Display for #name #ty_generics #wc {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #ops::fmt(self, f)
                }
            }
        });
    }

    if caps.from_str {
        let wc = where_with(input, &raw, quote!(::core::str::FromStr));
        out.extend(quote! {
            impl #impl_generics ::core::str::FromStr for #name #ty_generics #wc {
                type Err = <#raw as ::core::str::FromStr>::Err;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    #ops::from_str(s)
                }
            }
        });
    }

    if caps.integer_literal {
        let wc = where_with(input, &raw, quote!(#krate::IntegerLiteral));
        out.extend(quote! {
            impl #impl_generics #krate::IntegerLiteral for #name #ty_generics #wc {
                type Literal = <#raw as #krate::IntegerLiteral>::Literal;

                #[inline]
                fn from_integer_literal(literal: Self::Literal) -> Self {
                    #ops::from_integer_literal(literal)
                }
            }
        });
        // A projection in a generic impl header would overlap `From<T> for T`.
        if !is_generic {
            out.extend(quote! {
                impl ::core::convert::From<<#raw as #krate::IntegerLiteral>::Literal> for #name {
                    #[inline]
                    fn from(literal: <#raw as #krate::IntegerLiteral>::Literal) -> Self {
                        #ops::from_integer_literal(literal)
                    }
                }
            });
        }
    }

    if caps.string_literal {
        let wc = where_with(input, &raw, quote!(#krate::StringLiteral));
        out.extend(quote! {
            impl #impl_generics #krate::StringLiteral for #name #ty_generics #wc {
                #[inline]
                fn from_string_literal(literal: &'static str) -> Self {
                    #ops::from_string_literal(literal)
                }
            }
        });
        if !is_generic {
            out.extend(quote! {
                impl ::core::convert::From<&'static str> for #name {
                    #[inline]
                    fn from(literal: &'static str) -> Self {
                        #ops::from_string_literal(literal)
                    }
                }
            });
        }
    }

    Ok(out)
}
