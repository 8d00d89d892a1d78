use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenTree};
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Lit, Meta, Variant};
mod types;

use types::*;

/// Derives `chatopts::ChoiceSet` for a fieldless enum.
///
/// Each variant becomes one choice. `#[choice(name = "...", value = ...)]`
/// overrides the display name (default: the variant ident) and the value
/// (default: the lowercase variant ident). Values are either all strings or
/// all integers.
#[proc_macro_derive(ChoiceSet, attributes(choice))]
pub fn derive(input: TokenStream) -> TokenStream {
    match derive_internal(input.into()) {
        Ok(stream) => stream.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_internal(input: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
    let input = syn::parse2::<DeriveInput>(input)?;
    let name = &input.ident;

    let Data::Enum(enumeration) = &input.data else {
        return Err(new_error(name, "`ChoiceSet` can only be derived for enums"));
    };

    // an empty set could never be installed on an option
    if enumeration.variants.is_empty() {
        return Err(new_error(name, "enum must have at least one variant"));
    }

    let mut choices = Vec::<Choice>::new();
    for variant in &enumeration.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(new_error(variant, "choice variants cannot have fields"));
        }
        let config = parse_config(variant)?;
        choices.push(resolve(variant, config)?);
    }
    check_values(&choices)?;

    let (value_type, scrutinee) = match choices[0].value {
        ChoiceValue::Str(_) => (quote! { ::std::string::String }, quote! { value.as_str() }),
        ChoiceValue::Int(_) => (quote! { i64 }, quote! { *value }),
    };

    let entries = choices.iter().map(|choice| {
        let label = &choice.name;
        let value = match &choice.value {
            ChoiceValue::Str(value) => quote! { ::std::string::String::from(#value) },
            ChoiceValue::Int(value) => Literal::i64_suffixed(*value).into_token_stream(),
        };
        quote! { ::chatopts::OptionChoice::new(#label, #value) }
    });

    let arms = choices.iter().map(|choice| {
        let variant = &choice.variant;
        let pattern = match &choice.value {
            ChoiceValue::Str(value) => Literal::string(value),
            ChoiceValue::Int(value) => Literal::i64_suffixed(*value),
        };
        quote! { #pattern => ::std::option::Option::Some(Self::#variant) }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let stream = quote! {
        impl #impl_generics ::chatopts::ChoiceSet for #name #ty_generics #where_clause {
            type Value = #value_type;

            fn choices() -> ::std::vec::Vec<::chatopts::OptionChoice<Self::Value>> {
                ::std::vec![#(#entries),*]
            }

            fn from_value(value: &Self::Value) -> ::std::option::Option<Self> {
                match #scrutinee {
                    #(#arms,)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };

    Ok(stream)
}

fn new_error<T: ToTokens>(token_stream: &T, error: &str) -> syn::Error {
    syn::Error::new_spanned(token_stream, error)
}

fn check_duplicates(stream: proc_macro2::TokenStream) -> Result<(), syn::Error> {
    let mut idents = Vec::<syn::Ident>::new();
    for token in stream {
        if let TokenTree::Ident(ref ident) = token {
            if idents.contains(ident) {
                return Err(new_error(
                    ident,
                    &format!("duplicate attribute found: {ident}"),
                ));
            }
            idents.push(ident.clone());
        }
    }
    Ok(())
}

fn parse_config(variant: &Variant) -> syn::Result<Config> {
    let mut config = Config::default();
    let mut seen = false;
    for attr in &variant.attrs {
        if !attr.path().is_ident("choice") {
            continue;
        }
        if seen {
            return Err(new_error(attr, "duplicate `choice` attribute"));
        }
        seen = true;
        let Meta::List(list) = &attr.meta else {
            return Err(new_error(attr, "expected `#[choice(...)]`"));
        };
        check_duplicates(list.tokens.clone())?;

        let mut iter = list.tokens.clone().into_iter();
        while let Some(token) = iter.next() {
            let TokenTree::Ident(ref ident) = token else {
                return Err(new_error(&token, "expected `name` or `value`"));
            };
            let argument = ident
                .to_string()
                .parse::<SupportedArguments>()
                .map_err(|_| new_error(ident, &format!("unknown choice attribute `{ident}`")))?;
            match iter.next() {
                Some(TokenTree::Punct(ref punct)) if punct.as_char() == '=' => {}
                Some(other) => {
                    return Err(new_error(
                        &other,
                        &format!("expected punct `=` after `{ident}`"),
                    ));
                }
                None => {
                    return Err(new_error(
                        ident,
                        &format!("expected punct `=` after `{ident}`"),
                    ));
                }
            }
            let Some(TokenTree::Literal(literal)) = iter.next() else {
                return Err(new_error(
                    ident,
                    &format!("expected literal after `{ident} =`"),
                ));
            };
            match iter.next() {
                None => {}
                Some(TokenTree::Punct(ref punct)) if punct.as_char() == ',' => {}
                Some(other) => {
                    return Err(new_error(
                        &other,
                        &format!("expected punct `,` after `{literal}`"),
                    ));
                }
            }
            match argument {
                SupportedArguments::Name => config.name = Some(literal),
                SupportedArguments::Value => config.value = Some(literal),
            }
        }
    }
    Ok(config)
}

fn resolve(variant: &Variant, config: Config) -> syn::Result<Choice> {
    let ident = &variant.ident;
    let name = match config.name.map(Lit::new) {
        Some(Lit::Str(name)) if name.value().is_empty() => {
            return Err(new_error(&name, "expected non empty literal"));
        }
        Some(Lit::Str(name)) => name.value(),
        Some(other) => return Err(new_error(&other, "`name` must be a string literal")),
        None => ident.to_string(),
    };
    let value = match config.value.map(Lit::new) {
        Some(Lit::Str(value)) if value.value().is_empty() => {
            return Err(new_error(&value, "expected non empty literal"));
        }
        Some(Lit::Str(value)) => ChoiceValue::Str(value.value()),
        Some(Lit::Int(value)) => ChoiceValue::Int(value.base10_parse::<i64>()?),
        Some(other) => {
            return Err(new_error(
                &other,
                "`value` must be a string or integer literal",
            ));
        }
        None => ChoiceValue::Str(ident.to_string().to_lowercase()),
    };
    Ok(Choice {
        variant: ident.clone(),
        name,
        value,
    })
}

fn check_values(choices: &[Choice]) -> syn::Result<()> {
    let first = std::mem::discriminant(&choices[0].value);
    for (index, choice) in choices.iter().enumerate() {
        if std::mem::discriminant(&choice.value) != first {
            return Err(new_error(
                &choice.variant,
                "choice values must be all strings or all integers",
            ));
        }
        if choices[..index].iter().any(|other| other.value == choice.value) {
            return Err(new_error(
                &choice.variant,
                &format!("duplicate choice value on `{}`", choice.variant),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: proc_macro2::TokenStream) -> String {
        derive_internal(input).unwrap().to_string().replace(' ', "")
    }

    fn error(input: proc_macro2::TokenStream) -> String {
        derive_internal(input).unwrap_err().to_string()
    }

    #[test]
    fn defaults_to_variant_names() {
        let output = expand(quote! {
            enum Mode { Easy, Hard }
        });
        assert!(output.contains("typeValue=::std::string::String;"));
        assert!(output.contains(r#"OptionChoice::new("Easy",::std::string::String::from("easy"))"#));
        assert!(output.contains(r#""hard"=>::std::option::Option::Some(Self::Hard)"#));
    }

    #[test]
    fn integer_values() {
        let output = expand(quote! {
            enum Level {
                #[choice(name = "Low", value = 1)]
                Low,
                #[choice(value = 10)]
                High,
            }
        });
        assert!(output.contains("typeValue=i64;"));
        assert!(output.contains(r#"OptionChoice::new("High",10i64)"#));
        assert!(output.contains("match*value{"));
    }

    #[test]
    fn rejects_structs() {
        assert!(error(quote! { struct Mode; }).contains("only be derived for enums"));
    }

    #[test]
    fn rejects_empty_enums() {
        assert!(error(quote! { enum Mode {} }).contains("at least one variant"));
    }

    #[test]
    fn rejects_fields() {
        assert!(error(quote! { enum Mode { Easy(u8) } }).contains("cannot have fields"));
    }

    #[test]
    fn rejects_unknown_and_duplicated_keys() {
        assert!(
            error(quote! { enum Mode { #[choice(label = "x")] Easy } })
                .contains("unknown choice attribute `label`")
        );
        assert!(
            error(quote! { enum Mode { #[choice(name = "x", name = "y")] Easy } })
                .contains("duplicate attribute found: name")
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(error(quote! { enum Mode { #[choice(name "x")] Easy } }).contains("expected punct `=`"));
        assert!(error(quote! { enum Mode { #[choice(name = )] Easy } }).contains("expected literal"));
        assert!(error(quote! { enum Mode { #[choice(name = "")] Easy } }).contains("non empty"));
    }

    #[test]
    fn rejects_mixed_and_repeated_values() {
        assert!(
            error(quote! {
                enum Mode {
                    #[choice(value = "a")]
                    A,
                    #[choice(value = 2)]
                    B,
                }
            })
            .contains("all strings or all integers")
        );
        assert!(
            error(quote! {
                enum Mode {
                    #[choice(value = "same")]
                    A,
                    #[choice(value = "same")]
                    B,
                }
            })
            .contains("duplicate choice value on `B`")
        );
    }
}
