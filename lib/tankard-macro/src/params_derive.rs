//! Params derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, parse2};

/// Struct-level options parsed from `#[param(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ParamStructOptions {
    /// Rename all keys using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy)]
enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `snake_case`
    SnakeCase,
    /// `camelCase`
    CamelCase,
    /// `PascalCase`
    PascalCase,
    /// `kebab-case`
    KebabCase,
}

impl RenameRule {
    /// Parse a rename rule from a string.
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "snake_case" => Some(Self::SnakeCase),
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a field identifier.
    fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_ascii_lowercase(),
            Self::UpperCase => name.to_ascii_uppercase(),
            Self::SnakeCase => snake_case(name),
            Self::CamelCase => camel_case(name),
            Self::PascalCase => pascal_case(name),
            Self::KebabCase => snake_case(name).replace('_', "-"),
        }
    }
}

/// Convert an identifier to `snake_case`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert an identifier to `camelCase`.
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert an identifier to `PascalCase`.
fn pascal_case(name: &str) -> String {
    let camel = camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Field options parsed from `#[param(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ParamFieldOptions {
    /// Skip this field when it holds its kind's zero value.
    omit_empty: bool,
    /// External key, possibly carrying a tag-style `,omitempty` suffix.
    rename: Option<String>,
    /// Exclude this field from encoding entirely.
    skip: bool,
}

/// Expand the `#[derive(Params)]` macro.
pub fn expand_params_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    // The generated accessors are plain `fn` items, which cannot refer to
    // outer type parameters.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Params derive does not support generic structs",
        ));
    }

    let struct_options = parse_param_struct_options(&input.attrs)?;

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Params derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Params derive only supports structs",
            ));
        }
    };

    let mut descriptors = Vec::new();

    for field in fields {
        // Safe: we've already verified this is a struct with named fields
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_param_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let (key, omit_empty) =
            resolve_key(&field_ident.to_string(), &options, struct_options.rename_all);

        descriptors.push(quote! {
            ::tankard::Field::new(#key, #omit_empty, {
                fn get(record: &#name) -> ::tankard::Value<'_> {
                    ::tankard::ToValue::to_value(&record.#field_ident)
                }
                get
            })
        });
    }

    Ok(quote! {
        impl ::tankard::Record for #name {
            const FIELDS: &'static [::tankard::Field<Self>] = &[
                #(#descriptors),*
            ];
        }
    })
}

/// Resolve the external key and omit flag for a field.
///
/// Precedence: explicit `rename` > `rename_all` > field identifier. A rename
/// value may carry tag-style modifiers after a comma (`"abv,omitempty"`); the
/// modifier is stripped from the name token and unknown modifiers are
/// ignored. An empty name token degrades to the field identifier rather than
/// failing.
fn resolve_key(
    field_name: &str,
    options: &ParamFieldOptions,
    rename_all: Option<RenameRule>,
) -> (String, bool) {
    let mut omit_empty = options.omit_empty;

    if let Some(rename) = options.rename.as_deref() {
        let mut tokens = rename.split(',');
        let name = tokens.next().unwrap_or_default().trim();
        for modifier in tokens {
            if modifier.trim() == "omitempty" {
                omit_empty = true;
            }
        }
        if !name.is_empty() {
            return (name.to_string(), omit_empty);
        }
    } else if let Some(rule) = rename_all {
        return (rule.apply(field_name), omit_empty);
    }

    (field_name.to_string(), omit_empty)
}

/// Parse struct-level options from `#[param(...)]` attributes.
fn parse_param_struct_options(attrs: &[syn::Attribute]) -> syn::Result<ParamStructOptions> {
    let mut options = ParamStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, UPPERCASE, snake_case, camelCase, \
                             PascalCase, kebab-case",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[param(...)]` attributes.
fn parse_param_field_options(attrs: &[syn::Attribute]) -> syn::Result<ParamFieldOptions> {
    let mut options = ParamFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("omit_empty") {
                options.omit_empty = true;
            } else if meta.path.is_ident("skip") {
                options.skip = true;
            } else if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            }
            Ok(())
        })?;
    }

    Ok(options)
}
