//! Parsing of `#[record(...)]` and the `#[serde(...)]` keys the engine honours.

use syn::{spanned::Spanned, Attribute, Expr, ExprLit, Lit, Meta};

const OPT_OUT_KEY: &str = "-";
const TRUE_LITERAL: &str = "true";

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub key: Option<String>,
    pub required: bool,
    pub skip: bool,
    pub serde_rename: Option<String>,
    pub serde_skip: bool,
}

impl FieldAttrs {
    /// `#[record(key)]` wins over `#[serde(rename)]`; a serde-skipped field
    /// without a record key is opted out.
    pub fn resolved_key(&self) -> Option<&str> {
        if let Some(key) = &self.key {
            return Some(key);
        }
        if let Some(rename) = &self.serde_rename {
            return Some(rename);
        }
        if self.serde_skip {
            return Some(OPT_OUT_KEY);
        }
        None
    }

    pub fn is_opted_out(&self) -> bool {
        self.resolved_key() == Some(OPT_OUT_KEY)
    }
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs {
        if attr.path().is_ident("record") {
            for meta in parse_meta_list(attr)? {
                match meta {
                    Meta::NameValue(meta) if meta.path.is_ident("key") => {
                        out.key = Some(parse_string_expr(&meta.value, meta.span())?);
                    }
                    Meta::Path(path) if path.is_ident("required") => out.required = true,
                    Meta::NameValue(meta) if meta.path.is_ident("required") => {
                        out.required = parse_flag_expr(&meta.value, meta.span())?;
                    }
                    Meta::Path(path) if path.is_ident("skip") => out.skip = true,
                    Meta::NameValue(meta) if meta.path.is_ident("skip") => {
                        out.skip = parse_flag_expr(&meta.value, meta.span())?;
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            meta,
                            "unsupported #[record(...)] attribute; hint: use key = \"...\", required or skip",
                        ))
                    }
                }
            }
        }

        if attr.path().is_ident("serde") {
            // Other serde keys are serde's business.
            for meta in parse_meta_list(attr)? {
                match meta {
                    Meta::NameValue(meta) if meta.path.is_ident("rename") => {
                        out.serde_rename = Some(parse_string_expr(&meta.value, meta.span())?);
                    }
                    Meta::Path(path) if path.is_ident("skip") => out.serde_skip = true,
                    _ => {}
                }
            }
        }
    }
    Ok(out)
}

pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("record")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "#[record(...)] is only supported on fields; hint: annotate each field instead",
        )),
        None => Ok(()),
    }
}

fn parse_meta_list(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    let list = attr
        .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)?;
    Ok(list.into_iter().collect())
}

fn parse_string_expr(expr: &Expr, span: proc_macro2::Span) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        _ => Err(syn::Error::new(
            span,
            "expected string literal; hint: wrap the value in quotes",
        )),
    }
}

/// Flags are set only by the literal `"true"` (or `true`); any other string
/// leaves them unset.
fn parse_flag_expr(expr: &Expr, span: proc_macro2::Span) -> syn::Result<bool> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value() == TRUE_LITERAL),
        Expr::Lit(ExprLit {
            lit: Lit::Bool(b), ..
        }) => Ok(b.value()),
        _ => Err(syn::Error::new(
            span,
            "expected \"true\", \"false\" or a boolean literal",
        )),
    }
}
