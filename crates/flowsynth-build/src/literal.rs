//! Verbose value literals.
//!
//! Values are written as fully qualified, type-suffixed constructor
//! expressions, never as `json!` shorthand, so the generated program does not
//! depend on macros or inference to rebuild them.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde_json::{Map, Number, Value};

///
/// Literal
///

#[derive(Clone, Copy, Debug)]
pub struct Literal<'a>(pub &'a Value);

impl ToTokens for Literal<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self.0 {
            Value::Null => quote!(::serde_json::Value::Null),
            Value::Bool(b) => quote!(::serde_json::Value::Bool(#b)),
            Value::Number(n) => number(n),
            Value::String(s) => {
                let s = string(s);
                quote!(::serde_json::Value::String(#s))
            }
            Value::Array(items) => {
                let items = items.iter().map(Literal);
                quote!(::serde_json::Value::Array(::std::vec![#(#items),*]))
            }
            Value::Object(map) => {
                let map = map_literal(map);
                quote!(::serde_json::Value::Object(#map))
            }
        });
    }
}

/// Settings maps are emitted as `Value::Object` literals.
#[must_use]
pub fn settings(map: &Map<String, Value>) -> TokenStream {
    let map = map_literal(map);

    quote!(::serde_json::Value::Object(#map))
}

#[must_use]
pub fn string(s: &str) -> TokenStream {
    quote!(::std::string::String::from(#s))
}

#[must_use]
pub fn string_list(items: &[String]) -> TokenStream {
    let items = items.iter().map(|item| string(item));

    quote!(::std::vec![#(#items),*])
}

fn map_literal(map: &Map<String, Value>) -> TokenStream {
    if map.is_empty() {
        return quote!(::serde_json::Map::new());
    }

    let entries = map.iter().map(|(key, value)| {
        let key = string(key);
        let value = Literal(value);
        quote!((#key, #value))
    });

    quote!(::serde_json::Map::from_iter([#(#entries),*]))
}

// numbers keep their JSON representation class: signed, unsigned, or float
fn number(n: &Number) -> TokenStream {
    if let Some(i) = n.as_i64() {
        quote!(::serde_json::Value::from(#i))
    } else if let Some(u) = n.as_u64() {
        quote!(::serde_json::Value::from(#u))
    } else {
        let f = n.as_f64().unwrap_or_default();
        quote!(::serde_json::Value::from(#f))
    }
}
