use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};
use std::collections::BTreeMap;

///
/// StatementKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum StatementKind {
    ActionConstruction,
    ActionLookup,
    AddAction,
    AppConstruction,
    ChannelCreate,
    ChannelDecode,
    Condition,
    EngineConstruction,
    EngineRun,
    ErrorCheck,
    GeneratedSettings,
    HandlerConstruction,
    InputMappings,
    LiteralSettings,
    OutputMappings,
    Property,
    ResourceLiteral,
    ResourceRegistration,
    TriggerConstruction,
}

///
/// Statement
///

#[derive(Clone, Debug)]
pub struct Statement {
    pub kind: StatementKind,
    pub tokens: TokenStream,
}

///
/// HeaderImport
///

#[derive(Clone, Debug)]
pub struct HeaderImport {
    pub path: TokenStream,
    pub binding: Binding,
}

///
/// Binding
///
/// `Module` imports the last path segment as is, `Alias` renames it, and
/// `SideEffect` links the package without binding a name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Binding {
    Module,
    Alias(Ident),
    SideEffect(Ident),
}

impl ToTokens for HeaderImport {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let path = &self.path;

        tokens.extend(match &self.binding {
            Binding::Module => quote!(use #path;),
            Binding::Alias(alias) => quote!(use #path as #alias;),
            Binding::SideEffect(_) => quote!(use #path as _;),
        });
    }
}

///
/// CodeBuffer
///
/// Header (module attributes + imports keyed by bound name) and an
/// append-only body. Consumed exactly once by `into_tokens`.
///

#[derive(Debug, Default)]
pub struct CodeBuffer {
    attrs: Vec<TokenStream>,
    imports: BTreeMap<String, HeaderImport>,
    body: Vec<Statement>,
}

impl CodeBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_attr(&mut self, attr: TokenStream) {
        self.attrs.push(attr);
    }

    /// Add a header import unless one is already present under `name`.
    /// Returns whether the import was newly added.
    pub fn add_import(&mut self, name: &str, import: HeaderImport) -> bool {
        if self.imports.contains_key(name) {
            return false;
        }
        self.imports.insert(name.to_string(), import);

        true
    }

    /// Turn a side-effect import into a bound alias because the body uses it.
    pub fn bind_import(&mut self, name: &str) {
        if let Some(import) = self.imports.get_mut(name)
            && let Binding::SideEffect(alias) = &import.binding
        {
            import.binding = Binding::Alias(alias.clone());
        }
    }

    #[must_use]
    pub fn import(&self, name: &str) -> Option<&HeaderImport> {
        self.imports.get(name)
    }

    pub fn imports(&self) -> impl Iterator<Item = (&str, &HeaderImport)> {
        self.imports.iter().map(|(name, import)| (name.as_str(), import))
    }

    pub fn push(&mut self, kind: StatementKind, tokens: TokenStream) {
        self.body.push(Statement { kind, tokens });
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.body
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<StatementKind> {
        self.body.iter().map(|statement| statement.kind).collect()
    }

    /// Concatenate header and body into one file-level token stream.
    #[must_use]
    pub fn into_tokens(self) -> TokenStream {
        let attrs = &self.attrs;
        let imports = self.imports.values();
        let body = self.body.iter().map(|statement| &statement.tokens);

        quote! {
            #(#attrs)*
            #(#imports)*

            fn main() -> ::std::result::Result<(), ::std::boxed::Box<dyn ::std::error::Error>> {
                #(#body)*

                Ok(())
            }
        }
    }
}
