use super::{Synthesizer, error_check};
use crate::{
    Error,
    buffer::StatementKind,
    literal,
    naming::{self, Position},
};
use flowsynth_descriptor::ActionConfig;
use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::quote;
use tracing::debug;

/// Application-scope actions, each added to the app under its id.
pub(super) fn emit(s: &mut Synthesizer<'_>) -> Result<(), Error> {
    let descriptor = s.descriptor;
    let app = naming::app();

    for (i, action) in descriptor.actions.iter().enumerate() {
        let (alias, path) = s.bind_reference(&action.reference)?;
        let settings = Position::ActionSettings(i).ident();
        emit_settings(s, &settings, &path, action)?;

        let target = Position::Action(i).ident();
        let id = action.id.as_str();
        s.buffer.push(
            StatementKind::AddAction,
            quote!(let #target = #app.add_action(#id, #alias::Action::default(), #settings);),
        );
        s.buffer.push(StatementKind::ErrorCheck, error_check(&target));
    }

    Ok(())
}

/// Bind `settings` for an action, through the factory's generator when it has
/// one and as a literal of the raw settings map otherwise.
pub(super) fn emit_settings(
    s: &mut Synthesizer<'_>,
    settings: &Ident,
    path: &str,
    config: &ActionConfig,
) -> Result<(), Error> {
    let generated = match s
        .env
        .factories
        .get(path)
        .and_then(|factory| factory.as_generator())
    {
        Some(generator) => Some(
            generator
                .generate(settings, &s.registry, config)
                .map_err(|source| Error::Generator {
                    reference: config.reference.clone(),
                    source,
                })?,
        ),
        None => None,
    };

    match generated {
        Some(fragment) => {
            bind_fragment_aliases(s, &fragment);
            s.buffer.push(StatementKind::GeneratedSettings, fragment);
        }
        None => {
            debug!(reference = %config.reference, "no settings generator, emitting literal");

            let value = literal::settings(&config.settings);
            s.buffer.push(
                StatementKind::LiteralSettings,
                quote!(let #settings = #value;),
            );
        }
    }

    Ok(())
}

// bind_fragment_aliases
// any registered alias a generated fragment uses as a path root gets a bound
// header import, side-effect imports included
fn bind_fragment_aliases(s: &mut Synthesizer<'_>, fragment: &TokenStream) {
    let mut trees = fragment.clone().into_iter().peekable();

    while let Some(tree) = trees.next() {
        match tree {
            TokenTree::Ident(ident) => {
                let is_path_root = matches!(
                    trees.peek(),
                    Some(TokenTree::Punct(punct)) if punct.as_char() == ':'
                );
                let name = ident.to_string();

                if is_path_root && s.registry.get(&name).is_some() {
                    s.buffer.bind_import(&name);
                }
            }
            TokenTree::Group(group) => bind_fragment_aliases(s, &group.stream()),
            TokenTree::Punct(_) | TokenTree::Literal(_) => {}
        }
    }
}
