use super::{Synthesizer, actions::emit_settings, error_check};
use crate::{
    Error,
    buffer::StatementKind,
    literal,
    naming::{self, Position},
};
use flowsynth_descriptor::HandlerActionConfig;
use proc_macro2::Ident;
use quote::quote;
use serde_json::Value;
use std::collections::BTreeMap;

pub(super) fn emit(s: &mut Synthesizer<'_>) -> Result<(), Error> {
    let descriptor = s.descriptor;
    let app = naming::app();

    for (i, trigger) in descriptor.triggers.iter().enumerate() {
        let (alias, _) = s.bind_reference(&trigger.reference)?;
        let trg = Position::Trigger(i).ident();
        let settings = literal::settings(&trigger.settings);

        s.buffer.push(
            StatementKind::TriggerConstruction,
            quote!(let mut #trg = #app.new_trigger(#alias::Trigger::default(), #settings);),
        );

        for (j, handler) in trigger.handlers.iter().enumerate() {
            let target = Position::Handler(i, j).ident();
            let settings = literal::settings(&handler.settings);

            s.buffer.push(
                StatementKind::HandlerConstruction,
                quote!(let #target = #trg.new_handler(#settings);),
            );
            s.buffer.push(StatementKind::ErrorCheck, error_check(&target));

            for (k, action) in handler.actions.iter().enumerate() {
                handler_action(s, &target, (i, j, k), action)?;
            }
        }
    }

    Ok(())
}

fn handler_action(
    s: &mut Synthesizer<'_>,
    handler: &Ident,
    (i, j, k): (usize, usize, usize),
    config: &HandlerActionConfig,
) -> Result<(), Error> {
    let target = Position::HandlerAction(i, j, k).ident();

    if config.is_back_reference() {
        let id = config.action.id.as_str();
        s.buffer.push(
            StatementKind::ActionLookup,
            quote!(let #target = #handler.new_action_by_id(#id);),
        );
    } else {
        let (alias, path) = s.bind_reference(&config.action.reference)?;
        let settings = Position::HandlerActionSettings(i, j, k).ident();
        emit_settings(s, &settings, &path, &config.action)?;

        s.buffer.push(
            StatementKind::ActionConstruction,
            quote!(let #target = #handler.new_action(#alias::Action::default(), #settings);),
        );
    }
    s.buffer.push(StatementKind::ErrorCheck, error_check(&target));

    if !config.condition.is_empty() {
        let condition = config.condition.as_str();
        s.buffer.push(
            StatementKind::Condition,
            quote!(#target.set_condition(#condition);),
        );
    }

    if !config.input.is_empty() {
        let mappings = literal::string_list(&mapping_entries(&config.input));
        s.buffer.push(
            StatementKind::InputMappings,
            quote!(#target.set_input_mappings(#mappings);),
        );
    }

    if !config.output.is_empty() {
        let mappings = literal::string_list(&mapping_entries(&config.output));
        s.buffer.push(
            StatementKind::OutputMappings,
            quote!(#target.set_output_mappings(#mappings);),
        );
    }

    Ok(())
}

// mapping_entries
// key then expression with no separator, in key order; expressions are
// written with their leading `=` so "in" + "=$.x" reads "in=$.x"
fn mapping_entries(mappings: &BTreeMap<String, Value>) -> Vec<String> {
    mappings
        .iter()
        .map(|(key, value)| match value {
            Value::String(expr) => format!("{key}{expr}"),
            other => format!("{key}{other}"),
        })
        .collect()
}
