use super::{Synthesizer, error_check};
use crate::{
    buffer::{Binding, HeaderImport, StatementKind},
    literal::Literal,
    naming::{self, Position},
};
use quote::{format_ident, quote};

pub(super) fn properties(s: &mut Synthesizer<'_>) {
    let descriptor = s.descriptor;
    if descriptor.properties.is_empty() {
        return;
    }

    s.buffer.add_import(
        "data",
        HeaderImport {
            path: s.paths.module("data"),
            binding: Binding::Module,
        },
    );

    let app = naming::app();
    for property in &descriptor.properties {
        let name = property.name.as_str();
        let ty = format_ident!("{}", property.ty.variant_name());
        let value = Literal(&property.value);

        s.buffer.push(
            StatementKind::Property,
            quote!(#app.add_property(#name, data::Type::#ty, #value);),
        );
    }
}

/// Decode and create each channel. The first decode declares the result
/// locals; later ones reassign them.
pub(super) fn channels(s: &mut Synthesizer<'_>) {
    let descriptor = s.descriptor;
    if descriptor.channels.is_empty() {
        return;
    }

    s.buffer.add_import(
        "channels",
        HeaderImport {
            path: s.paths.module("channels"),
            binding: Binding::Module,
        },
    );

    let name = naming::channel_name();
    let size = naming::channel_buffer_size();
    for (i, channel) in descriptor.channels.iter().enumerate() {
        let channel = channel.as_str();
        let decode = if i == 0 {
            quote!(let (mut #name, mut #size) = channels::decode(#channel);)
        } else {
            quote!((#name, #size) = channels::decode(#channel);)
        };
        s.buffer.push(StatementKind::ChannelDecode, decode);

        let created = Position::Channel(i).ident();
        s.buffer.push(
            StatementKind::ChannelCreate,
            quote!(let #created = channels::new(&#name, #size);),
        );
        s.buffer.push(StatementKind::ErrorCheck, error_check(&created));
    }
}
