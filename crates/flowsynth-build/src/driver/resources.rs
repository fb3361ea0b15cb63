use super::Synthesizer;
use crate::{
    Error,
    buffer::StatementKind,
    naming::{self, Position},
    resource::{ResourceRegistry, should_generate},
};
use proc_macro2::Literal;
use quote::quote;
use tracing::debug;

/// Load every resource, emit the ones whose loader wants them serialized,
/// then let factories see the loaded set.
pub(super) fn emit(s: &mut Synthesizer<'_>) -> Result<(), Error> {
    let descriptor = s.descriptor;
    let loaders = s.env.loaders;
    let app = naming::app();

    for (i, config) in descriptor.resources.iter().enumerate() {
        let kind = ResourceRegistry::kind_of(config)?;
        let loader = loaders.loader(kind, &config.id)?;
        let resource = loader.load(config)?;

        if should_generate(loader) {
            let ident = Position::Resource(i).ident();
            let id = config.id.as_str();
            let bytes = Literal::byte_string(config.data_bytes());

            s.buffer.push(
                StatementKind::ResourceLiteral,
                quote!(let #ident: &[u8] = #bytes;),
            );
            s.buffer.push(
                StatementKind::ResourceRegistration,
                quote!(#app.add_resource(#id, #ident);),
            );
        } else {
            debug!(id = %config.id, kind, "resource kept out of generated program");
        }

        s.resources.insert(resource);
    }

    s.env
        .factories
        .initialize_all(&s.resources)
        .map_err(|(reference, source)| Error::Generator { reference, source })
}
