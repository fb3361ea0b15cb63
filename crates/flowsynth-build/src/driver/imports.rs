use super::Synthesizer;
use crate::{
    Error,
    buffer::{Binding, HeaderImport},
};
use flowsynth_descriptor::ImportError;
use quote::{format_ident, quote};
use tracing::debug;

/// Runtime modules every generated program imports.
const FIXED_MODULES: [&str; 2] = ["api", "engine"];

/// Register every descriptor import and add its header line.
///
/// Activity contributions are linked for side effects only; the header
/// upgrades them to a bound alias if the body references them later.
pub(super) fn register(s: &mut Synthesizer<'_>) -> Result<(), Error> {
    let imports = s.descriptor.parsed_imports()?;

    for import in imports {
        let alias = import.canonical_alias().to_string();
        s.registry.register(&alias, import.clone())?;

        let contributor = s.env.resolver.resolve(&s.work_dir, &import)?;
        let kind = contributor.contrib_kind();
        s.env
            .context
            .aliases_mut()
            .register(kind, &alias, import.module_path())?;

        let path = syn::parse_str::<syn::Path>(import.module_path()).map_err(|_| {
            ImportError::InvalidPath {
                import: import.to_string(),
                path: import.module_path().to_string(),
            }
        })?;
        let ident = format_ident!("{alias}");
        let binding = if contributor.is_activity() {
            Binding::SideEffect(ident)
        } else {
            Binding::Alias(ident)
        };

        debug!(alias = %alias, kind, path = import.module_path(), "registered import");
        s.buffer.add_import(
            &alias,
            HeaderImport {
                path: quote!(#path),
                binding,
            },
        );
    }

    for module in FIXED_MODULES {
        s.buffer.add_import(
            module,
            HeaderImport {
                path: s.paths.module(module),
                binding: Binding::Module,
            },
        );
    }

    Ok(())
}
