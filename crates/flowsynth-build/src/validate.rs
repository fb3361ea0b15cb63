use crate::Error;
use proc_macro2::TokenStream;
use std::{fs, path::Path};
use tracing::{debug, warn};

/// Destination reported for diagnostics of text that was never written.
pub const IN_MEMORY: &str = "<in-memory>";

/// Parse `raw` as a Rust source file and pretty-print it.
pub fn canonicalize(raw: &str) -> Result<String, syn::Error> {
    let file = syn::parse_file(raw)?;

    Ok(prettyplease::unparse(&file))
}

/// Write the assembled program to `destination`.
///
/// Canonical text is written when the program parses. Otherwise the raw text
/// is written for inspection and the parse diagnostic is returned.
pub fn write(destination: &Path, tokens: TokenStream) -> Result<(), Error> {
    let raw = tokens.to_string();

    match canonicalize(&raw) {
        Ok(text) => {
            write_text(destination, &text)?;
            debug!(path = %destination.display(), bytes = text.len(), "wrote program");

            Ok(())
        }
        Err(diagnostic) => {
            warn!(path = %destination.display(), %diagnostic, "generated program does not parse");
            write_text(destination, &raw)?;

            Err(Error::SynthesisSyntax {
                destination: destination.to_path_buf(),
                diagnostic,
            })
        }
    }
}

fn write_text(destination: &Path, text: &str) -> Result<(), Error> {
    fs::write(destination, text).map_err(|source| Error::OutputIo {
        path: destination.to_path_buf(),
        source,
    })
}
