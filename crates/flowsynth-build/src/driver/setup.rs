use super::Synthesizer;
use crate::{Error, support::PropertyManager};
use tracing::debug;

pub(super) fn register_schemas(s: &mut Synthesizer<'_>) -> Result<(), Error> {
    let descriptor = s.descriptor;

    for (id, def) in &descriptor.schemas {
        s.env.schemas.register(id, def)?;
    }
    s.env.schemas.resolve_all()?;

    debug!(count = descriptor.schemas.len(), "schemas resolved");

    Ok(())
}

// install_properties
// later duplicates of a name win, matching map insertion
pub(super) fn install_properties(s: &mut Synthesizer<'_>) {
    let values = s
        .descriptor
        .properties
        .iter()
        .map(|property| (property.name.clone(), property.value.clone()))
        .collect();

    s.env
        .context
        .set_default_properties(PropertyManager::new(values));
}
