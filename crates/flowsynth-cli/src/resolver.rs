use flowsynth_build::resolve::{ContributorDescriptor, DependencyResolver, ResolveError};
use flowsynth_config::Config;
use flowsynth_descriptor::Import;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// File a contribution ships at the root of its import path.
pub const CONTRIBUTION_DESCRIPTOR: &str = "descriptor.json";

///
/// ContributionResolver
///
/// Kinds declared in config win. Otherwise `<root>/<import path>/descriptor.json`
/// is read from each search root in order, then from the working directory.
///

pub struct ContributionResolver<'a> {
    config: &'a Config,
}

impl<'a> ContributionResolver<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn candidates(&self, work_dir: &Path, import: &Import) -> Vec<PathBuf> {
        self.config
            .search_roots
            .iter()
            .map(PathBuf::as_path)
            .chain([work_dir])
            .map(|root| root.join(import.path()).join(CONTRIBUTION_DESCRIPTOR))
            .collect()
    }
}

impl DependencyResolver for ContributionResolver<'_> {
    fn resolve(
        &self,
        work_dir: &Path,
        import: &Import,
    ) -> Result<ContributorDescriptor, ResolveError> {
        if let Some(kind) = self.config.contribution_kind(import.path()) {
            return Ok(ContributorDescriptor::new(import.canonical_alias(), kind));
        }

        let Some(path) = self
            .candidates(work_dir, import)
            .into_iter()
            .find(|candidate| candidate.is_file())
        else {
            return Err(ResolveError::NotFound(import.to_string()));
        };

        let text = fs::read_to_string(&path).map_err(|source| ResolveError::Io {
            path: path.clone(),
            source,
        })?;
        let descriptor = serde_json::from_str::<ContributorDescriptor>(&text)
            .map_err(|source| ResolveError::Descriptor {
                path: path.clone(),
                source,
            })?;

        debug!(import = %import, path = %path.display(), kind = %descriptor.kind, "read contribution descriptor");

        Ok(descriptor)
    }
}
