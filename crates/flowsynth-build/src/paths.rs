use crate::Error;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Path;

/// Environment variable overriding the runtime crate root.
pub const RUNTIME_CRATE_ENV: &str = "FLOWSYNTH_RUNTIME_CRATE";

/// Runtime crate generated programs link against unless overridden.
pub const DEFAULT_RUNTIME_CRATE: &str = "::flow_core";

/// Header module names the runtime contributes; descriptor aliases may not
/// shadow them.
pub const RUNTIME_MODULES: &[&str] = &["api", "channels", "data", "engine"];

// env_root
// an empty variable counts as unset
fn env_root(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

///
/// RuntimePaths
///
/// Resolves the module paths generated code uses for the builder API.
/// `FLOWSYNTH_RUNTIME_CRATE` overrides the configured root.
///

#[derive(Clone, Debug)]
pub struct RuntimePaths {
    root: Path,
}

impl RuntimePaths {
    /// Paths rooted at an explicit crate path such as `::flow_core`.
    pub fn new(root: &str) -> Result<Self, Error> {
        let root = syn::parse_str::<Path>(root.trim())
            .map_err(|_| Error::InvalidRuntimePath(root.to_string()))?;

        Ok(Self { root })
    }

    /// Resolve the root from the environment, falling back to `configured`
    /// and then to `DEFAULT_RUNTIME_CRATE`. A set variable that is not a
    /// path is an error, not a fallback.
    pub fn resolve(configured: Option<&str>) -> Result<Self, Error> {
        if let Some(root) = env_root(RUNTIME_CRATE_ENV) {
            return Self::new(&root);
        }

        Self::new(configured.unwrap_or(DEFAULT_RUNTIME_CRATE))
    }

    #[must_use]
    pub const fn root(&self) -> &Path {
        &self.root
    }

    /// `use` path of a runtime header module (`api`, `engine`, `data`, `channels`).
    #[must_use]
    pub fn module(&self, name: &str) -> TokenStream {
        let root = &self.root;

        match name {
            "channels" => quote!(#root::engine::channels),
            _ => {
                let ident = format_ident!("{name}");
                quote!(#root::#ident)
            }
        }
    }
}

impl Default for RuntimePaths {
    fn default() -> Self {
        Self {
            root: syn::parse_quote!(::flow_core),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TempEnv {
        key: &'static str,
        prev: Option<String>,
    }

    impl TempEnv {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let prev = env::var(key).ok();
            unsafe {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
            Self { key, prev }
        }
    }

    impl Drop for TempEnv {
        fn drop(&mut self) {
            unsafe {
                match &self.prev {
                    Some(value) => env::set_var(self.key, value),
                    None => env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn falls_back_to_configured_then_default_root() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _root = TempEnv::set(RUNTIME_CRATE_ENV, None);

        let configured = RuntimePaths::resolve(Some("my_runtime")).unwrap();
        let default = RuntimePaths::resolve(None).unwrap();

        assert_eq!(configured.module("api").to_string(), quote!(my_runtime::api).to_string());
        assert_eq!(
            default.module("channels").to_string(),
            quote!(::flow_core::engine::channels).to_string()
        );
    }

    #[test]
    fn honors_env_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _root = TempEnv::set(RUNTIME_CRATE_ENV, Some("custom::runtime"));

        let paths = RuntimePaths::resolve(Some("ignored")).unwrap();

        assert_eq!(paths.module("data").to_string(), quote!(custom::runtime::data).to_string());
    }

    #[test]
    fn invalid_env_override_is_an_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _root = TempEnv::set(RUNTIME_CRATE_ENV, Some("not a path"));

        let err = RuntimePaths::resolve(Some("my_runtime")).unwrap_err();

        assert!(matches!(err, Error::InvalidRuntimePath(ref root) if root == "not a path"));
    }

    #[test]
    fn empty_env_override_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _root = TempEnv::set(RUNTIME_CRATE_ENV, Some("  "));

        let paths = RuntimePaths::resolve(Some("my_runtime")).unwrap();

        assert_eq!(paths.module("api").to_string(), quote!(my_runtime::api).to_string());
    }

    #[test]
    fn debug_shows_the_root() {
        let paths = RuntimePaths::new("::flow_core").unwrap();

        assert!(format!("{paths:?}").contains("flow_core"));
    }

    #[test]
    fn rejects_invalid_root() {
        assert!(matches!(
            RuntimePaths::new("not a path"),
            Err(Error::InvalidRuntimePath(_))
        ));
    }
}
