
use std::env;

use tempfile::TempDir;

/// Restores an environment variable to its previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with AUTHAPI_CONFIG_DIR pointing at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("AUTHAPI_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Admin password is the one required value without a default
pub(crate) fn with_admin_password() -> EnvGuard {
    EnvGuard::set("AUTHAPI_KEYCLOAK_ADMIN_PASSWORD", "admin-password")
}

/// Header-based subject resolution, for validating the other sections
pub(crate) fn with_auth_disabled() -> EnvGuard {
    EnvGuard::set("AUTHAPI_AUTH_ENABLED", "false")
}
