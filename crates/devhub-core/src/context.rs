// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API holder handed to visibility predicates at render time.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Capability lookup for predicates that need access to frontend APIs.
///
/// APIs are registered under a string id and retrieved by concrete type.
#[derive(Clone, Default)]
pub struct ApiContext {
    apis: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ApiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an API implementation under `id`, replacing any previous one.
    pub fn register<T: Any + Send + Sync>(&mut self, id: impl Into<String>, api: T) {
        self.apis.insert(id.into(), Arc::new(api));
    }

    /// Look up an API by id. Returns `None` if absent or of another type.
    pub fn get<T: Any + Send + Sync>(&self, id: &str) -> Option<&T> {
        self.apis.get(id)?.downcast_ref::<T>()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.apis.contains_key(id)
    }
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.apis.keys().collect();
        ids.sort();
        f.debug_struct("ApiContext").field("apis", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FeatureFlags(Vec<&'static str>);

    #[test]
    fn register_and_get_by_type() {
        let mut ctx = ApiContext::new();
        ctx.register("core.featureflags", FeatureFlags(vec!["beta"]));

        let flags = ctx.get::<FeatureFlags>("core.featureflags").unwrap();
        assert_eq!(flags.0, vec!["beta"]);
        assert!(ctx.contains("core.featureflags"));
    }

    #[test]
    fn wrong_type_or_missing_id_is_none() {
        let mut ctx = ApiContext::new();
        ctx.register("core.featureflags", 5u32);
        assert!(ctx.get::<FeatureFlags>("core.featureflags").is_none());
        assert!(ctx.get::<u32>("core.other").is_none());
    }
}
