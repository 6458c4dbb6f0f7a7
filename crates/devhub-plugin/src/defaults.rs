// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-category defaulting of raw plugin config entries.
//!
//! Each raw entry type maps to its resolved form in exactly one place. The
//! `scope` always comes from the caller, never from the entry.

use devhub_config::model::{
    RawAppIcon, RawBindingTarget, RawDynamicRoute, RawEntityTab, RawModuleImport, RawMountPoint,
    RawRouteMenuItem, RawSignInPage, RawTechdocsAddon, RawTheme, RawTranslationResource,
};

use crate::types::{
    AppIcon, BindingTarget, DynamicRoute, DynamicRouteMenuItem, EntityTabEntry, MenuItemComponent,
    ModuleEntry, MountPoint, TechdocsAddon, ThemeEntry, TranslationResource,
};

/// Module used when an entry names none.
pub const DEFAULT_MODULE: &str = "PluginRoot";

/// Export used when an entry names none.
pub const DEFAULT_IMPORT_NAME: &str = "default";

/// Turns a raw entry into its resolved form for the given scope.
pub trait ApplyDefaults {
    type Output;

    /// `None` when the entry cannot be registered at all.
    fn apply_defaults(&self, scope: &str) -> Option<Self::Output>;
}

pub fn module_or_default(module: Option<&str>) -> String {
    module.unwrap_or(DEFAULT_MODULE).to_string()
}

pub fn import_name_or_default(import_name: Option<&str>) -> String {
    import_name.unwrap_or(DEFAULT_IMPORT_NAME).to_string()
}

impl ApplyDefaults for RawModuleImport {
    type Output = ModuleEntry;

    fn apply_defaults(&self, scope: &str) -> Option<ModuleEntry> {
        Some(ModuleEntry {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
        })
    }
}

/// A sign-in page without an import name is dropped, not defaulted.
impl ApplyDefaults for RawSignInPage {
    type Output = ModuleEntry;

    fn apply_defaults(&self, scope: &str) -> Option<ModuleEntry> {
        let import_name = self.import_name.as_deref().filter(|name| !name.is_empty())?;
        Some(ModuleEntry {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name.to_string(),
        })
    }
}

impl ApplyDefaults for RawDynamicRoute {
    type Output = DynamicRoute;

    fn apply_defaults(&self, scope: &str) -> Option<DynamicRoute> {
        let menu_item = self.menu_item.as_ref().map(|item| match item {
            RawRouteMenuItem::Text(text) => DynamicRouteMenuItem::Text(text.clone()),
            RawRouteMenuItem::Component(component) => {
                DynamicRouteMenuItem::Component(MenuItemComponent {
                    module: module_or_default(component.module.as_deref()),
                    import_name: component.import_name.clone(),
                    config: component.config.clone(),
                })
            }
        });
        Some(DynamicRoute {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            path: self.path.clone(),
            menu_item,
            config: self.config.clone(),
        })
    }
}

impl ApplyDefaults for RawMountPoint {
    type Output = MountPoint;

    fn apply_defaults(&self, scope: &str) -> Option<MountPoint> {
        Some(MountPoint {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            mount_point: self.mount_point.clone(),
            config: self.config.clone(),
        })
    }
}

impl ApplyDefaults for RawAppIcon {
    type Output = AppIcon;

    fn apply_defaults(&self, scope: &str) -> Option<AppIcon> {
        Some(AppIcon {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            name: self.name.clone(),
        })
    }
}

/// `name` falls back to the resolved import name.
impl ApplyDefaults for RawBindingTarget {
    type Output = BindingTarget;

    fn apply_defaults(&self, scope: &str) -> Option<BindingTarget> {
        let import_name = import_name_or_default(self.import_name.as_deref());
        Some(BindingTarget {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            name: self.name.clone().unwrap_or_else(|| import_name.clone()),
            import_name,
        })
    }
}

impl ApplyDefaults for RawTechdocsAddon {
    type Output = TechdocsAddon;

    fn apply_defaults(&self, scope: &str) -> Option<TechdocsAddon> {
        Some(TechdocsAddon {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            config: self.config.clone(),
        })
    }
}

impl ApplyDefaults for RawTheme {
    type Output = ThemeEntry;

    fn apply_defaults(&self, scope: &str) -> Option<ThemeEntry> {
        Some(ThemeEntry {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            id: self.id.clone(),
            title: self.title.clone(),
            variant: self.variant,
            icon: self.icon.clone(),
        })
    }
}

impl ApplyDefaults for RawTranslationResource {
    type Output = TranslationResource;

    fn apply_defaults(&self, scope: &str) -> Option<TranslationResource> {
        Some(TranslationResource {
            scope: scope.to_string(),
            module: module_or_default(self.module.as_deref()),
            import_name: import_name_or_default(self.import_name.as_deref()),
            translation_ref: self.translation_ref.clone(),
            json_translations: self.json_translations.clone().unwrap_or_default(),
        })
    }
}

/// Entity tabs import nothing; only the scope is added.
impl ApplyDefaults for RawEntityTab {
    type Output = EntityTabEntry;

    fn apply_defaults(&self, scope: &str) -> Option<EntityTabEntry> {
        Some(EntityTabEntry {
            scope: scope.to_string(),
            mount_point: self.mount_point.clone(),
            path: self.path.clone(),
            title: self.title.clone(),
            priority: self.priority,
        })
    }
}
