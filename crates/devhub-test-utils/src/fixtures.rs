// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample plugin configurations.

use devhub_config::FrontendConfig;
use serde_json::{json, Value};

/// A `dynamicPlugins.frontend` value touching every category.
pub fn full_frontend_value() -> Value {
    json!({
        "acme.plugin-tech-radar": {
            "appIcons": [{ "name": "techRadarIcon", "importName": "TechRadarIcon" }],
            "dynamicRoutes": [{
                "path": "/tech-radar",
                "importName": "TechRadarPage",
                "menuItem": { "text": "Tech Radar", "icon": "techRadarIcon" },
                "config": { "props": { "width": 1500, "height": 800 } }
            }],
            "apiFactories": [{ "importName": "techRadarApi" }]
        },
        "acme.plugin-admin": {
            "pluginModule": "AdminModule",
            "dynamicRoutes": [{
                "path": "/extensions",
                "menuItem": { "text": "Plugins", "icon": "extension" }
            }],
            "menuItems": {
                "admin": { "title": "Administration", "icon": "admin", "priority": 10 },
                "extensions": { "parent": "admin" }
            },
            "mountPoints": [{
                "mountPoint": "entity.page.overview/cards",
                "importName": "ServiceCard",
                "config": {
                    "layout": { "gridColumnEnd": "span 4" },
                    "if": { "allOf": [{ "isKind": "component" }, { "isType": "service" }] }
                }
            }],
            "entityTabs": [{ "path": "/ci", "title": "CI", "mountPoint": "entity.page.ci" }],
            "signInPage": { "importName": "SignInPage" },
            "providerSettings": [{ "title": "GitHub", "description": "Sign in with GitHub", "provider": "core.auth.github" }]
        },
        "acme.plugin-docs": {
            "routeBindings": {
                "targets": [{ "importName": "techdocsPlugin" }],
                "bindings": [{ "bindTarget": "catalogPlugin.externalRoutes", "bindMap": { "viewTechDoc": "techdocsPlugin.routes.docRoot" } }]
            },
            "techdocsAddons": [{ "importName": "ReportIssue" }],
            "scaffolderFieldExtensions": [{ "importName": "RepoPicker" }],
            "analyticsApiExtensions": [{ "importName": "AnalyticsApi" }],
            "themes": [{ "id": "docs-dark", "title": "Docs Dark", "variant": "dark", "icon": "moon", "importName": "docsDark" }],
            "translationResources": [{ "importName": "docsTranslations", "ref": "docsTranslationRef" }]
        }
    })
}

pub fn full_frontend() -> FrontendConfig {
    FrontendConfig::from_value(&full_frontend_value())
}
