// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sidebar menu extraction.
//!
//! Two partial sets of nodes are built independently:
//!
//! - route nodes, from the text form of each dynamic route's `menuItem`;
//! - overrides, from every scope's `menuItems` map, merged field by field
//!   with later scopes winning.
//!
//! A single merge pass then patches route nodes with their overrides (the
//! override wins on every field it sets) or creates a node for an override
//! no route produced, and the flat node set is assembled into a tree.
//!
//! A node whose parent does not exist, names itself, or lies on a parent
//! cycle becomes a root. Every node appears exactly once.

use std::collections::{HashMap, HashSet};

use devhub_config::model::{MenuItemConfig, RawRouteMenuItem};
use devhub_config::FrontendConfig;
use indexmap::IndexMap;
use tracing::debug;

use crate::types::MenuItem;

#[derive(Debug, Clone, Default)]
struct MenuNode {
    title: String,
    icon: String,
    priority: Option<i64>,
    to: Option<String>,
    parent: Option<String>,
    enabled: Option<bool>,
}

/// Node name derived from a route path: `/admin/plugins` is `admin.plugins`,
/// `/` is `root`.
pub fn route_node_name(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "root".to_string()
    } else {
        trimmed.replace('/', ".")
    }
}

/// Build the menu tree contributed by every scope.
pub fn extract_menu_items(frontend: &FrontendConfig) -> Vec<MenuItem> {
    let routes = route_nodes(frontend);
    let overrides = override_nodes(frontend);
    let nodes = merge(routes, overrides);
    build_tree(nodes)
}

fn route_nodes(frontend: &FrontendConfig) -> IndexMap<String, MenuNode> {
    let mut nodes = IndexMap::new();
    for (_, props) in frontend.iter() {
        for route in &props.dynamic_routes {
            let Some(RawRouteMenuItem::Text(item)) = &route.menu_item else {
                continue;
            };
            nodes.insert(
                route_node_name(&route.path),
                MenuNode {
                    title: item.text.clone(),
                    icon: item.icon.clone(),
                    priority: item.priority,
                    to: Some(route.path.clone()),
                    parent: item.parent.clone(),
                    enabled: item.enabled,
                },
            );
        }
    }
    nodes
}

fn override_nodes(frontend: &FrontendConfig) -> IndexMap<String, MenuItemConfig> {
    let mut overrides: IndexMap<String, MenuItemConfig> = IndexMap::new();
    for (_, props) in frontend.iter() {
        for (name, item) in &props.menu_items {
            let merged = overrides.entry(name.clone()).or_default();
            if item.title.is_some() {
                merged.title.clone_from(&item.title);
            }
            if item.icon.is_some() {
                merged.icon.clone_from(&item.icon);
            }
            if item.priority.is_some() {
                merged.priority = item.priority;
            }
            if item.parent.is_some() {
                merged.parent.clone_from(&item.parent);
            }
        }
    }
    overrides
}

fn merge(
    mut nodes: IndexMap<String, MenuNode>,
    overrides: IndexMap<String, MenuItemConfig>,
) -> IndexMap<String, MenuNode> {
    for (name, config) in overrides {
        let node = nodes.entry(name).or_default();
        if let Some(title) = config.title {
            node.title = title;
        }
        if let Some(icon) = config.icon {
            node.icon = icon;
        }
        if config.priority.is_some() {
            node.priority = config.priority;
        }
        if config.parent.is_some() {
            node.parent = config.parent;
        }
    }
    nodes
}

/// Parent actually used for `name`, or `None` when the node is a root.
fn effective_parent<'a>(name: &str, nodes: &'a IndexMap<String, MenuNode>) -> Option<&'a str> {
    let parent = nodes.get(name)?.parent.as_deref()?;
    if parent == name || !nodes.contains_key(parent) {
        return None;
    }
    let mut seen = HashSet::new();
    let mut current = Some(parent);
    while let Some(ancestor) = current {
        if ancestor == name {
            debug!(item = name, parent, "menu item parent chain loops back; treating it as a root");
            return None;
        }
        if !seen.insert(ancestor) {
            break;
        }
        current = nodes
            .get(ancestor)
            .and_then(|node| node.parent.as_deref())
            .filter(|next| nodes.contains_key(*next));
    }
    Some(parent)
}

fn build_tree(nodes: IndexMap<String, MenuNode>) -> Vec<MenuItem> {
    let mut roots = Vec::new();
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for name in nodes.keys() {
        match effective_parent(name, &nodes) {
            Some(parent) => children.entry(parent).or_default().push(name.as_str()),
            None => roots.push(name.as_str()),
        }
    }
    assemble(&roots, &nodes, &children)
}

fn assemble(
    names: &[&str],
    nodes: &IndexMap<String, MenuNode>,
    children: &HashMap<&str, Vec<&str>>,
) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = names
        .iter()
        .filter_map(|name| {
            let node = nodes.get(*name)?;
            let kids = children.get(name).map(Vec::as_slice).unwrap_or_default();
            Some(MenuItem {
                name: name.to_string(),
                title: node.title.clone(),
                icon: node.icon.clone(),
                children: assemble(kids, nodes, children),
                priority: node.priority,
                to: node.to.clone(),
                parent: node.parent.clone(),
                enabled: node.enabled,
            })
        })
        .collect();
    // Stable: equal priorities keep aggregation order.
    items.sort_by_key(|item| std::cmp::Reverse(item.priority.unwrap_or(0)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use devhub_config::CustomProperties;
    use serde_json::json;

    fn frontend(value: serde_json::Value) -> FrontendConfig {
        FrontendConfig::from_value(&value)
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn node_names_from_paths() {
        assert_eq!(route_node_name("/"), "root");
        assert_eq!(route_node_name("/extensions"), "extensions");
        assert_eq!(route_node_name("/admin/plugins/"), "admin.plugins");
    }

    #[test]
    fn route_menu_items_become_roots() {
        let items = extract_menu_items(&frontend(json!({
            "acme.a": { "dynamicRoutes": [
                { "path": "/a", "menuItem": { "text": "A", "icon": "a" } },
                { "path": "/hidden" }
            ]}
        })));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "a");
        assert_eq!(items[0].title, "A");
        assert_eq!(items[0].to.as_deref(), Some("/a"));
    }

    #[test]
    fn override_patches_route_node_and_nests_it() {
        let items = extract_menu_items(&frontend(json!({
            "acme.ext": { "dynamicRoutes": [
                { "path": "/extensions", "menuItem": { "text": "Plugins", "icon": "plugins" } }
            ]},
            "acme.admin": { "menuItems": {
                "admin": { "title": "Administration", "icon": "admin" },
                "extensions": { "parent": "admin", "priority": 5 }
            }}
        })));
        assert_eq!(names(&items), vec!["admin"]);
        let ext = &items[0].children[0];
        assert_eq!(ext.name, "extensions");
        assert_eq!(ext.title, "Plugins");
        assert_eq!(ext.priority, Some(5));
        assert_eq!(ext.to.as_deref(), Some("/extensions"));
    }

    #[test]
    fn child_declared_before_parent_resolves() {
        let items = extract_menu_items(&frontend(json!({
            "acme.a": { "menuItems": { "child": { "title": "Child", "parent": "group" } } },
            "acme.b": { "menuItems": { "group": { "title": "Group" } } }
        })));
        assert_eq!(names(&items), vec!["group"]);
        assert_eq!(names(&items[0].children), vec!["child"]);
    }

    #[test]
    fn missing_self_and_cyclic_parents_become_roots() {
        let items = extract_menu_items(&frontend(json!({
            "acme": { "menuItems": {
                "orphan": { "title": "O", "parent": "nowhere" },
                "selfish": { "title": "S", "parent": "selfish" },
                "x": { "title": "X", "parent": "y" },
                "y": { "title": "Y", "parent": "x" },
                "z": { "title": "Z", "parent": "x" }
            }}
        })));
        assert_eq!(names(&items), vec!["orphan", "selfish", "x", "y"]);
        assert_eq!(names(&items[2].children), vec!["z"]);
    }

    #[test]
    fn later_scope_override_wins_per_field() {
        let items = extract_menu_items(&frontend(json!({
            "acme.a": { "menuItems": { "docs": { "title": "Docs", "icon": "book" } } },
            "acme.b": { "menuItems": { "docs": { "title": "Documentation" } } }
        })));
        assert_eq!(items[0].title, "Documentation");
        assert_eq!(items[0].icon, "book");
    }

    #[test]
    fn siblings_sort_by_priority_descending() {
        let items = extract_menu_items(&frontend(json!({
            "acme": { "menuItems": {
                "low": { "title": "Low" },
                "high": { "title": "High", "priority": 10 },
                "neg": { "title": "Neg", "priority": -1 },
                "zero": { "title": "Zero", "priority": 0 }
            }}
        })));
        assert_eq!(names(&items), vec!["high", "low", "zero", "neg"]);
    }

    #[test]
    fn override_without_title_creates_blank_node() {
        let mut config = FrontendConfig::new();
        let mut props = CustomProperties::default();
        props.menu_items.insert(
            "bare".into(),
            MenuItemConfig {
                priority: Some(1),
                ..MenuItemConfig::default()
            },
        );
        config.insert("acme", props);
        let items = extract_menu_items(&config);
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].icon, "");
        assert!(items[0].to.is_none());
    }
}
