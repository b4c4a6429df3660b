//! Academy test utilities.
//!
//! Helpers for integration testing: permission fixture builders and
//! document assembly for navigation tests. Fixtures render to the JSON
//! shape the authorization API emits (empty-string parent for roots).

use serde_json::{Map, Value as JsonValue, json};

/// Create a menu entry fixture bound to a view.
pub fn menu_entry(id: &str, route: &str, component: &str) -> TestEntry {
    TestEntry {
        id: id.to_string(),
        parent_id: None,
        kind: "menu",
        route: route.to_string(),
        component: Some(component.to_string()),
        label: format!("app.{id}.title"),
        order: None,
        hidden: false,
        frame_src: None,
        children: Vec::new(),
    }
}

/// Create a catalogue entry fixture.
pub fn catalogue_entry(id: &str, route: &str) -> TestEntry {
    TestEntry {
        id: id.to_string(),
        parent_id: None,
        kind: "catalogue",
        route: route.to_string(),
        component: None,
        label: format!("app.{id}.title"),
        order: None,
        hidden: false,
        frame_src: None,
        children: Vec::new(),
    }
}

/// A permission entry fixture.
#[derive(Debug, Clone)]
pub struct TestEntry {
    pub id: String,
    pub parent_id: Option<String>,
    pub kind: &'static str,
    pub route: String,
    pub component: Option<String>,
    pub label: String,
    pub order: Option<i32>,
    pub hidden: bool,
    pub frame_src: Option<String>,
    pub children: Vec<TestEntry>,
}

impl TestEntry {
    /// Set the parent identifier.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent_id = Some(parent.to_string());
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Set the sort weight.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Mark as hidden from menu rendering.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set an external frame source.
    pub fn with_frame_src(mut self, src: &str) -> Self {
        self.frame_src = Some(src.to_string());
        self
    }

    /// Nest a child entry (its parent id is set to this entry).
    pub fn with_child(mut self, child: TestEntry) -> Self {
        self.children.push(child.with_parent(&self.id));
        self
    }

    /// Render as a JSON object in the shape the permission API emits.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        obj.insert("id".to_string(), json!(self.id));
        obj.insert(
            "parent_id".to_string(),
            json!(self.parent_id.clone().unwrap_or_default()),
        );
        obj.insert("kind".to_string(), json!(self.kind));
        obj.insert("route".to_string(), json!(self.route));
        obj.insert("label".to_string(), json!(self.label));

        if let Some(component) = &self.component {
            obj.insert("component".to_string(), json!(component));
        }
        if let Some(order) = self.order {
            obj.insert("order".to_string(), json!(order));
        }
        if self.hidden {
            obj.insert("hidden".to_string(), json!(true));
        }
        if let Some(src) = &self.frame_src {
            obj.insert("frame_src".to_string(), json!(src));
        }
        if !self.children.is_empty() {
            obj.insert(
                "children".to_string(),
                JsonValue::Array(self.children.iter().map(TestEntry::to_json).collect()),
            );
        }

        JsonValue::Object(obj)
    }
}

/// Assemble entries into a permission document.
pub fn permission_document(entries: &[TestEntry]) -> String {
    JsonValue::Array(entries.iter().map(TestEntry::to_json).collect()).to_string()
}
