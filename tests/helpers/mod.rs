//! Shared test helpers for the ownersgate integration tests.
#![allow(dead_code)]


use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use log::Level;
use serde_json::Value;

use ownersgate::adapters::MemoryView;
use ownersgate::logging::{AuditSink, FactsEmitter};

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl TestEmitter {
    pub fn events(&self) -> Vec<(String, String, String, Value)> {
        self.events.lock().unwrap().clone()
    }

    /// Facts for one event name, in emission order.
    pub fn of(&self, event: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|(_, e, _, _)| e == event)
            .map(|(_, _, _, f)| f)
            .collect()
    }
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// Audit sink that keeps every line.
#[derive(Clone, Default)]
pub struct TestAudit {
    pub lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl AuditSink for TestAudit {
    fn log(&self, level: Level, msg: &str) {
        self.lines.lock().unwrap().push((level, msg.to_string()));
    }
}

/// Build an in-memory tree from `(path, contents)` pairs.
pub fn memory_tree(files: &[(&str, &str)]) -> MemoryView {
    let mut v = MemoryView::new();
    for (path, body) in files {
        v = v.with_file(path, *body).unwrap();
    }
    v
}

pub fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
