//! Variable environment (§4.2).
//!
//! A flat, insertion-ordered, linear-scan mapping — this is what the spec
//! describes and a real program never binds enough variables for the
//! scan to matter, so there's no call to reach for the teacher's
//! hashmap-of-choice here.

use crate::value::Value;

#[derive(Default)]
pub struct Environment {
    slots: Vec<(Box<str>, Value)>,
}

impl Environment {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Unknown names read as `Int(0)`; this never fails.
    pub fn get(&self, name: &str) -> Value {
        self.slots
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or(Value::Int(0))
    }

    /// Replaces the existing slot for `name`, or appends a new one.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.slots.iter_mut().find(|(n, _)| &**n == name) {
            slot.1 = value;
        } else {
            self.slots.push((name.into(), value));
        }
    }
}
