//! Recognized-option configuration map.
//!
//! A thin wrapper over [`drn_core::AttrBag`]: missing keys are unset, not
//! zero, so the validator (§4.9) can distinguish "not provided" from
//! "provided and out of range".

use drn_core::{AttrBag, AttrValue};

#[derive(Clone, Debug, Default)]
pub struct ConfigMap(AttrBag);

impl ConfigMap {
    pub fn new() -> Self {
        Self(AttrBag::new())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.0.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
