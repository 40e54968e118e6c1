use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::money::parse_amount;

pub const INVALID_CLASS: &str = "input-invalid";

pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", label))
    } else {
        None
    }
}

pub fn amount(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Amount is required".to_string());
    }
    match parse_amount(value) {
        Some(n) if n >= Decimal::ZERO => None,
        _ => Some("Amount must be 0 or greater".to_string()),
    }
}

pub fn max_chars(value: &str, label: &str, max: usize) -> Option<String> {
    if value.trim().chars().count() > max {
        Some(format!("{} must be at most {} characters", label, max))
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<K: Ord> {
    errors: BTreeMap<K, String>,
}

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        FieldErrors {
            errors: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> FieldErrors<K> {
    pub fn record(&mut self, key: K, outcome: Option<String>) -> bool {
        match outcome {
            Some(message) => {
                self.errors.insert(key, message);
                false
            }
            None => {
                self.errors.remove(&key);
                true
            }
        }
    }

    pub fn get(&self, key: K) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.errors.retain(|k, _| keep(*k));
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn input_class(&self, key: K, base: &str) -> String {
        if self.errors.contains_key(&key) {
            format!("{} {}", base, INVALID_CLASS)
        } else {
            base.to_string()
        }
    }
}
