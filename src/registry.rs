use std::collections::HashSet;

use crate::error::VehicleError;

/// Names handed out to vehicles, stored normalized.
///
/// A registry is owned by whoever builds the roster; two vehicles built
/// against the same registry can never share a name, regardless of case or
/// surrounding whitespace.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `name` and claims it, failing if it is empty or taken.
    pub fn claim(&mut self, name: &str) -> Result<String, VehicleError> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Err(VehicleError::EmptyName);
        }
        if !self.names.insert(normalized.clone()) {
            return Err(VehicleError::DuplicateName(normalized));
        }

        Ok(normalized)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Uppercases the first letter of every space-separated word.
pub fn capitalize(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
