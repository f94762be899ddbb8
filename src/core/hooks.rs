use std::collections::HashMap;

pub type FilterFn = Box<dyn Fn(String) -> String + Send + Sync>;

/// Named post-processing callbacks applied to rendered fragments before
/// they are handed back or emitted. One callback per name; setting a
/// name again replaces the previous callback.
#[derive(Default)]
pub struct FilterRegistry {
    filters: HashMap<String, FilterFn>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.filters.insert(name.into(), Box::new(filter));
    }

    /// Runs the callback registered under `name`, if any. Unregistered
    /// names pass the value through untouched.
    pub fn apply(&self, name: &str, value: String) -> String {
        match self.filters.get(name) {
            Some(filter) => filter(value),
            None => value,
        }
    }
}
