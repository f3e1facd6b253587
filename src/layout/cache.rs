//! Versioned snapshots and memoized derived values.
//!
//! A `Versioned` cell bumps its version on every replacement, and the version
//! is what identifies a graph snapshot. `Memoized` recomputes only when its key
//! changes. Adapted from the `Versioned`/`Memoized` pair in micro-macro's
//! `versioned.rs`.

// -------------------------------------------------------------------
// Versioned
// -------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Versioned<T> {
    version: u64,
    data: T,
}

impl<T> Versioned<T> {
    pub fn new(data: T) -> Self {
        Self { version: 0, data }
    }

    pub fn get(&self) -> &T {
        &self.data
    }

    pub fn set(&mut self, data: T) {
        self.data = data;
        self.version = self.version.wrapping_add(1);
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

// -------------------------------------------------------------------
// Memoized
// -------------------------------------------------------------------

pub struct Memoized<S, K, V> {
    computations: u64,
    last_key: Option<K>,
    last_value: Option<V>,
    get_key: Box<dyn Fn(&S) -> K>,
    calc: Box<dyn Fn(&S) -> V>,
}

impl<S, K, V> Memoized<S, K, V>
where
    K: PartialEq,
{
    pub fn new(get_key: impl Fn(&S) -> K + 'static, calc: impl Fn(&S) -> V + 'static) -> Self {
        Self {
            computations: 0,
            last_key: None,
            last_value: None,
            get_key: Box::new(get_key),
            calc: Box::new(calc),
        }
    }

    /// Recompute only if the key changed; return a reference to the cached value.
    pub fn get<'a>(&'a mut self, store: &S) -> &'a V {
        let key = (self.get_key)(store);
        if self.last_key.as_ref() != Some(&key) {
            self.last_key = Some(key);
            self.last_value = None;
        }
        if self.last_value.is_none() {
            self.computations = self.computations.wrapping_add(1);
        }
        let calc = &self.calc;
        self.last_value.get_or_insert_with(|| calc(store))
    }

    /// Drop the cached value; the next `get` recomputes.
    pub fn invalidate(&mut self) {
        self.last_key = None;
        self.last_value = None;
    }

    /// How many times the value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_cache.rs"]
mod tests;
