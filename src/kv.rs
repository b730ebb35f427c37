// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured key-value fields attached to loggers.

use std::collections::BTreeMap;
use std::fmt;

use value_bag::OwnedValueBag;
use value_bag::ValueBag;

use crate::Error;

/// Represents a value in a key-value pair.
pub type Value<'a> = ValueBag<'a>;

/// A visitor to walk through key-value pairs.
pub trait Visitor {
    /// Visit a key-value pair.
    fn visit(&mut self, key: &str, value: Value<'_>) -> Result<(), Error>;
}

/// A mapping from string keys to arbitrary values.
///
/// Inserting a key that is already present replaces its value, so when two sets of fields are
/// merged the later one shadows the earlier.
///
/// # Examples
///
/// ```
/// use logfacade::Fields;
///
/// let fields = Fields::new().with("user", "alice").with("attempt", 3);
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("attempt").unwrap().to_string(), "3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fields {
    kvs: BTreeMap<String, OwnedValueBag>,
}

impl Fields {
    /// Create an empty set of fields.
    pub const fn new() -> Self {
        Self {
            kvs: BTreeMap::new(),
        }
    }

    pub(crate) fn empty() -> &'static Fields {
        static EMPTY: Fields = Fields::new();
        &EMPTY
    }

    /// Insert a key-value pair, replacing any previous value of the key.
    pub fn insert<'v, K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value<'v>>,
    {
        let value: Value<'v> = value.into();
        self.kvs.insert(key.into(), value.to_owned());
    }

    /// Insert a value captured through its [`Display`](fmt::Display) implementation.
    pub fn insert_display<K, T>(&mut self, key: K, value: &T)
    where
        K: Into<String>,
        T: fmt::Display,
    {
        self.kvs
            .insert(key.into(), ValueBag::from_display(value).to_owned());
    }

    /// Builder-style [`insert`](Fields::insert).
    pub fn with<'v, K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value<'v>>,
    {
        self.insert(key, value);
        self
    }

    /// Merge `other` into these fields. Values in `other` win on conflicting keys.
    pub fn merge(&mut self, other: Fields) {
        self.kvs.extend(other.kvs);
    }

    /// Get the value of a key.
    pub fn get(&self, key: &str) -> Option<Value<'_>> {
        self.kvs.get(key).map(OwnedValueBag::by_ref)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    /// Whether there is no field at all.
    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }

    /// Iterate over the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value<'_>)> {
        self.kvs.iter().map(|(k, v)| (k.as_str(), v.by_ref()))
    }

    /// Visit the fields in key order.
    pub fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        for (key, value) in self.iter() {
            visitor.visit(key, value)?;
        }
        Ok(())
    }
}

impl<'v, K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value<'v>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

impl<'v, K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value<'v>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<String>);

    impl Visitor for Collect {
        fn visit(&mut self, key: &str, value: Value<'_>) -> Result<(), Error> {
            self.0.push(format!("{key}={value}"));
            Ok(())
        }
    }

    #[test]
    fn test_later_value_shadows_earlier() {
        let mut fields = Fields::new().with("a", 1).with("b", "x");
        fields.merge(Fields::new().with("a", 2));

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a").unwrap().to_string(), "2");
        assert_eq!(fields.get("b").unwrap().to_string(), "x");
    }

    #[test]
    fn test_visit_in_key_order() {
        let fields: Fields = [("zeta", 26), ("alpha", 1), ("mu", 12)].into_iter().collect();

        let mut collect = Collect(vec![]);
        fields.visit(&mut collect).unwrap();
        assert_eq!(collect.0, vec!["alpha=1", "mu=12", "zeta=26"]);
    }

    #[test]
    fn test_insert_display() {
        let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 8080));
        let mut fields = Fields::new();
        fields.insert_display("peer", &addr);
        assert_eq!(fields.get("peer").unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_owned_key() {
        let key = format!("shard-{}", 7);
        let fields = Fields::new().with(key, true);
        assert_eq!(fields.get("shard-7").unwrap().to_string(), "true");
        assert!(fields.get("shard-8").is_none());
    }
}
