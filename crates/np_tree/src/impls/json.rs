use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::structure::{Mapping, Structure};

// -----------------------------------------------------------------------------
// Value

impl Structure for Value {
    type Mapping = Map<String, Value>;

    #[inline]
    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    fn as_mapping(&self) -> Option<&Self::Mapping> {
        self.as_object()
    }

    #[inline]
    fn from_sequence(sequence: Vec<Self>) -> Self {
        Value::Array(sequence)
    }

    #[inline]
    fn from_mapping(mapping: Self::Mapping) -> Self {
        Value::Object(mapping)
    }

    #[inline]
    fn into_sequence(self) -> Result<Vec<Self>, Self> {
        match self {
            Value::Array(array) => Ok(array),
            other => Err(other),
        }
    }

    #[inline]
    fn into_mapping(self) -> Result<Self::Mapping, Self> {
        match self {
            Value::Object(object) => Ok(object),
            other => Err(other),
        }
    }
}

// -----------------------------------------------------------------------------
// Map

impl Mapping<Value> for Map<String, Value> {
    #[inline]
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    #[inline]
    fn insert(&mut self, key: String, value: Value) {
        Map::insert(self, key, value);
    }

    #[inline]
    fn remove(&mut self, key: &str) -> Option<Value> {
        Map::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Map::len(self)
    }
}

// -----------------------------------------------------------------------------
// Tests
