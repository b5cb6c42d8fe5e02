//! Provide (de)serialization support for paths.
//!
//! - [`PathIndex::Index`] is an unsigned integer, [`PathIndex::Key`] a string.
//! - [`Path`] is written as a sequence of steps. It can be read back from
//!   such a sequence, or from a dotted string as in [`Path::parse_dotted`].
//!
//! Deserialized values own their keys.
//!
//! # Examples
//!
//! ```
//! use np_tree::{Path, path};
//!
//! let text = serde_json::to_string(&path!["users", 0, "name"]).unwrap();
//! assert_eq!(text, r#"["users",0,"name"]"#);
//!
//! let back: Path<'static> = serde_json::from_str(&text).unwrap();
//! assert_eq!(back, path!["users", 0, "name"]);
//!
//! let dotted: Path<'static> = serde_json::from_str(r#""users.name""#).unwrap();
//! assert_eq!(dotted, path!["users", "name"]);
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, SeqAccess, Unexpected, Visitor};
use serde_core::ser::{Serialize, Serializer};

use crate::access::{Path, PathIndex};

// -----------------------------------------------------------------------------
// PathIndex

impl Serialize for PathIndex<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            &Self::Index(index) => serializer.serialize_u64(index as u64),
            Self::Key(key) => serializer.serialize_str(key),
        }
    }
}

struct PathIndexVisitor;

impl<'de> Visitor<'de> for PathIndexVisitor {
    type Value = PathIndex<'static>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned index or a string key")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        usize::try_from(value)
            .map(PathIndex::Index)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        usize::try_from(value)
            .map(PathIndex::Index)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(PathIndex::Key(Cow::Owned(String::from(value))))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(PathIndex::Key(Cow::Owned(value)))
    }
}

impl<'de> Deserialize<'de> for PathIndex<'static> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PathIndexVisitor)
    }
}

// -----------------------------------------------------------------------------
// Path

impl Serialize for Path<'_> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct PathVisitor;

impl<'de> Visitor<'de> for PathVisitor {
    type Value = Path<'static>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of path steps or a dotted path")
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Path::parse_dotted(value).into_owned())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut steps = Vec::new();
        while let Some(index) = seq.next_element::<PathIndex<'static>>()? {
            steps.push(index);
        }
        Ok(Path::from(steps))
    }
}

impl<'de> Deserialize<'de> for Path<'static> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PathVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{from_str, json, to_string, to_value};

    use crate::access::{Path, PathIndex};
    use crate::path;

    #[test]
    fn index_shapes() {
        assert_eq!(to_value(PathIndex::Index(3)).unwrap(), json!(3));
        assert_eq!(to_value(PathIndex::from("a.b")).unwrap(), json!("a.b"));

        assert_eq!(from_str::<PathIndex<'static>>("7").unwrap(), PathIndex::Index(7));
        assert_eq!(
            from_str::<PathIndex<'static>>(r#""7""#).unwrap(),
            PathIndex::from("7")
        );
    }

    #[test]
    fn rejects_bad_indices() {
        assert!(from_str::<PathIndex<'static>>("-1").is_err());
        assert!(from_str::<PathIndex<'static>>("1.5").is_err());
        assert!(from_str::<PathIndex<'static>>("null").is_err());
        assert!(from_str::<Path<'static>>("[true]").is_err());
        assert!(from_str::<Path<'static>>("3").is_err());
    }

    #[test]
    fn path_as_sequence() {
        let path = path!["one", 1, "x.y"];
        let text = to_string(&path).unwrap();
        assert_eq!(text, r#"["one",1,"x.y"]"#);
        assert_eq!(from_str::<Path<'static>>(&text).unwrap(), path);

        assert_eq!(to_string(&Path::empty()).unwrap(), "[]");
        assert!(from_str::<Path<'static>>("[]").unwrap().is_empty());
    }

    #[test]
    fn path_from_dotted_string() {
        let path = from_str::<Path<'static>>(r#""a..0.b""#).unwrap();
        assert_eq!(path, Path::parse_dotted("a.0.b"));
        assert!(path.iter().all(|index| matches!(index, PathIndex::Key(_))));
    }
}
