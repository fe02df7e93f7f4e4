//! Values the writer serializes into indirect objects.
//!
//! Only the shapes a ledger document needs are modelled: numbers, names,
//! arrays, dictionaries, content streams and references between objects.

use indexmap::IndexMap;

/// Dictionary storage. Insertion order is kept so serialized output follows
/// the order entries were declared in.
pub type Dictionary = IndexMap<String, Object>;

/// A value inside an indirect object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Whole number, used for counts and lengths
    Integer(i64),
    /// Coordinate or size in points
    Real(f64),
    /// Name such as `/Page`, stored without the slash
    Name(String),
    /// `[ ... ]`
    Array(Vec<Object>),
    /// `<< ... >>`
    Dictionary(Dictionary),
    /// Page content: dictionary plus raw bytes
    Stream {
        /// Extra dictionary entries; `/Length` is filled in when written
        dict: Dictionary,
        /// Content bytes
        data: bytes::Bytes,
    },
    /// `id gen R`
    Reference(ObjectRef),
}

/// Points at an indirect object by number and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number, always 0 for freshly written files
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        assert_eq!(ObjectRef::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_dictionary_keeps_insertion_order() {
        let mut dict = Dictionary::new();
        dict.insert("Type".to_string(), Object::Name("Page".to_string()));
        dict.insert("Parent".to_string(), Object::Reference(ObjectRef::new(2, 0)));
        dict.insert("Contents".to_string(), Object::Reference(ObjectRef::new(4, 0)));
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Type", "Parent", "Contents"]);
    }
}
