use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object a report document writes
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    Font(usize),
    ContentForPage(usize),
    CidFont(usize),
    ToUnicode(usize),
    FontDescriptor(usize),
    FontData(usize),
}

/// Hands out object numbers in allocation order and remembers which object
/// each one was handed to
#[derive(Debug)]
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next: Ref,
}

impl Default for ObjectReferences {
    fn default() -> Self {
        ObjectReferences {
            refs: HashMap::new(),
            next: Ref::new(1),
        }
    }
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences::default()
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Reserve the next object number for `ref_type`. Allocating the same
    /// type twice keeps the first number.
    pub fn allocate(&mut self, ref_type: RefType) -> Ref {
        if let Some(existing) = self.get(ref_type) {
            return existing;
        }
        let id = self.next.bump();
        self.refs.insert(ref_type, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_handed_out_in_order() {
        let mut refs = ObjectReferences::new();
        assert_eq!(refs.allocate(RefType::Catalog), Ref::new(1));
        assert_eq!(refs.allocate(RefType::PageTree), Ref::new(2));
        assert_eq!(refs.allocate(RefType::Page(0)), Ref::new(3));
        assert_eq!(refs.get(RefType::PageTree), Some(Ref::new(2)));
        assert_eq!(refs.get(RefType::Page(1)), None);
    }

    #[test]
    fn reallocating_keeps_the_first_number() {
        let mut refs = ObjectReferences::new();
        let first = refs.allocate(RefType::Font(0));
        refs.allocate(RefType::Info);
        assert_eq!(refs.allocate(RefType::Font(0)), first);
    }
}
