use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object the document writer emits, keyed by the
/// index of the thing it belongs to
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    FontDescriptor(usize),
    FontData(usize),
    ToUnicode(usize),
    Image(usize),
    ImageMask(usize),
}

/// Allocates PDF object ids and remembers which object each id was handed out
/// for, so that later objects can point at earlier ones
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Allocate a fresh id for `ref_type`, replacing any earlier one
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }

    /// The id allocated for `ref_type`, allocating one on first use
    pub fn get_or_gen(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}
