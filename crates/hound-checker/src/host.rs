//! The checker-facing boundary.
//!
//! The resolver never computes types itself. It asks a [`CheckerHost`] for
//! the syntax tree of a file and the type the checker assigned to a node.

use hound_ast::{FileId, NodeIndex, SourceFile};
use hound_types::{TypeDatabase, TypeId, TypeInterner};
use rustc_hash::FxHashMap;

pub trait CheckerHost {
    fn types(&self) -> &dyn TypeDatabase;

    fn source_file(&self, file: FileId) -> Option<&SourceFile>;

    /// Type of the expression or declaration at `node`. Function-like
    /// declarations resolve to their function type.
    fn type_at_location(&self, file: FileId, node: NodeIndex) -> Option<TypeId>;
}

/// In-memory host: a fixed set of files and a node-to-type table.
#[derive(Default)]
pub struct ProgramSnapshot {
    types: TypeInterner,
    files: Vec<SourceFile>,
    node_types: FxHashMap<(FileId, NodeIndex), TypeId>,
}

impl ProgramSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &TypeInterner {
        &self.types
    }

    pub fn add_file(&mut self, file: SourceFile) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(file);
        id
    }

    pub fn set_type(&mut self, file: FileId, node: NodeIndex, type_id: TypeId) -> &mut Self {
        self.node_types.insert((file, node), type_id);
        self
    }

    pub fn file(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(file.0 as usize)
    }
}

impl CheckerHost for ProgramSnapshot {
    fn types(&self) -> &dyn TypeDatabase {
        &self.types
    }

    fn source_file(&self, file: FileId) -> Option<&SourceFile> {
        self.file(file)
    }

    fn type_at_location(&self, file: FileId, node: NodeIndex) -> Option<TypeId> {
        self.node_types.get(&(file, node)).copied()
    }
}
