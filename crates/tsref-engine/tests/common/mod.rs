//! Shared fixture helpers for the integration tests.
//!
//! Tests assemble a small arena by hand and pair it with a `ProgramOracle`
//! populated with the answers a checker would give for that tree.

#![allow(dead_code)]

use tsref_common::{FileId, Span};
use tsref_engine::Resolver;
use tsref_oracle::ProgramOracle;
use tsref_syntax::{NodeArena, NodeData, NodeIndex, SyntaxKind};

pub struct Fixture {
    pub arena: NodeArena,
    pub oracle: ProgramOracle,
    pub file: FileId,
}

impl Fixture {
    pub fn new(file_name: &str, text: &str) -> Fixture {
        init_tracing();
        let mut arena = NodeArena::new();
        let file = arena.add_source_file_text(file_name, text);
        Fixture {
            arena,
            oracle: ProgramOracle::new(),
            file,
        }
    }

    /// Add a second source file and return its id.
    pub fn add_file(&mut self, file_name: &str, text: &str) -> FileId {
        self.arena.add_source_file_text(file_name, text)
    }

    pub fn token(&mut self, kind: SyntaxKind, start: u32, end: u32) -> NodeIndex {
        self.arena.add_token(kind, Span::new(self.file, start, end))
    }

    pub fn token_in(&mut self, file: FileId, kind: SyntaxKind, start: u32, end: u32) -> NodeIndex {
        self.arena.add_token(kind, Span::new(file, start, end))
    }

    pub fn node(&mut self, kind: SyntaxKind, start: u32, end: u32, data: NodeData) -> NodeIndex {
        self.arena.add_node(kind, Span::new(self.file, start, end), data)
    }

    pub fn node_in(
        &mut self,
        file: FileId,
        kind: SyntaxKind,
        start: u32,
        end: u32,
        data: NodeData,
    ) -> NodeIndex {
        self.arena.add_node(kind, Span::new(file, start, end), data)
    }

    /// Mark `root` as the root node of the fixture's primary file.
    pub fn set_root(&mut self, root: NodeIndex) {
        self.arena.set_root(self.file, root);
    }

    pub fn resolver<'a>(
        &'a self,
        sink: &'a dyn tsref_common::DiagnosticsSink,
    ) -> Resolver<'a> {
        Resolver::new(&self.arena, &self.oracle, sink)
    }
}

/// Route engine diagnostics to stderr when `RUST_LOG` asks for them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
