//! Shared fixtures: parse snippets, register them, resolve.

use crate::{resolve, ParcelRegistry, ResolveOutput, SymbolTable};
use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{FileSpec, Name, Parcel, StringInterner, UnitId};

pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub table: SymbolTable,
    pub registry: ParcelRegistry,
    /// Registration diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    units: u32,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            table: SymbolTable::new(),
            registry: ParcelRegistry::new(),
            diagnostics: Vec::new(),
            units: 0,
        }
    }

    /// Build a fixture from one unit.
    pub fn with(source: &str) -> Self {
        let mut fixture = Fixture::new();
        fixture.unit(source);
        fixture
    }

    /// Parse and register one unit. The source must be free of syntax errors.
    pub fn unit(&mut self, source: &str) -> UnitId {
        let id = UnitId::new(self.units);
        self.units += 1;
        let output = prism_parse::parse_unit(
            id,
            FileSpec::new("src", format!("Unit{}", id.index()), false),
            source,
            &self.interner,
        );
        assert!(
            output.diagnostics.is_empty(),
            "fixture has syntax errors: {:?}",
            output.diagnostics
        );
        for decl in output.unit.declarations {
            if let Err(diag) = self.table.register(decl, &self.interner) {
                self.diagnostics.push(diag);
            }
        }
        id
    }

    pub fn parcel(&mut self, parcel: Parcel) {
        if let Err(diag) = self.registry.register(parcel) {
            self.diagnostics.push(diag);
        }
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    pub fn texts(&self, names: &[Name]) -> Vec<&'static str> {
        names.iter().map(|&n| self.text(n)).collect()
    }

    pub fn resolve(&self) -> ResolveOutput {
        resolve(&self.table, &self.registry, &self.interner)
    }
}

pub(crate) fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}
