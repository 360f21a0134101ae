//! The compilation pipeline.

use crate::manifest::parse_manifest;
use crate::{discover, CompileError, CompileOptions, FoundFile};
use prism_diagnostic::{Diagnostic, ErrorCode, SourceMap};
use prism_ir::{SourceUnit, Span, StringInterner, UnitId};
use prism_parse::{parse_unit, ParseOutput};
use prism_resolve::{resolve, validate, ParcelRegistry, ResolvedGraph, SymbolTable};
use rayon::prelude::*;
use std::fs;
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Everything a compilation produced.
pub struct CompileOutput {
    pub graph: ResolvedGraph,
    /// Every diagnostic, in phase order.
    pub diagnostics: Vec<Diagnostic>,
    /// Texts of all manifests and units, for rendering diagnostics.
    pub sources: SourceMap,
    pub interner: StringInterner,
    pub parcels: ParcelRegistry,
    /// Parsed units in discovery order.
    pub units: Vec<SourceUnit>,
}

impl CompileOutput {
    pub fn succeeded(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A unit read from disk, waiting to be parsed.
struct Pending {
    id: UnitId,
    file: FoundFile,
    text: Arc<str>,
}

/// Run the whole pipeline.
///
/// Returns `Err` only for environmental failures; problems in the sources
/// are reported in [`CompileOutput::diagnostics`].
pub fn compile(options: &CompileOptions) -> Result<CompileOutput, CompileError> {
    let _span = debug_span!("compile", parallel = options.parallel).entered();

    let found = discover(&options.source_dirs, &options.include_dirs)?;
    let mut sources = SourceMap::new();
    let interner = StringInterner::new();
    let mut diagnostics = Vec::new();

    // Parcels first: unit parcels are checked against them.
    let mut parcels = ParcelRegistry::new();
    for manifest in &found.manifests {
        let text = read(&manifest.path)?;
        let unit = sources.add(manifest.path.display().to_string(), Arc::clone(&text));
        match parse_manifest(&text, unit, manifest.spec.included) {
            Ok(parcel) => {
                if let Err(diag) = parcels.register(parcel) {
                    diagnostics.push(diag.with_label(unit, Span::point(0), "in this manifest"));
                }
            }
            Err(diag) => diagnostics.push(diag),
        }
    }

    let mut pending = Vec::with_capacity(found.units.len());
    for file in found.units {
        let text = read(&file.path)?;
        let id = sources.add(file.path.display().to_string(), Arc::clone(&text));
        pending.push(Pending { id, file, text });
    }

    let parse = |unit: &Pending| parse_unit(unit.id, unit.file.spec.clone(), &unit.text, &interner);
    let parsed: Vec<ParseOutput> = if options.parallel {
        pending.par_iter().map(parse).collect()
    } else {
        pending.iter().map(parse).collect()
    };
    debug!(units = parsed.len(), "parsed");

    // Sequential registration keeps unit order.
    let mut table = SymbolTable::new();
    let mut units = Vec::with_capacity(parsed.len());
    for output in parsed {
        diagnostics.extend(output.diagnostics);
        let unit = output.unit;
        if let Some(diag) = unknown_parcel(&unit, &parcels, &interner) {
            diagnostics.push(diag);
        }
        for decl in &unit.declarations {
            if let Err(diag) = table.register(Arc::clone(decl), &interner) {
                diagnostics.push(diag);
            }
        }
        units.push(unit);
    }
    debug!(declarations = table.len(), "registered");

    let roots: Vec<String> = parcels
        .iter()
        .filter(|parcel| !parcel.is_included())
        .map(|parcel| parcel.name().to_owned())
        .collect();
    for root in roots {
        if !parcels.is_required(&root) {
            diagnostics.extend(parcels.check_prereqs(&root));
        }
    }

    let resolved = resolve(&table, &parcels, &interner);
    diagnostics.extend(resolved.diagnostics);
    diagnostics.extend(validate(&resolved.graph, &interner));

    debug!(
        classes = resolved.graph.len(),
        diagnostics = diagnostics.len(),
        "compile finished"
    );
    Ok(CompileOutput {
        graph: resolved.graph,
        diagnostics,
        sources,
        interner,
        parcels,
        units,
    })
}

fn read(path: &std::path::Path) -> Result<Arc<str>, CompileError> {
    fs::read_to_string(path)
        .map(Arc::from)
        .map_err(|e| CompileError::io(path, e))
}

/// E4005 for a unit naming a parcel without a manifest.
///
/// A compilation without any manifests treats parcels as implicit.
fn unknown_parcel(
    unit: &SourceUnit,
    parcels: &ParcelRegistry,
    interner: &StringInterner,
) -> Option<Diagnostic> {
    let name = interner.lookup(unit.parcel?);
    if parcels.is_empty() || parcels.fetch(name).is_some() {
        return None;
    }
    Some(
        Diagnostic::error(ErrorCode::E4005)
            .with_message(format!("parcel `{name}` has no manifest"))
            .with_label(
                unit.id,
                unit.parcel_span.unwrap_or_default(),
                "declared here",
            )
            .with_suggestion(format!("add a `{name}.parcel` manifest")),
    )
}
