//! Parcel manifests.
//!
//! A manifest is a JSON object:
//!
//! ```json
//! {
//!     "name": "Crustacean",
//!     "nickname": "Crust",
//!     "version": "v0.1.0",
//!     "prerequisites": { "Core": "v0.5", "Shell": null }
//! }
//! ```
//!
//! Only `name` is required. Prerequisites are ordered by name.

use prism_diagnostic::{Diagnostic, ErrorCode, LineOffsetTable};
use prism_ir::{Parcel, Prereq, Span, UnitId, Version};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct Manifest {
    name: String,
    nickname: Option<String>,
    version: Option<String>,
    #[serde(default)]
    prerequisites: BTreeMap<String, Option<String>>,
}

/// Parse manifest text into a parcel. Every failure is an E4004 located in
/// the manifest's own unit.
pub(crate) fn parse_manifest(text: &str, unit: UnitId, included: bool) -> Result<Parcel, Diagnostic> {
    let manifest: Manifest = serde_json::from_str(text).map_err(|err| {
        let lines = LineOffsetTable::build(text);
        let line = u32::try_from(err.line()).unwrap_or(u32::MAX);
        let column = u32::try_from(err.column()).unwrap_or(0);
        let offset = lines
            .line_start_offset(line)
            .map_or(0, |start| start + column.saturating_sub(1));
        invalid(unit, Span::point(offset), err.to_string())
    })?;

    let whole = Span::new(0, u32::try_from(text.len()).unwrap_or(u32::MAX));
    let version = manifest
        .version
        .as_deref()
        .map(Version::parse)
        .transpose()
        .map_err(|err| invalid(unit, whole, err.to_string()))?;

    let mut parcel = Parcel::new(&manifest.name, manifest.nickname.as_deref(), version, included)
        .map_err(|err| invalid(unit, whole, err.to_string()))?;

    for (name, min) in manifest.prerequisites {
        let min = min
            .as_deref()
            .map(Version::parse)
            .transpose()
            .map_err(|err| invalid(unit, whole, format!("prerequisite `{name}`: {err}")))?;
        parcel = parcel.with_prereq(Prereq::new(name, min));
    }
    Ok(parcel)
}

fn invalid(unit: UnitId, span: Span, reason: String) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4004)
        .with_message(format!("invalid parcel manifest: {reason}"))
        .with_label(unit, span, "in this manifest")
}
