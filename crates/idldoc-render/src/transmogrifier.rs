//! The transmogrification core: documentation units to markup lines.
//!
//! [`transmogrify`] walks a schema's documentation units in declaration
//! order and appends to a [`LineBuffer`]. Every helper takes the buffer
//! as an explicit parameter so the write effect is visible at each call
//! site; nothing here touches ambient state.

use std::path::Path;
use std::sync::LazyLock;

use idldoc_schema::{Doc, DocUnit, Schema, SchemaEntity, Section, SectionKind, SourceInfo};
use regex::Regex;

use crate::buffer::LineBuffer;
use crate::error::TransmogrifyError;
use crate::typefmt::format_type;

/// Heading marker: a run of `=` followed by a space, first line only.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^=+ ").unwrap());

/// Adornment repertoire indexed by nesting level. The containing
/// document is level 0, hence the placeholder in slot zero.
const HEADING_MARKERS: &[char] = &[' ', '#', '*', '=', '_', '^', '"'];

/// Convert a schema's documentation into markup lines.
///
/// The returned buffer is complete and at indentation depth zero; the
/// host parses it with its nested-parse facility. Any error aborts the
/// pass with nothing handed over.
pub fn transmogrify(schema: &Schema) -> Result<LineBuffer, TransmogrifyError> {
    let mut buffer = LineBuffer::new();
    for unit in schema.units() {
        match unit {
            DocUnit::Module { path } => visit_module(&mut buffer, path),
            DocUnit::Freeform(doc) => visit_freeform(&mut buffer, doc)?,
            DocUnit::Entity { symbol, doc } => {
                let entity = schema.entity(symbol).ok_or_else(|| {
                    TransmogrifyError::Invariant(format!(
                        "documented entity '{symbol}' is not defined by the schema"
                    ))
                })?;
                visit_entity(&mut buffer, entity, doc)?;
            }
        }
    }
    Ok(buffer)
}

/// Emit a module declaration directive.
fn visit_module(buf: &mut LineBuffer, path: &str) {
    let name = Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(path);
    // Module directives are credited to the first line of the module file.
    buf.append_raw(&format!(".. idl:module:: {name}"), path, 1);
    buf.ensure_blank_line();
}

/// Emit a free-form block, rewriting a leading heading marker into a
/// native section heading.
fn visit_freeform(buf: &mut LineBuffer, doc: &Doc) -> Result<(), TransmogrifyError> {
    let [body] = doc.sections.as_slice() else {
        return Err(TransmogrifyError::Invariant(format!(
            "free-form block at {} must carry exactly one section",
            doc.info
        )));
    };
    let mut text = body.text.as_str();
    let mut info = doc.info.clone();

    if HEADING_RE.is_match(text) {
        // A heading, if present, is always the first line of the block.
        let (heading_line, rest) = text.split_once('\n').unwrap_or((text, ""));
        let (leader, heading) = heading_line.split_once(' ').unwrap_or((heading_line, ""));
        // Implicit +1: the containing document itself is level 0.
        let level = leader.len() + 1;
        let Some(&marker) = HEADING_MARKERS.get(level) else {
            return Err(TransmogrifyError::Invariant(format!(
                "heading at {info} is nested too deeply"
            )));
        };
        let overline = level <= 2;
        let adornment = marker.to_string().repeat(heading.chars().count());

        buf.ensure_blank_line();
        // All 2 or 3 lines are credited to the single source line.
        if overline {
            buf.append(&adornment, &info);
        }
        buf.append(heading, &info);
        buf.append(&adornment, &info);
        buf.ensure_blank_line();

        // Eat blank line(s) after the heading and advance past them,
        // plus one for the heading line itself.
        let trimmed = rest.trim_start_matches('\n');
        info = info.next_line(rest.len() - trimmed.len() + 1);
        text = trimmed;
    }

    paragraph(buf, text, &info);
    Ok(())
}

/// Emit an entity's directive header, option block, and sections.
fn visit_entity(
    buf: &mut LineBuffer,
    entity: &SchemaEntity,
    doc: &Doc,
) -> Result<(), TransmogrifyError> {
    buf.append(
        &format!(".. idl:{}:: {}", entity.kind().directive(), entity.name()),
        entity.info(),
    );

    let mut scope = buf.indented();
    preamble(&mut scope, entity, doc);
    for section in &doc.sections {
        match &section.kind {
            SectionKind::Paragraph => visit_paragraph(&mut scope, section),
            SectionKind::Errors => visit_errors(&mut scope, section),
            SectionKind::Returns => visit_returns(&mut scope, section),
            SectionKind::Member(name) => visit_member(&mut scope, entity, name, section)?,
        }
    }
    Ok(())
}

/// Emit the option lines of an entity directive.
fn preamble(buf: &mut LineBuffer, entity: &SchemaEntity, doc: &Doc) {
    if let Some(since) = &doc.since {
        // Taken from the entity's doc block; the location is exact.
        buf.append(&format!(":since: {}", since.text), &since.info);
    }

    if entity.cond().is_present() {
        // Taken from the entity definition; the location is approximate.
        buf.append(
            &format!(":ifcond: {}", entity.cond().doc_gen()),
            entity.info(),
        );
    }

    // Hoist special features such as :deprecated: and :unstable: into
    // the option block.
    for feature in entity.features() {
        if feature.is_special() {
            buf.append(&format!(":{}:", feature.name()), feature.info());
        }
    }

    buf.ensure_blank_line();
}

fn visit_paragraph(buf: &mut LineBuffer, section: &Section) {
    paragraph(buf, &section.text, &section.info);
}

fn paragraph(buf: &mut LineBuffer, text: &str, info: &SourceInfo) {
    // Squelch empty paragraphs.
    if text.is_empty() {
        return;
    }
    buf.ensure_blank_line();
    buf.append_text(text, info);
    buf.ensure_blank_line();
}

fn visit_errors(buf: &mut LineBuffer, section: &Section) {
    // The nested-list indentation the raw text encodes is passed
    // through untouched; see DESIGN.md on formatting fidelity.
    buf.append_text(&format!(":error:\n{}", section.text), &section.info);
}

fn visit_returns(buf: &mut LineBuffer, section: &Section) {
    if section.text.is_empty() {
        return;
    }
    buf.ensure_blank_line();
    buf.append_text(&format!(":return:\n{}", section.text), &section.info);
    buf.ensure_blank_line();
}

/// Emit one argument/field description with its type annotation.
fn visit_member(
    buf: &mut LineBuffer,
    entity: &SchemaEntity,
    name: &str,
    section: &Section,
) -> Result<(), TransmogrifyError> {
    let member = entity.member(name).ok_or_else(|| {
        TransmogrifyError::Invariant(format!(
            "documented member '{name}' is not declared by '{}'",
            entity.name()
        ))
    })?;

    let field = match format_type(member)? {
        Some(ty) => format!(":memb {ty} {name}:"),
        None => format!(":memb {name}:"),
    };

    match section.text.split_once('\n') {
        Some((first, rest)) => {
            buf.append(&format!("{field} {first}"), &section.info);
            let mut scope = buf.indented();
            scope.append_text(rest, &section.info.next_line(1));
        }
        None if section.text.is_empty() => buf.append(&field, &section.info),
        None => buf.append(&format!("{field} {}", section.text), &section.info),
    }
    Ok(())
}
