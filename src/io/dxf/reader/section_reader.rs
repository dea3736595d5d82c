//! DXF section readers
//!
//! Recursive descent over the fixed section order HEADER, TABLES, BLOCKS,
//! ENTITIES. Repetitions end on a sentinel (`ENDSEC`, `ENDTAB`, `SEQEND`);
//! the loop that sees the sentinel pushes it back, together with its `0`
//! group code, so the enclosing construct can close itself with `expect`.

use super::token_stream::TokenStream;
use crate::document::DxfDocument;
use crate::entities::{EntityCommon, EntityType, Point, Polyline, PolylineFlags, Vertex};
use crate::error::{DxfError, Result};
use crate::io::dxf::code_page::{resolve_code_page, version_uses_utf8, CodePage};
use crate::notification::NotificationType;
use crate::tables::{Table, TableEntry};
use crate::types::{Attributes, Vector3};
use std::io::Read;

const CODE_ENTITY: &str = "0";
const CODE_NAME: &str = "2";
const CODE_LAYER: &str = "8";
const CODE_VARIABLE: &str = "9";
const CODE_X: &str = "10";
const CODE_Y: &str = "20";
const CODE_Z: &str = "30";
const CODE_VERTICES_FOLLOW: &str = "66";
const CODE_FLAGS: &str = "70";

const SECTION: &str = "SECTION";
const ENDSEC: &str = "ENDSEC";
const TABLE: &str = "TABLE";
const ENDTAB: &str = "ENDTAB";
const VERTEX: &str = "VERTEX";
const SEQEND: &str = "SEQEND";
const EOF: &str = "EOF";

/// Section reader for parsing DXF sections
pub struct SectionReader<'a, R: Read> {
    stream: &'a mut TokenStream<R>,
}

impl<'a, R: Read> SectionReader<'a, R> {
    pub fn new(stream: &'a mut TokenStream<R>) -> Self {
        Self { stream }
    }

    fn unexpected(&self, expected: &str, found: String) -> DxfError {
        DxfError::unexpected(expected, found, self.stream.line_number())
    }

    /// `0 SECTION 2 <name>`
    fn read_prologue(&mut self, name: &str) -> Result<()> {
        self.stream
            .expect(CODE_ENTITY)?
            .expect(SECTION)?
            .expect(CODE_NAME)?
            .expect(name)?;
        Ok(())
    }

    /// `0 ENDSEC`, after a loop pushed both tokens back
    fn read_epilogue(&mut self) -> Result<()> {
        self.stream.expect(CODE_ENTITY)?.expect(ENDSEC)?;
        Ok(())
    }

    /// Free-form `code value` pairs up to the next `0` group, which is
    /// pushed back
    fn read_attributes(&mut self, attributes: &mut Attributes) -> Result<()> {
        loop {
            let code = self.stream.next_in("group code")?;
            if code == CODE_ENTITY {
                self.stream.push_back(code);
                return Ok(());
            }
            let value = self.stream.next_in("group value")?;
            attributes.insert(code, value);
        }
    }

    /// `10 x 20 y 30 z`
    fn read_location(&mut self) -> Result<Vector3> {
        self.stream.expect(CODE_X)?;
        let x = self.stream.next_float("X coordinate")?;
        self.stream.expect(CODE_Y)?;
        let y = self.stream.next_float("Y coordinate")?;
        self.stream.expect(CODE_Z)?;
        let z = self.stream.next_float("Z coordinate")?;
        Ok(Vector3::new(x, y, z))
    }

    // ===== HEADER =====

    /// Read the HEADER section into `document.header`
    pub fn read_header(&mut self, document: &mut DxfDocument) -> Result<()> {
        self.read_prologue("HEADER")?;

        let mut current: Option<(String, usize)> = None;
        // Code/value pairs: a value token `0` (`$ORTHOMODE 70 0`) is data and
        // must not end the section, so only a `0` in code position does.
        loop {
            let code = self.stream.next_in("HEADER group code")?;
            if code == CODE_ENTITY {
                break;
            }
            let value = self.stream.next_in("HEADER value")?;

            if code == CODE_VARIABLE {
                document.header.set(value.as_str(), "");
                current = Some((value, 0));
            } else if let Some((name, groups)) = current.as_mut() {
                if *groups == 0 {
                    document.header.set(name.as_str(), value);
                } else {
                    document.header.append(name, &value);
                }
                *groups += 1;
            }
        }

        self.stream.expect(ENDSEC)?;
        Ok(())
    }

    /// Switch line decoding to the drawing's `$DWGCODEPAGE`
    pub fn apply_code_page(&mut self, document: &mut DxfDocument) {
        if document.header.version().is_some_and(version_uses_utf8) {
            return;
        }
        let Some(name) = document.header.code_page() else {
            return;
        };
        match resolve_code_page(name) {
            CodePage::Utf8 => {}
            CodePage::Legacy(encoding) => self.stream.set_encoding(encoding),
            CodePage::Unknown => {
                let message = format!("Unknown code page '{}', keeping fallback decoding", name);
                document.notifications.notify(NotificationType::NotSupported, message);
            }
        }
    }

    // ===== TABLES =====

    /// Read the TABLES section
    pub fn read_tables(&mut self, document: &mut DxfDocument) -> Result<()> {
        self.read_prologue("TABLES")?;
        while let Some(table) = self.read_table()? {
            document.tables.push(table);
        }
        self.read_epilogue()
    }

    /// Read one TABLE, `None` at the end of the section
    fn read_table(&mut self) -> Result<Option<Table>> {
        self.stream.expect(CODE_ENTITY)?;
        let token = self.stream.next_in("TABLE")?;
        if token == ENDSEC {
            self.stream.push_back(token);
            self.stream.push_back(CODE_ENTITY);
            return Ok(None);
        }
        if token != TABLE {
            return Err(self.unexpected(TABLE, token));
        }

        self.stream.expect(CODE_NAME)?;
        let name = self.stream.next_in("table name")?;
        self.stream.expect(CODE_FLAGS)?;
        let max_entries = self.read_count("maximum entry count")?;

        let mut table = Table::new(name, max_entries);
        while !table.is_full() {
            match self.read_table_entry(&table.name)? {
                Some(entry) => table.entries.push(entry),
                None => break,
            }
        }

        self.stream.expect(CODE_ENTITY)?.expect(ENDTAB)?;
        Ok(Some(table))
    }

    /// Read one entry of `table_name`, `None` on the ENDTAB sentinel
    fn read_table_entry(&mut self, table_name: &str) -> Result<Option<TableEntry>> {
        self.stream.expect(CODE_ENTITY)?;
        let tag = self.stream.next_in("table entry")?;
        if tag == ENDTAB {
            self.stream.push_back(tag);
            self.stream.push_back(CODE_ENTITY);
            return Ok(None);
        }
        if tag != table_name {
            return Err(self.unexpected(table_name, tag));
        }

        self.stream.expect(CODE_NAME)?;
        let name = self.stream.next_in("table entry name")?;
        self.stream.expect(CODE_FLAGS)?;
        let flags = self.stream.next_int("table entry flags")?;

        let mut entry = TableEntry::new(name, flags);
        self.read_attributes(&mut entry.attributes)?;
        Ok(Some(entry))
    }

    fn read_count(&mut self, context: &str) -> Result<usize> {
        let value = self.stream.next_in(context)?;
        value.parse::<usize>().map_err(|_| DxfError::MalformedNumber {
            value,
            context: context.to_string(),
            line: self.stream.line_number(),
        })
    }

    // ===== BLOCKS =====

    /// Scan the BLOCKS section to its terminator without decoding it
    pub fn skip_blocks(&mut self, document: &mut DxfDocument) -> Result<()> {
        self.read_prologue("BLOCKS")?;
        let start = self.stream.line_number();

        let skipped = self.skip_to_endsec("BLOCKS")?;
        if skipped > 0 {
            document.notifications.notify_at(
                NotificationType::NotImplemented,
                start,
                format!("BLOCKS section skipped ({} groups)", skipped),
            );
        }
        Ok(())
    }

    /// Consume code/value pairs through `0 ENDSEC`, returning how many
    /// pairs came before it
    fn skip_to_endsec(&mut self, section: &str) -> Result<usize> {
        let mut skipped = 0usize;
        loop {
            let code = self.stream.next_in(&format!("{} group code", section))?;
            let value = self.stream.next_in(&format!("{} value", section))?;
            if code == CODE_ENTITY && value == ENDSEC {
                return Ok(skipped);
            }
            skipped += 1;
        }
    }

    // ===== ENTITIES =====

    /// Read the ENTITIES section
    pub fn read_entities(&mut self, document: &mut DxfDocument) -> Result<()> {
        self.read_prologue("ENTITIES")?;
        while let Some(entity) = self.read_entity()? {
            document.entities.push(entity);
        }
        self.read_epilogue()
    }

    /// Read one entity, `None` at the end of the section
    fn read_entity(&mut self) -> Result<Option<EntityType>> {
        self.stream.expect(CODE_ENTITY)?;
        let tag = self.stream.next_in("entity type")?;
        if tag == ENDSEC {
            self.stream.push_back(tag);
            self.stream.push_back(CODE_ENTITY);
            return Ok(None);
        }
        let tag_line = self.stream.line_number();

        self.stream.expect(CODE_LAYER)?;
        let layer = self.stream.next_in("entity layer")?;

        let entity = match tag.as_str() {
            "POLYLINE" => EntityType::Polyline(self.read_polyline(layer)?),
            "POINT" => EntityType::Point(self.read_point(layer)?),
            _ => return Err(DxfError::UnsupportedEntityType { tag, line: tag_line }),
        };
        Ok(Some(entity))
    }

    /// Read a POINT entity after its layer
    fn read_point(&mut self, layer: String) -> Result<Point> {
        let location = self.read_location()?;
        let mut common = EntityCommon::with_layer(layer);
        self.read_attributes(&mut common.attributes)?;
        Ok(Point { common, location })
    }

    /// Read a POLYLINE entity after its layer, with its vertices
    fn read_polyline(&mut self, layer: String) -> Result<Polyline> {
        self.stream.expect(CODE_VERTICES_FOLLOW)?.expect("1")?;
        self.stream.expect(CODE_FLAGS)?;
        let flags = self.stream.next_int("polyline flags")?;

        let mut common = EntityCommon::with_layer(layer);
        self.read_attributes(&mut common.attributes)?;

        let mut vertices = Vec::new();
        while let Some(vertex) = self.read_vertex(&common.layer)? {
            vertices.push(vertex);
        }

        Ok(Polyline {
            common,
            flags: PolylineFlags::from_bits_retain(flags),
            vertices,
        })
    }

    /// Read one VERTEX of a polyline on `layer`, `None` after SEQEND
    fn read_vertex(&mut self, layer: &str) -> Result<Option<Vertex>> {
        self.stream.expect(CODE_ENTITY)?;
        let tag = self.stream.next_in("VERTEX")?;
        if tag == SEQEND {
            // SEQEND's own groups (layer, handle) carry nothing we keep
            let mut trailing = Attributes::new();
            self.read_attributes(&mut trailing)?;
            return Ok(None);
        }
        if tag != VERTEX {
            return Err(self.unexpected(VERTEX, tag));
        }

        self.stream.expect(CODE_LAYER)?.expect(layer)?;
        let location = self.read_location()?;

        let mut vertex = Vertex::new(layer, location);
        self.read_attributes(&mut vertex.attributes)?;
        Ok(Some(vertex))
    }

    // ===== Trailer =====

    /// Skip a section after ENTITIES (OBJECTS, THUMBNAILIMAGE, ...)
    fn skip_section(&mut self, document: &mut DxfDocument) -> Result<()> {
        self.stream.expect(CODE_NAME)?;
        let name = self.stream.next_in("section name")?;
        let start = self.stream.line_number();

        let skipped = self.skip_to_endsec(&name)?;
        document.notifications.notify_at(
            NotificationType::NotImplemented,
            start,
            format!("{} section skipped ({} groups)", name, skipped),
        );
        Ok(())
    }

    /// Skip any further sections, then read the optional `0 EOF` marker
    pub fn read_trailer(&mut self, document: &mut DxfDocument, require_eof: bool) -> Result<()> {
        loop {
            if self.stream.is_at_end()? {
                if require_eof {
                    return Err(DxfError::UnexpectedEndOfInput {
                        context: format!("EOF marker after line {}", self.stream.line_number()),
                    });
                }
                return Ok(());
            }

            self.stream.expect(CODE_ENTITY)?;
            let token = self.stream.next_in("EOF marker")?;
            if token == EOF {
                break;
            }
            if token != SECTION {
                return Err(self.unexpected(EOF, token));
            }
            self.skip_section(document)?;
        }

        let line = self.stream.line_number();
        let mut extra = 0usize;
        while !self.stream.is_at_end()? {
            self.stream.next()?;
            extra += 1;
        }
        if extra > 0 {
            document.notifications.notify_at(
                NotificationType::Warning,
                line,
                format!("{} lines after the EOF marker ignored", extra),
            );
        }
        Ok(())
    }
}
