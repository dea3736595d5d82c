//! DXF text builder for integration tests.
//!
//! Produces ASCII DXF content one group at a time, with helpers for the
//! constructs the reader understands.

#![allow(dead_code)]

/// Builds ASCII DXF content line by line.
#[derive(Debug, Default, Clone)]
pub struct DxfBuilder {
    lines: Vec<String>,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One raw line
    pub fn line(mut self, text: impl ToString) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// One `code` / `value` group
    pub fn pair(self, code: impl ToString, value: impl ToString) -> Self {
        self.line(code).line(value)
    }

    pub fn begin_section(self, name: &str) -> Self {
        self.pair(0, "SECTION").pair(2, name)
    }

    pub fn end_section(self) -> Self {
        self.pair(0, "ENDSEC")
    }

    /// `0 EOF`
    pub fn eof(self) -> Self {
        self.pair(0, "EOF")
    }

    /// Header variable with one group
    pub fn variable(self, name: &str, code: i32, value: impl ToString) -> Self {
        self.pair(9, name).pair(code, value)
    }

    /// Header variable holding a 3D point
    pub fn point_variable(self, name: &str, x: f64, y: f64, z: f64) -> Self {
        self.pair(9, name).pair(10, x).pair(20, y).pair(30, z)
    }

    /// Empty HEADER section
    pub fn empty_header(self) -> Self {
        self.begin_section("HEADER").end_section()
    }

    pub fn begin_table(self, name: &str, max_entries: i64) -> Self {
        self.pair(0, "TABLE").pair(2, name).pair(70, max_entries)
    }

    pub fn table_entry(self, tag: &str, name: &str, flags: i32) -> Self {
        self.pair(0, tag).pair(2, name).pair(70, flags)
    }

    pub fn end_table(self) -> Self {
        self.pair(0, "ENDTAB")
    }

    /// TABLES section with a single LAYER table listing `layers`
    pub fn layer_tables(self, layers: &[(&str, i32)]) -> Self {
        let mut b = self
            .begin_section("TABLES")
            .begin_table("LAYER", layers.len() as i64);
        for (name, flags) in layers {
            b = b.table_entry("LAYER", name, *flags);
        }
        b.end_table().end_section()
    }

    /// Empty BLOCKS section
    pub fn empty_blocks(self) -> Self {
        self.begin_section("BLOCKS").end_section()
    }

    pub fn point(self, layer: &str, x: f64, y: f64, z: f64) -> Self {
        self.pair(0, "POINT")
            .pair(8, layer)
            .pair(10, x)
            .pair(20, y)
            .pair(30, z)
    }

    pub fn begin_polyline(self, layer: &str, flags: i32) -> Self {
        self.pair(0, "POLYLINE")
            .pair(8, layer)
            .pair(66, 1)
            .pair(70, flags)
    }

    pub fn vertex(self, layer: &str, x: f64, y: f64, z: f64) -> Self {
        self.pair(0, "VERTEX")
            .pair(8, layer)
            .pair(10, x)
            .pair(20, y)
            .pair(30, z)
    }

    pub fn seqend(self, layer: &str) -> Self {
        self.pair(0, "SEQEND").pair(8, layer)
    }

    /// Complete polyline with its vertices and SEQEND
    pub fn polyline(self, layer: &str, flags: i32, vertices: &[(f64, f64, f64)]) -> Self {
        let mut b = self.begin_polyline(layer, flags);
        for &(x, y, z) in vertices {
            b = b.vertex(layer, x, y, z);
        }
        b.seqend(layer)
    }

    /// LF-terminated text
    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// CRLF-terminated text
    pub fn build_crlf(&self) -> String {
        let mut out = self.lines.join("\r\n");
        out.push_str("\r\n");
        out
    }

    pub fn build_bytes(&self) -> Vec<u8> {
        self.build().into_bytes()
    }

    /// Number of lines so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Empty HEADER, one LAYER table with layer `0`, empty BLOCKS, and an
/// ENTITIES section holding whatever `entities` adds.
pub fn document_with<F>(entities: F) -> DxfBuilder
where
    F: FnOnce(DxfBuilder) -> DxfBuilder,
{
    let b = DxfBuilder::new()
        .empty_header()
        .layer_tables(&[("0", 64)])
        .empty_blocks()
        .begin_section("ENTITIES");
    entities(b).end_section()
}
