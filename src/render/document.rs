//! SVG document assembly and writing

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// A complete SVG document: source bitmap dimensions plus one path
/// data string per traced curve.
///
/// The document is built fully in memory and serialized once; it is
/// never touched after writing.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    paths: Vec<String>,
}

impl SvgDocument {
    /// Create an empty document sized to the source bitmap
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    /// Append one path data string. Paths render in insertion order.
    pub fn push_path(&mut self, d: String) {
        self.paths.push(d);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Serialize the document to SVG text.
    ///
    /// The envelope is a bare `<svg>` root with the SVG namespace and
    /// pixel dimensions; every path renders as solid black with no
    /// stroke. An empty document is still well-formed.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        for d in &self.paths {
            let _ = writeln!(out, r#"  <path d="{}" fill="black" />"#, d);
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to `destination`, creating or overwriting it.
    ///
    /// Serialization happens in memory first, so a failed write never
    /// leaves a partially rendered document behind a successful one.
    pub fn write_to(&self, destination: &Path) -> Result<(), Error> {
        let svg = self.to_svg();
        fs::write(destination, svg).map_err(|source| Error::Write {
            path: destination.to_path_buf(),
            source,
        })
    }
}
