//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

/// File-backed SVG writer.
pub(crate) struct SvgWriter {
    writer: BufWriter<File>,
}

/// String-based SVG writer for in-memory rendering.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }

    /// Flush buffered output and close the writer.
    pub(crate) fn finish(mut self) -> Result<()> {
        self.writer.flush().context("[io::svg] Failed to flush SVG output")
    }
}

impl SvgStringWriter {
    /// Create a new string-based SVG writer
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Write the SVG header: XML declaration, opening tag, white background.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write SVG styles for chart features.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .axis {{ stroke: #111827; stroke-width: 1; }}
    .grid {{ stroke: #e5e7eb; stroke-width: 0.5; }}
    .whisker {{ stroke: #111827; stroke-width: 1.5; }}
    .tick {{ font: 10px sans-serif; fill: #374151; }}
    .label {{ font: bold 12px sans-serif; fill: #111827; }}
    .title {{ font: bold 14px sans-serif; fill: #111827; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_writer_produces_a_framed_document() {
        let mut writer = SvgStringWriter::new();
        write_svg_header(&mut writer, 100.0, 50.0).unwrap();
        write_svg_styles(&mut writer).unwrap();
        write_svg_footer(&mut writer).unwrap();

        let svg = writer.into_string().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn file_writer_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let mut writer = SvgWriter::new(&path).unwrap();
        write_svg_header(&mut writer, 10.0, 10.0).unwrap();
        write_svg_footer(&mut writer).unwrap();
        writer.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }
}
