//! The `pretty_printer` module contains the line emitter the class printers use to write
//! generated source code.

use crate::error::YangenError;
use std::io::Write;

/// The number of spaces written for each indentation level unless the caller asks for a
/// different width.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Object that tracks the indentation cursor needed to write line-structured output to any
/// object that implements the [`Write`] trait.
///
/// The printer does not own the output.  Every write function takes the stream as an argument
/// so that one printer can move between several outputs, and so that several printers can
/// work independently on distinct outputs.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    pub row: usize,
    pub tab_width: usize,
    pub indent: usize,
    pub newline: String,
}

impl PrettyPrinter {
    /// Initialize a new pretty-printer object
    ///
    /// # Arguments
    ///
    /// * `tab_width` - The number of spaces to use for one level of indentation.
    pub fn new(tab_width: usize) -> PrettyPrinter {
        let newline = if cfg!(target_os = "windows") {
            "\r\n"
        } else {
            "\n"
        };

        PrettyPrinter {
            row: 1,
            tab_width,
            indent: 0,
            newline: String::from(newline),
        }
    }

    /// Increase the indentation level by 1.
    pub fn lvl_inc(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation level by 1.
    ///
    /// The function will not decrease the indent lower than 0.
    pub fn lvl_dec(&mut self) {
        if self.indent == 0 {
            return;
        }
        self.indent -= 1;
    }

    /// Return the length of the current indentation in spaces.
    fn indent_length(&self) -> usize {
        self.indent * self.tab_width
    }

    /// Return the string that makes up the indentation prefix for a new line.
    pub fn indent_string(&self) -> String {
        " ".repeat(self.indent_length())
    }

    /// Write `text` to `stream` as one complete line prefixed by the current indentation.
    ///
    /// # Arguments
    ///
    /// * `stream` - The object that implements the [`Write`] trait.
    /// * `text` - The content of the line, without indentation or line terminator.
    pub fn writeln<W: Write>(&mut self, stream: &mut W, text: &str) -> Result<(), YangenError> {
        let indentation = self.indent_string();
        if !indentation.is_empty() {
            self.write_basic_string(stream, &indentation)?;
        }
        self.write_basic_string(stream, text)?;
        self.write_newline(stream)
    }

    /// Write an empty line to `stream`.  Blank lines never carry indentation.
    ///
    /// # Arguments
    ///
    /// * `stream` - The object that implements the [`Write`] trait.
    pub fn bline<W: Write>(&mut self, stream: &mut W) -> Result<(), YangenError> {
        self.write_newline(stream)
    }

    /// Return the number of lines written since the printer was created or last reset.
    pub fn lines_written(&self) -> usize {
        self.row - 1
    }

    /// Reset the printer output counters
    pub fn reset(&mut self) {
        self.row = 1;
        self.indent = 0;
    }

    fn write_newline<W: Write>(&mut self, stream: &mut W) -> Result<(), YangenError> {
        write!(stream, "{}", self.newline)?;
        self.row += 1;
        Ok(())
    }

    /// Low-level function to write a string to the stream.
    fn write_basic_string<W: Write>(&mut self, stream: &mut W, s: &str) -> Result<(), YangenError> {
        write!(stream, "{s}")?;
        Ok(())
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        PrettyPrinter::new(DEFAULT_TAB_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap().replace("\r\n", "\n")
    }

    #[test]
    fn test_printer_lvl_inc() {
        let mut printer = PrettyPrinter::new(2);
        printer.lvl_inc();
        assert_eq!(printer.indent_length(), 2);
        printer.lvl_inc();
        assert_eq!(printer.indent_length(), 4);
        assert_eq!(printer.indent_string(), "    ");
    }

    #[test]
    fn test_printer_lvl_dec() {
        let mut printer = PrettyPrinter::new(4);
        printer.lvl_inc();
        printer.lvl_dec();
        assert_eq!(printer.indent_length(), 0);
        printer.lvl_dec();
        assert_eq!(printer.indent_length(), 0);
    }

    #[test]
    fn test_printer_writeln_uses_indent() {
        let mut printer = PrettyPrinter::new(4);
        let mut out: Vec<u8> = Vec::new();
        printer.writeln(&mut out, "{").unwrap();
        printer.lvl_inc();
        printer.writeln(&mut out, "return;").unwrap();
        printer.lvl_dec();
        printer.writeln(&mut out, "}").unwrap();
        assert_eq!(text(out), "{\n    return;\n}\n");
        assert_eq!(printer.row, 4);
        assert_eq!(printer.lines_written(), 3);
    }

    #[test]
    fn test_printer_bline_has_no_indent() {
        let mut printer = PrettyPrinter::new(4);
        let mut out: Vec<u8> = Vec::new();
        printer.lvl_inc();
        printer.lvl_inc();
        printer.bline(&mut out).unwrap();
        assert_eq!(text(out), "\n");
    }

    #[test]
    fn test_printer_reset() {
        let mut printer = PrettyPrinter::default();
        let mut out: Vec<u8> = Vec::new();
        printer.lvl_inc();
        printer.writeln(&mut out, "x").unwrap();
        printer.reset();
        assert_eq!(printer.indent, 0);
        assert_eq!(printer.row, 1);
        assert_eq!(printer.lines_written(), 0);
        assert_eq!(printer.tab_width, DEFAULT_TAB_WIDTH);
    }
}
