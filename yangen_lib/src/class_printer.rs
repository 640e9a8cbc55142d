//! The `class_printer` module contains the [`ClassPrinter<W>`] trait.

use crate::api_model::{ClassId, Model};
use crate::error::YangenError;
use crate::pretty_printer::PrettyPrinter;
use std::io::Write;

/// Trait that provides the functionality needed by objects that print one part of the source
/// of a generated class.
///
/// Implementations hold no state between calls.  Printing the same class twice from the same
/// indentation level produces the same text, and every implementation leaves the indentation
/// level of `printer` where it found it.
pub trait ClassPrinter<W: Write> {
    /// Write the source text for `class` to `stream`.
    ///
    /// # Arguments
    ///
    /// * `printer` - The [`PrettyPrinter`] that will write content to `stream`.
    /// * `stream` - The [`Write`] object that will receive formatted output.
    /// * `model` - The [`Model`] that owns `class`.
    /// * `class` - The class to print.
    fn print_class(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
    ) -> Result<(), YangenError>;
}
