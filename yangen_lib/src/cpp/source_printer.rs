//! The `source_printer` module combines class printers into the printer for the source of a
//! whole package.

use crate::api_model::{ClassId, Model, PackageId};
use crate::class_printer::ClassPrinter;
use crate::cpp::class_set_child_printer::ClassSetChildPrinter;
use crate::cpp::get_namespace_printer::GetNamespacePrinter;
use crate::error::YangenError;
use crate::pretty_printer::PrettyPrinter;
use std::io::Write;

/// Runs an ordered list of [`ClassPrinter<W>`] objects over classes.  For each class every
/// printer runs once, in list order.
pub struct SourcePrinter<W: Write> {
    printers: Vec<Box<dyn ClassPrinter<W>>>,
}

impl<W: Write> SourcePrinter<W> {
    /// Create a source printer that runs `printers` in the given order.
    pub fn new(printers: Vec<Box<dyn ClassPrinter<W>>>) -> SourcePrinter<W> {
        SourcePrinter { printers }
    }

    /// Print the given classes in the given order.
    ///
    /// # Arguments
    ///
    /// * `printer` - The [`PrettyPrinter`] that will write content to `stream`.
    /// * `stream` - The [`Write`] object that will receive formatted output.
    /// * `model` - The [`Model`] that owns the classes.
    /// * `classes` - The classes to print.
    pub fn print_classes(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        classes: &[ClassId],
    ) -> Result<(), YangenError> {
        for class in classes {
            log::debug!("Printing class {}", model.qualified_cpp_name(*class));
            for class_printer in &self.printers {
                class_printer.print_class(printer, stream, model, *class)?;
            }
        }
        Ok(())
    }

    /// Print every class of `package`, outer classes before the classes nested in them.
    pub fn print_package(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        package: PackageId,
    ) -> Result<(), YangenError> {
        let classes = model.classes_of_package(package);
        log::debug!(
            "Printing {} classes of package {}",
            classes.len(),
            model.package(package).name
        );
        self.print_classes(printer, stream, model, &classes)
    }
}

impl<W: Write> Default for SourcePrinter<W> {
    /// The namespace accessor followed by the child dispatch method.
    fn default() -> Self {
        SourcePrinter::new(vec![
            Box::new(GetNamespacePrinter::new()),
            Box::new(ClassSetChildPrinter::new()),
        ])
    }
}
