//! The `model_listing` module writes a summary of the packages and classes of a model.

use crate::ListCLArgs;
use std::io::{stdout, Write};
use yangen_lib::model_file::load_model_from_file_with_name;
use yangen_lib::{Model, PrettyPrinter, YangenError};

/// Load the model named in `args` and write its classes to stdout.
pub fn list_model_classes(args: ListCLArgs) -> Result<(), YangenError> {
    let model = load_model_from_file_with_name(&args.model)?;
    let mut printer = PrettyPrinter::new(2);
    write_model_listing(&model, &mut printer, &mut stdout())
}

/// Write one line per package, followed by one indented line per class of the package with
/// its qualified C++ name and, for top level classes, the namespace.
pub fn write_model_listing<W: Write>(
    model: &Model,
    printer: &mut PrettyPrinter,
    stream: &mut W,
) -> Result<(), YangenError> {
    for package in model.package_ids() {
        let package_data = model.package(package);
        match package_data.module_name() {
            Some(module) => printer.writeln(stream, &format!("{} ({})", package_data.name, module))?,
            None => printer.writeln(stream, &package_data.name)?,
        }

        printer.lvl_inc();
        for class in model.classes_of_package(package) {
            let name = model.qualified_cpp_name(class);
            match model.namespace(class) {
                Some(namespace) => printer.writeln(stream, &format!("{name} {namespace}"))?,
                None => printer.writeln(stream, &name)?,
            }
        }
        printer.lvl_dec();
    }
    Ok(())
}
