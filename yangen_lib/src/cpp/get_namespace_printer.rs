//! The `get_namespace_printer` module emits the `get_namespace()` accessor of a class.

use crate::api_model::{ClassId, Model};
use crate::class_printer::ClassPrinter;
use crate::error::YangenError;
use crate::pretty_printer::PrettyPrinter;
use std::io::Write;

/// Prints the definition of `get_namespace()`, which returns the yang namespace of the module
/// that declares a top level class and the empty string for every other class.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetNamespacePrinter;

impl GetNamespacePrinter {
    pub fn new() -> GetNamespacePrinter {
        GetNamespacePrinter
    }

    /// Write the `get_namespace()` definition of `class` to `stream`.
    ///
    /// The namespace text goes into the string literal as is.  A namespace containing a `"`
    /// produces C++ that does not compile.
    pub fn print_output<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
    ) -> Result<(), YangenError> {
        let namespace = model.namespace(class);

        printer.writeln(
            stream,
            &format!(
                "const std::string {}::get_namespace() const",
                model.qualified_cpp_name(class)
            ),
        )?;
        printer.writeln(stream, "{")?;
        printer.lvl_inc();
        match namespace {
            Some(ns) => printer.writeln(stream, &format!("return \"{ns}\";"))?,
            None => printer.writeln(stream, "return \"\";")?,
        }
        printer.lvl_dec();
        printer.writeln(stream, "}")?;
        printer.bline(stream)
    }
}

impl<W: Write> ClassPrinter<W> for GetNamespacePrinter {
    fn print_class(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
    ) -> Result<(), YangenError> {
        self.print_output(printer, stream, model, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_model::Owner;
    use crate::statement::Statement;

    fn print(model: &Model, class: ClassId, printer: &mut PrettyPrinter) -> String {
        let mut out: Vec<u8> = Vec::new();
        GetNamespacePrinter::new()
            .print_output(printer, &mut out, model, class)
            .unwrap();
        String::from_utf8(out).unwrap().replace("\r\n", "\n")
    }

    #[test]
    fn test_package_namespace_is_returned() {
        let mut model = Model::new();
        let stmt = Statement::new("module", Some("example"))
            .with_substatement(Statement::new("namespace", Some("urn:example")));
        let package = model.add_package("example", stmt);
        let class = model.add_class("Example", Some(Owner::Package(package)));

        let text = print(&model, class, &mut PrettyPrinter::new(4));
        assert_eq!(
            text,
            "const std::string Example::get_namespace() const\n\
             {\n    return \"urn:example\";\n}\n\n"
        );
    }

    #[test]
    fn test_nested_class_returns_empty_string() {
        let mut model = Model::new();
        let stmt = Statement::new("module", Some("example"))
            .with_substatement(Statement::new("namespace", Some("urn:example")));
        let package = model.add_package("example", stmt);
        let top = model.add_class("Example", Some(Owner::Package(package)));
        let nested = model.add_class("Inner", Some(Owner::Class(top)));

        let text = print(&model, nested, &mut PrettyPrinter::new(4));
        assert_eq!(
            text,
            "const std::string Example::Inner::get_namespace() const\n\
             {\n    return \"\";\n}\n\n"
        );
    }

    #[test]
    fn test_package_without_namespace_returns_empty_string() {
        let mut model = Model::new();
        let package = model.add_package("example", Statement::new("module", Some("example")));
        let class = model.add_class("Example", Some(Owner::Package(package)));

        let text = print(&model, class, &mut PrettyPrinter::new(4));
        assert!(text.contains("    return \"\";\n"));
    }

    #[test]
    fn test_class_without_owner_returns_empty_string() {
        let mut model = Model::new();
        let class = model.add_class("Loose", None);

        let text = print(&model, class, &mut PrettyPrinter::new(4));
        assert!(text.starts_with("const std::string Loose::get_namespace() const\n"));
        assert!(text.contains("    return \"\";\n"));
    }

    #[test]
    fn test_output_is_repeatable_and_indent_balanced() {
        let mut model = Model::new();
        let stmt = Statement::new("module", Some("example"))
            .with_substatement(Statement::new("namespace", Some("urn:example")));
        let package = model.add_package("example", stmt);
        let class = model.add_class("Example", Some(Owner::Package(package)));

        let mut printer = PrettyPrinter::new(2);
        printer.lvl_inc();
        let first = print(&model, class, &mut printer);
        assert_eq!(printer.indent, 1);
        let second = print(&model, class, &mut printer);
        assert_eq!(printer.indent, 1);
        assert_eq!(first, second);
        assert!(first.contains("\n    return \"urn:example\";\n"));
    }
}
