//! The `class_set_child_printer` module emits the `set_child_by_name()` method of a class.
//!
//! The generated method compares the runtime yang name of an incoming entity with the
//! qualified yang name of each child, in child order, and stores the entity in the matching
//! member.  Lists take ownership of the entity and become its parent.  Single-valued members
//! are replaced by the entity cast to the member's class.

use crate::api_model::{ClassId, Model, Property};
use crate::class_printer::ClassPrinter;
use crate::error::YangenError;
use crate::pretty_printer::PrettyPrinter;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct ClassSetChildPrinter;

impl ClassSetChildPrinter {
    pub fn new() -> ClassSetChildPrinter {
        ClassSetChildPrinter
    }

    /// Write the `set_child_by_name()` definition of `class` to `stream` with one dispatch
    /// block for each entry of `children`, in the order of `children`.
    ///
    /// # Arguments
    ///
    /// * `printer` - The [`PrettyPrinter`] that will write content to `stream`.
    /// * `stream` - The [`Write`] object that will receive formatted output.
    /// * `model` - The [`Model`] that owns `class` and the child classes.
    /// * `class` - The class whose method to print.
    /// * `children` - The children to dispatch to.
    pub fn print_class_set_child<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
        children: &[Property],
    ) -> Result<(), YangenError> {
        self.print_header(printer, stream, model, class)?;
        self.print_body(printer, stream, model, class, children)?;
        self.print_trailer(printer, stream)
    }

    fn print_header<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
    ) -> Result<(), YangenError> {
        printer.writeln(
            stream,
            &format!(
                "void {}::set_child_by_name(const std::string & child_yang_name, std::shared_ptr<ydk::Entity> _ent)",
                model.qualified_cpp_name(class)
            ),
        )?;
        printer.writeln(stream, "{")?;
        printer.lvl_inc();
        Ok(())
    }

    fn print_body<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
        children: &[Property],
    ) -> Result<(), YangenError> {
        for child in children {
            self.print_child(printer, stream, model, class, child)?;
            printer.bline(stream)?;
        }
        Ok(())
    }

    fn print_child<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
        child: &Property,
    ) -> Result<(), YangenError> {
        // Resolve the member type before writing so a malformed child leaves no partial block.
        let unique_type = if child.is_many {
            None
        } else {
            match child.property_type {
                Some(property_type) => Some(model.qualified_cpp_name(property_type)),
                None => {
                    return Err(YangenError::MissingPropertyType(
                        model.qualified_cpp_name(class),
                        child.name.clone(),
                    ))
                }
            }
        };

        printer.writeln(
            stream,
            &format!("if(child_yang_name == \"{}\")", child.qualified_yang_name()),
        )?;
        printer.writeln(stream, "{")?;
        printer.lvl_inc();
        match unique_type {
            None => {
                printer.writeln(stream, "_ent->parent = this;")?;
                printer.writeln(stream, &format!("{}.append(std::move(_ent));", child.name))?;
            }
            Some(type_name) => {
                printer.writeln(
                    stream,
                    &format!(
                        "{} = std::static_pointer_cast<{}>(_ent);",
                        child.name, type_name
                    ),
                )?;
            }
        }
        printer.lvl_dec();
        printer.writeln(stream, "}")
    }

    fn print_trailer<W: Write>(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
    ) -> Result<(), YangenError> {
        printer.lvl_dec();
        printer.writeln(stream, "}")?;
        printer.bline(stream)
    }
}

impl<W: Write> ClassPrinter<W> for ClassSetChildPrinter {
    fn print_class(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut W,
        model: &Model,
        class: ClassId,
    ) -> Result<(), YangenError> {
        self.print_class_set_child(printer, stream, model, class, &model.class(class).children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_model::Owner;
    use crate::statement::Statement;

    const HEADER: &str = "void Bgp::set_child_by_name(const std::string & child_yang_name, std::shared_ptr<ydk::Entity> _ent)\n";

    struct Fixture {
        model: Model,
        bgp: ClassId,
    }

    fn fixture() -> Fixture {
        let mut model = Model::new();
        let package = model.add_package("openconfig_bgp", Statement::new("module", Some("openconfig-bgp")));
        let bgp = model.add_class("Bgp", Some(Owner::Package(package)));
        let global = model.add_class("Global", Some(Owner::Class(bgp)));
        let neighbor = model.add_class("Neighbor", Some(Owner::Class(bgp)));
        model.add_child(bgp, Property::unique("global", "global", global));
        model.add_child(bgp, Property::many("neighbor", "neighbor", Some(neighbor)));
        Fixture { model, bgp }
    }

    fn print(fixture: &Fixture, printer: &mut PrettyPrinter) -> String {
        let mut out: Vec<u8> = Vec::new();
        ClassSetChildPrinter::new()
            .print_class(printer, &mut out, &fixture.model, fixture.bgp)
            .unwrap();
        String::from_utf8(out).unwrap().replace("\r\n", "\n")
    }

    #[test]
    fn test_print_unique_and_many_children() {
        let fixture = fixture();
        let text = print(&fixture, &mut PrettyPrinter::new(4));
        let expected = String::from(HEADER)
            + "{\n"
            + "    if(child_yang_name == \"global\")\n"
            + "    {\n"
            + "        global = std::static_pointer_cast<Bgp::Global>(_ent);\n"
            + "    }\n"
            + "\n"
            + "    if(child_yang_name == \"neighbor\")\n"
            + "    {\n"
            + "        _ent->parent = this;\n"
            + "        neighbor.append(std::move(_ent));\n"
            + "    }\n"
            + "\n"
            + "}\n"
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_print_without_children() {
        let mut model = Model::new();
        let bgp = model.add_class("Bgp", None);
        let mut out: Vec<u8> = Vec::new();
        ClassSetChildPrinter::new()
            .print_class_set_child(&mut PrettyPrinter::new(4), &mut out, &model, bgp, &[])
            .unwrap();
        let text = String::from_utf8(out).unwrap().replace("\r\n", "\n");
        assert_eq!(text, String::from(HEADER) + "{\n}\n\n");
    }

    #[test]
    fn test_blocks_follow_given_order() {
        let fixture = fixture();
        let mut reversed = fixture.model.class(fixture.bgp).children.clone();
        reversed.reverse();

        let mut out: Vec<u8> = Vec::new();
        ClassSetChildPrinter::new()
            .print_class_set_child(
                &mut PrettyPrinter::new(4),
                &mut out,
                &fixture.model,
                fixture.bgp,
                &reversed,
            )
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        let conditions: Vec<&str> = text
            .lines()
            .filter(|l| l.trim_start().starts_with("if(child_yang_name"))
            .collect();
        assert_eq!(
            conditions,
            vec![
                "    if(child_yang_name == \"neighbor\")",
                "    if(child_yang_name == \"global\")"
            ]
        );
    }

    #[test]
    fn test_many_child_sets_parent_before_append() {
        let fixture = fixture();
        let text = print(&fixture, &mut PrettyPrinter::new(4));
        let parent = text.find("_ent->parent = this;").unwrap();
        let append = text.find("neighbor.append(std::move(_ent));").unwrap();
        assert!(parent < append);
        assert_eq!(text.matches("_ent->parent = this;").count(), 1);
    }

    #[test]
    fn test_augmented_child_uses_module_prefix() {
        let mut model = Model::new();
        let bgp = model.add_class("Bgp", None);
        let extra = model.add_class("Extra", Some(Owner::Class(bgp)));
        model.add_child(
            bgp,
            Property::unique("extra", "extra", extra).with_module("example-augment"),
        );

        let mut out: Vec<u8> = Vec::new();
        ClassSetChildPrinter::new()
            .print_class(&mut PrettyPrinter::new(4), &mut out, &model, bgp)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("if(child_yang_name == \"example-augment:extra\")"));
        assert!(text.contains("extra = std::static_pointer_cast<Bgp::Extra>(_ent);"));
    }

    #[test]
    fn test_unique_child_without_type_is_an_error() {
        let mut model = Model::new();
        let bgp = model.add_class("Bgp", None);
        let mut broken = Property::many("global", "global", None);
        broken.is_many = false;
        model.add_child(bgp, broken);

        let mut out: Vec<u8> = Vec::new();
        let result =
            ClassSetChildPrinter::new().print_class(&mut PrettyPrinter::new(4), &mut out, &model, bgp);
        assert!(matches!(
            result,
            Err(YangenError::MissingPropertyType(class, child)) if class == "Bgp" && child == "global"
        ));
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("child_yang_name =="));
    }

    #[test]
    fn test_output_is_repeatable_and_indent_balanced() {
        let fixture = fixture();
        let mut printer = PrettyPrinter::new(4);
        printer.lvl_inc();
        let first = print(&fixture, &mut printer);
        assert_eq!(printer.indent, 1);
        let second = print(&fixture, &mut printer);
        assert_eq!(printer.indent, 1);
        assert_eq!(first, second);
        assert!(first.starts_with("    void Bgp::set_child_by_name("));
    }
}
