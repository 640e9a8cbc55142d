//! The `cpp` module contains the printers that emit C++ source for the classes of a model.

pub mod class_set_child_printer;
pub mod get_namespace_printer;
pub mod source_printer;
