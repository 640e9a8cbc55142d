//! # Yangen Lib
//!
//! `yangen_lib` turns a resolved model of yang modules into the source text of generated C++
//! classes.
//!
//! ## Yangen Lib Design
//!
//! The library does not parse yang.  It receives a [`Model`] whose packages, classes and child
//! properties are already resolved, either built in code or loaded from a model file with
//! [`model_file::load_model_from_file_with_name`].  Printers then walk the model:
//! - [`GetNamespacePrinter`] writes the `get_namespace()` accessor of a class.
//! - [`ClassSetChildPrinter`] writes the `set_child_by_name()` dispatch method of a class.
//! - [`SourcePrinter`] runs a list of class printers over every class of a package.
//!
//! All printers write lines through a [`PrettyPrinter`], which tracks the indentation, to any
//! [`std::io::Write`] object.

pub use self::api_model::{Class, ClassId, Model, Owner, Package, PackageId, Property};
pub use self::class_printer::ClassPrinter;
pub use self::cpp::class_set_child_printer::ClassSetChildPrinter;
pub use self::cpp::get_namespace_printer::GetNamespacePrinter;
pub use self::cpp::source_printer::SourcePrinter;
pub use self::error::YangenError;
pub use self::pretty_printer::PrettyPrinter;
pub use self::statement::Statement;

pub mod api_model;
pub mod class_printer;
pub mod config_file;
pub mod cpp;
pub mod error;
pub mod model_file;
pub mod pretty_printer;
pub mod statement;
