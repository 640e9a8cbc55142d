//! The `model_file` module reads a resolved class model from JSON and builds the [`Model`] the
//! printers work on.
//!
//! A model file describes packages, the classes nested in them, and the children of each
//! class:
//!
//! ```json
//! {
//!   "packages": [{
//!     "name": "openconfig_bgp",
//!     "statement": {
//!       "keyword": "module",
//!       "arg": "openconfig-bgp",
//!       "substatements": [{"keyword": "namespace", "arg": "http://openconfig.net/yang/bgp"}]
//!     },
//!     "classes": [{
//!       "name": "Bgp",
//!       "children": [{"name": "global", "yang_name": "global", "type": "Bgp::Global"}],
//!       "classes": [{"name": "Global"}]
//!     }]
//!   }]
//! }
//! ```
//!
//! Building the model checks the invariants the printers rely on: every type reference
//! resolves, every single-valued child has a type, and no class has two children with the
//! same qualified yang name.

use crate::api_model::{ClassId, Model, Owner, PackageId, Property};
use crate::error::YangenError;
use crate::statement::Statement;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

/// Top level of a model file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescription {
    pub packages: Vec<PackageDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDescription {
    pub name: String,
    pub statement: Statement,

    #[serde(default)]
    pub classes: Vec<ClassDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDescription {
    pub name: String,

    #[serde(default)]
    pub children: Vec<PropertyDescription>,

    /// Classes nested in this class.
    #[serde(default)]
    pub classes: Vec<ClassDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub name: String,
    pub yang_name: String,

    /// The module that defines the schema node, if it differs from the package module.
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub is_many: bool,

    /// The `::` qualified name of the child class.
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,

    /// The package of the child class.  Defaults to the package of the owning class.
    #[serde(default)]
    pub type_package: Option<String>,
}

/// Read the model file named by `file_name` and build its [`Model`].
///
/// # Arguments
///
/// * `file_name` - The path to the model file in the file system.
///
/// # Errors
///
/// The function returns [`YangenError::IO`] if the file cannot be read,
/// [`YangenError::JSON`] if it does not hold a model description, and the errors of
/// [`ModelDescription::build`] if the description violates the model invariants.
pub fn load_model_from_file_with_name(file_name: &str) -> Result<Model, YangenError> {
    let file = File::open(file_name)?;
    let reader = BufReader::new(file);
    let description: ModelDescription = serde_json::from_reader(reader)?;
    log::debug!(
        "Loaded {} packages from {}",
        description.packages.len(),
        file_name
    );
    description.build()
}

/// Build the [`Model`] described by the JSON in `text`.
pub fn load_model_from_str(text: &str) -> Result<Model, YangenError> {
    let description: ModelDescription = serde_json::from_str(text)?;
    description.build()
}

impl ModelDescription {
    /// Build the [`Model`] for the description.
    ///
    /// All classes are added first so that children can refer to classes declared anywhere
    /// in the description, including other packages.
    pub fn build(&self) -> Result<Model, YangenError> {
        let mut model = Model::new();
        let mut pending: Vec<(ClassId, PackageId, &ClassDescription)> = Vec::new();

        for package_description in &self.packages {
            if model.find_package(&package_description.name).is_some() {
                return Err(YangenError::DuplicatePackage(
                    package_description.name.clone(),
                ));
            }
            let package = model.add_package(
                &package_description.name,
                package_description.statement.clone(),
            );
            for class_description in &package_description.classes {
                add_class(
                    &mut model,
                    package,
                    Owner::Package(package),
                    class_description,
                    &mut pending,
                );
            }
        }

        for (class, package, class_description) in pending {
            let children = resolve_children(&model, class, package, class_description)?;
            for child in children {
                model.add_child(class, child);
            }
        }

        Ok(model)
    }
}

fn add_class<'a>(
    model: &mut Model,
    package: PackageId,
    owner: Owner,
    description: &'a ClassDescription,
    pending: &mut Vec<(ClassId, PackageId, &'a ClassDescription)>,
) {
    let class = model.add_class(&description.name, Some(owner));
    pending.push((class, package, description));
    for nested in &description.classes {
        add_class(model, package, Owner::Class(class), nested, pending);
    }
}

fn resolve_children(
    model: &Model,
    class: ClassId,
    package: PackageId,
    description: &ClassDescription,
) -> Result<Vec<Property>, YangenError> {
    let module_name = model.package(package).module_name();
    let mut seen: HashSet<String> = HashSet::new();
    let mut children = Vec::new();

    for child in &description.children {
        let property_type = match &child.property_type {
            Some(type_name) => Some(resolve_type(model, package, child, type_name)?),
            None => None,
        };

        if !child.is_many && property_type.is_none() {
            return Err(YangenError::MissingPropertyType(
                model.qualified_cpp_name(class),
                child.name.clone(),
            ));
        }

        let module = match &child.module {
            Some(m) if Some(m.as_str()) != module_name => Some(m.clone()),
            _ => None,
        };

        let property = Property {
            name: child.name.clone(),
            yang_name: child.yang_name.clone(),
            module,
            is_many: child.is_many,
            property_type,
        };

        if !seen.insert(property.qualified_yang_name()) {
            return Err(YangenError::DuplicateChild(
                model.qualified_cpp_name(class),
                property.qualified_yang_name(),
            ));
        }
        children.push(property);
    }

    Ok(children)
}

fn resolve_type(
    model: &Model,
    package: PackageId,
    child: &PropertyDescription,
    type_name: &str,
) -> Result<ClassId, YangenError> {
    let unresolved = || {
        let full_name = match &child.type_package {
            Some(p) => format!("{p}/{type_name}"),
            None => String::from(type_name),
        };
        YangenError::UnresolvedPropertyType(child.name.clone(), full_name)
    };

    let type_package = match &child.type_package {
        Some(name) => model.find_package(name).ok_or_else(unresolved)?,
        None => package,
    };
    model
        .find_class(type_package, type_name)
        .ok_or_else(unresolved)
}
