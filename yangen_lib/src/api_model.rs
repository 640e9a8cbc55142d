//! The `api_model` module contains the resolved class model the printers read: packages that
//! stand for yang modules, the classes generated for them, and the child properties of each
//! class.
//!
//! The [`Model`] owns every package and class.  Other parts of the library refer to them with
//! the copyable [`PackageId`] and [`ClassId`] handles the model hands out.  A class can only be
//! added with an owner that already exists in the model, so owner chains always end at a
//! package or at a class without an owner.

use crate::statement::Statement;
use std::collections::HashMap;

/// Handle for a [`Package`] stored in a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(usize);

/// Handle for a [`Class`] stored in a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

/// The element that encloses a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// The class is a top level class of a yang module.
    Package(PackageId),

    /// The class is nested inside another class.
    Class(ClassId),
}

/// A yang module and its statement tree.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub stmt: Statement,

    /// The classes owned directly by the package, in insertion order.
    pub classes: Vec<ClassId>,
}

impl Package {
    /// Return the name of the yang module, the argument of the root statement.
    pub fn module_name(&self) -> Option<&str> {
        self.stmt.arg.as_deref()
    }
}

/// A generated class.
#[derive(Debug, Clone)]
pub struct Class {
    pub name: String,
    pub owner: Option<Owner>,

    /// The child properties in declaration order.  The order is part of the generated output.
    pub children: Vec<Property>,

    /// The classes nested in this class, in insertion order.
    pub nested: Vec<ClassId>,
}

/// A child property of a class: a container, a list or another entity that the class holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The member name in the generated class.
    pub name: String,

    /// The name of the schema node the property represents.
    pub yang_name: String,

    /// The module defining the schema node when that module is not the module of the owning
    /// class (augmented nodes).  `None` for nodes of the owner's own module.
    pub module: Option<String>,

    /// True for a multi-valued child (a list), false for a single-valued child.
    pub is_many: bool,

    /// The class of the child entity.
    pub property_type: Option<ClassId>,
}

impl Property {
    /// Create a single-valued child property.
    pub fn unique(name: &str, yang_name: &str, property_type: ClassId) -> Property {
        Property {
            name: String::from(name),
            yang_name: String::from(yang_name),
            module: None,
            is_many: false,
            property_type: Some(property_type),
        }
    }

    /// Create a multi-valued child property.
    pub fn many(name: &str, yang_name: &str, property_type: Option<ClassId>) -> Property {
        Property {
            name: String::from(name),
            yang_name: String::from(yang_name),
            module: None,
            is_many: true,
            property_type,
        }
    }

    /// Mark the property as defined by the foreign module `module`.
    pub fn with_module(mut self, module: &str) -> Property {
        self.module = Some(String::from(module));
        self
    }

    /// Return the name the generated code compares against at runtime: `module:yang_name`
    /// for nodes of a foreign module, `yang_name` otherwise.
    pub fn qualified_yang_name(&self) -> String {
        match &self.module {
            Some(module) => format!("{}:{}", module, self.yang_name),
            None => self.yang_name.clone(),
        }
    }
}

/// The arena that owns all packages and classes of one generation run.
#[derive(Debug, Clone, Default)]
pub struct Model {
    packages: Vec<Package>,
    classes: Vec<Class>,

    /// Classes that belong to a package, keyed by package and qualified C++ name.
    class_index: HashMap<(PackageId, String), ClassId>,
}

impl Model {
    pub fn new() -> Model {
        Model::default()
    }

    /// Add a package and return its handle.
    ///
    /// # Arguments
    ///
    /// * `name` - The package name, used for output file names.
    /// * `stmt` - The root `module` statement of the yang module.
    pub fn add_package(&mut self, name: &str, stmt: Statement) -> PackageId {
        self.packages.push(Package {
            name: String::from(name),
            stmt,
            classes: Vec::new(),
        });
        PackageId(self.packages.len() - 1)
    }

    /// Add a class without children and return its handle.
    ///
    /// # Arguments
    ///
    /// * `name` - The unqualified class name.
    /// * `owner` - The enclosing package or class.  Must be a handle from this model.
    pub fn add_class(&mut self, name: &str, owner: Option<Owner>) -> ClassId {
        self.classes.push(Class {
            name: String::from(name),
            owner,
            children: Vec::new(),
            nested: Vec::new(),
        });
        let class = ClassId(self.classes.len() - 1);

        match owner {
            Some(Owner::Package(package)) => self.packages[package.0].classes.push(class),
            Some(Owner::Class(parent)) => self.classes[parent.0].nested.push(class),
            None => {}
        }

        // The first class added under a name keeps it.
        if let Some(package) = self.package_of(class) {
            let qualified_name = self.qualified_cpp_name(class);
            self.class_index
                .entry((package, qualified_name))
                .or_insert(class);
        }

        class
    }

    /// Append `child` to the children of `class`.
    pub fn add_child(&mut self, class: ClassId, child: Property) {
        self.classes[class.0].children.push(child);
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0]
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.0]
    }

    /// Return the handles of all packages in insertion order.
    pub fn package_ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        (0..self.packages.len()).map(PackageId)
    }

    /// Return the handle of the package named `name`.
    pub fn find_package(&self, name: &str) -> Option<PackageId> {
        self.packages
            .iter()
            .position(|p| p.name == name)
            .map(PackageId)
    }

    /// Return the class of `package` whose qualified C++ name is `qualified_name`.
    pub fn find_class(&self, package: PackageId, qualified_name: &str) -> Option<ClassId> {
        self.class_index
            .get(&(package, String::from(qualified_name)))
            .copied()
    }

    /// Return the package at the end of the owner chain of `class`, if the chain ends at one.
    pub fn package_of(&self, class: ClassId) -> Option<PackageId> {
        let mut current = class;
        loop {
            match self.class(current).owner {
                Some(Owner::Package(package)) => return Some(package),
                Some(Owner::Class(owner)) => current = owner,
                None => return None,
            }
        }
    }

    /// Return the C++ name of `class` relative to the package namespace, the names of the
    /// enclosing classes and the class joined with `::`.
    pub fn qualified_cpp_name(&self, class: ClassId) -> String {
        let mut names = vec![self.class(class).name.as_str()];
        let mut owner = self.class(class).owner;
        while let Some(Owner::Class(parent)) = owner {
            names.push(self.class(parent).name.as_str());
            owner = self.class(parent).owner;
        }
        names.reverse();
        names.join("::")
    }

    /// Return the yang namespace of `class`.  Only classes owned directly by a package have a
    /// namespace, taken from the `namespace` statement of the package's module.
    pub fn namespace(&self, class: ClassId) -> Option<&str> {
        match self.class(class).owner {
            Some(Owner::Package(package)) => self
                .package(package)
                .stmt
                .search_one("namespace")
                .and_then(|s| s.arg.as_deref()),
            _ => None,
        }
    }

    /// Return the classes directly owned by `owner`, in insertion order.
    pub fn classes_owned_by(&self, owner: Owner) -> &[ClassId] {
        match owner {
            Owner::Package(package) => &self.package(package).classes,
            Owner::Class(class) => &self.class(class).nested,
        }
    }

    /// Return every class of `package`, depth first: each class precedes the classes nested
    /// in it, and siblings keep insertion order.
    pub fn classes_of_package(&self, package: PackageId) -> Vec<ClassId> {
        let mut result = Vec::new();
        for class in self.classes_owned_by(Owner::Package(package)) {
            self.collect_nested(*class, &mut result);
        }
        result
    }

    fn collect_nested(&self, class: ClassId, result: &mut Vec<ClassId>) {
        result.push(class);
        for nested in self.classes_owned_by(Owner::Class(class)) {
            self.collect_nested(*nested, result);
        }
    }
}
