//! The `statement` module contains [`Statement`], the schema statement tree that a package
//! carries for its yang module.

use serde::{Deserialize, Serialize};

/// One node of a yang statement tree: `keyword argument { substatements }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub keyword: String,

    #[serde(default)]
    pub arg: Option<String>,

    #[serde(default)]
    pub substatements: Vec<Statement>,
}

impl Statement {
    /// Create a statement without substatements.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The statement keyword, for example `module` or `namespace`.
    /// * `arg` - The statement argument, if the statement has one.
    pub fn new(keyword: &str, arg: Option<&str>) -> Statement {
        Statement {
            keyword: String::from(keyword),
            arg: arg.map(String::from),
            substatements: Vec::new(),
        }
    }

    /// Append `statement` to the substatements and return `self` for chaining.
    pub fn with_substatement(mut self, statement: Statement) -> Statement {
        self.substatements.push(statement);
        self
    }

    /// Return the first direct substatement whose keyword is `keyword`.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword to look for.
    pub fn search_one(&self, keyword: &str) -> Option<&Statement> {
        self.substatements.iter().find(|s| s.keyword == keyword)
    }
}
