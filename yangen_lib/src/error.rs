//! The `error` module contains `YangenError`, the error enumeration used to communicate
//! library errors.

use std::convert::From;
use thiserror::Error;

/// The list of errors that the library can generate.
#[derive(Error, Debug)]
pub enum YangenError {
    #[error("IO error: {0}")]
    IO(std::io::Error),

    /// An error indicating that JSON parsing failed.
    #[error("JSON error occurred: {0}")]
    JSON(serde_json::Error),

    /// An error indicating that JSON output could not be formatted.
    #[error("Unable to format JSON: {0}")]
    JSONFormat(String),

    /// An error indicating that a single-valued child has no resolved property type.  The
    /// first value is the qualified class name, the second the child name.
    #[error("Child {1} of class {0} has no property type")]
    MissingPropertyType(String, String),

    /// An error indicating that a child refers to a class the model does not contain.
    #[error("Child {0} refers to unknown class {1}")]
    UnresolvedPropertyType(String, String),

    /// An error indicating that two children of one class share a qualified yang name.
    #[error("Class {0} declares child {1} more than once")]
    DuplicateChild(String, String),

    /// An error indicating that a package name appears more than once in a model.
    #[error("Package {0} is declared more than once")]
    DuplicatePackage(String),

    /// An error indicating that a request named a package the model does not contain.
    #[error("Package {0} not found in model")]
    PackageNotFound(String),

    /// An error indicating that the tool received a configuration file that does not have the
    /// correct file extension.
    #[error("Configuration file {0} does not have the correct extension")]
    ConfigFileBadExtension(String),

    /// An error indicating that configuration file keys are missing.
    #[error("Configuration file {0} does not have keys: {1:?}")]
    ConfigFileMissingRequiredKey(String, Vec<String>),

    /// An error indicating the configuration file is not a JSON object.
    #[error("Configuration file {0} not supported")]
    ConfigFileNotSupported(String),
}

impl From<std::io::Error> for YangenError {
    fn from(e: std::io::Error) -> Self {
        YangenError::IO(e)
    }
}

impl From<serde_json::Error> for YangenError {
    fn from(e: serde_json::Error) -> Self {
        YangenError::JSON(e)
    }
}
