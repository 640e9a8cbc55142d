//! The `config_file` module contains code for reading and writing a generator configuration
//! file.  A configuration file names the model to generate from and the settings to use for
//! the generated output, so that a generation run can be repeated without retyping options.

use crate::error::YangenError;
use serde_json::{json, Map, Value};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The extension used for generator configuration files.
pub static CONFIG_FILE_EXTENSION: &str = "ygen";

/// The key in the configuration file for the path of the model file.
pub static MODEL_KEY: &str = "model";

/// The key for the string value containing the path to where the tool should place
/// output.
pub static OUTPUT_DIR_KEY: &str = "output-directory";

/// The key for the number of spaces per indentation level.
pub static TAB_WIDTH_KEY: &str = "tab-width";

/// The key for the list of packages to generate.
pub static PACKAGES_KEY: &str = "packages";

/// The key for the extension of generated files.
pub static EXTENSION_KEY: &str = "extension";

/// Configuration details loaded from a .ygen configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationFileDetails {
    /// Path to the model file.
    pub model: PathBuf,

    /// The location where the tool should put generated output files.
    pub output_directory: Option<PathBuf>,

    /// Spaces per indentation level in generated code.
    pub tab_width: Option<usize>,

    /// Names of the packages to generate.  If the list is empty, all packages are generated.
    pub packages: Vec<String>,

    /// Extension of generated files, without the leading '.'.
    pub extension: Option<String>,
}

impl ConfigurationFileDetails {
    /// Create configuration details for `model` with every other setting left unset.
    pub fn new(model: &Path) -> ConfigurationFileDetails {
        ConfigurationFileDetails {
            model: model.to_path_buf(),
            output_directory: None,
            tab_width: None,
            packages: Vec::new(),
            extension: None,
        }
    }

    /// Create a new configuration details object by loading the configuration from a JSON
    /// file.  The file must have the extension ".ygen".
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path to the configuration file in the file system.
    pub fn new_from_file(config_file: &str) -> Result<ConfigurationFileDetails, YangenError> {
        let config_path = PathBuf::from(config_file);

        // The file must have a .ygen extension.
        if config_path.extension() != Some(OsStr::new(CONFIG_FILE_EXTENSION)) {
            return Err(YangenError::ConfigFileBadExtension(String::from(
                config_file,
            )));
        }

        let text = std::fs::read_to_string(&config_path)?;
        let json_value: Value = serde_json::from_str(&text)?;
        ConfigurationFileDetails::new_from_json(config_file, &json_value)
    }

    /// Create a new configuration details object from the JSON content of a configuration
    /// file.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The name of the configuration file, used in error messages.
    /// * `json_value` - The JSON content of the file.
    pub fn new_from_json(
        config_file: &str,
        json_value: &Value,
    ) -> Result<ConfigurationFileDetails, YangenError> {
        let object = match json_value.as_object() {
            Some(o) => o,
            None => {
                return Err(YangenError::ConfigFileNotSupported(String::from(
                    config_file,
                )))
            }
        };

        let model = match object.get(MODEL_KEY).and_then(Value::as_str) {
            Some(m) => m,
            None => {
                return Err(YangenError::ConfigFileMissingRequiredKey(
                    String::from(config_file),
                    vec![String::from(MODEL_KEY)],
                ))
            }
        };

        let mut details = ConfigurationFileDetails::new(Path::new(model));

        if let Some(output_directory) = object.get(OUTPUT_DIR_KEY).and_then(Value::as_str) {
            details.output_directory = Some(PathBuf::from(output_directory));
        }

        if let Some(tab_width) = object.get(TAB_WIDTH_KEY).and_then(Value::as_u64) {
            details.tab_width = Some(tab_width as usize);
        }

        if let Some(packages_array) = object.get(PACKAGES_KEY).and_then(Value::as_array) {
            details.packages = packages_array
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect();
        }

        if let Some(extension) = object.get(EXTENSION_KEY).and_then(Value::as_str) {
            details.extension = Some(String::from(extension));
        }

        Ok(details)
    }

    /// Helper function to get the configuration as a JSON object.
    fn convert_to_json(&self) -> Value {
        let mut object = Map::new();

        object.insert(
            String::from(MODEL_KEY),
            json![self.model.to_string_lossy()],
        );

        if let Some(output_directory) = &self.output_directory {
            object.insert(
                String::from(OUTPUT_DIR_KEY),
                json![output_directory.to_string_lossy()],
            );
        }

        if let Some(tab_width) = self.tab_width {
            object.insert(String::from(TAB_WIDTH_KEY), json![tab_width]);
        }

        if !self.packages.is_empty() {
            object.insert(String::from(PACKAGES_KEY), json![self.packages]);
        }

        if let Some(extension) = &self.extension {
            object.insert(String::from(EXTENSION_KEY), json![extension]);
        }

        Value::Object(object)
    }

    /// Return the configuration as pretty-printed JSON text.
    fn to_pretty_json(&self) -> Result<String, YangenError> {
        let standard_json = format!("{}", self.convert_to_json());
        jsonxf::pretty_print(&standard_json).map_err(YangenError::JSONFormat)
    }

    /// Create a configuration file in JSON form and write it to the path at `config_file`.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path in the file system to write the configuration file.
    pub fn write_to_file_as_json(&self, config_file: &str) -> Result<(), YangenError> {
        let config_file_path = PathBuf::from(config_file);

        // Try to create the parent directory if it does not exist.
        if let Some(parent) = config_file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut f = std::fs::File::create(&config_file_path)?;
        self.write_to_stream_as_json(&mut f)
    }

    /// Convert a configuration to JSON and write the JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), YangenError> {
        let pretty_json = self.to_pretty_json()?;
        writeln!(stream, "{pretty_json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_from_json() {
        let value = json!({
            "model": "models/bgp.json",
            "output-directory": "gen",
            "tab-width": 2,
            "packages": ["openconfig_bgp", 5],
            "extension": "cc"
        });
        let details = ConfigurationFileDetails::new_from_json("bgp.ygen", &value).unwrap();
        assert_eq!(details.model, PathBuf::from("models/bgp.json"));
        assert_eq!(details.output_directory, Some(PathBuf::from("gen")));
        assert_eq!(details.tab_width, Some(2));
        assert_eq!(details.packages, vec![String::from("openconfig_bgp")]);
        assert_eq!(details.extension.as_deref(), Some("cc"));
    }

    #[test]
    fn test_configuration_missing_model() {
        let value = json!({"output-directory": "gen"});
        let result = ConfigurationFileDetails::new_from_json("bgp.ygen", &value);
        assert!(matches!(
            result,
            Err(YangenError::ConfigFileMissingRequiredKey(file, keys))
                if file == "bgp.ygen" && keys == vec![String::from(MODEL_KEY)]
        ));
    }

    #[test]
    fn test_configuration_not_an_object() {
        let result = ConfigurationFileDetails::new_from_json("bgp.ygen", &json!([1, 2]));
        assert!(matches!(result, Err(YangenError::ConfigFileNotSupported(_))));
    }

    #[test]
    fn test_configuration_bad_extension() {
        let result = ConfigurationFileDetails::new_from_file("settings.json");
        assert!(matches!(result, Err(YangenError::ConfigFileBadExtension(_))));
    }

    #[test]
    fn test_configuration_written_as_json_reads_back() {
        let mut details = ConfigurationFileDetails::new(Path::new("bgp.json"));
        details.output_directory = Some(PathBuf::from("out"));
        details.tab_width = Some(8);
        details.packages = vec![String::from("a"), String::from("b")];

        let mut out: Vec<u8> = Vec::new();
        details.write_to_stream_as_json(&mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        let read_back = ConfigurationFileDetails::new_from_json("x.ygen", &value).unwrap();
        assert_eq!(read_back, details);
    }

    #[test]
    fn test_configuration_file_round_trip_on_disk() {
        let directory = std::env::temp_dir().join(format!("yangen-config-{}", std::process::id()));
        let file = directory.join("settings.ygen");
        let file_name = file.to_string_lossy().to_string();

        let mut details = ConfigurationFileDetails::new(Path::new("bgp.json"));
        details.extension = Some(String::from("cpp"));
        details.write_to_file_as_json(&file_name).unwrap();

        let loaded = ConfigurationFileDetails::new_from_file(&file_name).unwrap();
        assert_eq!(loaded, details);
        let _ = std::fs::remove_dir_all(&directory);
    }
}
