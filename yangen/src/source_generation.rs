//! The `source_generation` module drives the class printers over the packages of a model and
//! places the generated source for each package in its own file or on stdout.

use crate::GenerateCLArgs;
use std::io::Write;
use std::path::{Path, PathBuf};
use yangen_lib::config_file::ConfigurationFileDetails;
use yangen_lib::model_file::load_model_from_file_with_name;
use yangen_lib::pretty_printer::DEFAULT_TAB_WIDTH;
use yangen_lib::{Model, PackageId, PrettyPrinter, SourcePrinter, YangenError};

/// The directory that receives generated files when no other directory is configured.
pub static DEFAULT_OUTPUT_DIRECTORY: &str = "out";

/// The extension of generated files when no other extension is configured.
pub static DEFAULT_EXTENSION: &str = "cpp";

/// Combine the configuration file named in `args` (if any) with the command line arguments.
/// Values from the configuration file take precedence; command line arguments fill in the
/// settings the file does not contain.
///
/// # Arguments
///
/// * `args` - The [`GenerateCLArgs`] object.
pub fn effective_configuration(
    args: &GenerateCLArgs,
) -> Result<ConfigurationFileDetails, YangenError> {
    let mut details = match (&args.config_file, &args.model) {
        (Some(config_file), _) => ConfigurationFileDetails::new_from_file(config_file)?,
        (None, Some(model)) => ConfigurationFileDetails::new(Path::new(model)),
        (None, None) => {
            return Err(YangenError::ConfigFileMissingRequiredKey(
                String::from("<command line>"),
                vec![String::from("model")],
            ))
        }
    };

    if details.output_directory.is_none() {
        details.output_directory = args.output_directory.as_ref().map(PathBuf::from);
    }
    if details.tab_width.is_none() {
        details.tab_width = args.tab_width;
    }
    if details.packages.is_empty() {
        details.packages = args.package.clone();
    }
    if details.extension.is_none() {
        details.extension = args.extension.clone();
    }

    Ok(details)
}

/// Return the packages of `model` named in `names`, in the order of `names`, or every package
/// of the model when `names` is empty.
pub fn select_packages(model: &Model, names: &[String]) -> Result<Vec<PackageId>, YangenError> {
    if names.is_empty() {
        return Ok(model.package_ids().collect());
    }

    names
        .iter()
        .map(|name| {
            model
                .find_package(name)
                .ok_or_else(|| YangenError::PackageNotFound(name.clone()))
        })
        .collect()
}

/// Return the text generated for `package`.  The printer is reset first, so after the call
/// its line count covers this package only.
///
/// # Arguments
///
/// * `model` - The [`Model`] that owns `package`.
/// * `package` - The package to generate.
/// * `printer` - The [`PrettyPrinter`] that formats the text.
pub fn generate_package_source(
    model: &Model,
    package: PackageId,
    printer: &mut PrettyPrinter,
) -> Result<Vec<u8>, YangenError> {
    let mut buffer: Vec<u8> = Vec::new();
    printer.reset();
    SourcePrinter::default().print_package(printer, &mut buffer, model, package)?;
    Ok(buffer)
}

/// Write the text generated for `package` to `stream`.  Nothing reaches `stream` unless the
/// whole package generates.
pub fn write_package_source<W: Write>(
    model: &Model,
    package: PackageId,
    printer: &mut PrettyPrinter,
    stream: &mut W,
) -> Result<(), YangenError> {
    let source = generate_package_source(model, package, printer)?;
    stream.write_all(&source)?;
    Ok(())
}

/// Write the text generated for `package` to `<output_dir>/<package name>.<extension>`,
/// creating the directory if needed, and return the path of the file.
pub fn generate_package_file(
    model: &Model,
    package: PackageId,
    printer: &mut PrettyPrinter,
    output_dir: &Path,
    extension: &str,
) -> Result<PathBuf, YangenError> {
    let outfile_name =
        output_dir.join(format!("{}.{}", model.package(package).name, extension));

    // Try to create the output directory:
    std::fs::create_dir_all(output_dir)?;

    let mut f = std::fs::File::create(&outfile_name)?;
    write_package_source(model, package, printer, &mut f)?;

    Ok(outfile_name)
}

/// Run the source generator.
///
/// # Arguments
///
/// * `args` - The command line arguments that control the generator.
pub fn generate_sources(args: GenerateCLArgs) -> Result<(), YangenError> {
    let details = effective_configuration(&args)?;

    if let Some(config_file) = &args.save_config_file {
        details.write_to_file_as_json(config_file)?;
        log::info!("Saved generation settings to {}", config_file);
    }

    let model = load_model_from_file_with_name(&details.model.to_string_lossy())?;
    let packages = select_packages(&model, &details.packages)?;

    let tab_width = details.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);
    let extension = details
        .extension
        .clone()
        .unwrap_or_else(|| String::from(DEFAULT_EXTENSION));
    let output_dir = details
        .output_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));

    if packages.is_empty() {
        log::warn!("Model {:?} contains no packages", details.model);
    }

    let mut printer = PrettyPrinter::new(tab_width);
    for package in packages {
        let package_name = &model.package(package).name;
        if args.stdout {
            // Generated code owns stdout, so failures only go to the log.
            let mut stdout = std::io::stdout();
            match write_package_source(&model, package, &mut printer, &mut stdout) {
                Ok(_) => log::info!(
                    "Generated package {} ({} lines)",
                    package_name,
                    printer.lines_written()
                ),
                Err(e) => log::error!("Unable to generate package {}: {}", package_name, e),
            }
        } else {
            match generate_package_file(&model, package, &mut printer, &output_dir, &extension) {
                Ok(file) => log::info!(
                    "Generated package {} ({} lines) to {:?}",
                    package_name,
                    printer.lines_written(),
                    file
                ),
                Err(e) => println!("Unable to generate package {}: {}", package_name, e),
            }
        }
    }

    Ok(())
}
