use std::path::{Path, PathBuf};

use mmg_core::Generator;
use mmg_core::buffer::Buffer;
use mmg_core::calc::{BindingCalculator, NamesCalculator, PackagesCalculator};
use mmg_core::config::OutputFormat;
use mmg_core::error::{BuildError, GenerateError};
use mmg_core::model::{Model, Version};
use mmg_core::reporter::Reporter;

use crate::emitters::Emitter;

/// Base name of every generated document.
pub const DOCUMENT_NAME: &str = "openapi";

/// Configures and creates an [`OpenApiGenerator`].
#[derive(Default)]
pub struct OpenApiGeneratorBuilder<'a> {
    reporter: Option<&'a mut Reporter>,
    model: Option<&'a Model>,
    output: Option<PathBuf>,
    names: Option<&'a dyn NamesCalculator>,
    binding: Option<&'a dyn BindingCalculator>,
    packages: Option<&'a dyn PackagesCalculator>,
    format: OutputFormat,
}

impl<'a> OpenApiGeneratorBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter that receives the non-fatal errors.
    pub fn reporter(mut self, value: &'a mut Reporter) -> Self {
        self.reporter = Some(value);
        self
    }

    pub fn model(mut self, value: &'a Model) -> Self {
        self.model = Some(value);
        self
    }

    /// Directory where the documents are written.
    pub fn output(mut self, value: impl AsRef<Path>) -> Self {
        self.output = Some(value.as_ref().to_path_buf());
        self
    }

    pub fn names(mut self, value: &'a dyn NamesCalculator) -> Self {
        self.names = Some(value);
        self
    }

    pub fn binding(mut self, value: &'a dyn BindingCalculator) -> Self {
        self.binding = Some(value);
        self
    }

    pub fn packages(mut self, value: &'a dyn PackagesCalculator) -> Self {
        self.packages = Some(value);
        self
    }

    pub fn format(mut self, value: OutputFormat) -> Self {
        self.format = value;
        self
    }

    pub fn build(self) -> Result<OpenApiGenerator<'a>, BuildError> {
        let reporter = self.reporter.ok_or(BuildError("reporter"))?;
        let model = self.model.ok_or(BuildError("model"))?;
        let output = self
            .output
            .filter(|o| !o.as_os_str().is_empty())
            .ok_or(BuildError("output directory"))?;
        let names = self.names.ok_or(BuildError("names calculator"))?;
        let binding = self.binding.ok_or(BuildError("binding calculator"))?;
        let packages = self.packages.ok_or(BuildError("packages calculator"))?;
        Ok(OpenApiGenerator {
            reporter,
            model,
            output,
            names,
            binding,
            packages,
            format: self.format,
        })
    }
}

/// Writes one OpenAPI document per version of every service in the model.
pub struct OpenApiGenerator<'a> {
    reporter: &'a mut Reporter,
    model: &'a Model,
    output: PathBuf,
    names: &'a dyn NamesCalculator,
    binding: &'a dyn BindingCalculator,
    packages: &'a dyn PackagesCalculator,
    format: OutputFormat,
}

impl<'a> OpenApiGenerator<'a> {
    pub fn builder() -> OpenApiGeneratorBuilder<'a> {
        OpenApiGeneratorBuilder::new()
    }

    /// Build the document of `version` without writing it.
    pub fn build_spec(&mut self, version: &Version) -> Result<Buffer, GenerateError> {
        let package = self.packages.version_package(version);
        let mut buffer = Buffer::builder()
            .output(&self.output)
            .package(package)
            .name(DOCUMENT_NAME)
            .format(self.format)
            .build()?;
        log::debug!(
            "generating OpenAPI document for '{}' version '{}'",
            version.service(),
            version.name
        );
        let mut emitter = Emitter::new(version, self.names, self.binding, self.reporter);
        emitter.document(&mut buffer.root());
        Ok(buffer)
    }

    pub fn reporter(&self) -> &Reporter {
        self.reporter
    }
}

impl Generator for OpenApiGenerator<'_> {
    fn run(&mut self) -> Result<(), GenerateError> {
        let before = self.reporter.errors();
        let model = self.model;
        let mut written = 0;
        for service in &model.services {
            for version in &service.versions {
                let buffer = self.build_spec(version)?;
                buffer.write()?;
                written += 1;
            }
        }
        self.reporter
            .info(&format!("generated {written} OpenAPI documents"));
        match self.reporter.errors() - before {
            0 => Ok(()),
            count => Err(GenerateError::Errors(count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use mmg_core::calc::{DefaultNames, HttpBinding, VersionPackages};
    use mmg_core::model::Service;

    use super::*;

    fn model() -> Model {
        let mut model = Model::new();
        let mut service = Service::new("clusters_mgmt");
        service.add_version("v1");
        model.add_service(service);
        model
    }

    fn message(result: Result<OpenApiGenerator<'_>, BuildError>) -> String {
        match result {
            Ok(_) => panic!("expected the builder to fail"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_builder_requires_every_input() {
        let model = model();
        let mut reporter = Reporter::new();

        let result = OpenApiGenerator::builder()
            .model(&model)
            .output("out")
            .names(&DefaultNames)
            .binding(&HttpBinding)
            .packages(&VersionPackages)
            .build();
        assert_eq!(message(result), "reporter is mandatory");

        let result = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .output("out")
            .names(&DefaultNames)
            .binding(&HttpBinding)
            .packages(&VersionPackages)
            .build();
        assert_eq!(message(result), "model is mandatory");

        let result = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .model(&model)
            .output("")
            .names(&DefaultNames)
            .binding(&HttpBinding)
            .packages(&VersionPackages)
            .build();
        assert_eq!(message(result), "output directory is mandatory");

        let result = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .model(&model)
            .output("out")
            .binding(&HttpBinding)
            .packages(&VersionPackages)
            .build();
        assert_eq!(message(result), "names calculator is mandatory");

        let result = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .model(&model)
            .output("out")
            .names(&DefaultNames)
            .packages(&VersionPackages)
            .build();
        assert_eq!(message(result), "binding calculator is mandatory");

        let result = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .model(&model)
            .output("out")
            .names(&DefaultNames)
            .binding(&HttpBinding)
            .build();
        assert_eq!(message(result), "packages calculator is mandatory");
    }

    #[test]
    fn test_build_spec_targets_version_package() {
        let model = model();
        let mut reporter = Reporter::new();
        let mut generator = OpenApiGenerator::builder()
            .reporter(&mut reporter)
            .model(&model)
            .output("out")
            .names(&DefaultNames)
            .binding(&HttpBinding)
            .packages(&VersionPackages)
            .format(OutputFormat::Yaml)
            .build()
            .unwrap();
        let version = &model.services[0].versions[0];
        let buffer = generator.build_spec(version).unwrap();
        assert_eq!(buffer.package(), "clustersmgmt/v1");
        assert_eq!(
            buffer.file_path(),
            Path::new("out").join("clustersmgmt").join("v1").join("openapi.yaml")
        );
        assert_eq!(generator.reporter().errors(), 0);
    }
}
