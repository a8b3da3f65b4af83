use crate::model::Version;

/// Decides where the files generated for a version are placed.
pub trait PackagesCalculator {
    /// Relative package path for a version, using `/` as separator.
    fn version_package(&self, version: &Version) -> String;
}

/// Places each version under `<service>/<version>`, with the underscores of
/// the service name removed (`clusters_mgmt` becomes `clustersmgmt`).
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionPackages;

impl PackagesCalculator for VersionPackages {
    fn version_package(&self, version: &Version) -> String {
        let service = version.service().snake_case().replace('_', "");
        format!("{}/{}", service, version.name.snake_case())
    }
}
