use indexmap::IndexMap;
use mmg_core::buffer::ObjectWriter;
use mmg_core::model::{Path, Version};

use super::Emitter;

impl Emitter<'_> {
    /// Fill `paths`: one path item per distinct absolute path, sorted, each
    /// holding the operations of the resource the path leads to.
    pub fn paths(&mut self, out: &mut ObjectWriter<'_>) {
        let version = self.version;
        let mut index: IndexMap<String, Path> = IndexMap::new();
        for path in version.paths() {
            let absolute = absolute_path(version, &path);
            if index.contains_key(&absolute) {
                log::debug!("path '{absolute}' already generated, skipping duplicate");
                continue;
            }
            index.insert(absolute, path);
        }
        index.sort_keys();

        for (absolute, path) in &index {
            self.path_item(out, absolute, path);
        }
    }

    fn path_item(&mut self, out: &mut ObjectWriter<'_>, absolute: &str, path: &Path) {
        let version = self.version;
        let Some(resource) = path.target().and_then(|id| version.get_resource(id)) else {
            self.reporter
                .error(format!("Can't find the resource of path '{absolute}'"));
            return;
        };
        log::debug!(
            "generating path '{absolute}' with {} methods",
            resource.methods.len()
        );
        let mut verbs: Vec<String> = Vec::new();
        out.object(absolute, |item| {
            for method in &resource.methods {
                let verb = self.binding.method(method).to_lowercase();
                if verbs.contains(&verb) {
                    self.reporter.error(format!(
                        "Method '{}' of path '{absolute}' uses verb '{verb}' already taken by \
                         another method, it will be ignored",
                        method.name
                    ));
                    continue;
                }
                verbs.push(verb);
                self.operation(item, path, method);
            }
        });
    }
}

/// `/api/<service>/<version>/<locator>/...`, where path variables become
/// `{<name>_id}` placeholders.
pub fn absolute_path(version: &Version, path: &Path) -> String {
    let segments: Vec<String> = path
        .locators
        .iter()
        .map(|locator| {
            if locator.variable {
                format!("{{{}_id}}", locator.name)
            } else {
                locator.name.to_string()
            }
        })
        .collect();
    format!(
        "/api/{}/{}/{}",
        version.service(),
        version.name,
        segments.join("/")
    )
}
