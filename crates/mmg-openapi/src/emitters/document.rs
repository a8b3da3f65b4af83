use mmg_core::buffer::ObjectWriter;

use super::Emitter;

pub const OPENAPI_VERSION: &str = "3.0.0";

const LICENSE_NAME: &str = "Apache 2.0";
const LICENSE_URL: &str = "http://www.apache.org/licenses/LICENSE-2.0";
const CONTACT_NAME: &str = "OCM Feedback";
const CONTACT_EMAIL: &str = "ocm-feedback@redhat.com";
const SERVER_DESCRIPTION: &str = "Production";
const SERVER_URL: &str = "https://api.openshift.com";
const SECURITY_SCHEME: &str = "bearer";

impl Emitter<'_> {
    /// Write the whole document of the version into the top-level object.
    pub fn document(&mut self, out: &mut ObjectWriter<'_>) {
        out.field("openapi", OPENAPI_VERSION);
        self.info(out);
        servers(out);
        out.object("paths", |paths| self.paths(paths));
        out.object("components", |components| {
            components.object("schemas", |schemas| self.schemas(schemas));
        });
        security(out);
    }

    fn info(&self, out: &mut ObjectWriter<'_>) {
        let version = self.version;
        out.object("info", |info| {
            info.field("version", version.name.to_string());
            info.field("title", version.service().to_string());
            info.object("license", |license| {
                license.field("name", LICENSE_NAME);
                license.field("url", LICENSE_URL);
            });
            info.object("contact", |contact| {
                contact.field("name", CONTACT_NAME);
                contact.field("email", CONTACT_EMAIL);
            });
        });
    }
}

fn servers(out: &mut ObjectWriter<'_>) {
    out.array("servers", |servers| {
        servers.object(|server| {
            server.field("description", SERVER_DESCRIPTION);
            server.field("url", SERVER_URL);
        });
    });
}

fn security(out: &mut ObjectWriter<'_>) {
    out.array("security", |requirements| {
        requirements.object(|requirement| requirement.array(SECURITY_SCHEME, |_| {}));
    });
}
