use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct NotFoundDetails {
    pub resource_id: String,
    pub configuration: String,
}

impl NotFoundDetails {
    pub fn new(resource_id: String, configuration: String) -> Self {
        NotFoundDetails {
            resource_id,
            configuration,
        }
    }
}

impl Display for NotFoundDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resource '{}' has no '{}' configuration",
            self.resource_id, self.configuration
        )
    }
}
