use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl GreetingRequest {
    /// `Hello, <name>!!`. An absent name renders as `null`.
    pub fn greeting(&self) -> String {
        format!("Hello, {}!!", self.name.as_deref().unwrap_or("null"))
    }
}
