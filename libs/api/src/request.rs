use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ModelQuery {
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ModelQuery {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "model1".to_string()
}
