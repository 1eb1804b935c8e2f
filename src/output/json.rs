use super::{Artifact, Renderer};
use crate::error::Result;
use crate::layout::Layout;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, layout: &Layout) -> Result<Vec<Artifact>> {
        let mut contents = serde_json::to_string_pretty(layout)?;
        contents.push('\n');
        Ok(vec![Artifact {
            file_name: "layout.json",
            contents,
        }])
    }
}
