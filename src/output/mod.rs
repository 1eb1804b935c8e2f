mod json;
mod text;
mod xhtml;

use std::path::Path;

use crate::error::Result;
use crate::layout::Layout;

pub use self::json::JsonRenderer;
pub use self::text::TextRenderer;
pub use self::xhtml::XhtmlRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Xhtml,
    Json,
    Text,
}

/// One rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

pub trait Renderer {
    fn render(&self, layout: &Layout) -> Result<Vec<Artifact>>;
}

pub fn create_renderer(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Xhtml => Box::new(XhtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer),
    }
}

/// Write artifacts into `dir`, creating it if needed
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for artifact in artifacts {
        let path = dir.join(artifact.file_name);
        std::fs::write(&path, &artifact.contents)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}
