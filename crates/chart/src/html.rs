//! Writes the generated chart as a self-contained interactive page.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::chart::Frame;
use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::output::OutputFile;

/// The data visualization directory is structured as follows:
///
/// ./vis/index.html
///
/// The __index__ file is the whole visualization: the svg drawing
/// surface, the tooltip elements, and the static script wiring pointer
/// events to the tooltip. Everything else on the page is precomputed.
pub struct VisLayout {
    index_file_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Creates the output directory under `path`.
    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        fs::create_dir_all(&root_path)?;

        Ok(Self { index_file_path })
    }

    /// Renders `frame` and writes the page, replacing any previous one.
    pub fn write_page(&self, frame: &Frame) -> Result<()> {
        let text = page(frame)?;

        let mut output = OutputFile::create(&self.index_file_path)?;
        output.write(&text)
    }
}

#[derive(Serialize)]
struct Context {
    width: String,
    height: String,
    svg: String,
    style: &'static str,
    script: &'static str,
}

fn page(frame: &Frame) -> Result<String> {
    let mut template = TinyTemplate::new();
    template.add_template("index", include_str!("./template/index.html.tt"))?;

    let mut svg = String::new();
    frame.render(&mut svg)?;

    let context = Context {
        width: frame.surface.width.to_string(),
        height: frame.surface.height.to_string(),
        svg,
        style: include_str!("./template/page.css"),
        script: include_str!("./template/tooltip.js"),
    };

    let text = template.render("index", &context)?;
    Ok(text)
}
