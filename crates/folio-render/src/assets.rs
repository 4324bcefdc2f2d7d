//! Embedded templates and static files.

use std::fs;
use std::path::Path;

use minijinja::{AutoEscape, Environment};
use rust_embed::RustEmbed;

use crate::error::{RenderError, Result};

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

#[derive(RustEmbed)]
#[folder = "static"]
struct StaticFiles;

/// Build a template environment from the embedded templates. Files in
/// `overrides` shadow the embedded version of the same name.
///
/// Auto-escaping is off: URLs and precomputed HTML pass through
/// verbatim, and the templates escape text values with `|e` where
/// needed.
pub(crate) fn environment(overrides: Option<&Path>) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    for name in Templates::iter() {
        let source = match overrides.map(|dir| dir.join(name.as_ref())) {
            Some(path) if path.is_file() => fs::read_to_string(&path)?,
            _ => {
                let file = Templates::get(&name)
                    .ok_or_else(|| RenderError::MissingAsset(name.to_string()))?;
                String::from_utf8_lossy(file.data.as_ref()).into_owned()
            }
        };
        env.add_template_owned(name.to_string(), source)?;
    }
    Ok(env)
}

/// Copy the embedded static files into the output directory.
pub(crate) fn write_static(out_dir: &Path) -> Result<()> {
    for name in StaticFiles::iter() {
        let file =
            StaticFiles::get(&name).ok_or_else(|| RenderError::MissingAsset(name.to_string()))?;
        let path = out_dir.join(name.as_ref());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, file.data.as_ref())?;
    }
    Ok(())
}
