//! Render command implementation

use crate::commands::read_json_arg;
use crate::error::{CliError, CliResult};
use formkit::{parse_definition, FormConfig, MapInput};
use std::fs;
use std::path::{Path, PathBuf};

pub struct Options {
    pub definition: String,
    pub data: Option<String>,
    pub submit: Option<String>,
    pub referer: Option<String>,
    pub output: Option<String>,
    pub config: PathBuf,
}

/// Markup plus whether the submission (if any) passed validation.
struct Rendered {
    html: String,
    accepted: bool,
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(rendered) => match write_output(options.output.as_deref(), &rendered.html) {
            Ok(()) if rendered.accepted => 0,
            Ok(()) => 1,
            Err(e) => {
                eprintln!("✗ Render failed");
                eprintln!("  Error: {e}");
                1
            }
        },
        Err(e) => {
            eprintln!("✗ Render failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<Rendered> {
    let config = FormConfig::load(&options.config)?;

    let content = fs::read_to_string(&options.definition).map_err(|e| {
        CliError::Message(format!("Failed to read {}: {e}", options.definition))
    })?;
    let definition = parse_definition(&content, Some(&options.definition))?;
    let mut form = definition.into_builder(config)?;

    if let Some(data) = &options.data {
        form.set_data(read_json_arg(data)?);
    }
    if let Some(referer) = &options.referer {
        form.referer(referer.clone());
    }

    let mut accepted = true;
    if let Some(submit) = &options.submit {
        let input = MapInput::from_json(&read_json_arg(submit)?)?;
        accepted = form.handle(&input);
        if !accepted {
            eprintln!("✗ Submission rejected");
            for (key, message) in form.errors() {
                eprintln!("  {key}: {message}");
            }
        }
    }

    let html = form.build()?;
    tracing::info!(
        "Rendered {} with {} controls",
        options.definition,
        form.controls().len()
    );
    Ok(Rendered { html, accepted })
}

fn write_output(output: Option<&str>, html: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{html}");
            Ok(())
        }
    }
}
