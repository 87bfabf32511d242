//! Template rendering for prompts
//!
//! Extra command-line arguments are bound to `Arg1`, `Arg2`, ... and
//! substituted with Handlebars. Prompts are usually written with dotted
//! field references (`{{.Arg1}}`); those are rewritten to plain Handlebars
//! paths before compiling.
//!
//! Only UTF-8 prompts can be rendered; other bytes are refused rather than
//! replaced. Prompts printed without arguments are never decoded at all.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use handlebars::Handlebars;
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::SlashError;

const TEMPLATE_NAME: &str = "prompt";

/// `{{.Name}}`, `{{ .Name }}`, `{{- .Name -}}`
static DOTTED_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-?)\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*(-?)\}\}").expect("static regex is valid")
});

/// Bind positional arguments to `Arg1..ArgN`
pub fn bindings(args: &[String]) -> BTreeMap<String, String> {
    debug!(count = args.len(), "bindings: called");
    args.iter()
        .enumerate()
        .map(|(i, v)| (format!("Arg{}", i + 1), v.clone()))
        .collect()
}

/// Rewrite dotted field references into Handlebars paths
///
/// Trim markers (`{{-` / `-}}`) become Handlebars whitespace control
/// (`{{~` / `~}}`).
pub fn normalize(source: &str) -> String {
    DOTTED_FIELD
        .replace_all(source, |caps: &Captures| {
            let open = if caps[1].is_empty() { "" } else { "~" };
            let close = if caps[3].is_empty() { "" } else { "~" };
            format!("{{{{{}{}{}}}}}", open, &caps[2], close)
        })
        .into_owned()
}

fn engine() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    // Prompts are plain text, not HTML
    hbs.register_escape_fn(handlebars::no_escape);
    hbs.set_strict_mode(false);
    hbs
}

/// Render prompt content with positional arguments
///
/// The whole output is produced before returning, so a failing render never
/// leaves partial text behind.
pub fn render(content: &[u8], args: &[String]) -> Result<String, SlashError> {
    debug!(bytes = content.len(), args = args.len(), "render: called");
    let text = std::str::from_utf8(content)
        .map_err(|e| SlashError::TemplateParse(format!("prompt is not valid UTF-8: {}", e)))?;
    let source = normalize(text);

    let mut hbs = engine();
    hbs.register_template_string(TEMPLATE_NAME, &source)
        .map_err(|e| SlashError::TemplateParse(e.to_string()))?;

    let data = bindings(args);
    let rendered = hbs
        .render(TEMPLATE_NAME, &data)
        .map_err(|e| SlashError::TemplateExecution(e.to_string()))?;
    debug!(bytes = rendered.len(), "render: done");
    Ok(rendered)
}
