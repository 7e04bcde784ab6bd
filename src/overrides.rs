//! # Custom Configuration Overrides
//!
//! Users can pass their own Cromwell configuration (HOCON) to replace parts of
//! the generated one. Only the `database` section is taken over; everything
//! else in the document is ignored.
//!
//! The extracted section is re-serialized as HOCON with sorted keys so the
//! generated file is stable across runs. A document that cannot be read or
//! parsed completely aborts generation, including one whose includes cannot
//! be resolved (`include required(classpath(...))` is not supported).

use hocon::{Hocon, HoconLoader};
use std::path::Path;

use crate::error::{Error, Result};

const INDENT: &str = "  ";

/// Sections taken over from a custom configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOverrides {
    /// Rendered `database { ... }` block.
    pub database: Option<String>,
}

impl CustomOverrides {
    pub fn is_empty(&self) -> bool {
        self.database.is_none()
    }
}

/// Load overrides from an optional custom configuration file.
pub fn load_custom_config(path: Option<&Path>) -> Result<CustomOverrides> {
    let Some(path) = path else {
        return Ok(CustomOverrides::default());
    };

    if !path.is_file() {
        return Err(Error::ConfigParse {
            message: format!("Cannot read custom configuration {}", path.display()),
            hint: Some("Check the path given to --runconfig".to_string()),
        });
    }

    let doc = HoconLoader::new()
        .strict()
        .load_file(path)
        .and_then(|loader| loader.hocon())
        .map_err(|e| Error::ConfigParse {
            message: format!("{}: {}", path.display(), e),
            hint: Some(
                "The --runconfig file must be valid HOCON without classpath includes"
                    .to_string(),
            ),
        })?;

    let database = match &doc {
        Hocon::Hash(sections) => sections
            .get("database")
            .map(|section| render_section("database", section))
            .transpose()?,
        _ => None,
    };

    Ok(CustomOverrides { database })
}

/// Render `value` as a HOCON block named `key`.
pub fn render_section(key: &str, value: &Hocon) -> Result<String> {
    let mut out = String::new();
    out.push_str(&render_key(key));
    out.push(' ');
    render_value(value, 0, &mut out)?;
    out.push('\n');
    Ok(out)
}

fn render_value(value: &Hocon, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Hocon::Hash(map) => {
            let mut entries: Vec<(&String, &Hocon)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push_str("{\n");
            for (key, child) in entries {
                out.push_str(&INDENT.repeat(depth + 1));
                out.push_str(&render_key(key));
                out.push_str(if matches!(child, Hocon::Hash(_)) { " " } else { " = " });
                render_value(child, depth + 1, out)?;
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Hocon::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_value(item, depth, out)?;
            }
            out.push(']');
        }
        Hocon::String(s) => out.push_str(&quote(s)),
        Hocon::Integer(i) => out.push_str(&i.to_string()),
        Hocon::Real(r) => out.push_str(&r.to_string()),
        Hocon::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Hocon::Null => out.push_str("null"),
        other => {
            return Err(Error::ConfigParse {
                message: format!("Cannot use value in database section: {:?}", other),
                hint: None,
            })
        }
    }
    Ok(())
}

fn render_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
