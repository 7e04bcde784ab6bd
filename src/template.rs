//! Named-placeholder templates.
//!
//! Configuration fragments are plain text containing `{{name}}` placeholders.
//! Cromwell's own `${...}` expressions pass through untouched. Substituted
//! values are inserted literally and never rescanned, so a value may itself
//! contain braces or `${...}`.
//!
//! Rendering fails if any placeholder has no bound value.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Values bound to placeholder names.
pub type Vars = BTreeMap<String, String>;

/// A text template with `{{name}}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
}

impl<'a> Template<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Names of every placeholder referenced by the template.
    pub fn placeholders(&self) -> Result<BTreeSet<&'a str>> {
        let mut names = BTreeSet::new();
        let mut rest = self.source;
        while let Some((_, name, after)) = next_placeholder(rest)? {
            names.insert(name);
            rest = after;
        }
        Ok(names)
    }

    /// Substitute every placeholder with its value from `vars`.
    pub fn render(&self, vars: &Vars) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source;
        while let Some((before, name, after)) = next_placeholder(rest)? {
            let value = vars.get(name).ok_or_else(|| Error::Template {
                message: "Unresolved placeholder in configuration fragment".to_string(),
                variable: Some(name.to_string()),
            })?;
            out.push_str(before);
            out.push_str(value);
            rest = after;
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Split off the text before the next placeholder, its name, and the rest.
fn next_placeholder(text: &str) -> Result<Option<(&str, &str, &str)>> {
    let Some(start) = text.find(OPEN) else {
        return Ok(None);
    };
    let inner = &text[start + OPEN.len()..];
    let end = inner.find(CLOSE).ok_or_else(|| Error::Template {
        message: format!(
            "Unterminated placeholder near '{}'",
            inner.chars().take(20).collect::<String>()
        ),
        variable: None,
    })?;
    let name = inner[..end].trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::Template {
            message: "Malformed placeholder name".to_string(),
            variable: Some(name.to_string()),
        });
    }
    Ok(Some((&text[..start], name, &inner[end + CLOSE.len()..])))
}

/// Build a `Vars` map from string pairs.
pub fn vars<I, K, V>(pairs: I) -> Vars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple() {
        let template = Template::new("queue = \"{{queue}}\"");
        let out = template.render(&vars([("queue", "long")])).unwrap();
        assert_eq!(out, "queue = \"long\"");
    }

    #[test]
    fn test_render_repeated_and_adjacent() {
        let template = Template::new("{{a}}{{b}}-{{a}}");
        let out = template.render(&vars([("a", "x"), ("b", "y")])).unwrap();
        assert_eq!(out, "xy-x");
    }

    #[test]
    fn test_render_leaves_cromwell_expressions() {
        let template = Template::new("sbatch -p ${queue} -t {{timelimit}} ${\"--mem=\" + memory_mb}");
        let out = template.render(&vars([("timelimit", "1-00:00")])).unwrap();
        assert_eq!(out, "sbatch -p ${queue} -t 1-00:00 ${\"--mem=\" + memory_mb}");
    }

    #[test]
    fn test_render_values_not_rescanned() {
        let template = Template::new("{{cpu_and_mem}}");
        let out = template
            .render(&vars([("cpu_and_mem", "{{queue}} ${cpu}")]))
            .unwrap();
        assert_eq!(out, "{{queue}} ${cpu}");
    }

    #[test]
    fn test_render_unresolved_placeholder_errors() {
        let template = Template::new("String pename = \"{{pename}}\"");
        let err = template.render(&Vars::new()).unwrap_err();
        match err {
            Error::Template { variable, .. } => assert_eq!(variable.as_deref(), Some("pename")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_extra_vars_are_inert() {
        let template = Template::new("a={{a}}");
        let out = template.render(&vars([("a", "1"), ("unused", "2")])).unwrap();
        assert_eq!(out, "a=1");
    }

    #[test]
    fn test_unterminated_placeholder_errors() {
        let template = Template::new("String pename = \"{{pename\"");
        assert!(matches!(
            template.render(&vars([("pename", "smp")])),
            Err(Error::Template { variable: None, .. })
        ));
    }

    #[test]
    fn test_malformed_placeholder_name_errors() {
        let template = Template::new("{{pename}s\"}}");
        assert!(template.placeholders().is_err());
    }

    #[test]
    fn test_placeholders_listed() {
        let template = Template::new("{{b}} {{a}} {{ b }}");
        let names: Vec<&str> = template.placeholders().unwrap().into_iter().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_no_placeholders() {
        let template = Template::new("plain text { with } braces");
        assert!(template.placeholders().unwrap().is_empty());
        assert_eq!(
            template.render(&Vars::new()).unwrap(),
            "plain text { with } braces"
        );
    }
}
