//! Template engine for the emitted source.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

pub const EXPRESSION_TEMPLATE: &str = "expression";
pub const COMPONENT_TEMPLATE: &str = "component";

const EXPRESSION_SOURCE: &str = "(function(createElement) {
  function {{name}}() {
    return {{tree}};
  }
  return {{name}};
})";

const COMPONENT_SOURCE: &str = "import React from 'react';

export interface {{name}}Props {
  className?: string;
}

export const {{name}}: React.FC<{{name}}Props> = ({ className }) => {
  return (
{{indent body 4}}
  );
};
{{#if memo}}
export const {{name}}Memo = React.memo({{name}});
{{/if}}
{{#if text_styles}}
export const {{name}}TextStyles = [
{{#each text_styles}}
  {{this}},
{{/each}}
].join('\\n');
{{/if}}
export default {{name}};
";

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled; callers escape
/// values for their target syntax before rendering.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the built-in templates registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self::register_helpers(&mut handlebars);

        let mut engine = Self { handlebars };
        engine.register_template(EXPRESSION_TEMPLATE, EXPRESSION_SOURCE)?;
        engine.register_template(COMPONENT_TEMPLATE, COMPONENT_SOURCE)?;
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    fn register_helpers(handlebars: &mut Handlebars) {
        // Indent every non-blank line
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let content = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let spaces = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(4) as usize;
                    out.write(&indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

/// Prefix every non-blank line with `spaces` spaces.
pub fn indent(content: &str, spaces: usize) -> String {
    let prefix = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
