//! Drives a generation run: header, one line group per section, sentinel.

use std::io::Write;

use genversion_config::{Config, OutputNames};
use tracing::{debug, info};

use crate::{
    catalog,
    errors::{GenError, Result},
    render::{Token, TokenRenderer},
    wrap::{LineBudget, LineWrapper},
};

/// A labeled, ordered group of tokens printed on one or more lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub tokens: Vec<Token>,
}

impl Section {
    pub fn new(label: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            label: label.into(),
            tokens,
        }
    }
}

/// Renders sections into the generated C array.
#[derive(Debug)]
pub struct Generator {
    budget: LineBudget,
    names: OutputNames,
    renderer: TokenRenderer,
}

impl Generator {
    pub fn new(budget: LineBudget, names: OutputNames) -> Self {
        Self {
            budget,
            names,
            renderer: TokenRenderer::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.layout.into(), config.output.clone())
    }

    /// Writes the whole file into `out` and hands the sink back.
    ///
    /// Sections are checked before the first byte is written, so a
    /// malformed section never leaves a partial file behind.
    pub fn generate<W: Write>(&mut self, sections: &[Section], out: W) -> Result<W> {
        validate(sections)?;

        let mut wrapper = LineWrapper::new(out, self.budget);
        writeln!(
            wrapper.get_mut(),
            "/* {} - generated by {} - DO NOT EDIT! */",
            self.names.file_name, self.names.generator
        )?;
        writeln!(
            wrapper.get_mut(),
            "const char * const {}[] = {{",
            self.names.array_name
        )?;

        let mut token_count = 0;
        for section in sections {
            debug!(label = %section.label, tokens = section.tokens.len(), "writing section");
            wrapper.start_line(&section.label)?;
            for token in &section.tokens {
                wrapper.append(self.renderer.render(token))?;
            }
            wrapper.end_line()?;
            token_count += section.tokens.len();
        }

        wrapper.get_mut().write_all(b"  0\n};\n")?;
        let mut out = wrapper.into_inner();
        out.flush()?;

        info!(
            sections = sections.len(),
            tokens = token_count,
            file = %self.names.file_name,
            "version info generated"
        );
        Ok(out)
    }

    pub fn generate_to_string(&mut self, sections: &[Section]) -> Result<String> {
        let bytes = self.generate(sections, Vec::new())?;
        String::from_utf8(bytes).map_err(|err| GenError::MalformedInput(err.to_string()))
    }
}

/// Resolves the configuration's catalog against its flags and writes the
/// generated file into `out`.
pub fn generate_from_config<W: Write>(config: &Config, out: W) -> Result<W> {
    config.validate()?;
    let sections = catalog::resolve(config.catalog(), &config.flags);
    Generator::from_config(config).generate(&sections, out)
}

/// Characters that would end or split a C string element if written raw.
fn breaks_literal(text: &str) -> bool {
    text.chars().any(|ch| matches!(ch, '"' | '\\' | '\n' | '\r'))
}

fn validate(sections: &[Section]) -> Result<()> {
    for section in sections {
        if breaks_literal(&section.label) {
            return Err(GenError::MalformedInput(format!(
                "section label {:?} cannot be placed in a string literal",
                section.label
            )));
        }
        for token in &section.tokens {
            let raw = match token {
                Token::Literal(text) => text.as_str(),
                Token::Defined(name, _) | Token::DefinedNumeric(name, _) | Token::Undefined(name) => {
                    if name.is_empty() {
                        return Err(GenError::MalformedInput(format!(
                            "section `{}` holds a token without a name: {token:?}",
                            section.label
                        )));
                    }
                    name.as_str()
                }
            };
            if breaks_literal(raw) {
                return Err(GenError::MalformedInput(format!(
                    "section `{}`: {raw:?} cannot be placed in a string literal",
                    section.label
                )));
            }
        }
    }
    Ok(())
}
