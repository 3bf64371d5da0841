use itertools::Itertools;
use std::fmt;

/// Sample text used when the input node has no label.
pub const DEFAULT_SAMPLE_TEXT: &str = "SpaCy is an amazing NLP library!";

/// The result of compiling a pipeline graph.
///
/// Holds no state beyond the snapshot it was built from; compiling the same graph again
/// produces an equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledScript {
    /// The generated script.
    pub text: String,
    /// Node ids in the order they were visited.
    pub execution_order: Vec<String>,
    /// Distinct node kinds in order of first appearance, including kinds without a template.
    pub used_kinds: Vec<String>,
}

impl CompiledScript {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CompiledScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Collects script sections and renders them in their fixed order.
#[derive(Debug, Default)]
pub(super) struct ScriptWriter<'t> {
    sample_text: String,
    definitions: Vec<&'t str>,
    invocations: Vec<&'t str>,
    prints: Vec<&'t str>,
}

impl<'t> ScriptWriter<'t> {
    pub(super) fn new(sample_text: impl Into<String>) -> Self {
        Self {
            sample_text: sample_text.into(),
            ..Self::default()
        }
    }

    pub(super) fn define(&mut self, definition: &'t str) {
        self.definitions.push(definition);
    }

    pub(super) fn invoke(&mut self, invocation: &'t str, print: &'t str) {
        self.invocations.push(invocation);
        self.prints.push(print);
    }

    pub(super) fn render(&self) -> String {
        let mut script = String::new();

        script.push_str("import spacy\n\n");
        script.push_str("# Load spaCy model\n");
        script.push_str("nlp = spacy.load(\"en_core_web_sm\")\n\n");

        script.push_str("# Sample text input\n");
        script.push_str(&format!("text = {}\n", python_string_literal(&self.sample_text)));
        script.push_str("doc = nlp(text)\n\n");

        script.push_str("# Define pipeline functions\n");
        script.push_str(&self.definitions.iter().join("\n"));
        script.push_str("\n\n");

        script.push_str("# Run the pipeline\n");
        for line in &self.invocations {
            script.push_str(line);
            script.push('\n');
        }

        script.push_str("\n# Print results\n");
        script.push_str("print(\"Results:\")\n");
        for line in &self.prints {
            script.push_str(line);
            script.push('\n');
        }

        script
    }
}

/// Double-quoted Python string literal.
fn python_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\x{:02x}", c as u32)),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_quoted_verbatim() {
        assert_eq!(python_string_literal("Hello world"), "\"Hello world\"");
    }

    #[test]
    fn quotes_and_newlines_are_escaped() {
        assert_eq!(
            python_string_literal("say \"hi\"\nback\\slash"),
            "\"say \\\"hi\\\"\\nback\\\\slash\""
        );
    }

    #[test]
    fn other_control_characters_use_hex_escapes() {
        assert_eq!(python_string_literal("a\0b\x1bc\u{7f}"), "\"a\\x00b\\x1bc\\x7f\"");
        assert_eq!(python_string_literal("caf\u{e9}"), "\"caf\u{e9}\"");
    }

    #[test]
    fn empty_writer_renders_prologue_and_empty_results() {
        let script = ScriptWriter::new(DEFAULT_SAMPLE_TEXT).render();
        assert_eq!(
            script,
            "import spacy\n\n\
             # Load spaCy model\n\
             nlp = spacy.load(\"en_core_web_sm\")\n\n\
             # Sample text input\n\
             text = \"SpaCy is an amazing NLP library!\"\n\
             doc = nlp(text)\n\n\
             # Define pipeline functions\n\n\n\
             # Run the pipeline\n\n\
             # Print results\n\
             print(\"Results:\")\n"
        );
    }
}
