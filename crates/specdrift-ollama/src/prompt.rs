//! Prompt construction for contract-test generation.
//!
//! Builds the system/user message pair that asks the model for a pytest
//! module validating sample payloads against the new spec. The output is
//! intended to be written directly to a `.py` file, so the prompt forbids
//! markdown fences and prose around the code.

use crate::client::Message;
use specdrift_core::SpecDocument;

/// Character cap applied to the spec snippet embedded in the prompt.
pub const SPEC_SNIPPET_MAX_CHARS: usize = 2000;

const TRUNCATION_MARKER: &str = "\n... (truncated)";

const SYSTEM_PROMPT: &str = "\
You are an assistant that writes concise, deterministic pytest tests \
for validating JSON response payloads against a simple API spec.\n\n\
STRICT REQUIREMENTS:\n\
- Use ONLY Python standard library and pytest\n\
- NO external libraries (no jsonschema, no requests, no pydantic)\n\
- NO markdown code fences (```) in your output\n\
- NO explanatory text before or after the code\n\
- Output ONLY valid Python code that can be saved directly to a .py file\n\
- Assume tests will run against in-memory sample payloads, not real HTTP calls";

/// Serialize the spec to pretty JSON, truncated to a size the model can take
/// in a single prompt.
pub fn spec_snippet(spec: &SpecDocument, max_chars: usize) -> String {
    let rendered = serde_json::to_string_pretty(spec).unwrap_or_default();
    if rendered.len() > max_chars {
        let mut out: String = rendered.chars().take(max_chars).collect();
        out.push_str(TRUNCATION_MARKER);
        out
    } else {
        rendered
    }
}

/// Build the message pair for a test-generation request.
///
/// `diff_summary` is the newline-joined change-line summary; `spec_snippet`
/// is the (possibly truncated) JSON rendering of the new spec.
pub fn test_generation_messages(diff_summary: &str, spec_snippet: &str) -> Vec<Message> {
    let user = format!(
        "Here is the current API spec (simplified JSON):\n\
         {spec_snippet}\n\n\
         Here are the changes detected between the previous spec and this spec:\n\
         {diff_summary}\n\n\
         Generate a pytest test module with the following structure:\n\n\
         1. Import only: import pytest\n\
         2. Define one test function per endpoint/change detected\n\
         3. Each test function should:\n\
         \x20  - Have a clear docstring explaining what it tests\n\
         \x20  - Create a sample response payload (dict)\n\
         \x20  - Use assert statements to validate field existence (using 'in' operator)\n\
         \x20  - Use assert isinstance() to validate types\n\
         \x20  - For type changes: include a comment showing what old clients would expect\n\n\
         4. For type validation use these mappings:\n\
         \x20  - \"string\" -> str\n\
         \x20  - \"number\" -> (int, float)\n\
         \x20  - \"boolean\" -> bool\n\n\
         5. Name test functions clearly: test_<endpoint>_<method>_<what_is_tested>\n\n\
         IMPORTANT:\n\
         - DO NOT use markdown code fences (```)\n\
         - DO NOT import jsonschema or any external validation libraries\n\
         - DO NOT include explanations outside of code comments/docstrings\n\
         - Output ONLY Python code\n"
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
}
