//! Instruction templates and response cleanup for the hosted text model.
//!
//! Provides the enhancement and diagram instructions, the deterministic
//! fallback values used when the model call fails, and the code-fence
//! stripping applied to diagram responses.

use super::StyleTag;

/// Fixed diagram returned when the text model fails.
pub const FALLBACK_DIAGRAM: &str = "graph TD\n    A[Error] --> B[Diagram generation failed]";

/// Quality descriptors appended by the enhancement fallback.
const FALLBACK_QUALITY_SUFFIX: &str = "high resolution, ultra detailed, cinematic lighting";

/// Builds the enhancement instruction for a prompt and style.
pub fn enhancement_instruction(prompt: &str, style: StyleTag) -> String {
    format!(
        "You are an expert prompt engineer for text-to-image models. \
         Rewrite the following prompt into a single richly detailed image \
         description in a {} style. Add concrete details about subject, \
         composition, lighting and mood. Respond with the rewritten prompt \
         only, no commentary.\n\nPrompt: {}",
        style, prompt
    )
}

/// Builds the diagram instruction for a prompt.
///
/// Asks for bare Mermaid source; models still wrap output in fences often
/// enough that callers must strip them anyway.
pub fn diagram_instruction(prompt: &str) -> String {
    format!(
        "Create a Mermaid flowchart that visualizes the concept below as a \
         small graph of steps or relationships. Use `graph TD` syntax. \
         Respond with the Mermaid source only, without markdown code fences \
         or any explanation.\n\nConcept: {}",
        prompt
    )
}

/// Deterministic enhancement used when the text model fails.
pub fn fallback_enhancement(prompt: &str, style: StyleTag) -> String {
    format!("{}, {}, {}", prompt, style, FALLBACK_QUALITY_SUFFIX)
}

/// Strips leading/trailing markdown code-fence markers from model output.
///
/// Handles a leading ```` ``` ```` or ```` ```mermaid ```` line and a
/// trailing ```` ``` ```` line, then trims surrounding whitespace. Text
/// without fences passes through unchanged apart from trimming.
pub fn strip_code_fences(text: &str) -> String {
    let mut current = text.trim().to_string();

    // Repeat until stable so stacked or malformed fences cannot survive.
    loop {
        let next = strip_fences_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_fences_once(text: &str) -> String {
    let trimmed = text.trim();

    let without_leading = match trimmed.strip_prefix("```") {
        Some(rest) => {
            // Drop the remainder of the fence line (e.g. a "mermaid" tag).
            match rest.find('\n') {
                Some(idx) => &rest[idx + 1..],
                None => "",
            }
        }
        None => trimmed,
    };

    let without_trailing = match without_leading.trim_end().strip_suffix("```") {
        Some(rest) => rest,
        None => without_leading,
    };

    without_trailing.trim().to_string()
}
