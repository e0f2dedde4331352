//! Reasoning-depth template selection.
//!
//! Pure lookup: task type × depth → instruction template. Templates are
//! opaque text with a single `{{format_instructions}}` placeholder the
//! caller substitutes. Depth trades token cost against detection recall;
//! it is a first-class configuration axis, not a baked-in prompt.

use ace_core::config::ReasoningDepth;

/// The substitution placeholder carried by every template.
pub const FORMAT_PLACEHOLDER: &str = "{{format_instructions}}";

/// Which reasoning task the template instructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    GraphVerification,
    GeneralReflection,
}

const GRAPH_MINIMAL: &str = "\
Check the extracted entities and relationships against the source chunks.
List repair actions for anything the sources do not support.

{{format_instructions}}";

const GRAPH_STANDARD: &str = "\
You are verifying a knowledge graph against its source documents.
For each entity and relationship, check whether the source chunks actually
support it. Watch for invented abstractions, relations between entities that
never co-occur, and claims more precise than the sources. Propose repair
actions only for clear errors.

{{format_instructions}}";

const GRAPH_DETAILED: &str = "\
You are verifying a knowledge graph against its source documents.
Work through the evidence step by step before proposing any repair:
1. For each entity, find the chunk that mentions it. No chunk means the
   entity is a candidate for deletion.
2. For each relationship, find a chunk where both endpoints appear together.
   Endpoints that never co-occur indicate a fabricated relation.
3. Look for duplicate entities under different names; propose merges with
   the canonical name as target.
4. Distrust suspiciously precise figures and grand abstractions; the source
   text is the only authority.
Explain your reasoning first, then emit the repair actions.

{{format_instructions}}";

const REFLECT_MINIMAL: &str = "\
Review the answer against the retrieved context. State the most important
lessons for improving future answers.

{{format_instructions}}";

const REFLECT_STANDARD: &str = "\
You are reviewing a generated answer together with the context it was
grounded in. Identify where the answer used the context well, where it
drifted from it, and what a better strategy would have been. Distill the
review into a few durable lessons.

{{format_instructions}}";

const REFLECT_DETAILED: &str = "\
You are reviewing a generated answer together with the context it was
grounded in. Examine the answer in stages:
1. Faithfulness: does every claim trace back to a retrieved chunk, entity,
   or relationship?
2. Coverage: did the answer use the most relevant parts of the context, or
   ignore them?
3. Strategy: did the playbook directives visibly shape the answer, and
   where did they fall short?
Turn each weakness into a concrete, reusable lesson for future queries.

{{format_instructions}}";

/// Select the instruction template for a task at the given depth.
pub fn select(task_type: TaskType, depth: ReasoningDepth) -> &'static str {
    match (task_type, depth) {
        (TaskType::GraphVerification, ReasoningDepth::Minimal) => GRAPH_MINIMAL,
        (TaskType::GraphVerification, ReasoningDepth::Standard) => GRAPH_STANDARD,
        (TaskType::GraphVerification, ReasoningDepth::Detailed) => GRAPH_DETAILED,
        (TaskType::GeneralReflection, ReasoningDepth::Minimal) => REFLECT_MINIMAL,
        (TaskType::GeneralReflection, ReasoningDepth::Standard) => REFLECT_STANDARD,
        (TaskType::GeneralReflection, ReasoningDepth::Detailed) => REFLECT_DETAILED,
    }
}

/// Substitute the format-instructions placeholder.
pub fn render(template: &str, format_instructions: &str) -> String {
    template.replace(FORMAT_PLACEHOLDER, format_instructions)
}

/// Schema block for repair-action output, with the optional reasoning
/// preamble the detailed templates invite.
pub fn repair_format_instructions() -> &'static str {
    r#"You may first think inside a fenced block:
```reasoning
<your analysis>
```
Then output ONLY a JSON array of repair actions, each one of:
{"action":"delete_entity","name":"<string>","reason":"<string>"}
{"action":"delete_relation","source":"<string>","target":"<string>","reason":"<string>"}
{"action":"merge_entities","sources":["<string>","..."],"target":"<string>","reason":"<string>"}
Output [] if nothing needs repair."#
}

/// Schema block for lesson output.
pub fn lesson_format_instructions() -> &'static str {
    r#"Output ONLY a JSON array of 1 to 3 lesson strings, for example:
["lesson one", "lesson two"]"#
}
