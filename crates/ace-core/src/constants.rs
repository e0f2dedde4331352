/// Maximum number of entities included in a generation context block.
pub const MAX_CONTEXT_ENTITIES: usize = 20;

/// Maximum number of relationships included in a generation context block.
pub const MAX_CONTEXT_RELATIONSHIPS: usize = 20;

/// Maximum number of text chunks included in a generation context block.
pub const MAX_CONTEXT_CHUNKS: usize = 5;

/// Maximum number of lessons the Reflector is asked for per cycle.
pub const MAX_LESSONS_PER_REFLECTION: usize = 3;
