// src/lang_queries.rs
// [Rust, Python, TypeScript]

/// Tag queries. `@def` captures definition names, `@ref` captures references.
pub const TAG_QUERIES: [&str; 3] = [
    // Rust
    r"
        (function_item name: (identifier) @def)
        (function_signature_item name: (identifier) @def)
        (struct_item name: (type_identifier) @def)
        (enum_item name: (type_identifier) @def)
        (trait_item name: (type_identifier) @def)
        (const_item name: (identifier) @def)
        (static_item name: (identifier) @def)
        (type_item name: (type_identifier) @def)
        (mod_item name: (identifier) @def)
        (macro_definition name: (identifier) @def)

        (call_expression function: (identifier) @ref)
        (call_expression function: (field_expression field: (field_identifier) @ref))
        (scoped_identifier name: (identifier) @ref)
        (use_list (identifier) @ref)
        (macro_invocation macro: (identifier) @ref)
        (type_identifier) @ref
    ",
    // Python
    r"
        (function_definition name: (identifier) @def)
        (class_definition name: (identifier) @def)

        (identifier) @ref
    ",
    // TypeScript: definitions only, references come from the lexical stage
    r"
        (function_declaration name: (identifier) @def)
        (class_declaration name: (type_identifier) @def)
        (interface_declaration name: (type_identifier) @def)
        (type_alias_declaration name: (type_identifier) @def)
        (method_definition name: (property_identifier) @def)
    ",
];

/// Reserved words the lexical stage never reports as references.
pub const KEYWORDS: [&[&str]; 3] = [
    // Rust
    &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ],
    // Python
    &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    // TypeScript
    &[
        "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch", "class",
        "const", "continue", "debugger", "default", "delete", "do", "else", "enum", "export",
        "extends", "false", "finally", "for", "from", "function", "if", "implements", "import",
        "in", "instanceof", "interface", "let", "new", "null", "number", "private", "protected",
        "public", "readonly", "return", "static", "string", "super", "switch", "this", "throw",
        "true", "try", "type", "typeof", "undefined", "var", "void", "while", "yield",
    ],
];
