//! Static table of supported languages.
//!
//! Each entry pairs a canonical language name with the grammar that parses it
//! and the query run when no `--query-file` is given. Default queries tag
//! every interesting definition with `@name` plus a kind capture
//! (`@function`, `@class`, ...), so `treequery src name` lists definitions
//! in any of these languages.

use ast_grep_language::SupportLang;

/// One row of the language table.
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    /// Canonical name, as reported by detection.
    pub name: &'static str,
    /// Extra spellings accepted by `--lang`.
    pub aliases: &'static [&'static str],
    pub grammar: SupportLang,
    /// Empty for languages that only support tree dumps out of the box.
    pub default_query: &'static str,
}

impl LanguageEntry {
    fn answers_to(&self, id: &str) -> bool {
        self.name.eq_ignore_ascii_case(id)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(id))
    }
}

const RUST_QUERY: &str = r#"
(function_item name: (identifier) @name) @function
(struct_item name: (type_identifier) @name) @struct
(enum_item name: (type_identifier) @name) @enum
(trait_item name: (type_identifier) @name) @trait
"#;

const PYTHON_QUERY: &str = r#"
(function_definition name: (identifier) @name) @function
(class_definition name: (identifier) @name) @class
"#;

const GO_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @function
(method_declaration name: (field_identifier) @name) @method
(type_spec name: (type_identifier) @name) @type
"#;

const JAVASCRIPT_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @function
(class_declaration name: (identifier) @name) @class
(method_definition name: (property_identifier) @name) @method
"#;

const TYPESCRIPT_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @function
(class_declaration name: (type_identifier) @name) @class
(interface_declaration name: (type_identifier) @name) @interface
(method_definition name: (property_identifier) @name) @method
"#;

const JAVA_QUERY: &str = r#"
(class_declaration name: (identifier) @name) @class
(interface_declaration name: (identifier) @name) @interface
(method_declaration name: (identifier) @name) @method
"#;

const C_QUERY: &str = r#"
(function_definition
  declarator: (function_declarator declarator: (identifier) @name)) @function
(struct_specifier name: (type_identifier) @name body: (field_declaration_list)) @struct
"#;

const CPP_QUERY: &str = r#"
(function_definition
  declarator: (function_declarator declarator: (identifier) @name)) @function
(class_specifier name: (type_identifier) @name) @class
(struct_specifier name: (type_identifier) @name body: (field_declaration_list)) @struct
"#;

const RUBY_QUERY: &str = r#"
(method name: (identifier) @name) @method
(class name: (constant) @name) @class
(module name: (constant) @name) @module
"#;

const BASH_QUERY: &str = r#"
(function_definition name: (word) @name) @function
"#;

/// All languages treequery knows a grammar for.
pub static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        name: "Rust",
        aliases: &["rs"],
        grammar: SupportLang::Rust,
        default_query: RUST_QUERY,
    },
    LanguageEntry {
        name: "Python",
        aliases: &["py", "python3"],
        grammar: SupportLang::Python,
        default_query: PYTHON_QUERY,
    },
    LanguageEntry {
        name: "Go",
        aliases: &["golang"],
        grammar: SupportLang::Go,
        default_query: GO_QUERY,
    },
    LanguageEntry {
        name: "JavaScript",
        aliases: &["js", "jsx", "node"],
        grammar: SupportLang::JavaScript,
        default_query: JAVASCRIPT_QUERY,
    },
    LanguageEntry {
        name: "TypeScript",
        aliases: &["ts"],
        grammar: SupportLang::TypeScript,
        default_query: TYPESCRIPT_QUERY,
    },
    LanguageEntry {
        name: "TSX",
        aliases: &[],
        grammar: SupportLang::Tsx,
        default_query: TYPESCRIPT_QUERY,
    },
    LanguageEntry {
        name: "Java",
        aliases: &[],
        grammar: SupportLang::Java,
        default_query: JAVA_QUERY,
    },
    LanguageEntry {
        name: "C",
        aliases: &["h"],
        grammar: SupportLang::C,
        default_query: C_QUERY,
    },
    LanguageEntry {
        name: "C++",
        aliases: &["cpp", "cc", "cxx", "hpp"],
        grammar: SupportLang::Cpp,
        default_query: CPP_QUERY,
    },
    LanguageEntry {
        name: "Ruby",
        aliases: &["rb"],
        grammar: SupportLang::Ruby,
        default_query: RUBY_QUERY,
    },
    LanguageEntry {
        name: "Shell",
        aliases: &["bash", "sh", "zsh"],
        grammar: SupportLang::Bash,
        default_query: BASH_QUERY,
    },
    LanguageEntry {
        name: "C#",
        aliases: &["csharp", "cs"],
        grammar: SupportLang::CSharp,
        default_query: "",
    },
    LanguageEntry {
        name: "Lua",
        aliases: &[],
        grammar: SupportLang::Lua,
        default_query: "",
    },
    LanguageEntry {
        name: "PHP",
        aliases: &[],
        grammar: SupportLang::Php,
        default_query: "",
    },
    LanguageEntry {
        name: "Kotlin",
        aliases: &["kt"],
        grammar: SupportLang::Kotlin,
        default_query: "",
    },
    LanguageEntry {
        name: "Swift",
        aliases: &[],
        grammar: SupportLang::Swift,
        default_query: "",
    },
    LanguageEntry {
        name: "Scala",
        aliases: &[],
        grammar: SupportLang::Scala,
        default_query: "",
    },
    LanguageEntry {
        name: "Elixir",
        aliases: &["ex", "exs"],
        grammar: SupportLang::Elixir,
        default_query: "",
    },
    LanguageEntry {
        name: "Haskell",
        aliases: &["hs"],
        grammar: SupportLang::Haskell,
        default_query: "",
    },
    LanguageEntry {
        name: "JSON",
        aliases: &[],
        grammar: SupportLang::Json,
        default_query: "",
    },
    LanguageEntry {
        name: "YAML",
        aliases: &["yml"],
        grammar: SupportLang::Yaml,
        default_query: "",
    },
    LanguageEntry {
        name: "HTML",
        aliases: &["htm"],
        grammar: SupportLang::Html,
        default_query: "",
    },
    LanguageEntry {
        name: "CSS",
        aliases: &[],
        grammar: SupportLang::Css,
        default_query: "",
    },
    LanguageEntry {
        name: "HCL",
        aliases: &["terraform", "tf"],
        grammar: SupportLang::Hcl,
        default_query: "",
    },
    LanguageEntry {
        name: "Nix",
        aliases: &[],
        grammar: SupportLang::Nix,
        default_query: "",
    },
    LanguageEntry {
        name: "Solidity",
        aliases: &["sol"],
        grammar: SupportLang::Solidity,
        default_query: "",
    },
];

/// Find the entry for a language name or alias, ignoring ASCII case.
pub fn lookup(id: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.answers_to(id))
}

/// Find the entry whose grammar is `grammar`.
pub fn for_grammar(grammar: SupportLang) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|entry| entry.grammar == grammar)
}
