//! Language identification
//!
//! Maps block language identifiers (and their common aliases) to the
//! grammars the built-in engine knows.

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    // Web stack
    JavaScript,
    TypeScript,
    Tsx,
    Html,
    Css,
    Json,
    // Systems
    Rust,
    C,
    Cpp,
    Go,
    // General purpose
    Python,
    Java,
    Php,
    // Config / scripting
    Toml,
    Bash,
}

impl LanguageId {
    /// Every language, in selection-list order
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Json,
        LanguageId::Rust,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::Go,
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::Php,
        LanguageId::Toml,
        LanguageId::Bash,
        LanguageId::PlainText,
    ];

    /// Resolve a block language identifier or alias (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        let lang = match id.trim().to_lowercase().as_str() {
            "javascript" | "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
            "typescript" | "ts" | "mts" | "cts" => LanguageId::TypeScript,
            "tsx" => LanguageId::Tsx,
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "json" => LanguageId::Json,
            "rust" | "rs" => LanguageId::Rust,
            "c" | "h" => LanguageId::C,
            "cpp" | "c++" | "cc" | "cxx" | "hpp" => LanguageId::Cpp,
            "go" | "golang" => LanguageId::Go,
            "python" | "py" => LanguageId::Python,
            "java" => LanguageId::Java,
            "php" => LanguageId::Php,
            "toml" => LanguageId::Toml,
            "bash" | "sh" | "shell" | "shellscript" | "zsh" => LanguageId::Bash,
            "text" | "txt" | "plaintext" | "plain" => LanguageId::PlainText,
            _ => return None,
        };
        Some(lang)
    }

    /// Canonical identifier stored in block data
    pub fn id(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "text",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Tsx => "tsx",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Json => "json",
            LanguageId::Rust => "rust",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::Go => "go",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::Php => "php",
            LanguageId::Toml => "toml",
            LanguageId::Bash => "bash",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Tsx => "TSX",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Json => "JSON",
            LanguageId::Rust => "Rust",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Go => "Go",
            LanguageId::Python => "Python",
            LanguageId::Java => "Java",
            LanguageId::Php => "PHP",
            LanguageId::Toml => "TOML",
            LanguageId::Bash => "Bash",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}
