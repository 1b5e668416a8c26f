use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::SnippetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    Python,
    JavaScript,
    Cpp,
}

impl SupportedLanguage {
    pub const ALL: [Self; 3] = [Self::Python, Self::JavaScript, Self::Cpp];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Cpp => "cpp",
        }
    }

    /// Starter snippet shown for a fresh editor buffer.
    pub const fn template(self) -> &'static str {
        match self {
            Self::Python => "# Write your Python code here\n\ndef main():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    main()",
            Self::JavaScript => "// Write your JavaScript code here\n\nfunction main() {\n    console.log(\"Hello, World!\");\n}\n\nmain();",
            Self::Cpp => "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, World!\" << std::endl;\n    return 0;\n}",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SupportedLanguage {
    type Err = SnippetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.id() == normalized)
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::ALL.iter().map(|l| l.id()).collect();
                SnippetError::validation_error(
                    "language",
                    value,
                    "must be a supported language",
                    Some(format!("Use one of: {}", supported.join(", ")).as_str()),
                )
            })
    }
}
