pub const RESPONSE_SCHEMA: &str = r#"{
  "suggestions": ["suggestion1", "suggestion2", ...],
  "improvements": ["improvement1", "improvement2", ...],
  "security": ["security1", "security2", ...],
  "explanation": "brief explanation"
}"#;
