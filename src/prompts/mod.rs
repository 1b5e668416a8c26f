pub mod code_analysis_prompt;
