pub mod column_prompt;
