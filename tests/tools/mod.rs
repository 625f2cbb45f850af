//! Tool operations exercised through `Analyzer`, the layer both the CLI and
//! the MCP server call into

mod file_tools_tests;
mod project_tools_tests;
