//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_TITLE: &str = "GETITDONE";

// Input placeholders
pub const PLACEHOLDER_ENTRY: &str = "Enter your text here";
pub const PLACEHOLDER_SEARCH: &str = "Search";

// Entry form labels, switched on the edit state machine
pub const LABEL_ADD: &str = "Add New Todo";
pub const LABEL_EDIT: &str = "Edit The Todo";

// Success messages
pub const SUCCESS_TODO_CREATED: &str = "Todo added";
pub const SUCCESS_TODO_UPDATED: &str = "Todo updated";
pub const SUCCESS_TODO_DELETED: &str = "Todo deleted";

// Error messages
pub const ERROR_TODO_CREATE_FAILED: &str = "Failed to add todo";
pub const ERROR_TODO_UPDATE_FAILED: &str = "Failed to update todo";
pub const ERROR_TODO_DELETE_FAILED: &str = "Failed to delete todo";
pub const ERROR_LOAD_FAILED: &str = "Failed to load todos";
pub const ERROR_EMPTY_TEXT: &str = "Todo text cannot be empty";

// Status bar hints
pub const HINTS_LIST: &str = "a: add • e: edit • d: delete • /: search • T: theme • r: reload • q: quit";
pub const HINTS_ENTRY: &str = "Enter: submit • Esc: cancel";
pub const HINTS_SEARCH: &str = "type to filter • Esc: back to list";

// UI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const LOADING_MESSAGE: &str = "Loading todos...";
pub const EMPTY_LIST_MESSAGE: &str = "No todos yet. Press 'a' to add one.";
pub const EMPTY_FILTER_MESSAGE: &str = "No todos match the current search.";

// Configuration defaults and bounds
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
/// Minimum request timeout in seconds
pub const TIMEOUT_MIN_SECONDS: u64 = 1;
/// Maximum request timeout in seconds
pub const TIMEOUT_MAX_SECONDS: u64 = 300;
/// Default request timeout in seconds
pub const TIMEOUT_DEFAULT_SECONDS: u64 = 30;
