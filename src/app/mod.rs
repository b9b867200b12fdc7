pub mod commands;
pub mod context;
pub mod engine;
pub mod events;
pub mod layer_service;
pub mod shortcut_manager;
pub mod state;
pub mod tool_manager;
pub mod view_state;
