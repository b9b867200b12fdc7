use crate::app::commands::EditorCommand;
use crate::app::events::Modifiers;
use crate::app::state::ToolType;
use std::collections::HashMap;

/// Maps key chords such as `ctrl+shift+z` to editor commands.
pub struct ShortcutManager {
    shortcuts: HashMap<String, EditorCommand>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut manager = Self { shortcuts: HashMap::new() };
        manager.load_default_shortcuts();
        manager
    }

    pub fn bind(&mut self, chord: &str, cmd: EditorCommand) {
        self.shortcuts.insert(chord.to_ascii_lowercase(), cmd);
    }

    pub fn unbind(&mut self, chord: &str) -> Option<EditorCommand> {
        self.shortcuts.remove(&chord.to_ascii_lowercase())
    }

    fn load_default_shortcuts(&mut self) {
        self.bind("escape", EditorCommand::Cancel);
        self.bind("delete", EditorCommand::DeleteSelection);
        self.bind("backspace", EditorCommand::DeleteSelection);
        self.bind("ctrl+a", EditorCommand::SelectAll);
        self.bind("ctrl+z", EditorCommand::Undo);
        self.bind("ctrl+shift+z", EditorCommand::Redo);
        self.bind("ctrl+y", EditorCommand::Redo);

        self.bind("[", EditorCommand::ChangeBrushSize(-1));
        self.bind("]", EditorCommand::ChangeBrushSize(1));

        self.bind("p", EditorCommand::SelectTool(ToolType::Pencil));
        self.bind("e", EditorCommand::SelectTool(ToolType::Eraser));
        self.bind("i", EditorCommand::SelectTool(ToolType::Eyedropper));
        self.bind("b", EditorCommand::SelectTool(ToolType::Bucket));
        self.bind("l", EditorCommand::SelectTool(ToolType::Line));
        self.bind("u", EditorCommand::SelectTool(ToolType::Shape));
        self.bind("z", EditorCommand::SelectTool(ToolType::Magnifier));
        self.bind("m", EditorCommand::SelectTool(ToolType::RectSelect));
    }

    /// Builds the lookup chord: `ctrl+` (Ctrl or Cmd), then `alt+`, then
    /// `shift+`, then the lower-cased key name.
    pub fn chord(key: &str, modifiers: Modifiers) -> String {
        let mut chord = String::new();
        if modifiers.command() {
            chord.push_str("ctrl+");
        }
        if modifiers.alt {
            chord.push_str("alt+");
        }
        if modifiers.shift {
            chord.push_str("shift+");
        }
        chord.push_str(&key.to_ascii_lowercase());
        chord
    }

    pub fn resolve(&self, key: &str, modifiers: Modifiers) -> Option<EditorCommand> {
        self.shortcuts.get(&Self::chord(key, modifiers)).cloned()
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}
