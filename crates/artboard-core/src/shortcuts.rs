//! Keyboard command dispatch and the shortcut registry.

use crate::editor::Editor;
use crate::element::ElementId;
use crate::input::Modifiers;
use crate::tools::Tool;

/// An editor command produced by the keyboard dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DeleteSelection,
    Duplicate,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Cancel,
    SetTool(Tool),
}

/// Map a key press to a command.
///
/// `key` is the logical key name as the host reports it ("a", "Delete",
/// "Escape"); letters match case-insensitively. Every shortcut is suppressed
/// while a text input field has focus so typing never mutates the document.
pub fn command_for_key(key: &str, modifiers: Modifiers, text_field_focused: bool) -> Option<Command> {
    if text_field_focused {
        return None;
    }

    if modifiers.primary() {
        return match key.to_ascii_lowercase().as_str() {
            "a" => Some(Command::SelectAll),
            "c" => Some(Command::Copy),
            "x" => Some(Command::Cut),
            "v" => Some(Command::Paste),
            "d" => Some(Command::Duplicate),
            _ => None,
        };
    }

    match key {
        "Delete" | "Backspace" => return Some(Command::DeleteSelection),
        "Escape" => return Some(Command::Cancel),
        _ => {}
    }

    // Single-letter toolbar shortcuts, no modifier held.
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let c = c.to_ascii_lowercase();
        for tool in [
            Tool::Select,
            Tool::Frame,
            Tool::Rectangle,
            Tool::Ellipse,
            Tool::Line,
            Tool::Text,
            Tool::Hand,
        ] {
            if tool.shortcut_key() == c {
                return Some(Command::SetTool(tool));
            }
        }
    }
    None
}

impl Editor {
    /// Execute a dispatched command against the current selection.
    pub fn apply_command(&mut self, command: Command) {
        let selection: Vec<ElementId> = self.selection().to_vec();
        match command {
            Command::DeleteSelection => self.delete_elements(&selection),
            Command::Duplicate => {
                self.duplicate_elements(&selection);
            }
            Command::SelectAll => self.select_all(),
            Command::Copy => self.copy(&selection),
            Command::Cut => self.cut(&selection),
            Command::Paste => {
                self.paste();
            }
            Command::Cancel => self.cancel(),
            Command::SetTool(tool) => self.set_tool(tool),
        }
    }
}

/// A keyboard shortcut definition, for help overlays and menus.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub primary: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, primary: bool, description: &'static str) -> Self {
        Self {
            key,
            primary,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+C").
    pub fn format(&self) -> String {
        if self.primary {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("A", true, "Select all elements"),
            Shortcut::new("C", true, "Copy elements"),
            Shortcut::new("X", true, "Cut elements"),
            Shortcut::new("V", true, "Paste elements"),
            Shortcut::new("D", true, "Duplicate elements"),
            Shortcut::new("Delete", false, "Delete selected elements"),
            Shortcut::new("Backspace", false, "Delete selected elements"),
            Shortcut::new("Escape", false, "Cancel current action"),
            Shortcut::new("V", false, "Select tool"),
            Shortcut::new("F", false, "Frame tool"),
            Shortcut::new("R", false, "Rectangle tool"),
            Shortcut::new("O", false, "Ellipse tool"),
            Shortcut::new("L", false, "Line tool"),
            Shortcut::new("T", false, "Text tool"),
            Shortcut::new("H", false, "Hand tool"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn primary() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_chords() {
        assert_eq!(
            command_for_key("a", primary(), false),
            Some(Command::SelectAll)
        );
        assert_eq!(command_for_key("C", primary(), false), Some(Command::Copy));
        assert_eq!(command_for_key("x", primary(), false), Some(Command::Cut));
        assert_eq!(command_for_key("v", primary(), false), Some(Command::Paste));
        assert_eq!(
            command_for_key("d", primary(), false),
            Some(Command::Duplicate)
        );
        assert_eq!(command_for_key("q", primary(), false), None);
    }

    #[test]
    fn test_meta_counts_as_primary() {
        let meta = Modifiers {
            meta: true,
            ..Default::default()
        };
        assert_eq!(command_for_key("c", meta, false), Some(Command::Copy));
    }

    #[test]
    fn test_delete_and_escape() {
        let none = Modifiers::default();
        assert_eq!(
            command_for_key("Delete", none, false),
            Some(Command::DeleteSelection)
        );
        assert_eq!(
            command_for_key("Backspace", none, false),
            Some(Command::DeleteSelection)
        );
        assert_eq!(command_for_key("Escape", none, false), Some(Command::Cancel));
    }

    #[test]
    fn test_tool_shortcuts() {
        let none = Modifiers::default();
        assert_eq!(
            command_for_key("v", none, false),
            Some(Command::SetTool(Tool::Select))
        );
        assert_eq!(
            command_for_key("R", none, false),
            Some(Command::SetTool(Tool::Rectangle))
        );
        assert_eq!(
            command_for_key("h", none, false),
            Some(Command::SetTool(Tool::Hand))
        );
        assert_eq!(command_for_key("z", none, false), None);
    }

    #[test]
    fn test_text_field_focus_suppresses_everything() {
        assert_eq!(command_for_key("Delete", Modifiers::default(), true), None);
        assert_eq!(command_for_key("a", primary(), true), None);
        assert_eq!(command_for_key("r", Modifiers::default(), true), None);
        assert_eq!(command_for_key("Escape", Modifiers::default(), true), None);
    }

    #[test]
    fn test_apply_delete_and_paste_commands() {
        let mut editor = Editor::new();
        editor.add_element(ElementKind::Rectangle, 0.0, 0.0, 50.0, 50.0);

        editor.apply_command(Command::Copy);
        editor.apply_command(Command::DeleteSelection);
        assert!(editor.document.is_empty());
        assert!(editor.selection().is_empty());

        editor.apply_command(Command::Paste);
        assert_eq!(editor.document.len(), 1);
        assert_eq!(editor.selection().len(), 1);
    }

    #[test]
    fn test_apply_cancel_clears_selection_and_tool() {
        let mut editor = Editor::new();
        editor.add_element(ElementKind::Rectangle, 0.0, 0.0, 50.0, 50.0);
        editor.set_tool(Tool::Ellipse);
        editor.apply_command(Command::Cancel);
        assert!(editor.selection().is_empty());
        assert!(editor.interaction().is_idle());
        assert_eq!(editor.tool(), Tool::Select);
    }

    #[test]
    fn test_apply_set_tool() {
        let mut editor = Editor::new();
        editor.apply_command(Command::SetTool(Tool::Ellipse));
        assert_eq!(editor.tool(), Tool::Ellipse);
    }

    #[test]
    fn test_registry_covers_tools() {
        let all = ShortcutRegistry::all();
        assert!(all.iter().any(|s| s.description.contains("Hand")));
        assert_eq!(
            all.iter().find(|s| s.key == "C" && s.primary).unwrap().format(),
            "Ctrl+C"
        );
    }
}
