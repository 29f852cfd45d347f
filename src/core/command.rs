//! Commands: one variant per menu action.
//!
//! Menus, the context menu and keyboard shortcuts all resolve to a `Command`;
//! the editor dispatches on it with an exhaustive `match`, so there is no
//! string-keyed control flow anywhere in the crate.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== File ====================
    New,
    Open,
    Save,
    SaveAs,
    Exit,

    // ==================== Edit ====================
    Delete,
    Copy,
    Paste,
    SelectAll,

    // ==================== Format ====================
    Font,
    WordWrap,

    // ==================== View ====================
    Theme,
    Count,

    // ==================== Help ====================
    AskForHelp,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Exit,
        Command::Delete,
        Command::Copy,
        Command::Paste,
        Command::SelectAll,
        Command::Font,
        Command::WordWrap,
        Command::Theme,
        Command::Count,
        Command::AskForHelp,
    ];

    /// Stable identifier, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::New => "new",
            Command::Open => "open",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Exit => "exit",
            Command::Delete => "delete",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::SelectAll => "selectAll",
            Command::Font => "font",
            Command::WordWrap => "wordWrap",
            Command::Theme => "theme",
            Command::Count => "count",
            Command::AskForHelp => "askForHelp",
        }
    }

    /// Menu text.
    pub fn label(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Exit => "Exit",
            Command::Delete => "Delete",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::Font => "Font",
            Command::WordWrap => "Word Wrap",
            Command::Theme => "Theme",
            Command::Count => "Count",
            Command::AskForHelp => "Ask For Help",
        }
    }

    /// Shortcut hint shown next to the menu label.
    pub fn shortcut_hint(&self) -> Option<&'static str> {
        match self {
            Command::New => Some("Ctrl+N"),
            Command::Open => Some("Ctrl+O"),
            Command::Save => Some("Ctrl+S"),
            Command::SaveAs => Some("Ctrl+Shift+S"),
            Command::Exit => Some("Ctrl+Q"),
            Command::Copy => Some("Ctrl+C"),
            Command::Paste => Some("Ctrl+V"),
            Command::SelectAll => Some("Ctrl+A"),
            Command::Font => Some("Ctrl+T"),
            Command::WordWrap => Some("Ctrl+W"),
            Command::AskForHelp => Some("F1"),
            Command::Delete | Command::Theme | Command::Count => None,
        }
    }

    pub fn is_file_command(&self) -> bool {
        matches!(
            self,
            Command::New | Command::Open | Command::Save | Command::SaveAs | Command::Exit
        )
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::Delete | Command::Copy | Command::Paste | Command::SelectAll
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    Edit,
    Format,
    View,
    Help,
}

#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub id: MenuId,
    pub title: &'static str,
    /// Alt+<mnemonic> opens the menu directly.
    pub mnemonic: char,
    pub items: &'static [Command],
}

pub const EDIT_ITEMS: &[Command] = &[
    Command::Delete,
    Command::Copy,
    Command::Paste,
    Command::SelectAll,
];

pub static MENU_BAR: [Menu; 5] = [
    Menu {
        id: MenuId::File,
        title: "File",
        mnemonic: 'f',
        items: &[
            Command::New,
            Command::Open,
            Command::Save,
            Command::SaveAs,
            Command::Exit,
        ],
    },
    Menu {
        id: MenuId::Edit,
        title: "Edit",
        mnemonic: 'e',
        items: EDIT_ITEMS,
    },
    Menu {
        id: MenuId::Format,
        title: "Format",
        mnemonic: 'o',
        items: &[Command::Font, Command::WordWrap],
    },
    Menu {
        id: MenuId::View,
        title: "View",
        mnemonic: 'v',
        items: &[Command::Theme, Command::Count],
    },
    Menu {
        id: MenuId::Help,
        title: "Help",
        mnemonic: 'h',
        items: &[Command::AskForHelp],
    },
];

/// Right-click menu of the body.
pub const CONTEXT_MENU: &[Command] = EDIT_ITEMS;

pub fn menu_index(id: MenuId) -> usize {
    MENU_BAR
        .iter()
        .position(|menu| menu.id == id)
        .unwrap_or_default()
}

pub fn menu_by_mnemonic(ch: char) -> Option<&'static Menu> {
    let ch = ch.to_ascii_lowercase();
    MENU_BAR.iter().find(|menu| menu.mnemonic == ch)
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
