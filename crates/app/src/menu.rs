//! Function-key dropdown menus.

/// Dropdown menus in menu bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    Edit,
    Help,
}

/// What a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    Save,
    Exit,
    Cut,
    Copy,
    Paste,
    SelectAll,
    About,
}

/// Menus shown in the menu bar, left to right.
pub const MENUS: [MenuId; 3] = [MenuId::File, MenuId::Edit, MenuId::Help];

impl MenuId {
    /// Menu opened by function key `n` (F1 is File).
    pub fn from_fkey(n: u8) -> Option<Self> {
        MENUS.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Function key number that opens this menu
    pub fn fkey(self) -> u8 {
        match self {
            MenuId::File => 1,
            MenuId::Edit => 2,
            MenuId::Help => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuId::File => "File",
            MenuId::Edit => "Edit",
            MenuId::Help => "Help",
        }
    }

    pub fn items(self) -> &'static [MenuAction] {
        match self {
            MenuId::File => &[
                MenuAction::New,
                MenuAction::Open,
                MenuAction::Save,
                MenuAction::Exit,
            ],
            MenuId::Edit => &[
                MenuAction::Cut,
                MenuAction::Copy,
                MenuAction::Paste,
                MenuAction::SelectAll,
            ],
            MenuId::Help => &[MenuAction::About],
        }
    }

    /// Menu bar caption, e.g. "F1-File"
    pub fn caption(self) -> String {
        format!("F{}-{}", self.fkey(), self.label())
    }

    /// Dropdown rows, e.g. "F2-Copy"
    pub fn item_captions(self) -> Vec<String> {
        self.items()
            .iter()
            .enumerate()
            .map(|(i, action)| format!("F{}-{}", i + 1, action.label()))
            .collect()
    }
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::New => "New",
            MenuAction::Open => "Open",
            MenuAction::Save => "Save",
            MenuAction::Exit => "Exit",
            MenuAction::Cut => "Cut",
            MenuAction::Copy => "Copy",
            MenuAction::Paste => "Paste",
            MenuAction::SelectAll => "Select All",
            MenuAction::About => "About",
        }
    }
}
