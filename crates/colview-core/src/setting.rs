// ABOUTME: Typed option values and the notifications emitted when they change.
// ABOUTME: Signals carry a namespaced key such as "setopt.draw_borders".

use crate::Settings;

/// Prefix shared by all option-change signal keys
pub const SETOPT_PREFIX: &str = "setopt.";

/// Key of the notification emitted when the cursor moves
pub const MOVE_KEY: &str = "move";

/// A single option together with its value
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    Perspective(String),
    ColumnRatios(Vec<f64>),
    PreviewDirectories(bool),
    PreviewFiles(bool),
    DrawBorders(bool),
    DrawBookmarkBorders(bool),
    ShowHiddenBookmarks(bool),
    CollapsePreview(bool),
}

impl Setting {
    /// Option name as it appears in the config file
    pub fn name(&self) -> &'static str {
        match self {
            Setting::Perspective(_) => "perspective",
            Setting::ColumnRatios(_) => "column_ratios",
            Setting::PreviewDirectories(_) => "preview_directories",
            Setting::PreviewFiles(_) => "preview_files",
            Setting::DrawBorders(_) => "draw_borders",
            Setting::DrawBookmarkBorders(_) => "draw_bookmark_borders",
            Setting::ShowHiddenBookmarks(_) => "show_hidden_bookmarks",
            Setting::CollapsePreview(_) => "collapse_preview",
        }
    }

    pub fn signal_key(&self) -> String {
        setopt_key(self.name())
    }
}

/// Signal key for changes to the named option
pub fn setopt_key(option: &str) -> String {
    format!("{SETOPT_PREFIX}{option}")
}

/// Notification delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// An option is about to change from `previous` to `value`
    SettingChanged { previous: Setting, value: Setting },
    /// The cursor moved to another entry
    Moved,
}

impl Signal {
    pub fn key(&self) -> String {
        match self {
            Signal::SettingChanged { value, .. } => value.signal_key(),
            Signal::Moved => MOVE_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Current value of the option that `setting` names
    pub fn current(&self, setting: &Setting) -> Setting {
        match setting {
            Setting::Perspective(_) => Setting::Perspective(self.perspective.clone()),
            Setting::ColumnRatios(_) => Setting::ColumnRatios(self.column_ratios.clone()),
            Setting::PreviewDirectories(_) => Setting::PreviewDirectories(self.preview_directories),
            Setting::PreviewFiles(_) => Setting::PreviewFiles(self.preview_files),
            Setting::DrawBorders(_) => Setting::DrawBorders(self.draw_borders),
            Setting::DrawBookmarkBorders(_) => {
                Setting::DrawBookmarkBorders(self.draw_bookmark_borders)
            }
            Setting::ShowHiddenBookmarks(_) => {
                Setting::ShowHiddenBookmarks(self.show_hidden_bookmarks)
            }
            Setting::CollapsePreview(_) => Setting::CollapsePreview(self.collapse_preview),
        }
    }

    /// Build the change notification for `value` without storing it
    pub fn change(&self, value: Setting) -> Signal {
        Signal::SettingChanged {
            previous: self.current(&value),
            value,
        }
    }

    /// Store a value
    pub fn apply(&mut self, value: Setting) {
        match value {
            Setting::Perspective(v) => self.perspective = v,
            Setting::ColumnRatios(v) => self.column_ratios = v,
            Setting::PreviewDirectories(v) => self.preview_directories = v,
            Setting::PreviewFiles(v) => self.preview_files = v,
            Setting::DrawBorders(v) => self.draw_borders = v,
            Setting::DrawBookmarkBorders(v) => self.draw_bookmark_borders = v,
            Setting::ShowHiddenBookmarks(v) => self.show_hidden_bookmarks = v,
            Setting::CollapsePreview(v) => self.collapse_preview = v,
        }
    }
}
