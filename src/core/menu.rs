//! Menu identifiers
//!
//! Each menu is a closed enum so the dispatcher match is exhaustive: adding
//! an entry without handling it fails to compile.

use colored::Colorize;

/// A fixed list of choices shown in a single-select prompt.
pub trait MenuOption: Copy + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Prompt shown above the list
    const PROMPT: &'static str;

    /// Text shown for this option
    fn label(&self) -> String;

    /// Labels for every option, in display order
    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|option| option.label()).collect()
    }

    /// Option at `index`, if the prompt returned a valid position
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Top-level dashboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainChoice {
    System,
    Files,
    Processes,
    Network,
    Monitor,
    Exit,
}

impl MainChoice {
    pub fn id(&self) -> &'static str {
        match self {
            MainChoice::System => "system",
            MainChoice::Files => "files",
            MainChoice::Processes => "processes",
            MainChoice::Network => "network",
            MainChoice::Monitor => "monitor",
            MainChoice::Exit => "exit",
        }
    }
}

impl MenuOption for MainChoice {
    const ALL: &'static [Self] = &[
        MainChoice::System,
        MainChoice::Files,
        MainChoice::Processes,
        MainChoice::Network,
        MainChoice::Monitor,
        MainChoice::Exit,
    ];

    const PROMPT: &'static str = "What would you like to do?";

    fn label(&self) -> String {
        match self {
            MainChoice::System => "📊 System Information".green().to_string(),
            MainChoice::Files => "📁 File Operations".blue().to_string(),
            MainChoice::Processes => "⚙️  Process Management".yellow().to_string(),
            MainChoice::Network => "🌐 Network Information".magenta().to_string(),
            MainChoice::Monitor => "📈 System Monitor".cyan().to_string(),
            MainChoice::Exit => "🚪 Exit".red().to_string(),
        }
    }
}

/// File Operations submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChoice {
    List,
    Disk,
    Large,
    Back,
}

impl MenuOption for FileChoice {
    const ALL: &'static [Self] = &[
        FileChoice::List,
        FileChoice::Disk,
        FileChoice::Large,
        FileChoice::Back,
    ];

    const PROMPT: &'static str = "Select file operation:";

    fn label(&self) -> String {
        match self {
            FileChoice::List => "List current directory",
            FileChoice::Disk => "Show disk usage",
            FileChoice::Large => "Find large files",
            FileChoice::Back => "Back to main menu",
        }
        .to_string()
    }
}

/// Process Management submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessChoice {
    List,
    TopCpu,
    TopMemory,
    Back,
}

impl MenuOption for ProcessChoice {
    const ALL: &'static [Self] = &[
        ProcessChoice::List,
        ProcessChoice::TopCpu,
        ProcessChoice::TopMemory,
        ProcessChoice::Back,
    ];

    const PROMPT: &'static str = "Select process operation:";

    fn label(&self) -> String {
        match self {
            ProcessChoice::List => "Show running processes",
            ProcessChoice::TopCpu => "Show top processes by CPU",
            ProcessChoice::TopMemory => "Show memory usage",
            ProcessChoice::Back => "Back to main menu",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_main_menu_has_six_distinct_entries() {
        assert_eq!(MainChoice::ALL.len(), 6);
        let ids: HashSet<_> = MainChoice::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(MainChoice::ALL.last(), Some(&MainChoice::Exit));
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(FileChoice::from_index(0), Some(FileChoice::List));
        assert_eq!(FileChoice::from_index(3), Some(FileChoice::Back));
        assert_eq!(FileChoice::from_index(4), None);
        assert_eq!(ProcessChoice::from_index(2), Some(ProcessChoice::TopMemory));
    }

    #[test]
    fn test_labels_follow_display_order() {
        let labels = ProcessChoice::labels();
        assert_eq!(labels.len(), ProcessChoice::ALL.len());
        assert_eq!(labels[0], "Show running processes");
        assert_eq!(labels[3], "Back to main menu");
        assert!(MainChoice::labels()[5].contains("Exit"));
    }
}
