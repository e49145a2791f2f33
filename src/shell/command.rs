// src/shell/command.rs
//!
//! Fixed command table
//!

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ls,
    Pwd,
    Cd,
    Back,
    Copy,
    Move,
    Rm,
    Mkdir,
    Touch,
    Search,
    Perms,
    Chmod,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::Ls,
        Command::Pwd,
        Command::Cd,
        Command::Back,
        Command::Copy,
        Command::Move,
        Command::Rm,
        Command::Mkdir,
        Command::Touch,
        Command::Search,
        Command::Perms,
        Command::Chmod,
        Command::Help,
        Command::Exit,
    ];

    /// Exact, case-sensitive lookup
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Ls => "ls",
            Command::Pwd => "pwd",
            Command::Cd => "cd",
            Command::Back => "back",
            Command::Copy => "copy",
            Command::Move => "move",
            Command::Rm => "rm",
            Command::Mkdir => "mkdir",
            Command::Touch => "touch",
            Command::Search => "search",
            Command::Perms => "perms",
            Command::Chmod => "chmod",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Arguments required after the command name
    pub fn min_args(self) -> usize {
        match self {
            Command::Copy | Command::Move | Command::Chmod => 2,
            Command::Cd
            | Command::Rm
            | Command::Mkdir
            | Command::Touch
            | Command::Search
            | Command::Perms => 1,
            Command::Ls | Command::Pwd | Command::Back | Command::Help | Command::Exit => 0,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Ls => "Usage: ls [path]",
            Command::Pwd => "Usage: pwd",
            Command::Cd => "cd requires a directory argument",
            Command::Back => "Usage: back",
            Command::Copy => "Usage: copy <src> <dest>",
            Command::Move => "Usage: move <src> <dest>",
            Command::Rm => "Usage: rm <path>",
            Command::Mkdir => "Usage: mkdir <dir>",
            Command::Touch => "Usage: touch <file>",
            Command::Search => "Usage: search <name> [start_dir]",
            Command::Perms => "Usage: perms <path>",
            Command::Chmod => "Usage: chmod <path> <3-digit-octal>",
            Command::Help => "Usage: help",
            Command::Exit => "Usage: exit",
        }
    }
}
