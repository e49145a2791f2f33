// src/shell/help.rs

pub const BANNER: &str = "File Explorer. Type 'help' for commands.";

pub const HELP: &str = "
Commands:
  ls [path]                 - List directory (current dir if omitted)
  pwd                       - Show current directory
  cd <dir>                  - Change directory (relative or absolute)
  back                      - Go to parent directory
  copy <src> <dest>         - Copy file/directory (recursive)
  move <src> <dest>         - Move (rename) file/directory
  rm <path>                 - Delete file or directory (recursive)
  mkdir <dir>               - Create directory
  touch <file>              - Create empty file (like touch)
  search <name> [start_dir] - Recursively search for filename (or partial match)
  perms <path>              - Show owner/group/others rwx permissions
  chmod <path> <xyz>        - Set permissions using octal (e.g. 755)
  help                      - Show this help
  exit                      - Exit program";

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' for list of commands.";

pub const GOODBYE: &str = "Goodbye.";

/// Prompt shown when the session directory no longer resolves
pub const UNKNOWN_DIR: &str = "unknown";
