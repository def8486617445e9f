//! Line-oriented text console for driving a [`Board`].
//!
//! The framing follows the Go Text Protocol: each request is one line with an
//! optional numeric id, and each response is `=<id> <message>` on success or
//! `?<id> <message>` on failure, followed by a blank line. An illegal move is
//! reported with `?` and the session carries on, so a front end can show the
//! message and ask for another move.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `reset` - Reset every quad to the starting layout
//! - `show [q]` - Render one quad, or the whole board
//! - `get <q> <r,c>` - Marker on a square
//! - `check <r,c> <r,c>` - Shape and range test, ignoring board contents
//! - `move <q> <r,c> <r,c> <p1|p2> [passive|aggressive]` - Move a piece
//! - `legal <q> <p1|p2>` - List every move the player could make on a quad
//! - `rules [standard|strict]` - Show or change the rule set
//!
//! ## Example
//!
//! ```
//! use quadgame::board::Board;
//! use quadgame::console::Console;
//!
//! let mut console = Console::new(Board::default());
//! let mut out = Vec::new();
//! console.run("move 0 3,0 2,1 p1\nget 0 2,1\n".as_bytes(), &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("= b"));
//! ```

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::marker::{MoveKind, Player};
use crate::rules::{self, RuleSet};
use crate::square::Square;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "check",
    "get",
    "known_command",
    "legal",
    "list_commands",
    "move",
    "name",
    "quit",
    "reset",
    "rules",
    "show",
    "version",
];

/// Console session state.
pub struct Console {
    board: Board,
    /// Echo rejected moves to stderr
    verbose: bool,
}

impl Console {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success && self.verbose {
                eprintln!("rejected: {command_line} ({message})");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "quadgame".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "reset" => {
                self.board.reset();
                (true, String::new())
            }

            "show" => match args.first() {
                None => (true, format!("\n{}", self.board)),
                Some(q) => match quad_arg(q) {
                    Ok(index) => match self.board.quad(index) {
                        Ok(quad) => (true, format!("\n{quad}")),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(msg) => (false, msg),
                },
            },

            "get" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let parsed = quad_arg(args[0]).and_then(|q| Ok((q, square_arg(args[1])?)));
                let (index, sq) = match parsed {
                    Ok(v) => v,
                    Err(msg) => return (false, msg),
                };
                match self.board.quad(index) {
                    Ok(quad) => match quad.get(sq.row, sq.col) {
                        Ok(marker) => (true, marker.to_string()),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(e) => (false, e.to_string()),
                }
            }

            "check" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let (start, end) = match (square_arg(args[0]), square_arg(args[1])) {
                    (Ok(s), Ok(e)) => (s, e),
                    (Err(msg), _) | (_, Err(msg)) => return (false, msg),
                };
                // Geometry is the same on every quad
                match self.board.quad(0) {
                    Ok(quad) => match quad.check_move(start, end) {
                        Ok(valid) => (true, valid.to_string()),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(e) => (false, e.to_string()),
                }
            }

            "move" => {
                if args.len() < 4 {
                    return (false, "missing arguments".to_string());
                }
                let index = match quad_arg(args[0]) {
                    Ok(i) => i,
                    Err(msg) => return (false, msg),
                };
                let (start, end) = match (square_arg(args[1]), square_arg(args[2])) {
                    (Ok(s), Ok(e)) => (s, e),
                    (Err(msg), _) | (_, Err(msg)) => return (false, msg),
                };
                let Some(player) = Player::parse(args[3]) else {
                    return (false, format!("invalid player: {}", args[3]));
                };
                let kind = match args.get(4) {
                    None => MoveKind::Passive,
                    Some(k) => match MoveKind::parse(k) {
                        Some(kind) => kind,
                        None => return (false, format!("invalid move kind: {k}")),
                    },
                };

                match self.board.move_piece(index, start, end, player, kind) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "legal" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let index = match quad_arg(args[0]) {
                    Ok(i) => i,
                    Err(msg) => return (false, msg),
                };
                let Some(player) = Player::parse(args[1]) else {
                    return (false, format!("invalid player: {}", args[1]));
                };
                match self.board.quad(index) {
                    Ok(quad) => {
                        let moves: Vec<String> = rules::legal_moves(quad, player)
                            .iter()
                            .map(|(s, e)| format!("{},{}-{},{}", s.row, s.col, e.row, e.col))
                            .collect();
                        (true, moves.join(" "))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "rules" => match args.first() {
                None => (true, self.board.rules().to_string()),
                Some(name) => match name.parse::<RuleSet>() {
                    Ok(rules) => {
                        self.board.set_rules(rules);
                        (true, String::new())
                    }
                    Err(msg) => (false, msg),
                },
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn quad_arg(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .map_err(|_| format!("invalid quad index: {arg}"))
}

fn square_arg(arg: &str) -> Result<Square, String> {
    arg.parse::<Square>().map_err(|e| e.to_string())
}
