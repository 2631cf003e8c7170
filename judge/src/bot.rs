use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use omok::{Board, Coordinate, Okay, Request, Stone};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::player::Strategy;

/// How to start a bot, loaded from a JSON file such as
/// `{"nick": "random", "cmd": ["target/release/random_bot", "--seed", "3"]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    /// The executable, followed by its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        let config: PlayerConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse player config '{}'", path.display()))?;
        if config.cmd.is_empty() {
            anyhow::bail!("Player config '{}' has an empty 'cmd'", path.display());
        }
        Ok(config)
    }
}

/// A strategy running in a child process, which answers one JSON
/// [`Request`] per line on its stdin with one JSON line on its stdout.
pub struct BotProcess {
    pub name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

impl BotProcess {
    pub fn spawn(config: &PlayerConfig) -> anyhow::Result<Self> {
        let (executable, args) = config
            .cmd
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No command given for bot '{}'", config.nick))?;
        let mut child = Command::new(executable)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start bot '{}'", config.nick))?;
        debug!(bot = config.nick, pid = child.id(), "Started bot");

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("Could not access stdin of '{}'", config.nick))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow::anyhow!("Could not access stdout of '{}'", config.nick))?;
        Ok(Self {
            name: config.nick.clone(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        })
    }

    fn send(&mut self, req: &Request) -> anyhow::Result<()> {
        let mut req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", bot = &self.name, request = %req_json);
        req_json.push('\n');
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.flush()?;
        Ok(())
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        req: &Request,
    ) -> anyhow::Result<T> {
        self.send(req)?;
        self.buf.clear();
        if self.stdout.read_line(&mut self.buf)? == 0 {
            anyhow::bail!("Bot '{}' closed its output", self.name);
        }
        let serialized_response = self.buf.trim_end();
        trace!(name: "Received response", bot = &self.name, response = %serialized_response);
        let response = serde_json::from_str::<T>(serialized_response).with_context(|| {
            format!(
                "Bot '{}' sent an invalid response: {}",
                self.name, serialized_response
            )
        })?;
        self.buf.clear();
        Ok(response)
    }
}

impl Strategy for BotProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self, stone: Stone, board_size: usize) -> anyhow::Result<()> {
        let _: Okay = self.perform_request(&Request::NewGame { stone, board_size })?;
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, stone: Stone) -> anyhow::Result<Coordinate> {
        self.perform_request(&Request::PlaceStone {
            stone,
            board_size: board.size(),
            stones: board.to_stones_vec(),
        })
    }
}

impl Drop for BotProcess {
    fn drop(&mut self) {
        // The bot may already be gone, in which case there's nobody left to tell
        if self.send(&Request::Bye).is_ok() {
            let _ = self.child.wait();
        } else {
            let _ = self.child.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_player_config() {
        let path = std::env::temp_dir().join(format!("omok_player_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"nick": "random", "cmd": ["random_bot", "--seed", "3"]}"#)
            .unwrap();
        let config = PlayerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            config,
            PlayerConfig {
                nick: String::from("random"),
                cmd: vec![
                    String::from("random_bot"),
                    String::from("--seed"),
                    String::from("3")
                ],
            }
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = std::env::temp_dir().join("omok_no_such_player_config.json");
        assert!(PlayerConfig::load(&path).is_err());
    }

    #[test]
    fn requests_are_json_lines() {
        let req = Request::PlaceStone {
            stone: Stone::White,
            board_size: 3,
            stones: vec![omok::PlacedStone {
                x: 0,
                y: 1,
                stone: Stone::Black,
            }],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"type":"PlaceStone","stone":"white","board_size":3,"stones":[{"x":0,"y":1,"stone":"black"}]}"#
        );
        assert_eq!(serde_json::to_string(&Okay()).unwrap(), "[]");
        let coordinate: Coordinate = serde_json::from_str(r#"{"x":3,"y":4}"#).unwrap();
        assert_eq!(coordinate, Coordinate::new(3, 4));
    }
}
