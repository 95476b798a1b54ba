//! REPL settings.

/// How the interactive loop presents itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before reading each line.
    pub prompt: String,
    /// Print the version banner on start.
    pub banner: bool,
    /// Dump the syntax tree of each line before its result.
    pub show_ast: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "lispy> ".to_string(),
            banner: true,
            show_ast: false,
        }
    }
}

impl ReplConfig {
    /// Apply `repl`/`eval` flags. Returns the first flag not understood.
    pub fn apply_flags<'a>(&mut self, flags: impl IntoIterator<Item = &'a str>) -> Result<(), &'a str> {
        for flag in flags {
            match flag {
                "--ast" => self.show_ast = true,
                "--quiet" | "-q" => self.banner = false,
                other => return Err(other),
            }
        }
        Ok(())
    }
}
