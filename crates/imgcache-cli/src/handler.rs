//! Command handler for the interactive shell

use imgcache::{Image, ImageCache};

/// Outcome of one input line
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Text to print
    Text(String),
    /// Input could not be handled
    Error(String),
    /// Leave the shell
    Quit,
}

pub struct CommandHandler {
    cache: ImageCache,
}

impl CommandHandler {
    pub fn new(cache: ImageCache) -> Self {
        Self { cache }
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(cmd) => cmd.to_lowercase(),
            None => return Reply::Text(String::new()),
        };
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "add" => self.handle_add(&args),
            "get" => self.handle_get(&args),
            "show" => self.handle_show(),
            "stats" => self.handle_stats(),
            "clear" => self.handle_clear(),
            "help" => Reply::Text(HELP.to_string()),
            "quit" | "exit" => Reply::Quit,
            _ => Reply::Error(format!("unknown command '{}', try 'help'", command)),
        }
    }

    fn handle_add(&mut self, args: &[&str]) -> Reply {
        let (name, size) = match args {
            [name, size] => (*name, *size),
            _ => return Reply::Error("usage: add <name> <size>".to_string()),
        };

        let size: u64 = match size.parse() {
            Ok(size) => size,
            Err(_) => return Reply::Error(format!("invalid size '{}'", size)),
        };

        match self.cache.push(Image::new(name, size)) {
            Ok(true) => Reply::Text(format!(
                "cached {} ({} of {} available)",
                name,
                self.cache.available_capacity(),
                self.cache.capacity()
            )),
            Ok(false) => Reply::Text(format!(
                "rejected {}: {} exceeds capacity {}",
                name,
                size,
                self.cache.capacity()
            )),
            Err(e) => Reply::Error(format!("cache fault: {}", e)),
        }
    }

    fn handle_get(&self, args: &[&str]) -> Reply {
        match args {
            [name] => match self.cache.get(name) {
                Some(image) => Reply::Text(image.to_string()),
                None => Reply::Text(format!("{} not cached", name)),
            },
            _ => Reply::Error("usage: get <name>".to_string()),
        }
    }

    fn handle_show(&self) -> Reply {
        let mut out = format!(
            "capacity: {}\navailable: {}\ncached: {}",
            self.cache.capacity(),
            self.cache.available_capacity(),
            self.cache.cached_count()
        );
        for (rank, image) in self.cache.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", rank + 1, image));
        }
        Reply::Text(out)
    }

    fn handle_stats(&self) -> Reply {
        let stats = self.cache.stats();
        Reply::Text(format!(
            "inserts: {}\nevictions: {}\nrejections: {}\nrepushes: {}",
            stats.inserts(),
            stats.evictions(),
            stats.rejections(),
            stats.repushes()
        ))
    }

    fn handle_clear(&mut self) -> Reply {
        self.cache.clear();
        Reply::Text("cleared".to_string())
    }
}

const HELP: &str = "\
commands:
  add <name> <size>  cache an image, evicting least recent ones as needed
  get <name>         show a cached image
  show               capacity and images from most to least recent
  stats              push counters
  clear              drop every cached image
  quit               leave";
