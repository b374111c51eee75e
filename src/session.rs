// File: src/session.rs
use crate::core::deck::Deck;
use crate::core::picker::{CardPicker, PickOrder};
use crate::errors::{FlashcardError, Result};
use crate::io::{LineIo, RecordingIo};
use crate::persistence::{load_cards, save_cards};
use crate::quiz;
use crate::transcript::SessionTranscript;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// Commands are matched literally, the way they appear in the prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Command::Add),
            "remove" => Some(Command::Remove),
            "import" => Some(Command::Import),
            "export" => Some(Command::Export),
            "ask" => Some(Command::Ask),
            "exit" => Some(Command::Exit),
            "log" => Some(Command::Log),
            "hardest card" => Some(Command::HardestCard),
            "reset stats" => Some(Command::ResetStats),
            _ => None,
        }
    }
}

/// Startup options for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Card file loaded before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Card file written when the user exits.
    pub export_to: Option<PathBuf>,
    pub order: PickOrder,
    /// Seed for the random picker; ignored for sequential order.
    pub seed: Option<u64>,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive loop: read an action, run it, repeat until `exit`.
pub struct CommandLoop<I> {
    io: RecordingIo<I>,
    deck: Deck,
    picker: Box<dyn CardPicker>,
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
}

impl<I: LineIo> CommandLoop<I> {
    pub fn new(io: I, config: SessionConfig) -> Self {
        Self {
            io: RecordingIo::new(io),
            deck: Deck::new(),
            picker: config.order.build(config.seed),
            import_from: config.import_from,
            export_to: config.export_to,
        }
    }

    /// Replaces the picker chosen by the config.
    pub fn with_picker(mut self, picker: Box<dyn CardPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn transcript(&self) -> &SessionTranscript {
        self.io.transcript()
    }

    pub fn into_io(self) -> I {
        self.io.into_inner()
    }

    /// Runs until `exit` or until input runs out.
    /// Only failures of the console itself are returned as errors.
    pub fn run(&mut self) -> Result<SessionEnd> {
        if let Some(path) = self.import_from.clone() {
            self.import_file(&path)?;
        }

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(SessionEnd::Exit),
                Err(FlashcardError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(SessionEnd::EndOfInput);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        self.print(ACTION_PROMPT)?;
        let action = self.input()?;

        let Some(command) = Command::parse(&action) else {
            debug!("Unknown action {:?}", action);
            self.print(&format!("The action \"{}\" is not supported.", action))?;
            return Ok(Flow::Continue);
        };

        debug!("Dispatching {:?}", command);
        match command {
            Command::Add => self.add()?,
            Command::Remove => self.remove()?,
            Command::Import => {
                let path = self.ask_file_name()?;
                self.import_file(&path)?;
            }
            Command::Export => {
                let path = self.ask_file_name()?;
                self.export_file(&path)?;
            }
            Command::Ask => self.ask()?,
            Command::Log => self.save_log()?,
            Command::HardestCard => self.hardest_card()?,
            Command::ResetStats => {
                self.deck.reset_stats();
                self.print("Card statistics have been reset.")?;
            }
            Command::Exit => {
                self.print("Bye bye!")?;
                if let Some(path) = self.export_to.clone() {
                    self.export_file(&path)?;
                }
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print(&mut self, line: &str) -> Result<()> {
        self.io.write_line(line)?;
        Ok(())
    }

    fn input(&mut self) -> Result<String> {
        self.io.read_line()?.ok_or(FlashcardError::InputClosed)
    }

    fn ask_file_name(&mut self) -> Result<PathBuf> {
        self.print("File name:")?;
        Ok(PathBuf::from(self.input()?))
    }

    fn add(&mut self) -> Result<()> {
        self.print("The card:")?;
        let term = loop {
            let term = self.input()?;
            if !self.deck.term_exists(&term) {
                break term;
            }
            self.print(&format!("The card \"{}\" already exists. Try again:", term))?;
        };

        self.print("The definition of the card:")?;
        let definition = loop {
            let definition = self.input()?;
            if self.deck.definition_owner(&definition).is_none() {
                break definition;
            }
            self.print(&format!("The definition \"{}\" already exists. Try again:", definition))?;
        };

        self.deck.add(&term, &definition);
        self.print(&format!("The pair (\"{}\":\"{}\") has been added.", term, definition))
    }

    fn remove(&mut self) -> Result<()> {
        self.print("Which card?")?;
        let term = self.input()?;
        if self.deck.remove(&term) {
            self.print("The card has been removed.")
        } else {
            self.print(&format!("Can't remove \"{}\": there is no such card.", term))
        }
    }

    fn import_file(&mut self, path: &Path) -> Result<()> {
        match load_cards(path) {
            Ok(cards) => {
                let count = self.deck.import_merge(cards);
                info!("Imported {} cards from {}", count, path.display());
                self.print(&format!("{} cards have been loaded.", count))
            }
            Err(FlashcardError::FileNotFound(_)) => {
                warn!("Card file {} does not exist", path.display());
                self.print("File not found.")
            }
            Err(FlashcardError::Io(e)) => {
                warn!("Failed to read {}: {}", path.display(), e);
                self.print(&format!("Could not read \"{}\".", path.display()))
            }
            Err(e) => {
                warn!("Failed to import {}: {}", path.display(), e);
                self.print(&format!("File \"{}\" does not contain valid cards.", path.display()))
            }
        }
    }

    fn export_file(&mut self, path: &Path) -> Result<()> {
        let snapshot = self.deck.export_snapshot();
        match save_cards(&snapshot, path) {
            Ok(()) => {
                info!("Exported {} cards to {}", snapshot.len(), path.display());
                self.print(&format!("{} cards have been saved.", snapshot.len()))
            }
            Err(e) => {
                warn!("Failed to export to {}: {}", path.display(), e);
                self.print(&format!("Could not write to \"{}\".", path.display()))
            }
        }
    }

    fn save_log(&mut self) -> Result<()> {
        let path = self.ask_file_name()?;
        match self.io.transcript().save_to(&path) {
            Ok(()) => {
                info!("Saved session log to {}", path.display());
                self.print("The log has been saved.")
            }
            Err(e) => {
                warn!("Failed to save log to {}: {}", path.display(), e);
                self.print(&format!("Could not write to \"{}\".", path.display()))
            }
        }
    }

    fn ask(&mut self) -> Result<()> {
        self.print("How many times to ask?")?;
        let line = self.input()?;
        let times: i64 = match line.trim().parse() {
            Ok(times) => times,
            Err(_) => {
                debug!("Ignoring ask with non-numeric count {:?}", line);
                return Ok(());
            }
        };
        if times <= 0 {
            return Ok(());
        }
        if self.deck.is_empty() {
            return self.print("There are no cards to ask.");
        }

        self.picker.begin_round();
        for _ in 0..times {
            let idx = self.picker.pick(self.deck.len());
            let Some(card) = self.deck.card_at(idx) else {
                continue;
            };
            let term = card.term.clone();

            self.print(&quiz::question(&term))?;
            let guess = self.input()?;
            if let Some(verdict) = quiz::grade(&mut self.deck, &term, &guess) {
                self.print(&verdict.to_string())?;
            }
        }
        Ok(())
    }

    fn hardest_card(&mut self) -> Result<()> {
        let hardest = self.deck.hardest_cards();
        match hardest.terms.as_slice() {
            [] => self.print("There are no cards with errors."),
            [term] => self.print(&format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, hardest.mistakes
            )),
            terms => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
                self.print(&format!(
                    "The hardest cards are {}. You have {} errors answering them.",
                    quoted.join(", "),
                    hardest.mistakes
                ))
            }
        }
    }
}
