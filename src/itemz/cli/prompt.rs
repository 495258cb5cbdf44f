use colored::Colorize;
use itemz::error::{ItemzError, Result};
use itemz::model::{Item, ItemPatch, NewItem};
use std::io::{self, BufRead, IsTerminal, Write};

/// Where answers come from.
pub trait Prompter {
    /// Ask for one line of text. An empty answer yields `default` when there is one.
    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Tell the user an answer was rejected.
    fn reject(&mut self, message: &str);
}

/// Pick a prompter for the process stdin: dialoguer on a terminal, plain lines otherwise.
pub fn for_stdin() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TermPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn reject(&mut self, message: &str) {
        eprintln!("{} {}", ">>".red(), message.red());
    }
}

fn prompt_error(e: dialoguer::Error) -> ItemzError {
    ItemzError::Prompt(format!("Failed to get user input: {}", e))
}

/// Reads answers line by line; used when stdin is piped.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "? {}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(ItemzError::Prompt("input closed before an answer was given".into()));
        }
        writeln!(self.output)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(default) => format!("{} ({}): ", label, default),
            None => format!("{}: ", label),
        };
        let answer = self.ask(&prompt)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{} {} ", question, hint))?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.reject("Please answer y or n"),
            }
        }
    }

    fn reject(&mut self, message: &str) {
        let _ = writeln!(self.output, ">> {}", message);
    }
}

/// One question in a form.
#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub default: Option<String>,
    pub empty_message: &'static str,
}

impl Field {
    pub fn new(key: &'static str, label: &'static str, empty_message: &'static str) -> Self {
        Self {
            key,
            label,
            default: None,
            empty_message,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

/// Answers in field order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Answers(Vec<(&'static str, String)>);

impl Answers {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn into_patch(self) -> ItemPatch {
        self.0
            .into_iter()
            .fold(ItemPatch::new(), |patch, (k, v)| patch.field(k, v))
    }
}

/// A fixed sequence of required text fields, asked in order.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Empty answers are rejected and the same field is asked again.
    pub fn fill(&self, prompter: &mut dyn Prompter) -> Result<Answers> {
        let mut answers = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let answer = loop {
                let answer = prompter.input(field.label, field.default.as_deref())?;
                if !answer.is_empty() {
                    break answer;
                }
                prompter.reject(field.empty_message);
            };
            answers.push((field.key, answer));
        }
        Ok(Answers(answers))
    }
}

/// Name and description, pre-filled from `current` when editing.
pub fn item_form(current: Option<&Item>) -> Form {
    Form::new()
        .field(
            Field::new("name", "Enter name", "Please enter a name")
                .with_default(current.map(|item| item.name.clone())),
        )
        .field(
            Field::new("description", "Enter description", "Please enter a description")
                .with_default(current.map(|item| item.description.clone())),
        )
}

pub fn new_item(answers: &Answers) -> NewItem {
    NewItem::new(
        answers.get("name").unwrap_or_default(),
        answers.get("description").unwrap_or_default(),
    )
}
