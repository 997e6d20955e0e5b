//! Interactive shell commands
//!
//! One command per input line. Screen-specific arguments (tabs, filters)
//! are kept as text and parsed when the command runs against a screen.

use std::str::FromStr;

use crate::model::{AppView, Category, MediaType, UnknownCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Quit,
    Show,

    // Onboarding
    Toggle(Category),
    Continue,

    // Daily glimmer
    Reveal,
    Skip,
    Accept,

    // Challenge card
    Media(MediaType),
    Capture,
    Retry,
    Describe(String),
    Recategorize(Category),
    Public(bool),
    Submit,
    Cancel,

    // Feed
    Next,
    Previous,
    Swipe(f64),
    Tap,
    Like,
    Filter(String),
    Author,

    // Shared by feed and profile
    Tab(String),

    // Profile
    Profile(String),
    Follow,
    Back,

    // Nav bar
    Go(AppView),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

fn arg<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest)
    }
}

fn parse_view(s: &str) -> Result<AppView, ParseError> {
    match s.to_ascii_lowercase().as_str() {
        "create" => Ok(AppView::Daily),
        other => other.parse().map_err(ParseError::Invalid),
    }
}

fn parse_category(s: &str) -> Result<Category, ParseError> {
    s.parse().map_err(|e: UnknownCategory| ParseError::Invalid(e.to_string()))
}

fn parse_switch(s: &str) -> Result<bool, ParseError> {
    match s.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(ParseError::Usage("public on|off")),
    }
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let cmd = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            "" | "show" | "look" => ShellCommand::Show,

            "toggle" | "pick" => {
                let category = arg(rest, "toggle <category>")?;
                ShellCommand::Toggle(parse_category(category)?)
            }
            "continue" | "start" => ShellCommand::Continue,

            "reveal" => ShellCommand::Reveal,
            "skip" => ShellCommand::Skip,
            "accept" | "complete" => ShellCommand::Accept,

            "media" => {
                let media = arg(rest, "media video|photo")?;
                ShellCommand::Media(media.parse().map_err(ParseError::Invalid)?)
            }
            "capture" | "record" | "shoot" => ShellCommand::Capture,
            "retry" => ShellCommand::Retry,
            "describe" => ShellCommand::Describe(rest.to_string()),
            "category" => {
                let category = arg(rest, "category <category>")?;
                ShellCommand::Recategorize(parse_category(category)?)
            }
            "public" => ShellCommand::Public(parse_switch(arg(rest, "public on|off")?)?),
            "submit" | "publish" => ShellCommand::Submit,
            "cancel" => ShellCommand::Cancel,

            "next" | "n" => ShellCommand::Next,
            "prev" | "previous" | "p" => ShellCommand::Previous,
            "swipe" => {
                let delta = arg(rest, "swipe <delta-y>")?;
                ShellCommand::Swipe(
                    delta
                        .parse()
                        .map_err(|_| ParseError::Invalid(format!("Not a number: {}", delta)))?,
                )
            }
            "tap" | "pause" | "play" => ShellCommand::Tap,
            "like" => ShellCommand::Like,
            "filter" => ShellCommand::Filter(arg(rest, "filter all|<category>")?.to_string()),
            "author" => ShellCommand::Author,

            "tab" => ShellCommand::Tab(arg(rest, "tab <name>")?.to_string()),

            "profile" => {
                if rest.is_empty() {
                    ShellCommand::Go(AppView::Profile)
                } else {
                    ShellCommand::Profile(rest.to_string())
                }
            }
            "follow" | "unfollow" => ShellCommand::Follow,
            "back" => ShellCommand::Back,

            "go" => ShellCommand::Go(parse_view(arg(rest, "go home|create|profile")?)?),
            "home" => ShellCommand::Go(AppView::Feed),
            "create" => ShellCommand::Go(AppView::Daily),

            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(cmd)
    }
}

pub const HELP: &str = "\
Commands:
  show                      redraw the current screen
  go home|create|profile    use the navigation bar
  quit                      leave Glimmerly

Onboarding:   toggle <category>, continue
Daily:        reveal, skip, accept
Challenge:    media video|photo, capture, retry, describe <text>,
              category <category>, public on|off, submit, cancel
Feed:         next, prev, swipe <dy>, tap, like, tab <for-you|friends|popular>,
              filter all|<category>, author
Profile:      profile <user-id>, tab all|videos|photos, follow, back";
