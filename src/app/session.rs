// IncidentLog - app/session.rs
//
// Menu state machine. `State::step` is a pure transition from one line of
// user input to the next state plus at most one store command and one
// user-facing message. The controller performs the command; nothing here
// touches the store or the terminal.

use crate::core::filter::FilterQuery;
use crate::core::model::{Field, Incident};
use crate::core::record;
use crate::util::constants;

// =============================================================================
// States
// =============================================================================

/// Where the interactive session is waiting for input.
///
/// Viewing is not a waiting state: choosing it from the menu issues
/// `Command::ViewAll` and returns straight to `Menu`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// Main menu, waiting for a choice.
    #[default]
    Menu,

    /// Add flow, collecting fields.
    Add(AddStep),

    /// Filter flow, collecting the field selector and query.
    Filter(FilterStep),

    /// Session finished.
    Exit,
}

/// Progress through the add flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStep {
    Area,
    Type { area: String },
}

/// Progress through the filter flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStep {
    Field,
    Query(Field),
}

// =============================================================================
// Transition outputs
// =============================================================================

/// Store work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load every incident and display it.
    ViewAll,

    /// Append the incident to the store.
    Append(Incident),

    /// Load every incident and display those matching the query.
    Filter(FilterQuery),
}

/// Notices shown to the user after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Heading printed when the add flow starts.
    AddHeading,
    /// A required field was empty after trimming.
    EmptyInput,
    /// The menu choice was not recognised.
    InvalidChoice,
    /// The filter field option was not recognised.
    InvalidFilterOption,
    /// An incident was appended.
    Added,
    /// The session is ending.
    Farewell,
}

/// Result of feeding one input line to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub command: Option<Command>,
    pub message: Option<Message>,
}

impl Transition {
    fn to(next: State) -> Self {
        Self {
            next,
            command: None,
            message: None,
        }
    }

    fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }
}

// =============================================================================
// Menu choices
// =============================================================================

/// The four main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Filter,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Anything that is not one of the four integers,
    /// including non-numeric text, is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            constants::MENU_VIEW => Some(Self::View),
            constants::MENU_ADD => Some(Self::Add),
            constants::MENU_FILTER => Some(Self::Filter),
            constants::MENU_EXIT => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse the filter flow's field option (1 = area, 2 = incident type).
/// Read as an integer, the same way as menu choices.
pub fn parse_field_option(input: &str) -> Option<Field> {
    match input.trim().parse::<i64>().ok()? {
        constants::FILTER_BY_AREA => Some(Field::Area),
        constants::FILTER_BY_TYPE => Some(Field::Type),
        _ => None,
    }
}

// =============================================================================
// Transitions
// =============================================================================

impl State {
    /// Returns true once the session has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Exit)
    }

    /// Feed one line of input (without its terminator) to this state.
    pub fn step(self, input: &str) -> Transition {
        match self {
            State::Menu => match MenuChoice::parse(input) {
                Some(MenuChoice::View) => Transition::to(State::Menu).with_command(Command::ViewAll),
                Some(MenuChoice::Add) => {
                    Transition::to(State::Add(AddStep::Area)).with_message(Message::AddHeading)
                }
                Some(MenuChoice::Filter) => Transition::to(State::Filter(FilterStep::Field)),
                Some(MenuChoice::Exit) => Transition::to(State::Exit).with_message(Message::Farewell),
                None => Transition::to(State::Menu).with_message(Message::InvalidChoice),
            },

            State::Add(step) => {
                let value = record::trim(input);
                if value.is_empty() {
                    return Transition::to(State::Add(step)).with_message(Message::EmptyInput);
                }
                match step {
                    AddStep::Area => Transition::to(State::Add(AddStep::Type {
                        area: value.to_string(),
                    })),
                    AddStep::Type { area } => Transition::to(State::Menu)
                        .with_command(Command::Append(Incident::new(area, value)))
                        .with_message(Message::Added),
                }
            }

            State::Filter(FilterStep::Field) => match parse_field_option(input) {
                Some(field) => Transition::to(State::Filter(FilterStep::Query(field))),
                None => Transition::to(State::Menu).with_message(Message::InvalidFilterOption),
            },

            State::Filter(FilterStep::Query(field)) => Transition::to(State::Menu)
                .with_command(Command::Filter(FilterQuery::new(field, record::trim(input)))),

            State::Exit => Transition::to(State::Exit),
        }
    }
}
