// IncidentLog - app/controller.rs
//
// Interactive loop. Reads one line per prompt, feeds it to the session
// state machine, runs the resulting store command and hands all output
// to the renderer. Each command reopens the store file.

use crate::app::session::{Command, State};
use crate::core::filter;
use crate::core::record;
use crate::platform::store;
use crate::ui::render::Renderer;
use crate::util::error::{IncidentLogError, Result};
use std::io::BufRead;
use std::path::PathBuf;

/// Drives an interactive session over `input` and `renderer`.
pub struct Controller<R, V> {
    input: R,
    renderer: V,
    store_path: PathBuf,
}

impl<R: BufRead, V: Renderer> Controller<R, V> {
    pub fn new(input: R, renderer: V, store_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            renderer,
            store_path: store_path.into(),
        }
    }

    /// Consume the controller and return the renderer.
    pub fn into_renderer(self) -> V {
        self.renderer
    }

    /// Run until the user exits or input ends.
    ///
    /// Store and terminal I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::default();
        tracing::info!(store = %self.store_path.display(), "Session started");

        while !state.is_terminal() {
            self.renderer
                .prompt(&state)
                .map_err(IncidentLogError::terminal("write prompt"))?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed; ending session");
                break;
            };

            let transition = state.step(&line);
            tracing::debug!(next = ?transition.next, command = ?transition.command, "Transition");

            if let Some(command) = transition.command {
                self.execute(command)?;
            }
            if let Some(message) = transition.message {
                self.renderer
                    .message(message)
                    .map_err(IncidentLogError::terminal("write message"))?;
            }
            state = transition.next;
        }

        tracing::info!("Session ended");
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(IncidentLogError::terminal("read input"))?;
        if read == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        Ok(Some(record::strip_line_ending(&text).to_string()))
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ViewAll => {
                let incidents = store::load_all(&self.store_path)?;
                self.renderer
                    .display(&incidents)
                    .map_err(IncidentLogError::terminal("display incidents"))?;
            }
            Command::Append(incident) => {
                store::append(&self.store_path, &incident)?;
            }
            Command::Filter(query) => {
                let incidents = store::load_all(&self.store_path)?;
                let total = incidents.len();
                let matches = filter::apply_filter(incidents, &query);
                tracing::debug!(
                    field = %query.field,
                    total,
                    matched = matches.len(),
                    "Filter applied"
                );
                self.renderer
                    .render_filtered(&matches)
                    .map_err(IncidentLogError::terminal("display matches"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::Message;
    use crate::core::model::Incident;
    use std::io::{self, Cursor};
    use std::path::Path;

    /// Structured record of everything the controller asked to render.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Prompt(State),
        Message(Message),
        Display(Vec<Incident>),
        Filtered(Vec<Incident>),
    }

    #[derive(Debug, Default)]
    struct Recording {
        events: Vec<Event>,
    }

    impl Recording {
        fn listings(&self) -> Vec<&Event> {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Display(_) | Event::Filtered(_)))
                .collect()
        }

        fn messages(&self) -> Vec<Message> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Message(m) => Some(*m),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for Recording {
        fn prompt(&mut self, state: &State) -> io::Result<()> {
            self.events.push(Event::Prompt(state.clone()));
            Ok(())
        }
        fn message(&mut self, message: Message) -> io::Result<()> {
            self.events.push(Event::Message(message));
            Ok(())
        }
        fn display(&mut self, incidents: &[Incident]) -> io::Result<()> {
            self.events.push(Event::Display(incidents.to_vec()));
            Ok(())
        }
        fn render_filtered(&mut self, matches: &[Incident]) -> io::Result<()> {
            self.events.push(Event::Filtered(matches.to_vec()));
            Ok(())
        }
    }

    fn run_session(store: &Path, input: &str) -> Recording {
        let mut controller = Controller::new(
            Cursor::new(input.as_bytes().to_vec()),
            Recording::default(),
            store,
        );
        controller.run().unwrap();
        controller.into_renderer()
    }

    #[test]
    fn test_add_then_view_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("incidents.txt");

        let rec = run_session(&store, "2\nElm St\nGraffiti\n1\n3\n2\nGraf\n3\n1\nOak\n4\n");
        let elm = vec![Incident::new("Elm St", "Graffiti")];
        assert_eq!(
            rec.listings(),
            vec![
                &Event::Display(elm.clone()),
                &Event::Filtered(elm),
                &Event::Filtered(vec![]),
            ]
        );
        assert_eq!(
            rec.messages(),
            vec![Message::AddHeading, Message::Added, Message::Farewell]
        );
    }

    #[test]
    fn test_empty_add_input_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("incidents.txt");

        let rec = run_session(&store, "2\n   \nElm St\n\nGraffiti\n4\n");
        let area_prompts = rec
            .events
            .iter()
            .filter(|e| **e == Event::Prompt(State::Add(crate::app::session::AddStep::Area)))
            .count();
        assert_eq!(area_prompts, 2);
        assert_eq!(
            rec.messages()
                .iter()
                .filter(|m| **m == Message::EmptyInput)
                .count(),
            2
        );
        assert_eq!(
            store::load_all(&store).unwrap(),
            vec![Incident::new("Elm St", "Graffiti")]
        );
    }

    #[test]
    fn test_invalid_choices_do_not_touch_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("incidents.txt");

        let rec = run_session(&store, "7\nhello\n3\n9\n4\n");
        assert!(rec.listings().is_empty());
        assert_eq!(
            rec.messages(),
            vec![
                Message::InvalidChoice,
                Message::InvalidChoice,
                Message::InvalidFilterOption,
                Message::Farewell,
            ]
        );
        assert!(!store.exists());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("incidents.txt");

        // Input closes in the middle of the add flow.
        let rec = run_session(&store, "2\nElm St\n");
        assert!(!rec.messages().contains(&Message::Farewell));
        assert!(!store.exists());
    }

    #[test]
    fn test_crlf_input_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("incidents.txt");

        run_session(&store, "2\r\nElm St\r\nGraffiti\r\n4\r\n");
        assert_eq!(
            store::load_all(&store).unwrap(),
            vec![Incident::new("Elm St", "Graffiti")]
        );
    }

    #[test]
    fn test_unreadable_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as the store.
        let mut controller = Controller::new(
            Cursor::new(b"1\n4\n".to_vec()),
            Recording::default(),
            dir.path(),
        );
        let result = controller.run();
        assert!(matches!(result, Err(IncidentLogError::Store(_))));
    }
}
