// IncidentLog - ui/render.rs
//
// Everything the interactive session prints goes through `Renderer`.
// `TerminalRenderer` writes the text protocol to any `Write`; tests can
// substitute their own implementation and assert on structured calls.

use crate::app::session::{AddStep, FilterStep, Message, State};
use crate::core::model::Incident;
use crate::ui::theme;
use std::io::{self, Write};

/// Output side of the interactive session.
pub trait Renderer {
    /// Print the prompt for `state` (nothing for terminal states).
    fn prompt(&mut self, state: &State) -> io::Result<()>;

    /// Print a notice produced by a transition.
    fn message(&mut self, message: Message) -> io::Result<()>;

    /// Print every incident, numbered from 1, or a "no incidents" notice.
    fn display(&mut self, incidents: &[Incident]) -> io::Result<()>;

    /// Print filter results, numbered from 1, or a "no matching incidents" notice.
    fn render_filtered(&mut self, matches: &[Incident]) -> io::Result<()>;
}

/// Plain-text renderer with optional colour.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    colour: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        let painted = theme::paint(text, theme::HEADING, self.colour);
        writeln!(self.out, "\n{painted}")
    }

    fn list(&mut self, title: &str, incidents: &[Incident], empty_notice: &str) -> io::Result<()> {
        self.heading(title)?;
        for (idx, incident) in incidents.iter().enumerate() {
            let area = theme::paint(&incident.area, theme::AREA, self.colour);
            let kind = theme::paint(&incident.kind, theme::INCIDENT_TYPE, self.colour);
            writeln!(self.out, "{}. {area} - {kind}", idx + 1)?;
        }
        if incidents.is_empty() {
            writeln!(self.out, "{empty_notice}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn prompt(&mut self, state: &State) -> io::Result<()> {
        match state {
            State::Menu => {
                self.heading("Incident Reporting Menu")?;
                write!(
                    self.out,
                    "1. View all incidents\n2. Add new incident\n3. Filter incidents\n4. Exit\nChoose option: "
                )?;
            }
            State::Add(AddStep::Area) => write!(
                self.out,
                "Area where the incident occurred (e.g., Vasile Alecsandri Street): "
            )?,
            State::Add(AddStep::Type { .. }) => write!(
                self.out,
                "Type of incident (e.g., Non-functional streetlight): "
            )?,
            State::Filter(FilterStep::Field) => write!(
                self.out,
                "\nFilter by: 1. Area  2. Incident Type\nChoose option: "
            )?,
            State::Filter(FilterStep::Query(field)) => {
                write!(self.out, "Enter {} to filter: ", field.label())?
            }
            State::Exit => {}
        }
        // Prompts have no newline; flush so they appear before input is read.
        self.out.flush()
    }

    fn message(&mut self, message: Message) -> io::Result<()> {
        match message {
            Message::AddHeading => self.heading("Add New Incident")?,
            Message::EmptyInput => writeln!(self.out, "Input cannot be empty. Please try again.")?,
            Message::InvalidChoice => writeln!(self.out, "Invalid option. Please try again.")?,
            Message::InvalidFilterOption => writeln!(self.out, "Invalid option.")?,
            Message::Added => {
                let painted =
                    theme::paint("Incident added successfully!", theme::SUCCESS, self.colour);
                writeln!(self.out, "{painted}")?
            }
            Message::Farewell => writeln!(self.out, "Exiting...")?,
        }
        self.out.flush()
    }

    fn display(&mut self, incidents: &[Incident]) -> io::Result<()> {
        self.list("Reported Incidents:", incidents, "No incidents found.")
    }

    fn render_filtered(&mut self, matches: &[Incident]) -> io::Result<()> {
        self.list("Matching Incidents:", matches, "No matching incidents found.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Field;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut TerminalRenderer<Vec<u8>>) -> io::Result<()>,
    {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_display_numbers_from_one() {
        let out = render(|r| {
            r.display(&[
                Incident::new("Main Street", "Broken streetlight"),
                Incident::new("Elm St", "Graffiti"),
            ])
        });
        assert_eq!(
            out,
            "\nReported Incidents:\n1. Main Street - Broken streetlight\n2. Elm St - Graffiti\n"
        );
    }

    #[test]
    fn test_display_empty_notice() {
        let out = render(|r| r.display(&[]));
        assert!(out.ends_with("No incidents found.\n"), "got: {out:?}");
    }

    #[test]
    fn test_filtered_empty_notice_is_distinct() {
        let out = render(|r| r.render_filtered(&[]));
        assert!(out.contains("No matching incidents found."), "got: {out:?}");
        assert!(!out.contains("No incidents found."));
    }

    #[test]
    fn test_menu_prompt_text() {
        let out = render(|r| r.prompt(&State::Menu));
        assert_eq!(
            out,
            "\nIncident Reporting Menu\n1. View all incidents\n2. Add new incident\n3. Filter incidents\n4. Exit\nChoose option: "
        );
    }

    #[test]
    fn test_query_prompt_names_field() {
        let out = render(|r| r.prompt(&State::Filter(FilterStep::Query(Field::Type))));
        assert_eq!(out, "Enter incident type to filter: ");
    }

    #[test]
    fn test_exit_prompt_is_silent() {
        assert_eq!(render(|r| r.prompt(&State::Exit)), "");
    }

    #[test]
    fn test_coloured_listing_keeps_text() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true);
        renderer
            .display(&[Incident::new("Elm St", "Graffiti")])
            .unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("Elm St"));
        assert!(out.contains("Graffiti"));
        // crossterm suppresses escapes itself when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(out.contains('\u{1b}'));
        }
    }
}
